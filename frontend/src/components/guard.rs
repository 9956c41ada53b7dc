//! 受保护页面的包装组件
//!
//! 会话加载中渲染占位；未认证时渲染空内容，并在进入该状态时重定向一次到登录页；
//! 已认证时渲染子内容。

use crate::auth::use_auth;
use crate::components::common::LoadingScreen;
use crate::web::router::use_router;
use leptos::prelude::*;
use skillmatch::{GuardState, RouteGuard};

#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let state = Memo::new(move |_| auth.guard_state());

    // 每个页面实例持有自己的守卫，重复观察同一状态不会重复跳转
    let mut guard = RouteGuard::new();
    Effect::new(move |_| {
        let Some(target) = guard.observe(state.get()) else {
            return;
        };
        // 注销时导航栏已经先跳走了，此时不再重定向
        if router.current_route().get_untracked().requires_auth() {
            router.redirect(target);
        }
    });

    move || match state.get() {
        GuardState::Checking => view! { <LoadingScreen /> }.into_any(),
        GuardState::Denied => ().into_any(),
        GuardState::Allowed => children().into_any(),
    }
}
