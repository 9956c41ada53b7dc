use crate::auth::use_auth;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use skillmatch::AppRoute;

/// 顶部导航栏：会话加载中不渲染链接
#[component]
pub fn Navigation() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    // 先离开受保护页面，再清除会话
    let on_logout = move |_| {
        router.navigate(AppRoute::Home);
        auth.logout();
    };

    view! {
        <div class="navbar bg-base-100 shadow-md">
            <div class="flex-1">
                <Link to=AppRoute::Home class="btn btn-ghost text-xl">"IT Skills Matcher"</Link>
            </div>
            <Show when=move || !auth.is_loading()>
                <div class="flex-none gap-2">
                    <Show
                        when=move || auth.is_authenticated()
                        fallback=|| view! {
                            <Link to=AppRoute::Login class="btn btn-ghost">"Login"</Link>
                            <Link to=AppRoute::Register class="btn btn-primary">"Get Started"</Link>
                        }
                    >
                        <Link to=AppRoute::Results class="btn btn-ghost">"My Resources"</Link>
                        <Link to=AppRoute::Profile class="btn btn-ghost">"Profile"</Link>
                        <button on:click=on_logout class="btn btn-outline btn-error">"Logout"</button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
