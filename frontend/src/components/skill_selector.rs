//! 技能选择器
//!
//! 渲染固定的技能目录，点击切换选中状态；提交后保存到服务端、写入本地缓存并跳到结果页。
//! 选择页与资料页共用。

use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::common::ErrorAlert;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use skillmatch::SkillSelection;
use skillmatch::flow;
use skillmatch::skills::catalog;

#[component]
pub fn SkillSelector(
    /// 预选的技能（资料页传入用户已有的技能）
    #[prop(optional)]
    initial: Vec<String>,
) -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let router = use_router();

    let selection = RwSignal::new(initial.into_iter().collect::<SkillSelection>());
    let (is_saving, set_is_saving) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_save = move |_| {
        set_is_saving.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        let current = selection.get_untracked();
        spawn_local(async move {
            match flow::save_selection(&api, auth.token().as_deref(), &current).await {
                Ok(saved) => {
                    let next = auth.skills_saved(saved);
                    router.navigate(next);
                }
                Err(e) => {
                    set_error_msg.set(Some(e.message()));
                    set_is_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-2 md:grid-cols-5 gap-3">
                {catalog()
                    .iter()
                    .map(|&skill| {
                        let selected = move || selection.with(|s| s.contains(skill));
                        view! {
                            <button
                                type="button"
                                class=move || if selected() { "btn btn-primary" } else { "btn btn-outline" }
                                aria-pressed=move || selected().to_string()
                                on:click=move |_| selection.update(|s| s.toggle(skill))
                            >
                                {skill}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <ErrorAlert message=error_msg />

            <button
                class="btn btn-primary w-full"
                on:click=on_save
                disabled=move || is_saving.get() || selection.with(|s| s.is_empty())
            >
                {move || if is_saving.get() {
                    view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                } else {
                    "Continue to Resources".into_any()
                }}
            </button>
        </div>
    }
}
