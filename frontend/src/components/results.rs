//! 学习资源页
//!
//! 读取已选技能（本地缓存优先，缓存为空时回退到资料），并发查询每个技能的课程。
//! 查询失败的技能不显示；查询成功但没有课程的技能仍然显示一个空分组。

use crate::api::use_api;
use crate::auth::use_auth;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use skillmatch::flow::{self, CourseGroup};
use skillmatch::shared::Course;
use skillmatch::{AppResult, AppRoute};

#[derive(Clone, Debug, PartialEq)]
enum LoadState {
    Loading,
    Failed(String),
    Loaded(Vec<CourseGroup>),
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();

    let load_state = RwSignal::new(LoadState::Loading);

    spawn_local(async move {
        let token = auth.token();
        let result: AppResult<Vec<CourseGroup>> = async {
            let skills = flow::selected_skills(&api, token.as_deref(), auth.cached_skills()).await?;
            log::debug!("[Results] loading courses for {:?}", skills);
            flow::load_courses(&api, token.as_deref(), &skills).await
        }
        .await;

        load_state.set(match result {
            Ok(groups) => LoadState::Loaded(groups),
            Err(e) => LoadState::Failed(e.message()),
        });
    });

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8">
            <h1 class="text-3xl font-bold mb-8">"Your Learning Resources"</h1>
            {move || match load_state.get() {
                LoadState::Loading => view! {
                    <div class="flex flex-col items-center justify-center min-h-[400px] gap-4">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                        <p class="text-lg animate-pulse">"Loading your personalized resources..."</p>
                    </div>
                }
                .into_any(),
                LoadState::Failed(message) => view! {
                    <div class="text-center p-8 space-y-4">
                        <p class="text-error">{message}</p>
                        <Link to=AppRoute::SelectSkills class="btn btn-primary">"Select Skills"</Link>
                    </div>
                }
                .into_any(),
                LoadState::Loaded(groups) if groups.is_empty() => view! {
                    <div class="text-center p-8 space-y-4">
                        <p>"No courses found for your selected skills."</p>
                        <Link to=AppRoute::SelectSkills class="btn btn-primary">"Select Skills"</Link>
                    </div>
                }
                .into_any(),
                LoadState::Loaded(groups) => view! {
                    <div class="space-y-8">
                        {groups.into_iter().map(|group| view! { <SkillCourses group=group /> }).collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn SkillCourses(group: CourseGroup) -> impl IntoView {
    let has_courses = !group.courses.is_empty();
    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body">
                <h2 class="card-title text-2xl">{group.skill}</h2>
                <Show when=move || has_courses fallback=|| view! {
                    <p class="text-base-content/60">"No courses available for this skill yet."</p>
                }>
                    <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                        {group.courses.clone().into_iter().map(|course| view! { <CourseCard course=course /> }).collect_view()}
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn CourseCard(course: Course) -> impl IntoView {
    view! {
        <a
            href=course.url
            target="_blank"
            rel="noopener noreferrer"
            class="block p-4 border border-base-300 rounded-box hover:shadow-md transition-shadow"
        >
            <h3 class="font-medium text-lg mb-2">{course.title}</h3>
            <p class="text-primary mb-2">{course.platform}</p>
            {course.description.map(|d| view! { <p class="text-sm text-base-content/60">{d}</p> })}
        </a>
    }
}
