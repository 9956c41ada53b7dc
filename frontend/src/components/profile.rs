use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::common::{ErrorAlert, LoadingScreen, SuccessAlert, TextField};
use crate::components::skill_selector::SkillSelector;
use leptos::prelude::*;
use leptos::task::spawn_local;
use skillmatch::flow::{self, MSG_PROFILE_UPDATED, ProfileForm};
use skillmatch::shared::Profile;

/// 资料表单状态
#[derive(Clone, Copy)]
struct ProfileFormState {
    username: RwSignal<String>,
    email: RwSignal<String>,
    password: RwSignal<String>,
}

impl ProfileFormState {
    fn new() -> Self {
        Self {
            username: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
        }
    }

    /// 用服务端资料填充，密码始终留空
    fn fill(&self, profile: &Profile) {
        let form = ProfileForm::from_profile(profile);
        self.username.set(form.username);
        self.email.set(form.email);
        self.password.set(form.password);
    }

    fn to_form(&self) -> ProfileForm {
        ProfileForm {
            username: self.username.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();

    let profile = RwSignal::new(Option::<Profile>::None);
    let state = ProfileFormState::new();
    let (load_error, set_load_error) = signal(Option::<String>::None);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);
    let editing_skills = RwSignal::new(false);

    // 初始加载
    {
        let api = api.clone();
        spawn_local(async move {
            match flow::load_profile(&api, auth.token().as_deref()).await {
                Ok(data) => {
                    state.fill(&data);
                    profile.set(Some(data));
                }
                Err(e) => set_load_error.set(Some(e.message())),
            }
        });
    }

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_saving.set(true);

        let api = api.clone();
        let form = state.to_form();
        spawn_local(async move {
            match flow::update_profile(&api, auth.token().as_deref(), &form).await {
                Ok(updated) => {
                    profile.update(|p| {
                        if let Some(p) = p {
                            p.username = updated.username;
                            p.email = updated.email;
                        }
                    });
                    state.password.set(String::new());
                    set_error_msg.set(None);
                    set_success_msg.set(Some(MSG_PROFILE_UPDATED.to_string()));
                }
                Err(e) => {
                    set_success_msg.set(None);
                    set_error_msg.set(Some(e.message()));
                }
            }
            set_is_saving.set(false);
        });
    };

    let skills = move || {
        profile.with(|p| p.as_ref().map(|p| p.selected_skills.clone()).unwrap_or_default())
    };

    view! {
        <Show
            when=move || profile.with(Option::is_some)
            fallback=move || view! {
                <Show when=move || load_error.get().is_some() fallback=|| view! { <LoadingScreen /> }>
                    <div class="max-w-4xl mx-auto p-4 md:p-8">
                        <ErrorAlert message=load_error />
                    </div>
                </Show>
            }
        >
            <div class="max-w-4xl mx-auto p-4 md:p-8 space-y-8">
                <h1 class="text-3xl font-bold">"Profile Settings"</h1>

                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body" on:submit=on_submit.clone()>
                        <h2 class="card-title">"Account Information"</h2>
                        <ErrorAlert message=error_msg />
                        <SuccessAlert message=success_msg />

                        <TextField id="username" label="Username" value=state.username />
                        <TextField id="email" label="Email" input_type="email" value=state.email />
                        <TextField
                            id="password"
                            label="New Password"
                            input_type="password"
                            placeholder="Leave blank to keep current password"
                            value=state.password
                            required=false
                        />

                        <div class="card-actions justify-end mt-4">
                            <button class="btn btn-primary" disabled=move || is_saving.get()>
                                {move || if is_saving.get() {
                                    view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                                } else {
                                    "Save Changes".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <div class="flex items-center justify-between">
                            <h2 class="card-title">"Your Skills"</h2>
                            <button
                                class="btn btn-outline btn-sm"
                                on:click=move |_| editing_skills.update(|v| *v = !*v)
                            >
                                {move || if editing_skills.get() { "Cancel" } else { "Edit Skills" }}
                            </button>
                        </div>

                        <Show
                            when=move || editing_skills.get()
                            fallback=move || view! {
                                <div class="flex flex-wrap gap-2">
                                    <For
                                        each=skills
                                        key=|skill| skill.clone()
                                        children=|skill| view! { <div class="badge badge-primary badge-lg">{skill}</div> }
                                    />
                                </div>
                            }
                        >
                            <SkillSelector initial=profile.with_untracked(|p| {
                                p.as_ref().map(|p| p.selected_skills.clone()).unwrap_or_default()
                            }) />
                        </Show>
                    </div>
                </div>
            </div>
        </Show>
    }
}
