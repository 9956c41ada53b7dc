use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::common::{ErrorAlert, TextField};
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use skillmatch::AppRoute;
use skillmatch::flow::{self, RegisterForm};

/// 注册表单状态
///
/// 使用 `RwSignal` 因为它实现了 `Copy`，可以直接移动进事件闭包。
#[derive(Clone, Copy)]
struct RegisterFormState {
    username: RwSignal<String>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    confirm_password: RwSignal<String>,
}

impl RegisterFormState {
    fn new() -> Self {
        Self {
            username: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            confirm_password: RwSignal::new(String::new()),
        }
    }

    fn to_form(&self) -> RegisterForm {
        RegisterForm {
            username: self.username.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
        }
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let router = use_router();

    let state = RegisterFormState::new();
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = state.to_form();

        // 密码不一致时直接提示，不发请求
        if let Err(e) = form.validate() {
            set_error_msg.set(Some(e.message()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        spawn_local(async move {
            match flow::register(&api, &form).await {
                Ok(signed_in) => {
                    let next = auth.sign_in(signed_in);
                    router.navigate(next);
                }
                Err(e) => {
                    set_error_msg.set(Some(e.message()));
                    set_is_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="hero min-h-[80vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Create your account"</h1>
                    <p class="text-base-content/70">"Tell us who you are, then pick your skills"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert message=error_msg />

                        <TextField id="username" label="Username" placeholder="jane" value=state.username />
                        <TextField id="email" label="Email" input_type="email" placeholder="you@example.com" value=state.email />
                        <TextField id="password" label="Password" input_type="password" placeholder="••••••••" value=state.password />
                        <TextField id="confirm_password" label="Confirm Password" input_type="password" placeholder="••••••••" value=state.confirm_password />

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Creating account..." }.into_any()
                                } else {
                                    "Register".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            "Already have an account? "
                            <Link to=AppRoute::Login class="link link-primary">"Login"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
