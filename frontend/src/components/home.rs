use crate::auth::use_auth;
use crate::web::router::Link;
use leptos::prelude::*;
use skillmatch::AppRoute;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show when=move || !auth.is_loading()>
            <div class="hero min-h-[70vh] bg-base-200">
                <div class="hero-content text-center">
                    <Show
                        when=move || auth.is_authenticated()
                        fallback=|| view! {
                            <div class="max-w-md">
                                <h1 class="text-5xl font-bold">"IT Skills Matcher"</h1>
                                <p class="py-6 text-base-content/70">
                                    "Pick the technologies you want to learn and get a curated list of courses for each one."
                                </p>
                                <div class="flex justify-center gap-4">
                                    <Link to=AppRoute::Login class="btn btn-outline">"Login"</Link>
                                    <Link to=AppRoute::Register class="btn btn-primary">"Get Started"</Link>
                                </div>
                            </div>
                        }
                    >
                        <div class="max-w-md">
                            <h1 class="text-5xl font-bold">"Welcome Back!"</h1>
                            <p class="py-6 text-base-content/70">
                                "Your learning resources are waiting for you."
                            </p>
                            <Link to=AppRoute::Results class="btn btn-primary">"View My Resources"</Link>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
