use crate::components::skill_selector::SkillSelector;
use leptos::prelude::*;

#[component]
pub fn SelectSkillsPage() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto p-4 md:p-8">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body gap-4">
                    <h2 class="card-title text-2xl">"Select Your Skills"</h2>
                    <p class="text-base-content/70">
                        "Choose the technologies you want to learn. We'll find courses for each one."
                    </p>
                    <SkillSelector />
                </div>
            </div>
        </div>
    }
}
