//! Hero banner

use leptos::prelude::*;

use super::CtaControl;

/// Marketing headline with the two hero controls
#[component]
pub fn Hero(launch_target: Option<String>, projects_target: Option<String>) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-inner">
                <h1 class="hero-title">"Launch Your Token with Confidence"</h1>
                <p class="hero-subtitle">"The most trusted launchpad for new blockchain projects"</p>
                <div class="hero-actions">
                    <CtaControl label="Launch Project" target=launch_target class="btn btn-light" />
                    <CtaControl label="View Projects" target=projects_target class="btn btn-outline" />
                </div>
            </div>
        </section>
    }
}
