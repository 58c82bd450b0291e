//! Feature grid section

use leptos::prelude::*;

use super::FeaturePanel;
use crate::types::FeatureDescriptor;

/// Heading plus one [`FeaturePanel`] per catalog entry, in catalog order
#[component]
pub fn FeatureGrid(features: Vec<FeatureDescriptor>) -> impl IntoView {
    view! {
        <section id="features" class="container section">
            <div class="section-header">
                <h2 class="section-title">"Comprehensive Launch Solutions"</h2>
                <p class="section-subtitle">
                    "Everything you need to launch and grow your blockchain project"
                </p>
            </div>
            <div class="card-grid">
                {features.into_iter().enumerate().map(|(index, feature)| {
                    view! { <FeaturePanel feature=feature index=index /> }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
