//! Feature panel - one capability with its bullet list

use leptos::prelude::*;

use super::Icon;
use crate::types::{FeatureDescriptor, IconKind};

/// Panel for a single [`FeatureDescriptor`]. Bullets keep catalog order.
#[component]
pub fn FeaturePanel(feature: FeatureDescriptor, index: usize) -> impl IntoView {
    view! {
        <article class="feature-panel" data-index=index.to_string()>
            <div class="feature-heading">
                <div class="feature-icon-badge">
                    <Icon kind=feature.icon size="32" />
                </div>
                <h3 class="feature-title">{feature.title}</h3>
            </div>
            <p class="feature-description">{feature.description}</p>
            <ul class="feature-items">
                {feature.items.into_iter().enumerate().map(|(i, item)| {
                    view! {
                        <li class="feature-item" data-index=i.to_string()>
                            <Icon kind=IconKind::CaretRight class="feature-marker" />
                            <span>{item}</span>
                        </li>
                    }
                }).collect::<Vec<_>>()}
            </ul>
        </article>
    }
}
