//! Project card - one launchpad offering
//!
//! Field order is fixed: image, name + badge, description, raise/price
//! block, start time, then the "View Details" control.

use leptos::prelude::*;

use super::{CtaControl, Icon, StatusBadge};
use crate::types::{IconKind, Project};

/// Self-contained card for a single [`Project`]
#[component]
pub fn ProjectCard(
    project: Project,
    /// Position in the rendered grid
    index: usize,
    /// Resolved "View Details" target
    details_target: Option<String>,
) -> impl IntoView {
    let image = project.image.clone();
    let alt = project.name.clone();

    view! {
        <article class="project-card" data-index=index.to_string()>
            <img class="project-image" src=image alt=alt />
            <div class="project-body">
                <div class="project-heading">
                    <h3 class="project-name">{project.name}</h3>
                    <StatusBadge status=project.status />
                </div>
                <p class="project-description">{project.description}</p>
                <div class="project-terms">
                    <div class="project-term">
                        <p class="term-label">"Total Raise"</p>
                        <p class="term-value">{project.total_raise}</p>
                    </div>
                    <div class="project-term">
                        <p class="term-label">"Token Price"</p>
                        <p class="term-value">{project.token_price}</p>
                    </div>
                </div>
                <div class="project-start">
                    <Icon kind=IconKind::Clock size="16" class="icon-leading" />
                    <span>{project.start_time}</span>
                </div>
            </div>
            <div class="project-footer">
                <CtaControl
                    label="View Details"
                    target=details_target
                    class="btn btn-primary btn-block"
                    arrow=true
                />
            </div>
        </article>
    }
}
