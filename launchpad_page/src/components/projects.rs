//! Project grid section

use leptos::prelude::*;

use super::{CtaControl, ProjectCard};
use crate::types::{Project, ProjectTab};

/// A project together with its resolved "View Details" target.
#[derive(Clone, Debug)]
pub struct CardEntry {
    /// Record to render
    pub project: Project,
    /// Hook result for this card
    pub details_target: Option<String>,
}

/// Heading, "View All" control and one [`ProjectCard`] per entry.
///
/// An empty `entries` list yields an empty grid, no placeholder.
#[component]
pub fn ProjectGrid(
    entries: Vec<CardEntry>,
    tab: ProjectTab,
    view_all_target: Option<String>,
) -> impl IntoView {
    view! {
        <section id="projects" class="container section" data-tab=tab.as_token()>
            <div class="projects-header">
                <h2 class="section-title">{heading(tab)}</h2>
                <CtaControl label="View All" target=view_all_target class="btn-link" arrow=true />
            </div>
            <div class="card-grid project-grid">
                {entries.into_iter().enumerate().map(|(index, entry)| {
                    view! {
                        <ProjectCard
                            project=entry.project
                            index=index
                            details_target=entry.details_target
                        />
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

fn heading(tab: ProjectTab) -> String {
    match tab.status() {
        None => "Featured Projects".to_string(),
        Some(status) => format!("{} Projects", status.label()),
    }
}
