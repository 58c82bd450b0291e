//! Root document component - the complete HTML page
//!
//! Composes, top to bottom: hero, stats strip, feature grid, dashboard
//! preview and project grid. Hooks are resolved here so every child
//! component receives plain data.

use leptos::prelude::*;

use super::{CardEntry, DashboardPreview, FeatureGrid, Hero, ProjectGrid, StatsStrip};
use crate::PageOptions;
use crate::catalog::Catalog;
use crate::styles::{CSP, PAGE_CSS};

/// The complete HTML document for the landing page
#[component]
pub fn PageDocument(catalog: Catalog, options: PageOptions) -> impl IntoView {
    let hooks = &options.hooks;
    let launch_target = hooks.launch_project_target();
    let projects_target = hooks.view_projects_target();
    let view_all_target = hooks.view_all_target();

    let entries = catalog
        .projects_for(options.tab)
        .into_iter()
        .map(|project| CardEntry {
            details_target: hooks.view_details_target(&project),
            project,
        })
        .collect::<Vec<_>>();

    let features = catalog.features().to_vec();
    let stats = catalog.stats().to_vec();
    let dashboard_labels = catalog.dashboard_labels().to_vec();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{options.title}</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <main class="page">
                    <Hero launch_target=launch_target projects_target=projects_target />
                    <StatsStrip stats=stats />
                    <FeatureGrid features=features />
                    <DashboardPreview labels=dashboard_labels />
                    <ProjectGrid
                        entries=entries
                        tab=options.tab
                        view_all_target=view_all_target
                    />
                </main>
            </body>
        </html>
    }
}
