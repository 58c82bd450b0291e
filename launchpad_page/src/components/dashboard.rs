//! Dashboard preview - fixed labels, no live data

use leptos::prelude::*;

use super::Icon;
use crate::types::IconKind;

/// "Intuitive Interface" band with the dashboard tile labels
#[component]
pub fn DashboardPreview(labels: Vec<String>) -> impl IntoView {
    view! {
        <section class="dashboard-band">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Intuitive Interface"</h2>
                    <p class="section-subtitle">
                        "Manage your entire project lifecycle from a single dashboard"
                    </p>
                </div>
                <div class="dashboard-panel">
                    <div class="dashboard-heading">
                        <Icon kind=IconKind::LayoutDashboard size="32" class="icon-accent" />
                        <h3>"All-in-One Dashboard"</h3>
                    </div>
                    <div class="dashboard-tiles">
                        {labels.into_iter().map(|label| {
                            view! {
                                <div class="dashboard-tile">
                                    <p>{label}</p>
                                </div>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}
