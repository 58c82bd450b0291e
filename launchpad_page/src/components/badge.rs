//! Status badge component

use leptos::prelude::*;

use crate::types::ProjectStatus;

/// Pill showing a project's status label in its tone color
#[component]
pub fn StatusBadge(status: ProjectStatus) -> impl IntoView {
    let (label, tone) = status.classify();
    let class = format!("status-badge {}", tone);

    view! {
        <span class=class data-status=status.as_token()>
            {label}
        </span>
    }
}
