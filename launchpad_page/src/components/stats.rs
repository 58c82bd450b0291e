//! Stats strip - hardcoded headline metrics

use leptos::prelude::*;

use super::Icon;
use crate::types::Stat;

/// Row of static metrics overlapping the hero's lower edge
#[component]
pub fn StatsStrip(stats: Vec<Stat>) -> impl IntoView {
    view! {
        <section class="container stats-wrap">
            <div class="stats-strip">
                {stats.into_iter().map(|stat| {
                    view! {
                        <div class="stat">
                            <Icon kind=stat.icon size="48" class="stat-icon" />
                            <div>
                                <p class="stat-value">{stat.value}</p>
                                <p class="stat-label">{stat.label}</p>
                            </div>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
