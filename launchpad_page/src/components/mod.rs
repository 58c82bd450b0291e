//! Leptos UI components for rendering the landing page.
//!
//! Each component is a Leptos `#[component]` function over owned data. None
//! of them hold state or touch the network, so rendering is a single pass.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── Hero
//! │   └── CtaControl x2 (Launch Project, View Projects)
//! ├── StatsStrip
//! ├── FeatureGrid
//! │   └── FeaturePanel (per feature)
//! ├── DashboardPreview
//! └── ProjectGrid
//!     ├── CtaControl (View All)
//!     └── ProjectCard (per project)
//!         ├── StatusBadge
//!         └── CtaControl (View Details)
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but can be
//! rendered on their own:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use launchpad_page::components::FeaturePanel;
//!
//! view! { <FeaturePanel feature=my_feature index=0 /> }
//! ```

mod badge;
mod controls;
mod dashboard;
mod document;
mod feature_panel;
mod features;
mod hero;
mod icons;
mod project_card;
mod projects;
mod stats;

pub use badge::StatusBadge;
pub use controls::CtaControl;
pub use dashboard::DashboardPreview;
pub use document::PageDocument;
pub use feature_panel::FeaturePanel;
pub use features::FeatureGrid;
pub use hero::Hero;
pub use icons::*;
pub use project_card::ProjectCard;
pub use projects::{CardEntry, ProjectGrid};
pub use stats::StatsStrip;
