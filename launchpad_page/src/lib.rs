//! # launchpad-page
//!
//! Leptos SSR renderer for the token launchpad landing page.
//!
//! The page is a pure function of two static catalogs: the Project Catalog
//! and the Feature Catalog. This crate turns them into a single
//! self-contained HTML document using [Leptos](https://leptos.dev/)
//! server-side rendering.
//!
//! ## Features
//!
//! - **Zero JavaScript Runtime** - Pure SSR, no hydration needed
//! - **Validated Catalogs** - Unknown statuses are rejected when a catalog is
//!   built, never rendered unstyled
//! - **Swappable Data** - Default catalogs ship with the crate; tests and hosts
//!   can substitute their own
//! - **Hookable Controls** - Call-to-action controls stay inert until a host
//!   wires a [`hooks::PageHooks`] slot
//!
//! ## Quick Start
//!
//! ```rust
//! use launchpad_page::{render_page, PageOptions, catalog::Catalog};
//!
//! let catalog = Catalog::default();
//! let html = render_page(&catalog, &PageOptions::default());
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("DeFi Protocol"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Records and closed enums (status, tab, icon)
//! - [`catalog`] - Default data, JSON loading, validation, tab filtering
//! - [`hooks`] - Callback slots for the page controls
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//! - [`error`] - Catalog errors
//!
//! ## Leptos 0.8 SSR
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod components;
pub mod error;
pub mod hooks;
pub mod styles;
pub mod types;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use hooks::PageHooks;
pub use types::{FeatureDescriptor, Project, ProjectStatus, ProjectTab};

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::debug;

/// Default `<title>` of the page.
pub const DEFAULT_TITLE: &str = "Token Launchpad";

/// Page Composer configuration.
///
/// # Example
///
/// ```rust
/// use launchpad_page::{PageOptions, PageHooks, ProjectTab};
///
/// let options = PageOptions {
///     tab: ProjectTab::Live,
///     hooks: PageHooks::default().on_view_all(|| Some("/projects".into())),
///     ..Default::default()
/// };
/// assert_eq!(options.title, "Token Launchpad");
/// ```
#[derive(Clone, Debug)]
pub struct PageOptions {
    /// Document `<title>`
    pub title: String,
    /// Slice of the Project Catalog the project grid shows
    pub tab: ProjectTab,
    /// Targets for the call-to-action controls
    pub hooks: PageHooks,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            tab: ProjectTab::default(),
            hooks: PageHooks::default(),
        }
    }
}

/// Render the complete landing page.
///
/// Both catalogs are rendered in declaration order. With the default
/// [`ProjectTab::Featured`] every project gets a card. The result is
/// deterministic: the same inputs always produce the same bytes.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use launchpad_page::{render_page, PageOptions, catalog::Catalog};
///
/// let empty = Catalog::new(vec![], vec![]).unwrap();
/// let html = render_page(&empty, &PageOptions::default());
/// assert!(!html.contains("class=\"project-card\""));
/// ```
pub fn render_page(catalog: &Catalog, options: &PageOptions) -> String {
    debug!(
        projects = catalog.projects().len(),
        features = catalog.features().len(),
        tab = %options.tab,
        "rendering page"
    );

    let doc = view! {
        <PageDocument catalog=catalog.clone() options=options.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::components::{FeaturePanel, ProjectCard, StatusBadge};
    use crate::types::IconKind;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    fn project(name: &str, status: ProjectStatus) -> Project {
        Project {
            name: name.into(),
            description: format!("{name} description"),
            image: format!("https://img.example/{name}.png"),
            total_raise: "10 USDT".into(),
            token_price: "1 USDT".into(),
            start_time: "2024-01-01 00:00 UTC".into(),
            status,
            tags: vec![],
        }
    }

    #[test]
    fn renders_default_page() {
        let html = render_page(&default_catalog(), &PageOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Token Launchpad"));
        assert!(html.contains("Launch Your Token with Confidence"));
        assert_eq!(count(&html, "class=\"project-card\""), 3);
        assert_eq!(count(&html, "class=\"feature-panel\""), 6);
        assert_eq!(count(&html, "class=\"feature-item\""), 24);
        assert_eq!(count(&html, "class=\"stat\""), 3);
        assert_eq!(count(&html, "class=\"dashboard-tile\""), 4);
    }

    #[test]
    fn default_page_shows_literal_catalog_text() {
        let html = render_page(&default_catalog(), &PageOptions::default());

        for text in [
            "MetaVerse Token",
            "DeFi Protocol",
            "GameFi Project",
            "1,000,000 USDT",
            "0.1 USDT",
            "2024-03-18 10:00 UTC",
            "Meme Launchpad",
            "NFT Launchpad",
            "Utility Launchpad",
            "Liquidity Pools",
            "Staking",
            "Gamified Engagement",
            "150+",
            "50,000+",
            "$100M+",
            "Reward Tracking",
        ] {
            assert!(html.contains(text), "missing {text:?}");
        }

        // DeFi Protocol card carries the Live badge and its own terms
        let start = html.find("DeFi Protocol").unwrap();
        let end = html.find("GameFi Project").unwrap();
        let card = &html[start..end];
        assert!(card.contains("status-success"));
        assert!(card.contains(">Live<"));
        assert!(card.contains("1,000,000 USDT"));
        assert!(card.contains("0.1 USDT"));
    }

    #[test]
    fn empty_project_catalog_renders_no_cards() {
        let catalog = Catalog::new(vec![], crate::catalog::default_features()).unwrap();
        let html = render_page(&catalog, &PageOptions::default());

        assert_eq!(count(&html, "class=\"project-card\""), 0);
        assert!(html.contains("Featured Projects"));
        assert_eq!(count(&html, "class=\"feature-panel\""), 6);
    }

    #[test]
    fn project_cards_keep_catalog_order() {
        let names = ["Zeta", "Alpha", "Mu", "Beta", "Omega"];
        let projects = names
            .iter()
            .map(|n| project(n, ProjectStatus::Live))
            .collect();
        let catalog = Catalog::new(projects, vec![]).unwrap();
        let html = render_page(&catalog, &PageOptions::default());

        assert_eq!(count(&html, "class=\"project-card\""), names.len());
        let positions: Vec<usize> = names
            .iter()
            .map(|n| html.find(&format!(">{n}<")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn feature_panel_renders_items_in_order() {
        let feature = FeatureDescriptor {
            title: "Bridge".into(),
            description: "Move assets".into(),
            icon: IconKind::Zap,
            items: vec!["third".into(), "first".into(), "second".into()],
        };
        let html = view! { <FeaturePanel feature=feature index=0 /> }.to_html();

        assert_eq!(count(&html, "class=\"feature-item\""), 3);
        assert_eq!(count(&html, "data-icon=\"caret_right\""), 3);
        let third = html.find("third").unwrap();
        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        assert!(third < first && first < second);
    }

    #[test]
    fn status_badge_uses_classifier() {
        for status in ProjectStatus::ALL {
            let html = view! { <StatusBadge status=status /> }.to_html();
            let (label, class) = status.classify();
            assert!(html.contains(class));
            assert!(html.contains(&label));
        }
    }

    #[test]
    fn card_fields_render_in_fixed_order() {
        let html = view! {
            <ProjectCard project=project("Orbit", ProjectStatus::Ended) index=0 details_target=None />
        }
        .to_html();

        // Anchor on element text, not attribute values: the image `src`
        // and `alt` also contain the project name
        let order = [
            "<img ",
            ">Orbit</h3>",
            ">Ended<",
            ">Orbit description<",
            ">Total Raise<",
            ">Token Price<",
            ">2024-01-01 00:00 UTC<",
            ">View Details",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|s| html.find(s).unwrap_or_else(|| panic!("missing {s:?} in {html}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        assert!(html.contains("status-neutral"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let catalog = default_catalog();
        let options = PageOptions::default();
        assert_eq!(render_page(&catalog, &options), render_page(&catalog, &options));
    }

    #[test]
    fn inert_controls_render_as_buttons() {
        let html = render_page(&default_catalog(), &PageOptions::default());

        assert_eq!(count(&html, "<button"), 6);
        assert!(!html.contains("<a "));
        assert!(html.contains("Launch Project"));
        assert!(html.contains("View Projects"));
        assert!(html.contains("View All"));
    }

    #[test]
    fn wired_hooks_render_links() {
        let options = PageOptions {
            hooks: PageHooks::default()
                .on_launch_project(|| Some("/launch".into()))
                .on_view_details(|p| Some(format!("/projects/{}", p.slug()))),
            ..Default::default()
        };
        let html = render_page(&default_catalog(), &options);

        assert!(html.contains("href=\"/launch\""));
        assert!(html.contains("href=\"/projects/defi-protocol\""));
        assert!(html.contains("href=\"/projects/metaverse-token\""));
        // View Projects and View All stay inert
        assert_eq!(count(&html, "<button"), 2);
    }

    #[test]
    fn tab_narrows_project_grid() {
        let options = PageOptions {
            tab: ProjectTab::Live,
            ..Default::default()
        };
        let html = render_page(&default_catalog(), &options);

        assert_eq!(count(&html, "class=\"project-card\""), 1);
        assert!(html.contains("Live Projects"));
        assert!(!html.contains("GameFi Project"));
        // Feature catalog is unaffected by the tab
        assert_eq!(count(&html, "class=\"feature-panel\""), 6);
    }

    #[test]
    fn custom_title_is_escaped() {
        let options = PageOptions {
            title: "Launch <beta>".into(),
            ..Default::default()
        };
        let html = render_page(&default_catalog(), &options);
        assert!(html.contains("Launch &lt;beta&gt;"));
    }
}
