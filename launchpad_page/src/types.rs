//! Page data types for the launchpad landing page.
//!
//! These types define the data model the page is rendered from. They're
//! designed to be:
//!
//! - **Serializable** - catalogs load from JSON via serde
//! - **Closed** - statuses, tabs and icons are enums, so an unknown value is
//!   rejected at load time instead of reaching the page unstyled
//! - **Clone-friendly** - components take owned props without borrowing issues
//!
//! # Example
//!
//! ```rust
//! use launchpad_page::types::{Project, ProjectStatus};
//!
//! let project = Project {
//!     name: "DeFi Protocol".into(),
//!     description: "Cross-chain lending".into(),
//!     image: "https://example.com/defi.png".into(),
//!     total_raise: "1,000,000 USDT".into(),
//!     token_price: "0.1 USDT".into(),
//!     start_time: "2024-03-18 10:00 UTC".into(),
//!     status: "live".parse().unwrap(),
//!     tags: vec![],
//! };
//!
//! assert_eq!(project.status, ProjectStatus::Live);
//! assert_eq!(project.status.label(), "Live");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Lifecycle stage of a project, for display only.
///
/// Values are fixed labels, not a state machine: nothing in the page moves a
/// project from one variant to another. The only way in from text is the
/// validating [`FromStr`] / [`TryFrom`] pair, which serde also goes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProjectStatus {
    /// Sale has not opened yet
    Upcoming,
    /// Sale is open
    Live,
    /// Sale is closed
    Ended,
}

impl ProjectStatus {
    /// All variants in display order.
    pub const ALL: [ProjectStatus; 3] = [Self::Upcoming, Self::Live, Self::Ended];

    /// Lowercase token as it appears in catalog files.
    pub fn as_token(&self) -> &'static str {
        match self {
            ProjectStatus::Upcoming => "upcoming",
            ProjectStatus::Live => "live",
            ProjectStatus::Ended => "ended",
        }
    }

    /// Badge text: the token with its first character uppercased.
    pub fn label(&self) -> String {
        capitalize(self.as_token())
    }

    /// Badge tone class. Blue for upcoming, green for live, gray for ended.
    pub fn style_class(&self) -> &'static str {
        match self {
            ProjectStatus::Upcoming => "status-info",
            ProjectStatus::Live => "status-success",
            ProjectStatus::Ended => "status-neutral",
        }
    }

    /// `(label, style_class)` pair for the status badge.
    pub fn classify(&self) -> (String, &'static str) {
        (self.label(), self.style_class())
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for ProjectStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(ProjectStatus::Upcoming),
            "live" => Ok(ProjectStatus::Live),
            "ended" => Ok(ProjectStatus::Ended),
            other => Err(CatalogError::UnknownStatus(other.to_string())),
        }
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for ProjectStatus {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        status.as_token().to_string()
    }
}

/// Uppercase the first character, leave the remainder untouched.
pub(crate) fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One launchpad offering shown on the page.
///
/// Money and time fields are pre-formatted display strings. The page never
/// computes on them.
///
/// # Example
///
/// ```rust
/// use launchpad_page::types::{Project, ProjectStatus};
///
/// let project = Project {
///     name: "MetaVerse Token".into(),
///     description: "Next-generation virtual world ecosystem".into(),
///     image: "https://example.com/metaverse.png".into(),
///     total_raise: "500,000 USDT".into(),
///     token_price: "0.05 USDT".into(),
///     start_time: "2024-03-20 14:00 UTC".into(),
///     status: ProjectStatus::Upcoming,
///     tags: vec![],
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Display name (non-empty)
    pub name: String,
    /// Short pitch
    pub description: String,
    /// Preview image URL
    pub image: String,
    /// Pre-formatted raise target, e.g. "500,000 USDT"
    pub total_raise: String,
    /// Pre-formatted token price, e.g. "0.05 USDT"
    pub token_price: String,
    /// Pre-formatted start time, e.g. "2024-03-20 14:00 UTC"
    pub start_time: String,
    /// Lifecycle label
    pub status: ProjectStatus,
    /// Extra tab tokens this project is listed under
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Project {
    /// URL-safe identifier derived from the name ("DeFi Protocol" -> "defi-protocol").
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        let mut pending_dash = false;
        for c in self.name.chars() {
            if c.is_ascii_alphanumeric() {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push(c.to_ascii_lowercase());
            } else {
                pending_dash = true;
            }
        }
        slug
    }
}

/// One product capability panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDescriptor {
    /// Panel heading
    pub title: String,
    /// One-sentence summary
    pub description: String,
    /// Glyph shown in the icon badge
    pub icon: IconKind,
    /// Bullet list, rendered in this exact order
    #[serde(default)]
    pub items: Vec<String>,
}

/// A static metric in the stats strip ("150+ Projects Launched").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    /// Glyph shown next to the metric
    pub icon: IconKind,
    /// Pre-formatted value, e.g. "50,000+"
    pub value: String,
    /// Caption under the value
    pub label: String,
}

/// Symbolic glyph identifier.
///
/// The page references glyphs by name only; [`crate::components::Icon`]
/// resolves them to inline SVG.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    /// Meme launchpad
    Sparkles,
    /// NFT launchpad
    Image,
    /// Utility launchpad
    Zap,
    /// Liquidity pools
    Droplets,
    /// Staking
    Coins,
    /// Gamified engagement
    GameController,
    /// Projects launched
    Rocket,
    /// Community members
    Users,
    /// Total raised
    Wallet,
    /// Start time line
    Clock,
    /// Bullet marker and call-to-action arrow
    CaretRight,
    /// Dashboard preview heading
    LayoutDashboard,
}

/// Which slice of the Project Catalog the project grid shows.
///
/// `Featured` is the full catalog in declaration order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProjectTab {
    /// Every project
    #[default]
    Featured,
    /// Projects with status `upcoming`
    Upcoming,
    /// Projects with status `live`
    Live,
    /// Projects with status `ended`
    Ended,
}

impl ProjectTab {
    /// Lowercase token used on the command line and in config files.
    pub fn as_token(&self) -> &'static str {
        match self {
            ProjectTab::Featured => "featured",
            ProjectTab::Upcoming => "upcoming",
            ProjectTab::Live => "live",
            ProjectTab::Ended => "ended",
        }
    }

    /// Status this tab narrows to, `None` for `Featured`.
    pub fn status(&self) -> Option<ProjectStatus> {
        match self {
            ProjectTab::Featured => None,
            ProjectTab::Upcoming => Some(ProjectStatus::Upcoming),
            ProjectTab::Live => Some(ProjectStatus::Live),
            ProjectTab::Ended => Some(ProjectStatus::Ended),
        }
    }

    /// Whether `project` belongs on this tab.
    pub fn matches(&self, project: &Project) -> bool {
        match self.status() {
            None => true,
            Some(status) => {
                project.status == status || project.tags.iter().any(|t| t == self.as_token())
            }
        }
    }
}

impl fmt::Display for ProjectTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for ProjectTab {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(ProjectTab::Featured),
            "upcoming" => Ok(ProjectTab::Upcoming),
            "live" => Ok(ProjectTab::Live),
            "ended" => Ok(ProjectTab::Ended),
            other => Err(CatalogError::UnknownTab(other.to_string())),
        }
    }
}

impl TryFrom<String> for ProjectTab {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProjectTab> for String {
    fn from(tab: ProjectTab) -> Self {
        tab.as_token().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_every_status() {
        assert_eq!(
            ProjectStatus::Upcoming.classify(),
            ("Upcoming".to_string(), "status-info")
        );
        assert_eq!(
            ProjectStatus::Live.classify(),
            ("Live".to_string(), "status-success")
        );
        assert_eq!(
            ProjectStatus::Ended.classify(),
            ("Ended".to_string(), "status-neutral")
        );
    }

    #[test]
    fn status_parses_known_tokens_only() {
        for status in ProjectStatus::ALL {
            assert_eq!(status.as_token().parse::<ProjectStatus>().unwrap(), status);
        }

        let err = "paused".parse::<ProjectStatus>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownStatus(ref s) if s == "paused"));
        // Tokens are case-sensitive
        assert!("Live".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn status_deserialization_rejects_unknown() {
        let ok: ProjectStatus = serde_json::from_str("\"ended\"").unwrap();
        assert_eq!(ok, ProjectStatus::Ended);

        let err = serde_json::from_str::<ProjectStatus>("\"cancelled\"").unwrap_err();
        assert!(err.to_string().contains("unknown project status"));
    }

    #[test]
    fn capitalize_only_touches_first_char() {
        assert_eq!(capitalize("upcoming"), "Upcoming");
        assert_eq!(capitalize("mIxEd"), "MIxEd");
        assert_eq!(capitalize(""), "");
    }

    fn sample(name: &str, status: ProjectStatus) -> Project {
        Project {
            name: name.into(),
            description: String::new(),
            image: String::new(),
            total_raise: String::new(),
            token_price: String::new(),
            start_time: String::new(),
            status,
            tags: vec![],
        }
    }

    #[test]
    fn slug_collapses_separators() {
        let project = sample("  DeFi  Protocol v2!", ProjectStatus::Upcoming);
        assert_eq!(project.slug(), "defi-protocol-v2");
    }

    #[test]
    fn status_has_no_implicit_fallback() {
        // Missing status is a load error, never a silent `Upcoming`
        let err = serde_json::from_str::<Project>(
            r#"{"name": "x", "description": "", "image": "", "totalRaise": "", "tokenPrice": "", "startTime": ""}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing field `status`"));
    }

    #[test]
    fn tab_matches_status_or_tag() {
        let live = sample("a", ProjectStatus::Live);
        let tagged = Project {
            tags: vec!["live".into()],
            ..sample("b", ProjectStatus::Ended)
        };

        assert!(ProjectTab::Featured.matches(&live));
        assert!(ProjectTab::Live.matches(&live));
        assert!(ProjectTab::Live.matches(&tagged));
        assert!(!ProjectTab::Upcoming.matches(&tagged));
    }

    #[test]
    fn tab_rejects_unknown_token() {
        assert_eq!("featured".parse::<ProjectTab>().unwrap(), ProjectTab::Featured);
        assert!(matches!(
            "trending".parse::<ProjectTab>(),
            Err(CatalogError::UnknownTab(_))
        ));
    }
}
