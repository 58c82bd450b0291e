//! Static catalogs the page is rendered from.
//!
//! A [`Catalog`] bundles the Project Catalog, the Feature Catalog and the
//! fixed copy for the stats strip and dashboard preview. It is validated once
//! when built and never mutated afterwards.
//!
//! # Loading from JSON
//!
//! ```rust
//! use launchpad_page::catalog::Catalog;
//!
//! let json = r#"{
//!     "projects": [{
//!         "name": "DeFi Protocol",
//!         "description": "Cross-chain lending",
//!         "image": "https://example.com/defi.png",
//!         "totalRaise": "1,000,000 USDT",
//!         "tokenPrice": "0.1 USDT",
//!         "startTime": "2024-03-18 10:00 UTC",
//!         "status": "live"
//!     }],
//!     "features": []
//! }"#;
//!
//! let catalog = Catalog::from_json_str(json).unwrap();
//! assert_eq!(catalog.projects().len(), 1);
//! // Stats fall back to the built-in strip
//! assert_eq!(catalog.stats().len(), 3);
//! ```
//!
//! Fields are private: a `Catalog` only exists after [`Catalog::validate`]
//! has passed, whether it was built in code or deserialized.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CatalogError;
use crate::types::{FeatureDescriptor, IconKind, Project, ProjectStatus, ProjectTab, Stat};

/// Everything the page composer iterates over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CatalogFile")]
pub struct Catalog {
    projects: Vec<Project>,
    features: Vec<FeatureDescriptor>,
    stats: Vec<Stat>,
    dashboard_labels: Vec<String>,
}

/// On-disk shape of a catalog, before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    projects: Vec<Project>,
    features: Vec<FeatureDescriptor>,
    #[serde(default = "default_stats")]
    stats: Vec<Stat>,
    #[serde(default = "default_dashboard_labels")]
    dashboard_labels: Vec<String>,
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        let catalog = Self {
            projects: file.projects,
            features: file.features,
            stats: file.stats,
            dashboard_labels: file.dashboard_labels,
        };
        catalog.validate()?;
        Ok(catalog)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        default_catalog()
    }
}

impl Catalog {
    /// Build a catalog from fixture data with the default stats and dashboard copy.
    pub fn new(
        projects: Vec<Project>,
        features: Vec<FeatureDescriptor>,
    ) -> Result<Self, CatalogError> {
        Self::try_from(CatalogFile {
            projects,
            features,
            stats: default_stats(),
            dashboard_labels: default_dashboard_labels(),
        })
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let catalog = Self::try_from(file)?;
        debug!(
            projects = catalog.projects.len(),
            features = catalog.features.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Read, parse and validate a catalog file.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Reject records the page cannot display.
    ///
    /// Status tokens are already checked during deserialization; this covers
    /// the fields that are only wrong when blank.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if let Some(index) = self.projects.iter().position(|p| p.name.trim().is_empty()) {
            return Err(CatalogError::EmptyProjectName { index });
        }
        if let Some(index) = self.features.iter().position(|f| f.title.trim().is_empty()) {
            return Err(CatalogError::EmptyFeatureTitle { index });
        }
        Ok(())
    }

    /// Project Catalog, in display order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Feature Catalog, in display order.
    pub fn features(&self) -> &[FeatureDescriptor] {
        &self.features
    }

    /// Stats strip metrics.
    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    /// Tiles in the dashboard preview.
    pub fn dashboard_labels(&self) -> &[String] {
        &self.dashboard_labels
    }

    /// Projects shown under `tab`, in declaration order.
    pub fn projects_for(&self, tab: ProjectTab) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|p| tab.matches(p))
            .cloned()
            .collect()
    }

    /// Serialize back to pretty JSON (the same shape [`Catalog::from_json_str`] reads).
    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The catalog shipped with the page.
pub fn default_catalog() -> Catalog {
    Catalog {
        projects: default_projects(),
        features: default_features(),
        stats: default_stats(),
        dashboard_labels: default_dashboard_labels(),
    }
}

fn project(
    name: &str,
    description: &str,
    image: &str,
    total_raise: &str,
    token_price: &str,
    start_time: &str,
    status: ProjectStatus,
) -> Project {
    Project {
        name: name.into(),
        description: description.into(),
        image: image.into(),
        total_raise: total_raise.into(),
        token_price: token_price.into(),
        start_time: start_time.into(),
        status,
        tags: Vec::new(),
    }
}

/// Three sample offerings, one per status.
pub fn default_projects() -> Vec<Project> {
    vec![
        project(
            "MetaVerse Token",
            "Next-generation virtual world ecosystem powered by blockchain",
            "https://images.unsplash.com/photo-1614064641938-3bbee52942c7?auto=format&fit=crop&w=400&h=250",
            "500,000 USDT",
            "0.05 USDT",
            "2024-03-20 14:00 UTC",
            ProjectStatus::Upcoming,
        ),
        project(
            "DeFi Protocol",
            "Decentralized finance protocol for cross-chain lending and borrowing",
            "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?auto=format&fit=crop&w=400&h=250",
            "1,000,000 USDT",
            "0.1 USDT",
            "2024-03-18 10:00 UTC",
            ProjectStatus::Live,
        ),
        project(
            "GameFi Project",
            "Play-to-earn gaming platform with NFT integration",
            "https://images.unsplash.com/photo-1616509091215-57bbf1cd4b93?auto=format&fit=crop&w=400&h=250",
            "750,000 USDT",
            "0.075 USDT",
            "2024-03-15 16:00 UTC",
            ProjectStatus::Ended,
        ),
    ]
}

fn feature(icon: IconKind, title: &str, description: &str, items: [&str; 4]) -> FeatureDescriptor {
    FeatureDescriptor {
        title: title.into(),
        description: description.into(),
        icon,
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

/// The six capability panels.
pub fn default_features() -> Vec<FeatureDescriptor> {
    vec![
        feature(
            IconKind::Sparkles,
            "Meme Launchpad",
            "Launch your meme tokens with customizable tokenomics and simplified tools.",
            [
                "Customizable market cap and total supply",
                "Liquidity management options",
                "User-friendly token creation interface",
                "Automated smart contract deployment",
            ],
        ),
        feature(
            IconKind::Image,
            "NFT Launchpad",
            "Launch both traditional and hybrid NFT collections with advanced features.",
            [
                "Fractionalized ownership support",
                "Liquidity-backed NFT pools",
                "Multiple minting options (pre-sales, auctions)",
                "Whitelist management system",
            ],
        ),
        feature(
            IconKind::Zap,
            "Utility Launchpad",
            "Complete toolkit for launching utility-focused blockchain projects.",
            [
                "Presale and IDO support",
                "Transparent vesting schedules",
                "Real-time project metrics",
                "Professional incubation services",
            ],
        ),
        feature(
            IconKind::Droplets,
            "Liquidity Pools",
            "Provide liquidity and earn rewards from transaction fees.",
            [
                "Community-driven liquidity provision",
                "Automated market making",
                "Fee sharing for providers",
                "Multi-token pool support",
            ],
        ),
        feature(
            IconKind::Coins,
            "Staking",
            "Earn passive income by staking your assets in various pools.",
            [
                "Single-asset staking",
                "Paired staking options",
                "Flexible lock periods",
                "Compound rewards",
            ],
        ),
        feature(
            IconKind::GameController,
            "Gamified Engagement",
            "Earn rewards through active platform participation.",
            [
                "Action-based point system",
                "Redeemable perks and rewards",
                "Future airdrop eligibility",
                "Achievement tracking",
            ],
        ),
    ]
}

/// Hardcoded headline numbers. Not computed from the Project Catalog.
pub fn default_stats() -> Vec<Stat> {
    vec![
        Stat {
            icon: IconKind::Rocket,
            value: "150+".into(),
            label: "Projects Launched".into(),
        },
        Stat {
            icon: IconKind::Users,
            value: "50,000+".into(),
            label: "Community Members".into(),
        },
        Stat {
            icon: IconKind::Wallet,
            value: "$100M+".into(),
            label: "Total Raised".into(),
        },
    ]
}

/// Tiles shown in the dashboard preview.
pub fn default_dashboard_labels() -> Vec<String> {
    [
        "Launch Management",
        "Liquidity Pools",
        "Staking Analytics",
        "Reward Tracking",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
