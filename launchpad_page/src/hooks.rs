//! Capability hooks for the page's call-to-action controls.
//!
//! Every control ("Launch Project", "View Projects", "View All",
//! "View Details") asks its hook for a target. `None` keeps the control
//! inert and it renders as a plain `<button type="button">`. `Some(href)`
//! renders a link. Components never know which one they got.
//!
//! ```rust
//! use launchpad_page::hooks::PageHooks;
//!
//! let hooks = PageHooks::default()
//!     .on_view_all(|| Some("/projects".to_string()))
//!     .on_view_details(|project| Some(format!("/projects/{}", project.slug())));
//!
//! assert_eq!(hooks.launch_project_target(), None);
//! assert_eq!(hooks.view_all_target().as_deref(), Some("/projects"));
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::Project;

type PageCallback = Arc<dyn Fn() -> Option<String> + Send + Sync>;
type ProjectCallback = Arc<dyn Fn(&Project) -> Option<String> + Send + Sync>;

/// Callback slots for the page's controls. Defaults are no-ops.
#[derive(Clone)]
pub struct PageHooks {
    launch_project: PageCallback,
    view_projects: PageCallback,
    view_all: PageCallback,
    view_details: ProjectCallback,
}

impl Default for PageHooks {
    fn default() -> Self {
        Self {
            launch_project: Arc::new(|| None),
            view_projects: Arc::new(|| None),
            view_all: Arc::new(|| None),
            view_details: Arc::new(|_| None),
        }
    }
}

impl fmt::Debug for PageHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageHooks")
            .field("launch_project", &self.launch_project_target())
            .field("view_projects", &self.view_projects_target())
            .field("view_all", &self.view_all_target())
            .finish_non_exhaustive()
    }
}

impl PageHooks {
    /// Wire the hero "Launch Project" button.
    pub fn on_launch_project<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        self.launch_project = Arc::new(f);
        self
    }

    /// Wire the hero "View Projects" button.
    pub fn on_view_projects<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        self.view_projects = Arc::new(f);
        self
    }

    /// Wire the "View All" button next to the project grid heading.
    pub fn on_view_all<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        self.view_all = Arc::new(f);
        self
    }

    /// Wire each card's "View Details" button.
    pub fn on_view_details<F>(mut self, f: F) -> Self
    where
        F: Fn(&Project) -> Option<String> + Send + Sync + 'static,
    {
        self.view_details = Arc::new(f);
        self
    }

    /// Target for "Launch Project".
    pub fn launch_project_target(&self) -> Option<String> {
        (self.launch_project)()
    }

    /// Target for "View Projects".
    pub fn view_projects_target(&self) -> Option<String> {
        (self.view_projects)()
    }

    /// Target for "View All".
    pub fn view_all_target(&self) -> Option<String> {
        (self.view_all)()
    }

    /// Target for the "View Details" button of `project`.
    pub fn view_details_target(&self, project: &Project) -> Option<String> {
        (self.view_details)(project)
    }

    /// Build hooks from static link configuration.
    pub fn from_links(links: &LinkConfig) -> Self {
        let mut hooks = Self::default();
        if let Some(href) = links.launch_project.clone() {
            hooks = hooks.on_launch_project(move || Some(href.clone()));
        }
        if let Some(href) = links.view_projects.clone() {
            hooks = hooks.on_view_projects(move || Some(href.clone()));
        }
        if let Some(href) = links.view_all.clone() {
            hooks = hooks.on_view_all(move || Some(href.clone()));
        }
        if let Some(template) = links.view_details.clone() {
            hooks = hooks
                .on_view_details(move |project| Some(template.replace("{slug}", &project.slug())));
        }
        hooks
    }
}

/// Static link targets, typically read from the `[links]` table of a config file.
///
/// `view_details` may contain `{slug}`, replaced per card with
/// [`Project::slug`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Hero "Launch Project"
    pub launch_project: Option<String>,
    /// Hero "View Projects"
    pub view_projects: Option<String>,
    /// Project grid "View All"
    pub view_all: Option<String>,
    /// Card "View Details", e.g. `/projects/{slug}`
    pub view_details: Option<String>,
}
