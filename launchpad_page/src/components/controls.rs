//! Call-to-action control - a link when wired, an inert button otherwise

use leptos::prelude::*;

use super::Icon;
use crate::types::IconKind;

/// Button-styled control whose behavior comes from a [`crate::hooks::PageHooks`] slot.
#[component]
pub fn CtaControl(
    /// Visible text
    label: &'static str,
    /// Resolved hook target, `None` keeps the control inert
    target: Option<String>,
    /// CSS classes for the control
    class: &'static str,
    /// Append a trailing caret glyph
    #[prop(default = false)]
    arrow: bool,
) -> impl IntoView {
    match target {
        Some(href) => view! {
            <a class=class href=href data-control=label>
                {label}
                {trailing_caret(arrow)}
            </a>
        }
        .into_any(),
        None => view! {
            <button type="button" class=class data-control=label>
                {label}
                {trailing_caret(arrow)}
            </button>
        }
        .into_any(),
    }
}

fn trailing_caret(arrow: bool) -> impl IntoView {
    arrow.then(|| view! { <Icon kind=IconKind::CaretRight size="16" class="icon-trailing" /> })
}
