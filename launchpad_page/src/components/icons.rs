//! Inline SVG glyphs.
//!
//! The page refers to glyphs by [`IconKind`]; this module is the only place
//! that knows what they look like. Path data uses a 256x256 view box in the
//! style of [Phosphor Icons](https://phosphoricons.com/) (Regular weight).

use leptos::prelude::*;

use crate::types::IconKind;

/// Renders an inline SVG icon for a symbolic glyph.
///
/// # Props
///
/// * `kind` - Which glyph to draw
/// * `size` - Icon size in pixels (default: "20")
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon kind=IconKind::Rocket size="48" class="stat-icon" /> }
/// ```
#[component]
pub fn Icon(
    /// Glyph to draw
    kind: IconKind,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            data-icon=icon_name(kind)
            aria-hidden="true"
        >
            <path d=icon_path(kind)></path>
        </svg>
    }
}

/// Stable name of a glyph, matching its catalog token.
pub fn icon_name(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Sparkles => "sparkles",
        IconKind::Image => "image",
        IconKind::Zap => "zap",
        IconKind::Droplets => "droplets",
        IconKind::Coins => "coins",
        IconKind::GameController => "game_controller",
        IconKind::Rocket => "rocket",
        IconKind::Users => "users",
        IconKind::Wallet => "wallet",
        IconKind::Clock => "clock",
        IconKind::CaretRight => "caret_right",
        IconKind::LayoutDashboard => "layout_dashboard",
    }
}

/// SVG path data (the `d` attribute) for a glyph.
pub fn icon_path(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Sparkles => ICON_SPARKLE,
        IconKind::Image => ICON_IMAGE,
        IconKind::Zap => ICON_LIGHTNING,
        IconKind::Droplets => ICON_DROP,
        IconKind::Coins => ICON_COINS,
        IconKind::GameController => ICON_GAME_CONTROLLER,
        IconKind::Rocket => ICON_ROCKET,
        IconKind::Users => ICON_USERS,
        IconKind::Wallet => ICON_WALLET,
        IconKind::Clock => ICON_CLOCK,
        IconKind::CaretRight => ICON_CARET_RIGHT,
        IconKind::LayoutDashboard => ICON_SQUARES_FOUR,
    }
}

// =============================================================================
// Glyph path data
// =============================================================================

/// Four-point sparkle
pub const ICON_SPARKLE: &str = "M128,16l24,88,88,24-88,24-24,88-24-88L16,128l88-24Z";

/// Picture frame with mountain
pub const ICON_IMAGE: &str = "M216,40H40A16,16,0,0,0,24,56V200a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V56A16,16,0,0,0,216,40Zm0,16V158.75l-26.07-26.06a16,16,0,0,0-22.63,0l-20,20-44-44a16,16,0,0,0-22.62,0L40,149.37V56ZM40,172l52-52,80,80H40Zm176,28H194.63l-36-36,20-20L216,181.38V200ZM144,100a12,12,0,1,1,12,12A12,12,0,0,1,144,100Z";

/// Lightning bolt
pub const ICON_LIGHTNING: &str = "M215.79,118.17a8,8,0,0,0-5-5.66L153.18,90.9l14.66-73.33a8,8,0,0,0-13.69-7L37.71,143.17A8,8,0,0,0,44.22,156l57.6,11.52L87.16,240.83A8,8,0,0,0,95,248a7.72,7.72,0,0,0,1.57-.16l116.67-46.67a8,8,0,0,0,2.55-14.5ZM96.82,224,116,128a8,8,0,0,0-6.51-9.54L52.22,107,159.18,32,140,128a8,8,0,0,0,6.51,9.54l57.27,11.45Z";

/// Water drop
pub const ICON_DROP: &str = "M128,24S56,104,56,152a72,72,0,0,0,144,0C200,104,128,24,128,24Zm0,192a56.06,56.06,0,0,1-56-56c0-33.4,42.2-87.1,56-103.9,13.8,16.8,56,70.5,56,103.9A56.06,56.06,0,0,1,128,216Z";

/// Stacked coins
pub const ICON_COINS: &str = "M184,89.57V84c0-25.08-37.83-44-88-44S8,58.92,8,84v40c0,20.89,26.25,37.49,64,42.46V172c0,25.08,37.83,44,88,44s88-18.92,88-44V132C248,111.3,222.58,94.68,184,89.57ZM96,56c40,0,72,14.33,72,28s-32,28-72,28S24,97.67,24,84,56,56,96,56ZM24,124V113.79C40.28,125.55,66,132,96,132s55.72-6.45,72-18.21V124c0,13.67-32,28-72,28S24,137.67,24,124Zm208,48c0,13.67-32,28-72,28s-72-14.33-72-28v-5.54c5.26.36,10.6.54,16,.54,35.05,0,63.49-9.16,78.76-23.4C216.08,147.54,232,159.36,232,172Z";

/// Game controller
pub const ICON_GAME_CONTROLLER: &str = "M176,112H152a8,8,0,0,1,0-16h24a8,8,0,0,1,0,16ZM104,96H96V88a8,8,0,0,0-16,0v8H72a8,8,0,0,0,0,16h8v8a8,8,0,0,0,16,0v-8h8a8,8,0,0,0,0-16ZM241.48,200.65a36,36,0,0,1-54.94,4.81L146.48,160h-37L69.46,205.46a36,36,0,0,1-58.93-39.27L30.86,61.43A56.22,56.22,0,0,1,86,16H170a56.22,56.22,0,0,1,55.14,45.43l20.33,104.76A35.77,35.77,0,0,1,241.48,200.65Z";

/// Rocket
pub const ICON_ROCKET: &str = "M152,224a8,8,0,0,1-8,8H112a8,8,0,0,1,0-16h32A8,8,0,0,1,152,224ZM128,112a12,12,0,1,0-12-12A12,12,0,0,0,128,112Zm95.62,43.83-12.36,55.63a16,16,0,0,1-25.51,9.11L158.51,200h-61L70.25,220.57a16,16,0,0,1-25.51-9.11L32.38,155.83a16.09,16.09,0,0,1,3.32-13.71l28.56-34.26a123.07,123.07,0,0,1,8.57-36.67c12.9-32.34,36-52.63,45.37-59.85a16,16,0,0,1,19.6,0c9.34,7.22,32.47,27.51,45.37,59.85a123.07,123.07,0,0,1,8.57,36.67l28.56,34.26A16.09,16.09,0,0,1,223.62,155.83Z";

/// Two people
pub const ICON_USERS: &str = "M117.25,157.92a60,60,0,1,0-66.5,0A95.83,95.83,0,0,0,3.53,195.63a8,8,0,1,0,13.4,8.74,80,80,0,0,1,134.14,0,8,8,0,0,0,13.4-8.74A95.83,95.83,0,0,0,117.25,157.92ZM40,108a44,44,0,1,1,44,44A44.05,44.05,0,0,1,40,108Zm210.14,98.7a8,8,0,0,1-11.07-2.33A79.83,79.83,0,0,0,172,168a8,8,0,0,1,0-16,44,44,0,1,0-16.34-84.87,8,8,0,1,1-5.94-14.85,60,60,0,0,1,55.53,105.64,95.83,95.83,0,0,1,47.22,37.71A8,8,0,0,1,250.14,206.7Z";

/// Wallet
pub const ICON_WALLET: &str = "M216,72H56a8,8,0,0,1,0-16H192a8,8,0,0,0,0-16H56A24,24,0,0,0,32,64V192a24,24,0,0,0,24,24H216a16,16,0,0,0,16-16V88A16,16,0,0,0,216,72Zm0,128H56a8,8,0,0,1-8-8V86.63A23.84,23.84,0,0,0,56,88H216Zm-48-60a12,12,0,1,1,12,12A12,12,0,0,1,168,140Z";

/// Clock face
pub const ICON_CLOCK: &str = "M128,24A104,104,0,1,0,232,128,104.11,104.11,0,0,0,128,24Zm0,192a88,88,0,1,1,88-88A88.1,88.1,0,0,1,128,216Zm64-88a8,8,0,0,1-8,8H128a8,8,0,0,1-8-8V72a8,8,0,0,1,16,0v48h48A8,8,0,0,1,192,128Z";

/// Caret/chevron right
pub const ICON_CARET_RIGHT: &str = "M181.66,133.66l-80,80a8,8,0,0,1-11.32-11.32L164.69,128,90.34,53.66a8,8,0,0,1,11.32-11.32l80,80A8,8,0,0,1,181.66,133.66Z";

/// Grid/dashboard (SquaresFour)
pub const ICON_SQUARES_FOUR: &str = "M104,48H48A16,16,0,0,0,32,64v56a16,16,0,0,0,16,16h56a16,16,0,0,0,16-16V64A16,16,0,0,0,104,48Zm0,72H48V64h56Zm104-72H152a16,16,0,0,0-16,16v56a16,16,0,0,0,16,16h56a16,16,0,0,0,16-16V64A16,16,0,0,0,208,48Zm0,72H152V64h56ZM104,152H48a16,16,0,0,0-16,16v56a16,16,0,0,0,16,16h56a16,16,0,0,0,16-16V168A16,16,0,0,0,104,152Zm0,72H48V168h56Zm104-72H152a16,16,0,0,0-16,16v56a16,16,0,0,0,16,16h56a16,16,0,0,0,16-16V168A16,16,0,0,0,208,152Zm0,72H152V168h56Z";
