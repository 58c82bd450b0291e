//! CSS styles for the landing page.
//!
//! The page ships as one self-contained HTML file, so the full stylesheet is
//! inlined into `<head>`.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use launchpad_page::styles::PAGE_CSS;
//!
//! let my_css = ".hero { background: #111; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```
//!
//! # Features
//!
//! - Light theme with a blue hero band
//! - Responsive 1/2/3 column card grids
//! - Status badge tones (info blue, success green, neutral gray)

/// Complete CSS for the page.
pub const PAGE_CSS: &str = r#"
:root {
    --bg-page: #f3f4f6;
    --bg-card: #ffffff;
    --bg-muted: #f9fafb;
    --bg-band: #eff6ff;
    --text-strong: #111827;
    --text-body: #374151;
    --text-dim: #4b5563;
    --text-muted: #6b7280;
    --border-subtle: #f3f4f6;
    --accent-blue: #2563eb;
    --accent-blue-dark: #1d4ed8;
    --hero-blue: #1d4ed8;
    --hero-text-dim: #bfdbfe;
    --radius-lg: 12px;
    --radius-md: 8px;
    --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1);
    --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
    --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
    --container-max: 1280px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-sans);
    background: var(--bg-page);
    color: var(--text-strong);
    line-height: 1.5;
    margin: 0;
    min-height: 100vh;
}

h1, h2, h3, p, ul {
    margin: 0;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 16px;
}

@media (min-width: 640px) {
    .container { padding: 0 24px; }
}

@media (min-width: 1024px) {
    .container { padding: 0 32px; }
}

/* Controls */

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    padding: 12px 32px;
    border-radius: var(--radius-md);
    font: inherit;
    font-weight: 600;
    text-decoration: none;
    cursor: pointer;
    border: 2px solid transparent;
    transition: background-color 0.3s, box-shadow 0.3s;
}

.btn-light {
    background: #ffffff;
    color: #1e3a8a;
}

.btn-light:hover {
    background: var(--bg-band);
}

.btn-outline {
    background: transparent;
    color: #ffffff;
    border-color: #ffffff;
}

.btn-outline:hover {
    background: #1e40af;
}

.btn-primary {
    background: var(--accent-blue);
    color: #ffffff;
    padding: 8px 16px;
}

.btn-primary:hover {
    background: var(--accent-blue-dark);
}

.btn-block {
    width: 100%;
}

.btn-link {
    display: inline-flex;
    align-items: center;
    gap: 4px;
    background: none;
    border: none;
    font: inherit;
    font-weight: 600;
    color: var(--accent-blue);
    text-decoration: none;
    cursor: pointer;
}

.btn-link:hover {
    color: var(--accent-blue-dark);
}

/* Hero */

.hero {
    background: var(--hero-blue);
    color: #ffffff;
}

.hero-inner {
    padding-top: 96px;
    padding-bottom: 96px;
    text-align: center;
}

.hero-title {
    font-size: 36px;
    font-weight: 700;
    margin-bottom: 24px;
}

@media (min-width: 768px) {
    .hero-title { font-size: 60px; }
}

.hero-subtitle {
    font-size: 20px;
    color: var(--hero-text-dim);
    margin-bottom: 32px;
}

.hero-actions {
    display: flex;
    justify-content: center;
    gap: 16px;
}

/* Stats */

.stats-wrap {
    margin-top: -48px;
}

.stats-strip {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
    padding: 32px;
    background: var(--bg-card);
    border-radius: var(--radius-lg);
    box-shadow: var(--shadow-lg);
}

.stat {
    display: flex;
    align-items: center;
    gap: 16px;
}

.stat-icon {
    color: var(--accent-blue);
    flex-shrink: 0;
}

.stat-value {
    font-size: 24px;
    font-weight: 700;
}

.stat-label {
    color: var(--text-dim);
}

/* Sections */

.section {
    padding-top: 96px;
    padding-bottom: 96px;
}

#projects.section {
    padding-top: 64px;
    padding-bottom: 64px;
}

.section-header {
    text-align: center;
    margin-bottom: 64px;
}

.section-title {
    font-size: 30px;
    font-weight: 700;
}

.section-header .section-title {
    margin-bottom: 16px;
}

.section-subtitle {
    font-size: 20px;
    color: var(--text-dim);
}

.card-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
}

@media (min-width: 768px) {
    .stats-strip { grid-template-columns: repeat(3, 1fr); }
    .card-grid { grid-template-columns: repeat(2, 1fr); }
    .dashboard-tiles { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
    .card-grid { grid-template-columns: repeat(3, 1fr); }
    .dashboard-tiles { grid-template-columns: repeat(4, 1fr); }
}

/* Feature panels */

.feature-panel {
    background: var(--bg-card);
    border-radius: var(--radius-lg);
    box-shadow: var(--shadow-md);
    padding: 32px;
    transition: box-shadow 0.3s;
}

.feature-panel:hover {
    box-shadow: var(--shadow-lg);
}

.feature-heading {
    display: flex;
    align-items: center;
    gap: 16px;
    margin-bottom: 24px;
}

.feature-icon-badge {
    display: flex;
    padding: 12px;
    border-radius: var(--radius-md);
    background: #dbeafe;
    color: var(--accent-blue);
}

.feature-title {
    font-size: 24px;
    font-weight: 700;
}

.feature-description {
    color: var(--text-dim);
    margin-bottom: 24px;
}

.feature-items {
    list-style: none;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.feature-item {
    display: flex;
    align-items: flex-start;
    gap: 8px;
    color: var(--text-body);
}

.feature-marker {
    color: var(--accent-blue);
    flex-shrink: 0;
    margin-top: 2px;
}

/* Dashboard preview */

.dashboard-band {
    background: var(--bg-band);
    padding: 96px 0;
}

.dashboard-panel {
    background: var(--bg-card);
    border-radius: var(--radius-lg);
    box-shadow: var(--shadow-lg);
    padding: 32px;
}

.dashboard-heading {
    display: flex;
    align-items: center;
    gap: 12px;
    margin-bottom: 32px;
}

.dashboard-heading h3 {
    font-size: 24px;
    font-weight: 700;
}

.icon-accent {
    color: var(--accent-blue);
}

.dashboard-tiles {
    display: grid;
    grid-template-columns: 1fr;
    gap: 24px;
}

.dashboard-tile {
    background: var(--bg-muted);
    border-radius: var(--radius-md);
    padding: 24px;
    text-align: center;
    font-weight: 600;
    color: #1f2937;
}

/* Project cards */

.projects-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 32px;
}

.project-card {
    display: flex;
    flex-direction: column;
    background: var(--bg-card);
    border-radius: var(--radius-lg);
    box-shadow: var(--shadow-md);
    overflow: hidden;
    transition: box-shadow 0.3s;
}

.project-card:hover {
    box-shadow: var(--shadow-lg);
}

.project-image {
    width: 100%;
    height: 192px;
    object-fit: cover;
}

.project-body {
    padding: 24px;
    flex: 1;
}

.project-heading {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    margin-bottom: 16px;
}

.project-name {
    font-size: 20px;
    font-weight: 700;
}

.project-description {
    color: var(--text-dim);
    margin-bottom: 16px;
}

.project-terms {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 16px;
    margin-bottom: 16px;
}

.term-label {
    font-size: 14px;
    color: var(--text-muted);
}

.term-value {
    font-weight: 600;
}

.project-start {
    display: flex;
    align-items: center;
    gap: 4px;
    font-size: 14px;
    color: var(--text-muted);
}

.project-footer {
    padding: 16px 24px;
    background: var(--bg-muted);
    border-top: 1px solid var(--border-subtle);
}

/* Status badges */

.status-badge {
    padding: 4px 12px;
    border-radius: 9999px;
    font-size: 14px;
    font-weight: 500;
    white-space: nowrap;
}

.status-info {
    background: #dbeafe;
    color: #1e40af;
}

.status-success {
    background: #dcfce7;
    color: #166534;
}

.status-neutral {
    background: #f3f4f6;
    color: #1f2937;
}
"#;

/// Content Security Policy header value. No scripts; images may come from any HTTPS host.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: https:; style-src 'self' 'unsafe-inline'; script-src 'none'; connect-src 'none'; font-src 'self' data:;";
