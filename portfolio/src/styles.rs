//! CSS for the portfolio page.
//!
//! The stylesheet is inlined into the page by
//! [`PortfolioPage`](crate::components::PortfolioPage), so the site needs no
//! separate asset pipeline for styling.
//!
//! # Customization
//!
//! ```rust
//! use portfolio_leptos::styles::PORTFOLIO_CSS;
//!
//! let accent = ":root { --accent: #ff6b6b; }";
//! let combined = format!("{}\n{}", PORTFOLIO_CSS, accent);
//! assert!(combined.ends_with("#ff6b6b; }"));
//! ```
//!
//! # Layout
//!
//! - Fixed desktop navigation above 900px, bottom tab bar below it
//! - Full-viewport hero with animated background blobs
//! - Card grid for the project gallery
//! - Two-column contact block collapsing to one column on mobile

/// Complete CSS for the page - dark theme with a violet accent.
pub const PORTFOLIO_CSS: &str = r#"
:root {
    --bg: #0b0b12;
    --bg-raised: #14141f;
    --bg-card: #1b1b29;
    --text: #e8e8f0;
    --text-dim: #9a9ab0;
    --accent: #8b5cf6;
    --accent-soft: rgba(139, 92, 246, 0.15);
    --border: rgba(232, 232, 240, 0.08);
    --radius: 14px;
    --container-max: 1140px;
    --font: 'Inter', 'Segoe UI', system-ui, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font);
    background: var(--bg);
    color: var(--text);
    line-height: 1.65;
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    gap: 10px;
    padding: 12px 26px;
    border-radius: 999px;
    font-weight: 600;
    border: 1px solid transparent;
    cursor: pointer;
    transition: transform 0.2s, background 0.2s;
}

.btn:hover {
    transform: translateY(-2px);
}

.btn-primary {
    background: var(--accent);
    color: #fff;
}

.btn-secondary {
    border-color: var(--border);
    background: var(--bg-raised);
}

.btn-nav {
    padding: 8px 20px;
    background: var(--accent-soft);
    color: var(--accent);
}

/* Desktop navigation */
.desktop-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    backdrop-filter: blur(12px);
    background: rgba(11, 11, 18, 0.8);
    border-bottom: 1px solid var(--border);
}

.nav-container {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 72px;
}

.logo,
.footer-logo {
    font-weight: 800;
    letter-spacing: 0.12em;
}

.logo span,
.footer-logo span {
    color: var(--accent);
}

.nav-links {
    display: flex;
    gap: 28px;
}

.nav-links a {
    color: var(--text-dim);
    font-size: 14px;
    position: relative;
    transition: color 0.2s;
}

.nav-links a.active,
.nav-links a:hover {
    color: var(--text);
}

.nav-links a.active::after {
    content: '';
    position: absolute;
    left: 0;
    right: 0;
    bottom: -6px;
    height: 2px;
    background: var(--accent);
}

/* Mobile navigation */
.mobile-nav {
    display: none;
    position: fixed;
    bottom: 0;
    left: 0;
    right: 0;
    z-index: 100;
    justify-content: space-around;
    padding: 10px 0;
    background: var(--bg-raised);
    border-top: 1px solid var(--border);
}

.mobile-nav .nav-item {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 4px;
    font-size: 11px;
    color: var(--text-dim);
}

.mobile-nav .nav-item.active {
    color: var(--accent);
}

/* Hero */
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    overflow: hidden;
    padding: 120px 24px 80px;
}

.hero-background .blob {
    position: absolute;
    width: 420px;
    height: 420px;
    border-radius: 50%;
    filter: blur(90px);
    opacity: 0.35;
    animation: drift 14s ease-in-out infinite alternate;
}

.blob-1 {
    background: var(--accent);
    top: -80px;
    left: -120px;
}

.blob-2 {
    background: #06b6d4;
    bottom: -120px;
    right: -80px;
    animation-delay: -7s;
}

@keyframes drift {
    to { transform: translate(60px, 40px) scale(1.1); }
}

.hero-content {
    position: relative;
    max-width: 760px;
}

.hero-status {
    display: inline-flex;
    align-items: center;
    gap: 10px;
    padding: 6px 16px;
    border-radius: 999px;
    background: var(--accent-soft);
    font-size: 13px;
}

.pulse {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: #22c55e;
    box-shadow: 0 0 0 0 rgba(34, 197, 94, 0.6);
    animation: pulse 1.8s infinite;
}

@keyframes pulse {
    to { box-shadow: 0 0 0 12px rgba(34, 197, 94, 0); }
}

.hero h1 {
    font-size: clamp(40px, 7vw, 72px);
    line-height: 1.1;
    margin: 24px 0 16px;
}

.hero h1 span,
.about h3 span {
    color: var(--accent);
}

.tagline {
    color: var(--text-dim);
    margin-bottom: 32px;
}

.hero-buttons {
    display: flex;
    justify-content: center;
    gap: 16px;
    flex-wrap: wrap;
}

.scroll-indicator {
    position: absolute;
    bottom: 32px;
    width: 24px;
    height: 40px;
    border: 2px solid var(--text-dim);
    border-radius: 12px;
}

.scroll-indicator span {
    display: block;
    width: 4px;
    height: 8px;
    margin: 6px auto;
    border-radius: 2px;
    background: var(--text-dim);
}

/* Shared section chrome */
section {
    padding: 110px 0;
}

.section-title {
    font-size: 34px;
    text-align: center;
    margin: 0 0 48px;
}

.section-title.left {
    text-align: left;
}

/* About */
.about-content {
    max-width: 820px;
    margin: 0 auto;
}

.about h3 {
    font-size: 26px;
}

.about-text-wrapper p {
    color: var(--text-dim);
}

.skills-tags,
.exp-tags {
    display: flex;
    flex-wrap: wrap;
    gap: 10px;
    margin: 28px 0;
}

.skills-tags span,
.exp-tags span {
    padding: 6px 14px;
    border-radius: 999px;
    border: 1px solid var(--border);
    background: var(--bg-raised);
    font-size: 13px;
}

.about-highlights {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 16px;
}

.highlight-item {
    display: flex;
    align-items: center;
    gap: 12px;
    padding: 18px;
    border-radius: var(--radius);
    background: var(--bg-card);
}

.highlight-item i {
    color: var(--accent);
}

/* Experience */
.experience-timeline {
    position: relative;
    max-width: 820px;
    margin: 0 auto;
    padding-left: 32px;
    border-left: 2px solid var(--border);
}

.timeline-item {
    position: relative;
}

.timeline-dot {
    position: absolute;
    left: -41px;
    top: 28px;
    width: 16px;
    height: 16px;
    border-radius: 50%;
    background: var(--accent);
}

.timeline-content {
    padding: 28px;
    border-radius: var(--radius);
    background: var(--bg-card);
}

.exp-header {
    display: flex;
    justify-content: space-between;
    gap: 16px;
    flex-wrap: wrap;
}

.exp-header h3,
.exp-header h4 {
    margin: 0;
}

.exp-header h4 {
    color: var(--text-dim);
    font-weight: 500;
}

.exp-date {
    color: var(--accent);
    font-size: 14px;
}

.exp-bullets {
    color: var(--text-dim);
}

/* Portfolio */
.filters {
    display: flex;
    justify-content: center;
    gap: 12px;
    flex-wrap: wrap;
    margin-bottom: 40px;
}

.filter-btn {
    padding: 8px 22px;
    border-radius: 999px;
    border: 1px solid var(--border);
    background: transparent;
    color: var(--text-dim);
    font: inherit;
    cursor: pointer;
}

.filter-btn.active {
    background: var(--accent);
    border-color: var(--accent);
    color: #fff;
}

.projects-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 24px;
}

.project-card {
    border-radius: var(--radius);
    overflow: hidden;
    background: var(--bg-card);
    border: 1px solid var(--border);
}

.project-img-wrapper {
    position: relative;
    aspect-ratio: 16 / 10;
    overflow: hidden;
}

.project-img-wrapper img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.4s;
}

.project-overlay {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(11, 11, 18, 0.7);
    opacity: 0;
    transition: opacity 0.3s;
}

.project-card:hover .project-overlay {
    opacity: 1;
}

.project-card:hover img {
    transform: scale(1.06);
}

.project-info {
    padding: 20px;
}

.project-cat {
    color: var(--accent);
    font-size: 12px;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}

.project-info p {
    color: var(--text-dim);
    font-size: 14px;
}

/* Contact */
.contact-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 48px;
}

.info-list {
    display: grid;
    gap: 18px;
    margin: 32px 0;
}

.info-item {
    display: flex;
    gap: 16px;
    align-items: center;
}

.info-item label {
    display: block;
    font-size: 12px;
    color: var(--text-dim);
}

.social-links {
    display: flex;
    gap: 12px;
}

.social-links a {
    display: grid;
    place-items: center;
    width: 44px;
    height: 44px;
    border-radius: 50%;
    background: var(--bg-card);
}

.contact-form {
    display: grid;
    gap: 16px;
    padding: 32px;
    border-radius: var(--radius);
    background: var(--bg-card);
}

.form-group input,
.form-group textarea {
    width: 100%;
    padding: 14px 16px;
    border-radius: 10px;
    border: 1px solid var(--border);
    background: var(--bg);
    color: var(--text);
    font: inherit;
}

/* Footer */
footer {
    padding: 40px 0 100px;
    border-top: 1px solid var(--border);
}

.footer-content {
    display: flex;
    justify-content: space-between;
    align-items: center;
    color: var(--text-dim);
}

@media (max-width: 900px) {
    .desktop-nav {
        display: none;
    }

    .mobile-nav {
        display: flex;
    }

    .about-highlights,
    .contact-grid {
        grid-template-columns: 1fr;
    }

    .footer-content {
        flex-direction: column;
        gap: 8px;
    }
}
"#;
