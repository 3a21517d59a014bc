//! Browser entry point for the portfolio page.
//!
//! Wires the page components from `portfolio-leptos` to the live document:
//! the window scroll listener, DOM layout queries, console logging and the
//! embedded `site.toml`.

pub mod dom;
pub mod logging;

use leptos::prelude::*;
use portfolio_leptos::components::PortfolioPage;
use portfolio_leptos::content;
use portfolio_leptos::scroll::use_active_section;
use portfolio_leptos::SiteConfig;
use tracing::{info, warn};

use dom::{DomLayout, WindowScroll};

/// Settings baked in at compile time.
const SITE_TOML: &str = include_str!("../site.toml");

/// The page, with the active section driven by window scrolling.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let active = use_active_section(WindowScroll, DomLayout, config.header_offset);

    view! {
        <PortfolioPage
            projects=content::projects()
            active=active
            initial_filter=config.default_filter
        />
    }
}

/// Install panic/log hooks, read config and mount the page on `<body>`.
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match SiteConfig::from_toml_str(SITE_TOML) {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };

    logging::init(&config.log_level);
    if let Some(e) = config_error {
        warn!("falling back to default site config: {}", e);
    }
    info!(version = env!("CARGO_PKG_VERSION"), "mounting portfolio");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
