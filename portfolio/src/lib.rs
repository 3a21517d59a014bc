//! # portfolio-leptos
//!
//! Leptos components and page logic for a single-page personal portfolio:
//! hero banner, biography, experience timeline, a filterable project
//! gallery and a client-side contact form.
//!
//! ## Features
//!
//! - **Typed content** - sections and categories are closed enums
//! - **Filterable gallery** - linear filter over the fixed project list
//! - **Scroll-aware navigation** - the nav link of the section in view is
//!   highlighted; the listener is released when the page is torn down
//! - **No network** - the contact form cancels its own submission
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use portfolio_leptos::{components::PortfolioPage, content, scroll::use_active_section};
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     let active = use_active_section(my_scroll_source, my_layout_probe, 100.0);
//!     view! { <PortfolioPage projects=content::projects() active=active /> }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Data structures for page content
//! - [`content`] - The literal dataset
//! - [`filter`] - Gallery filter
//! - [`scroll`] - Active-section tracking and listener lifetime
//! - [`contact`] - Contact form submission contract
//! - [`config`] - `site.toml` settings
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! Browser bindings (DOM layout queries, the window scroll listener, console
//! logging) live in the `portfolio-site` crate.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod filter;
pub mod scroll;
pub mod styles;
pub mod types;

pub use config::SiteConfig;
pub use error::{PortfolioError, Result};
pub use filter::{Filter, filter_projects};
pub use types::{Category, Project, SectionId};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{PortfolioPage, Showcase};
    use leptos::prelude::*;
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;

    fn render_page(active: SectionId, initial_filter: Filter) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let (active, _) = signal(active);
            view! {
                <PortfolioPage
                    projects=content::projects()
                    active=active
                    initial_filter=initial_filter
                />
            }
            .to_html()
        })
    }

    fn render_showcase(initial_filter: Filter) -> String {
        let owner = Owner::new();
        owner.with(|| {
            view! { <Showcase projects=content::projects() initial_filter=initial_filter /> }
                .to_html()
        })
    }

    #[test]
    fn renders_every_section_anchor() {
        let html = render_page(SectionId::Home, Filter::All);
        for section in SectionId::ALL {
            assert!(
                html.contains(&format!("id=\"{}\"", section.anchor())),
                "missing #{}",
                section.anchor()
            );
        }
        assert!(html.contains("ALISHBA ALEEM"));
        assert!(html.contains("Lead Brand Ambassador"));
    }

    #[test]
    fn highlights_only_the_active_link() {
        let html = render_page(SectionId::Portfolio, Filter::All);

        assert_eq!(html.matches("class=\"active\"").count(), 1);
        assert!(html.contains("href=\"#portfolio\" class=\"active\""));
        assert_eq!(html.matches("class=\"nav-item active\"").count(), 1);
        assert!(html.contains("href=\"#portfolio\" class=\"nav-item active\""));
    }

    #[test]
    fn all_filter_shows_four_cards() {
        let html = render_showcase(Filter::All);
        assert_eq!(html.matches("class=\"project-card\"").count(), 4);
        assert_eq!(html.matches("class=\"filter-btn active\"").count(), 1);
        assert_eq!(html.matches("class=\"filter-btn").count(), 4);
    }

    #[test]
    fn design_filter_shows_aptech_connect_only() {
        let html = render_showcase(Filter::Only(Category::Design));
        assert_eq!(html.matches("class=\"project-card\"").count(), 1);
        assert!(html.contains("Aptech Connect"));
        assert!(!html.contains("NexTrade Dashboard"));
        assert!(!html.contains("Strategic Brand Audit"));
    }

    #[test]
    fn consulting_filter_shows_brand_audit_only() {
        let html = render_showcase(Filter::Only(Category::Consulting));
        assert_eq!(html.matches("class=\"project-card\"").count(), 1);
        assert!(html.contains("Strategic Brand Audit"));
        assert!(!html.contains("Aptech Connect"));
    }

    #[test]
    fn contact_form_fields_are_required() {
        let html = render_page(SectionId::Home, Filter::All);
        assert!(html.contains("class=\"contact-form\""));
        assert_eq!(html.matches("required").count(), 3);
        assert!(html.contains("type=\"email\""));
    }

    #[test]
    fn external_social_links_open_in_new_context() {
        let html = render_page(SectionId::Home, Filter::All);
        assert_eq!(html.matches("target=\"_blank\"").count(), 2);
        assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), 2);
    }
}
