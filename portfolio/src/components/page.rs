//! Root page component - every section in document order

use leptos::prelude::*;

use super::{About, Contact, DesktopNav, Experience, Footer, Hero, MobileNav, Showcase};
use crate::filter::Filter;
use crate::styles::PORTFOLIO_CSS;
use crate::types::{Project, SectionId};

/// Icon font used by the `fas`/`fab` classes
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// The complete single-page portfolio
#[component]
pub fn PortfolioPage(
    /// Gallery entries
    projects: Vec<Project>,
    /// Section whose nav links are highlighted
    #[prop(into)]
    active: Signal<SectionId>,
    /// Gallery filter selected on first render
    #[prop(optional)]
    initial_filter: Filter,
) -> impl IntoView {
    view! {
        <link rel="stylesheet" href=FONT_AWESOME_CSS />
        <style>{PORTFOLIO_CSS}</style>
        <div class="portfolio-app">
            <DesktopNav active=active />
            <MobileNav active=active />
            <Hero />
            <About />
            <Experience />
            <Showcase projects=projects initial_filter=initial_filter />
            <Contact />
            <Footer />
        </div>
    }
}
