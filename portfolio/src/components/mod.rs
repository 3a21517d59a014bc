//! Leptos UI components for the portfolio page.
//!
//! Each section of the page is its own `#[component]`. Only two pieces of
//! state exist: the gallery filter (owned by [`Showcase`]) and the active
//! section (owned by whoever mounts [`PortfolioPage`], usually the scroll
//! tracker in `portfolio-site`).
//!
//! # Component Hierarchy
//!
//! ```text
//! PortfolioPage
//! ├── DesktopNav          (active section)
//! ├── MobileNav           (active section)
//! ├── Hero                #home
//! ├── About               #about
//! ├── Experience          #experience
//! │   └── TimelineItem
//! ├── Showcase            #portfolio (filter state)
//! │   └── ProjectCard
//! ├── Contact             #contact
//! │   └── ContactForm
//! └── Footer
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use portfolio_leptos::{components::PortfolioPage, content};
//!
//! let (active, _) = signal(SectionId::Home);
//! view! { <PortfolioPage projects=content::projects() active=active /> }
//! ```

mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod nav;
mod page;
mod showcase;

pub use about::About;
pub use contact::{Contact, ContactForm};
pub use experience::{Experience, TimelineItem};
pub use footer::Footer;
pub use hero::Hero;
pub use nav::{DesktopNav, MobileNav};
pub use page::PortfolioPage;
pub use showcase::{ProjectCard, Showcase};
