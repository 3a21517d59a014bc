//! Page data types.
//!
//! Everything here is authored at build time and never mutated at runtime.
//! The types are:
//!
//! - **Closed** - sections and categories are enums, so a project can only
//!   carry a category that has a filter button
//! - **Serializable** - categories travel as their display labels
//! - **Clone-friendly** - components take owned props
//!
//! # Example
//!
//! ```rust
//! use portfolio_leptos::types::{Category, Project, SectionId};
//!
//! let project = Project {
//!     id: 7,
//!     title: "Side Quest".into(),
//!     description: "A weekend experiment".into(),
//!     category: Category::Design,
//!     image: "assets/side-quest.png".into(),
//! };
//!
//! assert_eq!(project.category.label(), "Design");
//! assert_eq!(SectionId::Portfolio.hash(), "#portfolio");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A vertically stacked block of the page, in document order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Hero banner
    #[default]
    Home,
    /// Biography
    About,
    /// Timeline
    Experience,
    /// Project gallery
    Portfolio,
    /// Contact form
    Contact,
}

impl SectionId {
    /// All sections in scan order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Portfolio,
        SectionId::Contact,
    ];

    /// Element id of the section in the document.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Portfolio => "portfolio",
            SectionId::Contact => "contact",
        }
    }

    /// Fragment link (`#home`) used by navigation.
    pub fn hash(self) -> &'static str {
        match self {
            SectionId::Home => "#home",
            SectionId::About => "#about",
            SectionId::Experience => "#experience",
            SectionId::Portfolio => "#portfolio",
            SectionId::Contact => "#contact",
        }
    }

    /// Link text in the desktop navigation bar.
    pub fn desktop_label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Professional Journey",
            SectionId::Portfolio => "Portfolio",
            SectionId::Contact => "Contact",
        }
    }

    /// Short label under the mobile tab-bar icon.
    pub fn mobile_label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Path",
            SectionId::Portfolio => "Work",
            SectionId::Contact => "Contact",
        }
    }

    /// Font Awesome classes for the mobile tab-bar icon.
    pub fn mobile_icon(self) -> &'static str {
        match self {
            SectionId::Home => "fas fa-home",
            SectionId::About => "fas fa-user-circle",
            SectionId::Experience => "fas fa-history",
            SectionId::Portfolio => "fas fa-th-large",
            SectionId::Contact => "fas fa-paper-plane",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hash())
    }
}

/// Project category. Every variant has a matching filter button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Shown as "Web Apps"
    #[serde(rename = "Web Apps")]
    WebApps,
    /// Shown as "Design"
    Design,
    /// Shown as "Consulting"
    Consulting,
}

impl Category {
    /// All categories in filter-bar order.
    pub const ALL: [Category; 3] = [Category::WebApps, Category::Design, Category::Consulting];

    /// Display label, also the filter label.
    pub fn label(self) -> &'static str {
        match self {
            Category::WebApps => "Web Apps",
            Category::Design => "Design",
            Category::Consulting => "Consulting",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One card in the project gallery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable key
    pub id: u32,
    /// Card heading, also the image alt text
    pub title: String,
    /// One-sentence summary
    pub description: String,
    /// Filter category
    pub category: Category,
    /// Image reference relative to the site root
    pub image: String,
}

/// A role on the experience timeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Job title
    pub role: String,
    /// Employer or institution
    pub organization: String,
    /// Human-readable date range
    pub period: String,
    /// Responsibilities, one per bullet
    pub bullets: Vec<String>,
    /// Skill tags shown under the bullets
    pub tags: Vec<String>,
}

/// Icon + caption pair in the about section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Font Awesome classes
    pub icon: String,
    /// Caption
    pub label: String,
}

/// A labelled line in the contact info list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetail {
    /// Font Awesome classes
    pub icon: String,
    /// Small caption above the value
    pub label: String,
    /// The detail itself
    pub value: String,
}

/// Social profile button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Tooltip
    pub title: String,
    /// Target URL, `#` for a placeholder
    pub href: String,
    /// Font Awesome classes
    pub icon: String,
    /// Opens in a new browsing context
    pub external: bool,
}
