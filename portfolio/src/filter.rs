//! Project gallery filter.
//!
//! The gallery shows either every project (`All`) or the projects of one
//! category. Labels match exactly; there is no fuzzy or case-insensitive
//! path because the labels are only ever produced by the filter buttons.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;
use crate::types::{Category, Project};

/// Label of the sentinel filter.
pub const ALL_LABEL: &str = "All";

/// Current gallery filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Filter {
    /// Show every project
    #[default]
    All,
    /// Show only this category
    Only(Category),
}

impl Filter {
    /// Filter buttons in display order.
    pub const OPTIONS: [Filter; 4] = [
        Filter::All,
        Filter::Only(Category::WebApps),
        Filter::Only(Category::Design),
        Filter::Only(Category::Consulting),
    ];

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => ALL_LABEL,
            Filter::Only(category) => category.label(),
        }
    }

    /// Whether a project in `category` passes this filter.
    pub fn admits(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Filter {
    type Err = PortfolioError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Filter::OPTIONS
            .into_iter()
            .find(|option| option.label() == label)
            .ok_or_else(|| PortfolioError::UnknownFilter(label.to_string()))
    }
}

impl TryFrom<String> for Filter {
    type Error = PortfolioError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.label().to_string()
    }
}

/// Projects visible under `filter`, in their original order.
pub fn filter_projects(projects: &[Project], filter: Filter) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| filter.admits(project.category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use pretty_assertions::assert_eq;

    fn titles(filter: Filter) -> Vec<String> {
        let projects = content::projects();
        filter_projects(&projects, filter)
            .into_iter()
            .map(|p| p.title.clone())
            .collect()
    }

    #[test]
    fn all_shows_every_project() {
        assert_eq!(titles(Filter::All).len(), 4);
    }

    #[test]
    fn each_label_yields_exactly_its_category() {
        let projects = content::projects();
        for filter in Filter::OPTIONS {
            let shown = filter_projects(&projects, filter);
            let expected: Vec<_> = projects
                .iter()
                .filter(|p| filter == Filter::All || p.category.label() == filter.label())
                .collect();
            assert_eq!(shown, expected, "filter {filter}");
        }
    }

    #[test]
    fn design_shows_aptech_connect() {
        assert_eq!(
            titles(Filter::Only(Category::Design)),
            vec!["Aptech Connect".to_string()]
        );
    }

    #[test]
    fn consulting_shows_brand_audit() {
        assert_eq!(
            titles(Filter::Only(Category::Consulting)),
            vec!["Strategic Brand Audit".to_string()]
        );
    }

    #[test]
    fn web_apps_keeps_source_order() {
        assert_eq!(
            titles(Filter::Only(Category::WebApps)),
            vec![
                "MedTrack Pro (Flutter)".to_string(),
                "NexTrade Dashboard".to_string()
            ]
        );
    }

    #[test]
    fn labels_parse_exactly() {
        for option in Filter::OPTIONS {
            assert_eq!(option.label().parse::<Filter>().expect("known label"), option);
        }

        let err = "web apps".parse::<Filter>().unwrap_err();
        assert!(matches!(err, PortfolioError::UnknownFilter(label) if label == "web apps"));
    }

    #[test]
    fn empty_gallery_stays_empty() {
        assert!(filter_projects(&[], Filter::All).is_empty());
    }
}
