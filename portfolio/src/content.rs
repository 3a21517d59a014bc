//! Page content.
//!
//! The literal dataset behind the page. Prose that only ever appears once
//! lives directly in the section components; everything repeated or
//! filtered is here.

use crate::types::{Category, ContactDetail, ExperienceEntry, Highlight, Project, SocialLink};

/// Name shown in the navigation bar and footer.
pub const BRAND: &str = "ALISHBA ALEEM";

/// Copyright line in the footer.
pub const COPYRIGHT: &str = "\u{a9} 2026. All rights reserved. Designed for Impact.";

/// The project gallery, in display order.
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "MedTrack Pro (Flutter)".into(),
            description: "A mission-critical medicine reminder app featuring local notifications and a minimalist user interface.".into(),
            category: Category::WebApps,
            image: "assets/project1.png".into(),
        },
        Project {
            id: 2,
            title: "NexTrade Dashboard".into(),
            description: "High-performance financial analytics portal designed for real-time market tracking and data visualization.".into(),
            category: Category::WebApps,
            image: "assets/project2.png".into(),
        },
        Project {
            id: 3,
            title: "Aptech Connect".into(),
            description: "A centralized campus event management system streamlining student participation and brand engagement.".into(),
            category: Category::Design,
            image: "assets/project3.png".into(),
        },
        Project {
            id: 4,
            title: "Strategic Brand Audit".into(),
            description: "Comprehensive marketing analysis and digital transformation roadmap for local academic institutions.".into(),
            category: Category::Consulting,
            image: "assets/project4.png".into(),
        },
    ]
}

/// Skill tags under the biography.
pub fn skills() -> Vec<&'static str> {
    vec![
        "Flutter & Dart Expert (Mastering)",
        "React & Modern Web",
        "UI Design Systems",
        "Strategic Brand Growth",
        "Full-Stack Mentality",
    ]
}

/// The three pillars under the skill tags.
pub fn highlights() -> Vec<Highlight> {
    [
        ("fas fa-shield-alt", "Architecture First Approach"),
        ("fas fa-chart-line", "Conversion Focused Design"),
        ("fas fa-users", "Empathetic User Logic"),
    ]
    .into_iter()
    .map(|(icon, label)| Highlight {
        icon: icon.into(),
        label: label.into(),
    })
    .collect()
}

/// Timeline entries, most recent first.
pub fn experience() -> Vec<ExperienceEntry> {
    vec![ExperienceEntry {
        role: "Lead Brand Ambassador".into(),
        organization: "Aptech Metro Star Gate".into(),
        period: "Jan 2026 - Present".into(),
        bullets: vec![
            "Designing and executing marketing strategies to enhance student enrollment and engagement.".into(),
            "Facilitating academic seminars and representing the institute at key community events.".into(),
            "Bridging the gap between technical curriculum and student career aspirations.".into(),
        ],
        tags: vec![
            "Leadership".into(),
            "Strategic Marketing".into(),
            "Event Coordination".into(),
        ],
    }]
}

/// Lines in the contact info list.
pub fn contact_details() -> Vec<ContactDetail> {
    vec![
        ContactDetail {
            icon: "fas fa-paper-plane".into(),
            label: "Inquiries".into(),
            value: "alyshbaaleem@gmail.com".into(),
        },
        ContactDetail {
            icon: "fas fa-compass".into(),
            label: "Currently Based".into(),
            value: "Shah Faisal, Karachi, Pakistan".into(),
        },
    ]
}

/// Social profile buttons. Behance is a placeholder until the profile exists.
pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            title: "LinkedIn".into(),
            href: "https://linkedin.com/in/alishba-aleem-flutter-developer-details-skills".into(),
            icon: "fab fa-linkedin-in".into(),
            external: true,
        },
        SocialLink {
            title: "GitHub".into(),
            href: "https://github.com/Alyshbaaleem".into(),
            icon: "fab fa-github".into(),
            external: true,
        },
        SocialLink {
            title: "Behance".into(),
            href: "#".into(),
            icon: "fab fa-behance".into(),
            external: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn four_projects_with_unique_ids() {
        let projects = projects();
        assert_eq!(projects.len(), 4);

        let ids: HashSet<_> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn every_category_is_represented() {
        let projects = projects();
        for category in Category::ALL {
            assert!(
                projects.iter().any(|p| p.category == category),
                "no project in {category}"
            );
        }
    }

    #[test]
    fn single_timeline_entry() {
        let entries = experience();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].bullets.len(), 3);
    }

    #[test]
    fn only_placeholder_link_stays_in_tab() {
        let internal: Vec<_> = social_links()
            .into_iter()
            .filter(|link| !link.external)
            .collect();
        assert_eq!(internal.len(), 1);
        assert_eq!(internal[0].href, "#");
    }
}
