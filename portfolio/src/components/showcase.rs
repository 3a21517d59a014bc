//! Project gallery with category filter buttons

use leptos::prelude::*;
use tracing::debug;

use crate::filter::{Filter, filter_projects};
use crate::types::{Project, SectionId};

/// Filter bar plus the grid of matching projects.
///
/// Owns the filter state; `initial_filter` only seeds it.
#[component]
pub fn Showcase(
    projects: Vec<Project>,
    /// Filter selected on first render
    #[prop(optional)]
    initial_filter: Filter,
) -> impl IntoView {
    let (filter, set_filter) = signal(initial_filter);

    let select = move |option: Filter| {
        if filter.get_untracked() != option {
            debug!(filter = %option, "gallery filter changed");
        }
        set_filter.set(option);
    };

    view! {
        <section class="portfolio" id=SectionId::Portfolio.anchor()>
            <div class="container">
                <h2 class="section-title">"Showcase"</h2>
                <div class="filters">
                    {Filter::OPTIONS.into_iter().map(|option| view! {
                        <button
                            class=move || if filter.get() == option { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| select(option)
                        >
                            {option.label()}
                        </button>
                    }).collect_view()}
                </div>
                <div class="projects-grid">
                    {move || {
                        filter_projects(&projects, filter.get())
                            .into_iter()
                            .cloned()
                            .map(|project| view! { <ProjectCard project=project /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

/// Gallery card: image with hover overlay, category, title, description
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="project-card" data-project-id=project.id.to_string()>
            <div class="project-img-wrapper">
                <img src=project.image alt=project.title.clone() />
                <div class="project-overlay">
                    <span class="view-project">"Interaction Design"</span>
                </div>
            </div>
            <div class="project-info">
                <span class="project-cat">{project.category.label()}</span>
                <h3>{project.title}</h3>
                <p>{project.description}</p>
            </div>
        </div>
    }
}
