//! Experience timeline

use leptos::prelude::*;

use crate::content;
use crate::types::{ExperienceEntry, SectionId};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section class="experience" id=SectionId::Experience.anchor()>
            <div class="container">
                <h2 class="section-title">"Milestones"</h2>
                <div class="experience-timeline">
                    {content::experience()
                        .into_iter()
                        .map(|entry| view! { <TimelineItem entry=entry /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// One role with its dot on the timeline rail
#[component]
pub fn TimelineItem(entry: ExperienceEntry) -> impl IntoView {
    view! {
        <div class="timeline-item">
            <div class="timeline-dot"></div>
            <div class="timeline-content">
                <div class="exp-header">
                    <div>
                        <h3>{entry.role}</h3>
                        <h4>{entry.organization}</h4>
                    </div>
                    <span class="exp-date">{entry.period}</span>
                </div>
                <ul class="exp-bullets">
                    {entry.bullets.into_iter().map(|bullet| view! { <li>{bullet}</li> }).collect_view()}
                </ul>
                <div class="exp-tags">
                    {entry.tags.into_iter().map(|tag| view! { <span>{tag}</span> }).collect_view()}
                </div>
            </div>
        </div>
    }
}
