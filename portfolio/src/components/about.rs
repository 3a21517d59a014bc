use leptos::prelude::*;

use crate::content;
use crate::types::SectionId;

/// Biography, skill tags and highlights
#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="about" id=SectionId::About.anchor()>
            <div class="container">
                <div class="about-content">
                    <h2 class="section-title">"Professional Overview"</h2>
                    <h3>
                        "Where " <span>"Intelligence"</span> " Meets " <span>"Strategy"</span> "."
                    </h3>
                    <div class="about-text-wrapper">
                        <p>
                            "I am Alishba Aleem, a Software Engineering student dedicated to building "
                            "impactful digital solutions. My unique background as a lead "
                            <strong>"Brand Ambassador"</strong>
                            " at Aptech has equipped me with a rare dual perspective: the ability to write robust code "
                            "and the insight to understand exactly what the end-user needs."
                        </p>
                        <p>
                            "Currently, I am architecting cross-platform mobile apps using the "
                            <strong>"Flutter ecosystem"</strong>
                            " and designing modern, responsive web architectures that prioritize performance and user experience."
                        </p>
                    </div>

                    <div class="skills-tags">
                        {content::skills().into_iter().map(|skill| view! { <span>{skill}</span> }).collect_view()}
                    </div>

                    <div class="about-highlights">
                        {content::highlights().into_iter().map(|highlight| view! {
                            <div class="highlight-item">
                                <i class=highlight.icon></i>
                                <span>{highlight.label}</span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
