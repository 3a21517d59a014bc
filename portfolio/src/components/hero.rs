use leptos::prelude::*;

use crate::types::SectionId;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero" id=SectionId::Home.anchor()>
            <div class="hero-background">
                <div class="blob blob-1"></div>
                <div class="blob blob-2"></div>
            </div>
            <div class="hero-content">
                <div class="hero-status">
                    <span class="pulse"></span>
                    " Open for Collaborations"
                </div>
                <h1>
                    "Crafting Digital "
                    <span>"Experiences"</span>
                </h1>
                <p>"Alishba Aleem \u{2014} Software Engineering Student & Strategic Tech-Marketer"</p>
                <div class="tagline">
                    "Merging analytical engineering with human-centric marketing."
                </div>
                <div class="hero-buttons">
                    <a href=SectionId::Portfolio.hash() class="btn btn-primary">
                        "View Case Studies "
                        <i class="fas fa-chevron-right"></i>
                    </a>
                    <a href=SectionId::Contact.hash() class="btn btn-secondary">
                        "Get in Touch"
                    </a>
                </div>
            </div>
            <div class="scroll-indicator">
                <span></span>
            </div>
        </header>
    }
}
