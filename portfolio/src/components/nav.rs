//! Navigation bars - desktop header and mobile tab bar.
//!
//! Both highlight the link whose hash matches the active section.

use leptos::prelude::*;

use crate::content::BRAND;
use crate::types::SectionId;

fn desktop_link_class(is_active: bool) -> &'static str {
    if is_active { "active" } else { "" }
}

fn mobile_item_class(is_active: bool) -> &'static str {
    if is_active { "nav-item active" } else { "nav-item" }
}

/// Fixed header shown on wide viewports
#[component]
pub fn DesktopNav(#[prop(into)] active: Signal<SectionId>) -> impl IntoView {
    view! {
        <nav class="desktop-nav">
            <div class="container nav-container">
                <div class="logo">{BRAND}<span>"."</span></div>
                <div class="nav-links">
                    {SectionId::ALL.into_iter().map(|section| view! {
                        <a
                            href=section.hash()
                            class=move || desktop_link_class(active.get() == section)
                        >
                            {section.desktop_label()}
                        </a>
                    }).collect_view()}
                </div>
                <a href=SectionId::Contact.hash() class="btn btn-nav">"Hire Me"</a>
            </div>
        </nav>
    }
}

/// Bottom tab bar shown on narrow viewports
#[component]
pub fn MobileNav(#[prop(into)] active: Signal<SectionId>) -> impl IntoView {
    view! {
        <nav class="mobile-nav">
            {SectionId::ALL.into_iter().map(|section| view! {
                <a
                    href=section.hash()
                    class=move || mobile_item_class(active.get() == section)
                >
                    <i class=section.mobile_icon()></i>
                    <span>{section.mobile_label()}</span>
                </a>
            }).collect_view()}
        </nav>
    }
}
