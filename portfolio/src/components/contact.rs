//! Contact section and the client-side-only contact form

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::contact::{ContactDraft, discard_submission};
use crate::content;
use crate::types::SectionId;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section class="contact" id=SectionId::Contact.anchor()>
            <div class="container">
                <div class="contact-grid">
                    <div class="contact-details">
                        <h2 class="section-title left">"Let's Build the Future"</h2>
                        <p>
                            "Available for freelance opportunities, open-source collaborations, "
                            "and full-time engineering roles. Let's transform your vision into "
                            "a high-performance digital reality."
                        </p>

                        <div class="info-list">
                            {content::contact_details().into_iter().map(|detail| view! {
                                <div class="info-item">
                                    <i class=detail.icon></i>
                                    <div>
                                        <label>{detail.label}</label>
                                        <span>{detail.value}</span>
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>

                        <div class="social-links">
                            {content::social_links().into_iter().map(|link| {
                                // Placeholder links stay in the current tab
                                let (target, rel) = if link.external {
                                    (Some("_blank"), Some("noopener noreferrer"))
                                } else {
                                    (None, None)
                                };
                                view! {
                                    <a href=link.href title=link.title target=target rel=rel>
                                        <i class=link.icon></i>
                                    </a>
                                }
                            }).collect_view()}
                        </div>
                    </div>

                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

/// Name / email / message form. Submitting never leaves the page.
#[component]
pub fn ContactForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        let draft = ContactDraft {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        discard_submission(&ev, &draft);
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="form-group">
                <input
                    type="text"
                    placeholder="Full Name"
                    required=true
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <input
                    type="email"
                    placeholder="Email Address"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <textarea
                    placeholder="Describe your project or inquiry..."
                    rows="5"
                    required=true
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button type="submit" class="btn btn-primary">
                "Send Message "
                <i class="fas fa-rocket"></i>
            </button>
        </form>
    }
}
