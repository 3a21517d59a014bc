use leptos::prelude::*;

use crate::content::{BRAND, COPYRIGHT};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="container">
                <div class="footer-content">
                    <div class="footer-logo">{BRAND}<span>"."</span></div>
                    <p>{COPYRIGHT}</p>
                </div>
            </div>
        </footer>
    }
}
