//! Browser implementations of the layout probe and scroll source.

use leptos::ev;
use leptos::prelude::*;
use portfolio_leptos::scroll::{LayoutProbe, ScrollSource, SectionBounds};
use portfolio_leptos::types::SectionId;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Reads layout metrics from the live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomLayout;

impl LayoutProbe for DomLayout {
    fn scroll_offset(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn section_bounds(&self, section: SectionId) -> Option<SectionBounds> {
        let element = web_sys::window()?
            .document()?
            .get_element_by_id(section.anchor())?
            .dyn_into::<HtmlElement>()
            .ok()?;

        Some(SectionBounds::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }
}

/// `scroll` events on the window.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    type Handle = WindowListenerHandle;

    fn subscribe<F>(&self, handler: F) -> WindowListenerHandle
    where
        F: Fn() + Send + Sync + 'static,
    {
        window_event_listener(ev::scroll, move |_| handler())
    }

    fn unsubscribe(&self, handle: WindowListenerHandle) {
        handle.remove();
    }
}
