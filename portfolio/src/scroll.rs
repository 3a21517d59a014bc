//! Scroll-position tracking for the navigation highlight.
//!
//! On every scroll event the tracker walks [`SectionId::ALL`] in order and
//! picks the first section whose vertical bounds contain the scroll offset
//! plus [`HEADER_OFFSET`]. When nothing matches the previous section stays
//! active. Overlapping bounds resolve to the earlier section in the list.
//!
//! The layout and the event source are traits so the same logic runs
//! against the browser (`portfolio-site`) and against fakes in tests.
//!
//! ```text
//! ScrollSource ──subscribe──▶ handler ──▶ ScrollTracker::resolve ──▶ signal
//!      ▲                                        │
//!      └──────── unsubscribe on drop ◀── ScrollSubscription
//! ```

use leptos::prelude::*;
use tracing::debug;

use crate::types::SectionId;

/// Fixed-header compensation added to the scroll offset, in pixels.
pub const HEADER_OFFSET: f64 = 100.0;

/// Vertical extent of a section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    /// `offsetTop`
    pub top: f64,
    /// `offsetHeight`
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `top <= y < top + height`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Read-only view of the host document layout.
pub trait LayoutProbe {
    /// Current vertical scroll position.
    fn scroll_offset(&self) -> f64;

    /// Bounds of `section`, or `None` if its element is not in the tree.
    fn section_bounds(&self, section: SectionId) -> Option<SectionBounds>;
}

/// First section (in scan order) containing the adjusted scroll offset.
pub fn locate_section<P: LayoutProbe + ?Sized>(probe: &P, header_offset: f64) -> Option<SectionId> {
    let position = probe.scroll_offset() + header_offset;
    SectionId::ALL.into_iter().find(|&section| {
        probe
            .section_bounds(section)
            .is_some_and(|bounds| bounds.contains(position))
    })
}

/// Resolves the active section from a layout probe.
#[derive(Clone, Debug)]
pub struct ScrollTracker<P> {
    probe: P,
    header_offset: f64,
}

impl<P: LayoutProbe> ScrollTracker<P> {
    pub fn new(probe: P, header_offset: f64) -> Self {
        Self {
            probe,
            header_offset,
        }
    }

    /// The located section, or `prior` when no section matches.
    pub fn resolve(&self, prior: SectionId) -> SectionId {
        locate_section(&self.probe, self.header_offset).unwrap_or(prior)
    }
}

/// Something that can deliver scroll notifications.
pub trait ScrollSource {
    /// Token identifying one registered listener.
    type Handle;

    /// Register `handler` to run on every scroll event.
    fn subscribe<F>(&self, handler: F) -> Self::Handle
    where
        F: Fn() + Send + Sync + 'static;

    /// Remove the listener registered under `handle`.
    fn unsubscribe(&self, handle: Self::Handle);
}

/// Scoped scroll listener: registered on creation, removed on drop.
pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    handle: Option<S::Handle>,
}

impl<S: ScrollSource> ScrollSubscription<S> {
    pub fn new<F>(source: S, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let handle = source.subscribe(handler);
        Self {
            source,
            handle: Some(handle),
        }
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.source.unsubscribe(handle);
        }
    }
}

/// Track the active section for the lifetime of the current reactive owner.
///
/// Starts at [`SectionId::Home`] and only recomputes on scroll events. The
/// listener is removed when the owner is cleaned up.
pub fn use_active_section<S, P>(source: S, probe: P, header_offset: f64) -> ReadSignal<SectionId>
where
    S: ScrollSource + Send + Sync + 'static,
    S::Handle: Send + Sync + 'static,
    P: LayoutProbe + Send + Sync + 'static,
{
    let (active, set_active) = signal(SectionId::Home);
    let tracker = ScrollTracker::new(probe, header_offset);

    let subscription = ScrollSubscription::new(source, move || {
        let prior = active.get_untracked();
        let next = tracker.resolve(prior);
        if next != prior {
            debug!(from = %prior, to = %next, "active section changed");
            set_active.set(next);
        }
    });
    on_cleanup(move || drop(subscription));

    active
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    type Listener = Arc<dyn Fn() + Send + Sync>;

    /// Window stand-in that counts listeners and fires them on demand.
    #[derive(Clone, Default)]
    struct FakeWindow {
        listeners: Arc<Mutex<Vec<(usize, Listener)>>>,
        next_id: Arc<AtomicUsize>,
    }

    impl FakeWindow {
        fn listener_count(&self) -> usize {
            self.listeners.lock().expect("listeners").len()
        }

        fn scroll(&self) {
            let listeners: Vec<Listener> = self
                .listeners
                .lock()
                .expect("listeners")
                .iter()
                .map(|(_, l)| Arc::clone(l))
                .collect();
            for listener in listeners {
                listener();
            }
        }
    }

    impl ScrollSource for FakeWindow {
        type Handle = usize;

        fn subscribe<F>(&self, handler: F) -> usize
        where
            F: Fn() + Send + Sync + 'static,
        {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            self.listeners
                .lock()
                .expect("listeners")
                .push((id, Arc::new(handler)));
            id
        }

        fn unsubscribe(&self, handle: usize) {
            self.listeners
                .lock()
                .expect("listeners")
                .retain(|(id, _)| *id != handle);
        }
    }

    /// Page with five stacked 800px sections.
    #[derive(Clone)]
    struct FakeLayout {
        scroll_y: Arc<Mutex<f64>>,
        sections: HashMap<SectionId, SectionBounds>,
    }

    impl FakeLayout {
        fn stacked() -> Self {
            let sections = SectionId::ALL
                .into_iter()
                .enumerate()
                .map(|(i, s)| (s, SectionBounds::new(i as f64 * 800.0, 800.0)))
                .collect();
            Self {
                scroll_y: Arc::new(Mutex::new(0.0)),
                sections,
            }
        }

        fn without(mut self, section: SectionId) -> Self {
            self.sections.remove(&section);
            self
        }

        fn with(mut self, section: SectionId, bounds: SectionBounds) -> Self {
            self.sections.insert(section, bounds);
            self
        }

        fn scroll_to(&self, y: f64) {
            *self.scroll_y.lock().expect("scroll") = y;
        }
    }

    impl LayoutProbe for FakeLayout {
        fn scroll_offset(&self) -> f64 {
            *self.scroll_y.lock().expect("scroll")
        }

        fn section_bounds(&self, section: SectionId) -> Option<SectionBounds> {
            self.sections.get(&section).copied()
        }
    }

    #[test]
    fn bounds_are_half_open() {
        let bounds = SectionBounds::new(100.0, 50.0);
        assert!(bounds.contains(100.0));
        assert!(bounds.contains(149.9));
        assert!(!bounds.contains(150.0));
        assert!(!bounds.contains(99.9));
    }

    #[test]
    fn header_offset_pushes_into_next_section() {
        let layout = FakeLayout::stacked();
        layout.scroll_to(700.0);
        assert_eq!(locate_section(&layout, HEADER_OFFSET), Some(SectionId::About));
        assert_eq!(locate_section(&layout, 0.0), Some(SectionId::Home));
    }

    #[test]
    fn portfolio_becomes_active() {
        let layout = FakeLayout::stacked();
        layout.scroll_to(2500.0);
        let tracker = ScrollTracker::new(layout, HEADER_OFFSET);
        let active = tracker.resolve(SectionId::Home);
        assert_eq!(active, SectionId::Portfolio);
        assert_eq!(active.hash(), "#portfolio");
    }

    #[test]
    fn resolving_twice_is_stable() {
        let layout = FakeLayout::stacked();
        layout.scroll_to(1700.0);
        let tracker = ScrollTracker::new(layout, HEADER_OFFSET);
        let first = tracker.resolve(SectionId::Home);
        let second = tracker.resolve(first);
        assert_eq!(first, SectionId::Experience);
        assert_eq!(first, second);
    }

    #[test]
    fn no_match_keeps_prior_section() {
        let layout = FakeLayout::stacked();
        layout.scroll_to(10_000.0);
        let tracker = ScrollTracker::new(layout, HEADER_OFFSET);
        assert_eq!(tracker.resolve(SectionId::Contact), SectionId::Contact);
        assert_eq!(tracker.resolve(SectionId::About), SectionId::About);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let layout = FakeLayout::stacked().without(SectionId::About);
        layout.scroll_to(900.0);
        assert_eq!(locate_section(&layout, HEADER_OFFSET), None);

        layout.scroll_to(1700.0);
        assert_eq!(
            locate_section(&layout, HEADER_OFFSET),
            Some(SectionId::Experience)
        );
    }

    #[test]
    fn overlapping_bounds_favour_earlier_section() {
        let layout = FakeLayout::stacked().with(SectionId::About, SectionBounds::new(800.0, 1600.0));
        layout.scroll_to(1700.0);
        assert_eq!(locate_section(&layout, HEADER_OFFSET), Some(SectionId::About));
    }

    #[test]
    fn subscription_registers_once_and_releases_on_drop() {
        let window = FakeWindow::default();
        let subscription = ScrollSubscription::new(window.clone(), || {});
        assert_eq!(window.listener_count(), 1);

        drop(subscription);
        assert_eq!(window.listener_count(), 0);
    }

    #[test]
    fn hook_follows_scroll_and_cleans_up() {
        let window = FakeWindow::default();
        let layout = FakeLayout::stacked();

        let owner = Owner::new();
        let active = owner.with(|| {
            use_active_section(window.clone(), layout.clone(), HEADER_OFFSET)
        });
        assert_eq!(window.listener_count(), 1);
        assert_eq!(active.get_untracked(), SectionId::Home);

        layout.scroll_to(2500.0);
        window.scroll();
        assert_eq!(active.get_untracked(), SectionId::Portfolio);

        window.scroll();
        assert_eq!(active.get_untracked(), SectionId::Portfolio);

        owner.cleanup();
        assert_eq!(window.listener_count(), 0);
    }
}
