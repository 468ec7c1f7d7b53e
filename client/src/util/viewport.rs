//! Viewport observation for scroll-spy navigation and reveal-on-scroll.
//!
//! ARCHITECTURE
//! ============
//! Two typed registrations share one `VisibilityHost`: sections report which
//! nav entry is active, reveal targets flip hidden -> shown once. Hosts report
//! entries by index into the subscribed list, so callbacks never inspect the
//! observed element to decide what it is.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser host (`dom_visibility`) wraps `IntersectionObserver`; tests use
//! an in-memory host. `attach` returns an owned `ObserverHandle`; the page
//! lifecycle holds it and must detach it before attaching again.
//!
//! TRADE-OFFS
//! ==========
//! A registration that cannot be created is logged and skipped instead of
//! failing the page. Reveal targets are armed (hidden) only after their
//! registration succeeds, so an unsupported host leaves content visible.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use std::rc::Rc;

use crate::state::reveal::{ARMED_CLASS, RevealSet, SHOWN_CLASS};
use crate::state::sections::{SectionId, pick_active};

/// Visible-ratio thresholds at which hosts deliver callbacks.
pub const VISIBILITY_THRESHOLDS: [f64; 3] = [0.1, 0.25, 0.5];

/// One visibility change for the element at `index` of a subscription.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityEntry {
    pub index: usize,
    pub ratio: f64,
}

/// Callback invoked with each batch of entries, in delivery order.
pub type BatchCallback = Box<dyn FnMut(&[VisibilityEntry])>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObserveError {
    #[error("visibility tracking unsupported: {0}")]
    Unsupported(String),
    #[error("no elements to observe")]
    NoTargets,
}

/// Host facility that reports element visibility asynchronously.
pub trait VisibilityHost {
    type Element: Clone + 'static;
    type Subscription;

    fn subscribe(
        &self,
        targets: &[Self::Element],
        thresholds: &[f64],
        on_batch: BatchCallback,
    ) -> Result<Self::Subscription, ObserveError>;

    /// Stop delivering callbacks for `subscription` and release its targets.
    fn unsubscribe(&self, subscription: Self::Subscription);

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    fn add_class(&self, element: &Self::Element, class: &str);
}

/// A section element paired with the section it represents.
#[derive(Clone, Debug)]
pub struct SectionTarget<E> {
    pub section: SectionId,
    pub element: E,
}

/// Owned registration returned by [`attach`]. Detaches on drop.
pub struct ObserverHandle<H: VisibilityHost> {
    host: Rc<H>,
    sections: Option<H::Subscription>,
    reveals: Option<H::Subscription>,
}

impl<H: VisibilityHost> ObserverHandle<H> {
    /// Whether section visibility is being tracked (nav highlighting live).
    pub fn tracks_sections(&self) -> bool {
        self.sections.is_some()
    }

    /// Whether reveal targets are armed and waiting to be shown.
    pub fn tracks_reveals(&self) -> bool {
        self.reveals.is_some()
    }

    /// Whether any registration is live.
    pub fn is_attached(&self) -> bool {
        self.tracks_sections() || self.tracks_reveals()
    }

    /// Release both registrations. Safe to call more than once.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.sections.take() {
            self.host.unsubscribe(subscription);
        }
        if let Some(subscription) = self.reveals.take() {
            self.host.unsubscribe(subscription);
        }
    }
}

impl<H: VisibilityHost> Drop for ObserverHandle<H> {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Register section and reveal observation on `host`.
///
/// `on_active` fires with the section a batch makes active (see
/// [`pick_active`]). Either registration may fail independently; the
/// returned handle reports which ones are live.
pub fn attach<H, F>(
    host: Rc<H>,
    sections: Vec<SectionTarget<H::Element>>,
    reveal_targets: Vec<H::Element>,
    on_active: F,
) -> ObserverHandle<H>
where
    H: VisibilityHost + 'static,
    F: FnMut(SectionId) + 'static,
{
    let section_count = sections.len();
    let reveal_count = reveal_targets.len();

    let sections = subscribe_sections(&host, sections, on_active)
        .map_err(|e| log::warn!("viewport: section tracking disabled: {e}"))
        .ok();
    let reveals = subscribe_reveals(&host, reveal_targets)
        .map_err(|e| log::warn!("viewport: reveal-on-scroll disabled: {e}"))
        .ok();

    let handle = ObserverHandle { host, sections, reveals };
    log::debug!(
        "viewport: attached (sections={section_count} live={}, reveals={reveal_count} live={})",
        handle.tracks_sections(),
        handle.tracks_reveals()
    );
    handle
}

fn subscribe_sections<H, F>(
    host: &Rc<H>,
    targets: Vec<SectionTarget<H::Element>>,
    mut on_active: F,
) -> Result<H::Subscription, ObserveError>
where
    H: VisibilityHost,
    F: FnMut(SectionId) + 'static,
{
    if targets.is_empty() {
        return Err(ObserveError::NoTargets);
    }
    let (ids, elements): (Vec<SectionId>, Vec<H::Element>) =
        targets.into_iter().map(|t| (t.section, t.element)).unzip();

    host.subscribe(
        &elements,
        &VISIBILITY_THRESHOLDS,
        Box::new(move |batch| {
            let ranked = batch
                .iter()
                .filter_map(|entry| ids.get(entry.index).map(|id| (*id, entry.ratio)));
            if let Some(section) = pick_active(ranked) {
                on_active(section);
            }
        }),
    )
}

fn subscribe_reveals<H>(host: &Rc<H>, targets: Vec<H::Element>) -> Result<H::Subscription, ObserveError>
where
    H: VisibilityHost + 'static,
{
    if targets.is_empty() {
        return Err(ObserveError::NoTargets);
    }
    // Targets shown under an earlier attachment stay shown.
    let already_shown: Vec<bool> = targets
        .iter()
        .map(|el| host.has_class(el, SHOWN_CLASS))
        .collect();
    let mut shown = RevealSet::from_flags(already_shown.clone());

    let callback_host = Rc::clone(host);
    let callback_targets = targets.clone();
    let subscription = host.subscribe(
        &targets,
        &VISIBILITY_THRESHOLDS,
        Box::new(move |batch| {
            for entry in batch {
                if shown.observe(entry.index, entry.ratio) {
                    if let Some(el) = callback_targets.get(entry.index) {
                        callback_host.add_class(el, SHOWN_CLASS);
                    }
                }
            }
        }),
    )?;

    for (el, was_shown) in targets.iter().zip(already_shown) {
        if !was_shown {
            host.add_class(el, ARMED_CLASS);
        }
    }
    Ok(subscription)
}
