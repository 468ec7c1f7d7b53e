//! `IntersectionObserver` backed visibility host and the page observer hook.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydrate-only. Sections are discovered by their DOM id and reveal targets by
//! the `data-reveal` attribute after the page has rendered; elements inserted
//! later are not picked up.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::state::reveal::REVEAL_ATTRIBUTE;
use crate::state::sections::{ScrollSpy, SectionId};
use crate::util::viewport::{
    BatchCallback, ObserveError, ObserverHandle, SectionTarget, VisibilityEntry, VisibilityHost, attach,
};

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Visibility host for the live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomVisibilityHost;

/// One live `IntersectionObserver` and the closure it calls into.
pub struct DomSubscription {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl VisibilityHost for DomVisibilityHost {
    type Element = Element;
    type Subscription = DomSubscription;

    fn subscribe(
        &self,
        targets: &[Element],
        thresholds: &[f64],
        mut on_batch: BatchCallback,
    ) -> Result<DomSubscription, ObserveError> {
        if targets.is_empty() {
            return Err(ObserveError::NoTargets);
        }

        let lookup = targets.to_vec();
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let batch: Vec<VisibilityEntry> = entries
                .iter()
                .filter_map(|value| {
                    let entry = value.dyn_into::<IntersectionObserverEntry>().ok()?;
                    let target: JsValue = entry.target().into();
                    let index = lookup.iter().position(|el| {
                        let candidate: &JsValue = el.as_ref();
                        *candidate == target
                    })?;
                    Some(VisibilityEntry { index, ratio: entry.intersection_ratio() })
                })
                .collect();
            if !batch.is_empty() {
                on_batch(&batch);
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        let threshold: js_sys::Array = thresholds.iter().map(|t| JsValue::from_f64(*t)).collect();
        options.set_threshold(&threshold);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| ObserveError::Unsupported(format!("{e:?}")))?;
        for target in targets {
            observer.observe(target);
        }

        Ok(DomSubscription { observer, _callback: callback })
    }

    fn unsubscribe(&self, subscription: DomSubscription) {
        // Disconnect before the closure is dropped with the subscription.
        subscription.observer.disconnect();
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&self, element: &Element, class: &str) {
        if let Err(e) = element.class_list().add_1(class) {
            log::debug!("viewport: could not add class {class:?}: {e:?}");
        }
    }
}

/// Collect section elements (by id) and reveal targets (by attribute).
pub fn discover_targets() -> (Vec<SectionTarget<Element>>, Vec<Element>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return (Vec::new(), Vec::new());
    };

    let sections = SectionId::ALL
        .into_iter()
        .filter_map(|section| {
            document
                .get_element_by_id(section.dom_id())
                .map(|element| SectionTarget { section, element })
        })
        .collect();

    let reveals = document
        .query_selector_all(&format!("[{REVEAL_ATTRIBUTE}]"))
        .map(|list| {
            (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect()
        })
        .unwrap_or_default();

    (sections, reveals)
}

/// Attach the viewport observer for the lifetime of the calling component.
///
/// Runs once after hydration. Any previous handle is detached before a new one
/// is attached; `on_cleanup` (and the handle's `Drop`) release it on unmount.
pub fn use_viewport_observer(scroll_spy: RwSignal<ScrollSpy>) {
    let handle = StoredValue::new_local(None::<ObserverHandle<DomVisibilityHost>>);

    Effect::new(move || {
        if let Some(mut previous) = handle.try_update_value(Option::take).flatten() {
            previous.detach();
        }

        let (sections, reveals) = discover_targets();
        let next = attach(Rc::new(DomVisibilityHost), sections, reveals, move |section| {
            scroll_spy.update(|spy| spy.active = section);
        });
        if !next.is_attached() {
            log::info!("viewport: no observation live; nav stays unhighlighted and content visible");
        }
        let tracking = next.tracks_sections();
        handle.set_value(Some(next));
        scroll_spy.update(|spy| spy.tracking = tracking);
    });

    on_cleanup(move || {
        if let Some(mut current) = handle.try_update_value(Option::take).flatten() {
            current.detach();
        }
        scroll_spy.try_update(|spy| spy.tracking = false);
    });
}
