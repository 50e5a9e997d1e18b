use std::collections::BTreeSet;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// Indices of elements that have been on screen at least once. Only grows,
/// and never holds an index at or past `limit`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibilitySet {
    seen: BTreeSet<usize>,
    limit: usize,
}

impl VisibilitySet {
    pub fn new(limit: usize) -> Self {
        Self { seen: BTreeSet::new(), limit }
    }

    /// True if `index` was not visible before.
    pub fn insert(&mut self, index: usize) -> bool {
        index < self.limit && self.seen.insert(index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.seen.contains(&index)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.seen.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTarget {
    Title,
    Tier(usize),
}

/// One intersection report for a watched element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Observation {
    pub target: RevealTarget,
    pub intersecting: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealState {
    pub title_visible: bool,
    pub tiers: VisibilitySet,
}

impl RevealState {
    pub fn new(tier_count: usize) -> Self {
        Self {
            title_visible: false,
            tiers: VisibilitySet::new(tier_count),
        }
    }
}

impl Reducible for RevealState {
    type Action = Observation;

    fn reduce(self: Rc<Self>, observation: Observation) -> Rc<Self> {
        // Leaving the viewport never hides anything again.
        if !observation.intersecting {
            return self;
        }

        match observation.target {
            RevealTarget::Title if self.title_visible => self,
            RevealTarget::Title => Rc::new(Self {
                title_visible: true,
                tiers: self.tiers.clone(),
            }),
            RevealTarget::Tier(index) => {
                let mut tiers = self.tiers.clone();
                if tiers.insert(index) {
                    Rc::new(Self {
                        title_visible: self.title_visible,
                        tiers,
                    })
                } else {
                    self
                }
            }
        }
    }
}

/// Watches a set of keyed elements and reports `(key, intersecting)` for
/// each. An element is unobserved right after its first intersection.
/// Everything is disconnected when this is dropped.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn watch(targets: Vec<(usize, Element)>, on_seen: Callback<(usize, bool)>) -> Result<Self, JsValue> {
        let watched = targets.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let element = entry.target();
                let Some((key, _)) = watched.iter().find(|(_, candidate)| *candidate == element) else {
                    continue;
                };
                let intersecting = entry.is_intersecting();
                if intersecting {
                    observer.unobserve(&element);
                }
                on_seen.emit((*key, intersecting));
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for (_, element) in &targets {
            observer.observe(element);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(target: RevealTarget, intersecting: bool) -> Observation {
        Observation { target, intersecting }
    }

    #[test]
    fn tier_stays_visible_after_leaving_viewport() {
        let state = Rc::new(RevealState::new(3));
        let state = state.reduce(seen(RevealTarget::Tier(1), true));
        let state = state.reduce(seen(RevealTarget::Tier(1), false));
        assert!(state.tiers.contains(1));
        assert!(!state.tiers.contains(0));
        assert!(!state.title_visible);
    }

    #[test]
    fn non_intersecting_report_reveals_nothing() {
        let state = Rc::new(RevealState::new(3));
        let after = state.clone().reduce(seen(RevealTarget::Title, false));
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn repeated_reports_keep_the_same_state() {
        let state = Rc::new(RevealState::new(3)).reduce(seen(RevealTarget::Title, true));
        let again = state.clone().reduce(seen(RevealTarget::Title, true));
        assert!(Rc::ptr_eq(&state, &again));

        let state = state.reduce(seen(RevealTarget::Tier(2), true));
        let again = state.clone().reduce(seen(RevealTarget::Tier(2), true));
        assert!(Rc::ptr_eq(&state, &again));
        assert!(again.title_visible);
    }

    #[test]
    fn out_of_order_reports_all_land() {
        let mut state = Rc::new(RevealState::new(3));
        for index in [2, 0, 1] {
            state = state.reduce(seen(RevealTarget::Tier(index), true));
        }
        assert_eq!(state.tiers.len(), 3);
    }

    #[test]
    fn set_is_bounded_by_tier_count() {
        let mut set = VisibilitySet::new(2);
        assert!(set.insert(0));
        assert!(!set.insert(0));
        assert!(!set.insert(2));
        assert_eq!(set.len(), 1);
    }
}
