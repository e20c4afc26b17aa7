//! Scroll-triggered reveal animations.
//!
//! Every element in a section carrying the `reveal` class starts hidden and is
//! given the `active` class the first time it scrolls into view; the CSS
//! transition does the rest. Each section owns one [`ObservationSession`] for
//! as long as it is mounted.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

pub const REVEAL_CLASS: &str = "reveal";
pub const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible before it activates.
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl RevealOptions {
    pub const fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: config::REVEAL_ROOT_MARGIN,
        }
    }
}

/// Something that can report when targets cross into the viewport.
pub trait VisibilityObserver {
    type Target: RevealTarget;

    fn observe(&mut self, target: &Self::Target);
    fn unobserve(&mut self, target: &Self::Target);
    fn disconnect(&mut self);
}

pub trait RevealTarget: PartialEq {
    /// Flips the element into its revealed state. Must be idempotent.
    fn activate(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionState {
    Idle,
    Observing,
    Cancelled,
}

pub struct ObservationSession<O: VisibilityObserver> {
    observer: Option<O>,
    pending: Vec<O::Target>,
    state: SessionState,
}

impl<O: VisibilityObserver> Default for ObservationSession<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: VisibilityObserver> ObservationSession<O> {
    pub fn new() -> Self {
        Self {
            observer: None,
            pending: Vec::new(),
            state: SessionState::Idle,
        }
    }

    /// Starts watching `targets`. Without an observer every target is
    /// activated on the spot, so the page still shows everything.
    pub fn start(&mut self, observer: Option<O>, targets: Vec<O::Target>) {
        if self.state != SessionState::Idle {
            debug!("Reveal session already {:?}, ignoring start", self.state);
            return;
        }
        self.state = SessionState::Observing;

        let Some(mut observer) = observer else {
            for target in &targets {
                target.activate();
            }
            return;
        };

        for target in &targets {
            observer.observe(target);
        }
        self.pending = targets;
        self.observer = Some(observer);
    }

    /// Handles one batch of `(target, is_intersecting)` reports.
    pub fn on_intersections<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (O::Target, bool)>,
    {
        if self.state != SessionState::Observing {
            return;
        }
        for (target, intersecting) in entries {
            if !intersecting {
                continue;
            }
            let Some(index) = self.pending.iter().position(|pending| *pending == target) else {
                continue;
            };
            let target = self.pending.swap_remove(index);
            target.activate();
            if let Some(observer) = self.observer.as_mut() {
                observer.unobserve(&target);
            }
        }
    }

    /// Stops every remaining observation. Nothing activates after this returns.
    pub fn cancel(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
        self.pending.clear();
        self.state = SessionState::Cancelled;
    }

    pub fn pending(&self) -> &[O::Target] {
        &self.pending
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == SessionState::Cancelled
    }
}

impl RevealTarget for Element {
    fn activate(&self) {
        if self.class_list().add_1(ACTIVE_CLASS).is_err() {
            warn!("Could not mark element as revealed");
        }
    }
}

pub struct DomObserver {
    inner: IntersectionObserver,
}

impl VisibilityObserver for DomObserver {
    type Target = Element;

    fn observe(&mut self, target: &Element) {
        self.inner.observe(target);
    }

    fn unobserve(&mut self, target: &Element) {
        self.inner.unobserve(target);
    }

    fn disconnect(&mut self) {
        self.inner.disconnect();
    }
}

/// Owning handle to a session that other callbacks may share. Dropping the
/// guard cancels the session even while those callbacks still hold it.
pub struct SessionGuard<O: VisibilityObserver> {
    session: Rc<RefCell<ObservationSession<O>>>,
}

impl<O: VisibilityObserver> Default for SessionGuard<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: VisibilityObserver> SessionGuard<O> {
    pub fn new() -> Self {
        Self {
            session: Rc::new(RefCell::new(ObservationSession::new())),
        }
    }

    pub fn share(&self) -> Rc<RefCell<ObservationSession<O>>> {
        self.session.clone()
    }
}

impl<O: VisibilityObserver> Drop for SessionGuard<O> {
    fn drop(&mut self) {
        let Ok(mut session) = self.session.try_borrow_mut() else {
            warn!("Reveal session busy while unmounting, not cancelled");
            return;
        };
        if !session.is_cancelled() {
            debug!("Cancelling reveal session, {} elements never shown", session.pending().len());
            session.cancel();
        }
    }
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// A live reveal session bound to one section root. Dropping it cancels the
/// session and releases the browser observer.
pub struct SectionReveal {
    _guard: SessionGuard<DomObserver>,
    _callback: EntriesCallback,
}

impl SectionReveal {
    pub fn attach(section: &Element, options: RevealOptions) -> Self {
        let guard = SessionGuard::new();

        let callback = {
            let session = guard.share();
            Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
                let reports = entries.iter().filter_map(|entry| {
                    let entry = entry.dyn_into::<IntersectionObserverEntry>().ok()?;
                    Some((entry.target(), entry.is_intersecting()))
                });
                if let Ok(mut session) = session.try_borrow_mut() {
                    session.on_intersections(reports);
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let observer = new_observer(&callback, options);
        if observer.is_none() {
            warn!("IntersectionObserver unavailable, revealing section without animation");
        }

        let targets = revealable_children(section);
        debug!(
            "Reveal session on #{} watching {} elements",
            section.id(),
            targets.len()
        );
        guard.share().borrow_mut().start(observer, targets);

        Self {
            _guard: guard,
            _callback: callback,
        }
    }
}

fn new_observer(callback: &EntriesCallback, options: RevealOptions) -> Option<DomObserver> {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .ok()
        .map(|inner| DomObserver { inner })
}

fn revealable_children(section: &Element) -> Vec<Element> {
    let Ok(nodes) = section.query_selector_all(&format!(".{}", REVEAL_CLASS)) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Runs a reveal session over the element behind `section` while the calling
/// component is mounted.
#[hook]
pub fn use_reveal(section: NodeRef, options: RevealOptions) {
    use_effect_with_deps(
        move |section: &NodeRef| {
            let reveal = section
                .cast::<Element>()
                .map(|root| SectionReveal::attach(&root, options));
            move || drop(reveal)
        },
        section,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    type Log = Rc<RefCell<Vec<String>>>;

    #[derive(Clone, Debug)]
    struct FakeElement {
        name: &'static str,
        activations: Rc<RefCell<u32>>,
        log: Log,
    }

    impl FakeElement {
        fn new(name: &'static str, log: &Log) -> Self {
            Self {
                name,
                activations: Rc::new(RefCell::new(0)),
                log: log.clone(),
            }
        }

        fn activations(&self) -> u32 {
            *self.activations.borrow()
        }
    }

    impl PartialEq for FakeElement {
        fn eq(&self, other: &Self) -> bool {
            self.name == other.name
        }
    }

    impl RevealTarget for FakeElement {
        fn activate(&self) {
            *self.activations.borrow_mut() += 1;
            self.log.borrow_mut().push(format!("activate {}", self.name));
        }
    }

    struct FakeObserver {
        log: Log,
    }

    impl VisibilityObserver for FakeObserver {
        type Target = FakeElement;

        fn observe(&mut self, target: &FakeElement) {
            self.log.borrow_mut().push(format!("observe {}", target.name));
        }

        fn unobserve(&mut self, target: &FakeElement) {
            self.log.borrow_mut().push(format!("unobserve {}", target.name));
        }

        fn disconnect(&mut self) {
            self.log.borrow_mut().push("disconnect".to_string());
        }
    }

    fn started(names: &[&'static str]) -> (ObservationSession<FakeObserver>, Vec<FakeElement>, Log) {
        let log: Log = Rc::default();
        let elements: Vec<_> = names.iter().map(|&name| FakeElement::new(name, &log)).collect();
        let mut session = ObservationSession::new();
        session.start(Some(FakeObserver { log: log.clone() }), elements.clone());
        (session, elements, log)
    }

    #[test]
    fn start_observes_every_element() {
        let (session, _, log) = started(&["header", "card"]);

        assert_eq!(*log.borrow(), vec!["observe header", "observe card"]);
        assert_eq!(session.pending().len(), 2);
    }

    #[test]
    fn intersecting_element_activates_then_is_unobserved() {
        let (mut session, elements, log) = started(&["header", "card"]);
        log.borrow_mut().clear();

        session.on_intersections(vec![(elements[1].clone(), true)]);

        assert_eq!(*log.borrow(), vec!["activate card", "unobserve card"]);
        assert_eq!(elements[0].activations(), 0);
        assert_eq!(elements[1].activations(), 1);
        assert_eq!(session.pending(), &[elements[0].clone()]);
    }

    #[test]
    fn element_activates_at_most_once() {
        let (mut session, elements, _) = started(&["card"]);

        session.on_intersections(vec![(elements[0].clone(), true)]);
        session.on_intersections(vec![(elements[0].clone(), false)]);
        session.on_intersections(vec![(elements[0].clone(), true), (elements[0].clone(), true)]);

        assert_eq!(elements[0].activations(), 1);
        assert!(session.pending().is_empty());
    }

    #[test]
    fn non_intersecting_reports_leave_element_pending() {
        let (mut session, elements, _) = started(&["card"]);

        session.on_intersections(vec![(elements[0].clone(), false)]);

        assert_eq!(elements[0].activations(), 0);
        assert_eq!(session.pending().len(), 1);
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let (mut session, elements, log) = started(&["card"]);
        let stranger = FakeElement::new("stranger", &log);

        session.on_intersections(vec![(stranger.clone(), true)]);

        assert_eq!(stranger.activations(), 0);
        assert_eq!(session.pending(), &elements[..]);
    }

    #[test]
    fn no_activation_after_cancel() {
        let (mut session, elements, log) = started(&["header", "card"]);
        session.on_intersections(vec![(elements[0].clone(), true)]);

        session.cancel();
        session.on_intersections(vec![(elements[1].clone(), true)]);

        assert!(session.is_cancelled());
        assert!(session.pending().is_empty());
        assert_eq!(elements[1].activations(), 0);
        assert_eq!(log.borrow().last().map(String::as_str), Some("disconnect"));
        // Activated elements stay activated.
        assert_eq!(elements[0].activations(), 1);
    }

    #[test]
    fn cancelled_session_cannot_restart() {
        let (mut session, _, log) = started(&["card"]);
        session.cancel();
        log.borrow_mut().clear();

        let late = FakeElement::new("late", &log);
        session.start(Some(FakeObserver { log: log.clone() }), vec![late.clone()]);

        assert!(log.borrow().is_empty());
        assert_eq!(late.activations(), 0);
    }

    #[test]
    fn missing_observer_reveals_everything_immediately() {
        let log: Log = Rc::default();
        let elements = vec![FakeElement::new("header", &log), FakeElement::new("card", &log)];
        let mut session = ObservationSession::<FakeObserver>::new();

        session.start(None, elements.clone());

        assert!(elements.iter().all(|element| element.activations() == 1));
        assert!(session.pending().is_empty());

        session.on_intersections(vec![(elements[0].clone(), true)]);
        session.cancel();
        assert_eq!(elements[0].activations(), 1);
    }

    #[test]
    fn dropping_guard_cancels_shared_session() {
        let log: Log = Rc::default();
        let card = FakeElement::new("card", &log);
        let guard = SessionGuard::new();
        let shared = guard.share();
        shared
            .borrow_mut()
            .start(Some(FakeObserver { log: log.clone() }), vec![card.clone()]);

        drop(guard);
        shared.borrow_mut().on_intersections(vec![(card.clone(), true)]);

        assert!(shared.borrow().is_cancelled());
        assert_eq!(*log.borrow(), vec!["observe card", "disconnect"]);
        assert_eq!(card.activations(), 0);
    }

    #[test]
    fn dropping_idle_guard_only_marks_cancelled() {
        let guard = SessionGuard::<FakeObserver>::new();
        let shared = guard.share();

        drop(guard);

        assert!(shared.borrow().is_cancelled());
        assert!(shared.borrow().pending().is_empty());
    }

    #[test]
    fn reveal_options_share_root_margin() {
        let options = RevealOptions::with_threshold(0.2);
        assert_eq!(options.root_margin, "0px 0px -50px 0px");
        assert_eq!(options.threshold, 0.2);
    }
}
