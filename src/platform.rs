//! Small capability interfaces over the browser globals the page touches,
//! so the logic that drives them can run against fakes in tests.

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::anchors::Anchor;
use crate::error::PageError;
use crate::mailto::MailtoLink;

#[cfg_attr(test, mockall::automock)]
pub trait Viewport {
    /// Current vertical scroll offset of the page in px.
    fn scroll_offset(&self) -> f64;

    /// Smooth-scrolls so the section root for `anchor` sits at the top of the viewport.
    fn smooth_scroll_to(&self, anchor: Anchor) -> Result<(), PageError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait MailComposer {
    /// Hands the message to the user's mail client. Fire-and-forget: success
    /// here only means the browser accepted the navigation.
    fn compose(&self, link: &MailtoLink) -> Result<(), PageError>;
}

/// Runs a task once after a delay. Dropping the returned handle before the
/// delay elapses cancels the task.
#[cfg_attr(test, mockall::automock(type Handle = ();))]
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

pub trait Notifier {
    fn notify(&self, message: &str);
}

/// The real window. Stateless; every call looks the window up again.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserWindow;

impl BrowserWindow {
    pub fn window(&self) -> Result<Window, PageError> {
        web_sys::window().ok_or(PageError::NoWindow)
    }
}

impl Viewport for Window {
    fn scroll_offset(&self) -> f64 {
        self.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, anchor: Anchor) -> Result<(), PageError> {
        let section = self
            .document()
            .ok_or(PageError::NoDocument)?
            .get_element_by_id(anchor.id())
            .ok_or(PageError::MissingSection(anchor.id()))?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&options);
        debug!("Scrolling to {}", anchor.href());
        Ok(())
    }
}

impl Viewport for BrowserWindow {
    fn scroll_offset(&self) -> f64 {
        self.window().map(|window| window.scroll_offset()).unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, anchor: Anchor) -> Result<(), PageError> {
        self.window()?.smooth_scroll_to(anchor)
    }
}

impl MailComposer for BrowserWindow {
    fn compose(&self, link: &MailtoLink) -> Result<(), PageError> {
        self.window()?
            .location()
            .set_href(&link.to_uri())
            .map_err(PageError::from)
    }
}

impl Notifier for BrowserWindow {
    fn notify(&self, message: &str) {
        let shown: Result<(), JsValue> = match self.window() {
            Ok(window) => window.alert_with_message(message),
            Err(_) => Ok(()),
        };
        if shown.is_err() {
            log::warn!("Could not show notice: {}", message);
        }
    }
}

impl Scheduler for BrowserWindow {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}
