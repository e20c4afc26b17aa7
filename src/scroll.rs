use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Window};
use yew::prelude::*;

use crate::config;
use crate::platform::Viewport;

/// Vertical shift in px for the hero portrait at scroll offset `scroll_y`.
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * config::PARALLAX_FACTOR
}

/// Whether the nav bar should switch to its opaque variant.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLL_THRESHOLD
}

/// A passive `scroll` listener on the window, removed again on drop.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach<F>(window: Window, on_scroll: F) -> Option<Self>
    where
        F: Fn(f64) + 'static,
    {
        // Sample once so a reload mid-page starts from the right state.
        on_scroll(window.scroll_offset());

        let sampler = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            on_scroll(sampler.scroll_offset());
        }) as Box<dyn FnMut()>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            warn!("Could not listen for scroll events: {:?}", err);
            return None;
        }

        Some(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

/// Calls `on_scroll` with the page offset on every scroll while mounted.
#[hook]
pub fn use_window_scroll<F>(on_scroll: F)
where
    F: Fn(f64) + 'static,
{
    use_effect_with_deps(
        move |_| {
            let listener = web_sys::window().and_then(|window| ScrollListener::attach(window, on_scroll));
            move || drop(listener)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_turns_opaque_strictly_past_twenty_pixels() {
        assert!(is_scrolled(25.0));
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }

    #[test]
    fn scrolling_down_and_back_up_toggles_flag() {
        let samples = [0.0, 25.0, 400.0, 0.0];
        let flags: Vec<bool> = samples.iter().copied().map(is_scrolled).collect();
        assert_eq!(flags, vec![false, true, true, false]);
    }

    #[test]
    fn parallax_is_a_tenth_of_the_offset() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(250.0), 25.0);
    }

    #[test]
    fn parallax_grows_with_offset() {
        let offsets: Vec<f64> = (0..50).map(|step| parallax_offset(step as f64 * 37.0)).collect();
        assert!(offsets.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn same_sample_gives_same_result() {
        for y in [0.0, 20.0, 21.0, 1234.5] {
            assert_eq!(parallax_offset(y), parallax_offset(y));
            assert_eq!(is_scrolled(y), is_scrolled(y));
        }
    }
}
