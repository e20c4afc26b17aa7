use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::anchors::{follow_anchor, Anchor};
use crate::config;
use crate::platform::{BrowserWindow, Notifier, Viewport};
use crate::scroll::{is_scrolled, use_window_scroll};

/// Click handler for an in-page link: cancels the jump and smooth-scrolls instead.
pub fn anchor_click<V>(viewport: V, anchor: Anchor, after: Option<Callback<()>>) -> Callback<MouseEvent>
where
    V: Viewport + 'static,
{
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Err(err) = follow_anchor(&viewport, anchor.href()) {
            warn!("Could not scroll to {}: {}", anchor.href(), err);
        }
        if let Some(after) = &after {
            after.emit(());
        }
    })
}

fn resume_click(notifier: impl Notifier + 'static) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        notifier.notify(config::RESUME_PLACEHOLDER_NOTICE);
    })
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let platform = BrowserWindow;
    let menu_open = use_state(|| false);
    // use_state_eq so repeated samples on the same side of the threshold don't re-render
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_window_scroll(move |scroll_y| scrolled.set(is_scrolled(scroll_y)));
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let links = |class: &'static str| -> Html {
        Anchor::ALL
            .into_iter()
            .map(|anchor| {
                html! {
                    <a key={anchor.id()} href={anchor.href()} class={class}
                        onclick={anchor_click(platform, anchor, Some(close_menu.clone()))}>
                        {anchor.label()}
                    </a>
                }
            })
            .collect::<Html>()
    };

    html! {
        <nav class={classes!("top-nav", (*scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 72px;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: var(--navy);
                        text-decoration: none;
                    }
                    .nav-logo:hover, .nav-link:hover, .mobile-link:hover { color: var(--camel); }
                    .nav-links { display: flex; gap: 2rem; }
                    .nav-link {
                        color: var(--charcoal);
                        font-weight: 500;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        color: var(--charcoal);
                        cursor: pointer;
                    }
                    .mobile-menu {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        background: white;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        padding: 1.5rem 1rem;
                        flex-direction: column;
                        gap: 1rem;
                        opacity: 0;
                        transform: translateY(-1rem);
                        pointer-events: none;
                        transition: all 0.3s ease;
                    }
                    .mobile-menu.open {
                        opacity: 1;
                        transform: translateY(0);
                        pointer-events: auto;
                    }
                    .mobile-link {
                        display: block;
                        font-size: 1.125rem;
                        font-weight: 500;
                        color: var(--charcoal);
                        text-decoration: none;
                    }
                    @media (max-width: 768px) {
                        .nav-links, .nav-cta { display: none; }
                        .burger-menu { display: block; }
                        .mobile-menu { display: flex; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href={Anchor::Home.href()} class="nav-logo" onclick={anchor_click(platform, Anchor::Home, None)}>
                    {"Israel."}
                </a>

                <div class="nav-links">
                    { links("nav-link") }
                </div>

                <div class="nav-cta">
                    <a href={config::RESUME_PATH} class="btn-primary" onclick={resume_click(platform)}>
                        {"⬇ Download Resume"}
                    </a>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                { links("mobile-link") }
                <a href={config::RESUME_PATH} class="btn-primary" onclick={resume_click(platform)}>
                    {"⬇ Download Resume"}
                </a>
            </div>
        </nav>
    }
}
