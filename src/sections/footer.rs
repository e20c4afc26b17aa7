use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::anchors::Anchor;
use crate::config;
use crate::platform::BrowserWindow;
use crate::sections::navigation::anchor_click;

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer { background: #1A202C; color: white; padding: 3rem 0; }
                    .footer-row {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 2rem;
                    }
                    .footer-logo { font-size: 1.5rem; font-weight: 700; color: white; text-decoration: none; }
                    .footer-logo:hover, .footer-nav a:hover, .footer-social a:hover { color: var(--camel); }
                    .footer-copy { color: #9ca3af; font-size: 0.875rem; margin-top: 0.5rem; }
                    .footer-nav { display: flex; flex-wrap: wrap; justify-content: center; gap: 1.5rem; }
                    .footer-nav a, .footer-social a {
                        color: #9ca3af;
                        font-size: 0.875rem;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .footer-social { display: flex; gap: 1rem; }
                    .footer-credit {
                        margin-top: 2rem;
                        padding-top: 2rem;
                        border-top: 1px solid #1f2937;
                        text-align: center;
                        color: #6b7280;
                        font-size: 0.875rem;
                    }
                    @media (max-width: 768px) {
                        .footer-row { flex-direction: column; text-align: center; }
                    }
                "#}
            </style>
            <div class="container">
                <div class="footer-row">
                    <div>
                        <a href={Anchor::Home.href()} class="footer-logo" onclick={anchor_click(BrowserWindow, Anchor::Home, None)}>
                            {"Israel."}
                        </a>
                        <p class="footer-copy">
                            {format!("© {} {}. All rights reserved.", current_year, config::OWNER_NAME)}
                        </p>
                    </div>

                    <nav class="footer-nav">
                        { for Anchor::ALL.into_iter().map(|anchor| html! {
                            <a key={anchor.id()} href={anchor.href()} onclick={anchor_click(BrowserWindow, anchor, None)}>
                                {anchor.label()}
                            </a>
                        }) }
                    </nav>

                    <div class="footer-social">
                        <a href={config::GITHUB_URL} target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                            {"GitHub"}
                        </a>
                        <a href={config::LINKEDIN_URL} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                            {"LinkedIn"}
                        </a>
                    </div>
                </div>

                <div class="footer-credit">
                    {"Made with ♥ using Rust & Yew"}
                </div>
            </div>
        </footer>
    }
}
