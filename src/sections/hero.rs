use log::warn;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::anchors::Anchor;
use crate::config;
use crate::content::HERO_STATS;
use crate::platform::BrowserWindow;
use crate::scroll::{parallax_offset, use_window_scroll};
use crate::sections::navigation::anchor_click;

fn fade_in(delay_ms: u32) -> String {
    format!("animation-delay: {}ms; animation-fill-mode: forwards;", delay_ms)
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let image_ref = use_node_ref();

    {
        let image_ref = image_ref.clone();
        use_window_scroll(move |scroll_y| {
            if let Some(image) = image_ref.cast::<HtmlElement>() {
                let shift = format!("translateY({}px)", parallax_offset(scroll_y));
                if let Err(err) = image.style().set_property("transform", &shift) {
                    warn!("Could not move hero portrait: {:?}", err);
                }
            }
        });
    }

    html! {
        <section id={Anchor::Home.id()} class="hero">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding-top: 72px;
                        background: linear-gradient(135deg, #fff, #fff, var(--off-white));
                    }
                    .hero-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                        padding: 5rem 0;
                    }
                    .hero-greeting { color: var(--camel); font-weight: 600; font-size: 1.125rem; }
                    .hero h1 { font-size: 3.75rem; font-weight: 800; color: var(--navy); line-height: 1.1; margin: 0.5rem 0; }
                    .hero-subtitle { font-size: 1.5rem; color: var(--charcoal); font-weight: 500; }
                    .hero-description { font-size: 1.125rem; color: #4b5563; line-height: 1.7; max-width: 36rem; }
                    .hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; padding-top: 1rem; }
                    .hero-stats { display: flex; flex-wrap: wrap; gap: 2rem; padding-top: 2rem; }
                    .hero-stats .value { font-size: 1.875rem; font-weight: 700; color: var(--navy); margin: 0; }
                    .hero-stats .label { font-size: 0.875rem; color: #6b7280; margin: 0; }
                    .hero-portrait { position: relative; justify-self: end; }
                    .hero-portrait .frame {
                        position: relative;
                        width: 380px;
                        height: 520px;
                        border-radius: 1rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .hero-portrait img { width: 100%; height: 100%; object-fit: cover; }
                    .open-badge {
                        position: absolute;
                        bottom: -1rem;
                        left: -1rem;
                        background: white;
                        border-radius: 0.75rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        padding: 0.75rem 1rem;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        animation: float 3s ease-in-out infinite;
                    }
                    .open-badge .dot { width: 0.75rem; height: 0.75rem; border-radius: 50%; background: #22c55e; }
                    .fade-in-up { opacity: 0; animation: fadeInUp 0.6s ease-out; }
                    .scale-in { opacity: 0; animation: scaleIn 0.6s ease-out; }
                    @keyframes fadeInUp {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes scaleIn {
                        from { opacity: 0; transform: scale(0.95); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    @keyframes float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-6px); }
                    }
                    @media (max-width: 1024px) {
                        .hero-grid { grid-template-columns: 1fr; }
                        .hero-portrait { order: -1; justify-self: center; }
                        .hero-portrait .frame { width: 280px; height: 380px; }
                        .hero h1 { font-size: 2.25rem; }
                    }
                "#}
            </style>
            <div class="container">
                <div class="hero-grid">
                    <div>
                        <p class="hero-greeting fade-in-up" style={fade_in(200)}>{"Hello, I'm"}</p>
                        <h1 class="fade-in-up" style={fade_in(300)}>{config::OWNER_NAME}</h1>
                        <p class="hero-subtitle fade-in-up" style={fade_in(400)}>{"Full Stack Engineer | C# .NET"}</p>
                        <p class="hero-description fade-in-up" style={fade_in(500)}>
                            {"Software Engineer at Dematic building enterprise applications that process thousands of transactions daily. Passionate about SOLID principles, clean architecture, and delivering reliable software in high-availability environments."}
                        </p>
                        <div class="hero-actions fade-in-up" style={fade_in(600)}>
                            <button class="btn-primary" onclick={anchor_click(BrowserWindow, Anchor::Projects, None)}>
                                {"View My Work ↓"}
                            </button>
                            <a href={config::LINKEDIN_URL} target="_blank" rel="noopener noreferrer" class="btn-secondary">
                                {"Let's Connect"}
                            </a>
                        </div>
                        <div class="hero-stats fade-in-up" style={fade_in(700)}>
                            { for HERO_STATS.iter().map(|(value, label)| html! {
                                <div key={*label}>
                                    <p class="value">{*value}</p>
                                    <p class="label">{*label}</p>
                                </div>
                            }) }
                        </div>
                    </div>

                    // Parallax transform goes on the outer box; the entrance animation owns the inner one.
                    <div ref={image_ref} class="hero-portrait">
                        <div class="scale-in" style={fade_in(400)}>
                            <div class="frame">
                                <img src="/images/israel-macc.jpeg" alt="Israel Alalibo - Full Stack Engineer" />
                            </div>
                            <div class="open-badge">
                                <span class="dot"></span>
                                <span>{"Open to Work"}</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
