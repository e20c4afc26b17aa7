use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod anchors;
mod config;
mod contact_form;
mod content;
mod error;
mod mailto;
mod platform;
mod reveal;
mod scroll;
mod sections {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod navigation;
    pub mod projects;
    pub mod skills;
}

use sections::{
    about::About,
    contact::Contact,
    footer::Footer,
    hero::Hero,
    navigation::Navigation,
    projects::Projects,
    skills::Skills,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering portfolio");
            html! {
                <main>
                    <Hero />
                    <About />
                    <Projects />
                    <Skills />
                    <Contact />
                    <Footer />
                </main>
            }
        },
        // Everything lives on one page; unknown paths go back to it.
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}


const GLOBAL_STYLE: &str = r#"
    :root {
        --navy: #1B2A4A;
        --camel: #C19A6B;
        --charcoal: #36454F;
        --off-white: #F8F7F4;
        --shadow-card: 0 4px 20px rgba(0, 0, 0, 0.06);
        --shadow-card-hover: 0 10px 30px rgba(0, 0, 0, 0.12);
    }
    html { scroll-behavior: smooth; }
    body {
        margin: 0;
        font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
        color: var(--charcoal);
        background: white;
    }
    .container { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
    .eyebrow { color: var(--camel); font-weight: 600; font-size: 1.125rem; margin: 0 0 0.5rem; }
    .section-title { font-size: 2.25rem; font-weight: 700; color: var(--navy); margin: 0; }
    .section-header { text-align: center; margin-bottom: 4rem; }
    .section-lead { color: #4b5563; max-width: 42rem; margin: 1rem auto 0; }
    .bg-navy { background: var(--navy); }
    .bg-camel { background: var(--camel); }
    .btn-primary, .btn-secondary {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.75rem 1.5rem;
        border-radius: 0.5rem;
        font-weight: 600;
        font-size: 1rem;
        text-decoration: none;
        cursor: pointer;
        transition: all 0.2s;
    }
    .btn-primary { background: var(--camel); color: white; border: none; }
    .btn-primary:hover { filter: brightness(0.92); }
    .btn-secondary { background: transparent; color: var(--navy); border: 2px solid var(--navy); }
    .btn-secondary:hover { background: var(--navy); color: white; }
    .social-row { display: flex; gap: 1rem; }
    .social-chip {
        padding: 0.5rem 1rem;
        background: white;
        border-radius: 0.5rem;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
        color: var(--charcoal);
        font-weight: 500;
        text-decoration: none;
    }
    .social-chip:hover { color: var(--camel); }
    .hover-lift { transition: transform 0.3s ease, box-shadow 0.3s ease; }
    .hover-lift.active:hover { transform: translateY(-4px); }

    .reveal {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.8s ease, transform 0.8s ease;
    }
    .reveal.active {
        opacity: 1;
        transform: translateY(0);
    }
"#;


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{GLOBAL_STYLE}</style>
            <Navigation />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
