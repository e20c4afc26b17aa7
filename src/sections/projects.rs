use yew::prelude::*;

use crate::anchors::Anchor;
use crate::config;
use crate::content::{stagger_delay, Project, PROJECTS};
use crate::reveal::{use_reveal, RevealOptions};

const REVEAL: RevealOptions = RevealOptions::with_threshold(0.1);

fn project_card(index: usize, project: &Project) -> Html {
    let accent = project.accent.class();

    let live_icon = project.live_url.map(|url| html! {
        <a href={url} target="_blank" rel="noopener noreferrer" class="icon-link"
            aria-label={format!("View {} live demo", project.name)}>
            {"↗"}
        </a>
    });

    let live_button = match project.live_url {
        Some(url) => html! {
            <a href={url} target="_blank" rel="noopener noreferrer" class="card-button outline">
                {"↗ Live Demo"}
            </a>
        },
        None => html! {
            <button disabled=true class="card-button outline">{"↗ Live Demo"}</button>
        },
    };

    html! {
        <div key={project.name} class="project-card reveal" style={stagger_delay(index)}>
            <div class={classes!("card-header", accent)}>
                <div class="card-icon">{project.icon}</div>
                <div class="card-links">
                    <a href={project.github_url} target="_blank" rel="noopener noreferrer" class="icon-link"
                        aria-label={format!("View {} on GitHub", project.name)}>
                        {"</>"}
                    </a>
                    { for live_icon }
                </div>
            </div>

            <div class="card-body">
                <h3>{project.name}</h3>
                <p>{project.description}</p>
                <div class="tech-stack">
                    { for project.tech_stack.iter().map(|tech| html! {
                        <span key={*tech} class="tech-pill">{*tech}</span>
                    }) }
                </div>
                <div class="card-actions">
                    <a href={project.github_url} target="_blank" rel="noopener noreferrer"
                        class={classes!("card-button", "solid", accent)}>
                        {"View Code"}
                    </a>
                    { live_button }
                </div>
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let section_ref = use_node_ref();
    use_reveal(section_ref.clone(), REVEAL);

    html! {
        <section id={Anchor::Projects.id()} ref={section_ref} class="projects">
            <style>
                {r#"
                    .projects { padding: 6rem 0; background: var(--off-white); }
                    .projects-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
                    .project-card {
                        background: white;
                        border-radius: 1rem;
                        overflow: hidden;
                        box-shadow: var(--shadow-card);
                    }
                    .project-card.active:hover { transform: translateY(-4px); box-shadow: var(--shadow-card-hover); }
                    .card-header {
                        padding: 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                    }
                    .card-header.accent-navy { background: rgba(27, 42, 74, 0.1); }
                    .card-header.accent-camel { background: rgba(193, 154, 107, 0.1); }
                    .card-icon { padding: 0.75rem; border-radius: 0.75rem; font-size: 1.5rem; background: white; }
                    .card-links { display: flex; gap: 0.5rem; }
                    .icon-link {
                        padding: 0.5rem;
                        background: white;
                        border-radius: 0.5rem;
                        color: var(--charcoal);
                        text-decoration: none;
                    }
                    .icon-link:hover { color: var(--camel); }
                    .card-body { padding: 1.5rem; }
                    .card-body h3 { color: var(--navy); font-size: 1.25rem; margin: 0 0 0.75rem; }
                    .card-body p { color: #4b5563; line-height: 1.7; }
                    .tech-stack { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1.5rem; }
                    .tech-pill {
                        padding: 0.25rem 0.75rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        background: var(--off-white);
                        color: var(--charcoal);
                        border-radius: 9999px;
                    }
                    .card-actions { display: flex; gap: 0.75rem; }
                    .card-button {
                        flex: 1;
                        text-align: center;
                        padding: 0.625rem 1rem;
                        border-radius: 0.5rem;
                        font-weight: 500;
                        text-decoration: none;
                        font-size: 1rem;
                    }
                    .card-button.solid { color: white; border: none; }
                    .card-button.solid.accent-navy { background: var(--navy); }
                    .card-button.solid.accent-camel { background: var(--camel); }
                    .card-button.outline { border: 2px solid #e5e7eb; color: var(--charcoal); background: none; }
                    .card-button.outline:hover:not([disabled]) { border-color: var(--camel); color: var(--camel); }
                    .card-button[disabled] { border-color: #f3f4f6; color: #9ca3af; cursor: not-allowed; }
                    .view-all { text-align: center; margin-top: 3rem; }
                    @media (max-width: 1024px) {
                        .projects-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-header reveal">
                    <p class="eyebrow">{"Highlights"}</p>
                    <h2 class="section-title">{"Featured Projects"}</h2>
                    <p class="section-lead">
                        {"A selection of projects demonstrating full-stack development, from automated trading systems to enterprise applications with focus on clean architecture and reliability."}
                    </p>
                </div>

                <div class="projects-grid">
                    { for PROJECTS.iter().enumerate().map(|(index, project)| project_card(index, project)) }
                </div>

                <div class="view-all reveal">
                    <a href={config::GITHUB_URL} target="_blank" rel="noopener noreferrer" class="inline-link">
                        {"View All Projects on GitHub →"}
                    </a>
                </div>
            </div>
        </section>
    }
}
