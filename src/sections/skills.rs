use yew::prelude::*;

use crate::anchors::Anchor;
use crate::content::{stagger_delay, LANGUAGE_SKILLS, SKILL_CATEGORIES, TOOLS};
use crate::reveal::{use_reveal, RevealOptions};

const REVEAL: RevealOptions = RevealOptions::with_threshold(0.2);

const RING_PATH: &str = "M18 2.0845 a 15.9155 15.9155 0 0 1 0 31.831 a 15.9155 15.9155 0 0 1 0 -31.831";

/// Circular progress ring; the path has a circumference of 100 so the level
/// maps straight onto the dash length.
fn language_ring(name: &'static str, level: u8) -> Html {
    html! {
        <div key={name} class="language">
            <div class="ring">
                <svg viewBox="0 0 36 36">
                    <path class="ring-track" d={RING_PATH} fill="none" stroke="currentColor" stroke-width="3" />
                    <path class="ring-fill" d={RING_PATH} fill="none" stroke="currentColor" stroke-width="3"
                        stroke-dasharray={format!("{}, 100", level)} stroke-linecap="round" />
                </svg>
                <span class="ring-label">{format!("{}%", level)}</span>
            </div>
            <p>{name}</p>
        </div>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    let section_ref = use_node_ref();
    use_reveal(section_ref.clone(), REVEAL);

    html! {
        <section id={Anchor::Skills.id()} ref={section_ref} class="skills">
            <style>
                {r#"
                    .skills { padding: 6rem 0; background: white; }
                    .skill-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; margin-bottom: 4rem; }
                    .skill-category { background: var(--off-white); border-radius: 0.75rem; padding: 1.5rem; }
                    .skill-category header { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem; }
                    .skill-category h3 { margin: 0; color: var(--navy); font-size: 1.25rem; font-weight: 600; }
                    .skill-icon { padding: 0.625rem; border-radius: 0.5rem; }
                    .skill-icon.accent-navy { background: rgba(27, 42, 74, 0.1); }
                    .skill-icon.accent-camel { background: rgba(193, 154, 107, 0.1); }
                    .skill-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
                    .skill-tag {
                        padding: 0.375rem 0.875rem;
                        background: white;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        color: var(--charcoal);
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    .languages { background: var(--navy); border-radius: 1rem; padding: 2rem; color: white; }
                    .languages h3 { font-size: 1.5rem; font-weight: 600; margin: 0 0 2rem; }
                    .language-grid { display: grid; grid-template-columns: repeat(5, 1fr); gap: 1.5rem; }
                    .language { text-align: center; }
                    .language p { font-weight: 500; }
                    .ring { position: relative; width: 5rem; height: 5rem; margin: 0 auto 0.75rem; }
                    .ring svg { width: 100%; height: 100%; transform: rotate(-90deg); }
                    .ring-track { color: rgba(255, 255, 255, 0.1); }
                    .ring-fill { color: var(--camel); }
                    .ring-label {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.125rem;
                        font-weight: 700;
                    }
                    .tools { margin-top: 2rem; display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
                    .tool {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1rem;
                        background: var(--off-white);
                        border-radius: 0.5rem;
                        font-weight: 500;
                        color: var(--charcoal);
                        transition: background 0.2s;
                    }
                    .tool:hover { background: rgba(193, 154, 107, 0.1); }
                    @media (max-width: 1024px) {
                        .language-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 768px) {
                        .skill-grid { grid-template-columns: 1fr; }
                        .tools { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-header reveal">
                    <p class="eyebrow">{"What I Do"}</p>
                    <h2 class="section-title">{"Technical Skills"}</h2>
                    <p class="section-lead">
                        {"Enterprise-focused expertise in C# .NET, SQL Server, and cloud infrastructure. Committed to SOLID principles, clean code, and building reliable systems."}
                    </p>
                </div>

                <div class="skill-grid">
                    { for SKILL_CATEGORIES.iter().enumerate().map(|(index, category)| html! {
                        <div key={category.name} class="skill-category hover-lift reveal" style={stagger_delay(index)}>
                            <header>
                                <div class={classes!("skill-icon", category.accent.class())}>{category.icon}</div>
                                <h3>{category.name}</h3>
                            </header>
                            <div class="skill-tags">
                                { for category.skills.iter().map(|skill| html! {
                                    <span key={*skill} class="skill-tag">{*skill}</span>
                                }) }
                            </div>
                        </div>
                    }) }
                </div>

                <div class="languages reveal">
                    <h3>{"Programming Languages"}</h3>
                    <div class="language-grid">
                        { for LANGUAGE_SKILLS.iter().map(|&(name, level)| language_ring(name, level)) }
                    </div>
                </div>

                <div class="tools reveal">
                    { for TOOLS.iter().map(|(icon, name)| html! {
                        <div key={*name} class="tool">
                            <span>{*icon}</span>
                            <span>{*name}</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
