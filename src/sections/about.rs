use yew::prelude::*;

use crate::anchors::Anchor;
use crate::config;
use crate::platform::BrowserWindow;
use crate::reveal::{use_reveal, RevealOptions};
use crate::sections::navigation::anchor_click;

const REVEAL: RevealOptions = RevealOptions::with_threshold(0.2);

#[derive(Properties, PartialEq)]
struct InfoCardProps {
    icon: &'static str,
    title: &'static str,
    #[prop_or_default]
    accent: Option<&'static str>,
    children: Children,
}

#[function_component(InfoCard)]
fn info_card(props: &InfoCardProps) -> Html {
    html! {
        <div class="info-card hover-lift reveal">
            <div class={classes!("info-icon", props.accent)}>{props.icon}</div>
            <div>
                <h3>{props.title}</h3>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let section_ref = use_node_ref();
    use_reveal(section_ref.clone(), REVEAL);

    html! {
        <section id={Anchor::About.id()} ref={section_ref} class="about">
            <style>
                {r#"
                    .about { padding: 6rem 0; background: var(--off-white); }
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 5rem;
                        align-items: start;
                    }
                    .about-copy { display: flex; flex-direction: column; gap: 2rem; }
                    .about-copy p { color: #4b5563; line-height: 1.7; }
                    .about-cards { display: flex; flex-direction: column; gap: 1.5rem; }
                    .info-card {
                        display: flex;
                        gap: 1rem;
                        background: white;
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                        box-shadow: var(--shadow-card);
                    }
                    .info-card h3 { margin: 0; color: var(--navy); font-size: 1.125rem; }
                    .info-card p { margin: 0.25rem 0 0; color: var(--charcoal); }
                    .info-card .muted { color: #6b7280; font-size: 0.875rem; }
                    .info-icon {
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        background: rgba(193, 154, 107, 0.1);
                        height: fit-content;
                        font-size: 1.25rem;
                    }
                    .info-icon.navy { background: rgba(27, 42, 74, 0.1); }
                    .quick-facts { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                    .quick-facts div { border-radius: 0.75rem; padding: 1.25rem; color: white; }
                    .quick-facts .value { font-size: 1.875rem; font-weight: 700; margin: 0; }
                    .quick-facts .label { font-size: 0.875rem; font-weight: 600; margin: 0.25rem 0 0; }
                    .about-portrait {
                        grid-column: 1 / -1;
                        justify-self: center;
                        width: 340px;
                        height: 480px;
                        border-radius: 1rem;
                        overflow: hidden;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .about-portrait img { width: 100%; height: 100%; object-fit: cover; }
                    .inline-link { color: var(--camel); font-weight: 500; text-decoration: none; }
                    .inline-link:hover { text-decoration: underline; }
                    @media (max-width: 1024px) {
                        .about-grid { grid-template-columns: 1fr; gap: 3rem; }
                        .about-portrait { width: 280px; height: 380px; }
                    }
                "#}
            </style>
            <div class="container">
                <div class="about-grid">
                    <div class="about-copy">
                        <div class="reveal">
                            <p class="eyebrow">{"Get to Know Me"}</p>
                            <h2 class="section-title">{"About Me"}</h2>
                        </div>

                        <div class="reveal">
                            <p>
                                {"Full Stack Engineer with commercial C# .NET experience building enterprise applications in high-volume, high-availability environments. Currently at Dematic developing systems that process thousands of transactions daily for major retailers like Ocado, Amazon, and Tesco."}
                            </p>
                            <p>
                                {"I'm passionate about code quality, SOLID principles, and clean architecture. My approach combines technical excellence with a focus on reliability, maintainability, and delivering solutions that teams can trust. I practice TDD, conduct thorough code reviews, and collaborate effectively in Agile teams."}
                            </p>
                            <p>
                                {"Beyond enterprise applications, I've built an automated trading system in Python demonstrating ability to work across the full stack and deliver complex, reliable solutions. When I'm not coding, you'll find me exploring new technologies, contributing to continuous improvement, or helping colleagues overcome technical challenges."}
                            </p>
                        </div>

                        <div class="social-row reveal">
                            <a href={config::GITHUB_URL} target="_blank" rel="noopener noreferrer" class="social-chip">
                                {"GitHub"}
                            </a>
                            <a href={config::LINKEDIN_URL} target="_blank" rel="noopener noreferrer" class="social-chip">
                                {"LinkedIn"}
                            </a>
                        </div>
                    </div>

                    <div class="about-cards">
                        <InfoCard icon="🎓" title="Education">
                            <p>{"BSc Software Engineering (Hons)"}</p>
                            <p class="muted">{"University of Salford • 2022-2026"}</p>
                            <p class="muted">{"Predicted First Class"}</p>
                        </InfoCard>

                        <InfoCard icon="📍" title="Location" accent={Some("navy")}>
                            <p>{config::LOCATION}</p>
                            <p class="muted">{"Available for office & remote roles"}</p>
                        </InfoCard>

                        <InfoCard icon="✉" title="Get in Touch">
                            <p>{"Always open to discussing new projects and opportunities."}</p>
                            <a href={Anchor::Contact.href()} class="inline-link" onclick={anchor_click(BrowserWindow, Anchor::Contact, None)}>
                                {"Send me a message →"}
                            </a>
                        </InfoCard>

                        <div class="quick-facts reveal">
                            <div class="bg-navy">
                                <p class="value">{"15+"}</p>
                                <p class="label">{"Technologies"}</p>
                            </div>
                            <div class="bg-camel">
                                <p class="value">{"3"}</p>
                                <p class="label">{"Major Projects"}</p>
                            </div>
                        </div>
                    </div>

                    <div class="about-portrait reveal">
                        <img src="/images/israel-teddy.png" alt={config::OWNER_NAME} />
                    </div>
                </div>
            </div>
        </section>
    }
}
