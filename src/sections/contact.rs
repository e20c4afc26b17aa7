use log::debug;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::anchors::Anchor;
use crate::config;
use crate::contact_form::{ContactSession, FormField, SubmitStatus};
use crate::platform::BrowserWindow;
use crate::reveal::{RevealOptions, SectionReveal};

const REVEAL: RevealOptions = RevealOptions::with_threshold(0.1);

pub enum ContactMsg {
    SetField(FormField, String),
    Submit,
    ResetStatus,
}

pub struct Contact {
    session: ContactSession<BrowserWindow, BrowserWindow>,
    section_ref: NodeRef,
    reveal: Option<SectionReveal>,
}

impl Component for Contact {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: ContactSession::new(BrowserWindow, BrowserWindow),
            section_ref: NodeRef::default(),
            reveal: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::SetField(field, value) => {
                self.session.form.set_field(field, value);
                true
            }
            ContactMsg::Submit => {
                let link = ctx.link().clone();
                self.session
                    .submit(move || link.send_message(ContactMsg::ResetStatus));
                true
            }
            ContactMsg::ResetStatus => {
                self.session.reset_status();
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.reveal = self
                .section_ref
                .cast::<Element>()
                .map(|section| SectionReveal::attach(&section, REVEAL));
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if self.session.teardown() {
            debug!("Contact unmounted with a pending status reset, cancelled");
        }
        // Disconnects the observer before the section leaves the DOM.
        self.reveal.take();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let on_input = |field: FormField| {
            link.callback(move |e: InputEvent| {
                let value = match field {
                    FormField::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                    _ => e.target_unchecked_into::<HtmlInputElement>().value(),
                };
                ContactMsg::SetField(field, value)
            })
        };

        let on_submit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });

        let status_banner = match self.session.form.status {
            SubmitStatus::Idle => html! {},
            SubmitStatus::Success => html! {
                <div class="status-banner success">
                    {"Thank you! Your message has been sent successfully."}
                </div>
            },
            SubmitStatus::Error => html! {
                <div class="status-banner error">
                    {"Something went wrong. Please try again."}
                </div>
            },
        };

        html! {
            <section id={Anchor::Contact.id()} ref={self.section_ref.clone()} class="contact">
                <style>
                    {r#"
                        .contact { padding: 6rem 0; background: var(--navy); }
                        .contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 5rem; }
                        .contact-info { color: white; display: flex; flex-direction: column; gap: 2rem; }
                        .contact-info h2 { font-size: 2.25rem; font-weight: 700; margin: 0; }
                        .contact-info .lead { color: #d1d5db; line-height: 1.7; margin-top: 1rem; }
                        .contact-item { display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; }
                        .contact-item .badge {
                            padding: 0.75rem;
                            background: rgba(255, 255, 255, 0.1);
                            border-radius: 0.5rem;
                            color: var(--camel);
                        }
                        .contact-info .caption { font-size: 0.875rem; color: #9ca3af; margin: 0; }
                        .contact-item a, .contact-item p { color: white; margin: 0; text-decoration: none; }
                        .contact-item a:hover { color: var(--camel); }
                        .contact-social { display: flex; gap: 0.75rem; }
                        .contact-social a {
                            padding: 0.75rem;
                            background: rgba(255, 255, 255, 0.1);
                            border-radius: 0.5rem;
                            color: white;
                            text-decoration: none;
                            transition: background 0.2s;
                        }
                        .contact-social a:hover { background: var(--camel); }
                        .contact-card { background: white; border-radius: 1rem; padding: 2rem; }
                        .contact-card h3 { font-size: 1.5rem; font-weight: 700; color: var(--navy); margin: 0 0 1.5rem; }
                        .contact-form { display: flex; flex-direction: column; gap: 1.25rem; }
                        .contact-form label {
                            display: block;
                            font-size: 0.875rem;
                            font-weight: 500;
                            color: var(--charcoal);
                            margin-bottom: 0.5rem;
                        }
                        .contact-form input, .contact-form textarea {
                            width: 100%;
                            box-sizing: border-box;
                            padding: 0.75rem 1rem;
                            border-radius: 0.5rem;
                            border: 1px solid #e5e7eb;
                            outline: none;
                            font: inherit;
                            transition: all 0.2s;
                        }
                        .contact-form textarea { resize: none; }
                        .contact-form input:focus, .contact-form textarea:focus {
                            border-color: var(--camel);
                            box-shadow: 0 0 0 3px rgba(193, 154, 107, 0.2);
                        }
                        .contact-form .btn-primary { width: 100%; justify-content: center; }
                        .status-banner { padding: 1rem; border-radius: 0.5rem; text-align: center; }
                        .status-banner.success { background: #f0fdf4; color: #15803d; }
                        .status-banner.error { background: #fef2f2; color: #b91c1c; }
                        @media (max-width: 1024px) {
                            .contact-grid { grid-template-columns: 1fr; gap: 3rem; }
                        }
                    "#}
                </style>
                <div class="container">
                    <div class="contact-grid">
                        <div class="contact-info">
                            <div class="reveal">
                                <p class="eyebrow">{"Get in Touch"}</p>
                                <h2>{"Let's Connect"}</h2>
                                <p class="lead">
                                    {"Always open to discussing new projects and opportunities. Whether you're interested in collaborating on enterprise applications, need technical guidance, or just want to discuss software engineering best practices, I'd love to hear from you."}
                                </p>
                            </div>

                            <div class="reveal">
                                <div class="contact-item">
                                    <span class="badge">{"✉"}</span>
                                    <div>
                                        <p class="caption">{"Email"}</p>
                                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                                    </div>
                                </div>
                                <div class="contact-item">
                                    <span class="badge">{"📍"}</span>
                                    <div>
                                        <p class="caption">{"Location"}</p>
                                        <p>{config::LOCATION}</p>
                                    </div>
                                </div>
                            </div>

                            <div class="reveal">
                                <p class="caption">{"Connect with me"}</p>
                                <div class="contact-social">
                                    <a href={config::GITHUB_URL} target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                                        {"GitHub"}
                                    </a>
                                    <a href={config::LINKEDIN_URL} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                                        {"LinkedIn"}
                                    </a>
                                </div>
                            </div>
                        </div>

                        <div class="contact-card reveal">
                            <h3>{"Send a Message"}</h3>
                            <form class="contact-form" onsubmit={on_submit}>
                                <div>
                                    <label for="name">{"Your Name"}</label>
                                    <input type="text" id="name" name="name" required=true placeholder="John Doe"
                                        value={self.session.form.name.clone()} oninput={on_input(FormField::Name)} />
                                </div>
                                <div>
                                    <label for="email">{"Your Email"}</label>
                                    <input type="email" id="email" name="email" required=true placeholder="john@example.com"
                                        value={self.session.form.email.clone()} oninput={on_input(FormField::Email)} />
                                </div>
                                <div>
                                    <label for="message">{"Message"}</label>
                                    <textarea id="message" name="message" rows="4" required=true
                                        placeholder="Tell me about your project..."
                                        value={self.session.form.message.clone()} oninput={on_input(FormField::Message)} />
                                </div>
                                <button type="submit" class="btn-primary">{"➤ Send Message"}</button>
                                { status_banner }
                            </form>
                        </div>
                    </div>
                </div>
            </section>
        }
    }
}
