use leptos::{either::Either, ev::SubmitEvent, html, prelude::*};
use leptos_use::use_element_visibility;

#[cfg(feature = "hydrate")]
use leptos::task::spawn_local;

#[cfg(feature = "hydrate")]
use crate::contact::ErrorResponse;
use crate::contact::SUBJECTS;
#[cfg(feature = "hydrate")]
use crate::contact::ContactForm;

use super::section::{reveal_class, reveal_once, SectionHeading};

const SUBJECT_MISSING: &str = "Please select a subject.";
#[cfg(feature = "hydrate")]
const TRY_AGAIN: &str = "Something went wrong. Please try again.";

struct ContactDetail {
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    href: Option<&'static str>,
}

const CONTACT_DETAILS: [ContactDetail; 4] = [
    ContactDetail {
        icon: "📧",
        label: "Email",
        value: "sawyannaing@email.com",
        href: Some("mailto:sawyannaing@email.com"),
    },
    ContactDetail {
        icon: "📞",
        label: "Phone",
        value: "+95 9 XXX XXX XXX",
        href: Some("tel:+959XXXXXXXX"),
    },
    ContactDetail {
        icon: "💼",
        label: "LinkedIn",
        value: "linkedin.com/in/sawyannaing",
        href: Some("https://linkedin.com/in/sawyannaing"),
    },
    ContactDetail {
        icon: "📍",
        label: "Location",
        value: "Yangon, Myanmar",
        href: None,
    },
];

/// The three mutually exclusive states of the form; an error message is
/// surfaced alongside `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormState {
    Ready,
    Submitting,
    Sent,
}

/// One best-effort POST of the form to the submission endpoint. A non-success
/// status surfaces the server's error message when the body has one; a failed
/// request surfaces a generic try-again message.
#[cfg(feature = "hydrate")]
async fn post_contact(form: &ContactForm) -> Result<(), String> {
    use gloo_net::http::Request;

    let response = Request::post("/api/contact")
        .json(form)
        .map_err(|_| TRY_AGAIN.to_string())?
        .send()
        .await
        .map_err(|err| {
            log::error!("contact request failed: {err}");
            TRY_AGAIN.to_string()
        })?;

    if response.ok() {
        return Ok(());
    }
    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .map(|body| body.error)
        .filter(|error| !error.is_empty())
        .unwrap_or_else(|| TRY_AGAIN.to_string());
    Err(message)
}

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = reveal_once(use_element_visibility(section_ref));

    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let company_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Select>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let (state, set_state) = signal(FormState::Ready);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let subject = subject_ref
            .get_untracked()
            .map(|el| el.value())
            .unwrap_or_default();
        if subject.is_empty() {
            set_error.set(Some(SUBJECT_MISSING.to_string()));
            return;
        }
        set_error.set(None);
        set_state.set(FormState::Submitting);

        #[cfg(feature = "hydrate")]
        {
            let form = ContactForm {
                name: name_ref
                    .get_untracked()
                    .map(|el| el.value())
                    .unwrap_or_default(),
                email: email_ref
                    .get_untracked()
                    .map(|el| el.value())
                    .unwrap_or_default(),
                company: company_ref
                    .get_untracked()
                    .map(|el| el.value())
                    .unwrap_or_default(),
                subject,
                message: message_ref
                    .get_untracked()
                    .map(|el| el.value())
                    .unwrap_or_default(),
            };
            spawn_local(async move {
                match post_contact(&form).await {
                    Ok(()) => {
                        for input in [name_ref, email_ref, company_ref] {
                            if let Some(el) = input.get_untracked() {
                                el.set_value("");
                            }
                        }
                        if let Some(el) = subject_ref.get_untracked() {
                            el.set_value("");
                        }
                        if let Some(el) = message_ref.get_untracked() {
                            el.set_value("");
                        }
                        set_state.set(FormState::Sent);
                    }
                    Err(message) => {
                        set_error.set(Some(message));
                        set_state.set(FormState::Ready);
                    }
                }
            });
        }
    };

    view! {
        <section id="contact" node_ref=section_ref class="py-24 bg-secondary/30">
            <div class=move || format!("max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 {}", reveal_class(revealed.get()))>
                <SectionHeading number="07." title="Get in Touch" />

                <p class="text-muted mb-12 max-w-2xl">
                    "I'm currently open to new opportunities in piping engineering, welding inspection, and QA/QC roles. Whether you have a question or just want to say hello, feel free to reach out."
                </p>

                <div class="grid lg:grid-cols-5 gap-12">
                    <div class="lg:col-span-3">
                        {move || {
                            if state.get() == FormState::Sent {
                                Either::Left(view! {
                                    <div class="p-8 bg-card rounded-lg border border-border text-center">
                                        <div class="w-16 h-16 bg-green-500/10 rounded-full flex items-center justify-center mx-auto mb-4 text-3xl text-green-400">
                                            "✓"
                                        </div>
                                        <h3 class="text-xl font-semibold text-foreground mb-2">
                                            "Message Sent!"
                                        </h3>
                                        <p class="text-muted">
                                            "Thank you for reaching out. I'll get back to you as soon as possible."
                                        </p>
                                        <button
                                            class="mt-6 px-4 py-2 rounded-md border border-border text-foreground hover:bg-secondary transition-colors"
                                            on:click=move |_| set_state.set(FormState::Ready)
                                        >
                                            "Send Another Message"
                                        </button>
                                    </div>
                                })
                            } else {
                                Either::Right(view! {
                                    <form class="space-y-6" on:submit=on_submit>
                                        <div class="grid sm:grid-cols-2 gap-4">
                                            <div class="space-y-2">
                                                <label for="name" class="text-sm text-foreground">"Name"</label>
                                                <input
                                                    id="name"
                                                    node_ref=name_ref
                                                    placeholder="Your name"
                                                    required
                                                    class="w-full px-3 py-2 rounded-md bg-card border border-border focus:outline-none focus:ring-2 focus:ring-primary"
                                                />
                                            </div>
                                            <div class="space-y-2">
                                                <label for="email" class="text-sm text-foreground">"Email"</label>
                                                <input
                                                    id="email"
                                                    node_ref=email_ref
                                                    type="email"
                                                    placeholder="your@email.com"
                                                    required
                                                    class="w-full px-3 py-2 rounded-md bg-card border border-border focus:outline-none focus:ring-2 focus:ring-primary"
                                                />
                                            </div>
                                        </div>

                                        <div class="grid sm:grid-cols-2 gap-4">
                                            <div class="space-y-2">
                                                <label for="company" class="text-sm text-foreground">
                                                    "Company (Optional)"
                                                </label>
                                                <input
                                                    id="company"
                                                    node_ref=company_ref
                                                    placeholder="Your company"
                                                    class="w-full px-3 py-2 rounded-md bg-card border border-border focus:outline-none focus:ring-2 focus:ring-primary"
                                                />
                                            </div>
                                            <div class="space-y-2">
                                                <label for="subject" class="text-sm text-foreground">"Subject"</label>
                                                <select
                                                    id="subject"
                                                    node_ref=subject_ref
                                                    required
                                                    class="w-full px-3 py-2 rounded-md bg-card border border-border focus:outline-none focus:ring-2 focus:ring-primary text-foreground"
                                                >
                                                    <option value="" selected disabled>
                                                        "Select a subject"
                                                    </option>
                                                    {SUBJECTS
                                                        .iter()
                                                        .map(|subject| {
                                                            view! { <option value=*subject>{*subject}</option> }
                                                        })
                                                        .collect_view()}
                                                </select>
                                            </div>
                                        </div>

                                        <div class="space-y-2">
                                            <label for="message" class="text-sm text-foreground">"Message"</label>
                                            <textarea
                                                id="message"
                                                node_ref=message_ref
                                                placeholder="Your message..."
                                                rows=6
                                                required
                                                class="w-full px-3 py-2 rounded-md bg-card border border-border focus:outline-none focus:ring-2 focus:ring-primary resize-none"
                                            ></textarea>
                                        </div>

                                        {move || {
                                            error
                                                .get()
                                                .map(|message| {
                                                    view! {
                                                        <p class="text-sm text-red-400">{message}</p>
                                                    }
                                                })
                                        }}

                                        <button
                                            type="submit"
                                            disabled=move || state.get() == FormState::Submitting
                                            class="w-full sm:w-auto px-6 py-3 rounded-md bg-primary text-background font-medium hover:bg-primary/90 transition-colors disabled:opacity-60"
                                        >
                                            {move || {
                                                if state.get() == FormState::Submitting {
                                                    "Sending..."
                                                } else {
                                                    "➤ Send Message"
                                                }
                                            }}
                                        </button>
                                    </form>
                                })
                            }
                        }}
                    </div>

                    <div class="lg:col-span-2 space-y-4">
                        <div class="p-4 bg-card rounded-lg border border-border mb-6">
                            <div class="flex items-center gap-3">
                                <div class="w-3 h-3 bg-green-400 rounded-full animate-pulse"></div>
                                <span class="text-foreground font-medium">
                                    "Available for opportunities"
                                </span>
                            </div>
                            <p class="text-sm text-muted mt-2">
                                "Open to full-time, contract, and consulting positions"
                            </p>
                        </div>

                        {CONTACT_DETAILS
                            .iter()
                            .map(|detail| {
                                view! {
                                    <div class="p-4 bg-card rounded-lg border border-border hover:border-primary/30 transition-colors">
                                        <div class="flex items-center gap-4">
                                            <div class="w-10 h-10 bg-primary/10 rounded-lg flex items-center justify-center flex-shrink-0">
                                                {detail.icon}
                                            </div>
                                            <div>
                                                <p class="text-sm text-muted">{detail.label}</p>
                                                {match detail.href {
                                                    Some(href) => {
                                                        Either::Left(view! {
                                                            <a
                                                                href=href
                                                                class="text-foreground hover:text-primary transition-colors"
                                                            >
                                                                {detail.value}
                                                            </a>
                                                        })
                                                    }
                                                    None => {
                                                        Either::Right(view! {
                                                            <p class="text-foreground">{detail.value}</p>
                                                        })
                                                    }
                                                }}
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
