use leptos::{either::Either, html, prelude::*};
use leptos_use::use_element_visibility;

use super::section::{reveal_once, SectionHeading};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CertStatus {
    Active,
    Renewal,
}

struct Certification {
    title: &'static str,
    issuer: &'static str,
    issue_date: &'static str,
    expiry_date: Option<&'static str>,
    credential_id: Option<&'static str>,
    status: CertStatus,
    featured: bool,
    description: &'static str,
    skills: &'static [&'static str],
}

const CERTIFICATIONS: [Certification; 5] = [
    Certification {
        title: "CSWIP 3.1 Welding Inspector",
        issuer: "TWI Certification Ltd",
        issue_date: "March 2020",
        expiry_date: Some("March 2025"),
        credential_id: Some("CSWIP-12345"),
        status: CertStatus::Active,
        featured: true,
        description: "Internationally recognized certification for welding inspection, covering visual inspection, NDT interpretation, and quality control procedures.",
        skills: &["Visual Inspection", "NDT Interpretation", "Welding Processes", "Quality Standards"],
    },
    Certification {
        title: "JWES Welding Inspector",
        issuer: "Japan Welding Engineering Society",
        issue_date: "June 2019",
        expiry_date: Some("June 2024"),
        credential_id: Some("JWES-67890"),
        status: CertStatus::Renewal,
        featured: true,
        description: "Japanese welding inspection certification focused on JIS standards and quality management in fabrication.",
        skills: &["JIS Standards", "Weld Quality", "Documentation", "Inspection Procedures"],
    },
    Certification {
        title: "SNT-TC-1A Level II",
        issuer: "ASNT",
        issue_date: "January 2018",
        expiry_date: Some("January 2024"),
        credential_id: Some("SNT-11111"),
        status: CertStatus::Renewal,
        featured: false,
        description: "NDT personnel qualification for magnetic particle and liquid penetrant testing.",
        skills: &["MT Testing", "PT Testing", "Report Writing"],
    },
    Certification {
        title: "Piping Stress Analysis",
        issuer: "LinkedIn Learning",
        issue_date: "August 2022",
        expiry_date: None,
        credential_id: None,
        status: CertStatus::Active,
        featured: false,
        description: "Professional development course on CAESAR II and pipe stress fundamentals.",
        skills: &["CAESAR II", "Thermal Analysis", "Load Cases"],
    },
    Certification {
        title: "Project Management Fundamentals",
        issuer: "LinkedIn Learning",
        issue_date: "November 2021",
        expiry_date: None,
        credential_id: None,
        status: CertStatus::Active,
        featured: false,
        description: "Core project management concepts and methodologies.",
        skills: &["Planning", "Risk Management", "Stakeholder Communication"],
    },
];

#[component]
fn StatusBadge(status: CertStatus) -> impl IntoView {
    match status {
        CertStatus::Active => Either::Left(view! {
            <span class="inline-flex items-center gap-1 px-2 py-1 text-xs font-medium bg-green-500/10 text-green-400 rounded-full">
                "✓ Active"
            </span>
        }),
        CertStatus::Renewal => Either::Right(view! {
            <span class="inline-flex items-center gap-1 px-2 py-1 text-xs font-medium bg-yellow-500/10 text-yellow-400 rounded-full">
                "⚠ Renewal"
            </span>
        }),
    }
}

#[component]
fn FeaturedCertCard(
    cert: &'static Certification,
    index: usize,
    revealed: Signal<bool>,
) -> impl IntoView {
    view! {
        <div
            class=move || {
                if revealed.get() {
                    "group relative p-6 bg-card rounded-lg border border-border hover:border-primary/50 transition-all duration-500 hover:-translate-y-1 overflow-hidden opacity-100 translate-y-0"
                } else {
                    "group relative p-6 bg-card rounded-lg border border-border transition-all duration-500 overflow-hidden opacity-0 translate-y-8"
                }
            }
            style=format!("transition-delay: {}ms", 200 + index * 100)
        >
            <div class="absolute top-4 right-4">
                <StatusBadge status=cert.status />
            </div>

            <div class="relative w-12 h-12 bg-primary/10 rounded-lg flex items-center justify-center mb-4 text-2xl group-hover:bg-primary/20 group-hover:scale-110 transition-all duration-300">
                "🏅"
            </div>

            <h3 class="text-xl font-semibold text-foreground mb-1 pr-20 group-hover:text-primary transition-colors duration-300">
                {cert.title}
            </h3>
            <p class="text-primary text-sm mb-2">{cert.issuer}</p>

            <p class="text-muted text-sm mb-4 leading-relaxed">{cert.description}</p>

            <div class="flex flex-wrap gap-4 text-sm text-muted mb-4">
                <span>"📅 Issued: " {cert.issue_date}</span>
                {cert.expiry_date.map(|expiry| view! { <span>"📅 Expires: " {expiry}</span> })}
            </div>

            <div class="flex flex-wrap gap-2 pt-4 border-t border-border/50">
                {cert
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <span class="px-2 py-1 text-xs font-mono text-muted bg-secondary rounded hover:bg-primary/10 hover:text-primary transition-all duration-300">
                                {*skill}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>

            {cert
                .credential_id
                .map(|id| {
                    view! {
                        <p class="mt-4 text-xs text-muted font-mono">"Credential ID: " {id}</p>
                    }
                })}
        </div>
    }
}

#[component]
fn SmallCertCard(
    cert: &'static Certification,
    index: usize,
    revealed: Signal<bool>,
) -> impl IntoView {
    view! {
        <div
            class=move || {
                if revealed.get() {
                    "group p-4 bg-card rounded-lg border border-border hover:border-primary/50 transition-all duration-300 hover:-translate-y-1 opacity-100 translate-y-0"
                } else {
                    "group p-4 bg-card rounded-lg border border-border transition-all duration-300 opacity-0 translate-y-4"
                }
            }
            style=format!("transition-delay: {}ms", 400 + index * 80)
        >
            <div class="flex items-start justify-between mb-2">
                <span class="text-primary">"🏅"</span>
                {match cert.status {
                    CertStatus::Active => {
                        Either::Left(view! { <span class="text-green-400">"✓"</span> })
                    }
                    CertStatus::Renewal => {
                        Either::Right(view! { <span class="text-yellow-400">"⚠"</span> })
                    }
                }}
            </div>
            <h4 class="font-semibold text-foreground text-sm mb-1 group-hover:text-primary transition-colors duration-300">
                {cert.title}
            </h4>
            <p class="text-xs text-primary mb-2">{cert.issuer}</p>
            <p class="text-xs text-muted">{cert.issue_date}</p>
        </div>
    }
}

#[component]
pub fn Certifications() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = reveal_once(use_element_visibility(section_ref));

    let featured = CERTIFICATIONS.iter().filter(|c| c.featured);
    let others = CERTIFICATIONS.iter().filter(|c| !c.featured);

    view! {
        <section node_ref=section_ref class="py-24 bg-background relative overflow-hidden">
            <div class="absolute top-1/4 right-0 w-80 h-80 bg-primary/5 rounded-full blur-[100px]"></div>
            <div class="absolute bottom-1/4 left-0 w-64 h-64 bg-secondary/20 rounded-full blur-[80px]"></div>

            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 relative">
                <div class=move || {
                    if revealed.get() {
                        "transition-all duration-700 ease-out opacity-100 translate-y-0"
                    } else {
                        "transition-all duration-700 ease-out opacity-0 translate-y-6"
                    }
                }>
                    <SectionHeading number="04." title="Certifications" />
                </div>

                <div class="grid md:grid-cols-2 gap-6 mb-8">
                    {featured
                        .enumerate()
                        .map(|(index, cert)| {
                            view! { <FeaturedCertCard cert index revealed /> }
                        })
                        .collect_view()}
                </div>

                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4">
                    {others
                        .enumerate()
                        .map(|(index, cert)| {
                            view! { <SmallCertCard cert index revealed /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
