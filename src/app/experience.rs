use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use super::section::{reveal_class, reveal_once, SectionHeading};

struct Position {
    title: &'static str,
    company: &'static str,
    company_url: &'static str,
    period: &'static str,
    location: &'static str,
    description: &'static str,
    responsibilities: &'static [&'static str],
    technologies: &'static [&'static str],
}

const POSITIONS: [Position; 3] = [
    Position {
        title: "Piping Engineer / Welding Inspector",
        company: "Offshore Energy Services",
        company_url: "#",
        period: "2021 - Present",
        location: "Yangon, Myanmar",
        description: "Lead piping design and welding inspection for offshore oil & gas installations, ensuring compliance with ASME, API, and client specifications.",
        responsibilities: &[
            "Lead piping stress analysis and flexibility studies for high-pressure systems",
            "Conduct welding inspections per AWS D1.1 and ASME Section IX",
            "Review and approve WPS/PQR documentation for fabrication teams",
            "Coordinate with clients and classification societies on technical requirements",
            "Mentor junior engineers on industry codes and standards",
        ],
        technologies: &["CAESAR II", "AutoCAD", "PDS", "SmartPlant 3D"],
    },
    Position {
        title: "Welding Inspector / QA/QC Engineer",
        company: "Myanmar Shipyards",
        company_url: "#",
        period: "2018 - 2021",
        location: "Yangon, Myanmar",
        description: "Managed quality assurance and welding inspection for marine vessel construction projects including cargo ships and offshore support vessels.",
        responsibilities: &[
            "Performed visual and NDT inspections on hull structures and piping systems",
            "Implemented QA/QC procedures aligned with classification society requirements",
            "Supervised welding operations and qualified welders per applicable codes",
            "Prepared and maintained inspection documentation and test reports",
            "Liaised with Lloyd's Register and DNV for vessel certifications",
        ],
        technologies: &["NDT Equipment", "CAD Software", "QMS Systems"],
    },
    Position {
        title: "Junior Mechanical Engineer",
        company: "Power Generation Co.",
        company_url: "#",
        period: "2016 - 2018",
        location: "Mandalay, Myanmar",
        description: "Supported mechanical engineering activities in power plant maintenance and small-scale piping projects.",
        responsibilities: &[
            "Assisted in pipe routing and support design for plant modifications",
            "Participated in equipment installation and commissioning activities",
            "Prepared technical drawings and bills of materials",
            "Conducted equipment inspections and maintenance documentation",
        ],
        technologies: &["AutoCAD", "MS Office", "SAP"],
    },
];

#[component]
pub fn Experience() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = reveal_once(use_element_visibility(section_ref));

    view! {
        <section id="experience" node_ref=section_ref class="py-24 bg-background">
            <div class=move || format!("max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 {}", reveal_class(revealed.get()))>
                <SectionHeading number="02." title="Experience" />

                <div class="relative">
                    // timeline line
                    <div class="absolute left-0 md:left-1/2 transform md:-translate-x-px top-0 bottom-0 w-px bg-border"></div>

                    <div class="space-y-12">
                        {POSITIONS
                            .iter()
                            .enumerate()
                            .map(|(index, position)| {
                                let row = if index % 2 == 0 {
                                    "relative flex flex-col md:flex-row gap-8 md:flex-row-reverse"
                                } else {
                                    "relative flex flex-col md:flex-row gap-8"
                                };
                                let card = if index % 2 == 0 {
                                    "md:w-1/2 md:pr-12 pl-8 md:pl-0"
                                } else {
                                    "md:w-1/2 md:pl-12 pl-8"
                                };
                                view! {
                                    <div class=row>
                                        <div class="absolute left-0 md:left-1/2 transform -translate-x-1/2 w-3 h-3 bg-primary rounded-full border-4 border-background"></div>

                                        <div class=card>
                                            <div class="p-6 bg-card rounded-lg border border-border hover:border-primary/30 transition-colors">
                                                <span class="inline-block px-3 py-1 text-xs font-mono text-primary bg-primary/10 rounded-full mb-4">
                                                    {position.period}
                                                </span>

                                                <h3 class="text-xl font-semibold text-foreground mb-1">
                                                    {position.title}
                                                </h3>
                                                <a
                                                    href=position.company_url
                                                    class="inline-flex items-center gap-1 text-primary hover:underline mb-2"
                                                >
                                                    {position.company}
                                                    " ↗"
                                                </a>
                                                <p class="text-sm text-muted mb-4">{position.location}</p>

                                                <p class="text-muted text-sm mb-4 leading-relaxed">
                                                    {position.description}
                                                </p>

                                                <ul class="space-y-2 mb-4">
                                                    {position
                                                        .responsibilities
                                                        .iter()
                                                        .map(|item| {
                                                            view! {
                                                                <li class="flex items-start gap-2 text-sm text-muted">
                                                                    <span class="text-primary mt-1.5 text-xs">">"</span>
                                                                    <span>{*item}</span>
                                                                </li>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </ul>

                                                <div class="flex flex-wrap gap-2 pt-4 border-t border-border/50">
                                                    {position
                                                        .technologies
                                                        .iter()
                                                        .map(|tech| {
                                                            view! {
                                                                <span class="px-2 py-1 text-xs font-mono text-muted bg-secondary rounded">
                                                                    {*tech}
                                                                </span>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            </div>
                                        </div>

                                        <div class="hidden md:block md:w-1/2"></div>
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
