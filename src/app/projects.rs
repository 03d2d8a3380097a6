use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use super::section::{reveal_class, reveal_once, SectionHeading};

const CATEGORIES: [&str; 4] = ["All", "Marine Piping", "Building Services", "Power Generation"];

struct Project {
    title: &'static str,
    category: &'static str,
    description: &'static str,
    details: &'static [&'static str],
    technologies: &'static [&'static str],
    year: &'static str,
}

const PROJECTS: [Project; 3] = [
    Project {
        title: "Offshore Support Vessel - Piping Systems",
        category: "Marine Piping",
        description: "Led the piping design and welding inspection for a 75m offshore support vessel, including fuel oil, ballast, and fire-fighting systems.",
        details: &[
            "Designed and routed piping systems per DNV classification rules",
            "Supervised fabrication and welding of 2,500+ joints",
            "Coordinated NDT and class surveys achieving zero defects at final inspection",
        ],
        technologies: &["AutoCAD", "DNV Rules", "ASME B31.1", "AWS D1.1"],
        year: "2023",
    },
    Project {
        title: "Commercial Building HVAC Piping",
        category: "Building Services",
        description: "Managed piping design for chilled water and condenser water systems in a 20-story commercial complex.",
        details: &[
            "Performed pipe stress analysis for thermal expansion",
            "Developed P&IDs and isometric drawings for fabrication",
            "Coordinated with MEP contractors for installation sequencing",
        ],
        technologies: &["CAESAR II", "AutoCAD", "ASHRAE Standards"],
        year: "2022",
    },
    Project {
        title: "Combined Cycle Power Plant - Steam Piping",
        category: "Power Generation",
        description: "Contributed to QA/QC activities for high-pressure steam piping in a 500MW combined cycle power plant.",
        details: &[
            "Reviewed and approved WPS/PQR for P91 and P22 materials",
            "Conducted welding inspections per ASME B31.1",
            "Coordinated PWHT and radiographic testing activities",
        ],
        technologies: &["ASME B31.1", "ASME IX", "RT/PT/MT"],
        year: "2021",
    },
];

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = reveal_once(use_element_visibility(section_ref));
    let (active, set_active) = signal("All");

    view! {
        <section id="projects" node_ref=section_ref class="py-24 bg-background">
            <div class=move || format!("max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 {}", reveal_class(revealed.get()))>
                <SectionHeading number="06." title="Featured Projects" />

                <div class="flex flex-wrap gap-2 mb-8">
                    {CATEGORIES
                        .iter()
                        .map(|category| {
                            let category = *category;
                            view! {
                                <button
                                    on:click=move |_| set_active.set(category)
                                    class=move || {
                                        if active.get() == category {
                                            "px-4 py-2 text-sm rounded-lg transition-colors bg-primary text-background"
                                        } else {
                                            "px-4 py-2 text-sm rounded-lg transition-colors bg-secondary text-muted hover:text-foreground"
                                        }
                                    }
                                >
                                    {category}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        let category = active.get();
                        PROJECTS
                            .iter()
                            .filter(|project| category == "All" || project.category == category)
                            .map(|project| {
                                view! {
                                    <div class="group p-6 bg-card rounded-lg border border-border hover:border-primary/30 transition-all duration-300 hover:-translate-y-1 flex flex-col">
                                        <div class="flex items-start justify-between mb-4">
                                            <div class="w-10 h-10 bg-primary/10 rounded-lg flex items-center justify-center">
                                                "📁"
                                            </div>
                                            <span class="px-2 py-1 text-xs text-muted bg-secondary rounded">
                                                {project.category}
                                            </span>
                                        </div>

                                        <h3 class="text-lg font-semibold text-foreground mb-2 group-hover:text-primary transition-colors">
                                            {project.title}
                                        </h3>
                                        <p class="text-sm text-muted mb-4 leading-relaxed flex-grow">
                                            {project.description}
                                        </p>

                                        <ul class="space-y-2 mb-4">
                                            {project
                                                .details
                                                .iter()
                                                .take(2)
                                                .map(|detail| {
                                                    view! {
                                                        <li class="flex items-start gap-2 text-xs text-muted">
                                                            <span class="text-primary mt-0.5">">"</span>
                                                            <span>{*detail}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>

                                        <div class="flex flex-wrap gap-2 pt-4 border-t border-border/50 mt-auto">
                                            {project
                                                .technologies
                                                .iter()
                                                .map(|tech| {
                                                    view! {
                                                        <span class="text-xs font-mono text-primary/80">
                                                            {*tech}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>

                                        <div class="mt-4 text-xs text-muted">{project.year}</div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <p class="text-center text-sm text-muted mt-8">
                    "Client names and specific details are confidential. Full project documentation available upon request."
                </p>
            </div>
        </section>
    }
}
