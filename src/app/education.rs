use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use super::section::{reveal_class, reveal_once, SectionHeading};

const DEGREE: &str = "Bachelor of Engineering in Mechanical Engineering";
const INSTITUTION: &str = "Yangon Technological University";
const LOCATION: &str = "Yangon, Myanmar";
const PERIOD: &str = "2012 - 2016";
const GPA: &str = "3.5/4.0";
const DESCRIPTION: &str = "Comprehensive engineering program covering thermodynamics, fluid mechanics, materials science, and machine design. Active participant in engineering projects and workshops.";

const COURSEWORK: [&str; 8] = [
    "Thermodynamics",
    "Fluid Mechanics",
    "Machine Design",
    "Materials Science",
    "Heat Transfer",
    "Engineering Drawing",
    "Manufacturing Processes",
    "Industrial Management",
];

const ACHIEVEMENTS: [&str; 3] = [
    "Dean's List (2014-2016)",
    "Senior Design Project: Steam Turbine Efficiency Analysis",
    "Member, Mechanical Engineering Society",
];

#[component]
pub fn Education() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = reveal_once(use_element_visibility(section_ref));

    view! {
        <section node_ref=section_ref class="py-24 bg-secondary/30">
            <div class=move || format!("max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 {}", reveal_class(revealed.get()))>
                <SectionHeading number="05." title="Education" />

                <div class="max-w-3xl mx-auto">
                    <div class="p-8 bg-card rounded-lg border border-border">
                        <div class="flex items-start gap-4 mb-6">
                            <div class="w-14 h-14 bg-primary/10 rounded-lg flex items-center justify-center flex-shrink-0 text-3xl">
                                "🎓"
                            </div>
                            <div>
                                <h3 class="text-xl font-semibold text-foreground mb-1">{DEGREE}</h3>
                                <p class="text-primary text-lg">{INSTITUTION}</p>
                            </div>
                        </div>

                        <div class="flex flex-wrap gap-4 text-sm text-muted mb-6">
                            <span>"📍 " {LOCATION}</span>
                            <span>"📅 " {PERIOD}</span>
                            <span class="px-2 py-0.5 bg-primary/10 text-primary rounded text-xs font-mono">
                                "GPA: " {GPA}
                            </span>
                        </div>

                        <p class="text-muted leading-relaxed mb-6">{DESCRIPTION}</p>

                        <div class="mb-6">
                            <h4 class="text-sm font-semibold text-foreground mb-3">
                                "Relevant Coursework"
                            </h4>
                            <div class="flex flex-wrap gap-2">
                                {COURSEWORK
                                    .iter()
                                    .map(|course| {
                                        view! {
                                            <span class="px-3 py-1 text-xs bg-secondary text-muted rounded-full">
                                                {*course}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div>
                            <h4 class="text-sm font-semibold text-foreground mb-3">"Achievements"</h4>
                            <ul class="space-y-2">
                                {ACHIEVEMENTS
                                    .iter()
                                    .map(|achievement| {
                                        view! {
                                            <li class="flex items-start gap-2 text-sm text-muted">
                                                <span class="text-primary mt-0.5">">"</span>
                                                <span>{*achievement}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
