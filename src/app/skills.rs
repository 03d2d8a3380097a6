use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use super::section::{reveal_class, reveal_once, SectionHeading};

struct SkillCategory {
    icon: &'static str,
    title: &'static str,
    skills: &'static [(&'static str, u32)],
}

const SKILL_CATEGORIES: [SkillCategory; 6] = [
    SkillCategory {
        icon: "🔧",
        title: "Piping Engineering",
        skills: &[
            ("Pipe Stress Analysis (CAESAR II)", 90),
            ("Piping Design & Layout", 95),
            ("P&ID Development", 85),
            ("Isometric Drawings", 90),
        ],
    },
    SkillCategory {
        icon: "🛡️",
        title: "Welding Inspection",
        skills: &[
            ("Visual Inspection (VT)", 95),
            ("Weld Procedure Review", 90),
            ("WPS/PQR Documentation", 88),
            ("Welder Qualification", 85),
        ],
    },
    SkillCategory {
        icon: "📋",
        title: "QA/QC",
        skills: &[
            ("Quality Management Systems", 85),
            ("Inspection Test Plans", 90),
            ("NDT Coordination", 80),
            ("Documentation Control", 88),
        ],
    },
    SkillCategory {
        icon: "📑",
        title: "Codes & Standards",
        skills: &[
            ("ASME B31.3 / B31.1", 92),
            ("AWS D1.1", 88),
            ("API Standards", 85),
            ("Classification Society Rules", 82),
        ],
    },
    SkillCategory {
        icon: "📐",
        title: "Software & Tools",
        skills: &[
            ("CAESAR II", 88),
            ("AutoCAD / PDS", 90),
            ("SmartPlant 3D", 75),
            ("MS Office Suite", 92),
        ],
    },
    SkillCategory {
        icon: "👥",
        title: "Soft Skills",
        skills: &[
            ("Team Leadership", 85),
            ("Technical Communication", 88),
            ("Problem Solving", 90),
            ("Project Coordination", 82),
        ],
    },
];

/// Bar that animates from zero to its level the first time it scrolls into
/// view; the width change rides the CSS transition.
#[component]
fn SkillBar(name: &'static str, level: u32) -> impl IntoView {
    let bar_ref = NodeRef::<html::Div>::new();
    let revealed = reveal_once(use_element_visibility(bar_ref));

    view! {
        <div node_ref=bar_ref class="space-y-2">
            <div class="flex justify-between text-sm">
                <span class="text-muted">{name}</span>
                <span class="text-primary font-mono">{format!("{level}%")}</span>
            </div>
            <div class="h-2 bg-secondary rounded-full overflow-hidden">
                <div
                    class="h-full bg-primary rounded-full transition-all duration-1000 ease-out"
                    style=move || {
                        format!("width: {}%", if revealed.get() { level } else { 0 })
                    }
                ></div>
            </div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = reveal_once(use_element_visibility(section_ref));

    view! {
        <section id="skills" node_ref=section_ref class="py-24 bg-secondary/30">
            <div class=move || format!("max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 {}", reveal_class(revealed.get()))>
                <SectionHeading number="03." title="Skills & Expertise" />

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="p-6 bg-card rounded-lg border border-border hover:border-primary/30 transition-colors">
                                    <div class="flex items-center gap-3 mb-6">
                                        <div class="p-2 bg-primary/10 rounded-lg text-xl">
                                            {category.icon}
                                        </div>
                                        <h3 class="text-lg font-semibold text-foreground">
                                            {category.title}
                                        </h3>
                                    </div>

                                    <div class="space-y-4">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|(name, level)| {
                                                view! { <SkillBar name=*name level=*level /> }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
