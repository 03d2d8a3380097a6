use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use super::section::{reveal_class, reveal_once, SectionHeading};

struct CoreValue {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const CORE_VALUES: [CoreValue; 4] = [
    CoreValue {
        icon: "🎯",
        title: "Precision",
        description: "Meticulous attention to detail in every calculation and inspection",
    },
    CoreValue {
        icon: "🏅",
        title: "Quality",
        description: "Committed to international standards and best practices",
    },
    CoreValue {
        icon: "👥",
        title: "Leadership",
        description: "Experience leading multi-disciplinary engineering teams",
    },
    CoreValue {
        icon: "📈",
        title: "Growth",
        description: "Continuous learning and professional development",
    },
];

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = reveal_once(use_element_visibility(section_ref));

    view! {
        <section id="about" node_ref=section_ref class="py-24 bg-secondary/30">
            <div class=move || format!("max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 {}", reveal_class(revealed.get()))>
                <SectionHeading number="01." title="About Me" />

                <div class="grid lg:grid-cols-5 gap-12 items-start">
                    <div class="lg:col-span-2 flex justify-center lg:justify-start">
                        <div class="relative">
                            <div class="relative w-64 h-80 sm:w-72 sm:h-96 rounded-lg overflow-hidden border-2 border-border">
                                <img
                                    src="/images/profile.jpeg"
                                    alt="Saw Yan Naing - Mechanical Engineer"
                                    class="w-full h-full object-cover object-top"
                                />
                            </div>
                            <div class="absolute -bottom-4 -right-4 w-64 h-80 sm:w-72 sm:h-96 border-2 border-primary/30 rounded-lg -z-10"></div>
                        </div>
                    </div>

                    <div class="lg:col-span-3 space-y-6">
                        <p class="text-foreground text-lg leading-relaxed">
                            "I am a Mechanical Engineer with over 7 years of experience specializing in piping systems design, welding inspection, and quality control. My career has taken me through diverse industries including oil & gas, marine vessel construction, and power generation."
                        </p>
                        <p class="text-muted leading-relaxed">
                            "As a CSWIP 3.1 Certified Welding Inspector and JWES-certified professional, I bring a rigorous approach to quality assurance that ensures every project meets the highest international standards. My experience spans from onshore piping installations to complex marine systems."
                        </p>
                        <p class="text-muted leading-relaxed">
                            "Beyond technical expertise, I take pride in mentoring junior engineers and leading cross-functional teams to deliver projects on time and within specification. I believe that clear communication and methodical problem-solving are as essential as technical knowledge."
                        </p>

                        <div class="flex flex-wrap gap-6 pt-4 text-sm">
                            <div class="flex items-center gap-2 text-muted">
                                <span class="text-primary">"📍"</span>
                                <span>"Yangon, Myanmar"</span>
                            </div>
                            <div class="flex items-center gap-2 text-muted">
                                <span class="text-primary">"🌐"</span>
                                <span>"English, Myanmar, Japanese (Basic)"</span>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6 mt-16">
                    {CORE_VALUES
                        .iter()
                        .map(|value| {
                            view! {
                                <div class="group p-6 bg-card rounded-lg border border-border hover:border-primary/50 transition-all duration-300 hover:-translate-y-1">
                                    <div class="text-2xl mb-4 group-hover:scale-110 transition-transform">
                                        {value.icon}
                                    </div>
                                    <h3 class="text-lg font-semibold text-foreground mb-2">
                                        {value.title}
                                    </h3>
                                    <p class="text-sm text-muted leading-relaxed">
                                        {value.description}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
