use leptos::prelude::*;

use super::navigation::{NAV_LINKS, RESUME_FILE};

struct SocialLink {
    icon: &'static str,
    href: &'static str,
    label: &'static str,
}

const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        icon: "devicon-linkedin-plain",
        href: "https://linkedin.com/in/sawyannaing",
        label: "LinkedIn",
    },
    SocialLink {
        icon: "extra-email",
        href: "mailto:sawyannaing@email.com",
        label: "Email",
    },
];

// stamped by build.rs; the first four characters of the RFC 3339 timestamp
// are the copyright year
const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-background border-t border-border">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid md:grid-cols-3 gap-8">
                    <div>
                        <h3 class="text-xl font-bold text-foreground mb-2">"Saw Yan Naing"</h3>
                        <p class="text-muted text-sm mb-4">
                            "Mechanical Engineer | CSWIP 3.1 Welding Inspector"
                        </p>
                        <p class="text-muted text-sm leading-relaxed">
                            "Specializing in piping engineering, welding inspection, and quality assurance across oil & gas, marine, and power industries."
                        </p>
                    </div>

                    <div>
                        <h4 class="text-sm font-semibold text-foreground mb-4 uppercase tracking-wider">
                            "Quick Links"
                        </h4>
                        <ul class="space-y-2">
                            {NAV_LINKS
                                .iter()
                                .map(|(href, label)| {
                                    view! {
                                        <li>
                                            <a
                                                href=*href
                                                class="text-sm text-muted hover:text-primary transition-colors"
                                            >
                                                {*label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-sm font-semibold text-foreground mb-4 uppercase tracking-wider">
                            "Connect"
                        </h4>
                        <div class="flex gap-3 mb-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    let external = social.href.starts_with("http");
                                    view! {
                                        <a
                                            href=social.href
                                            target=external.then_some("_blank")
                                            rel=external.then_some("noopener noreferrer")
                                            class="w-10 h-10 bg-secondary rounded-lg flex items-center justify-center text-muted hover:text-primary hover:bg-primary/10 transition-colors"
                                            aria-label=social.label
                                        >
                                            <i class=social.icon></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <a
                            href=RESUME_FILE
                            download="SawYanNaing-Resume.pdf"
                            class="inline-block px-3 py-1.5 text-sm rounded-md border border-primary/50 text-primary hover:bg-primary hover:text-background transition-colors"
                        >
                            "⬇ Download Resume"
                        </a>
                    </div>
                </div>

                <div class="flex flex-col sm:flex-row items-center justify-between pt-8 mt-8 border-t border-border/50">
                    <p class="text-sm text-muted">
                        {format!("© {} Saw Yan Naing. All rights reserved.", &BUILD_TIME[..4])}
                    </p>
                    <a
                        href="#top"
                        class="mt-4 sm:mt-0 flex items-center gap-2 text-sm text-muted hover:text-primary transition-colors"
                        aria-label="Back to top"
                    >
                        "Back to top ↑"
                    </a>
                </div>
            </div>
        </footer>
    }
}
