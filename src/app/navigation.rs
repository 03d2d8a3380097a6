use leptos::prelude::*;
use leptos_use::use_window_scroll;

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("#about", "About"),
    ("#experience", "Experience"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

pub const RESUME_FILE: &str = "/SawYanNaing-Resume.pdf";

#[component]
pub fn Navigation() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (_scroll_x, scroll_y) = use_window_scroll();

    view! {
        <nav class=move || {
            if scroll_y.get() > 50.0 {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-background/90 backdrop-blur-md border-b border-border"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a href="#top" class="flex items-center gap-2 hover:opacity-80 transition-opacity">
                        <img src="/logo.svg" alt="Saw Yan Naing Logo" class="w-8 h-8" />
                        <span class="text-lg font-semibold tracking-tight text-foreground">"SYN"</span>
                    </a>

                    <div class="hidden md:flex items-center gap-8">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| {
                                view! {
                                    <a
                                        href=*href
                                        class="text-sm tracking-wide transition-colors text-muted hover:text-foreground"
                                    >
                                        {label.to_uppercase()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="hidden md:block">
                        <a
                            href=RESUME_FILE
                            download="SawYanNaing-Resume.pdf"
                            class="px-3 py-1.5 text-sm rounded-md border border-primary/50 text-primary hover:bg-primary hover:text-background transition-colors"
                        >
                            "⬇ Resume"
                        </a>
                    </div>

                    <button
                        class="md:hidden text-foreground p-2"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        aria-label="Toggle menu"
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            {move || {
                menu_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="md:hidden bg-background/95 backdrop-blur-md border-b border-border">
                                <div class="px-4 py-4 space-y-3">
                                    {NAV_LINKS
                                        .iter()
                                        .map(|(href, label)| {
                                            view! {
                                                <a
                                                    href=*href
                                                    on:click=move |_| set_menu_open.set(false)
                                                    class="block w-full text-left text-sm tracking-wide py-2 text-muted hover:text-foreground transition-colors"
                                                >
                                                    {label.to_uppercase()}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                    <a
                                        href=RESUME_FILE
                                        download="SawYanNaing-Resume.pdf"
                                        class="block w-full mt-4 px-3 py-1.5 text-sm text-center rounded-md border border-primary/50 text-primary hover:bg-primary hover:text-background transition-colors"
                                    >
                                        "⬇ Resume"
                                    </a>
                                </div>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}
