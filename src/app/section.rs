use leptos::prelude::*;

/// Latches to `true` the first time `visible` reports true, so a section's
/// entrance transition plays once and never reverses while scrolling back up.
pub fn reveal_once(visible: Signal<bool>) -> Signal<bool> {
    let (revealed, set_revealed) = signal(false);
    Effect::new(move |_| {
        if visible.get() {
            set_revealed.set(true);
        }
    });
    revealed.into()
}

pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "section-reveal is-visible"
    } else {
        "section-reveal"
    }
}

/// Numbered heading shared by every profile section.
#[component]
pub fn SectionHeading(number: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 mb-12">
            <span class="text-primary font-mono text-sm">{number}</span>
            <h2 class="text-2xl sm:text-3xl font-bold text-foreground">{title}</h2>
            <div class="flex-1 h-px bg-border/50"></div>
        </div>
    }
}
