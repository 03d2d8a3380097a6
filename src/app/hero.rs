use leptos::prelude::*;
use leptos_use::use_interval_fn;

const TITLES: [&str; 4] = [
    "Piping Engineer",
    "Welding Inspector",
    "Marine Specialist",
    "QA/QC Professional",
];

// ticks to keep a fully-typed title on screen before deleting it
const HOLD_TICKS: u8 = 22;
const TYPE_INTERVAL_MS: u64 = 90;

#[derive(Debug, Clone, Copy)]
struct Stat {
    value: u32,
    suffix: &'static str,
    label: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { value: 7, suffix: "+", label: "Years Experience" },
    Stat { value: 3, suffix: "", label: "Certifications" },
    Stat { value: 50, suffix: "+", label: "Projects" },
    Stat { value: 5, suffix: "+", label: "Teams Led" },
];

const COUNT_STEPS: u32 = 60;
const COUNT_INTERVAL_MS: u64 = 33;

/// Type / hold / delete cycle over `TITLES`, advanced one character per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Typewriter {
    title: usize,
    len: usize,
    deleting: bool,
    hold: u8,
}

impl Typewriter {
    fn new() -> Self {
        Self {
            title: 0,
            len: 0,
            deleting: false,
            hold: 0,
        }
    }

    fn current_text(&self) -> String {
        TITLES[self.title].chars().take(self.len).collect()
    }

    fn tick(&mut self) {
        let full = TITLES[self.title].chars().count();
        if self.deleting {
            if self.len > 0 {
                self.len -= 1;
            } else {
                self.deleting = false;
                self.title = (self.title + 1) % TITLES.len();
            }
        } else if self.len < full {
            self.len += 1;
        } else if self.hold < HOLD_TICKS {
            self.hold += 1;
        } else {
            self.hold = 0;
            self.deleting = true;
        }
    }
}

/// Ease-out-cubic interpolation from 0 to `target` over `COUNT_STEPS` steps.
fn eased_count(target: u32, step: u32) -> u32 {
    let progress = f64::from(step.min(COUNT_STEPS)) / f64::from(COUNT_STEPS);
    let eased = 1.0 - (1.0 - progress).powi(3);
    (f64::from(target) * eased).round() as u32
}

#[component]
pub fn Hero() -> impl IntoView {
    let typer = RwSignal::new(Typewriter::new());
    use_interval_fn(
        move || typer.update(|t| t.tick()),
        TYPE_INTERVAL_MS,
    );

    let (count_step, set_count_step) = signal(0u32);
    use_interval_fn(
        move || {
            if count_step.get_untracked() < COUNT_STEPS {
                set_count_step.update(|step| *step += 1);
            }
        },
        COUNT_INTERVAL_MS,
    );

    view! {
        <section id="top" class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-background via-background to-secondary/20"></div>
            <div class="absolute inset-0 opacity-5 hero-grid"></div>

            <div class="relative z-10 max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-20">
                <div class="space-y-8">
                    <p class="text-primary font-mono text-sm tracking-widest">
                        "MECHANICAL ENGINEER | CSWIP 3.1 CERTIFIED"
                    </p>

                    <div class="space-y-2">
                        <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold text-foreground tracking-tight">
                            "Saw Yan Naing"
                        </h1>
                        <div class="h-12 sm:h-14">
                            <span class="text-2xl sm:text-3xl lg:text-4xl text-muted">
                                {move || typer.with(|t| t.current_text())}
                                <span class="animate-pulse text-primary">"|"</span>
                            </span>
                        </div>
                    </div>

                    <p class="text-muted text-lg max-w-2xl leading-relaxed">
                        "I specialize in piping systems design, welding inspection, and quality assurance across oil & gas, marine, and power generation industries. My work focuses on delivering precision-engineered solutions that meet international standards."
                    </p>

                    <div class="flex flex-wrap gap-4 pt-4">
                        <a
                            href="#projects"
                            class="px-6 py-3 rounded-md bg-primary text-background font-medium hover:bg-primary/90 transition-colors"
                        >
                            "View My Work"
                        </a>
                        <a
                            href="#contact"
                            class="px-6 py-3 rounded-md border border-border text-foreground hover:bg-secondary transition-colors"
                        >
                            "📧 Get in Touch"
                        </a>
                    </div>

                    <div class="grid grid-cols-2 sm:grid-cols-4 gap-6 pt-12 border-t border-border/50 mt-12">
                        {STATS
                            .iter()
                            .map(|stat| {
                                let stat = *stat;
                                view! {
                                    <div class="text-center sm:text-left">
                                        <div class="text-3xl sm:text-4xl font-bold text-primary font-mono">
                                            {move || {
                                                format!(
                                                    "{}{}",
                                                    eased_count(stat.value, count_step.get()),
                                                    stat.suffix,
                                                )
                                            }}
                                        </div>
                                        <div class="text-sm text-muted mt-1">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <a
                href="#about"
                class="absolute bottom-8 left-1/2 -translate-x-1/2 text-muted hover:text-primary transition-colors animate-bounce"
                aria-label="Scroll to about section"
            >
                "↓"
            </a>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typewriter_types_one_character_per_tick() {
        let mut typer = Typewriter::new();
        typer.tick();
        assert_eq!(typer.current_text(), "P");
        typer.tick();
        assert_eq!(typer.current_text(), "Pi");
    }

    #[test]
    fn typewriter_holds_full_title_before_deleting() {
        let mut typer = Typewriter::new();
        let full = TITLES[0].chars().count();
        for _ in 0..full {
            typer.tick();
        }
        assert_eq!(typer.current_text(), TITLES[0]);

        // holds for HOLD_TICKS, then the next tick arms deletion
        for _ in 0..u32::from(HOLD_TICKS) + 1 {
            typer.tick();
            assert_eq!(typer.current_text(), TITLES[0]);
        }
        typer.tick();
        assert_eq!(typer.current_text().chars().count(), full - 1);
    }

    #[test]
    fn typewriter_advances_to_next_title_after_deleting() {
        let mut typer = Typewriter::new();
        let full = TITLES[0].chars().count();
        // type + hold + arm delete + delete everything + roll over
        for _ in 0..(full + usize::from(HOLD_TICKS) + 1 + full + 1) {
            typer.tick();
        }
        assert_eq!(typer.current_text(), "");
        typer.tick();
        assert_eq!(typer.current_text(), "W");
    }

    #[test]
    fn typewriter_wraps_around_the_title_list() {
        let mut typer = Typewriter::new();
        typer.title = TITLES.len() - 1;
        typer.deleting = true;
        typer.len = 0;
        typer.tick();
        assert_eq!(typer.title, 0);
        assert!(!typer.deleting);
    }

    #[test]
    fn eased_count_hits_both_endpoints() {
        for stat in STATS {
            assert_eq!(eased_count(stat.value, 0), 0);
            assert_eq!(eased_count(stat.value, COUNT_STEPS), stat.value);
            assert_eq!(eased_count(stat.value, COUNT_STEPS + 10), stat.value);
        }
    }

    #[test]
    fn eased_count_never_overshoots() {
        for step in 0..=COUNT_STEPS {
            assert!(eased_count(50, step) <= 50);
        }
    }
}
