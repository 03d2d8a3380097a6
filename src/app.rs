mod about;
mod certifications;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod navigation;
mod projects;
mod section;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use certifications::Certifications;
use contact::Contact;
use education::Education;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use navigation::Navigation;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta
                    name="description"
                    content="Portfolio of Saw Yan Naing - CSWIP 3.1 Certified Welding Inspector, Piping Engineer with 7+ years experience in Oil & Gas, Marine, and Power industries."
                />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text="Saw Yan Naing | Mechanical & Piping Engineer" />

        <Router>
            <Navigation />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// The whole site is one page: the sections stack in order and the
/// navigation jumps between their anchors.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <About />
        <Experience />
        <Skills />
        <Certifications />
        <Education />
        <Projects />
        <Contact />
    }
}
