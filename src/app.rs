mod about;
mod contact;
mod footer;
mod hero;
mod icons;
mod navbar;
mod projects;
mod skills;
mod testimonials;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_preferred_dark;

use crate::content::PAGE_TITLE;

use about::AboutSection;
use contact::ContactSection;
use footer::Footer;
use hero::HeroSection;
use navbar::Navbar;
use projects::ProjectsSection;
use skills::SkillsSection;
use testimonials::TestimonialsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // follows the system preference until the visitor toggles it
    let prefers_dark = use_preferred_dark();
    let (is_dark, set_dark) = signal(false);
    Effect::new(move |_| set_dark(prefers_dark.get()));

    view! {
        <Title text=PAGE_TITLE />
        <Html {..} class=move || if is_dark.get() { "dark" } else { "" } />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=move || view! { <HomePage is_dark set_dark /> } />
            </Routes>
        </Router>
    }
}

/// The whole portfolio, one section after another.
#[component]
fn HomePage(is_dark: ReadSignal<bool>, set_dark: WriteSignal<bool>) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-white">
            <Navbar is_dark set_dark />
            <HeroSection />
            <ProjectsSection />
            <SkillsSection />
            <AboutSection />
            <TestimonialsSection />
            <ContactSection />
            <Footer />
        </div>
    }
}
