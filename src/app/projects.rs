use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::icons::{Glyph, Icon};
use crate::content::{Project, ProjectFilter, PROJECTS};

const NOTICE_MS: f64 = 3000.0;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let (filter, set_filter) = signal(ProjectFilter::default());
    let (notice, set_notice) = signal(None::<String>);

    let UseTimeoutFnReturn {
        start: start_notice_timeout,
        ..
    } = use_timeout_fn(move |_: ()| set_notice(None), NOTICE_MS);

    let show_notice = move |text: String| {
        set_notice(Some(text));
        start_notice_timeout(());
    };

    let filter_button = move |value: ProjectFilter| {
        view! {
            <button
                on:click=move |_| set_filter(value)
                class=move || {
                    let look = if filter.get() == value {
                        "bg-blue-500 text-white"
                    } else {
                        "bg-gray-200 dark:bg-gray-800 text-gray-800 dark:text-gray-200 hover:bg-gray-300 dark:hover:bg-gray-700"
                    };
                    format!("px-4 py-2 rounded-full text-sm font-medium transition-colors {look}")
                }
            >
                {value.label()}
            </button>
        }
    };

    view! {
        <section id="projects" class="py-20 bg-white dark:bg-gray-900">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"My Projects"</h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "A collection of iOS applications I've developed, showcasing my expertise in creating beautiful and functional user experiences."
                    </p>
                    <div class="mt-8 flex justify-center space-x-4">
                        {filter_button(ProjectFilter::Featured)}
                        {filter_button(ProjectFilter::All)}
                    </div>
                </div>

                {move || {
                    notice
                        .get()
                        .map(|text| {
                            view! {
                                <div class="fixed top-24 left-1/2 transform -translate-x-1/2 bg-blue-600 text-white px-6 py-3 rounded-lg shadow-lg z-50 animate-fade-in-down">
                                    {text}
                                </div>
                            }
                        })
                }}

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For
                        each=move || filter.get().apply(PROJECTS).into_iter().copied().collect::<Vec<_>>()
                        key=|project| project.id
                        let:project
                    >
                        <ProjectCard project on_unreleased=show_notice.clone() />
                    </For>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard<F>(project: Project, on_unreleased: F) -> impl IntoView
where
    F: Fn(String) + Clone + Send + Sync + 'static,
{
    let on_store_click = move |ev: leptos::ev::MouseEvent| {
        if let Some(text) = project.unreleased_notice() {
            ev.prevent_default();
            on_unreleased(text);
        }
    };

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl overflow-hidden shadow-md hover:shadow-xl transition-shadow duration-300">
            <div class="relative h-48 overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transition-transform duration-500 hover:scale-110"
                />
                {project
                    .in_development
                    .then(|| {
                        view! {
                            <div class="absolute top-2 right-2 bg-blue-500 text-white text-xs px-2 py-1 rounded">
                                "In Development"
                            </div>
                        }
                    })}
            </div>

            <div class="p-6">
                <h3 class="text-xl font-bold mb-2 text-gray-900 dark:text-white">{project.title}</h3>
                <p class="text-gray-600 dark:text-gray-400 mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="text-xs font-medium px-2.5 py-0.5 rounded-full bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-300">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex space-x-3">
                    {project
                        .app_store_link
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    on:click=on_store_click
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-sm font-medium text-blue-600 dark:text-blue-400 hover:text-blue-800 dark:hover:text-blue-300 flex items-center"
                                >
                                    <Icon glyph=Glyph::ExternalLink size=16 class="mr-1" />
                                    "View in App Store"
                                </a>
                            }
                        })}
                    {project
                        .github_link
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-gray-900 dark:hover:text-gray-100 flex items-center"
                                >
                                    <Icon glyph=Glyph::Github size=16 class="mr-1" />
                                    "GitHub"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
