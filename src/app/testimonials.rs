use leptos::prelude::*;

use super::icons::{Glyph, Icon};
use crate::content::{Carousel, TESTIMONIALS};

const NAV_BUTTON_CLASS: &str = "p-2 rounded-full bg-white dark:bg-gray-700 shadow hover:bg-gray-100 dark:hover:bg-gray-600 transition-colors";

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));
    let current = Memo::new(move |_| carousel.get().index());

    view! {
        <section id="testimonials" class="py-20 bg-gray-50 dark:bg-gray-800">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Client Testimonials"</h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "What clients say about working with me."
                    </p>
                </div>

                <div class="max-w-3xl mx-auto">
                    {move || {
                        let t = &TESTIMONIALS[current.get()];
                        view! {
                            <div class="bg-white dark:bg-gray-900 rounded-xl p-8 shadow-md relative">
                                <div class="absolute -top-4 left-8 text-blue-500">
                                    <Icon glyph=Glyph::Quote size=32 />
                                </div>
                                <p class="text-lg text-gray-700 dark:text-gray-300 mb-6 italic">{t.text}</p>
                                <div class="flex items-center">
                                    <img src=t.avatar alt=t.name class="w-12 h-12 rounded-full object-cover mr-4" />
                                    <div>
                                        <h4 class="font-semibold">{t.name}</h4>
                                        <p class="text-sm text-gray-600 dark:text-gray-400">
                                            {format!("{}, {}", t.role, t.company)}
                                        </p>
                                    </div>
                                </div>
                            </div>
                        }
                    }}

                    <div class="flex justify-center items-center mt-8 space-x-4">
                        <button
                            on:click=move |_| carousel.update(|c| *c = c.prev())
                            class=NAV_BUTTON_CLASS
                            aria-label="Previous testimonial"
                        >
                            <Icon glyph=Glyph::ArrowLeft />
                        </button>
                        {(0..TESTIMONIALS.len())
                            .map(|i| {
                                view! {
                                    <button
                                        on:click=move |_| carousel.update(|c| *c = c.select(i))
                                        class=move || {
                                            let dot = if current.get() == i {
                                                "bg-blue-500"
                                            } else {
                                                "bg-gray-300 dark:bg-gray-600"
                                            };
                                            format!("w-3 h-3 rounded-full transition-colors {dot}")
                                        }
                                        aria-label=format!("Go to testimonial {}", i + 1)
                                    ></button>
                                }
                            })
                            .collect_view()}
                        <button
                            on:click=move |_| carousel.update(|c| *c = c.next())
                            class=NAV_BUTTON_CLASS
                            aria-label="Next testimonial"
                        >
                            <Icon glyph=Glyph::ArrowRight />
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
