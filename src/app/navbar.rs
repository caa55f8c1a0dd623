use leptos::{either::Either, prelude::*};
use leptos_use::use_window_scroll;

use super::icons::{Glyph, Icon};
use crate::content::{FIRST_NAME, LAST_NAME, SECTIONS};

const SCROLLED_AFTER_PX: f64 = 10.0;

const LINK_CLASS: &str = "text-gray-800 dark:text-white hover:text-blue-500 dark:hover:text-blue-400 transition-colors";
const ROUND_BUTTON_CLASS: &str = "p-2 rounded-full bg-gray-100 dark:bg-gray-800 text-gray-800 dark:text-white hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors";

#[component]
pub fn Navbar(is_dark: ReadSignal<bool>, set_dark: WriteSignal<bool>) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = Memo::new(move |_| scroll_y.get() > SCROLLED_AFTER_PX);
    let (menu_open, set_menu_open) = signal(false);

    let toggle_dark = move |_| set_dark.update(|d| *d = !*d);

    view! {
        <nav class=move || {
            let style = if is_scrolled.get() {
                "bg-white/90 dark:bg-gray-900/90 backdrop-blur-md py-3 shadow-sm"
            } else {
                "bg-transparent py-6"
            };
            format!("fixed top-0 left-0 right-0 z-50 transition-all duration-300 {style}")
        }>
            <div class="container mx-auto px-6 flex justify-between items-center">
                <a
                    href="#"
                    class="text-2xl font-bold bg-gradient-to-r from-blue-500 to-indigo-600 bg-clip-text text-transparent"
                >
                    {FIRST_NAME}
                    " "
                    <span class="font-light">{LAST_NAME}</span>
                </a>

                <div class="hidden md:flex items-center space-x-8">
                    {SECTIONS
                        .iter()
                        .map(|(id, label)| {
                            view! {
                                <a href=format!("#{id}") class=LINK_CLASS>
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        on:click=toggle_dark
                        class=ROUND_BUTTON_CLASS
                        aria-label="Toggle dark mode"
                    >
                        <ThemeIcon is_dark />
                    </button>
                </div>

                <div class="flex items-center space-x-4 md:hidden">
                    <button
                        on:click=toggle_dark
                        class=ROUND_BUTTON_CLASS
                        aria-label="Toggle dark mode"
                    >
                        <ThemeIcon is_dark />
                    </button>
                    <button
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        class=ROUND_BUTTON_CLASS
                        aria-label="Toggle menu"
                    >
                        {move || {
                            if menu_open.get() {
                                Either::Left(view! { <Icon glyph=Glyph::X size=24 /> })
                            } else {
                                Either::Right(view! { <Icon glyph=Glyph::Menu size=24 /> })
                            }
                        }}
                    </button>
                </div>
            </div>

            <div class=move || {
                let open = if menu_open.get() { "max-h-screen py-4 shadow-md" } else { "max-h-0" };
                format!(
                    "md:hidden bg-white dark:bg-gray-900 overflow-hidden transition-all duration-300 ease-in-out {open}",
                )
            }>
                <div class="container mx-auto px-6 flex flex-col space-y-4">
                    {SECTIONS
                        .iter()
                        .map(|(id, label)| {
                            view! {
                                <a
                                    href=format!("#{id}")
                                    class=format!("py-2 {LINK_CLASS}")
                                    on:click=move |_| set_menu_open(false)
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

#[component]
fn ThemeIcon(is_dark: ReadSignal<bool>) -> impl IntoView {
    move || {
        if is_dark.get() {
            Either::Left(view! { <Icon glyph=Glyph::Sun size=18 /> })
        } else {
            Either::Right(view! { <Icon glyph=Glyph::Moon size=18 /> })
        }
    }
}
