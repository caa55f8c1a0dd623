use leptos::prelude::*;

use super::icons::{Glyph, Icon};
use crate::content::{
    copyright_year, EMAIL, FIRST_NAME, GITHUB_URL, LAST_NAME, LINKEDIN_URL, LOCATION,
    PHONE_DISPLAY, PHONE_LINK, SECTIONS, X_URL,
};

const SOCIAL_CLASS: &str = "w-10 h-10 rounded-full bg-gray-200 dark:bg-gray-800 flex items-center justify-center text-gray-700 dark:text-gray-300 hover:bg-blue-100 dark:hover:bg-blue-900/30 hover:text-blue-600 dark:hover:text-blue-400 transition-colors";
const LIST_LINK_CLASS: &str = "text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 transition-colors";

const SERVICES: [&str; 5] = [
    "iOS Development",
    "UI/UX Design",
    "App Architecture",
    "Consultation",
    "Code Review",
];
const POLICIES: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Policy"];

#[component]
pub fn Footer() -> impl IntoView {
    let mailto = format!("mailto:{EMAIL}");

    view! {
        <footer class="bg-gray-100 dark:bg-gray-900 pt-16 pb-8">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row justify-between mb-12">
                    <div class="mb-8 md:mb-0">
                        <a
                            href="#"
                            class="text-3xl font-bold bg-gradient-to-r from-blue-500 to-indigo-600 bg-clip-text text-transparent mb-4 inline-block"
                        >
                            {FIRST_NAME}
                            " "
                            <span class="font-light">{LAST_NAME}</span>
                        </a>
                        <p class="text-gray-600 dark:text-gray-400 max-w-xs mt-3">
                            "Creating innovative iOS applications with a focus on beautiful design and exceptional user experience."
                        </p>

                        <div class="flex space-x-4 mt-6">
                            <SocialLink href=GITHUB_URL.to_string() glyph=Glyph::Github label="GitHub" />
                            <SocialLink href=LINKEDIN_URL.to_string() glyph=Glyph::Linkedin label="LinkedIn" />
                            <SocialLink href=X_URL.to_string() glyph=Glyph::Twitter label="X" />
                            <SocialLink href=mailto.clone() glyph=Glyph::Mail label="Email" />
                        </div>
                    </div>

                    <div class="grid grid-cols-2 md:grid-cols-3 gap-8">
                        <div>
                            <h4 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">"Navigation"</h4>
                            <ul class="space-y-2">
                                {SECTIONS
                                    .iter()
                                    .map(|(id, label)| {
                                        view! {
                                            <li>
                                                <a href=format!("#{id}") class=LIST_LINK_CLASS>
                                                    {*label}
                                                </a>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>

                        <div>
                            <h4 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">"Services"</h4>
                            <ul class="space-y-2">
                                {SERVICES
                                    .iter()
                                    .map(|service| {
                                        view! {
                                            <li>
                                                <a href="#" class=LIST_LINK_CLASS>
                                                    {*service}
                                                </a>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>

                        <div class="col-span-2 md:col-span-1">
                            <h4 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">"Contact"</h4>
                            <ul class="space-y-2">
                                <li class="flex items-center text-gray-600 dark:text-gray-400">
                                    <Icon glyph=Glyph::Mail size=16 class="mr-2" />
                                    <a href=mailto class="hover:text-blue-600 dark:hover:text-blue-400 transition-colors">
                                        {EMAIL}
                                    </a>
                                </li>
                                <li class="flex items-center text-gray-600 dark:text-gray-400">
                                    <Icon glyph=Glyph::Phone size=16 class="mr-2" />
                                    <a href=PHONE_LINK class="hover:text-blue-600 dark:hover:text-blue-400 transition-colors">
                                        {PHONE_DISPLAY}
                                    </a>
                                </li>
                                <li class="flex items-start text-gray-600 dark:text-gray-400">
                                    <Icon glyph=Glyph::MapPin size=16 class="mr-2 mt-1" />
                                    <span>{LOCATION}</span>
                                </li>
                            </ul>
                        </div>
                    </div>
                </div>

                <div class="border-t border-gray-200 dark:border-gray-800 pt-8">
                    <div class="flex flex-col md:flex-row justify-between items-center">
                        <p class="text-gray-600 dark:text-gray-400 text-sm">
                            {format!("© {} - All rights reserved", copyright_year())}
                        </p>
                        <div class="mt-4 md:mt-0 flex space-x-6">
                            {POLICIES
                                .iter()
                                .map(|policy| {
                                    view! {
                                        <a
                                            href="#"
                                            class="text-sm text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 transition-colors"
                                        >
                                            {*policy}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn SocialLink(href: String, glyph: Glyph, label: &'static str) -> impl IntoView {
    // mail links open in place
    let external = !href.starts_with("mailto:");
    view! {
        <a
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            class=SOCIAL_CLASS
            aria-label=label
        >
            <Icon glyph />
        </a>
    }
}
