use leptos::prelude::*;

use super::icons::{Glyph, Icon};
use crate::content::{EXPERIENCE, STATS};

const BOOK_URL: &str = "https://books.apple.com/us/book/id6448717308";

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-white dark:bg-gray-900">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"About Me"</h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "Get to know more about my background, experience, and what drives me as an iOS developer."
                    </p>
                </div>

                <div class="flex flex-col lg:flex-row gap-12">
                    <div class="lg:w-1/2">
                        <h3 class="text-2xl font-bold mb-6">"My Journey"</h3>
                        <p class="text-gray-700 dark:text-gray-300 mb-4 leading-relaxed">
                            "I'm a Senior iOS Developer with over 4 years of experience building high-performance applications for fintech, retail, social and travel products. My work spans secure payment systems, blockchain wallets, VoIP communication and location-driven experiences."
                        </p>
                        <p class="text-gray-700 dark:text-gray-300 mb-4 leading-relaxed">
                            "I care about clean architecture, careful code review and shipping polished apps that people enjoy using. Mentoring junior developers and sharing knowledge is a big part of how I work."
                        </p>

                        <div class="grid grid-cols-2 gap-6 mt-8">
                            {STATS
                                .iter()
                                .map(|(value, label)| {
                                    view! {
                                        <div class="bg-gray-50 dark:bg-gray-800 p-4 rounded-lg text-center">
                                            <div class="text-3xl font-bold text-blue-600 dark:text-blue-400 mb-2">
                                                {*value}
                                            </div>
                                            <div class="text-gray-600 dark:text-gray-400">{*label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="lg:w-1/2">
                        <h3 class="text-2xl font-bold mb-6">"Work Experience"</h3>
                        <div class="space-y-8">
                            {EXPERIENCE
                                .iter()
                                .map(|job| {
                                    view! {
                                        <div class="relative pl-8 border-l-2 border-blue-500">
                                            <div class="absolute -left-2 top-0 w-4 h-4 rounded-full bg-blue-500"></div>
                                            <div class="flex items-center text-sm text-gray-500 dark:text-gray-400 mb-1">
                                                <Icon glyph=Glyph::Calendar size=14 class="mr-1" />
                                                {job.period}
                                            </div>
                                            <h4 class="text-xl font-semibold">{job.role}</h4>
                                            <div class="flex items-center text-blue-600 dark:text-blue-400 mb-2">
                                                <Icon glyph=Glyph::Briefcase size=14 class="mr-1" />
                                                {job.company}
                                            </div>
                                            <p class="text-gray-700 dark:text-gray-300">{job.description}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="mt-12 grid grid-cols-1 sm:grid-cols-2 gap-6">
                            <div class="bg-gray-50 dark:bg-gray-800 p-6 rounded-lg">
                                <div class="flex items-center mb-2 text-blue-600 dark:text-blue-400">
                                    <Icon glyph=Glyph::Award class="mr-2" />
                                    <h4 class="font-semibold">"Education"</h4>
                                </div>
                                <p class="font-medium">"BS Information Technology"</p>
                                <p class="text-gray-600 dark:text-gray-400">"University of Gujrat, 2015 - 2019"</p>
                                <p class="text-gray-600 dark:text-gray-400">"CGPA 3.21"</p>
                            </div>
                            <div class="bg-gray-50 dark:bg-gray-800 p-6 rounded-lg">
                                <div class="flex items-center mb-2 text-blue-600 dark:text-blue-400">
                                    <Icon glyph=Glyph::BookOpen class="mr-2" />
                                    <h4 class="font-semibold">"Publication"</h4>
                                </div>
                                <a
                                    href=BOOK_URL
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="font-medium hover:text-blue-600 dark:hover:text-blue-400 flex items-center"
                                >
                                    "iOS Development using UIKit"
                                    <Icon glyph=Glyph::ExternalLink size=14 class="ml-1" />
                                </a>
                                <p class="text-gray-600 dark:text-gray-400">"Apple Books"</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
