use leptos::prelude::*;

use super::icons::{Glyph, Icon};
use crate::content::{CV_DOWNLOAD_NAME, CV_PATH, FULL_NAME};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id="home" class="relative min-h-screen flex items-center pt-20">
            <div class="absolute inset-0 bg-gradient-to-br from-blue-50 to-indigo-50 dark:from-gray-900 dark:to-gray-800 -z-10"></div>

            <div class="absolute top-1/4 left-1/4 w-64 h-64 bg-blue-400 dark:bg-blue-600 rounded-full mix-blend-multiply dark:mix-blend-soft-light filter blur-3xl opacity-20 animate-blob"></div>
            <div class="absolute top-1/3 right-1/4 w-64 h-64 bg-purple-400 dark:bg-purple-600 rounded-full mix-blend-multiply dark:mix-blend-soft-light filter blur-3xl opacity-20 animate-blob animation-delay-2000"></div>
            <div class="absolute bottom-1/4 right-1/3 w-64 h-64 bg-pink-400 dark:bg-pink-600 rounded-full mix-blend-multiply dark:mix-blend-soft-light filter blur-3xl opacity-20 animate-blob animation-delay-4000"></div>

            <div class="container mx-auto px-6">
                <div class="flex flex-col-reverse lg:flex-row items-center">
                    <div class="lg:w-1/2 mb-12 lg:mb-0">
                        <div class="max-w-xl mx-auto lg:mx-0">
                            <h1 class="text-5xl md:text-6xl lg:text-7xl font-bold mb-4 leading-tight">
                                <span class="block">"Senior iOS"</span>
                                <span class="bg-gradient-to-r from-blue-500 to-indigo-600 bg-clip-text text-transparent">
                                    "Developer"
                                </span>
                            </h1>
                            <p class="text-lg md:text-xl text-gray-700 dark:text-gray-300 mb-8 leading-relaxed">
                                "Senior iOS Developer with 4+ years of experience designing and building high-performance iOS applications using Swift, SwiftUI, UIKit, and Objective-C. Proven track record in developing secure payment systems and blockchain applications."
                            </p>
                            <div class="flex flex-col sm:flex-row gap-4">
                                <a href="#projects" class="btn-primary">
                                    "View My Work"
                                </a>
                                <a href="#contact" class="btn-secondary">
                                    "Get In Touch"
                                </a>
                                <a
                                    href=CV_PATH
                                    download=CV_DOWNLOAD_NAME
                                    class="btn-secondary flex items-center gap-2"
                                >
                                    <Icon glyph=Glyph::Download />
                                    "Download CV"
                                </a>
                            </div>
                        </div>
                    </div>

                    <div class="lg:w-1/2 flex justify-center mb-8 lg:mb-0">
                        <div class="relative w-full max-w-md">
                            <img
                                src="images/asad.jpg"
                                alt=FULL_NAME
                                class="rounded-full w-48 h-48 md:w-64 md:h-64 object-cover mx-auto border-4 border-blue-500 shadow-xl"
                            />
                            <div class="absolute -bottom-10 -right-10 w-40 h-40 bg-blue-100 dark:bg-blue-900/20 rounded-full z-[-1]"></div>
                            <div class="absolute -top-10 -left-10 w-20 h-20 bg-indigo-100 dark:bg-indigo-900/20 rounded-full z-[-1]"></div>
                        </div>
                    </div>
                </div>

                <div class="hidden sm:block absolute bottom-10 left-1/2 transform -translate-x-1/2 animate-bounce">
                    <a
                        href="#projects"
                        class="text-gray-400 dark:text-gray-500 hover:text-gray-600 dark:hover:text-gray-300 transition-colors"
                        aria-label="Scroll to projects"
                    >
                        <Icon glyph=Glyph::ArrowDownCircle size=32 />
                    </a>
                </div>
            </div>
        </section>
    }
}
