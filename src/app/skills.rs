use leptos::prelude::*;

use super::icons::{Glyph, Icon};
use crate::content::{SkillGroup, SkillIcon, COMPETENCIES, SKILL_GROUPS};

impl From<SkillIcon> for Glyph {
    fn from(icon: SkillIcon) -> Self {
        match icon {
            SkillIcon::Code => Glyph::Code,
            SkillIcon::Layers => Glyph::Layers,
            SkillIcon::Database => Glyph::Database,
            SkillIcon::Zap => Glyph::Zap,
            SkillIcon::PieChart => Glyph::PieChart,
            SkillIcon::ShieldCheck => Glyph::ShieldCheck,
        }
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 bg-gray-50 dark:bg-gray-800">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Skills & Expertise"</h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "A comprehensive overview of my technical skills and areas of expertise in iOS development."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SKILL_GROUPS.iter().map(|group| view! { <SkillCard group=*group /> }).collect_view()}
                </div>

                <div class="mt-20">
                    <h3 class="text-2xl font-bold mb-8 text-center">"Core Competencies"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        {COMPETENCIES
                            .iter()
                            .map(|column| {
                                view! {
                                    <div>
                                        {column
                                            .iter()
                                            .map(|(name, level)| view! { <Meter name=*name level=*level /> })
                                            .collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(group: SkillGroup) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-900 rounded-xl p-6 shadow-md hover:shadow-lg transition-shadow">
            <div class="flex items-center mb-4">
                <div class="p-3 rounded-lg bg-blue-100 dark:bg-blue-900/30 text-blue-600 dark:text-blue-400 mr-4">
                    <Icon glyph=group.icon.into() size=24 />
                </div>
                <h3 class="text-xl font-semibold">{group.category}</h3>
            </div>
            <ul class="space-y-2">
                {group
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <li class="flex items-center">
                                <span class="w-2 h-2 rounded-full bg-blue-500 mr-2"></span>
                                <span class="text-gray-700 dark:text-gray-300">{*skill}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn Meter(name: &'static str, level: u8) -> impl IntoView {
    let level = level.min(100);
    view! {
        <div class="mb-6">
            <div class="flex justify-between mb-1">
                <span class="font-medium">{name}</span>
                <span class="text-gray-600 dark:text-gray-400">{format!("{level}%")}</span>
            </div>
            <div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2.5">
                <div
                    class="bg-gradient-to-r from-blue-500 to-indigo-600 h-2.5 rounded-full"
                    style=format!("width: {level}%")
                ></div>
            </div>
        </div>
    }
}
