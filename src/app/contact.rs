use leptos::{either::Either, prelude::*, task::spawn_local};

use super::icons::{Glyph, Icon};
use crate::contact::{site_workflow, Field, SiteContactWorkflow, Snapshot, SubmissionStatus};
use crate::content::{EMAIL, LOCATION, PHONE_DISPLAY, PHONE_LINK};

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-gray-300 dark:border-gray-700 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500 bg-white dark:bg-gray-700 text-gray-900 dark:text-white";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1";

const WEEKDAYS: [(&str, bool); 7] = [
    ("Mon", true),
    ("Tue", true),
    ("Wed", true),
    ("Thu", true),
    ("Fri", true),
    ("Sat", false),
    ("Sun", false),
];

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 bg-white dark:bg-gray-900">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Get In Touch"</h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "Looking for a senior iOS developer to strengthen your team or have an exciting project in mind? With expertise in fintech, blockchain, and modern iOS development, I'm ready to bring value to your next venture. Let's discuss how we can work together."
                    </p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 max-w-6xl mx-auto">
                    <ContactInfo />
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="bg-gray-50 dark:bg-gray-800 rounded-xl p-8">
            <h3 class="text-2xl font-bold mb-6 text-gray-900 dark:text-white">"Contact Information"</h3>

            <div class="space-y-6">
                <InfoRow glyph=Glyph::Mail title="Email">
                    <a href=format!("mailto:{EMAIL}") class="text-gray-600 dark:text-gray-400 hover:text-blue-500 dark:hover:text-blue-400 transition-colors">
                        {EMAIL}
                    </a>
                </InfoRow>
                <InfoRow glyph=Glyph::Phone title="Phone">
                    <a href=PHONE_LINK class="text-gray-600 dark:text-gray-400 hover:text-blue-500 dark:hover:text-blue-400 transition-colors">
                        {PHONE_DISPLAY}
                    </a>
                </InfoRow>
                <InfoRow glyph=Glyph::MapPin title="Location">
                    <p class="text-gray-600 dark:text-gray-400">{LOCATION}</p>
                </InfoRow>
            </div>

            <div class="mt-10">
                <h4 class="text-lg font-medium text-gray-900 dark:text-white mb-4">"Availability"</h4>
                <p class="text-gray-600 dark:text-gray-400 mb-4">
                    "I'm open to full-time positions, freelance projects, and consulting opportunities. I ensure prompt communication with a response time of under 24 hours."
                </p>
                <div class="bg-white dark:bg-gray-900 rounded-lg p-4 shadow-sm">
                    <div class="grid grid-cols-7 gap-1 text-center text-sm">
                        {WEEKDAYS
                            .iter()
                            .map(|(day, _)| view! { <div class="text-gray-500 dark:text-gray-400">{*day}</div> })
                            .collect_view()}
                        {WEEKDAYS
                            .iter()
                            .map(|(_, available)| {
                                if *available {
                                    Either::Left(view! { <div class="text-green-600 dark:text-green-400">"✓"</div> })
                                } else {
                                    Either::Right(view! { <div class="text-gray-400 dark:text-gray-600">"−"</div> })
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn InfoRow(glyph: Glyph, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-start">
            <div class="w-10 h-10 rounded-full bg-blue-100 dark:bg-blue-900/30 flex items-center justify-center text-blue-600 dark:text-blue-400 mr-4">
                <Icon glyph />
            </div>
            <div>
                <h4 class="text-lg font-medium text-gray-900 dark:text-white mb-1">{title}</h4>
                {children()}
            </div>
        </div>
    }
}

/// The form itself. Rendering only reads the workflow's snapshot; every
/// change goes back through the workflow.
#[component]
fn ContactForm() -> impl IntoView {
    let snapshot = RwSignal::new(Snapshot::default());
    let workflow = site_workflow().with_listener(move |s| {
        // the signal is gone once the section unmounts
        let _ = snapshot.try_set(s.clone());
    });
    let workflow = StoredValue::new(workflow);

    on_cleanup(move || {
        workflow.try_with_value(|w| w.teardown());
    });

    let status = Memo::new(move |_| snapshot.with(|s| s.status.clone()));
    let submitting = Memo::new(move |_| status.with(SubmissionStatus::is_submitting));
    let succeeded = Memo::new(move |_| status.with(SubmissionStatus::is_succeeded));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let wf = workflow.get_value();
        spawn_local(async move {
            if let Err(e) = wf.submit().await {
                log::debug!("contact submit ended with: {e}");
            }
        });
    };

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl p-8 shadow-md relative overflow-hidden">
            <div class="absolute -top-10 -right-10 w-40 h-40 bg-blue-100 dark:bg-blue-900/20 rounded-full z-0"></div>

            <h3 class="text-2xl font-bold mb-6 text-gray-900 dark:text-white relative z-10">"Send Message"</h3>

            {move || {
                status
                    .with(|s| s.failure().map(str::to_string))
                    .map(|reason| {
                        view! {
                            <div class="bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-lg p-4 mb-6 text-red-800 dark:text-red-400">
                                <p class="font-medium">{reason}</p>
                            </div>
                        }
                    })
            }}

            <Show when=move || !succeeded.get() fallback=SuccessBanner>
                <form on:submit=on_submit class="relative z-10">
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-6 mb-6">
                        <FieldInput field=Field::Name label="Your Name" kind="text" snapshot workflow />
                        <FieldInput field=Field::Email label="Your Email" kind="email" snapshot workflow />
                    </div>
                    <div class="mb-6">
                        <FieldInput field=Field::Subject label="Subject" kind="text" snapshot workflow />
                    </div>
                    <div class="mb-6">
                        <label for=Field::Message.key() class=LABEL_CLASS>
                            "Message"
                        </label>
                        <textarea
                            id=Field::Message.key()
                            name=Field::Message.key()
                            rows=5
                            required
                            class=format!("{INPUT_CLASS} resize-none")
                            prop:value=move || snapshot.with(|s| s.fields.message.clone())
                            on:input=move |ev| {
                                workflow.with_value(|w| w.set_field(Field::Message, event_target_value(&ev)))
                            }
                        ></textarea>
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class=move || {
                            let busy = if submitting.get() { "opacity-70 cursor-not-allowed" } else { "" };
                            format!(
                                "w-full flex items-center justify-center px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg transition-colors {busy}",
                            )
                        }
                    >
                        {move || {
                            if submitting.get() {
                                Either::Left(
                                    view! {
                                        <Spinner />
                                        "Sending..."
                                    },
                                )
                            } else {
                                Either::Right(
                                    view! {
                                        <Icon glyph=Glyph::Send size=18 class="mr-2" />
                                        "Send Message"
                                    },
                                )
                            }
                        }}
                    </button>
                </form>
            </Show>
        </div>
    }
}

#[component]
fn FieldInput(
    field: Field,
    label: &'static str,
    kind: &'static str,
    snapshot: RwSignal<Snapshot>,
    workflow: StoredValue<SiteContactWorkflow>,
) -> impl IntoView {
    view! {
        <div>
            <label for=field.key() class=LABEL_CLASS>
                {label}
            </label>
            <input
                type=kind
                id=field.key()
                name=field.key()
                required
                class=INPUT_CLASS
                prop:value=move || snapshot.with(|s| s.fields.get(field).to_string())
                on:input=move |ev| workflow.with_value(|w| w.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn SuccessBanner() -> impl IntoView {
    view! {
        <div class="bg-green-50 dark:bg-green-900/20 border border-green-200 dark:border-green-800 rounded-lg p-4 flex items-center text-green-800 dark:text-green-400">
            <div class="mr-3 bg-green-100 dark:bg-green-800 rounded-full p-1">
                <Icon glyph=Glyph::Check />
            </div>
            <div>
                <p class="font-medium">"Message sent successfully!"</p>
                <p class="text-sm">"Thank you for reaching out. I'll get back to you shortly."</p>
            </div>
        </div>
    }
}

#[component]
fn Spinner() -> impl IntoView {
    view! {
        <svg
            class="animate-spin -ml-1 mr-2 h-4 w-4 text-white"
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
        >
            <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
            <path
                class="opacity-75"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
            ></path>
        </svg>
    }
}
