use leptos::prelude::*;

/// Stroke icons drawn on a 24x24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    ArrowDownCircle,
    ArrowLeft,
    ArrowRight,
    Award,
    BookOpen,
    Briefcase,
    Calendar,
    Check,
    Code,
    Database,
    Download,
    ExternalLink,
    Github,
    Layers,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    Moon,
    Phone,
    PieChart,
    Quote,
    Send,
    ShieldCheck,
    Sun,
    Twitter,
    X,
    Zap,
}

impl Glyph {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::ArrowDownCircle => &[
                "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
                "M12 8v8",
                "m8 12 4 4 4-4",
            ],
            Self::ArrowLeft => &["m12 19-7-7 7-7", "M19 12H5"],
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Self::Award => &[
                "M18 8A6 6 0 1 1 6 8a6 6 0 0 1 12 0z",
                "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11",
            ],
            Self::BookOpen => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            ],
            Self::Briefcase => &[
                "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
                "M4 6h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
            ],
            Self::Calendar => &[
                "M8 2v4",
                "M16 2v4",
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M3 10h18",
            ],
            Self::Check => &["M20 6 9 17l-5-5"],
            Self::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
            Self::Database => &[
                "M21 5c0 1.66-4.03 3-9 3S3 6.66 3 5s4.03-3 9-3 9 1.34 9 3z",
                "M3 5v14a9 3 0 0 0 18 0V5",
                "M3 12a9 3 0 0 0 18 0",
            ],
            Self::Download => &[
                "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
                "m7 10 5 5 5-5",
                "M12 15V3",
            ],
            Self::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            Self::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Self::Layers => &[
                "M12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83z",
                "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65",
                "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65",
            ],
            Self::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M6 4a2 2 0 1 1-4 0 2 2 0 0 1 4 0z",
            ],
            Self::Mail => &[
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                "m22 6-10 7L2 6",
            ],
            Self::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
                "M15 10a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
            ],
            Self::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            Self::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z"],
            Self::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Self::PieChart => &["M21.21 15.89A10 10 0 1 1 8 2.83", "M22 12A10 10 0 0 0 12 2v10z"],
            Self::Quote => &[
                "M3 21c3 0 7-1 7-8V5c0-1.25-.756-2.017-2-2H4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .008-1 1.031V20c0 1 0 1 1 1z",
                "M15 21c3 0 7-1 7-8V5c0-1.25-.757-2.017-2-2h-4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z",
            ],
            Self::Send => &["m22 2-7 20-4-9-9-4z", "M22 2 11 13"],
            Self::ShieldCheck => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
                "m9 12 2 2 4-4",
            ],
            Self::Sun => &[
                "M16 12a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Self::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            Self::X => &["M18 6 6 18", "m6 6 12 12"],
            Self::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
        }
    }
}

#[component]
pub fn Icon(
    glyph: Glyph,
    #[prop(default = 20)] size: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {glyph.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
