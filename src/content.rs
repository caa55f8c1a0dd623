//! Hand-authored site content and the little bits of logic the sections run
//! over it.

use chrono::{DateTime, Datelike};

pub const FULL_NAME: &str = "Muhammad Asad";
pub const FIRST_NAME: &str = "Muhammad";
pub const LAST_NAME: &str = "Asad";
pub const PAGE_TITLE: &str = "Muhammad Asad - Sr. iOS Developer";
pub const EMAIL: &str = "m.asad.chatthaa@gmail.com";
pub const PHONE_DISPLAY: &str = "+92 305 1157776";
pub const PHONE_LINK: &str = "tel:+923051157776";
pub const LOCATION: &str = "Lahore, Pakistan";
pub const GITHUB_URL: &str = "https://github.com/masadchattha";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/masadchattha/";
pub const X_URL: &str = "https://x.com/masadchattha";
pub const CV_PATH: &str = "/documents/cv.pdf";
pub const CV_DOWNLOAD_NAME: &str = "Muhammad_Asad_Sr_iOS_Developer_CV.pdf";

/// Shown in the footer. Taken from the build so server and client agree.
pub fn copyright_year() -> i32 {
    year_of(env!("BUILD_TIME")).unwrap_or(2025)
}

fn year_of(rfc3339: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(rfc3339).ok().map(|t| t.year())
}

/// In-page anchors, in navigation order.
pub const SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("about", "About"),
    ("contact", "Contact"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub app_store_link: Option<&'static str>,
    pub github_link: Option<&'static str>,
    pub featured: bool,
    pub in_development: bool,
}

impl Project {
    /// Shown instead of following the store link for unreleased apps.
    pub fn unreleased_notice(&self) -> Option<String> {
        self.in_development.then(|| {
            format!(
                "{} is currently in development. Stay tuned for the release!",
                self.title
            )
        })
    }
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Going Solo",
        description: "A social networking app for solo travelers to match, chat, and build local communities. Features include chat replies, emoji reactions, groups, trip planning, and location-based discovery.",
        image: "images/goingSolo.png",
        technologies: &["Swift", "UIKit", "Firebase", "MapKit", "CoreLocation", "WebSocket", "In-App Purchase", "AdMob"],
        app_store_link: Some("https://apps.apple.com/us/app/going-solo-travel-friends/id1671515758"),
        github_link: None,
        featured: true,
        in_development: false,
    },
    Project {
        id: 2,
        title: "HiiKER",
        description: "A comprehensive hiking maps app with trail discovery, planning tools, and offline navigation. Features include GPX file support, offline maps, and multi-language support.",
        image: "images/hiiker.png",
        technologies: &["Swift", "MapKit", "CoreLocation", "CoreData", "In-App Purchase", "Offline Maps", "GraphQL", "Localization"],
        app_store_link: Some("https://apps.apple.com/us/app/hiiker-the-hiking-maps-app/id1470810597"),
        github_link: None,
        featured: true,
        in_development: false,
    },
    Project {
        id: 3,
        title: "Pryvate Messenger",
        description: "An ultra-secure communication app with encrypted messaging, voice/video calls, and burner phone capabilities. Features end-to-end encryption and remote data wipe.",
        image: "images/pryvate.png",
        technologies: &["Swift", "Objective-C", "Linphone SDK", "Encryption", "VoIP", "Apple Pay", "PayPal", "In-App Purchase", "Offnet Calling"],
        app_store_link: Some("https://apps.apple.com/us/app/pryvate-messenger/id914948581"),
        github_link: None,
        featured: true,
        in_development: false,
    },
    Project {
        id: 4,
        title: "Officetree",
        description: "A business communication app providing professional calling, texting, and multi-account management using PlivoVoiceKit for VoIP functionality.",
        image: "images/officetree.png",
        technologies: &["Swift", "UIKit", "PlivoVoiceKit", "CoreTelephony", "CallKit", "VoIP", "Bluetooth"],
        app_store_link: Some("https://apps.apple.com/us/app/officetree-phone/id6444354321"),
        github_link: None,
        featured: true,
        in_development: false,
    },
    Project {
        id: 5,
        title: "Reizor",
        description: "A next-gen 360° video platform for immersive VR experiences, featuring 8K live streaming and 6K recordings with interactive social features.",
        image: "images/reizor.png",
        technologies: &["Swift", "UIKit", "AVFoundation", "SceneKit", "WebRTC", "360° Video Player"],
        app_store_link: Some("https://apps.apple.com/us/app/reizor/id6469035345"),
        github_link: None,
        featured: true,
        in_development: false,
    },
    Project {
        id: 6,
        title: "1st-Response",
        description: "A specialized audio dictation app for emergency response professionals with secure cloud sync and optimized audio compression.",
        image: "images/1st-response.png",
        technologies: &["Swift", "UIKit", "AVFoundation", "AWS", "CoreAudio"],
        app_store_link: Some("https://apps.apple.com/us/app/1st-response/id1663503501"),
        github_link: None,
        featured: true,
        in_development: false,
    },
    Project {
        id: 7,
        title: "Taparoo",
        description: "A modern POS system enabling seamless Tap-to-Pay and terminal transactions. Developed Tap-to-Pay on iPhone functionality for contactless credit/debit card payments with optimized transaction flows.",
        image: "images/tap2Pay.jpg",
        technologies: &["Swift", "PassKit", "CoreNFC", "Security"],
        app_store_link: Some("#"),
        github_link: None,
        featured: false,
        in_development: true,
    },
    Project {
        id: 8,
        title: "Cake Companion",
        description: "An inventory management system for automated retail vending solutions. Features barcode-scanning inventory system with machine-specific product allocation and real-time sync.",
        image: "https://images.pexels.com/photos/6287295/pexels-photo-6287295.jpeg",
        technologies: &["SwiftUI", "CoreData", "AVFoundation", "Networking"],
        app_store_link: Some("#"),
        github_link: None,
        featured: false,
        in_development: true,
    },
    Project {
        id: 9,
        title: "CakeBox POS",
        description: "A specialized point-of-sale system for bakeries with integrated inventory management. Built with Swift/SwiftUI for intuitive cake sales and inventory workflows.",
        image: "images/cakeBox.jpg",
        technologies: &["SwiftUI", "Medusa", "Charts", "CoreData"],
        app_store_link: Some("#"),
        github_link: None,
        featured: false,
        in_development: true,
    },
    Project {
        id: 10,
        title: "Pay4Money",
        description: "A crypto payment solution enabling QR/NFC transactions with vendor discovery. Features secure crypto payments, real-time vendor location services, and seamless blockchain transactions.",
        image: "https://images.pexels.com/photos/844124/pexels-photo-844124.jpeg",
        technologies: &["Swift", "Web3", "CoreNFC", "MapKit"],
        app_store_link: Some("#"),
        github_link: None,
        featured: false,
        in_development: true,
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    Featured,
    All,
}

impl ProjectFilter {
    pub fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::All => "All Projects",
        }
    }

    pub fn apply(self, projects: &[Project]) -> Vec<&Project> {
        projects
            .iter()
            .filter(|p| match self {
                Self::Featured => p.featured,
                Self::All => true,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    Code,
    Layers,
    Database,
    Zap,
    PieChart,
    ShieldCheck,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub category: &'static str,
    pub icon: SkillIcon,
    pub skills: &'static [&'static str],
}

pub static SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        category: "Programming Languages",
        icon: SkillIcon::Code,
        skills: &["Swift", "Objective-C", "SwiftUI", "UIKit", "JavaScript/TypeScript", "C/C++"],
    },
    SkillGroup {
        category: "Frameworks & Tools",
        icon: SkillIcon::Layers,
        skills: &["StoreKit/Apple Pay", "Screen Time", "NFC", "CoreData", "CoreML", "Combine"],
    },
    SkillGroup {
        category: "Backend & Database",
        icon: SkillIcon::Database,
        skills: &["Firebase", "Supabase", "Medusa", "CoreData", "RESTful APIs", "GraphQL"],
    },
    SkillGroup {
        category: "Development Methods",
        icon: SkillIcon::Zap,
        skills: &["Agile Development", "Test-Driven Development", "CI/CD", "Git", "Code Reviews"],
    },
    SkillGroup {
        category: "Analytics & Monitoring",
        icon: SkillIcon::PieChart,
        skills: &["Firebase Analytics", "Crashlytics", "App Store Connect", "TestFlight", "TestFairy"],
    },
    SkillGroup {
        category: "Security & Performance",
        icon: SkillIcon::ShieldCheck,
        skills: &["App Security", "SSL Pinning", "Keychain", "Performance Optimization", "Memory Management"],
    },
];

/// Competency meters, split into two columns on wide screens.
pub static COMPETENCIES: [&[(&str, u8)]; 2] = [
    &[
        ("Swift & SwiftUI", 100),
        ("UIKit", 100),
        ("Objective-C", 100),
        ("Paywall Integration", 100),
    ],
    &[
        ("Fintech Development", 90),
        ("AI & Machine Learning", 85),
        ("Blockchain & dApps", 70),
        ("Deployment & CI/CD", 100),
    ],
];

pub static STATS: &[(&str, &str)] = &[
    ("4+", "Years Experience"),
    ("20+", "Apps Developed"),
    ("12+", "Happy Clients"),
    ("3+", "Open-Source Contributions"),
];

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub period: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    pub description: &'static str,
}

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        period: "2023 - PRESENT",
        company: "o9 Tech",
        role: "Senior iOS Developer",
        description: "Led end-to-end development of iOS apps, focusing on fintech and retail use cases using Swift, SwiftUI, UIKit and Objective-C. Integrated Tap2Pay, Apple Pay, In-App Purchase, POS, NFC, ScreenTime, Maps and Blockchain. Conduct regular code reviews, mentor junior developers, and enforce architectural best practices.",
    },
    Experience {
        period: "2022 - 2023",
        company: "Coder Crew LLC",
        role: "iOS Developer",
        description: "Built and shipped blockchain-powered wallet and payment and social apps using Swift and UIKit. Worked on a VR-powered platform for fan engagement and social interaction. Contributed to app performance optimization and bug fixing across multiple projects.",
    },
    Experience {
        period: "2020 - 2022",
        company: "Elentra Tech",
        role: "iOS Developer",
        description: "Developed iOS apps across social, educational, and travel categories from scratch. Implemented real-time chat, map-based hiking routes, and location-based earthquake alerts. Participated in Agile processes, wrote scalable code, and deployed updates to the App Store.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub text: &'static str,
    pub avatar: &'static str,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Jonathan Parker-Bray",
        role: "Director",
        company: "Pryvate Technologies Ltd",
        text: "Working with this developer was an absolute pleasure. They delivered our communication app 'Pryvate Messenger' ahead of schedule and exceeded all our expectations. The app's performance and design are outstanding.",
        avatar: "/images/jonathan.jpg",
    },
    Testimonial {
        name: "Gordon Seay",
        role: "Director",
        company: "Officetree Corporation",
        text: "This developer transformed our concept into a polished iOS app 'Officetree' that our users love. Their attention to detail and deep understanding of the iOS platform made all the difference.",
        avatar: "/images/gordon.jpeg",
    },
    Testimonial {
        name: "Ashley Pokorski",
        role: "Founder CEO",
        company: "Going Solo",
        text: "Exceptional technical skills combined with an eye for design. Our Going Solo app not only functions flawlessly but looks beautiful. The animations and transitions created make the experience truly special.",
        avatar: "/images/ashley.png",
    },
];

/// Index into a fixed-length list of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        let index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
        Self { index, ..self }
    }

    /// Out-of-range selections are ignored.
    pub fn select(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_of_build_time() {
        assert_eq!(year_of("2025-03-04T10:45:00+00:00"), Some(2025));
        assert_eq!(year_of("not a date"), None);
        assert!(copyright_year() >= 2025);
    }

    #[test]
    fn test_featured_filter_hides_unfeatured() {
        let featured = ProjectFilter::Featured.apply(PROJECTS);
        assert_eq!(featured.len(), 6);
        assert!(featured.iter().all(|p| p.featured));
        assert_eq!(ProjectFilter::default(), ProjectFilter::Featured);
    }

    #[test]
    fn test_all_filter_keeps_order() {
        let all = ProjectFilter::All.apply(PROJECTS);
        let ids: Vec<u32> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_unreleased_notice() {
        let taparoo = PROJECTS.iter().find(|p| p.title == "Taparoo").unwrap();
        assert_eq!(
            taparoo.unreleased_notice().as_deref(),
            Some("Taparoo is currently in development. Stay tuned for the release!")
        );
        assert_eq!(PROJECTS[0].unreleased_notice(), None);
    }

    #[test]
    fn test_carousel_wraps_both_ways() {
        let c = Carousel::new(3);
        assert_eq!(c.prev().index(), 2);
        assert_eq!(c.next().next().next().index(), 0);
        assert_eq!(c.prev().next().index(), 0);
    }

    #[test]
    fn test_carousel_select() {
        let c = Carousel::new(3);
        assert_eq!(c.select(2).index(), 2);
        assert_eq!(c.select(2).select(3).index(), 2);
    }

    #[test]
    fn test_empty_carousel_stays_put() {
        let c = Carousel::new(0);
        assert_eq!(c.next().index(), 0);
        assert_eq!(c.prev().index(), 0);
        assert_eq!(c.select(0).index(), 0);
    }
}
