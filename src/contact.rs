//! Contact form submission: field state, submission metadata and delivery
//! through an email relay.

mod clock;
mod fields;
mod location;
mod regions;
mod relay;
mod status;
mod timer;
mod timestamp;
mod workflow;

pub use clock::{LocalClock, SystemClock};
pub use fields::{Field, FormFields};
pub use location::{LocationOverrides, Locator, RegionNames, UNKNOWN_LOCATION};
pub use regions::EnglishRegionNames;
pub use relay::{
    EmailJsRelay, EmailPayload, EmailRelay, RelayAck, RelayConfig, RelayError, EMAILJS_SEND_URL,
};
pub use status::SubmissionStatus;
pub use timer::{BrowserTimers, PendingTimer, TimerTask, Timers};
pub use timestamp::{format_local, format_timestamp};
pub use workflow::{
    ContactWorkflow, Snapshot, SubmissionError, DELIVERY_FAILED_MESSAGE, SUCCESS_DISPLAY,
};

/// The workflow as wired up on the site.
pub type SiteContactWorkflow = ContactWorkflow<EmailJsRelay, BrowserTimers>;

pub fn site_workflow() -> SiteContactWorkflow {
    ContactWorkflow::new(
        EmailJsRelay::new(RelayConfig::from_build_env()),
        BrowserTimers,
        SystemClock,
        Locator::site_default(),
    )
}
