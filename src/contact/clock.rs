use chrono::{DateTime, Utc};

/// Current instant and the host's IANA time zone.
pub trait LocalClock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
    fn time_zone(&self) -> Option<String>;
}

/// Reads the wall clock and the runtime's zone. In the browser the zone comes
/// from `Intl.DateTimeFormat().resolvedOptions()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl LocalClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn time_zone(&self) -> Option<String> {
        match iana_time_zone::get_timezone() {
            Ok(tz) => Some(tz),
            Err(e) => {
                log::warn!("couldn't determine time zone: {e}");
                None
            }
        }
    }
}
