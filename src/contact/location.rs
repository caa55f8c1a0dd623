use std::collections::HashMap;

use super::regions::EnglishRegionNames;

pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Resolves a region code (the first segment of a zone id) to a display name.
pub trait RegionNames: Send + Sync {
    fn region_name(&self, code: &str) -> Option<String>;
}

/// Zone ids whose location is pinned to a fixed string instead of derived.
#[derive(Debug, Clone, Default)]
pub struct LocationOverrides(HashMap<String, String>);

impl LocationOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides used by the site. Karachi is the zone for all of Pakistan,
    /// but the author is in Lahore.
    pub fn site_default() -> Self {
        Self::new().with("Asia/Karachi", "Lahore, Pakistan")
    }

    pub fn with(mut self, time_zone: impl Into<String>, location: impl Into<String>) -> Self {
        self.0.insert(time_zone.into(), location.into());
        self
    }

    pub fn get(&self, time_zone: &str) -> Option<&str> {
        self.0.get(time_zone).map(String::as_str)
    }
}

pub struct Locator {
    overrides: LocationOverrides,
    regions: Box<dyn RegionNames>,
}

impl Locator {
    pub fn new(overrides: LocationOverrides, regions: impl RegionNames + 'static) -> Self {
        Self {
            overrides,
            regions: Box::new(regions),
        }
    }

    pub fn site_default() -> Self {
        Self::new(LocationOverrides::site_default(), EnglishRegionNames)
    }

    /// Best-effort human location for an IANA zone id such as
    /// `America/New_York`.
    pub fn locate(&self, time_zone: Option<&str>) -> String {
        let tz = match time_zone.map(str::trim) {
            Some(tz) if !tz.is_empty() => tz,
            _ => return UNKNOWN_LOCATION.to_string(),
        };
        if let Some(location) = self.overrides.get(tz) {
            return location.to_string();
        }
        let (region, rest) = match tz.split_once('/') {
            Some(parts) => parts,
            None => return tz.to_string(),
        };
        let city = rest.rsplit('/').next().unwrap_or(rest).replace('_', " ");
        match self.regions.region_name(region) {
            Some(name) => format!("{city}, {name}"),
            None => format!("{city}, {region}"),
        }
    }
}

impl std::fmt::Debug for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Locator")
            .field("overrides", &self.overrides)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoRegions;

    impl RegionNames for NoRegions {
        fn region_name(&self, _code: &str) -> Option<String> {
            None
        }
    }

    struct Continents;

    impl RegionNames for Continents {
        fn region_name(&self, code: &str) -> Option<String> {
            (code == "Europe").then(|| "the Old Continent".to_string())
        }
    }

    #[test]
    fn test_karachi_is_pinned_to_lahore() {
        let locator = Locator::site_default();
        assert_eq!(locator.locate(Some("Asia/Karachi")), "Lahore, Pakistan");
    }

    #[test]
    fn test_overrides_are_configurable() {
        let overrides = LocationOverrides::site_default().with("Europe/Berlin", "Potsdam, Germany");
        let locator = Locator::new(overrides, NoRegions);
        assert_eq!(locator.locate(Some("Europe/Berlin")), "Potsdam, Germany");
        assert_eq!(locator.locate(Some("Asia/Karachi")), "Lahore, Pakistan");
    }

    #[test]
    fn test_unresolvable_region_uses_raw_segment() {
        let locator = Locator::new(LocationOverrides::new(), NoRegions);
        assert_eq!(locator.locate(Some("America/New_York")), "New York, America");
        assert_eq!(
            locator.locate(Some("America/Argentina/Buenos_Aires")),
            "Buenos Aires, America"
        );
    }

    #[test]
    fn test_resolved_region_uses_display_name() {
        let locator = Locator::new(LocationOverrides::new(), Continents);
        assert_eq!(
            locator.locate(Some("Europe/Isle_of_Man")),
            "Isle of Man, the Old Continent"
        );
        assert_eq!(locator.locate(Some("Asia/Tokyo")), "Tokyo, Asia");
    }

    #[test]
    fn test_zone_without_slash_is_returned_as_is() {
        let locator = Locator::site_default();
        assert_eq!(locator.locate(Some("UTC")), "UTC");
    }

    #[test]
    fn test_missing_zone_is_unknown() {
        let locator = Locator::site_default();
        assert_eq!(locator.locate(None), UNKNOWN_LOCATION);
        assert_eq!(locator.locate(Some("")), UNKNOWN_LOCATION);
    }
}
