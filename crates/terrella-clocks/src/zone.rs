//! Timezone table entries and their resolved clocks.
//!
//! Entries come from configuration as plain strings; resolution against
//! the IANA database happens once at startup. A typo in one identifier
//! must not take down the rest of the overlay, so resolution skips bad
//! rows with a warning instead of failing.

use std::str::FromStr;

use chrono::{DateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// One row of the timezone table: display name, IANA zone identifier, and
/// the meridian the marker sits on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneEntry {
    /// Display name shown in the clock popup.
    pub name: String,
    /// IANA identifier, e.g. `"Europe/Istanbul"`.
    pub zone: String,
    /// Marker longitude in degrees.
    pub longitude_deg: f64,
}

impl ZoneEntry {
    pub fn new(name: &str, zone: &str, longitude_deg: f64) -> Self {
        Self {
            name: name.to_string(),
            zone: zone.to_string(),
            longitude_deg,
        }
    }
}

/// A table entry whose identifier resolved against the IANA database.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneClock {
    pub name: String,
    pub tz: Tz,
    pub longitude_deg: f64,
}

impl ZoneClock {
    /// Local wall-clock time in this zone at the given instant.
    #[must_use]
    pub fn local_time(&self, now: DateTime<Utc>) -> NaiveTime {
        now.with_timezone(&self.tz).time()
    }

    /// 24-hour `HH:MM:SS` display string for the clock popup.
    #[must_use]
    pub fn local_time_string(&self, now: DateTime<Utc>) -> String {
        now.with_timezone(&self.tz).format("%H:%M:%S").to_string()
    }
}

/// Resolve a configured table against the IANA database, skipping rows
/// whose identifier does not parse.
pub fn resolve_zones(entries: &[ZoneEntry]) -> Vec<ZoneClock> {
    let mut clocks = Vec::with_capacity(entries.len());
    for entry in entries {
        match Tz::from_str(&entry.zone) {
            Ok(tz) => clocks.push(ZoneClock {
                name: entry.name.clone(),
                tz,
                longitude_deg: entry.longitude_deg,
            }),
            Err(_) => log::warn!(
                "skipping clock '{}': unknown timezone identifier '{}'",
                entry.name,
                entry.zone
            ),
        }
    }
    clocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_resolve_keeps_valid_entries_in_order() {
        let entries = [
            ZoneEntry::new("London", "Europe/London", 0.0),
            ZoneEntry::new("Istanbul", "Europe/Istanbul", 30.0),
            ZoneEntry::new("Tokyo", "Asia/Tokyo", 135.0),
        ];
        let clocks = resolve_zones(&entries);
        assert_eq!(clocks.len(), 3);
        assert_eq!(clocks[0].name, "London");
        assert_eq!(clocks[1].tz, chrono_tz::Europe::Istanbul);
        assert_eq!(clocks[2].longitude_deg, 135.0);
    }

    #[test]
    fn test_resolve_skips_unknown_identifier() {
        let entries = [
            ZoneEntry::new("London", "Europe/London", 0.0),
            ZoneEntry::new("Nowhere", "Fake/Zone", 10.0),
            ZoneEntry::new("Tokyo", "Asia/Tokyo", 135.0),
        ];
        let clocks = resolve_zones(&entries);
        assert_eq!(clocks.len(), 2, "bad row must be dropped, not fatal");
        assert_eq!(clocks[0].name, "London");
        assert_eq!(clocks[1].name, "Tokyo");
    }

    #[test]
    fn test_istanbul_is_utc_plus_three() {
        // Turkey stays on UTC+3 year round.
        let entries = [ZoneEntry::new("Istanbul", "Europe/Istanbul", 30.0)];
        let clock = &resolve_zones(&entries)[0];
        assert_eq!(
            clock.local_time_string(utc(2026, 1, 15, 12, 0, 0)),
            "15:00:00"
        );
        assert_eq!(
            clock.local_time_string(utc(2026, 7, 15, 12, 0, 0)),
            "15:00:00"
        );
    }

    #[test]
    fn test_new_york_observes_daylight_saving() {
        let entries = [ZoneEntry::new("New York", "America/New_York", -75.0)];
        let clock = &resolve_zones(&entries)[0];
        // EST in January, EDT in July.
        assert_eq!(
            clock.local_time_string(utc(2026, 1, 15, 12, 0, 0)),
            "07:00:00"
        );
        assert_eq!(
            clock.local_time_string(utc(2026, 7, 15, 12, 0, 0)),
            "08:00:00"
        );
    }

    #[test]
    fn test_local_time_matches_string_fields() {
        let entries = [ZoneEntry::new("Tokyo", "Asia/Tokyo", 135.0)];
        let clock = &resolve_zones(&entries)[0];
        let t = utc(2026, 3, 14, 1, 2, 3);
        let local = clock.local_time(t);
        // Tokyo is UTC+9 with no DST.
        assert_eq!(format!("{local}"), "10:02:03");
        assert_eq!(clock.local_time_string(t), "10:02:03");
    }

    #[test]
    fn test_zone_entry_serde_round_trip() {
        let entry = ZoneEntry::new("Istanbul", "Europe/Istanbul", 30.0);
        let text = ron::to_string(&entry).unwrap();
        let back: ZoneEntry = ron::from_str(&text).unwrap();
        assert_eq!(entry, back);
    }
}
