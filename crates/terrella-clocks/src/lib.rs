//! Timezone clocks for the globe's marker overlay: IANA zone resolution,
//! local-time formatting, and the once-per-second refresh cadence.

mod ticker;
mod zone;

pub use ticker::ClockTicker;
pub use zone::{ZoneClock, ZoneEntry, resolve_zones};
