//! Frame-driven runtime state for the globe scene.
//!
//! [`GlobeSession`] owns every piece of state the visualization mutates at
//! runtime: the solar model and its follower, the resolved timezone clocks
//! and their markers, the graticule, the light rig, and the popup/refresh
//! bookkeeping. A host drives it from its render loop with
//! [`advance_frame`](GlobeSession::advance_frame) and
//! [`poll_clocks`](GlobeSession::poll_clocks); everything runs on the
//! caller's thread.

mod session;

pub use session::{ClockReadout, DriveOutput, FrameUpdate, GlobeSession, Marker};
