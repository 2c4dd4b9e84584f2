//! `rh-core` — foundational types for the `rideflow` dispatch simulator.
//!
//! This crate is a dependency of every other `rh-*` crate.  It intentionally
//! has no `rh-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `NodeId`, `EdgeId`, `DriverId`, `PassengerId`         |
//! | [`geo`]     | `Coord`, flat-plane distances                         |
//! | [`time`]    | `SimTime`, timestamp parsing, the drive-hour rule     |
//! | [`rng`]     | `SimRng` (seedable, deterministic)                    |
//! | [`error`]   | `CoreError`                                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::CoreError;
pub use geo::Coord;
pub use ids::{DriverId, EdgeId, NodeId, PassengerId};
pub use rng::SimRng;
pub use time::{SimTime, drive_hour};
