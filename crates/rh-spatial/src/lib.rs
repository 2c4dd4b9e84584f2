//! `rh-spatial` — road network, nearest-node index, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`network`] | `RoadNetwork` (CSR + hourly weights), `RoadNetworkBuilder` |
//! | [`kdtree`]  | `KdTree` nearest-node index                                |
//! | [`astar`]   | `Heuristic`, `travel_time`, `travel_time_and_path`         |
//! | [`traffic`] | `TrafficMap` congestion overlay                            |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.         |

pub mod astar;
pub mod error;
pub mod kdtree;
pub mod network;
pub mod traffic;

#[cfg(test)]
mod tests;

pub use astar::{Heuristic, travel_time, travel_time_and_path, travel_time_with_traffic};
pub use error::{SpatialError, SpatialResult};
pub use kdtree::KdTree;
pub use network::{HOURS_PER_DAY, HourlyWeight, RoadNetwork, RoadNetworkBuilder};
pub use traffic::TrafficMap;
