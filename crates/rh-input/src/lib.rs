//! `rh-input` — loaders for the historical input tables.
//!
//! The simulation core is I/O-free: it consumes already-parsed driver and
//! passenger tables plus a built road network.  This crate materializes
//! those from the raw files of the historical dataset:
//!
//! | Module         | Input                                       | Output |
//! |----------------|---------------------------------------------|--------|
//! | [`drivers`]    | drivers CSV (`Date/Time,Lat,Lon`)           | `Vec<Driver>` |
//! | [`passengers`] | passengers CSV (5 columns, time-sorted)     | `Vec<Passenger>` |
//! | [`network`]    | node-coordinate JSON + adjacency JSON       | `LoadedNetwork` |
//!
//! All loaders have `_reader` variants taking any `std::io::Read`, so tests
//! (and in-memory fixtures) can pass a `Cursor` instead of touching disk.

pub mod drivers;
pub mod error;
pub mod network;
pub mod passengers;

#[cfg(test)]
mod tests;

pub use drivers::{MAX_RIDE_CAPACITY, MIN_RIDE_CAPACITY, load_drivers_csv, load_drivers_reader};
pub use error::{InputError, InputResult};
pub use network::{LoadedNetwork, load_network_files, load_network_json};
pub use passengers::{load_passengers_csv, load_passengers_reader};
