//! Driver sign-on CSV loader.
//!
//! # CSV format
//!
//! ```csv
//! Date/Time,Lat,Lon
//! 4/25/2014 0:00:00,40.7690,-73.9549
//! 4/25/2014 0:03:00,40.7267,-74.0345
//! ```
//!
//! Row order defines the `DriverId` assignment.  Ride capacity is not part
//! of the dataset: each driver draws theirs uniformly from
//! [`MIN_RIDE_CAPACITY`, `MAX_RIDE_CAPACITY`] using the caller's seeded
//! RNG, so a run is reproducible given its seed.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rh_core::{Coord, SimRng, SimTime};
use rh_dispatch::Driver;

use crate::{InputError, InputResult};

/// Fewest rides a driver can sign on with.
pub const MIN_RIDE_CAPACITY: u32 = 7;
/// Most rides a driver can sign on with.
pub const MAX_RIDE_CAPACITY: u32 = 12;

#[derive(Deserialize)]
struct DriverRecord {
    #[serde(rename = "Date/Time")]
    timestamp: String,
    #[serde(rename = "Lat")]
    lat: f64,
    #[serde(rename = "Lon")]
    lon: f64,
}

/// Load driver sign-ons from a CSV file.
pub fn load_drivers_csv(path: &Path, rng: &mut SimRng) -> InputResult<Vec<Driver>> {
    load_drivers_reader(std::fs::File::open(path)?, rng)
}

/// Like [`load_drivers_csv`] but accepts any `Read` source (e.g. a
/// `std::io::Cursor` in tests).
pub fn load_drivers_reader<R: Read>(reader: R, rng: &mut SimRng) -> InputResult<Vec<Driver>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut drivers = Vec::new();

    for result in csv_reader.deserialize::<DriverRecord>() {
        let row = result?;
        let available_at: SimTime = row
            .timestamp
            .parse()
            .map_err(|e: rh_core::CoreError| InputError::Parse(e.to_string()))?;

        drivers.push(Driver {
            available_at,
            pos: Coord::new(row.lat, row.lon),
            rides_remaining: rng.gen_range(MIN_RIDE_CAPACITY..=MAX_RIDE_CAPACITY),
        });
    }

    Ok(drivers)
}
