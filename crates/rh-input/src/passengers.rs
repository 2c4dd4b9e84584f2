//! Passenger request CSV loader.
//!
//! # CSV format
//!
//! ```csv
//! Date/Time,Source Lat,Source Lon,Dest Lat,Dest Lon
//! 4/25/2014 0:00:00,40.6463,-73.7896,40.6633,-73.9402
//! 4/25/2014 0:01:00,40.7587,-73.9706,40.7466,-74.0013
//! ```
//!
//! Row order defines the `PassengerId` assignment and must be sorted by
//! timestamp: the simulation replays requests in table order and treats it
//! as arrival order.  The loader rejects unsorted streams.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rh_core::{Coord, SimTime};
use rh_dispatch::Passenger;

use crate::{InputError, InputResult};

#[derive(Deserialize)]
struct PassengerRecord {
    #[serde(rename = "Date/Time")]
    timestamp: String,
    #[serde(rename = "Source Lat")]
    source_lat: f64,
    #[serde(rename = "Source Lon")]
    source_lon: f64,
    #[serde(rename = "Dest Lat")]
    dest_lat: f64,
    #[serde(rename = "Dest Lon")]
    dest_lon: f64,
}

/// Load passenger requests from a CSV file.
pub fn load_passengers_csv(path: &Path) -> InputResult<Vec<Passenger>> {
    load_passengers_reader(std::fs::File::open(path)?)
}

/// Like [`load_passengers_csv`] but accepts any `Read` source.
pub fn load_passengers_reader<R: Read>(reader: R) -> InputResult<Vec<Passenger>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut passengers: Vec<Passenger> = Vec::new();

    for (index, result) in csv_reader.deserialize::<PassengerRecord>().enumerate() {
        let row = result?;
        let request_time: SimTime = row
            .timestamp
            .parse()
            .map_err(|e: rh_core::CoreError| InputError::Parse(e.to_string()))?;

        if let Some(prev) = passengers.last()
            && request_time < prev.request_time
        {
            return Err(InputError::UnsortedPassengers { index });
        }

        passengers.push(Passenger {
            request_time,
            source: Coord::new(row.source_lat, row.source_lon),
            dest: Coord::new(row.dest_lat, row.dest_lon),
        });
    }

    Ok(passengers)
}
