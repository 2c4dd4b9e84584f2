//! Unit tests for the loaders, all running on in-memory fixtures.

#[cfg(test)]
mod drivers {
    use std::io::Cursor;

    use rh_core::SimRng;

    use crate::{MAX_RIDE_CAPACITY, MIN_RIDE_CAPACITY, load_drivers_reader};

    const CSV: &str = "\
Date/Time,Lat,Lon
4/25/2014 0:00:00,40.7690,-73.9549
4/25/2014 0:03:00,40.7267,-74.0345
4/25/2014 7:15:09,40.6463,-73.7896
";

    #[test]
    fn rows_become_drivers_in_order() {
        let mut rng = SimRng::new(42);
        let drivers = load_drivers_reader(Cursor::new(CSV), &mut rng).unwrap();

        assert_eq!(drivers.len(), 3);
        assert!(drivers[0].available_at < drivers[1].available_at);
        assert_eq!(drivers[0].pos.lat, 40.7690);
        assert_eq!(drivers[2].available_at.hour(), 7);
    }

    #[test]
    fn capacities_drawn_from_the_documented_range() {
        let mut rng = SimRng::new(1);
        let drivers = load_drivers_reader(Cursor::new(CSV), &mut rng).unwrap();
        for d in &drivers {
            assert!((MIN_RIDE_CAPACITY..=MAX_RIDE_CAPACITY).contains(&d.rides_remaining));
        }
    }

    #[test]
    fn capacities_are_seed_deterministic() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let left = load_drivers_reader(Cursor::new(CSV), &mut a).unwrap();
        let right = load_drivers_reader(Cursor::new(CSV), &mut b).unwrap();
        assert_eq!(left, right);
    }

    #[test]
    fn bad_timestamp_is_a_parse_error() {
        let bad = "Date/Time,Lat,Lon\nnot a time,1.0,2.0\n";
        let mut rng = SimRng::new(0);
        assert!(load_drivers_reader(Cursor::new(bad), &mut rng).is_err());
    }
}

#[cfg(test)]
mod passengers {
    use std::io::Cursor;

    use crate::{InputError, load_passengers_reader};

    #[test]
    fn sorted_stream_loads() {
        let csv = "\
Date/Time,Source Lat,Source Lon,Dest Lat,Dest Lon
4/25/2014 0:00:00,40.6463,-73.7896,40.6633,-73.9402
4/25/2014 0:01:00,40.7587,-73.9706,40.7466,-74.0013
";
        let passengers = load_passengers_reader(Cursor::new(csv)).unwrap();
        assert_eq!(passengers.len(), 2);
        assert_eq!(passengers[0].dest.lon, -73.9402);
    }

    #[test]
    fn unsorted_stream_is_rejected() {
        let csv = "\
Date/Time,Source Lat,Source Lon,Dest Lat,Dest Lon
4/25/2014 1:00:00,40.0,-73.0,40.1,-73.1
4/25/2014 0:30:00,40.0,-73.0,40.1,-73.1
";
        let err = load_passengers_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, InputError::UnsortedPassengers { index: 1 }));
    }

    #[test]
    fn equal_timestamps_are_allowed() {
        let csv = "\
Date/Time,Source Lat,Source Lon,Dest Lat,Dest Lon
4/25/2014 1:00:00,40.0,-73.0,40.1,-73.1
4/25/2014 1:00:00,40.2,-73.2,40.3,-73.3
";
        assert!(load_passengers_reader(Cursor::new(csv)).is_ok());
    }
}

#[cfg(test)]
mod network {
    use crate::{InputError, load_network_json};

    const NODES: &str = r#"{
        "a": { "lat": 0.0, "lon": 0.0 },
        "b": { "lat": 0.0, "lon": 1.0 }
    }"#;

    /// All 24 hourly bundles for one edge, `time` varying slightly by hour.
    fn full_day(base: f64, max_speed: f64) -> String {
        let hours: Vec<String> = (0..24)
            .map(|h| {
                format!(
                    r#"{{ "hour": {h}, "time": {}, "max_speed": {max_speed} }}"#,
                    base + h as f64 * 1e-4
                )
            })
            .collect();
        format!("[{}]", hours.join(","))
    }

    #[test]
    fn builds_the_graph_with_hourly_weights() {
        let adjacency = format!(
            r#"{{ "a": {{ "b": {} }}, "b": {{ "a": {} }} }}"#,
            full_day(0.1, 25.0),
            full_day(0.2, 40.0),
        );
        let loaded = load_network_json(NODES, &adjacency).unwrap();

        assert_eq!(loaded.network.node_count(), 2);
        assert_eq!(loaded.network.edge_count(), 2);
        assert_eq!(loaded.network.max_speed_limit, 40.0);
        assert_eq!(loaded.node_ids.len(), 2);

        let a = loaded.node_index["a"];
        let b = loaded.node_index["b"];
        let w = loaded.network.edge_attr(a, b, 3).unwrap();
        assert!((w.travel_time - 0.1003).abs() < 1e-12);
    }

    #[test]
    fn interning_is_sorted_and_stable() {
        let adjacency = format!(r#"{{ "a": {{ "b": {} }} }}"#, full_day(0.1, 25.0));
        let left = load_network_json(NODES, &adjacency).unwrap();
        let right = load_network_json(NODES, &adjacency).unwrap();

        assert_eq!(left.node_ids, right.node_ids);
        // Sorted key order: "a" before "b".
        assert_eq!(left.node_ids, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn missing_hour_is_a_load_error() {
        // Only hour 0 supplied.
        let adjacency =
            r#"{ "a": { "b": [ { "hour": 0, "time": 0.1, "max_speed": 25.0 } ] } }"#;
        let err = load_network_json(NODES, adjacency).unwrap_err();
        assert!(matches!(err, InputError::MissingHour { hour: 1, .. }));
    }

    #[test]
    fn unknown_node_is_a_load_error() {
        let adjacency = format!(r#"{{ "a": {{ "ghost": {} }} }}"#, full_day(0.1, 25.0));
        let err = load_network_json(NODES, &adjacency).unwrap_err();
        assert!(matches!(err, InputError::UnknownNode(id) if id == "ghost"));
    }
}
