//! Small hand-made network shared by the unit tests.

use chrono::NaiveTime;
use geo::{LineString, MultiPolygon, Point, polygon};

use crate::transit::{
    RouteSegment, Schedule, StateBoundary, StateName, Station, StationCode, StationIndex,
    StaticRailProvider,
};

pub fn stations() -> Vec<Station> {
    vec![
        Station::new("NDLS", "New Delhi", "NCT of Delhi", Point::new(77.0, 28.0)),
        Station::new("DLI", "Delhi", "NCT of Delhi", Point::new(77.4, 28.8)),
        Station::new("HWH", "Howrah Jn", "West Bengal", Point::new(88.3, 22.6)),
        Station::new("CNB", "Kanpur Central", "Uttar Pradesh", Point::new(80.4, 26.4)),
        Station::new("MAO", "Madgaon", "Goa", Point::new(74.0, 15.3)),
    ]
}

pub fn boundaries() -> Vec<StateBoundary> {
    vec![
        StateBoundary {
            state: StateName::new("Goa"),
            shape: MultiPolygon::new(vec![polygon![
                (x: 73.7, y: 15.7),
                (x: 74.3, y: 15.7),
                (x: 74.3, y: 14.9),
                (x: 73.7, y: 14.9),
            ]]),
        },
        StateBoundary {
            state: StateName::new("West Bengal"),
            shape: MultiPolygon::new(vec![
                polygon![(x: 86.0, y: 22.0), (x: 89.0, y: 22.0), (x: 89.0, y: 27.0)],
                polygon![(x: 88.5, y: 21.5), (x: 88.9, y: 21.5), (x: 88.9, y: 21.8)],
            ]),
        },
    ]
}

fn time(h: u32, m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0)
}

fn route(
    from: (&str, &str),
    to: (&str, &str),
    name: &str,
    path: Vec<(f64, f64)>,
    schedule: Schedule,
) -> RouteSegment {
    RouteSegment {
        from_code: StationCode::new(from.0),
        from_name: from.1.into(),
        to_code: StationCode::new(to.0),
        to_name: to.1.into(),
        name: name.into(),
        path: LineString::from(path),
        schedule,
    }
}

pub fn routes() -> Vec<RouteSegment> {
    vec![
        route(
            ("NDLS", "New Delhi"),
            ("HWH", "Howrah Jn"),
            "Rajdhani Express",
            vec![(77.0, 28.0), (80.4, 26.4), (84.0, 25.0), (88.3, 22.6)],
            Schedule {
                arrival: time(9, 55),
                departure: time(16, 55),
                first_class_fare: Some(4755.0),
                duration_minutes: Some(1020.0),
                sleeper_fare: None,
                distance_km: Some(1447.0),
            },
        ),
        route(
            ("NDLS", "New Delhi"),
            ("CNB", "Kanpur Central"),
            "Shatabdi Express",
            vec![(77.0, 28.0), (78.0, 27.2), (80.4, 26.4)],
            Schedule {
                arrival: time(12, 25),
                departure: time(6, 0),
                first_class_fare: Some(1800.0),
                duration_minutes: Some(385.0),
                sleeper_fare: Some(430.0),
                distance_km: Some(440.0),
            },
        ),
        route(
            ("NDLS", "New Delhi"),
            ("HWH", "Howrah Jn"),
            "Poorva Express",
            vec![(77.0, 28.0), (82.0, 25.4), (88.3, 22.6)],
            Schedule {
                arrival: time(7, 5),
                departure: time(17, 40),
                first_class_fare: Some(3900.0),
                duration_minutes: Some(1405.0),
                sleeper_fare: Some(710.0),
                distance_km: Some(1450.0),
            },
        ),
        route(
            ("NDLS", "New Delhi"),
            ("PNBE", "Patna Jn"),
            "Magadh Express",
            vec![(77.0, 28.0), (85.1, 25.6)],
            Schedule::default(),
        ),
        route(
            ("MAO", "Madgaon"),
            ("NDLS", "New Delhi"),
            "Goa Express",
            vec![(74.0, 15.3), (75.0, 20.0), (77.0, 28.0)],
            Schedule::default(),
        ),
        route(
            ("GHST", "Ghost Halt"),
            ("DLI", "Delhi"),
            "Ghost Passenger",
            vec![(76.0, 29.0), (77.4, 28.8)],
            Schedule::default(),
        ),
    ]
}

pub fn provider() -> StaticRailProvider {
    let routes = routes();
    let index = StationIndex::from_routes(&routes);
    StaticRailProvider::from_data(stations(), boundaries(), routes, index)
}
