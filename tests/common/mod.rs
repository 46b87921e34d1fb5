//! Shared fixtures: programmatic listing datasets in the fixed 16-column
//! layout.
#![allow(dead_code)] // not every test crate uses every fixture

use listing_check::data::model::{Column, Dataset};

/// The fields a test cares about; everything else is filled with plausible
/// constants.
#[derive(Debug, Clone, Copy)]
pub struct Row {
    pub group: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub price: f64,
}

pub const BOROUGHS: [&str; 5] = ["Bronx", "Brooklyn", "Manhattan", "Queens", "Staten Island"];

/// Borough centres, all inside the NYC bounding box.
const CENTRES: [(f64, f64); 5] = [
    (40.85, -73.87),
    (40.65, -73.95),
    (40.78, -73.97),
    (40.73, -73.82),
    (40.58, -74.15),
];

/// Default row `i`: cycles through the boroughs so every category is
/// present once `rows >= 5`, with in-box coordinates and in-range prices.
pub fn default_row(i: usize) -> Row {
    let b = i % 5;
    Row {
        group: BOROUGHS[b],
        latitude: CENTRES[b].0,
        longitude: CENTRES[b].1,
        price: 50.0 + (i % 300) as f64,
    }
}

/// The full 16-column layout for `rows` rows, with the interesting fields
/// supplied per row by `row`. Returned unassembled so schema tests can
/// permute or drop columns first.
pub fn listing_columns<F: Fn(usize) -> Row>(rows: usize, row: F) -> Vec<(String, Column)> {
    let specs: Vec<Row> = (0..rows).map(row).collect();
    vec![
        (
            "id".into(),
            Column::Int((0..rows as i64).map(|i| i + 1).collect()),
        ),
        (
            "name".into(),
            Column::Str((0..rows).map(|i| format!("Listing {i}")).collect()),
        ),
        (
            "host_id".into(),
            Column::Int((0..rows as i64).map(|i| 10_000 + i).collect()),
        ),
        (
            "host_name".into(),
            Column::Str((0..rows).map(|i| format!("Host {}", i % 97)).collect()),
        ),
        (
            "neighbourhood_group".into(),
            Column::Str(specs.iter().map(|r| r.group.to_string()).collect()),
        ),
        (
            "neighbourhood".into(),
            Column::Str(specs.iter().map(|r| format!("{} area", r.group)).collect()),
        ),
        (
            "latitude".into(),
            Column::Float(specs.iter().map(|r| r.latitude).collect()),
        ),
        (
            "longitude".into(),
            Column::Float(specs.iter().map(|r| r.longitude).collect()),
        ),
        (
            "room_type".into(),
            Column::Str((0..rows).map(|_| "Private room".to_string()).collect()),
        ),
        (
            "price".into(),
            Column::Float(specs.iter().map(|r| r.price).collect()),
        ),
        ("minimum_nights".into(), Column::Int(vec![2; rows])),
        ("number_of_reviews".into(), Column::Int(vec![7; rows])),
        (
            "last_review".into(),
            Column::Str(vec!["2019-05-21".to_string(); rows]),
        ),
        ("reviews_per_month".into(), Column::Float(vec![0.8; rows])),
        (
            "calculated_host_listings_count".into(),
            Column::Int(vec![1; rows]),
        ),
        ("availability_365".into(), Column::Int(vec![180; rows])),
    ]
}

/// A dataset that passes every check except possibly volume (depending on
/// `rows`).
pub fn valid_listings(rows: usize) -> Dataset {
    Dataset::from_columns(listing_columns(rows, default_row)).unwrap()
}

/// A dataset with customized interesting fields.
pub fn listings_from<F: Fn(usize) -> Row>(rows: usize, row: F) -> Dataset {
    Dataset::from_columns(listing_columns(rows, row)).unwrap()
}

/// A minimal dataset whose only property of interest is its row count.
pub fn sized(rows: usize) -> Dataset {
    Dataset::from_columns(vec![("id".into(), Column::Int(vec![0; rows]))]).unwrap()
}
