//! Loader round trips through temporary files.

use std::io::Write;

use listing_check::checks::schema;
use listing_check::data::loader::load_file;
use listing_check::data::model::Column;
use tempfile::NamedTempFile;

const CSV_SAMPLE: &str = "\
id,name,host_id,host_name,neighbourhood_group,neighbourhood,latitude,longitude,room_type,price,minimum_nights,number_of_reviews,last_review,reviews_per_month,calculated_host_listings_count,availability_365
2539,Clean & quiet apt,2787,John,Brooklyn,Kensington,40.64749,-73.97237,Private room,149,1,9,2018-10-19,0.21,6,365
2595,Skylit Midtown Castle,2845,Jennifer,Manhattan,Midtown,40.75362,-73.98377,Entire home/apt,225,1,45,2019-05-21,0.38,2,355
3831,Cozy Entire Floor,4869,LisaRoxanne,Brooklyn,Clinton Hill,40.68514,-73.95976,Entire home/apt,89,1,270,2019-07-05,4.64,1,194
5099,Large Cozy 1 BR,7322,Chris,Manhattan,Murray Hill,40.74767,-73.97500,Entire home/apt,200,3,74,2019-06-22,0.59,1,129
5121,BlissArtsSpace!,7356,Garon,Brooklyn,Bedford-Stuyvesant,40.68688,-73.95596,Private room,60,45,49,,,1,0
";

fn temp_with(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn csv_preserves_header_order_and_infers_types() {
    let file = temp_with(".csv", CSV_SAMPLE);
    let data = load_file(file.path()).unwrap();

    assert_eq!(data.len(), 5);
    assert!(schema::check_column_names(&data).is_ok());

    // Whole-dollar prices come back as an integer column; numeric() promotes.
    assert!(matches!(data.column("price").unwrap(), Column::Int(_)));
    assert_eq!(data.numeric("price").unwrap()[1], 225.0);
    assert!(matches!(data.column("latitude").unwrap(), Column::Float(_)));
}

#[test]
fn csv_blank_cells_become_nulls() {
    let file = temp_with(".csv", CSV_SAMPLE);
    let data = load_file(file.path()).unwrap();

    // Row 4 has empty last_review / reviews_per_month.
    let last_review = data.categorical("last_review").unwrap();
    assert_eq!(last_review[4], "");
    let rpm = data.numeric("reviews_per_month").unwrap();
    assert!(rpm[4].is_nan());
    assert_eq!(rpm[0], 0.21);
}

#[test]
fn json_records_round_trip() {
    // "price" precedes "id" alphabetically: the loaded order must still be
    // the file order, not a sorted one.
    let json = r#"[
        {"price": 99.5, "neighbourhood_group": "Queens", "id": 1},
        {"price": 120.0, "neighbourhood_group": "Bronx", "id": 2},
        {"price": null, "neighbourhood_group": "Queens", "id": 3}
    ]"#;
    let file = temp_with(".json", json);
    let data = load_file(file.path()).unwrap();

    assert_eq!(data.len(), 3);
    assert_eq!(data.column_names(), vec!["price", "neighbourhood_group", "id"]);
    let counts = data.value_counts("neighbourhood_group").unwrap();
    assert_eq!(counts.get("Queens"), Some(&2));
    assert!(data.numeric("price").unwrap()[2].is_nan());
}

#[test]
fn json_in_schema_order_passes_the_schema_check() {
    // The fixed layout is far from alphabetical ("name" before "host_id",
    // "room_type" before "price"); a record written in that order must load
    // in that order.
    let json = r#"[{
        "id": 2539,
        "name": "Clean & quiet apt",
        "host_id": 2787,
        "host_name": "John",
        "neighbourhood_group": "Brooklyn",
        "neighbourhood": "Kensington",
        "latitude": 40.64749,
        "longitude": -73.97237,
        "room_type": "Private room",
        "price": 149,
        "minimum_nights": 1,
        "number_of_reviews": 9,
        "last_review": "2018-10-19",
        "reviews_per_month": 0.21,
        "calculated_host_listings_count": 6,
        "availability_365": 365
    }]"#;
    let file = temp_with(".json", json);
    let data = load_file(file.path()).unwrap();

    assert!(schema::check_column_names(&data).is_ok());
}

#[test]
fn ragged_csv_rows_are_rejected() {
    let csv = "a,b,c\n1,2,3\n4,5\n";
    let file = temp_with(".csv", csv);
    assert!(load_file(file.path()).is_err());
}

#[test]
fn unknown_extensions_are_rejected() {
    let file = temp_with(".xlsx", "not a real workbook");
    let err = load_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Unsupported file extension"));
}
