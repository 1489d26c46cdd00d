// Host-side tests for land geometry, pin and review decoding.

use site_core::*;

const COLLECTION: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    { "type": "Feature", "properties": {},
      "geometry": { "type": "Polygon",
        "coordinates": [[[0,0],[10,0],[10,10],[0,10],[0,0]]] } },
    { "type": "Feature", "properties": { "name": "islands" },
      "geometry": { "type": "MultiPolygon",
        "coordinates": [
          [[[20,20,5],[25,20,5],[25,25,5],[20,20,5]]],
          [[[30,-5],[35,-5],[35,0],[30,-5]], [[31,-4],[32,-4],[32,-3],[31,-4]]]
        ] } },
    { "type": "Feature", "properties": {},
      "geometry": { "type": "LineString", "coordinates": [[0,0],[1,1]] } },
    { "type": "Feature", "properties": {}, "geometry": null }
  ]
}"#;

#[test]
fn feature_collection_keeps_polygons_only() {
    let land = parse_land(COLLECTION).expect("valid geojson");
    assert_eq!(land.polygons.len(), 3);
    assert_eq!(land.ring_count(), 4);
    assert_eq!(land.polygons[0][0][1], GeoPoint::new(10.0, 0.0));
    // third coordinate (altitude) is ignored
    assert_eq!(land.polygons[1][0][0], GeoPoint::new(20.0, 20.0));
}

#[test]
fn bare_feature_array_is_accepted() {
    let text = r#"[{ "type": "Feature",
        "geometry": { "type": "Polygon", "coordinates": [[[1,1],[2,1],[2,2],[1,1]]] } }]"#;
    let land = parse_land(text).unwrap();
    assert_eq!(land.polygons.len(), 1);
}

#[test]
fn land_decoding_errors() {
    assert!(matches!(parse_land("not json"), Err(DataError::Json(_))));
    assert!(matches!(
        parse_land(r#"{"type":"FeatureCollection","features":[]}"#),
        Err(DataError::EmptyGeometry)
    ));
    let bad_lat = r#"[{ "geometry": { "type": "Polygon",
        "coordinates": [[[0,0],[1,95],[2,0],[0,0]]] } }]"#;
    match parse_land(bad_lat) {
        Err(DataError::InvalidCoordinate { lat, .. }) => assert_eq!(lat, 95.0),
        other => panic!("expected InvalidCoordinate, got {other:?}"),
    }
}

#[test]
fn pins_decode_with_optional_fields() {
    let text = r#"[
        {"id":"lon","name":"London","lat":51.5,"lon":-0.12,
         "image":"/img/london.jpg","description":"Head office"},
        {"id":"sg","name":"Singapore","lat":1.35,"lon":103.8}
    ]"#;
    let pins = parse_pins(text).unwrap();
    assert_eq!(pins.len(), 2);
    assert_eq!(pins[0].image.as_deref(), Some("/img/london.jpg"));
    assert_eq!(pins[1].description, None);
    assert_eq!(pins[1].location(), GeoPoint::new(103.8, 1.35));

    let bad = r#"[{"id":"x","name":"X","lat":120,"lon":0}]"#;
    assert!(matches!(parse_pins(bad), Err(DataError::InvalidCoordinate { .. })));
}

#[test]
fn default_pins_are_unique_and_in_range() {
    let pins = default_pins();
    assert!(!pins.is_empty());
    for (i, p) in pins.iter().enumerate() {
        assert!((-90.0..=90.0).contains(&p.lat));
        assert!((-180.0..=180.0).contains(&p.lon));
        assert!(pins[i + 1..].iter().all(|q| q.id != p.id), "duplicate id {}", p.id);
    }
}

#[test]
fn reviews_decode_leniently() {
    let list = r#"[
        {"name":"Asha","role":"CTO","company":"Northwind","text":"Great hires.","rating":5},
        {"name":"Ben","quote":"Fast and thorough."},
        {"name":"Empty","text":"   "}
    ]"#;
    let reviews = parse_reviews(list);
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].rating, Some(5.0));
    assert_eq!(reviews[1].text, "Fast and thorough.");
    assert_eq!(reviews[1].role, None);

    let wrapped = r#"{"reviews":[{"name":"C","review":"Recommended","avatar":"/c.png"}]}"#;
    let reviews = parse_reviews(wrapped);
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].image.as_deref(), Some("/c.png"));
}

#[test]
fn malformed_reviews_mean_no_reviews() {
    assert!(parse_reviews("").is_empty());
    assert!(parse_reviews("{oops").is_empty());
    assert!(parse_reviews(r#"{"items": 3}"#).is_empty());
}
