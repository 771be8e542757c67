//! Live API tests. Run with: `cargo test --features online --test api_live -- --nocapture`
#![cfg(feature = "online")]

use bls_rs::{Client, DataProvider, QueryConfig};

fn config(series: &str) -> QueryConfig {
    QueryConfig {
        start: Some("2017".into()),
        end: Some("2018".into()),
        series: Some(series.into()),
        ..Default::default()
    }
}

#[test]
fn fetch_unemployment_rate() {
    let payload = config("LNS14000000").into_payload().unwrap();
    let e = Client::new().unwrap().fetch(&payload).unwrap();
    assert!(e.succeeded(), "status {} messages {:?}", e.status, e.messages);
    let s = &e.results.series[0];
    assert_eq!(s.series_id, "LNS14000000");
    assert!(!s.periods.is_empty());
    assert!(s.periods.iter().all(|p| p.year == "2017" || p.year == "2018"));
}

#[test]
fn invalid_series_is_reported_in_messages() {
    let payload = config("LNS1400000X").into_payload().unwrap();
    let e = Client::new().unwrap().fetch(&payload).unwrap();
    assert!(
        e.messages
            .first()
            .is_some_and(|m| m.starts_with("Invalid Series")),
        "messages {:?}",
        e.messages
    );
}
