use bls_rs::models::{Calculation, Change, Footnote, Period, SeriesCollection, SeriesData};
use bls_rs::{ResponseEnvelope, decode, encode};

const FULL: &str = include_str!("fixtures/full_response.json");

#[test]
fn parse_sample_json() {
    let e = decode(FULL.as_bytes()).unwrap();
    assert!(e.succeeded());
    assert_eq!(e.response_time, 51);
    assert!(e.messages.is_empty());
    assert_eq!(e.results.series.len(), 1);

    let s = &e.results.series[0];
    assert_eq!(s.series_id, "LNS14000000");
    let cat = s.catalog.as_ref().unwrap();
    assert_eq!(cat.title, "(Seas) Unemployment Rate");
    assert_eq!(cat.area_type, "National");

    assert_eq!(s.periods.len(), 2);
    let p = &s.periods[0];
    assert_eq!(p.year, "2018");
    assert_eq!(p.period_number, "M02");
    assert_eq!(p.value, "4.10");
    assert_eq!(p.latest.as_deref(), Some("true"));
    assert_eq!(p.footnotes, vec![Footnote::new("P", "preliminary")]);
    let calc = p.calculations.as_ref().unwrap();
    assert_eq!(calc.net_change.six_months, "-0.2");
    assert_eq!(calc.percent_change.twelve_months, "-12.8");

    let older = &s.periods[1];
    assert!(older.calculations.is_none());
    assert_eq!(older.footnotes, vec![Footnote::default()]);
}

#[test]
fn unknown_fields_are_ignored() {
    let e = decode(
        br#"{"status":"REQUEST_SUCCEEDED","extra":{"a":1},
             "Results":{"series":[{"seriesID":"X","data":[],"flavor":"mint"}]}}"#,
    )
    .unwrap();
    assert_eq!(e.results.series[0].series_id, "X");
}

#[test]
fn alternate_key_casing_is_accepted() {
    let e = decode(
        br#"{"Status":"REQUEST_SUCCEEDED","Message":["hi"],
             "results":{"series":[{"SeriesID":"Y","data":[]}]}}"#,
    )
    .unwrap();
    assert!(e.succeeded());
    assert_eq!(e.messages, vec!["hi".to_string()]);
    assert_eq!(e.results.series[0].series_id, "Y");
}

#[test]
fn missing_results_decode_as_empty_collection() {
    let e = decode(br#"{"status":"REQUEST_NOT_PROCESSED","message":["nope"]}"#).unwrap();
    assert!(!e.succeeded());
    assert!(e.results.series.is_empty());
}

#[test]
fn numeric_values_are_rejected_not_coerced() {
    // Values must arrive as strings; a bare number is a schema mismatch.
    let err = decode(
        br#"{"status":"REQUEST_SUCCEEDED","Results":{"series":[{"seriesID":"X",
             "data":[{"year":"2018","period":"M01","periodName":"January","value":4.1,"footnotes":[]}]}]}}"#,
    );
    assert!(err.is_err());
}

#[test]
fn malformed_bytes_fail_to_decode() {
    assert!(decode(b"not json").is_err());
    assert!(decode(b"").is_err());
}

#[test]
fn encode_then_decode_preserves_exact_strings() {
    let change = Change {
        one_month: "0.10".into(),
        three_months: "-0.0".into(),
        six_months: "1e3".into(),
        twelve_months: "007".into(),
    };
    let original = ResponseEnvelope {
        status: "REQUEST_SUCCEEDED".into(),
        response_time: 7,
        messages: vec!["No Data Available for Series X Year: 2015".into()],
        results: SeriesCollection {
            series: vec![SeriesData {
                series_id: "CUUR0000SA0".into(),
                catalog: None,
                periods: vec![Period {
                    year: "2018".into(),
                    period_number: "M13".into(),
                    period_name: "Annual".into(),
                    latest: None,
                    value: "3.50".into(),
                    footnotes: vec![Footnote::default(), Footnote::new("R", "revised")],
                    calculations: Some(Calculation {
                        net_change: change.clone(),
                        percent_change: change,
                    }),
                }],
            }],
        },
    };

    let bytes = encode(&original).unwrap();
    let text = String::from_utf8(bytes.clone()).unwrap();
    assert!(text.contains(r#""value": "3.50""#));
    assert!(text.contains(r#""12": "007""#));

    let back = decode(&bytes).unwrap();
    assert_eq!(back, original);
    assert_eq!(back.results.series[0].periods[0].value, "3.50");
}
