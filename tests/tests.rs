use std::borrow::Cow;

use csvsplit::{escape, join, split, split_into, try_split, ErrorKind, Record};

// A messy but well-formed line touching every quoting rule at once.
const KITCHEN_SINK: &str =
    "plain,\"comma, inside\",\"doubled \"\"quotes\"\"\",,\" leading space\"";

#[test]
fn kitchen_sink() {
    let rec = split(KITCHEN_SINK);
    assert_eq!(
        rec,
        vec![
            "plain",
            "comma, inside",
            "doubled \"quotes\"",
            "",
            " leading space",
        ]
    );
}

#[test]
fn split_join_split_is_stable() {
    let lines = [
        "",
        "\n",
        "a",
        "a,b,c",
        ",",
        ",,",
        "a,",
        ",a",
        "\"a,b\",c",
        "\"a\"\"b\"",
        "\"\"",
        "\"",
        "\"abc",
        "\"a\"b,c",
        "a\"b,c",
        " a , b ",
        "α,\"β,γ\"",
        "a,b\r\n",
    ];
    // Splitting a joined split is the same as splitting once, for every
    // line, including the malformed ones.
    for line in &lines {
        let first = split(line);
        let second = split(&join(&first));
        assert_eq!(first, second, "line {:?}", line);
    }
}

#[test]
fn try_split_matches_split_when_ok() {
    let lines = ["", "a,b", "\"a\"\"b\",", ",,", "\"x,y\"", "a,b\r\n"];
    for line in &lines {
        assert_eq!(try_split(line).unwrap(), split(line), "line {:?}", line);
    }
}

#[test]
fn try_split_reports_position() {
    let err = try_split("ok,\"fine\",oops\"").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedQuote);
    assert_eq!(err.field(), 2);
    assert_eq!(err.offset(), 14);
}

#[test]
fn error_display() {
    let err = try_split("a,\"b").unwrap_err();
    assert_eq!(
        err.to_string(),
        "CSV parse error: field 1 (byte 2): \
         quoted field is missing its closing quote",
    );
}

#[test]
fn record_collect_and_iterate() {
    let rec = split("x,y,z");
    let upper: Vec<String> = rec.iter().map(|f| f.to_uppercase()).collect();
    assert_eq!(upper, vec!["X", "Y", "Z"]);

    let rec: Record = upper.iter().collect();
    assert_eq!(join(&rec), "X,Y,Z");
}

#[test]
fn split_into_over_many_lines() {
    let input = "a,b\nc,d\n\"e,f\",g\n";
    let mut rec = Record::with_capacity(64, 8);
    let mut all = Vec::new();
    for line in input.lines() {
        split_into(line, &mut rec);
        all.push(rec.iter().map(String::from).collect::<Vec<_>>());
    }
    assert_eq!(
        all,
        vec![vec!["a", "b"], vec!["c", "d"], vec!["e,f", "g"]]
    );
}

#[test]
fn escape_borrows_when_possible() {
    assert!(matches!(escape("no special characters"), Cow::Borrowed(_)));
    assert!(matches!(escape("a,b"), Cow::Owned(_)));
}

#[cfg(feature = "serde")]
#[test]
fn serde_json_round_trip() {
    let rec = split("a,\"b,c\",");
    let json = serde_json::to_string(&rec).unwrap();
    assert_eq!(json, r#"["a","b,c",""]"#);

    let back: Record = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rec);
}

#[cfg(feature = "serde")]
#[test]
fn serde_fields_carry_quotes() {
    let rec = split("\"x \"\"y\"\"\"");
    let json = serde_json::to_string(&rec).unwrap();
    assert_eq!(json, r#"["x \"y\""]"#);
}
