use pretty_assertions::assert_eq;
use textstat_engine::{render_json, render_text, Report};

#[test]
fn text_report_has_both_sections() {
    let report = Report::build("Hello world!\nHello again.", 5);
    assert_eq!(
        render_text(&report),
        "# Text Stats\n\
         chars: 25\n\
         words: 4\n\
         lines: 2\n\
         \n\
         # Top Words\n\
         hello: 2\n\
         world: 1\n\
         again: 1\n"
    );
}

#[test]
fn text_report_with_no_top_words() {
    let report = Report::build("a b c", 0);
    assert_eq!(
        render_text(&report),
        "# Text Stats\nchars: 5\nwords: 3\nlines: 1\n\n# Top Words\n"
    );
}

#[test]
fn empty_input_report() {
    let report = Report::build("", 5);
    assert_eq!(
        render_text(&report),
        "# Text Stats\nchars: 0\nwords: 0\nlines: 0\n\n# Top Words\n"
    );
}

#[test]
fn json_report_shape() {
    let report = Report::build("a b a", 1);
    let json = render_json(&report).unwrap();
    assert!(json.ends_with('\n'));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "stats": { "chars": 5, "words": 3, "lines": 1 },
            "top_words": [ { "word": "a", "count": 2 } ]
        })
    );
}

#[test]
fn json_keeps_stat_order() {
    let json = render_json(&Report::build("x", 1)).unwrap();
    let chars = json.find("\"chars\"").unwrap();
    let words = json.find("\"words\"").unwrap();
    let lines = json.find("\"lines\"").unwrap();
    assert!(chars < words && words < lines);
}
