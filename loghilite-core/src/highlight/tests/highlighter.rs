use crate::error::HiliteError;
use crate::highlight::style::strip_sgr;
use crate::highlight::{AlignmentState, Group, Highlighter, PaintRule};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn highlighter() -> (Highlighter, Arc<AlignmentState>) {
    let state = Arc::new(AlignmentState::new());
    let h = Highlighter::with_default_rules(Arc::clone(&state)).unwrap();
    (h, state)
}

fn run(h: &Highlighter, line: &str) -> String {
    String::from_utf8(h.highlight(line.as_bytes())).unwrap()
}

#[test]
fn default_rules_are_ordered() {
    let (h, _) = highlighter();
    assert_eq!(h.rule_names(), vec!["align", "timestamp", "bracketed_number"]);
}

#[test]
fn timestamp_fields_are_painted_separately() {
    let (h, _) = highlighter();

    assert_eq!(
        run(&h, "12:34:56 something\n"),
        "\x1b[0;31;40m12\x1b[0m:\x1b[32m34\x1b[0m:\x1b[32m56\x1b[0m something\n"
    );
}

#[test]
fn every_timestamp_in_a_line_is_painted() {
    let (h, _) = highlighter();

    let out = run(&h, "from 01:02:03 to 04:05:06");
    assert_eq!(out.matches("\x1b[0;31;40m").count(), 2);
    assert_eq!(out.matches("\x1b[32m").count(), 4);
    assert_eq!(out.matches("\x1b[0m").count(), 6);
}

#[test]
fn bracketed_number_is_bold() {
    let (h, _) = highlighter();
    assert_eq!(run(&h, "[42] done"), "[\x1b[37;1m42\x1b[0m] done");
}

#[test]
fn brackets_without_digits_are_untouched() {
    let (h, _) = highlighter();
    assert_eq!(run(&h, "[pid] [] [4a]\n"), "[pid] [] [4a]\n");
}

#[test]
fn unmatched_line_passes_through() {
    let (h, state) = highlighter();

    assert_eq!(run(&h, "plain text, nothing to see\n"), "plain text, nothing to see\n");
    assert_eq!(state.current(), 0);
}

#[test]
fn prefix_padding_grows_and_never_shrinks() {
    let (h, state) = highlighter();

    assert_eq!(run(&h, "foo: a\n"), "foo: a\n");
    assert_eq!(state.current(), 5);

    assert_eq!(run(&h, "longer: b\n"), "longer: b\n");
    assert_eq!(state.current(), 8);

    assert_eq!(run(&h, "foo: c\n"), format!("foo:{}c\n", " ".repeat(4)));
    assert_eq!(run(&h, "x: d\n"), format!("x:{}d\n", " ".repeat(6)));
    assert_eq!(state.current(), 8);
}

#[test]
fn prefix_stops_at_first_separator() {
    let (h, state) = highlighter();

    assert_eq!(run(&h, "a: b: c\n"), "a: b: c\n");
    assert_eq!(state.current(), 3);
}

#[test]
fn lines_without_separator_are_not_padded() {
    let (h, state) = highlighter();

    run(&h, "component: started\n");
    assert_eq!(run(&h, "no separator here\n"), "no separator here\n");
    assert_eq!(run(&h, "colon:without space\n"), "colon:without space\n");
    assert_eq!(state.current(), 11);
}

#[test]
fn prefix_width_counts_bytes() {
    let (h, state) = highlighter();

    run(&h, "ünïcode: x\n");
    assert_eq!(state.current(), 11);
    assert_eq!(run(&h, "ab: y\n"), format!("ab:{}y\n", " ".repeat(8)));

    // Invalid UTF-8 is measured the same way.
    h.highlight(b"\xff\xfe-long-prefix: z\n");
    assert_eq!(state.current(), 16);
}

#[test]
fn shared_state_aligns_separate_highlighters() {
    let state = Arc::new(AlignmentState::new());
    let first = Highlighter::with_default_rules(Arc::clone(&state)).unwrap();
    let second = Highlighter::with_default_rules(Arc::clone(&state)).unwrap();

    run(&first, "a-long-name: x\n");
    assert_eq!(
        run(&second, "short: y\n"),
        format!("short:{}y\n", " ".repeat(7))
    );
}

#[test]
fn all_rules_combine() {
    let (h, _) = highlighter();

    run(&h, "worker-1: boot\n");
    assert_eq!(
        run(&h, "db: 10:00:01 [7] ready\n"),
        format!(
            "db:{}\x1b[0;31;40m10\x1b[0m:\x1b[32m00\x1b[0m:\x1b[32m01\x1b[0m [\x1b[37;1m7\x1b[0m] ready\n",
            " ".repeat(7)
        )
    );
}

#[test]
fn stripping_escapes_leaves_input_plus_padding() {
    let (h, _) = highlighter();

    let lines = [
        "svc: 23:59:59 [1] tick\n",
        "another-svc: [200] ok\n",
        "svc: 00:00:00 rollover\n",
        "free text 12:00:00\n",
    ];
    let expected = [
        "svc: 23:59:59 [1] tick\n".to_string(),
        "another-svc: [200] ok\n".to_string(),
        format!("svc:{}00:00:00 rollover\n", " ".repeat(9)),
        "free text 12:00:00\n".to_string(),
    ];

    for (line, want) in lines.iter().zip(expected) {
        let out = h.highlight(line.as_bytes());
        assert_eq!(String::from_utf8(strip_sgr(&out)).unwrap(), want);
    }
}

#[test]
fn invalid_utf8_passes_through() {
    let (h, _) = highlighter();

    let out = h.highlight(b"\xff\xfe [7]\n");
    assert_eq!(out, b"\xff\xfe [\x1b[37;1m7\x1b[0m]\n".to_vec());
}

#[test]
fn malformed_pattern_is_rejected() {
    let err = PaintRule::new("broken", "(unclosed", vec![Group::Pass]).unwrap_err();
    assert!(matches!(err, HiliteError::InvalidPattern { ref rule, .. } if rule == "broken"));
}

#[test]
fn group_count_must_match_transforms() {
    let err = PaintRule::new("pair", "(a)(b)", vec![Group::Pass]).unwrap_err();
    assert!(matches!(
        err,
        HiliteError::GroupMismatch {
            expected: 1,
            found: 2,
            ..
        }
    ));
}

#[test]
fn custom_table_can_replace_defaults() {
    let rule = PaintRule::new(
        "level",
        r"(ERROR)",
        vec![Group::Paint(crate::highlight::hour())],
    )
    .unwrap();
    let h = Highlighter::new(vec![Box::new(rule)]);

    assert_eq!(
        run(&h, "ERROR 12:00:00\n"),
        "\x1b[0;31;40mERROR\x1b[0m 12:00:00\n"
    );
}
