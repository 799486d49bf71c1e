use crate::highlight::style::{Color, Sgr, Style, strip_sgr};
use pretty_assertions::assert_eq;

#[test]
fn sgr_renders_params_in_insertion_order() {
    let sgr = Sgr::new().fg(Color::White).style(Style::Bold);
    assert_eq!(sgr.params(), &[37, 1]);
    assert_eq!(sgr.paint(b"42"), b"\x1b[37;1m42\x1b[0m".to_vec());
}

#[test]
fn sgr_with_background() {
    let sgr = Sgr::new()
        .style(Style::Normal)
        .fg(Color::Red)
        .bg(Color::Black);
    assert_eq!(sgr.paint(b"12"), b"\x1b[0;31;40m12\x1b[0m".to_vec());
}

#[test]
fn reset_colors_use_nine() {
    assert_eq!(Color::Reset.fg(), 39);
    assert_eq!(Color::Reset.bg(), 49);
}

#[test]
fn strip_removes_only_sgr_sequences() {
    let input = b"a\x1b[0;31;40mb\x1b[0mc [1] \x1b[K";
    assert_eq!(strip_sgr(input), b"abc [1] \x1b[K".to_vec());
}

#[test]
fn strip_keeps_unterminated_escape() {
    let input = b"tail \x1b[12";
    assert_eq!(strip_sgr(input), input.to_vec());
}
