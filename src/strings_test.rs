// Unit tests for the message/rendering string helpers

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_quote() {
    assert_eq!(quote(Some("abc")), "\"abc\"");
    assert_eq!(quote(Some("")), "\"\"");
    assert_eq!(quote(None), "null");
}

#[test]
fn test_fmt_number_integral_values_drop_the_decimal_point() {
    assert_eq!(fmt_number(42.0), "42");
    assert_eq!(fmt_number(-7.0), "-7");
    assert_eq!(fmt_number(0.0), "0");
}

#[test]
fn test_fmt_number_fractional_values_keep_their_digits() {
    assert_eq!(fmt_number(42.5), "42.5");
    assert_eq!(fmt_number(-0.25), "-0.25");
}

#[test]
fn test_quote_number() {
    assert_eq!(quote_number(3.0), "\"3\"");
    assert_eq!(quote_number(3.5), "\"3.5\"");
}

#[test]
fn test_indent_prefixes_each_non_empty_line() {
    assert_eq!(indent("a"), "    a");
    assert_eq!(indent("\nElement: <div />"), "\n    Element: <div />");
    assert_eq!(indent("a\nb"), "    a\n    b");
}

#[test]
fn test_prepend_space_if_not_blank() {
    assert_eq!(prepend_space_if_not_blank("id=\"a\""), " id=\"a\"");
    assert_eq!(prepend_space_if_not_blank(""), "");
    assert_eq!(prepend_space_if_not_blank("   "), "");
}

#[test]
fn test_surround_with_newlines_if_multiline() {
    assert_eq!(surround_with_newlines_if_multiline("plain"), "plain");
    assert_eq!(surround_with_newlines_if_multiline("a\nb"), "\na\nb\n");
}

#[test]
fn test_display_falls_back_to_null() {
    assert_eq!(display(Some("x")), "x");
    assert_eq!(display(None), "null");
}
