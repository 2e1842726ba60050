//! String helpers for failure messages and element rendering.

const INDENT: &str = "    ";

/// Wrap a value in double quotes; a missing value renders as `null`.
pub(crate) fn quote(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("\"{value}\""),
        None => "null".to_string(),
    }
}

pub(crate) fn quote_number(number: f64) -> String {
    format!("\"{}\"", fmt_number(number))
}

/// Render a double the way it was typed: integral values without a
/// decimal point.
pub(crate) fn fmt_number(number: f64) -> String {
    if number.is_finite() && number == number.trunc() && number.abs() < i64::MAX as f64 {
        format!("{}", number as i64)
    } else {
        number.to_string()
    }
}

/// Indent every non-empty line of `text` by four spaces.
pub(crate) fn indent(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                line.to_string()
            } else {
                format!("{INDENT}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn prepend_space_if_not_blank(text: &str) -> String {
    if text.trim().is_empty() {
        String::new()
    } else {
        format!(" {text}")
    }
}

pub(crate) fn surround_with_newlines_if_multiline(text: &str) -> String {
    if text.contains('\n') {
        format!("\n{text}\n")
    } else {
        text.to_string()
    }
}

/// Display form of a nullable actual value in failure payloads.
pub(crate) fn display(value: Option<&str>) -> &str {
    value.unwrap_or("null")
}

#[cfg(test)]
#[path = "strings_test.rs"]
mod strings_test;
