//! Null-tolerant comparison primitives.
//!
//! Every query and assertion in the crate bottoms out in these functions.
//! String operands are `Option<&str>` so that a missing attribute compares
//! like SQL-style null text: two missing values are equal, and a missing
//! value never satisfies a pattern check (contains/starts-with/ends-with/
//! matches) but never errors either. Numeric comparisons are exact IEEE-754
//! comparisons on `f64`, no epsilon.
//!
//! Argument order follows the fluent call sites: the expected operand
//! (needle, prefix, pattern, bound) comes first, the actual value second.

use regex::Regex;

use crate::errors::WebAssertError;
use crate::strings;

/* String equals */

pub fn equals(expected: Option<&str>, actual: Option<&str>) -> bool {
    expected == actual
}

pub fn not_equals(expected: Option<&str>, actual: Option<&str>) -> bool {
    !equals(expected, actual)
}

pub fn equals_ignore_case(expected: Option<&str>, actual: Option<&str>) -> bool {
    match (expected, actual) {
        (Some(expected), Some(actual)) => expected.to_lowercase() == actual.to_lowercase(),
        (None, None) => true,
        _ => false,
    }
}

pub fn not_equals_ignore_case(expected: Option<&str>, actual: Option<&str>) -> bool {
    !equals_ignore_case(expected, actual)
}

/* String patterns */

pub fn contains(search: Option<&str>, text: Option<&str>) -> bool {
    match (search, text) {
        (Some(search), Some(text)) => text.contains(search),
        _ => false,
    }
}

pub fn not_contains(search: Option<&str>, text: Option<&str>) -> bool {
    !contains(search, text)
}

pub fn contains_ignore_case(search: Option<&str>, text: Option<&str>) -> bool {
    match (search, text) {
        (Some(search), Some(text)) => text.to_lowercase().contains(&search.to_lowercase()),
        _ => false,
    }
}

pub fn not_contains_ignore_case(search: Option<&str>, text: Option<&str>) -> bool {
    !contains_ignore_case(search, text)
}

pub fn starts_with(prefix: Option<&str>, text: Option<&str>) -> bool {
    match (prefix, text) {
        (Some(prefix), Some(text)) => text.starts_with(prefix),
        _ => false,
    }
}

pub fn not_starts_with(prefix: Option<&str>, text: Option<&str>) -> bool {
    !starts_with(prefix, text)
}

pub fn starts_with_ignore_case(prefix: Option<&str>, text: Option<&str>) -> bool {
    match (prefix, text) {
        (Some(prefix), Some(text)) => text.to_lowercase().starts_with(&prefix.to_lowercase()),
        _ => false,
    }
}

pub fn not_starts_with_ignore_case(prefix: Option<&str>, text: Option<&str>) -> bool {
    !starts_with_ignore_case(prefix, text)
}

pub fn ends_with(suffix: Option<&str>, text: Option<&str>) -> bool {
    match (suffix, text) {
        (Some(suffix), Some(text)) => text.ends_with(suffix),
        _ => false,
    }
}

pub fn not_ends_with(suffix: Option<&str>, text: Option<&str>) -> bool {
    !ends_with(suffix, text)
}

pub fn ends_with_ignore_case(suffix: Option<&str>, text: Option<&str>) -> bool {
    match (suffix, text) {
        (Some(suffix), Some(text)) => text.to_lowercase().ends_with(&suffix.to_lowercase()),
        _ => false,
    }
}

pub fn not_ends_with_ignore_case(suffix: Option<&str>, text: Option<&str>) -> bool {
    !ends_with_ignore_case(suffix, text)
}

/// Full-match regular expression test. The pattern must cover the whole
/// text, not a substring of it. An unparseable pattern behaves like a
/// non-match; predicates never fail.
pub fn matches(pattern: Option<&str>, text: Option<&str>) -> bool {
    let (Some(pattern), Some(text)) = (pattern, text) else {
        return false;
    };
    match Regex::new(&format!("^(?:{pattern})$")) {
        Ok(re) => re.is_match(text),
        Err(_) => false,
    }
}

pub fn not_matches(pattern: Option<&str>, text: Option<&str>) -> bool {
    if pattern.is_none() || text.is_none() {
        return true;
    }
    !matches(pattern, text)
}

/* Numbers */

pub fn num_equals(expected: f64, actual: f64) -> bool {
    actual == expected
}

pub fn num_not_equals(expected: f64, actual: f64) -> bool {
    actual != expected
}

pub fn num_less_than(bound: f64, actual: f64) -> bool {
    actual < bound
}

pub fn num_less_than_or_equals(bound: f64, actual: f64) -> bool {
    actual <= bound
}

pub fn num_greater_than(bound: f64, actual: f64) -> bool {
    actual > bound
}

pub fn num_greater_than_or_equals(bound: f64, actual: f64) -> bool {
    actual >= bound
}

/* Assert variants */

fn fail(message: String, name: &str, actual: &str) -> WebAssertError {
    WebAssertError::ComparisonFailed(format!(
        "{message}{}",
        strings::indent(&format!("\n{name}: {actual}"))
    ))
}

/// Asserts string equality, reporting the check name and both operands
/// on failure.
pub fn assert_equals(
    name: &str,
    expected: Option<&str>,
    actual: Option<&str>,
) -> Result<(), WebAssertError> {
    if not_equals(expected, actual) {
        return Err(fail(
            format!("{name} is not equal to {}", strings::quote(expected)),
            name,
            strings::display(actual),
        ));
    }
    Ok(())
}

pub fn assert_not_equals(
    name: &str,
    not_expected: Option<&str>,
    actual: Option<&str>,
) -> Result<(), WebAssertError> {
    if equals(not_expected, actual) {
        return Err(fail(
            format!(
                "{name} is equal to {} when it shouldn't",
                strings::quote(not_expected)
            ),
            name,
            strings::display(actual),
        ));
    }
    Ok(())
}

pub fn assert_contains(
    name: &str,
    search: Option<&str>,
    actual: Option<&str>,
) -> Result<(), WebAssertError> {
    if not_contains(search, actual) {
        return Err(fail(
            format!("{name} is not containing {}", strings::quote(search)),
            name,
            strings::display(actual),
        ));
    }
    Ok(())
}

pub fn assert_not_contains(
    name: &str,
    search: Option<&str>,
    actual: Option<&str>,
) -> Result<(), WebAssertError> {
    if contains(search, actual) {
        return Err(fail(
            format!(
                "{name} is containing {} when it shouldn't",
                strings::quote(search)
            ),
            name,
            strings::display(actual),
        ));
    }
    Ok(())
}

pub fn assert_starts_with(
    name: &str,
    prefix: Option<&str>,
    actual: Option<&str>,
) -> Result<(), WebAssertError> {
    if not_starts_with(prefix, actual) {
        return Err(fail(
            format!("{name} is not starting with {}", strings::quote(prefix)),
            name,
            strings::display(actual),
        ));
    }
    Ok(())
}

pub fn assert_not_starts_with(
    name: &str,
    prefix: Option<&str>,
    actual: Option<&str>,
) -> Result<(), WebAssertError> {
    if starts_with(prefix, actual) {
        return Err(fail(
            format!(
                "{name} is starting with {} when it shouldn't",
                strings::quote(prefix)
            ),
            name,
            strings::display(actual),
        ));
    }
    Ok(())
}

pub fn assert_ends_with(
    name: &str,
    suffix: Option<&str>,
    actual: Option<&str>,
) -> Result<(), WebAssertError> {
    if not_ends_with(suffix, actual) {
        return Err(fail(
            format!("{name} is not ending with {}", strings::quote(suffix)),
            name,
            strings::display(actual),
        ));
    }
    Ok(())
}

pub fn assert_not_ends_with(
    name: &str,
    suffix: Option<&str>,
    actual: Option<&str>,
) -> Result<(), WebAssertError> {
    if ends_with(suffix, actual) {
        return Err(fail(
            format!(
                "{name} is ending with {} when it shouldn't",
                strings::quote(suffix)
            ),
            name,
            strings::display(actual),
        ));
    }
    Ok(())
}

pub fn assert_matches(
    name: &str,
    pattern: Option<&str>,
    actual: Option<&str>,
) -> Result<(), WebAssertError> {
    if not_matches(pattern, actual) {
        return Err(fail(
            format!("{name} is not matching {}", strings::quote(pattern)),
            name,
            strings::display(actual),
        ));
    }
    Ok(())
}

pub fn assert_not_matches(
    name: &str,
    pattern: Option<&str>,
    actual: Option<&str>,
) -> Result<(), WebAssertError> {
    if matches(pattern, actual) {
        return Err(fail(
            format!(
                "{name} is matching {} when it shouldn't",
                strings::quote(pattern)
            ),
            name,
            strings::display(actual),
        ));
    }
    Ok(())
}

pub fn assert_num_equals(name: &str, expected: f64, actual: f64) -> Result<(), WebAssertError> {
    if num_not_equals(expected, actual) {
        return Err(fail(
            format!("{name} is not equal to {}", strings::quote_number(expected)),
            name,
            &strings::fmt_number(actual),
        ));
    }
    Ok(())
}

pub fn assert_num_not_equals(
    name: &str,
    not_expected: f64,
    actual: f64,
) -> Result<(), WebAssertError> {
    if num_equals(not_expected, actual) {
        return Err(fail(
            format!(
                "{name} is equal to {} when it shouldn't",
                strings::quote_number(not_expected)
            ),
            name,
            &strings::fmt_number(actual),
        ));
    }
    Ok(())
}

pub fn assert_num_less_than(name: &str, bound: f64, actual: f64) -> Result<(), WebAssertError> {
    if num_greater_than_or_equals(bound, actual) {
        return Err(fail(
            format!("{name} is not less than {}", strings::quote_number(bound)),
            name,
            &strings::fmt_number(actual),
        ));
    }
    Ok(())
}

pub fn assert_num_less_than_or_equals(
    name: &str,
    bound: f64,
    actual: f64,
) -> Result<(), WebAssertError> {
    if num_greater_than(bound, actual) {
        return Err(fail(
            format!(
                "{name} is not less than or equal to {}",
                strings::quote_number(bound)
            ),
            name,
            &strings::fmt_number(actual),
        ));
    }
    Ok(())
}

pub fn assert_num_greater_than(name: &str, bound: f64, actual: f64) -> Result<(), WebAssertError> {
    if num_less_than_or_equals(bound, actual) {
        return Err(fail(
            format!(
                "{name} is not greater than {}",
                strings::quote_number(bound)
            ),
            name,
            &strings::fmt_number(actual),
        ));
    }
    Ok(())
}

pub fn assert_num_greater_than_or_equals(
    name: &str,
    bound: f64,
    actual: f64,
) -> Result<(), WebAssertError> {
    if num_less_than(bound, actual) {
        return Err(fail(
            format!(
                "{name} is not greater than or equal to {}",
                strings::quote_number(bound)
            ),
            name,
            &strings::fmt_number(actual),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "compare_test.rs"]
mod compare_test;
