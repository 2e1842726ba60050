//! Throwing counterparts of the queries in [`crate::queries`].
//!
//! Every assertion evaluates the matching boolean query and, when it does
//! not hold, fails with [`WebAssertError::AssertionFailed`] carrying the
//! property name, the expected value, and either the rendered element or
//! the observed value, so a failing test is diagnosable from the message
//! alone. Page- and collection-scoped assertions report through the
//! comparison core instead and carry the observed value as a named line.

use std::time::Duration;

use fantoccini::elements::Element;

use crate::compare;
use crate::errors::WebAssertError;
use crate::html;
use crate::queries;
use crate::strings;
use crate::wait;

async fn fail_with_element(message: String, element: &Element) -> WebAssertError {
    WebAssertError::AssertionFailed(format!(
        "{message}{}",
        strings::indent(&format!(
            "\nElement: {}",
            html::html_of(Some(element)).await
        ))
    ))
}

async fn check(passed: bool, message: String, element: &Element) -> Result<(), WebAssertError> {
    if passed {
        Ok(())
    } else {
        Err(fail_with_element(message, element).await)
    }
}

/* Is displayed */

pub async fn assert_is_displayed(element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::is_displayed(element).await?;
    check(passed, "Element is not displayed".to_string(), element).await
}

pub async fn assert_is_not_displayed(element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::is_not_displayed(element).await?;
    check(
        passed,
        "Element is displayed when it shouldn't".to_string(),
        element,
    )
    .await
}

pub async fn assert_is_displayed_within(
    element: &Element,
    timeout: Duration,
) -> Result<(), WebAssertError> {
    let passed = wait::is_displayed_within(element, timeout).await?;
    check(
        passed,
        format!("Element is not displayed within {timeout:?}"),
        element,
    )
    .await
}

pub async fn assert_is_not_displayed_within(
    element: &Element,
    timeout: Duration,
) -> Result<(), WebAssertError> {
    let passed = !wait::is_displayed_within(element, timeout).await?;
    check(
        passed,
        format!("Element is displayed within {timeout:?} when it shouldn't"),
        element,
    )
    .await
}

/* Size */

pub fn assert_size_equals<T>(number: usize, items: &[T]) -> Result<(), WebAssertError> {
    compare::assert_num_equals("Size", number as f64, items.len() as f64)
}

pub fn assert_size_not_equals<T>(number: usize, items: &[T]) -> Result<(), WebAssertError> {
    compare::assert_num_not_equals("Size", number as f64, items.len() as f64)
}

pub fn assert_size_less_than<T>(number: usize, items: &[T]) -> Result<(), WebAssertError> {
    compare::assert_num_less_than("Size", number as f64, items.len() as f64)
}

pub fn assert_size_less_than_or_equals<T>(
    number: usize,
    items: &[T],
) -> Result<(), WebAssertError> {
    compare::assert_num_less_than_or_equals("Size", number as f64, items.len() as f64)
}

pub fn assert_size_greater_than<T>(number: usize, items: &[T]) -> Result<(), WebAssertError> {
    compare::assert_num_greater_than("Size", number as f64, items.len() as f64)
}

pub fn assert_size_greater_than_or_equals<T>(
    number: usize,
    items: &[T],
) -> Result<(), WebAssertError> {
    compare::assert_num_greater_than_or_equals("Size", number as f64, items.len() as f64)
}

/* Current url */

pub async fn assert_current_url_equals(url: &str) -> Result<(), WebAssertError> {
    let actual = queries::current_url().await?;
    compare::assert_equals("Current url", Some(url), Some(&actual))
}

pub async fn assert_current_url_not_equals(url: &str) -> Result<(), WebAssertError> {
    let actual = queries::current_url().await?;
    compare::assert_not_equals("Current url", Some(url), Some(&actual))
}

pub async fn assert_current_url_contains(search: &str) -> Result<(), WebAssertError> {
    let actual = queries::current_url().await?;
    compare::assert_contains("Current url", Some(search), Some(&actual))
}

pub async fn assert_current_url_not_contains(search: &str) -> Result<(), WebAssertError> {
    let actual = queries::current_url().await?;
    compare::assert_not_contains("Current url", Some(search), Some(&actual))
}

pub async fn assert_current_url_starts_with(prefix: &str) -> Result<(), WebAssertError> {
    let actual = queries::current_url().await?;
    compare::assert_starts_with("Current url", Some(prefix), Some(&actual))
}

pub async fn assert_current_url_not_starts_with(prefix: &str) -> Result<(), WebAssertError> {
    let actual = queries::current_url().await?;
    compare::assert_not_starts_with("Current url", Some(prefix), Some(&actual))
}

pub async fn assert_current_url_ends_with(suffix: &str) -> Result<(), WebAssertError> {
    let actual = queries::current_url().await?;
    compare::assert_ends_with("Current url", Some(suffix), Some(&actual))
}

pub async fn assert_current_url_not_ends_with(suffix: &str) -> Result<(), WebAssertError> {
    let actual = queries::current_url().await?;
    compare::assert_not_ends_with("Current url", Some(suffix), Some(&actual))
}

pub async fn assert_current_url_matches(pattern: &str) -> Result<(), WebAssertError> {
    let actual = queries::current_url().await?;
    compare::assert_matches("Current url", Some(pattern), Some(&actual))
}

pub async fn assert_current_url_not_matches(pattern: &str) -> Result<(), WebAssertError> {
    let actual = queries::current_url().await?;
    compare::assert_not_matches("Current url", Some(pattern), Some(&actual))
}

/* Title */

pub async fn assert_title_equals(title: &str) -> Result<(), WebAssertError> {
    let actual = queries::title().await?;
    compare::assert_equals("Title", Some(title), Some(&actual))
}

pub async fn assert_title_not_equals(title: &str) -> Result<(), WebAssertError> {
    let actual = queries::title().await?;
    compare::assert_not_equals("Title", Some(title), Some(&actual))
}

pub async fn assert_title_contains(search: &str) -> Result<(), WebAssertError> {
    let actual = queries::title().await?;
    compare::assert_contains("Title", Some(search), Some(&actual))
}

pub async fn assert_title_not_contains(search: &str) -> Result<(), WebAssertError> {
    let actual = queries::title().await?;
    compare::assert_not_contains("Title", Some(search), Some(&actual))
}

pub async fn assert_title_starts_with(prefix: &str) -> Result<(), WebAssertError> {
    let actual = queries::title().await?;
    compare::assert_starts_with("Title", Some(prefix), Some(&actual))
}

pub async fn assert_title_not_starts_with(prefix: &str) -> Result<(), WebAssertError> {
    let actual = queries::title().await?;
    compare::assert_not_starts_with("Title", Some(prefix), Some(&actual))
}

pub async fn assert_title_ends_with(suffix: &str) -> Result<(), WebAssertError> {
    let actual = queries::title().await?;
    compare::assert_ends_with("Title", Some(suffix), Some(&actual))
}

pub async fn assert_title_not_ends_with(suffix: &str) -> Result<(), WebAssertError> {
    let actual = queries::title().await?;
    compare::assert_not_ends_with("Title", Some(suffix), Some(&actual))
}

pub async fn assert_title_matches(pattern: &str) -> Result<(), WebAssertError> {
    let actual = queries::title().await?;
    compare::assert_matches("Title", Some(pattern), Some(&actual))
}

pub async fn assert_title_not_matches(pattern: &str) -> Result<(), WebAssertError> {
    let actual = queries::title().await?;
    compare::assert_not_matches("Title", Some(pattern), Some(&actual))
}

/* Tag name */

pub async fn assert_tag_name_equals(value: &str, element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::tag_name_equals(value, element).await?;
    check(
        passed,
        format!("Tag name is not equal to {}", strings::quote(Some(value))),
        element,
    )
    .await
}

pub async fn assert_tag_name_not_equals(
    value: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::tag_name_not_equals(value, element).await?;
    check(
        passed,
        format!(
            "Tag name is equal to {} when it shouldn't",
            strings::quote(Some(value))
        ),
        element,
    )
    .await
}

/* Attribute */

pub async fn assert_has_attribute(name: &str, element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::has_attribute(name, element).await?;
    check(
        passed,
        format!(
            "Element does not have attribute {}",
            strings::quote(Some(name))
        ),
        element,
    )
    .await
}

pub async fn assert_has_not_attribute(
    name: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::has_not_attribute(name, element).await?;
    check(
        passed,
        format!(
            "Element has attribute {} when it shouldn't",
            strings::quote(Some(name))
        ),
        element,
    )
    .await
}

pub async fn assert_attribute_equals(
    name: &str,
    value: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::attribute_equals(name, value, element).await?;
    check(
        passed,
        format!(
            "Element attribute {name} is not equal to {}",
            strings::quote(Some(value))
        ),
        element,
    )
    .await
}

pub async fn assert_attribute_not_equals(
    name: &str,
    value: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::attribute_not_equals(name, value, element).await?;
    check(
        passed,
        format!(
            "Element attribute {name} is equal to {} when it shouldn't",
            strings::quote(Some(value))
        ),
        element,
    )
    .await
}

pub async fn assert_attribute_contains(
    name: &str,
    search: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::attribute_contains(name, search, element).await?;
    check(
        passed,
        format!(
            "Element attribute {name} is not containing {}",
            strings::quote(Some(search))
        ),
        element,
    )
    .await
}

pub async fn assert_attribute_not_contains(
    name: &str,
    search: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::attribute_not_contains(name, search, element).await?;
    check(
        passed,
        format!(
            "Element attribute {name} is containing {} when it shouldn't",
            strings::quote(Some(search))
        ),
        element,
    )
    .await
}

pub async fn assert_attribute_starts_with(
    name: &str,
    prefix: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::attribute_starts_with(name, prefix, element).await?;
    check(
        passed,
        format!(
            "Element attribute {name} is not starting with {}",
            strings::quote(Some(prefix))
        ),
        element,
    )
    .await
}

pub async fn assert_attribute_not_starts_with(
    name: &str,
    prefix: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::attribute_not_starts_with(name, prefix, element).await?;
    check(
        passed,
        format!(
            "Element attribute {name} is starting with {} when it shouldn't",
            strings::quote(Some(prefix))
        ),
        element,
    )
    .await
}

pub async fn assert_attribute_ends_with(
    name: &str,
    suffix: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::attribute_ends_with(name, suffix, element).await?;
    check(
        passed,
        format!(
            "Element attribute {name} is not ending with {}",
            strings::quote(Some(suffix))
        ),
        element,
    )
    .await
}

pub async fn assert_attribute_not_ends_with(
    name: &str,
    suffix: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::attribute_not_ends_with(name, suffix, element).await?;
    check(
        passed,
        format!(
            "Element attribute {name} is ending with {} when it shouldn't",
            strings::quote(Some(suffix))
        ),
        element,
    )
    .await
}

pub async fn assert_attribute_matches(
    name: &str,
    pattern: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::attribute_matches(name, pattern, element).await?;
    check(
        passed,
        format!(
            "Element attribute {name} is not matching {}",
            strings::quote(Some(pattern))
        ),
        element,
    )
    .await
}

pub async fn assert_attribute_not_matches(
    name: &str,
    pattern: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::attribute_not_matches(name, pattern, element).await?;
    check(
        passed,
        format!(
            "Element attribute {name} is matching {} when it shouldn't",
            strings::quote(Some(pattern))
        ),
        element,
    )
    .await
}

pub async fn assert_attribute_is_number(
    name: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::attribute_is_number(name, element).await?;
    check(
        passed,
        format!("Element attribute {name} is not a number"),
        element,
    )
    .await
}

pub async fn assert_attribute_is_not_number(
    name: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::attribute_is_not_number(name, element).await?;
    check(
        passed,
        format!("Element attribute {name} is a number when it shouldn't"),
        element,
    )
    .await
}

pub async fn assert_attribute_number_equals(
    name: &str,
    number: f64,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::attribute_number_equals(name, number, element).await?;
    check(
        passed,
        format!(
            "Element attribute {name} is not equal to {}",
            strings::quote_number(number)
        ),
        element,
    )
    .await
}

pub async fn assert_attribute_number_not_equals(
    name: &str,
    number: f64,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::attribute_number_not_equals(name, number, element).await?;
    check(
        passed,
        format!(
            "Element attribute {name} is equal to {} when it shouldn't",
            strings::quote_number(number)
        ),
        element,
    )
    .await
}

pub async fn assert_attribute_number_less_than(
    name: &str,
    number: f64,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::attribute_number_less_than(name, number, element).await?;
    check(
        passed,
        format!(
            "Element attribute {name} is not less than {}",
            strings::quote_number(number)
        ),
        element,
    )
    .await
}

pub async fn assert_attribute_number_less_than_or_equals(
    name: &str,
    number: f64,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::attribute_number_less_than_or_equals(name, number, element).await?;
    check(
        passed,
        format!(
            "Element attribute {name} is not less than or equal to {}",
            strings::quote_number(number)
        ),
        element,
    )
    .await
}

pub async fn assert_attribute_number_greater_than(
    name: &str,
    number: f64,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::attribute_number_greater_than(name, number, element).await?;
    check(
        passed,
        format!(
            "Element attribute {name} is not greater than {}",
            strings::quote_number(number)
        ),
        element,
    )
    .await
}

pub async fn assert_attribute_number_greater_than_or_equals(
    name: &str,
    number: f64,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::attribute_number_greater_than_or_equals(name, number, element).await?;
    check(
        passed,
        format!(
            "Element attribute {name} is not greater than or equal to {}",
            strings::quote_number(number)
        ),
        element,
    )
    .await
}

/* Id */

pub async fn assert_id_equals(value: &str, element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::id_equals(value, element).await?;
    check(
        passed,
        format!("Id is not equal to {}", strings::quote(Some(value))),
        element,
    )
    .await
}

pub async fn assert_id_not_equals(value: &str, element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::id_not_equals(value, element).await?;
    check(
        passed,
        format!(
            "Id is equal to {} when it shouldn't",
            strings::quote(Some(value))
        ),
        element,
    )
    .await
}

pub async fn assert_id_contains(search: &str, element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::id_contains(search, element).await?;
    check(
        passed,
        format!("Id is not containing {}", strings::quote(Some(search))),
        element,
    )
    .await
}

pub async fn assert_id_not_contains(
    search: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::id_not_contains(search, element).await?;
    check(
        passed,
        format!(
            "Id is containing {} when it shouldn't",
            strings::quote(Some(search))
        ),
        element,
    )
    .await
}

pub async fn assert_id_starts_with(
    prefix: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::id_starts_with(prefix, element).await?;
    check(
        passed,
        format!("Id is not starting with {}", strings::quote(Some(prefix))),
        element,
    )
    .await
}

pub async fn assert_id_not_starts_with(
    prefix: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::id_not_starts_with(prefix, element).await?;
    check(
        passed,
        format!(
            "Id is starting with {} when it shouldn't",
            strings::quote(Some(prefix))
        ),
        element,
    )
    .await
}

pub async fn assert_id_ends_with(suffix: &str, element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::id_ends_with(suffix, element).await?;
    check(
        passed,
        format!("Id is not ending with {}", strings::quote(Some(suffix))),
        element,
    )
    .await
}

pub async fn assert_id_not_ends_with(
    suffix: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::id_not_ends_with(suffix, element).await?;
    check(
        passed,
        format!(
            "Id is ending with {} when it shouldn't",
            strings::quote(Some(suffix))
        ),
        element,
    )
    .await
}

pub async fn assert_id_matches(pattern: &str, element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::id_matches(pattern, element).await?;
    check(
        passed,
        format!("Id is not matching {}", strings::quote(Some(pattern))),
        element,
    )
    .await
}

pub async fn assert_id_not_matches(
    pattern: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::id_not_matches(pattern, element).await?;
    check(
        passed,
        format!(
            "Id is matching {} when it shouldn't",
            strings::quote(Some(pattern))
        ),
        element,
    )
    .await
}

/* Name */

pub async fn assert_name_equals(value: &str, element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::name_equals(value, element).await?;
    check(
        passed,
        format!("Name is not equal to {}", strings::quote(Some(value))),
        element,
    )
    .await
}

pub async fn assert_name_not_equals(
    value: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::name_not_equals(value, element).await?;
    check(
        passed,
        format!(
            "Name is equal to {} when it shouldn't",
            strings::quote(Some(value))
        ),
        element,
    )
    .await
}

pub async fn assert_name_contains(search: &str, element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::name_contains(search, element).await?;
    check(
        passed,
        format!("Name is not containing {}", strings::quote(Some(search))),
        element,
    )
    .await
}

pub async fn assert_name_not_contains(
    search: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::name_not_contains(search, element).await?;
    check(
        passed,
        format!(
            "Name is containing {} when it shouldn't",
            strings::quote(Some(search))
        ),
        element,
    )
    .await
}

pub async fn assert_name_starts_with(
    prefix: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::name_starts_with(prefix, element).await?;
    check(
        passed,
        format!("Name is not starting with {}", strings::quote(Some(prefix))),
        element,
    )
    .await
}

pub async fn assert_name_ends_with(
    suffix: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::name_ends_with(suffix, element).await?;
    check(
        passed,
        format!("Name is not ending with {}", strings::quote(Some(suffix))),
        element,
    )
    .await
}

pub async fn assert_name_matches(
    pattern: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::name_matches(pattern, element).await?;
    check(
        passed,
        format!("Name is not matching {}", strings::quote(Some(pattern))),
        element,
    )
    .await
}

/* Class */

pub async fn assert_has_class(class_name: &str, element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::has_class(class_name, element).await?;
    check(
        passed,
        format!(
            "Element does not have class {}",
            strings::quote(Some(class_name.trim()))
        ),
        element,
    )
    .await
}

pub async fn assert_has_not_class(
    class_name: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::has_not_class(class_name, element).await?;
    check(
        passed,
        format!(
            "Element has class {} when it shouldn't",
            strings::quote(Some(class_name.trim()))
        ),
        element,
    )
    .await
}

pub async fn assert_has_class_containing(
    search: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::has_class_containing(search, element).await?;
    check(
        passed,
        format!(
            "Element does not have class containing {}",
            strings::quote(Some(search))
        ),
        element,
    )
    .await
}

pub async fn assert_has_class_starting_with(
    prefix: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::has_class_starting_with(prefix, element).await?;
    check(
        passed,
        format!(
            "Element does not have class starting with {}",
            strings::quote(Some(prefix))
        ),
        element,
    )
    .await
}

pub async fn assert_has_class_ending_with(
    suffix: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::has_class_ending_with(suffix, element).await?;
    check(
        passed,
        format!(
            "Element does not have class ending with {}",
            strings::quote(Some(suffix))
        ),
        element,
    )
    .await
}

pub async fn assert_has_class_matching(
    pattern: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::has_class_matching(pattern, element).await?;
    check(
        passed,
        format!(
            "Element does not have class matching {}",
            strings::quote(Some(pattern))
        ),
        element,
    )
    .await
}

/* Value */

pub async fn assert_has_value(element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::has_value(element).await?;
    check(passed, "Element does not have a value".to_string(), element).await
}

pub async fn assert_has_not_value(element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::has_not_value(element).await?;
    check(
        passed,
        "Element has a value when it shouldn't".to_string(),
        element,
    )
    .await
}

pub async fn assert_value_equals(value: &str, element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::value_equals(value, element).await?;
    check(
        passed,
        format!("Value is not equal to {}", strings::quote(Some(value))),
        element,
    )
    .await
}

pub async fn assert_value_not_equals(
    value: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::value_not_equals(value, element).await?;
    check(
        passed,
        format!(
            "Value is equal to {} when it shouldn't",
            strings::quote(Some(value))
        ),
        element,
    )
    .await
}

pub async fn assert_value_contains(
    search: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::value_contains(search, element).await?;
    check(
        passed,
        format!("Value is not containing {}", strings::quote(Some(search))),
        element,
    )
    .await
}

pub async fn assert_value_starts_with(
    prefix: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::value_starts_with(prefix, element).await?;
    check(
        passed,
        format!(
            "Value is not starting with {}",
            strings::quote(Some(prefix))
        ),
        element,
    )
    .await
}

pub async fn assert_value_ends_with(
    suffix: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::value_ends_with(suffix, element).await?;
    check(
        passed,
        format!("Value is not ending with {}", strings::quote(Some(suffix))),
        element,
    )
    .await
}

pub async fn assert_value_matches(
    pattern: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::value_matches(pattern, element).await?;
    check(
        passed,
        format!("Value is not matching {}", strings::quote(Some(pattern))),
        element,
    )
    .await
}

pub async fn assert_value_is_number(element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::value_is_number(element).await?;
    check(passed, "Value is not a number".to_string(), element).await
}

pub async fn assert_value_is_not_number(element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::value_is_not_number(element).await?;
    check(
        passed,
        "Value is a number when it shouldn't".to_string(),
        element,
    )
    .await
}

pub async fn assert_value_number_equals(
    number: f64,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::value_number_equals(number, element).await?;
    check(
        passed,
        format!("Value is not equal to {}", strings::quote_number(number)),
        element,
    )
    .await
}

pub async fn assert_value_number_less_than(
    number: f64,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::value_number_less_than(number, element).await?;
    check(
        passed,
        format!("Value is not less than {}", strings::quote_number(number)),
        element,
    )
    .await
}

pub async fn assert_value_number_greater_than(
    number: f64,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::value_number_greater_than(number, element).await?;
    check(
        passed,
        format!(
            "Value is not greater than {}",
            strings::quote_number(number)
        ),
        element,
    )
    .await
}

/* Href */

pub async fn assert_href_equals(value: &str, element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::href_equals(value, element).await?;
    check(
        passed,
        format!("Href is not equal to {}", strings::quote(Some(value))),
        element,
    )
    .await
}

pub async fn assert_href_not_equals(
    value: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::href_not_equals(value, element).await?;
    check(
        passed,
        format!(
            "Href is equal to {} when it shouldn't",
            strings::quote(Some(value))
        ),
        element,
    )
    .await
}

pub async fn assert_href_contains(search: &str, element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::href_contains(search, element).await?;
    check(
        passed,
        format!("Href is not containing {}", strings::quote(Some(search))),
        element,
    )
    .await
}

pub async fn assert_href_starts_with(
    prefix: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::href_starts_with(prefix, element).await?;
    check(
        passed,
        format!("Href is not starting with {}", strings::quote(Some(prefix))),
        element,
    )
    .await
}

pub async fn assert_href_ends_with(
    suffix: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::href_ends_with(suffix, element).await?;
    check(
        passed,
        format!("Href is not ending with {}", strings::quote(Some(suffix))),
        element,
    )
    .await
}

pub async fn assert_href_matches(
    pattern: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::href_matches(pattern, element).await?;
    check(
        passed,
        format!("Href is not matching {}", strings::quote(Some(pattern))),
        element,
    )
    .await
}

/* Text */

pub async fn assert_has_text(element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::has_text(element).await?;
    check(passed, "Element does not have text".to_string(), element).await
}

pub async fn assert_has_not_text(element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::has_not_text(element).await?;
    check(
        passed,
        "Element has text when it shouldn't".to_string(),
        element,
    )
    .await
}

pub async fn assert_text_equals(text: &str, element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::text_equals(text, element).await?;
    check(
        passed,
        format!("Text is not equal to {}", strings::quote(Some(text))),
        element,
    )
    .await
}

pub async fn assert_text_not_equals(text: &str, element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::text_not_equals(text, element).await?;
    check(
        passed,
        format!(
            "Text is equal to {} when it shouldn't",
            strings::quote(Some(text))
        ),
        element,
    )
    .await
}

pub async fn assert_text_equals_ignore_case(
    text: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::text_equals_ignore_case(text, element).await?;
    check(
        passed,
        format!("Text is not equal to {}", strings::quote(Some(text))),
        element,
    )
    .await
}

pub async fn assert_text_not_equals_ignore_case(
    text: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::text_not_equals_ignore_case(text, element).await?;
    check(
        passed,
        format!(
            "Text is equal to {} when it shouldn't",
            strings::quote(Some(text))
        ),
        element,
    )
    .await
}

pub async fn assert_text_contains(search: &str, element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::text_contains(search, element).await?;
    check(
        passed,
        format!("Text is not containing {}", strings::quote(Some(search))),
        element,
    )
    .await
}

pub async fn assert_text_not_contains(
    search: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::text_not_contains(search, element).await?;
    check(
        passed,
        format!(
            "Text is containing {} when it shouldn't",
            strings::quote(Some(search))
        ),
        element,
    )
    .await
}

pub async fn assert_text_contains_ignore_case(
    search: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::text_contains_ignore_case(search, element).await?;
    check(
        passed,
        format!("Text is not containing {}", strings::quote(Some(search))),
        element,
    )
    .await
}

pub async fn assert_text_starts_with(
    prefix: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::text_starts_with(prefix, element).await?;
    check(
        passed,
        format!("Text is not starting with {}", strings::quote(Some(prefix))),
        element,
    )
    .await
}

pub async fn assert_text_ends_with(
    suffix: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::text_ends_with(suffix, element).await?;
    check(
        passed,
        format!("Text is not ending with {}", strings::quote(Some(suffix))),
        element,
    )
    .await
}

pub async fn assert_text_matches(
    pattern: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::text_matches(pattern, element).await?;
    check(
        passed,
        format!("Text is not matching {}", strings::quote(Some(pattern))),
        element,
    )
    .await
}

pub async fn assert_text_not_matches(
    pattern: &str,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::text_not_matches(pattern, element).await?;
    check(
        passed,
        format!(
            "Text is matching {} when it shouldn't",
            strings::quote(Some(pattern))
        ),
        element,
    )
    .await
}

pub async fn assert_text_is_number(element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::text_is_number(element).await?;
    check(passed, "Text is not a number".to_string(), element).await
}

pub async fn assert_text_is_not_number(element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::text_is_not_number(element).await?;
    check(
        passed,
        "Text is a number when it shouldn't".to_string(),
        element,
    )
    .await
}

pub async fn assert_text_number_equals(
    number: f64,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::text_number_equals(number, element).await?;
    check(
        passed,
        format!("Text is not equal to {}", strings::quote_number(number)),
        element,
    )
    .await
}

pub async fn assert_text_number_less_than(
    number: f64,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::text_number_less_than(number, element).await?;
    check(
        passed,
        format!("Text is not less than {}", strings::quote_number(number)),
        element,
    )
    .await
}

pub async fn assert_text_number_greater_than(
    number: f64,
    element: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::text_number_greater_than(number, element).await?;
    check(
        passed,
        format!("Text is not greater than {}", strings::quote_number(number)),
        element,
    )
    .await
}

/* Selected / checked / enabled */

pub async fn assert_is_selected(element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::is_selected(element).await?;
    check(passed, "Element is not selected".to_string(), element).await
}

pub async fn assert_is_deselected(element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::is_deselected(element).await?;
    check(passed, "Element is not deselected".to_string(), element).await
}

pub async fn assert_is_checked(element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::is_checked(element).await?;
    check(passed, "Element is not checked".to_string(), element).await
}

pub async fn assert_is_unchecked(element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::is_unchecked(element).await?;
    check(passed, "Element is not unchecked".to_string(), element).await
}

pub async fn assert_is_enabled(element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::is_enabled(element).await?;
    check(passed, "Element is not enabled".to_string(), element).await
}

pub async fn assert_is_disabled(element: &Element) -> Result<(), WebAssertError> {
    let passed = queries::is_disabled(element).await?;
    check(passed, "Element is not disabled".to_string(), element).await
}

/* Options by visible text */

pub async fn assert_has_option(text: &str, select: &Element) -> Result<(), WebAssertError> {
    if queries::has_not_option(text, select).await? {
        return Err(WebAssertError::NoSuchOption(format!(
            "no option with text {}",
            strings::quote(Some(text.trim()))
        )));
    }
    Ok(())
}

pub async fn assert_has_not_option(text: &str, select: &Element) -> Result<(), WebAssertError> {
    let passed = queries::has_not_option(text, select).await?;
    check(
        passed,
        format!(
            "Element has option {} when it shouldn't",
            strings::quote(Some(text.trim()))
        ),
        select,
    )
    .await
}

pub async fn assert_option_is_enabled(
    text: &str,
    select: &Element,
) -> Result<(), WebAssertError> {
    assert_has_option(text, select).await?;
    let passed = queries::option_is_enabled(text, select).await?;
    check(
        passed,
        format!(
            "Option {} is not enabled",
            strings::quote(Some(text.trim()))
        ),
        select,
    )
    .await
}

pub async fn assert_option_is_disabled(
    text: &str,
    select: &Element,
) -> Result<(), WebAssertError> {
    assert_has_option(text, select).await?;
    let passed = queries::option_is_disabled(text, select).await?;
    check(
        passed,
        format!(
            "Option {} is not disabled",
            strings::quote(Some(text.trim()))
        ),
        select,
    )
    .await
}

pub async fn assert_option_is_selected(
    text: &str,
    select: &Element,
) -> Result<(), WebAssertError> {
    assert_has_option(text, select).await?;
    let passed = queries::option_is_selected(text, select).await?;
    check(
        passed,
        format!(
            "Option {} is not selected",
            strings::quote(Some(text.trim()))
        ),
        select,
    )
    .await
}

pub async fn assert_option_is_deselected(
    text: &str,
    select: &Element,
) -> Result<(), WebAssertError> {
    assert_has_option(text, select).await?;
    let passed = queries::option_is_deselected(text, select).await?;
    check(
        passed,
        format!(
            "Option {} is not deselected",
            strings::quote(Some(text.trim()))
        ),
        select,
    )
    .await
}

pub async fn assert_all_options_are_selected(select: &Element) -> Result<(), WebAssertError> {
    let passed = queries::all_options_are_selected(select).await?;
    check(passed, "All options are not selected".to_string(), select).await
}

pub async fn assert_no_option_is_selected(select: &Element) -> Result<(), WebAssertError> {
    let passed = queries::no_option_is_selected(select).await?;
    check(
        passed,
        "An option is selected when it shouldn't".to_string(),
        select,
    )
    .await
}

/* Options by value */

pub async fn assert_has_option_with_value(
    value: &str,
    select: &Element,
) -> Result<(), WebAssertError> {
    if queries::has_not_option_with_value(value, select).await? {
        return Err(WebAssertError::NoSuchOption(format!(
            "no option with value {}",
            strings::quote(Some(value.trim()))
        )));
    }
    Ok(())
}

pub async fn assert_has_not_option_with_value(
    value: &str,
    select: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::has_not_option_with_value(value, select).await?;
    check(
        passed,
        format!(
            "Element has option with value {} when it shouldn't",
            strings::quote(Some(value.trim()))
        ),
        select,
    )
    .await
}

pub async fn assert_option_with_value_is_enabled(
    value: &str,
    select: &Element,
) -> Result<(), WebAssertError> {
    assert_has_option_with_value(value, select).await?;
    let passed = queries::option_with_value_is_enabled(value, select).await?;
    check(
        passed,
        format!(
            "Option with value {} is not enabled",
            strings::quote(Some(value.trim()))
        ),
        select,
    )
    .await
}

pub async fn assert_option_with_value_is_disabled(
    value: &str,
    select: &Element,
) -> Result<(), WebAssertError> {
    assert_has_option_with_value(value, select).await?;
    let passed = queries::option_with_value_is_disabled(value, select).await?;
    check(
        passed,
        format!(
            "Option with value {} is not disabled",
            strings::quote(Some(value.trim()))
        ),
        select,
    )
    .await
}

pub async fn assert_option_with_value_is_selected(
    value: &str,
    select: &Element,
) -> Result<(), WebAssertError> {
    assert_has_option_with_value(value, select).await?;
    let passed = queries::option_with_value_is_selected(value, select).await?;
    check(
        passed,
        format!(
            "Option with value {} is not selected",
            strings::quote(Some(value.trim()))
        ),
        select,
    )
    .await
}

pub async fn assert_option_with_value_is_deselected(
    value: &str,
    select: &Element,
) -> Result<(), WebAssertError> {
    assert_has_option_with_value(value, select).await?;
    let passed = queries::option_with_value_is_deselected(value, select).await?;
    check(
        passed,
        format!(
            "Option with value {} is not deselected",
            strings::quote(Some(value.trim()))
        ),
        select,
    )
    .await
}

/* Options by index */

pub async fn assert_has_option_with_index(
    index: usize,
    select: &Element,
) -> Result<(), WebAssertError> {
    if queries::has_not_option_with_index(index, select).await? {
        return Err(WebAssertError::NoSuchOption(format!(
            "no option with index \"{index}\""
        )));
    }
    Ok(())
}

pub async fn assert_has_not_option_with_index(
    index: usize,
    select: &Element,
) -> Result<(), WebAssertError> {
    let passed = queries::has_not_option_with_index(index, select).await?;
    check(
        passed,
        format!("Element has option with index \"{index}\" when it shouldn't"),
        select,
    )
    .await
}

pub async fn assert_option_with_index_is_enabled(
    index: usize,
    select: &Element,
) -> Result<(), WebAssertError> {
    assert_has_option_with_index(index, select).await?;
    let passed = queries::option_with_index_is_enabled(index, select).await?;
    check(
        passed,
        format!("Option with index \"{index}\" is not enabled"),
        select,
    )
    .await
}

pub async fn assert_option_with_index_is_disabled(
    index: usize,
    select: &Element,
) -> Result<(), WebAssertError> {
    assert_has_option_with_index(index, select).await?;
    let passed = queries::option_with_index_is_disabled(index, select).await?;
    check(
        passed,
        format!("Option with index \"{index}\" is not disabled"),
        select,
    )
    .await
}

pub async fn assert_option_with_index_is_selected(
    index: usize,
    select: &Element,
) -> Result<(), WebAssertError> {
    assert_has_option_with_index(index, select).await?;
    let passed = queries::option_with_index_is_selected(index, select).await?;
    check(
        passed,
        format!("Option with index \"{index}\" is not selected"),
        select,
    )
    .await
}

pub async fn assert_option_with_index_is_deselected(
    index: usize,
    select: &Element,
) -> Result<(), WebAssertError> {
    assert_has_option_with_index(index, select).await?;
    let passed = queries::option_with_index_is_deselected(index, select).await?;
    check(
        passed,
        format!("Option with index \"{index}\" is not deselected"),
        select,
    )
    .await
}
