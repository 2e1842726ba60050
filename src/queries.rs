//! Element and page state queries.
//!
//! Three layers per property: a raw accessor (fails with
//! [`WebAssertError::ElementNotFound`] when the reference is stale or
//! absent remotely), boolean predicates composed from [`crate::compare`]
//! over the accessor result, and numeric variants that parse the textual
//! value into an `f64` (parse failure is [`WebAssertError::NotANumber`]
//! from accessors, `Ok(false)` from the `*_is_number` predicates).
//!
//! Option queries materialize the full option list once per call and scan
//! it linearly; an out-of-range index is `Ok(false)`, never an error.

use fantoccini::Locator;
use fantoccini::elements::Element;

use crate::compare;
use crate::errors::WebAssertError;
use crate::session;

pub(crate) fn parse_number(text: &str) -> Result<f64, WebAssertError> {
    text.parse::<f64>()
        .map_err(|_| WebAssertError::NotANumber(text.to_string()))
}

/* Attribute */

pub async fn attribute_in(name: &str, element: &Element) -> Result<Option<String>, WebAssertError> {
    Ok(element.attr(name).await?)
}

pub async fn has_attribute(name: &str, element: &Element) -> Result<bool, WebAssertError> {
    Ok(attribute_in(name, element).await?.is_some())
}

pub async fn has_not_attribute(name: &str, element: &Element) -> Result<bool, WebAssertError> {
    Ok(!has_attribute(name, element).await?)
}

pub async fn attribute_equals(
    name: &str,
    value: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    let actual = attribute_in(name, element).await?;
    Ok(compare::equals(Some(value), actual.as_deref()))
}

pub async fn attribute_not_equals(
    name: &str,
    value: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    let actual = attribute_in(name, element).await?;
    Ok(compare::not_equals(Some(value), actual.as_deref()))
}

pub async fn attribute_contains(
    name: &str,
    search: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    let actual = attribute_in(name, element).await?;
    Ok(compare::contains(Some(search), actual.as_deref()))
}

pub async fn attribute_not_contains(
    name: &str,
    search: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    let actual = attribute_in(name, element).await?;
    Ok(compare::not_contains(Some(search), actual.as_deref()))
}

pub async fn attribute_starts_with(
    name: &str,
    prefix: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    let actual = attribute_in(name, element).await?;
    Ok(compare::starts_with(Some(prefix), actual.as_deref()))
}

pub async fn attribute_not_starts_with(
    name: &str,
    prefix: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    let actual = attribute_in(name, element).await?;
    Ok(compare::not_starts_with(Some(prefix), actual.as_deref()))
}

pub async fn attribute_ends_with(
    name: &str,
    suffix: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    let actual = attribute_in(name, element).await?;
    Ok(compare::ends_with(Some(suffix), actual.as_deref()))
}

pub async fn attribute_not_ends_with(
    name: &str,
    suffix: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    let actual = attribute_in(name, element).await?;
    Ok(compare::not_ends_with(Some(suffix), actual.as_deref()))
}

pub async fn attribute_matches(
    name: &str,
    pattern: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    let actual = attribute_in(name, element).await?;
    Ok(compare::matches(Some(pattern), actual.as_deref()))
}

pub async fn attribute_not_matches(
    name: &str,
    pattern: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    let actual = attribute_in(name, element).await?;
    Ok(compare::not_matches(Some(pattern), actual.as_deref()))
}

/* Attribute as number */

pub async fn attribute_in_as_number(
    name: &str,
    element: &Element,
) -> Result<f64, WebAssertError> {
    let value = attribute_in(name, element).await?.unwrap_or_default();
    parse_number(&value)
}

pub async fn attribute_is_number(name: &str, element: &Element) -> Result<bool, WebAssertError> {
    match attribute_in_as_number(name, element).await {
        Ok(_) => Ok(true),
        Err(WebAssertError::NotANumber(_)) => Ok(false),
        Err(err) => Err(err),
    }
}

pub async fn attribute_is_not_number(
    name: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(!attribute_is_number(name, element).await?)
}

pub async fn attribute_number_equals(
    name: &str,
    number: f64,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(compare::num_equals(
        number,
        attribute_in_as_number(name, element).await?,
    ))
}

pub async fn attribute_number_not_equals(
    name: &str,
    number: f64,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(compare::num_not_equals(
        number,
        attribute_in_as_number(name, element).await?,
    ))
}

pub async fn attribute_number_less_than(
    name: &str,
    number: f64,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(compare::num_less_than(
        number,
        attribute_in_as_number(name, element).await?,
    ))
}

pub async fn attribute_number_less_than_or_equals(
    name: &str,
    number: f64,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(compare::num_less_than_or_equals(
        number,
        attribute_in_as_number(name, element).await?,
    ))
}

pub async fn attribute_number_greater_than(
    name: &str,
    number: f64,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(compare::num_greater_than(
        number,
        attribute_in_as_number(name, element).await?,
    ))
}

pub async fn attribute_number_greater_than_or_equals(
    name: &str,
    number: f64,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(compare::num_greater_than_or_equals(
        number,
        attribute_in_as_number(name, element).await?,
    ))
}

/* Id */

pub async fn id_in(element: &Element) -> Result<Option<String>, WebAssertError> {
    attribute_in("id", element).await
}

pub async fn has_id(element: &Element) -> Result<bool, WebAssertError> {
    has_attribute("id", element).await
}

pub async fn has_not_id(element: &Element) -> Result<bool, WebAssertError> {
    has_not_attribute("id", element).await
}

pub async fn id_equals(value: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_equals("id", value, element).await
}

pub async fn id_not_equals(value: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_not_equals("id", value, element).await
}

pub async fn id_contains(search: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_contains("id", search, element).await
}

pub async fn id_not_contains(search: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_not_contains("id", search, element).await
}

pub async fn id_starts_with(prefix: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_starts_with("id", prefix, element).await
}

pub async fn id_not_starts_with(prefix: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_not_starts_with("id", prefix, element).await
}

pub async fn id_ends_with(suffix: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_ends_with("id", suffix, element).await
}

pub async fn id_not_ends_with(suffix: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_not_ends_with("id", suffix, element).await
}

pub async fn id_matches(pattern: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_matches("id", pattern, element).await
}

pub async fn id_not_matches(pattern: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_not_matches("id", pattern, element).await
}

/* Name */

pub async fn name_in(element: &Element) -> Result<Option<String>, WebAssertError> {
    attribute_in("name", element).await
}

pub async fn has_name(element: &Element) -> Result<bool, WebAssertError> {
    has_attribute("name", element).await
}

pub async fn has_not_name(element: &Element) -> Result<bool, WebAssertError> {
    has_not_attribute("name", element).await
}

pub async fn name_equals(value: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_equals("name", value, element).await
}

pub async fn name_not_equals(value: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_not_equals("name", value, element).await
}

pub async fn name_contains(search: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_contains("name", search, element).await
}

pub async fn name_not_contains(search: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_not_contains("name", search, element).await
}

pub async fn name_starts_with(prefix: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_starts_with("name", prefix, element).await
}

pub async fn name_not_starts_with(
    prefix: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    attribute_not_starts_with("name", prefix, element).await
}

pub async fn name_ends_with(suffix: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_ends_with("name", suffix, element).await
}

pub async fn name_not_ends_with(suffix: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_not_ends_with("name", suffix, element).await
}

pub async fn name_matches(pattern: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_matches("name", pattern, element).await
}

pub async fn name_not_matches(pattern: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_not_matches("name", pattern, element).await
}

/* Class */

pub async fn class_in(element: &Element) -> Result<Option<String>, WebAssertError> {
    attribute_in("class", element).await
}

/// The whitespace-separated class tokens of the element, in order.
pub async fn classes_in(element: &Element) -> Result<Vec<String>, WebAssertError> {
    Ok(class_in(element)
        .await?
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .collect())
}

pub async fn has_class(class_name: &str, element: &Element) -> Result<bool, WebAssertError> {
    let classes = classes_in(element).await?;
    Ok(classes.iter().any(|class| class == class_name.trim()))
}

pub async fn has_not_class(class_name: &str, element: &Element) -> Result<bool, WebAssertError> {
    Ok(!has_class(class_name, element).await?)
}

pub async fn has_class_containing(
    search: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    let classes = classes_in(element).await?;
    Ok(classes
        .iter()
        .any(|class| compare::contains(Some(search), Some(class))))
}

pub async fn has_not_class_containing(
    search: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(!has_class_containing(search, element).await?)
}

pub async fn has_class_starting_with(
    prefix: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    let classes = classes_in(element).await?;
    Ok(classes
        .iter()
        .any(|class| compare::starts_with(Some(prefix), Some(class))))
}

pub async fn has_not_class_starting_with(
    prefix: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(!has_class_starting_with(prefix, element).await?)
}

pub async fn has_class_ending_with(
    suffix: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    let classes = classes_in(element).await?;
    Ok(classes
        .iter()
        .any(|class| compare::ends_with(Some(suffix), Some(class))))
}

pub async fn has_not_class_ending_with(
    suffix: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(!has_class_ending_with(suffix, element).await?)
}

pub async fn has_class_matching(
    pattern: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    let classes = classes_in(element).await?;
    Ok(classes
        .iter()
        .any(|class| compare::matches(Some(pattern), Some(class))))
}

pub async fn has_not_class_matching(
    pattern: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(!has_class_matching(pattern, element).await?)
}

/* Value */

pub async fn value_in(element: &Element) -> Result<Option<String>, WebAssertError> {
    attribute_in("value", element).await
}

pub async fn has_value(element: &Element) -> Result<bool, WebAssertError> {
    has_attribute("value", element).await
}

pub async fn has_not_value(element: &Element) -> Result<bool, WebAssertError> {
    has_not_attribute("value", element).await
}

pub async fn value_equals(value: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_equals("value", value, element).await
}

pub async fn value_not_equals(value: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_not_equals("value", value, element).await
}

pub async fn value_contains(search: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_contains("value", search, element).await
}

pub async fn value_not_contains(search: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_not_contains("value", search, element).await
}

pub async fn value_starts_with(prefix: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_starts_with("value", prefix, element).await
}

pub async fn value_not_starts_with(
    prefix: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    attribute_not_starts_with("value", prefix, element).await
}

pub async fn value_ends_with(suffix: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_ends_with("value", suffix, element).await
}

pub async fn value_not_ends_with(
    suffix: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    attribute_not_ends_with("value", suffix, element).await
}

pub async fn value_matches(pattern: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_matches("value", pattern, element).await
}

pub async fn value_not_matches(pattern: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_not_matches("value", pattern, element).await
}

pub async fn value_in_as_number(element: &Element) -> Result<f64, WebAssertError> {
    attribute_in_as_number("value", element).await
}

pub async fn value_is_number(element: &Element) -> Result<bool, WebAssertError> {
    attribute_is_number("value", element).await
}

pub async fn value_is_not_number(element: &Element) -> Result<bool, WebAssertError> {
    attribute_is_not_number("value", element).await
}

pub async fn value_number_equals(number: f64, element: &Element) -> Result<bool, WebAssertError> {
    attribute_number_equals("value", number, element).await
}

pub async fn value_number_not_equals(
    number: f64,
    element: &Element,
) -> Result<bool, WebAssertError> {
    attribute_number_not_equals("value", number, element).await
}

pub async fn value_number_less_than(
    number: f64,
    element: &Element,
) -> Result<bool, WebAssertError> {
    attribute_number_less_than("value", number, element).await
}

pub async fn value_number_less_than_or_equals(
    number: f64,
    element: &Element,
) -> Result<bool, WebAssertError> {
    attribute_number_less_than_or_equals("value", number, element).await
}

pub async fn value_number_greater_than(
    number: f64,
    element: &Element,
) -> Result<bool, WebAssertError> {
    attribute_number_greater_than("value", number, element).await
}

pub async fn value_number_greater_than_or_equals(
    number: f64,
    element: &Element,
) -> Result<bool, WebAssertError> {
    attribute_number_greater_than_or_equals("value", number, element).await
}

/* Href */

pub async fn href_in(element: &Element) -> Result<Option<String>, WebAssertError> {
    attribute_in("href", element).await
}

pub async fn has_href(element: &Element) -> Result<bool, WebAssertError> {
    has_attribute("href", element).await
}

pub async fn has_not_href(element: &Element) -> Result<bool, WebAssertError> {
    has_not_attribute("href", element).await
}

pub async fn href_equals(value: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_equals("href", value, element).await
}

pub async fn href_not_equals(value: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_not_equals("href", value, element).await
}

pub async fn href_contains(search: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_contains("href", search, element).await
}

pub async fn href_not_contains(search: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_not_contains("href", search, element).await
}

pub async fn href_starts_with(prefix: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_starts_with("href", prefix, element).await
}

pub async fn href_not_starts_with(
    prefix: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    attribute_not_starts_with("href", prefix, element).await
}

pub async fn href_ends_with(suffix: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_ends_with("href", suffix, element).await
}

pub async fn href_not_ends_with(suffix: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_not_ends_with("href", suffix, element).await
}

pub async fn href_matches(pattern: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_matches("href", pattern, element).await
}

pub async fn href_not_matches(pattern: &str, element: &Element) -> Result<bool, WebAssertError> {
    attribute_not_matches("href", pattern, element).await
}

/* Text */

/// The element's visible text, trimmed. Some drivers pad the text with
/// whitespace the DOM does not contain, so leading and trailing
/// whitespace is normalized away.
pub async fn text_in(element: &Element) -> Result<String, WebAssertError> {
    Ok(element.text().await?.trim().to_string())
}

pub async fn has_text(element: &Element) -> Result<bool, WebAssertError> {
    let text = text_in(element).await?;
    Ok(compare::not_equals(Some(""), Some(&text)))
}

pub async fn has_not_text(element: &Element) -> Result<bool, WebAssertError> {
    Ok(!has_text(element).await?)
}

pub async fn text_equals(text: &str, element: &Element) -> Result<bool, WebAssertError> {
    let actual = text_in(element).await?;
    Ok(compare::equals(Some(text), Some(&actual)))
}

pub async fn text_not_equals(text: &str, element: &Element) -> Result<bool, WebAssertError> {
    Ok(!text_equals(text, element).await?)
}

pub async fn text_equals_ignore_case(
    text: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    let actual = text_in(element).await?;
    Ok(compare::equals_ignore_case(Some(text), Some(&actual)))
}

pub async fn text_not_equals_ignore_case(
    text: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(!text_equals_ignore_case(text, element).await?)
}

pub async fn text_contains(search: &str, element: &Element) -> Result<bool, WebAssertError> {
    let actual = text_in(element).await?;
    Ok(compare::contains(Some(search), Some(&actual)))
}

pub async fn text_not_contains(search: &str, element: &Element) -> Result<bool, WebAssertError> {
    Ok(!text_contains(search, element).await?)
}

pub async fn text_contains_ignore_case(
    search: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    let actual = text_in(element).await?;
    Ok(compare::contains_ignore_case(Some(search), Some(&actual)))
}

pub async fn text_not_contains_ignore_case(
    search: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(!text_contains_ignore_case(search, element).await?)
}

pub async fn text_starts_with(prefix: &str, element: &Element) -> Result<bool, WebAssertError> {
    let actual = text_in(element).await?;
    Ok(compare::starts_with(Some(prefix), Some(&actual)))
}

pub async fn text_not_starts_with(
    prefix: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(!text_starts_with(prefix, element).await?)
}

pub async fn text_starts_with_ignore_case(
    prefix: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    let actual = text_in(element).await?;
    Ok(compare::starts_with_ignore_case(Some(prefix), Some(&actual)))
}

pub async fn text_not_starts_with_ignore_case(
    prefix: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(!text_starts_with_ignore_case(prefix, element).await?)
}

pub async fn text_ends_with(suffix: &str, element: &Element) -> Result<bool, WebAssertError> {
    let actual = text_in(element).await?;
    Ok(compare::ends_with(Some(suffix), Some(&actual)))
}

pub async fn text_not_ends_with(suffix: &str, element: &Element) -> Result<bool, WebAssertError> {
    Ok(!text_ends_with(suffix, element).await?)
}

pub async fn text_ends_with_ignore_case(
    suffix: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    let actual = text_in(element).await?;
    Ok(compare::ends_with_ignore_case(Some(suffix), Some(&actual)))
}

pub async fn text_not_ends_with_ignore_case(
    suffix: &str,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(!text_ends_with_ignore_case(suffix, element).await?)
}

pub async fn text_matches(pattern: &str, element: &Element) -> Result<bool, WebAssertError> {
    let actual = text_in(element).await?;
    Ok(compare::matches(Some(pattern), Some(&actual)))
}

pub async fn text_not_matches(pattern: &str, element: &Element) -> Result<bool, WebAssertError> {
    let actual = text_in(element).await?;
    Ok(compare::not_matches(Some(pattern), Some(&actual)))
}

/* Text as number */

pub async fn text_in_as_number(element: &Element) -> Result<f64, WebAssertError> {
    let text = text_in(element).await?;
    parse_number(&text)
}

pub async fn text_is_number(element: &Element) -> Result<bool, WebAssertError> {
    match text_in_as_number(element).await {
        Ok(_) => Ok(true),
        Err(WebAssertError::NotANumber(_)) => Ok(false),
        Err(err) => Err(err),
    }
}

pub async fn text_is_not_number(element: &Element) -> Result<bool, WebAssertError> {
    Ok(!text_is_number(element).await?)
}

pub async fn text_number_equals(number: f64, element: &Element) -> Result<bool, WebAssertError> {
    Ok(compare::num_equals(number, text_in_as_number(element).await?))
}

pub async fn text_number_not_equals(
    number: f64,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(compare::num_not_equals(
        number,
        text_in_as_number(element).await?,
    ))
}

pub async fn text_number_less_than(
    number: f64,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(compare::num_less_than(
        number,
        text_in_as_number(element).await?,
    ))
}

pub async fn text_number_less_than_or_equals(
    number: f64,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(compare::num_less_than_or_equals(
        number,
        text_in_as_number(element).await?,
    ))
}

pub async fn text_number_greater_than(
    number: f64,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(compare::num_greater_than(
        number,
        text_in_as_number(element).await?,
    ))
}

pub async fn text_number_greater_than_or_equals(
    number: f64,
    element: &Element,
) -> Result<bool, WebAssertError> {
    Ok(compare::num_greater_than_or_equals(
        number,
        text_in_as_number(element).await?,
    ))
}

/* Tag name */

pub async fn tag_name_of(element: &Element) -> Result<String, WebAssertError> {
    Ok(element.tag_name().await?)
}

pub async fn tag_name_equals(value: &str, element: &Element) -> Result<bool, WebAssertError> {
    let actual = tag_name_of(element).await?;
    Ok(compare::equals(Some(value), Some(&actual)))
}

pub async fn tag_name_not_equals(value: &str, element: &Element) -> Result<bool, WebAssertError> {
    Ok(!tag_name_equals(value, element).await?)
}

/* Selected / checked / enabled / displayed */

pub async fn is_selected(element: &Element) -> Result<bool, WebAssertError> {
    Ok(element.is_selected().await?)
}

pub async fn is_deselected(element: &Element) -> Result<bool, WebAssertError> {
    Ok(!is_selected(element).await?)
}

pub async fn is_checked(element: &Element) -> Result<bool, WebAssertError> {
    is_selected(element).await
}

pub async fn is_unchecked(element: &Element) -> Result<bool, WebAssertError> {
    is_deselected(element).await
}

pub async fn is_enabled(element: &Element) -> Result<bool, WebAssertError> {
    Ok(element.is_enabled().await?)
}

pub async fn is_disabled(element: &Element) -> Result<bool, WebAssertError> {
    Ok(!is_enabled(element).await?)
}

/// Whether the element is currently displayed. A missing or stale element
/// counts as not displayed rather than an error.
pub async fn is_displayed(element: &Element) -> Result<bool, WebAssertError> {
    match element.is_displayed().await {
        Ok(displayed) => Ok(displayed),
        Err(err) => {
            let err = WebAssertError::from(err);
            if err.is_element_missing() {
                Ok(false)
            } else {
                Err(err)
            }
        }
    }
}

pub async fn is_not_displayed(element: &Element) -> Result<bool, WebAssertError> {
    Ok(!is_displayed(element).await?)
}

/* Options */

/// All `<option>` elements of a select-like control, in document order.
pub async fn options_in(select: &Element) -> Result<Vec<Element>, WebAssertError> {
    Ok(select.find_all(Locator::Css("option")).await?)
}

pub async fn has_option(text: &str, select: &Element) -> Result<bool, WebAssertError> {
    for option in options_in(select).await? {
        if text_equals(text, &option).await? {
            return Ok(true);
        }
    }
    Ok(false)
}

pub async fn has_not_option(text: &str, select: &Element) -> Result<bool, WebAssertError> {
    Ok(!has_option(text, select).await?)
}

pub async fn option_is_enabled(text: &str, select: &Element) -> Result<bool, WebAssertError> {
    for option in options_in(select).await? {
        if text_equals(text, &option).await? && is_enabled(&option).await? {
            return Ok(true);
        }
    }
    Ok(false)
}

pub async fn option_is_disabled(text: &str, select: &Element) -> Result<bool, WebAssertError> {
    for option in options_in(select).await? {
        if text_equals(text, &option).await? && is_disabled(&option).await? {
            return Ok(true);
        }
    }
    Ok(false)
}

pub async fn option_is_selected(text: &str, select: &Element) -> Result<bool, WebAssertError> {
    for option in options_in(select).await? {
        if text_equals(text, &option).await? && is_selected(&option).await? {
            return Ok(true);
        }
    }
    Ok(false)
}

pub async fn option_is_deselected(text: &str, select: &Element) -> Result<bool, WebAssertError> {
    for option in options_in(select).await? {
        if text_equals(text, &option).await? && is_deselected(&option).await? {
            return Ok(true);
        }
    }
    Ok(false)
}

pub async fn all_options_are_selected(select: &Element) -> Result<bool, WebAssertError> {
    for option in options_in(select).await? {
        if is_deselected(&option).await? {
            return Ok(false);
        }
    }
    Ok(true)
}

pub async fn no_option_is_selected(select: &Element) -> Result<bool, WebAssertError> {
    for option in options_in(select).await? {
        if is_selected(&option).await? {
            return Ok(false);
        }
    }
    Ok(true)
}

pub async fn has_option_with_value(
    value: &str,
    select: &Element,
) -> Result<bool, WebAssertError> {
    for option in options_in(select).await? {
        if value_equals(value, &option).await? {
            return Ok(true);
        }
    }
    Ok(false)
}

pub async fn has_not_option_with_value(
    value: &str,
    select: &Element,
) -> Result<bool, WebAssertError> {
    Ok(!has_option_with_value(value, select).await?)
}

pub async fn option_with_value_is_enabled(
    value: &str,
    select: &Element,
) -> Result<bool, WebAssertError> {
    for option in options_in(select).await? {
        if value_equals(value, &option).await? && is_enabled(&option).await? {
            return Ok(true);
        }
    }
    Ok(false)
}

pub async fn option_with_value_is_disabled(
    value: &str,
    select: &Element,
) -> Result<bool, WebAssertError> {
    for option in options_in(select).await? {
        if value_equals(value, &option).await? && is_disabled(&option).await? {
            return Ok(true);
        }
    }
    Ok(false)
}

pub async fn option_with_value_is_selected(
    value: &str,
    select: &Element,
) -> Result<bool, WebAssertError> {
    for option in options_in(select).await? {
        if value_equals(value, &option).await? && is_selected(&option).await? {
            return Ok(true);
        }
    }
    Ok(false)
}

pub async fn option_with_value_is_deselected(
    value: &str,
    select: &Element,
) -> Result<bool, WebAssertError> {
    for option in options_in(select).await? {
        if value_equals(value, &option).await? && is_deselected(&option).await? {
            return Ok(true);
        }
    }
    Ok(false)
}

pub async fn has_option_with_index(
    index: usize,
    select: &Element,
) -> Result<bool, WebAssertError> {
    Ok(options_in(select).await?.len() > index)
}

pub async fn has_not_option_with_index(
    index: usize,
    select: &Element,
) -> Result<bool, WebAssertError> {
    Ok(!has_option_with_index(index, select).await?)
}

pub async fn option_with_index_is_enabled(
    index: usize,
    select: &Element,
) -> Result<bool, WebAssertError> {
    match options_in(select).await?.get(index) {
        Some(option) => is_enabled(option).await,
        None => Ok(false),
    }
}

pub async fn option_with_index_is_disabled(
    index: usize,
    select: &Element,
) -> Result<bool, WebAssertError> {
    match options_in(select).await?.get(index) {
        Some(option) => is_disabled(option).await,
        None => Ok(false),
    }
}

pub async fn option_with_index_is_selected(
    index: usize,
    select: &Element,
) -> Result<bool, WebAssertError> {
    match options_in(select).await?.get(index) {
        Some(option) => is_selected(option).await,
        None => Ok(false),
    }
}

pub async fn option_with_index_is_deselected(
    index: usize,
    select: &Element,
) -> Result<bool, WebAssertError> {
    match options_in(select).await?.get(index) {
        Some(option) => is_deselected(option).await,
        None => Ok(false),
    }
}

/* Size */

pub fn size_of<T>(items: &[T]) -> usize {
    items.len()
}

pub fn size_equals<T>(number: usize, items: &[T]) -> bool {
    compare::num_equals(number as f64, items.len() as f64)
}

pub fn size_not_equals<T>(number: usize, items: &[T]) -> bool {
    compare::num_not_equals(number as f64, items.len() as f64)
}

pub fn size_less_than<T>(number: usize, items: &[T]) -> bool {
    compare::num_less_than(number as f64, items.len() as f64)
}

pub fn size_less_than_or_equals<T>(number: usize, items: &[T]) -> bool {
    compare::num_less_than_or_equals(number as f64, items.len() as f64)
}

pub fn size_greater_than<T>(number: usize, items: &[T]) -> bool {
    compare::num_greater_than(number as f64, items.len() as f64)
}

pub fn size_greater_than_or_equals<T>(number: usize, items: &[T]) -> bool {
    compare::num_greater_than_or_equals(number as f64, items.len() as f64)
}

/* Current url */

pub async fn current_url() -> Result<String, WebAssertError> {
    session::get_session()?.current_url().await
}

pub async fn current_url_equals(url: &str) -> Result<bool, WebAssertError> {
    let actual = current_url().await?;
    Ok(compare::equals(Some(url), Some(&actual)))
}

pub async fn current_url_not_equals(url: &str) -> Result<bool, WebAssertError> {
    Ok(!current_url_equals(url).await?)
}

pub async fn current_url_contains(search: &str) -> Result<bool, WebAssertError> {
    let actual = current_url().await?;
    Ok(compare::contains(Some(search), Some(&actual)))
}

pub async fn current_url_not_contains(search: &str) -> Result<bool, WebAssertError> {
    Ok(!current_url_contains(search).await?)
}

pub async fn current_url_starts_with(prefix: &str) -> Result<bool, WebAssertError> {
    let actual = current_url().await?;
    Ok(compare::starts_with(Some(prefix), Some(&actual)))
}

pub async fn current_url_not_starts_with(prefix: &str) -> Result<bool, WebAssertError> {
    Ok(!current_url_starts_with(prefix).await?)
}

pub async fn current_url_ends_with(suffix: &str) -> Result<bool, WebAssertError> {
    let actual = current_url().await?;
    Ok(compare::ends_with(Some(suffix), Some(&actual)))
}

pub async fn current_url_not_ends_with(suffix: &str) -> Result<bool, WebAssertError> {
    Ok(!current_url_ends_with(suffix).await?)
}

pub async fn current_url_matches(pattern: &str) -> Result<bool, WebAssertError> {
    let actual = current_url().await?;
    Ok(compare::matches(Some(pattern), Some(&actual)))
}

pub async fn current_url_not_matches(pattern: &str) -> Result<bool, WebAssertError> {
    let actual = current_url().await?;
    Ok(compare::not_matches(Some(pattern), Some(&actual)))
}

/* Title */

pub async fn title() -> Result<String, WebAssertError> {
    session::get_session()?.title().await
}

pub async fn title_equals(value: &str) -> Result<bool, WebAssertError> {
    let actual = title().await?;
    Ok(compare::equals(Some(value), Some(&actual)))
}

pub async fn title_not_equals(value: &str) -> Result<bool, WebAssertError> {
    Ok(!title_equals(value).await?)
}

pub async fn title_contains(search: &str) -> Result<bool, WebAssertError> {
    let actual = title().await?;
    Ok(compare::contains(Some(search), Some(&actual)))
}

pub async fn title_not_contains(search: &str) -> Result<bool, WebAssertError> {
    Ok(!title_contains(search).await?)
}

pub async fn title_starts_with(prefix: &str) -> Result<bool, WebAssertError> {
    let actual = title().await?;
    Ok(compare::starts_with(Some(prefix), Some(&actual)))
}

pub async fn title_not_starts_with(prefix: &str) -> Result<bool, WebAssertError> {
    Ok(!title_starts_with(prefix).await?)
}

pub async fn title_ends_with(suffix: &str) -> Result<bool, WebAssertError> {
    let actual = title().await?;
    Ok(compare::ends_with(Some(suffix), Some(&actual)))
}

pub async fn title_not_ends_with(suffix: &str) -> Result<bool, WebAssertError> {
    Ok(!title_ends_with(suffix).await?)
}

pub async fn title_matches(pattern: &str) -> Result<bool, WebAssertError> {
    let actual = title().await?;
    Ok(compare::matches(Some(pattern), Some(&actual)))
}

pub async fn title_not_matches(pattern: &str) -> Result<bool, WebAssertError> {
    let actual = title().await?;
    Ok(compare::not_matches(Some(pattern), Some(&actual)))
}

#[cfg(test)]
#[path = "queries_test.rs"]
mod queries_test;
