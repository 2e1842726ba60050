//! State-mutating element operations.
//!
//! The toggling operations are idempotent guards: `select` only clicks a
//! deselected element, `check` only clicks an unchecked one, so asking for
//! a state that already holds never double-toggles it.

use fantoccini::elements::Element;
use fantoccini::key::Key;
use tracing::debug;

use crate::errors::WebAssertError;
use crate::queries;
use crate::session;
use crate::strings;

pub async fn click(element: &Element) -> Result<(), WebAssertError> {
    element.click().await?;
    Ok(())
}

pub async fn type_text(text: &str, element: &Element) -> Result<(), WebAssertError> {
    if text.is_empty() {
        return Ok(());
    }
    element.send_keys(text).await?;
    Ok(())
}

pub async fn type_number(number: f64, element: &Element) -> Result<(), WebAssertError> {
    type_text(&strings::fmt_number(number), element).await
}

pub async fn clear(element: &Element) -> Result<(), WebAssertError> {
    element.clear().await?;
    Ok(())
}

pub async fn clear_and_type(text: &str, element: &Element) -> Result<(), WebAssertError> {
    clear(element).await?;
    type_text(text, element).await
}

pub async fn clear_and_type_number(number: f64, element: &Element) -> Result<(), WebAssertError> {
    clear(element).await?;
    type_number(number, element).await
}

pub async fn press_enter(element: &Element) -> Result<(), WebAssertError> {
    element
        .send_keys(&String::from(char::from(Key::Enter)))
        .await?;
    Ok(())
}

/* Select / deselect */

pub async fn select(element: &Element) -> Result<(), WebAssertError> {
    if queries::is_deselected(element).await? {
        click(element).await?;
    }
    Ok(())
}

pub async fn deselect(element: &Element) -> Result<(), WebAssertError> {
    if queries::is_selected(element).await? {
        click(element).await?;
    }
    Ok(())
}

/* Check / uncheck */

pub async fn check(element: &Element) -> Result<(), WebAssertError> {
    if queries::is_unchecked(element).await? {
        click(element).await?;
    }
    Ok(())
}

pub async fn uncheck(element: &Element) -> Result<(), WebAssertError> {
    if queries::is_checked(element).await? {
        click(element).await?;
    }
    Ok(())
}

/* Options */

/// Selects the option with the given visible text. Clicks only when the
/// option is not already selected.
pub async fn select_option(text: &str, select: &Element) -> Result<(), WebAssertError> {
    for option in queries::options_in(select).await? {
        if queries::text_equals(text, &option).await? {
            if queries::is_deselected(&option).await? {
                debug!("selecting option with text {text:?}");
                click(&option).await?;
            }
            return Ok(());
        }
    }
    Err(WebAssertError::NoSuchOption(format!(
        "no option with text {}",
        strings::quote(Some(text.trim()))
    )))
}

pub async fn deselect_option(text: &str, select: &Element) -> Result<(), WebAssertError> {
    for option in queries::options_in(select).await? {
        if queries::text_equals(text, &option).await? {
            if queries::is_selected(&option).await? {
                click(&option).await?;
            }
            return Ok(());
        }
    }
    Err(WebAssertError::NoSuchOption(format!(
        "no option with text {}",
        strings::quote(Some(text.trim()))
    )))
}

pub async fn select_option_with_value(
    value: &str,
    select: &Element,
) -> Result<(), WebAssertError> {
    for option in queries::options_in(select).await? {
        if queries::value_equals(value, &option).await? {
            if queries::is_deselected(&option).await? {
                click(&option).await?;
            }
            return Ok(());
        }
    }
    Err(WebAssertError::NoSuchOption(format!(
        "no option with value {}",
        strings::quote(Some(value.trim()))
    )))
}

pub async fn deselect_option_with_value(
    value: &str,
    select: &Element,
) -> Result<(), WebAssertError> {
    for option in queries::options_in(select).await? {
        if queries::value_equals(value, &option).await? {
            if queries::is_selected(&option).await? {
                click(&option).await?;
            }
            return Ok(());
        }
    }
    Err(WebAssertError::NoSuchOption(format!(
        "no option with value {}",
        strings::quote(Some(value.trim()))
    )))
}

pub async fn select_option_with_index(
    index: usize,
    select: &Element,
) -> Result<(), WebAssertError> {
    let options = queries::options_in(select).await?;
    match options.get(index) {
        Some(option) => {
            if queries::is_deselected(option).await? {
                click(option).await?;
            }
            Ok(())
        }
        None => Err(WebAssertError::NoSuchOption(format!(
            "no option with index \"{index}\""
        ))),
    }
}

pub async fn deselect_option_with_index(
    index: usize,
    select: &Element,
) -> Result<(), WebAssertError> {
    let options = queries::options_in(select).await?;
    match options.get(index) {
        Some(option) => {
            if queries::is_selected(option).await? {
                click(option).await?;
            }
            Ok(())
        }
        None => Err(WebAssertError::NoSuchOption(format!(
            "no option with index \"{index}\""
        ))),
    }
}

/* Scrolling */

pub async fn scroll_to(element: &Element) -> Result<(), WebAssertError> {
    let session = session::get_session()?;
    session
        .execute(
            "arguments[0].scrollIntoView(true);",
            vec![serde_json::to_value(element)?],
        )
        .await?;
    Ok(())
}
