//! Renders a live element into an HTML-like string for failure messages.
//!
//! Attribute order is whatever the remote session reports (DOM order,
//! never alphabetized), so diagnostics stay reproducible across runs of
//! the same page.

use fantoccini::elements::Element;

use crate::errors::WebAssertError;
use crate::session;
use crate::strings;

const ATTRIBUTES_SCRIPT: &str = "\
var out = '';\
for (var i = 0, attrs = arguments[0].attributes; i < attrs.length; i++) {\
    var attr = attrs.item(i);\
    if (i != 0) { out = out + ' '; }\
    out = out + attr.nodeName + '=\"' + attr.nodeValue + '\"';\
}\
return out;";

const INNER_HTML_SCRIPT: &str = "return arguments[0].innerHTML;";

/// Renders `element` as `<tag attr="v" ...>inner</tag>`, self-closing when
/// the inner content is blank. `None` renders the fixed sentinel
/// `"Element is null"`. Rendering is diagnostics-only: a remote failure
/// degrades to a placeholder instead of masking the error being reported.
pub async fn html_of(element: Option<&Element>) -> String {
    let Some(element) = element else {
        return "Element is null".to_string();
    };
    match render(element).await {
        Ok(html) => html,
        Err(err) => format!("<element could not be rendered: {err}>"),
    }
}

pub async fn html_of_all(elements: &[Element]) -> String {
    let mut out = String::new();
    for element in elements {
        out.push_str(&html_of(Some(element)).await);
    }
    out
}

async fn render(element: &Element) -> Result<String, WebAssertError> {
    let tag = element.tag_name().await.map_err(WebAssertError::from)?;
    let attributes = strings::prepend_space_if_not_blank(&attributes_in(element).await?);
    let inner = inner_html_of(element).await?;
    if inner.trim().is_empty() {
        Ok(format!("<{tag}{attributes} />"))
    } else {
        Ok(format!(
            "<{tag}{attributes}>{}</{tag}>",
            strings::surround_with_newlines_if_multiline(&inner)
        ))
    }
}

/// Space-separated `name="value"` pairs in the order the session reports
/// them.
pub async fn attributes_in(element: &Element) -> Result<String, WebAssertError> {
    execute_on(ATTRIBUTES_SCRIPT, element).await
}

pub async fn inner_html_of(element: &Element) -> Result<String, WebAssertError> {
    execute_on(INNER_HTML_SCRIPT, element).await
}

async fn execute_on(script: &str, element: &Element) -> Result<String, WebAssertError> {
    let session = session::get_session()?;
    let value = session
        .execute(script, vec![serde_json::to_value(element)?])
        .await?;
    Ok(value.as_str().unwrap_or_default().to_string())
}

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;
