// End-to-end tests for the query/assert/action facade, driven against the
// scripted mock WebDriver endpoint.

mod common;

use anyhow::Result;
use fantoccini::Locator;
use webassert::{Session, WebAssertError, actions, asserts, html, queries, session};

use common::{MockDriver, MockElement, MockPage};

fn demo_page() -> MockPage {
    let mut page = MockPage::new("http://mock.test/page", "Mock Page");
    page.insert(
        "abc",
        MockElement {
            tag: "h1".to_string(),
            attrs: vec![
                ("id".to_string(), "abc".to_string()),
                ("class".to_string(), "title main".to_string()),
            ],
            text: "  Hello  ".to_string(),
            inner_html: "Hello".to_string(),
            ..Default::default()
        },
    );
    page.insert(
        "amount",
        MockElement {
            tag: "input".to_string(),
            attrs: vec![
                ("id".to_string(), "amount".to_string()),
                ("value".to_string(), "42".to_string()),
            ],
            ..Default::default()
        },
    );
    page.insert(
        "bad",
        MockElement {
            tag: "input".to_string(),
            attrs: vec![
                ("id".to_string(), "bad".to_string()),
                ("value".to_string(), "notanumber".to_string()),
            ],
            ..Default::default()
        },
    );
    page.insert(
        "box",
        MockElement {
            tag: "input".to_string(),
            attrs: vec![("type".to_string(), "checkbox".to_string())],
            toggle_on_click: true,
            ..Default::default()
        },
    );
    page.insert(
        "ghost",
        MockElement {
            stale: true,
            ..Default::default()
        },
    );
    page.insert(
        "sel",
        MockElement {
            tag: "select".to_string(),
            attrs: vec![("id".to_string(), "sel".to_string())],
            options: vec!["opt1".to_string(), "opt2".to_string(), "opt3".to_string()],
            ..Default::default()
        },
    );
    page.insert(
        "opt1",
        MockElement {
            tag: "option".to_string(),
            attrs: vec![("value".to_string(), "1".to_string())],
            text: "Option1".to_string(),
            selected: true,
            toggle_on_click: true,
            ..Default::default()
        },
    );
    page.insert(
        "opt2",
        MockElement {
            tag: "option".to_string(),
            attrs: vec![("value".to_string(), "2".to_string())],
            text: "Option2".to_string(),
            toggle_on_click: true,
            ..Default::default()
        },
    );
    page.insert(
        "opt3",
        MockElement {
            tag: "option".to_string(),
            attrs: vec![("value".to_string(), "3".to_string())],
            text: "Option3".to_string(),
            enabled: false,
            toggle_on_click: true,
            ..Default::default()
        },
    );
    page
}

#[tokio::test]
async fn test_text_and_attribute_queries() -> Result<()> {
    let driver = MockDriver::start(demo_page()).await;
    let client = driver.client().await;
    session::scope(async {
        session::set_session(Session::new(client))?;
        let heading = session::get_session()?
            .client()
            .find(Locator::Css("#abc"))
            .await?;

        // driver-padded whitespace is trimmed away
        assert_eq!(queries::text_in(&heading).await?, "Hello");
        assert!(queries::text_equals("Hello", &heading).await?);
        assert!(queries::text_contains("ell", &heading).await?);
        assert!(queries::text_equals_ignore_case("hello", &heading).await?);

        assert!(queries::id_equals("abc", &heading).await?);
        assert!(!queries::id_equals("xyz", &heading).await?);
        assert!(queries::has_attribute("id", &heading).await?);
        assert!(!queries::has_attribute("data-x", &heading).await?);
        assert!(queries::attribute_equals("class", "title main", &heading).await?);
        assert!(queries::attribute_matches("id", "[a-c]+", &heading).await?);

        assert!(queries::has_class("main", &heading).await?);
        assert!(queries::has_class("title", &heading).await?);
        assert!(!queries::has_class("nope", &heading).await?);
        assert!(queries::has_class_starting_with("ti", &heading).await?);

        assert!(queries::tag_name_equals("h1", &heading).await?);
        assert!(queries::is_displayed(&heading).await?);
        Ok::<_, anyhow::Error>(())
    })
    .await
}

#[tokio::test]
async fn test_assertion_failure_names_both_values_and_renders_the_element() -> Result<()> {
    let driver = MockDriver::start(demo_page()).await;
    let client = driver.client().await;
    session::scope(async {
        session::set_session(Session::new(client))?;
        let heading = session::get_session()?
            .client()
            .find(Locator::Css("#abc"))
            .await?;

        asserts::assert_id_equals("abc", &heading).await?;

        let err = asserts::assert_id_equals("xyz", &heading).await.unwrap_err();
        assert!(err.is_test_failure());
        let message = err.to_string();
        assert!(message.contains("Id is not equal to \"xyz\""), "{message}");
        assert!(message.contains("abc"), "{message}");
        assert!(message.contains("Element:"), "{message}");
        Ok::<_, anyhow::Error>(())
    })
    .await
}

#[tokio::test]
async fn test_rendered_element_shape() -> Result<()> {
    let driver = MockDriver::start(demo_page()).await;
    let client = driver.client().await;
    session::scope(async {
        session::set_session(Session::new(client))?;
        let current = session::get_session()?;

        let heading = current.client().find(Locator::Css("#abc")).await?;
        assert_eq!(
            html::html_of(Some(&heading)).await,
            "<h1 id=\"abc\" class=\"title main\">Hello</h1>"
        );

        // blank inner content renders self-closing
        let amount = current.client().find(Locator::Css("#amount")).await?;
        assert_eq!(
            html::html_of(Some(&amount)).await,
            "<input id=\"amount\" value=\"42\" />"
        );
        Ok::<_, anyhow::Error>(())
    })
    .await
}

#[tokio::test]
async fn test_numeric_accessors_and_predicates() -> Result<()> {
    let driver = MockDriver::start(demo_page()).await;
    let client = driver.client().await;
    session::scope(async {
        session::set_session(Session::new(client))?;
        let current = session::get_session()?;
        let amount = current.client().find(Locator::Css("#amount")).await?;
        let bad = current.client().find(Locator::Css("#bad")).await?;

        assert_eq!(queries::value_in_as_number(&amount).await?, 42.0);
        assert!(queries::value_number_equals(42.0, &amount).await?);
        assert!(queries::value_number_less_than(100.0, &amount).await?);
        assert!(queries::value_is_number(&amount).await?);

        let err = queries::attribute_in_as_number("value", &bad).await.unwrap_err();
        match err {
            WebAssertError::NotANumber(text) => assert_eq!(text, "notanumber"),
            other => panic!("expected NotANumber, got {other:?}"),
        }
        // the predicate swallows the parse failure
        assert!(!queries::attribute_is_number("value", &bad).await?);
        assert!(queries::attribute_is_not_number("value", &bad).await?);
        assert!(asserts::assert_attribute_is_number("value", &bad).await.is_err());
        Ok::<_, anyhow::Error>(())
    })
    .await
}

#[tokio::test]
async fn test_option_queries() -> Result<()> {
    let driver = MockDriver::start(demo_page()).await;
    let client = driver.client().await;
    session::scope(async {
        session::set_session(Session::new(client))?;
        let select = session::get_session()?
            .client()
            .find(Locator::Css("#sel"))
            .await?;

        assert!(queries::has_option("Option2", &select).await?);
        assert!(!queries::has_option("Nope", &select).await?);
        assert!(queries::option_is_selected("Option1", &select).await?);
        assert!(queries::option_is_deselected("Option2", &select).await?);
        assert!(queries::option_is_disabled("Option3", &select).await?);
        assert!(queries::option_is_enabled("Option1", &select).await?);

        assert!(queries::has_option_with_value("2", &select).await?);
        assert!(queries::option_with_value_is_selected("1", &select).await?);

        assert!(queries::has_option_with_index(2, &select).await?);
        assert!(!queries::has_option_with_index(5, &select).await?);
        // out of range is a clean false, never an index error
        assert!(!queries::option_with_index_is_selected(5, &select).await?);
        assert!(queries::option_with_index_is_selected(0, &select).await?);

        assert!(!queries::all_options_are_selected(&select).await?);
        assert!(!queries::no_option_is_selected(&select).await?);

        let options = queries::options_in(&select).await?;
        assert!(queries::size_equals(3, &options));
        asserts::assert_size_equals(3, &options)?;

        // assertion-side misses surface as NoSuchOption
        let err = asserts::assert_option_is_selected("Nope", &select)
            .await
            .unwrap_err();
        assert!(matches!(err, WebAssertError::NoSuchOption(_)));
        let err = asserts::assert_has_option_with_index(5, &select)
            .await
            .unwrap_err();
        assert!(matches!(err, WebAssertError::NoSuchOption(_)));

        asserts::assert_option_is_disabled("Option3", &select).await?;
        asserts::assert_option_with_index_is_selected(0, &select).await?;
        Ok::<_, anyhow::Error>(())
    })
    .await
}

#[tokio::test]
async fn test_check_and_select_are_idempotent() -> Result<()> {
    let driver = MockDriver::start(demo_page()).await;
    let client = driver.client().await;
    session::scope(async {
        session::set_session(Session::new(client))?;
        let current = session::get_session()?;

        let checkbox = current.client().find(Locator::Css("#box")).await?;
        actions::check(&checkbox).await?;
        assert!(driver.is_selected("box"));
        assert_eq!(driver.clicks("box"), 1);

        // already checked, no second click
        actions::check(&checkbox).await?;
        assert_eq!(driver.clicks("box"), 1);

        actions::uncheck(&checkbox).await?;
        assert!(!driver.is_selected("box"));
        assert_eq!(driver.clicks("box"), 2);

        let select = current.client().find(Locator::Css("#sel")).await?;
        actions::select_option("Option2", &select).await?;
        assert!(driver.is_selected("opt2"));
        assert_eq!(driver.clicks("opt2"), 1);

        actions::select_option("Option2", &select).await?;
        assert_eq!(driver.clicks("opt2"), 1);

        let err = actions::select_option("Missing", &select).await.unwrap_err();
        assert!(matches!(err, WebAssertError::NoSuchOption(_)));
        Ok::<_, anyhow::Error>(())
    })
    .await
}

#[tokio::test]
async fn test_typing_and_clearing() -> Result<()> {
    let driver = MockDriver::start(demo_page()).await;
    let client = driver.client().await;
    session::scope(async {
        session::set_session(Session::new(client))?;
        let amount = session::get_session()?
            .client()
            .find(Locator::Css("#amount"))
            .await?;

        actions::clear_and_type("abc", &amount).await?;
        assert!(queries::value_equals("abc", &amount).await?);

        actions::clear(&amount).await?;
        actions::type_number(7.0, &amount).await?;
        assert!(queries::value_equals("7", &amount).await?);
        Ok::<_, anyhow::Error>(())
    })
    .await
}

#[tokio::test]
async fn test_stale_elements() -> Result<()> {
    let driver = MockDriver::start(demo_page()).await;
    let client = driver.client().await;
    session::scope(async {
        session::set_session(Session::new(client))?;
        let ghost = session::get_session()?
            .client()
            .find(Locator::Css("#ghost"))
            .await?;

        let err = queries::text_in(&ghost).await.unwrap_err();
        assert!(err.is_element_missing(), "got {err:?}");

        // displayed-queries treat a stale element as not displayed
        assert!(!queries::is_displayed(&ghost).await?);
        Ok::<_, anyhow::Error>(())
    })
    .await
}

#[tokio::test]
async fn test_page_level_queries() -> Result<()> {
    let driver = MockDriver::start(demo_page()).await;
    let client = driver.client().await;
    session::scope(async {
        session::set_session(Session::new(client))?;

        assert_eq!(queries::current_url().await?, "http://mock.test/page");
        assert!(queries::current_url_starts_with("http://mock.test").await?);
        assert!(queries::title_equals("Mock Page").await?);
        asserts::assert_title_contains("Mock").await?;

        let err = asserts::assert_title_equals("Other").await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Title is not equal to \"Other\""), "{message}");
        assert!(message.contains("Mock Page"), "{message}");

        assert_eq!(
            session::get_session()?.screenshot().await?,
            b"hello".to_vec()
        );
        Ok::<_, anyhow::Error>(())
    })
    .await
}
