// Scripted in-process WebDriver endpoint for integration tests.
//
// Serves just enough of the W3C wire protocol for fantoccini to create a
// session and drive the element commands this crate uses. Page content is
// a flat map of element ids; selectors of the form `#id` resolve against
// it.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::Json;
use serde_json::{Value, json};

const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

#[derive(Clone)]
pub struct MockElement {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub text: String,
    pub inner_html: String,
    pub selected: bool,
    pub enabled: bool,
    pub displayed: bool,
    /// When set, the element only reports displayed after this instant.
    pub displayed_after: Option<Instant>,
    /// Clicking flips the selected state (checkboxes, options).
    pub toggle_on_click: bool,
    pub stale: bool,
    pub clicks: u32,
    /// Child element ids returned for option lookups.
    pub options: Vec<String>,
}

impl Default for MockElement {
    fn default() -> Self {
        Self {
            tag: "div".to_string(),
            attrs: Vec::new(),
            text: String::new(),
            inner_html: String::new(),
            selected: false,
            enabled: true,
            displayed: true,
            displayed_after: None,
            toggle_on_click: false,
            stale: false,
            clicks: 0,
            options: Vec::new(),
        }
    }
}

impl MockElement {
    fn currently_displayed(&self) -> bool {
        match self.displayed_after {
            Some(at) => Instant::now() >= at,
            None => self.displayed,
        }
    }
}

pub struct MockPage {
    pub url: String,
    pub title: String,
    pub elements: HashMap<String, MockElement>,
}

impl MockPage {
    pub fn new(url: &str, title: &str) -> Self {
        Self {
            url: url.to_string(),
            title: title.to_string(),
            elements: HashMap::new(),
        }
    }

    pub fn insert(&mut self, id: &str, element: MockElement) {
        self.elements.insert(id.to_string(), element);
    }
}

pub struct MockDriver {
    page: Arc<Mutex<MockPage>>,
    addr: SocketAddr,
}

impl MockDriver {
    pub async fn start(page: MockPage) -> Self {
        let page = Arc::new(Mutex::new(page));
        let app = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(&page));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock webdriver");
        let addr = listener.local_addr().expect("mock webdriver addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve mock webdriver");
        });
        Self { page, addr }
    }

    pub async fn client(&self) -> fantoccini::Client {
        fantoccini::ClientBuilder::rustls()
            .connect(&format!("http://{}", self.addr))
            .await
            .expect("connect to mock webdriver")
    }

    pub fn clicks(&self, id: &str) -> u32 {
        self.page.lock().unwrap().elements[id].clicks
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.page.lock().unwrap().elements[id].selected
    }
}

async fn handle(
    State(page): State<Arc<Mutex<MockPage>>>,
    method: Method,
    uri: Uri,
    body: String,
) -> (StatusCode, Json<Value>) {
    let path = uri.path().trim_matches('/').to_string();
    let segments: Vec<&str> = path.split('/').collect();
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    let mut page = page.lock().unwrap();
    route(&mut page, method.as_str(), &segments, &body)
}

fn route(
    page: &mut MockPage,
    method: &str,
    segments: &[&str],
    body: &Value,
) -> (StatusCode, Json<Value>) {
    match (method, segments) {
        ("POST", ["session"]) => ok(json!({"sessionId": "mock-session", "capabilities": {}})),
        ("DELETE", ["session", _]) => ok(Value::Null),
        ("GET", ["session", _, "url"]) => ok(json!(page.url.clone())),
        ("GET", ["session", _, "screenshot"]) => ok(json!("aGVsbG8=")),
        ("POST", ["session", _, "element"]) => {
            let selector = body["value"].as_str().unwrap_or_default();
            match resolve_selector(page, selector) {
                Some(id) => ok(element_ref(&id)),
                None => missing(),
            }
        }
        ("POST", ["session", _, "element", parent, "elements"]) => {
            match page.elements.get(*parent) {
                Some(el) if el.stale => stale(),
                Some(el) => ok(Value::Array(
                    el.options.iter().map(|id| element_ref(id)).collect(),
                )),
                None => missing(),
            }
        }
        ("GET", ["session", _, "element", id, "text"]) => {
            with_element(page, id, |el| json!(el.text.clone()))
        }
        ("GET", ["session", _, "element", id, "name"]) => {
            with_element(page, id, |el| json!(el.tag.clone()))
        }
        ("GET", ["session", _, "element", id, "attribute", name]) => {
            with_element(page, id, |el| {
                el.attrs
                    .iter()
                    .find(|(key, _)| key == name)
                    .map(|(_, value)| json!(value))
                    .unwrap_or(Value::Null)
            })
        }
        ("GET", ["session", _, "element", id, "selected"]) => {
            with_element(page, id, |el| json!(el.selected))
        }
        ("GET", ["session", _, "element", id, "enabled"]) => {
            with_element(page, id, |el| json!(el.enabled))
        }
        ("GET", ["session", _, "element", id, "displayed"]) => {
            with_element(page, id, |el| json!(el.currently_displayed()))
        }
        ("POST", ["session", _, "element", id, "click"]) => {
            match page.elements.get_mut(*id) {
                Some(el) if el.stale => stale(),
                Some(el) => {
                    el.clicks += 1;
                    if el.toggle_on_click {
                        el.selected = !el.selected;
                    }
                    ok(Value::Null)
                }
                None => missing(),
            }
        }
        ("POST", ["session", _, "element", id, "value"]) => {
            let text = body["text"].as_str().unwrap_or_default().to_string();
            match page.elements.get_mut(*id) {
                Some(el) if el.stale => stale(),
                Some(el) => {
                    match el.attrs.iter_mut().find(|(key, _)| *key == "value") {
                        Some((_, value)) => value.push_str(&text),
                        None => el.attrs.push(("value".to_string(), text)),
                    }
                    ok(Value::Null)
                }
                None => missing(),
            }
        }
        ("POST", ["session", _, "element", id, "clear"]) => {
            match page.elements.get_mut(*id) {
                Some(el) if el.stale => stale(),
                Some(el) => {
                    if let Some((_, value)) = el.attrs.iter_mut().find(|(key, _)| *key == "value") {
                        value.clear();
                    }
                    ok(Value::Null)
                }
                None => missing(),
            }
        }
        ("POST", ["session", _, "execute", "sync"]) => execute_script(page, body),
        _ => ok(Value::Null),
    }
}

fn execute_script(page: &MockPage, body: &Value) -> (StatusCode, Json<Value>) {
    let script = body["script"].as_str().unwrap_or_default();
    if script.contains("document.title") {
        return ok(json!(page.title.clone()));
    }
    let id = body["args"][0]
        .as_object()
        .and_then(|arg| arg.get(ELEMENT_KEY))
        .and_then(|value| value.as_str())
        .unwrap_or_default();
    let Some(el) = page.elements.get(id) else {
        return missing();
    };
    if el.stale {
        return stale();
    }
    if script.contains("attributes") {
        let attrs = el
            .attrs
            .iter()
            .map(|(key, value)| format!("{key}=\"{value}\""))
            .collect::<Vec<_>>()
            .join(" ");
        return ok(json!(attrs));
    }
    if script.contains("innerHTML") {
        return ok(json!(el.inner_html.clone()));
    }
    ok(Value::Null)
}

fn resolve_selector(page: &MockPage, selector: &str) -> Option<String> {
    let id = selector.strip_prefix('#')?;
    page.elements.contains_key(id).then(|| id.to_string())
}

fn with_element(
    page: &MockPage,
    id: &str,
    read: impl FnOnce(&MockElement) -> Value,
) -> (StatusCode, Json<Value>) {
    match page.elements.get(id) {
        Some(el) if el.stale => stale(),
        Some(el) => ok(read(el)),
        None => missing(),
    }
}

fn element_ref(id: &str) -> Value {
    json!({ELEMENT_KEY: id})
}

fn ok(value: Value) -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({"value": value})))
}

fn missing() -> (StatusCode, Json<Value>) {
    error_response("no such element", "no such element: selector matched nothing")
}

fn stale() -> (StatusCode, Json<Value>) {
    error_response(
        "stale element reference",
        "stale element reference: element is not attached to the page document",
    )
}

fn error_response(error: &str, message: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "value": {
                "error": error,
                "message": message,
                "stacktrace": "",
            }
        })),
    )
}
