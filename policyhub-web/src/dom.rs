use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Storage, Window};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("localStorage unavailable")]
    NoStorage,
    #[error("{0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

/// Retrieve the global `window` object.
///
/// # Errors
/// Returns [`DomError::NoWindow`] outside a browser context.
pub fn window() -> Result<Window, DomError> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().ok_or(DomError::NoWindow)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(DomError::NoWindow)
    }
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

pub fn console_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from(message));
}

pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from(message));
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if no window is available, the timer cannot be scheduled
/// or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), DomError> {
    let window = window()?;
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve = resolve_slot.ok_or_else(|| DomError::Js("resolve function should be set".into()))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Status and body text of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Perform a fetch request and read the whole response body as text.
///
/// A JSON `body` is sent with `Content-Type: application/json`; `bearer`
/// adds an `Authorization` header.
///
/// # Errors
/// Returns an error if no window is available or the request fails before a
/// response arrives. Non-2xx responses are returned, not treated as errors.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_text(
    method: &str,
    url: &str,
    body: Option<&str>,
    bearer: Option<&str>,
) -> Result<HttpResponse, DomError> {
    let window = window()?;
    let init = RequestInit::new();
    init.set_method(method);
    init.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(body));
    }
    let request = Request::new_with_str_and_init(url, &init)?;
    if body.is_some() {
        request.headers().set("Content-Type", "application/json")?;
    }
    if let Some(token) = bearer {
        request.headers().set("Authorization", &bearer_header(token))?;
    }

    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let response: Response = resp_value.dyn_into()?;
    let text = JsFuture::from(response.text()?).await?;
    Ok(HttpResponse {
        status: response.status(),
        body: text.as_string().unwrap_or_default(),
    })
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, DomError> {
    window()?.local_storage()?.ok_or(DomError::NoStorage)
}
