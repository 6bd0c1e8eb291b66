use gloo_timers::callback::Timeout;
use log::{debug, error, info};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Reflect;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::contact::form::{ContactSubmission, Field, FieldErrors};

const RENDER_ATTEMPTS: u32 = 40;
const RETRY_DELAY_MS: u32 = 250;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = grecaptcha, js_name = render, catch)]
    fn render_widget(container: &Element, options: &JsValue) -> Result<JsValue, JsValue>;
}

/// What the challenge widget reported through one of its callbacks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaptchaEvent {
    Verified(String),
    Cleared,
}

impl CaptchaEvent {
    pub fn from_callback(token: Option<String>) -> Self {
        match token {
            Some(token) if !token.is_empty() => CaptchaEvent::Verified(token),
            _ => CaptchaEvent::Cleared,
        }
    }

    /// Copies the widget's verdict into the form. A fresh token also drops a
    /// pending token error; clearing leaves errors for the next validation run.
    pub fn apply(self, submission: &mut ContactSubmission, errors: &mut FieldErrors) {
        match self {
            CaptchaEvent::Verified(token) => {
                submission.set(Field::Token, token);
                errors.clear(Field::Token);
            }
            CaptchaEvent::Cleared => submission.set(Field::Token, String::new()),
        }
    }
}

#[derive(Error, Debug)]
pub enum CaptchaError {
    #[error("reCAPTCHA script not loaded after {0} attempts")]
    NotLoaded(u32),
    #[error("failed to build reCAPTCHA options: {0}")]
    Options(String),
    #[error("reCAPTCHA render failed: {0}")]
    Render(String),
}

#[derive(Serialize)]
struct WidgetOptions<'a> {
    sitekey: &'a str,
    theme: &'a str,
    size: &'a str,
}

fn grecaptcha_ready() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    Reflect::get(&window, &JsValue::from_str("grecaptcha"))
        .ok()
        .filter(|grecaptcha| grecaptcha.is_object())
        .and_then(|grecaptcha| Reflect::get(&grecaptcha, &JsValue::from_str("render")).ok())
        .map_or(false, |render| render.is_function())
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn set_callback(options: &JsValue, key: &str, callback: JsValue) -> Result<(), CaptchaError> {
    Reflect::set(options, &JsValue::from_str(key), &callback)
        .map(|_| ())
        .map_err(|e| CaptchaError::Options(js_error(e)))
}

fn render_into(container: &Element, on_change: Callback<CaptchaEvent>) -> Result<(), CaptchaError> {
    let options = serde_wasm_bindgen::to_value(&WidgetOptions {
        sitekey: config::RECAPTCHA_SITE_KEY,
        theme: "light",
        size: "normal",
    })
    .map_err(|e| CaptchaError::Options(e.to_string()))?;

    let on_token = on_change.clone();
    let verified = Closure::<dyn Fn(JsValue)>::new(move |token: JsValue| {
        on_token.emit(CaptchaEvent::from_callback(token.as_string()));
    });
    let on_expired = on_change.clone();
    let expired = Closure::<dyn Fn()>::new(move || {
        debug!("reCAPTCHA token expired");
        on_expired.emit(CaptchaEvent::Cleared);
    });
    let errored = Closure::<dyn Fn()>::new(move || {
        error!("reCAPTCHA reported a network error");
        on_change.emit(CaptchaEvent::Cleared);
    });

    // The widget outlives any single render, so ownership moves to the JS side.
    set_callback(&options, "callback", verified.into_js_value())?;
    set_callback(&options, "expired-callback", expired.into_js_value())?;
    set_callback(&options, "error-callback", errored.into_js_value())?;

    render_widget(container, &options)
        .map(|_| ())
        .map_err(|e| CaptchaError::Render(js_error(e)))
}

fn mount_widget(container: NodeRef, on_change: Callback<CaptchaEvent>, attempts_left: u32) {
    if !grecaptcha_ready() {
        if attempts_left == 0 {
            error!("{}", CaptchaError::NotLoaded(RENDER_ATTEMPTS));
            return;
        }
        let timeout = Timeout::new(RETRY_DELAY_MS, move || {
            mount_widget(container, on_change, attempts_left - 1);
        });
        timeout.forget();
        return;
    }

    let Some(element) = container.cast::<Element>() else {
        debug!("reCAPTCHA container gone before render");
        return;
    };
    match render_into(&element, on_change) {
        Ok(()) => info!("reCAPTCHA widget rendered"),
        Err(e) => error!("{}", e),
    }
}

#[derive(Properties, PartialEq)]
pub struct ReCaptchaProps {
    pub on_change: Callback<CaptchaEvent>,
}

#[function_component(ReCaptcha)]
pub fn recaptcha(props: &ReCaptchaProps) -> Html {
    let container = use_node_ref();

    {
        let container = container.clone();
        let on_change = props.on_change.clone();
        use_effect_with_deps(
            move |_| {
                mount_widget(container, on_change, RENDER_ATTEMPTS);
                || ()
            },
            (),
        );
    }

    html! {
        <div class="recaptcha" ref={container}></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::TOKEN_REQUIRED;

    #[test]
    fn empty_or_missing_token_clears() {
        assert_eq!(CaptchaEvent::from_callback(None), CaptchaEvent::Cleared);
        assert_eq!(CaptchaEvent::from_callback(Some(String::new())), CaptchaEvent::Cleared);
        assert_eq!(
            CaptchaEvent::from_callback(Some("abc123".to_string())),
            CaptchaEvent::Verified("abc123".to_string())
        );
    }

    #[test]
    fn verified_token_clears_token_error_only() {
        let mut submission = ContactSubmission::default();
        let mut errors = FieldErrors::default();
        errors.insert(Field::Token, TOKEN_REQUIRED);
        errors.insert(Field::Name, "Name is required");

        CaptchaEvent::Verified("abc123".to_string()).apply(&mut submission, &mut errors);

        assert_eq!(submission.token, "abc123");
        assert_eq!(errors.get(Field::Token), None);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
    }

    #[test]
    fn clearing_after_token_empties_field_without_new_error() {
        let mut submission = ContactSubmission::default();
        let mut errors = FieldErrors::default();
        errors.insert(Field::Token, TOKEN_REQUIRED);

        CaptchaEvent::Verified("abc123".to_string()).apply(&mut submission, &mut errors);
        CaptchaEvent::from_callback(None).apply(&mut submission, &mut errors);

        assert_eq!(submission.token, "");
        assert!(errors.is_empty());
    }

    #[test]
    fn clearing_keeps_an_existing_token_error() {
        let mut submission = ContactSubmission::default();
        let mut errors = FieldErrors::default();
        errors.insert(Field::Token, TOKEN_REQUIRED);

        CaptchaEvent::Cleared.apply(&mut submission, &mut errors);

        assert_eq!(errors.get(Field::Token), Some(TOKEN_REQUIRED));
    }
}
