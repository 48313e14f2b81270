use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum FxError {
    #[error("browser global `{0}` is not available")]
    MissingGlobal(&'static str),

    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    #[error("javascript exception: {0}")]
    Js(String),
}

impl From<JsValue> for FxError {
    fn from(value: JsValue) -> Self {
        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
        };
        FxError::Js(message)
    }
}

impl From<FxError> for JsValue {
    fn from(err: FxError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
