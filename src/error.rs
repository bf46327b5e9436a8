use wasm_bindgen::JsValue;

/// Errors raised while configuring or running a wave.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WaveError {
    /// A required option was not supplied.
    #[error("options.{0} has not been defined")]
    MissingOption(&'static str),

    #[error("image failed to load: {0}")]
    ImageLoad(String),

    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("surface is {actual:?}, expected {expected:?}")]
    SizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// A DOM call failed or an element was missing.
    #[error("{0}")]
    Host(String),
}

impl WaveError {
    /// Wrap a thrown JS value, keeping its debug rendering as the message.
    pub fn host(value: JsValue) -> Self {
        match value.as_string() {
            Some(msg) => WaveError::Host(msg),
            None => WaveError::Host(format!("{value:?}")),
        }
    }
}

impl From<WaveError> for JsValue {
    fn from(e: WaveError) -> Self {
        let msg = e.to_string();
        match e {
            WaveError::MissingOption(_) => js_sys::ReferenceError::new(&msg).into(),
            _ => js_sys::Error::new(&msg).into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WaveError>;
