#[cfg(feature = "napi")]
#[macro_use]
extern crate napi_derive;

pub mod entropy;
pub mod error;
pub mod generator;
pub mod parser;
pub mod types;

pub use error::{BatchError, GenerateError, RequestError, SchemeError};
pub use generator::{generate, generate_usernames, resolve_and_generate, BatchReport, BatchRequest};
pub use parser::{check, validate, Scheme};

// ── WASM bindings ──────────────────────────────────────────────────

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use serde::Serialize;
    use wasm_bindgen::prelude::*;

    fn serializer() -> serde_wasm_bindgen::Serializer {
        serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true)
    }

    /// Check a scheme without generating anything.
    #[wasm_bindgen(js_name = "validateScheme")]
    pub fn validate_scheme(scheme: &str) -> bool {
        crate::parser::validate(scheme)
    }

    /// Throw the first grammar violation in a scheme, if any.
    #[wasm_bindgen(js_name = "checkScheme")]
    pub fn check_scheme(scheme: &str) -> Result<(), JsError> {
        crate::parser::check(scheme).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Generate a username from a first and last name.
    #[wasm_bindgen(js_name = "generateUsername")]
    pub fn generate_username(
        first: &str,
        last: &str,
        scheme: &str,
        lowercase: Option<bool>,
    ) -> Result<String, JsError> {
        crate::generator::generate(first, last, scheme, lowercase.unwrap_or(true))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Generate a username from a free-form name such as "John Adam Smith".
    #[wasm_bindgen(js_name = "generateSeededUsername")]
    pub fn generate_seeded_username(seed: &str, scheme: &str, lowercase: Option<bool>) -> Result<String, JsError> {
        crate::generator::resolve_and_generate(seed, scheme, lowercase.unwrap_or(true))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Generate a batch of unique usernames.
    ///
    /// Takes `{ number, scheme, name_seeds?, existing_usernames?, lowercase?, max_attempts? }`
    /// and returns `{ changed, msg, usernames }`.
    #[wasm_bindgen(js_name = "generateUsernames")]
    pub fn generate_usernames(request: JsValue) -> Result<JsValue, JsError> {
        let request: crate::generator::BatchRequest =
            serde_wasm_bindgen::from_value(request).map_err(|e| JsError::new(&e.to_string()))?;
        let report = crate::generator::generate_usernames(&request).map_err(|e| JsError::new(&e.to_string()))?;
        report.serialize(&serializer()).map_err(|e| JsError::new(&e.to_string()))
    }
}

#[cfg(feature = "napi")]
mod napi_bindings {
    use napi::bindgen_prelude::*;

    /// Check a scheme without generating anything.
    #[napi]
    pub fn validate_scheme(scheme: String) -> bool {
        crate::parser::validate(&scheme)
    }

    /// Throw the first grammar violation in a scheme, if any.
    #[napi]
    pub fn check_scheme(scheme: String) -> Result<()> {
        crate::parser::check(&scheme).map_err(|e| Error::from_reason(e.to_string()))
    }

    /// Generate a username from a first and last name.
    /// `lowercase` defaults to true.
    #[napi]
    pub fn generate_username(first: String, last: String, scheme: String, lowercase: Option<bool>) -> Result<String> {
        crate::generator::generate(&first, &last, &scheme, lowercase.unwrap_or(true))
            .map_err(|e| Error::from_reason(e.to_string()))
    }

    /// Generate a username from a free-form name such as "John Adam Smith".
    /// Missing parts are filled with random names.
    #[napi]
    pub fn generate_seeded_username(seed: String, scheme: String, lowercase: Option<bool>) -> Result<String> {
        crate::generator::resolve_and_generate(&seed, &scheme, lowercase.unwrap_or(true))
            .map_err(|e| Error::from_reason(e.to_string()))
    }

    /// Generate a batch of unique usernames.
    /// Returns `{ changed, msg, usernames }`.
    #[napi]
    pub fn generate_usernames(request: serde_json::Value) -> Result<serde_json::Value> {
        let request: crate::generator::BatchRequest =
            serde_json::from_value(request).map_err(|e| Error::from_reason(e.to_string()))?;
        let report = crate::generator::generate_usernames(&request).map_err(|e| Error::from_reason(e.to_string()))?;
        serde_json::to_value(&report).map_err(|e| Error::from_reason(e.to_string()))
    }

    /// Same as `generateUsernames`, taking `JSON.stringify(request)` directly.
    #[napi(js_name = "generateUsernamesFromJSON")]
    pub fn generate_usernames_from_json(json: String) -> Result<serde_json::Value> {
        let request =
            crate::generator::BatchRequest::from_json(&json).map_err(|e| Error::from_reason(e.to_string()))?;
        let report = crate::generator::generate_usernames(&request).map_err(|e| Error::from_reason(e.to_string()))?;
        serde_json::to_value(&report).map_err(|e| Error::from_reason(e.to_string()))
    }
}
