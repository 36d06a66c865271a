//! Data Loader
//!
//! Fetches `data.json`, validates its top-level shape and flattens the
//! categories into one parent-tagged list.

use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::config::ALL_CATEGORIES_VALUE;
use crate::models::{Category, FlatItem};

/// Field name under which an object payload wraps the category array
const WRAPPED_FIELD: &str = "data";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("invalid JSON: {0}")]
    Parse(String),
    #[error("Fetched data is not in the expected array format.")]
    Shape,
    #[error("no browser window available")]
    NoWindow,
}

impl LoadError {
    /// Text shown in place of the cards
    pub fn user_message(&self) -> String {
        format!("加载数据失败：{}", self)
    }
}

/// Parse the payload text, accepting a bare array or `{ "data": [...] }`
pub fn parse_catalog(text: &str) -> Result<Vec<Category>, LoadError> {
    let value: Value = serde_json::from_str(text).map_err(|e| LoadError::Parse(e.to_string()))?;

    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => match map.remove(WRAPPED_FIELD) {
            Some(inner @ Value::Array(_)) => inner,
            _ => return Err(LoadError::Shape),
        },
        _ => return Err(LoadError::Shape),
    };

    serde_json::from_value(list).map_err(|e| LoadError::Parse(e.to_string()))
}

/// Flatten categories in source order, tagging each entry with its parent
pub fn flatten(categories: &[Category]) -> Vec<FlatItem> {
    categories
        .iter()
        .flat_map(|category| {
            category
                .list
                .iter()
                .map(move |sub| FlatItem::from_sub(sub, &category.name))
        })
        .collect()
}

/// Options for the category selector as (value, label), "all" first
pub fn category_options(categories: &[Category]) -> Vec<(String, String)> {
    std::iter::once((ALL_CATEGORIES_VALUE.to_string(), "所有分区".to_string()))
        .chain(categories.iter().map(|c| (c.name.clone(), c.name.clone())))
        .collect()
}

/// Fetch and parse the dataset. Issued once; never retried.
pub async fn fetch_catalog(url: &str) -> Result<Vec<Category>, LoadError> {
    let window = web_sys::window().ok_or(LoadError::NoWindow)?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| LoadError::Network(js_error_text(&e)))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|e| LoadError::Network(js_error_text(&e)))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let body = response.text().map_err(|e| LoadError::Network(js_error_text(&e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| LoadError::Network(js_error_text(&e)))?;
    let text = body
        .as_string()
        .ok_or_else(|| LoadError::Parse("response body is not text".to_string()))?;

    web_sys::console::log_1(&format!("[Loader] Fetched {} bytes from {}", text.len(), url).into());
    parse_catalog(&text)
}

/// Best-effort message out of a thrown JS value
pub fn js_error_text(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
