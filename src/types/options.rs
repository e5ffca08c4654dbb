//! Sampling options, keep-alive and response format values shared by all requests.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Backend sampling parameters.
///
/// Well-known knobs are named fields; anything else the backend understands
/// goes into `extra` and is flattened into the same JSON object. Nothing here
/// is validated: values are forwarded exactly as set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_ctx: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_penalty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, OptionValue>,
}

impl ModelOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn num_ctx(mut self, num_ctx: u32) -> Self {
        self.num_ctx = Some(num_ctx);
        self
    }

    pub fn num_predict(mut self, num_predict: i32) -> Self {
        self.num_predict = Some(num_predict);
        self
    }

    pub fn stop(mut self, stop: Vec<String>) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Set an option by its wire name.
    ///
    /// Names with a dedicated field (`temperature`, `seed`, ...) land in that
    /// field so a key is never encoded twice. A value of the wrong type for
    /// a named key clears the field and is kept in `extra` as given.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        let key = key.into();
        let value = value.into();
        if self.assign_named(&key, &value) {
            self.extra.remove(&key);
        } else {
            self.extra.insert(key, value);
        }
        self
    }

    /// Look up an option by its wire name, named fields first.
    pub fn get(&self, key: &str) -> Option<OptionValue> {
        let named = match key {
            "temperature" => self.temperature.map(OptionValue::Float),
            "top_k" => self.top_k.map(|v| OptionValue::Integer(v.into())),
            "top_p" => self.top_p.map(OptionValue::Float),
            "min_p" => self.min_p.map(OptionValue::Float),
            "seed" => self.seed.map(OptionValue::Integer),
            "num_ctx" => self.num_ctx.map(|v| OptionValue::Integer(v.into())),
            "num_predict" => self.num_predict.map(|v| OptionValue::Integer(v.into())),
            "repeat_penalty" => self.repeat_penalty.map(OptionValue::Float),
            "stop" => match self.stop.as_deref() {
                Some([only]) => Some(OptionValue::Text(only.clone())),
                _ => None,
            },
            _ => None,
        };
        named.or_else(|| self.extra.get(key).cloned())
    }

    // Returns true when `value` was stored in a named field.
    fn assign_named(&mut self, key: &str, value: &OptionValue) -> bool {
        match key {
            "temperature" => store(&mut self.temperature, value.as_f64()),
            "top_k" => store(&mut self.top_k, value.as_i64().and_then(|v| v.try_into().ok())),
            "top_p" => store(&mut self.top_p, value.as_f64()),
            "min_p" => store(&mut self.min_p, value.as_f64()),
            "seed" => store(&mut self.seed, value.as_i64()),
            "num_ctx" => store(&mut self.num_ctx, value.as_i64().and_then(|v| v.try_into().ok())),
            "num_predict" => store(
                &mut self.num_predict,
                value.as_i64().and_then(|v| v.try_into().ok()),
            ),
            "repeat_penalty" => store(&mut self.repeat_penalty, value.as_f64()),
            "stop" => store(
                &mut self.stop,
                value.as_str().map(|s| vec![s.to_string()]),
            ),
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.top_k.is_none()
            && self.top_p.is_none()
            && self.min_p.is_none()
            && self.seed.is_none()
            && self.num_ctx.is_none()
            && self.num_predict.is_none()
            && self.repeat_penalty.is_none()
            && self.stop.is_none()
            && self.extra.is_empty()
    }
}

fn store<T>(slot: &mut Option<T>, value: Option<T>) -> bool {
    let stored = value.is_some();
    *slot = value;
    stored
}

/// Scalar value for a client-opaque option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl OptionValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            OptionValue::Float(v) => Some(*v),
            OptionValue::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            OptionValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        OptionValue::Integer(v)
    }
}

impl From<i32> for OptionValue {
    fn from(v: i32) -> Self {
        OptionValue::Integer(v.into())
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Float(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Text(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::Text(v)
    }
}

/// How long the backend keeps the model loaded after a call.
///
/// Serialized as the backend's duration string (`"5m"`, `"90s"`, `"-1"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeepAlive(String);

impl KeepAlive {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn from_duration(duration: Duration) -> Self {
        let secs = duration.as_secs();
        let raw = if secs == 0 {
            "0".to_string()
        } else if secs % 3600 == 0 {
            format!("{}h", secs / 3600)
        } else if secs % 60 == 0 {
            format!("{}m", secs / 60)
        } else {
            format!("{}s", secs)
        };
        Self(raw)
    }

    pub fn minutes(minutes: u64) -> Self {
        Self(format!("{}m", minutes))
    }

    /// Keep the model resident indefinitely.
    pub fn forever() -> Self {
        Self("-1".to_string())
    }

    /// Unload the model as soon as the call completes.
    pub fn unload_immediately() -> Self {
        Self("0".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for KeepAlive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Output format constraint: the literal `"json"` or a JSON schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseFormat {
    Named(String),
    Schema(serde_json::Value),
}

impl ResponseFormat {
    pub fn json() -> Self {
        ResponseFormat::Named("json".to_string())
    }

    pub fn schema(schema: serde_json::Value) -> Self {
        ResponseFormat::Schema(schema)
    }
}
