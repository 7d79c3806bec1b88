use crate::core::trigger_time::Transition;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// How a camera authenticates its mode-switch requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMethod {
    Digest,
    None, // switching disabled, no request is sent
    Unsupported(String), // refused when the camera is switched
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMethod::Digest => write!(f, "digest"),
            AuthMethod::None => write!(f, "none"),
            AuthMethod::Unsupported(raw) => write!(f, "{}", raw),
        }
    }
}

impl<'de> Deserialize<'de> for AuthMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = scalar_to_string(deserializer)?;
        Ok(match raw.trim().to_lowercase().as_str() {
            "digest" => AuthMethod::Digest,
            "none" => AuthMethod::None,
            other => AuthMethod::Unsupported(other.to_string()),
        })
    }
}

/// Accepts any YAML scalar (`password: 123456`, `camera: 2`) as a string.
pub fn scalar_to_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected a scalar value, found {:?}",
            other
        ))),
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CameraRecord {
    #[serde(rename = "camera", deserialize_with = "scalar_to_string")]
    pub name: String,
    #[serde(deserialize_with = "scalar_to_string")]
    pub ip: String,
    #[serde(deserialize_with = "scalar_to_string")]
    pub login: String,
    #[serde(deserialize_with = "scalar_to_string")]
    pub password: String,
    #[serde(rename = "auth")]
    pub auth_method: AuthMethod,
    pub sunrise_url: String,
    pub sunset_url: String,
    #[serde(default)]
    pub notify: Option<serde_yaml::Value>, // carried along, never interpreted
}

impl CameraRecord {
    pub fn url_for(&self, transition: Transition) -> &str {
        match transition {
            Transition::Sunrise => &self.sunrise_url,
            Transition::Sunset => &self.sunset_url,
        }
    }
}
