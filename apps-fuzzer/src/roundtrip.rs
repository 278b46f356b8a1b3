// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Round trips of the apps objects through their wire formats.
//!
//! An object survives a round trip if it decodes back to exactly the value it was encoded from.
//! [`roundtrip`] checks this for the JSON and YAML codecs; [`roundtrip_external`] checks it
//! through the `apps/v1` schema of `k8s-openapi`, the way an API server would see the object.

use std::fmt::Display;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use apps_types::Versioned;

/// Wire format used by a codec round trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Json, Format::Yaml];
}

impl Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => write!(f, "JSON"),
            Format::Yaml => write!(f, "YAML"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RoundTripError {
    #[error("JSON codec failed for {kind}: {source}")]
    Json {
        kind: &'static str,
        source: serde_json::Error,
    },
    #[error("YAML codec failed for {kind}: {source}")]
    Yaml {
        kind: &'static str,
        source: serde_yaml_ng::Error,
    },
    #[error("{kind} is not an object once encoded")]
    NotAnObject { kind: &'static str },
    #[error("{kind} changed after a round trip through {via}")]
    Mismatch { kind: &'static str, via: String },
}

fn json_error<T: Versioned>(source: serde_json::Error) -> RoundTripError {
    RoundTripError::Json {
        kind: T::kind(),
        source,
    }
}

fn yaml_error<T: Versioned>(source: serde_yaml_ng::Error) -> RoundTripError {
    RoundTripError::Yaml {
        kind: T::kind(),
        source,
    }
}

/// Encode `object` in `format`
///
/// # Errors
///
/// Fails if the codec rejects one of the object's fields.
pub fn encode<T: Versioned>(object: &T, format: Format) -> Result<String, RoundTripError> {
    match format {
        Format::Json => serde_json::to_string(object).map_err(json_error::<T>),
        Format::Yaml => serde_yaml_ng::to_string(object).map_err(yaml_error::<T>),
    }
}

/// Decode an object of type `T` from `text` in `format`
///
/// # Errors
///
/// Fails if `text` is malformed or does not describe a `T`.
pub fn decode<T: Versioned>(text: &str, format: Format) -> Result<T, RoundTripError> {
    match format {
        Format::Json => serde_json::from_str(text).map_err(json_error::<T>),
        Format::Yaml => serde_yaml_ng::from_str(text).map_err(yaml_error::<T>),
    }
}

fn compare<T: Versioned>(
    original: &T,
    decoded: &T,
    via: impl Display,
) -> Result<(), RoundTripError> {
    if original == decoded {
        return Ok(());
    }
    debug!(
        "{} changed after a round trip through {via}:\n{original:#?}\nbecame\n{decoded:#?}",
        T::kind()
    );
    Err(RoundTripError::Mismatch {
        kind: T::kind(),
        via: via.to_string(),
    })
}

/// Encode `object` in `format`, decode it back and compare
///
/// # Errors
///
/// Fails if either direction fails or if the decoded object differs from `object`.
pub fn roundtrip<T: Versioned>(object: &T, format: Format) -> Result<(), RoundTripError> {
    let text = encode(object, format)?;
    let decoded: T = decode(&text, format)?;
    compare(object, &decoded, format)
}

/// Convert `object` to its `apps/v1` type
///
/// The internal types carry no type metadata, so `apiVersion` and `kind` are added on the way.
///
/// # Errors
///
/// Fails if the object cannot be encoded or if `apps/v1` rejects it.
pub fn to_external<T: Versioned>(object: &T) -> Result<T::External, RoundTripError> {
    let mut value = serde_json::to_value(object).map_err(json_error::<T>)?;
    let Value::Object(fields) = &mut value else {
        return Err(RoundTripError::NotAnObject { kind: T::kind() });
    };
    fields.insert("apiVersion".to_string(), Value::from(T::api_version()));
    fields.insert("kind".to_string(), Value::from(T::kind()));
    serde_json::from_value(value).map_err(json_error::<T>)
}

/// Convert an `apps/v1` object back to its internal type, dropping its type metadata
///
/// # Errors
///
/// Fails if the external object does not describe a `T`.
pub fn from_external<T: Versioned>(external: &T::External) -> Result<T, RoundTripError> {
    let mut value = serde_json::to_value(external).map_err(json_error::<T>)?;
    let Value::Object(fields) = &mut value else {
        return Err(RoundTripError::NotAnObject { kind: T::kind() });
    };
    fields.remove("apiVersion");
    fields.remove("kind");
    serde_json::from_value(value).map_err(json_error::<T>)
}

/// Convert `object` to `apps/v1` and back, and compare
///
/// # Errors
///
/// Fails if either conversion fails or if the converted object differs from `object`.
pub fn roundtrip_external<T: Versioned>(object: &T) -> Result<(), RoundTripError> {
    let external = to_external(object)?;
    let decoded: T = from_external(&external)?;
    compare(object, &decoded, T::api_version())
}
