//! Shared helpers for reading the hand-shaped JSON wire format.
//!
//! Every decode function in this crate takes an `at` location string describing where in the
//! document it is reading (for example `header[1].author`). Failures are reported as
//! [`ArticleError::Malformed`] carrying that location, extended with the serde path of the
//! failing field when serde drives the inner decode.

use crate::{ArticleError, ArticleResult};
use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

pub(crate) type Object = Map<String, Value>;

/// Location used for failures on the outermost JSON value.
pub(crate) const ROOT: &str = "<root>";

/// Key holding the variant token in every block object.
pub(crate) const DISCRIMINATOR: &str = "type";

/// Join a parent location and a child key.
pub(crate) fn child(at: &str, key: &str) -> String {
    if at == ROOT {
        key.to_string()
    } else {
        format!("{at}.{key}")
    }
}

/// Join a parent location and a sequence index.
pub(crate) fn index(at: &str, i: usize) -> String {
    if at == ROOT {
        format!("[{i}]")
    } else {
        format!("{at}[{i}]")
    }
}

/// Human-readable name of a JSON value's type, for error messages.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn as_object<'a>(value: &'a Value, at: &str) -> ArticleResult<&'a Object> {
    value.as_object().ok_or_else(|| {
        ArticleError::malformed(at, format!("expected an object, found {}", type_name(value)))
    })
}

pub(crate) fn as_array<'a>(value: &'a Value, at: &str) -> ArticleResult<&'a Vec<Value>> {
    value.as_array().ok_or_else(|| {
        ArticleError::malformed(at, format!("expected an array, found {}", type_name(value)))
    })
}

/// Fetch a key that must be present.
pub(crate) fn required<'a>(object: &'a Object, key: &str, at: &str) -> ArticleResult<&'a Value> {
    object
        .get(key)
        .ok_or_else(|| ArticleError::malformed(at, format!("missing required key '{key}'")))
}

/// Fetch a key that may be absent. JSON `null` counts as absent.
pub(crate) fn optional<'a>(object: &'a Object, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}

/// Read the `type` discriminator of a block object.
pub(crate) fn discriminator<'a>(object: &'a Object, at: &str) -> ArticleResult<&'a str> {
    let value = object.get(DISCRIMINATOR).ok_or_else(|| {
        ArticleError::malformed(at, format!("missing '{DISCRIMINATOR}' discriminator"))
    })?;
    value.as_str().ok_or_else(|| {
        ArticleError::malformed(
            child(at, DISCRIMINATOR),
            format!("expected a string, found {}", type_name(value)),
        )
    })
}

/// Reject keys that are not part of the expected shape.
pub(crate) fn deny_unknown_keys(object: &Object, allowed: &[&str], at: &str) -> ArticleResult<()> {
    match object.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(ArticleError::malformed(
            at,
            format!("unknown key '{key}', expected one of: {}", allowed.join(", ")),
        )),
        None => Ok(()),
    }
}

/// Fetch the payload of a block whose discriminator selected `key`.
///
/// The block object may hold only the discriminator and that payload key. Returns the payload
/// together with its location.
pub(crate) fn payload<'a>(
    object: &'a Object,
    key: &str,
    at: &str,
) -> ArticleResult<(&'a Value, String)> {
    deny_unknown_keys(object, &[DISCRIMINATOR, key], at)?;
    let value = required(object, key, at)?;
    Ok((value, child(at, key)))
}

pub(crate) fn string(value: &Value, at: &str) -> ArticleResult<String> {
    value.as_str().map(str::to_string).ok_or_else(|| {
        ArticleError::malformed(at, format!("expected a string, found {}", type_name(value)))
    })
}

/// Decode a payload through serde, reporting the failing field path.
///
/// This uses `serde_path_to_error` so that, for example, a wrong type deep inside an author
/// payload is reported at `header[2].author.avatarImage.asset.name` rather than at the block.
pub(crate) fn decode<T: DeserializeOwned>(value: &Value, at: &str) -> ArticleResult<T> {
    serde_path_to_error::deserialize::<_, T>(value).map_err(|err| {
        let path = err.path().to_string();
        let source = err.into_inner();
        let at = if path == "." {
            at.to_string()
        } else if path.starts_with('[') {
            format!("{at}{path}")
        } else {
            child(at, &path)
        };
        ArticleError::malformed(at, source.to_string())
    })
}

/// Encode a payload through serde.
pub(crate) fn encode<T: Serialize + ?Sized>(payload: &T) -> ArticleResult<Value> {
    serde_json::to_value(payload).map_err(|e| ArticleError::Encoding(e.to_string()))
}

/// Parse an ISO-8601 / RFC 3339 timestamp, normalising any offset to UTC.
pub(crate) fn timestamp(value: &Value, at: &str) -> ArticleResult<DateTime<Utc>> {
    let raw = value.as_str().ok_or_else(|| {
        ArticleError::malformed(
            at,
            format!("expected an ISO-8601 string, found {}", type_name(value)),
        )
    })?;
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| ArticleError::malformed(at, format!("invalid ISO-8601 timestamp '{raw}': {e}")))
}

/// Format a timestamp as RFC 3339 with a `Z` suffix.
///
/// RFC 3339 only has four-digit years, so instants outside years 0000 to 9999 cannot be
/// written in a form [`timestamp`] reads back.
pub(crate) fn timestamp_value(instant: &DateTime<Utc>) -> ArticleResult<Value> {
    if !(0..=9999).contains(&instant.year()) {
        return Err(ArticleError::Encoding(format!(
            "timestamp {instant:?} has a year outside 0000-9999"
        )));
    }
    Ok(Value::String(instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
}
