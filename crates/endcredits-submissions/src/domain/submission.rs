//! The submission record and its visitor-supplied input shape.
//!
//! Visitors post free-form JSON and nothing is validated, so decoding is
//! forgiving: text fields accept strings, numbers and booleans (the latter
//! two stringified), and treat anything else as absent. `hide` is only set
//! by the literal `true`. Fields are only read from a JSON object; an array
//! body carries no fields at all.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Document store key holding the array of all submissions.
pub const SUBMISSIONS_KEY: &str = "submissions";

/// What a visitor posts to `/submit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSubmission {
    /// Display name.
    pub name: Option<String>,
    /// Role shown next to the name in the cast list.
    pub role: Option<String>,
    /// Thank-you note.
    pub note: Option<String>,
    /// Song for the soundtrack section.
    pub song: Option<String>,
    /// Whether the name must be redacted when listed.
    pub hide: bool,
}

/// The named fields of a posted object.
#[derive(Deserialize)]
struct PostedFields {
    #[serde(default, deserialize_with = "lenient_text")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    role: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    note: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    song: Option<String>,
    #[serde(default, deserialize_with = "literal_true")]
    hide: bool,
}

impl<'de> Deserialize<'de> for NewSubmission {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            fields @ Value::Object(_) => {
                let PostedFields {
                    name,
                    role,
                    note,
                    song,
                    hide,
                } = serde_json::from_value(fields).map_err(D::Error::custom)?;
                Ok(Self {
                    name,
                    role,
                    note,
                    song,
                    hide,
                })
            }
            // Array elements are never read as fields.
            Value::Array(_) => Ok(Self::default()),
            other => Err(D::Error::custom(format!(
                "expected a JSON object, found {other}"
            ))),
        }
    }
}

/// A stored submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Display name, or the redaction marker once listed with `hide` set.
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    /// Role shown next to the name in the cast list.
    #[serde(default, deserialize_with = "lenient_text")]
    pub role: Option<String>,
    /// Thank-you note.
    #[serde(default, deserialize_with = "lenient_text")]
    pub note: Option<String>,
    /// Song for the soundtrack section.
    #[serde(default, deserialize_with = "lenient_text")]
    pub song: Option<String>,
    /// Set only when the visitor posted the literal `true`.
    #[serde(default, deserialize_with = "literal_true")]
    pub hide: bool,
    /// Server-assigned creation time.
    pub timestamp: DateTime<Utc>,
}

impl Submission {
    /// Stamps visitor input with its creation time.
    #[must_use]
    pub fn stamp(input: NewSubmission, timestamp: DateTime<Utc>) -> Self {
        let NewSubmission {
            name,
            role,
            note,
            song,
            hide,
        } = input;
        Self {
            name,
            role,
            note,
            song,
            hide,
            timestamp,
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

fn literal_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}
