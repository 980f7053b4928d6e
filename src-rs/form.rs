use serde_json::Value;

use crate::error::GenerateError;

pub const MAX_INPUT_LEN: usize = 400;

/// Business context submitted by the caller. Every field may be absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CaptionForm {
    pub business: Option<String>,
    pub goal: Option<String>,
    pub tone: Option<String>,
    pub notes: Option<String>,
}

/// A form that passed presence and length checks.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidForm {
    pub business: String,
    pub goal: String,
    pub tone: String,
    pub notes: Option<String>,
}

impl CaptionForm {
    /// Reads the form from a raw request body. An empty, malformed or non-object
    /// body yields the empty form; non-string or empty values count as absent.
    pub fn from_body(body: &[u8]) -> Self {
        let value = match serde_json::from_slice::<Value>(body) {
            Ok(value) => value,
            Err(_) => return Self::default(),
        };
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Self {
        Self {
            business: string_field(value, "business"),
            goal: string_field(value, "goal"),
            tone: string_field(value, "tone"),
            notes: string_field(value, "notes"),
        }
    }

    /// Length of `business goal tone notes` joined with single spaces, in UTF-16
    /// code units (characters outside the BMP, like most emoji, count twice).
    /// Absent fields contribute an empty string.
    pub fn joined_len(&self) -> usize {
        [&self.business, &self.goal, &self.tone, &self.notes]
            .iter()
            .map(|field| field.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join(" ")
            .encode_utf16()
            .count()
    }

    pub fn validate(self) -> Result<ValidForm, GenerateError> {
        let total = self.joined_len();
        let (business, goal, tone) = match (self.business, self.goal, self.tone) {
            (Some(business), Some(goal), Some(tone)) => (business, goal, tone),
            _ => return Err(GenerateError::MissingFields),
        };
        if total > MAX_INPUT_LEN {
            return Err(GenerateError::InputTooLong(total));
        }
        Ok(ValidForm {
            business,
            goal,
            tone,
            notes: self.notes,
        })
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
