//! Core data types for the AI call dashboard

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::fmt;
use validator::{Validate, ValidationError};

/// Message shown when the phone number input is empty
pub const PHONE_NUMBER_REQUIRED: &str = "Please enter a phone number";

/// Badge color used for statuses the dashboard does not know about
pub const DEFAULT_STATUS_COLOR: &str = "#95a5a6";

/// Opaque, stable call identifier assigned by the backend.
///
/// Backends send ids either as JSON numbers or strings; both are accepted and
/// kept in their textual form so that `1` and `"1"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CallId(String);

impl CallId {
    /// Create a call id from its textual form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Textual form of the id
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CallId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CallId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i32> for CallId {
    fn from(id: i32) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for CallId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for CallId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
            Float(f64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
            RawId::Float(n) => Self(n.to_string()),
        })
    }
}

/// Lifecycle status of an outbound call as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CallStatus {
    /// Call request accepted, dialing not started
    Initiated,
    /// Remote phone is ringing
    Ringing,
    /// Call is connected
    InProgress,
    /// Call finished normally
    Completed,
    /// Call could not be placed or dropped with an error
    Failed,
    /// Call was canceled before completion
    Canceled,
    /// Any status this dashboard does not know about, kept verbatim
    Unknown(String),
}

impl CallStatus {
    /// Wire representation of the status
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Initiated => "initiated",
            Self::Ringing => "ringing",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Canceled => "canceled",
            Self::Unknown(raw) => raw,
        }
    }

    /// Badge color for this status; unknown statuses get the neutral default
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Initiated => "#3498db",
            Self::Ringing => "#f39c12",
            Self::InProgress => "#2ecc71",
            Self::Completed => "#27ae60",
            Self::Failed => "#e74c3c",
            Self::Canceled | Self::Unknown(_) => DEFAULT_STATUS_COLOR,
        }
    }
}

impl From<&str> for CallStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "initiated" => Self::Initiated,
            "ringing" => Self::Ringing,
            "in-progress" => Self::InProgress,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            "canceled" => Self::Canceled,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for CallStatus {
    fn from(raw: String) -> Self {
        match Self::from(raw.as_str()) {
            Self::Unknown(_) => Self::Unknown(raw),
            known => known,
        }
    }
}

impl From<CallStatus> for String {
    fn from(status: CallStatus) -> Self {
        match status {
            CallStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl Default for CallStatus {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a raw status string to its badge color. Never fails.
#[must_use]
pub fn status_color(status: &str) -> &'static str {
    CallStatus::from(status).color()
}

/// A call record owned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    /// Backend identifier
    pub id: CallId,

    /// Number that was dialed
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone_number: String,

    /// Current status
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: CallStatus,

    /// Creation timestamp as sent by the backend
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,

    /// Call length in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Conversation transcript
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,

    /// AI summary of the conversation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Structured answers extracted from the conversation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_answers: Option<serde_json::Value>,
}

impl Call {
    /// Create a call with only the required fields populated
    pub fn new(
        id: impl Into<CallId>,
        phone_number: impl Into<String>,
        status: CallStatus,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            phone_number: phone_number.into(),
            status,
            created_at: created_at.into(),
            duration: None,
            transcript: None,
            summary: None,
            extracted_answers: None,
        }
    }

    /// Parsed creation time, if the backend sent a recognizable timestamp
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    /// Creation time for display; unparseable text is shown verbatim
    #[must_use]
    pub fn created_display(&self) -> String {
        self.created_at_utc().map_or_else(
            || self.created_at.clone(),
            |ts| ts.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        )
    }

    /// Duration as shown in the call list, e.g. `42s`
    #[must_use]
    pub fn duration_short(&self) -> Option<String> {
        self.visible_duration().map(|secs| format!("{secs}s"))
    }

    /// Duration as shown in the detail panel, e.g. `42 seconds`
    #[must_use]
    pub fn duration_long(&self) -> Option<String> {
        self.visible_duration().map(|secs| format!("{secs} seconds"))
    }

    /// Transcript text, treating an empty string as absent
    #[must_use]
    pub fn transcript_text(&self) -> Option<&str> {
        non_empty(self.transcript.as_deref())
    }

    /// Summary text, treating an empty string as absent
    #[must_use]
    pub fn summary_text(&self) -> Option<&str> {
        non_empty(self.summary.as_deref())
    }

    /// Extracted answers pretty-printed as JSON
    #[must_use]
    pub fn extracted_answers_pretty(&self) -> Option<String> {
        match &self.extracted_answers {
            None | Some(serde_json::Value::Null) => None,
            Some(value) => serde_json::to_string_pretty(value).ok(),
        }
    }

    /// True when neither a transcript nor a summary is available yet
    #[must_use]
    pub fn awaiting_results(&self) -> bool {
        self.transcript_text().is_none() && self.summary_text().is_none()
    }

    fn visible_duration(&self) -> Option<f64> {
        self.duration.filter(|secs| secs.is_finite() && *secs > 0.0)
    }
}

/// Backends send `null` for fields they have not filled in yet
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

/// Parse a backend timestamp: RFC 3339, or a naive `YYYY-MM-DD HH:MM:SS` taken as UTC
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// The part of a call the list view needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallListEntry {
    /// Backend identifier
    pub id: CallId,
    /// Number that was dialed
    pub phone_number: String,
    /// Current status
    pub status: CallStatus,
    /// Creation time, display form
    pub created: String,
    /// Duration, display form
    pub duration: Option<String>,
}

impl From<&Call> for CallListEntry {
    fn from(call: &Call) -> Self {
        Self {
            id: call.id.clone(),
            phone_number: call.phone_number.clone(),
            status: call.status.clone(),
            created: call.created_display(),
            duration: call.duration_short(),
        }
    }
}

/// Request body for `POST /calls/initiate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct InitiateCallRequest {
    /// Number to dial, sent as entered
    #[validate(custom(function = "validate_not_blank"))]
    pub phone_number: String,
}

impl InitiateCallRequest {
    /// Build a request from free-text input
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed(PHONE_NUMBER_REQUIRED)));
    }
    Ok(())
}

/// Response body of `GET /calls`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCallsResponse {
    /// Calls in server order; a missing or null field means no calls
    #[serde(default)]
    pub calls: Option<Vec<Call>>,
}

impl ListCallsResponse {
    /// Take the calls, treating absence as an empty list
    #[must_use]
    pub fn into_calls(self) -> Vec<Call> {
        self.calls.unwrap_or_default()
    }
}

/// Response body of `GET /calls/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallDetailResponse {
    /// The requested call
    pub call: Call,
}

/// Error body returned by the backend on failures
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human readable message, surfaced verbatim to the user
    #[serde(default)]
    pub error: Option<String>,
}
