use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Path of the collaborator endpoint, relative to the configured base URL.
pub const RESPONSE_PATH: &str = "/get-response/";

/// What the collaborator should produce for a message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestMode {
    #[default]
    Text,
    /// The reply is a URL of a generated image.
    Image,
}

impl RequestMode {
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
        }
    }
}

impl std::str::FromStr for RequestMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            other => Err(format!("Unknown mode: '{other}' (expected 'text' or 'image')")),
        }
    }
}

/// Body posted to the collaborator.
///
/// `mode` is only sent when it differs from the default, so a plain text
/// request is exactly `{ "message": ..., "language": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub language: String,
    #[serde(skip_serializing_if = "RequestMode::is_text")]
    pub mode: RequestMode,
}

/// Body returned by the collaborator. Fields other than `response` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: Option<String>,
}

impl ChatReply {
    /// Reads a reply body.
    ///
    /// Any JSON value is accepted; only a string `response` member counts as
    /// content. A `null` body has no members to read and is rejected along
    /// with malformed JSON.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Null => serde_json::from_value(Value::Null),
            value => Ok(Self {
                response: value
                    .get("response")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            }),
        }
    }

    /// The reply content, if the collaborator produced any.
    pub fn into_answer(self) -> Option<String> {
        self.response.filter(|response| !response.is_empty())
    }
}
