//! The response data from Appboy.

use serde_json::{Map, Value};

/// The response data from Appboy. `body` is the decoded JSON object exactly as
/// the API returned it.
///
/// A successful send looks something like:
///
/// ```json
/// {"message": "success", "dispatch_id": "a1b2c3"}
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Response {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The decoded response body. Empty if the body was empty or, for a
    /// failed request, could not be decoded.
    pub body: Map<String, Value>,
}

impl Response {
    /// The `message` field, `"success"` when the request was queued.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    /// Non-fatal errors reported for an otherwise accepted request.
    pub fn errors(&self) -> Option<&Vec<Value>> {
        self.body.get("errors").and_then(Value::as_array)
    }

    /// The `dispatch_id` Appboy assigns to an immediate send.
    pub fn dispatch_id(&self) -> Option<&str> {
        self.body.get("dispatch_id").and_then(Value::as_str)
    }

    /// Identifier of the created schedule, returned from
    /// `messages/schedule/create`.
    pub fn schedule_id(&self) -> Option<&str> {
        self.body.get("schedule_id").and_then(Value::as_str)
    }

    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }
}
