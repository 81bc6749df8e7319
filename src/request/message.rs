//! Per-platform message content builders

mod android;
mod apple;

pub use self::android::{AndroidMessage, AndroidMessageBuilder};
pub use self::apple::{AppleMessage, AppleMessageBuilder};

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Key of an Apple message in the `messages` object of a notification.
pub const APPLE_PUSH: &str = "apple_push";

/// Key of an Android message in the `messages` object of a notification.
pub const ANDROID_PUSH: &str = "android_push";

/// Additional key-value pairs delivered to the app with the message.
pub type ExtraAttributes = BTreeMap<String, Value>;

/// The content of one platform entry in a notification.
///
/// Platforms without a dedicated builder can be sent as raw JSON:
///
/// ```rust
/// # use appboy::request::message::Message;
/// # use serde_json::json;
/// let kindle = Message::from(json!({"alert": "Hello Kindle!"}));
/// assert_eq!(json!({"alert": "Hello Kindle!"}), serde_json::to_value(&kindle).unwrap());
/// ```
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Message {
    Apple(AppleMessage),
    Android(AndroidMessage),
    Raw(Value),
}

impl From<AppleMessage> for Message {
    fn from(message: AppleMessage) -> Self {
        Message::Apple(message)
    }
}

impl From<AndroidMessage> for Message {
    fn from(message: AndroidMessage) -> Self {
        Message::Android(message)
    }
}

impl From<Value> for Message {
    fn from(message: Value) -> Self {
        Message::Raw(message)
    }
}

fn collect_extra<I, K, V>(attributes: I) -> impl Iterator<Item = (String, Value)>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    attributes.into_iter().map(|(k, v)| (k.into(), v.into()))
}
