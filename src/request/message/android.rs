use crate::request::message::{collect_extra, ExtraAttributes};
use crate::request::payload::PayloadBuilder;
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use serde_json::Value;

/// The `android_push` content of a notification.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AndroidMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "ExtraAttributes::is_empty")]
    pub extra: ExtraAttributes,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_variation_id: Option<String>,

    /// Notification priority, from `-2` (minimum) to `2` (maximum).
    pub priority: i32,

    /// Messages with the same collapse key replace each other on the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapse_key: Option<String>,

    pub sound: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_text: Option<String>,

    /// Seconds the message is kept for delivery while the device is offline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_live: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_icon_image_url: Option<String>,

    /// ARGB colour as an integer, e.g. `0xFFFFFF`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<u32>,
}

/// A builder to create the Android part of a notification.
///
/// # Example
///
/// ```rust
/// # use appboy::request::message::AndroidMessageBuilder;
/// # use appboy::request::payload::PayloadBuilder;
/// # fn main() {
/// let message = AndroidMessageBuilder::new()
///     .set_alert("Hello World!")
///     .set_title("Message Title")
///     .set_priority(2)
///     .set_time_to_live(60)
///     .set_accent_colour(0xFFFFFF)
///     .build();
///
/// assert_eq!(Some(60), message.time_to_live);
/// assert_eq!("default", message.sound);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AndroidMessageBuilder {
    alert: Option<String>,
    title: Option<String>,
    extra: ExtraAttributes,
    message_variation_id: Option<String>,
    priority: i32,
    collapse_key: Option<String>,
    sound: String,
    uri: Option<String>,
    summary_text: Option<String>,
    time_to_live: Option<i64>,
    notification_id: Option<i32>,
    push_icon_image_url: Option<String>,
    accent_colour: Option<u32>,
}

impl AndroidMessageBuilder {
    /// Creates a new builder with priority `0` and the `default` sound.
    pub fn new() -> AndroidMessageBuilder {
        AndroidMessageBuilder {
            alert: None,
            title: None,
            extra: ExtraAttributes::new(),
            message_variation_id: None,
            priority: 0,
            collapse_key: None,
            sound: String::from("default"),
            uri: None,
            summary_text: None,
            time_to_live: None,
            notification_id: None,
            push_icon_image_url: None,
            accent_colour: None,
        }
    }

    pub fn set_alert<S>(mut self, alert: S) -> Self
    where
        S: Into<String>,
    {
        self.alert = Some(alert.into());
        self
    }

    pub fn set_title<S>(mut self, title: S) -> Self
    where
        S: Into<String>,
    {
        self.title = Some(title.into());
        self
    }

    /// Replace all extra attributes. An empty map leaves `extra` out of the
    /// payload.
    pub fn with_extra_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.extra = collect_extra(attributes).collect();
        self
    }

    pub fn add_extra_attribute<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Merge extra attributes into the existing ones. Later values win.
    pub fn add_extra_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.extra.extend(collect_extra(attributes));
        self
    }

    pub fn set_message_variation<S>(mut self, message_variation_id: S) -> Self
    where
        S: Into<String>,
    {
        self.message_variation_id = Some(message_variation_id.into());
        self
    }

    pub fn set_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn set_collapse_key<S>(mut self, collapse_key: S) -> Self
    where
        S: Into<String>,
    {
        self.collapse_key = Some(collapse_key.into());
        self
    }

    pub fn set_sound<S>(mut self, sound: S) -> Self
    where
        S: Into<String>,
    {
        self.sound = sound.into();
        self
    }

    pub fn set_uri<S>(mut self, uri: S) -> Self
    where
        S: Into<String>,
    {
        self.uri = Some(uri.into());
        self
    }

    /// The line shown under the expanded notification.
    pub fn set_summary_text<S>(mut self, summary_text: S) -> Self
    where
        S: Into<String>,
    {
        self.summary_text = Some(summary_text.into());
        self
    }

    pub fn set_time_to_live(mut self, seconds: i64) -> Self {
        self.time_to_live = Some(seconds);
        self
    }

    /// Sets the time to live to the number of seconds from now until
    /// `date`. A date in the past gives a negative value.
    pub fn expires_at<Tz>(mut self, date: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
    {
        self.time_to_live = Some(date.timestamp() - Utc::now().timestamp());
        self
    }

    pub fn set_notification_id(mut self, notification_id: i32) -> Self {
        self.notification_id = Some(notification_id);
        self
    }

    pub fn set_push_icon_image_url<S>(mut self, url: S) -> Self
    where
        S: Into<String>,
    {
        self.push_icon_image_url = Some(url.into());
        self
    }

    pub fn set_accent_colour(mut self, colour: u32) -> Self {
        self.accent_colour = Some(colour);
        self
    }
}

impl PayloadBuilder for AndroidMessageBuilder {
    type Payload = AndroidMessage;

    fn build(&self) -> AndroidMessage {
        AndroidMessage {
            alert: self.alert.clone(),
            title: self.title.clone(),
            extra: self.extra.clone(),
            message_variation_id: self.message_variation_id.clone(),
            priority: self.priority,
            collapse_key: self.collapse_key.clone(),
            sound: self.sound.clone(),
            custom_uri: self.uri.clone(),
            summary_text: self.summary_text.clone(),
            time_to_live: self.time_to_live,
            notification_id: self.notification_id,
            push_icon_image_url: self.push_icon_image_url.clone(),
            accent_color: self.accent_colour,
        }
    }
}

impl Default for AndroidMessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
