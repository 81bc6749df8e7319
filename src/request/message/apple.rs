use crate::request::message::{collect_extra, ExtraAttributes};
use crate::request::payload::{to_iso8601, PayloadBuilder};
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// The `apple_push` content of a notification.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AppleMessage {
    /// A number shown on top of the app icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,

    /// The name of the sound file to play when user receives the message.
    pub sound: String,

    #[serde(skip_serializing_if = "ExtraAttributes::is_empty")]
    pub extra: ExtraAttributes,

    /// When a message includes the category key, the system displays the
    /// actions for that category as buttons in the banner or alert interface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// ISO-8601 time after which the message is no longer delivered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_variation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_file_type: Option<String>,
}

/// A builder to create the Apple part of a notification.
///
/// # Example
///
/// ```rust
/// # use appboy::request::message::AppleMessageBuilder;
/// # use appboy::request::payload::PayloadBuilder;
/// # use chrono::{FixedOffset, TimeZone};
/// # fn main() {
/// let johannesburg = FixedOffset::east_opt(2 * 3600).unwrap();
///
/// let message = AppleMessageBuilder::new()
///     .set_badge_count(3)
///     .set_alert("Hello World!")
///     .set_sound("custom_sound")
///     .add_extra_attribute("is_test", true)
///     .set_category("shipping_notification")
///     .expires_at(&johannesburg.with_ymd_and_hms(2017, 5, 29, 10, 0, 0).unwrap())
///     .set_uri("http://superbalist.com")
///     .set_message_variation("group_a")
///     .set_asset("file://image.jpg", "jpg")
///     .build();
///
/// assert_eq!(Some("2017-05-29T10:00:00+02:00"), message.expiry.as_deref());
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AppleMessageBuilder {
    badge: Option<u32>,
    alert: Option<String>,
    sound: String,
    extra: ExtraAttributes,
    category: Option<String>,
    expiry: Option<String>,
    uri: Option<String>,
    message_variation_id: Option<String>,
    asset: Option<(String, String)>,
}

impl AppleMessageBuilder {
    /// Creates a new builder playing the `default` sound.
    pub fn new() -> AppleMessageBuilder {
        AppleMessageBuilder {
            badge: None,
            alert: None,
            sound: String::from("default"),
            extra: ExtraAttributes::new(),
            category: None,
            expiry: None,
            uri: None,
            message_variation_id: None,
            asset: None,
        }
    }

    /// Set the badge count to display after the message is received.
    pub fn set_badge_count(mut self, count: u32) -> Self {
        self.badge = Some(count);
        self
    }

    pub fn set_alert<S>(mut self, alert: S) -> Self
    where
        S: Into<String>,
    {
        self.alert = Some(alert.into());
        self
    }

    pub fn set_sound<S>(mut self, sound: S) -> Self
    where
        S: Into<String>,
    {
        self.sound = sound.into();
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

    /// Merge one extra attribute, replacing an existing value with the same
    /// key.
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

    pub fn set_category<S>(mut self, category: S) -> Self
    where
        S: Into<String>,
    {
        self.category = Some(category.into());
        self
    }

    /// Stop delivering the message after the given time. Sent as an
    /// ISO-8601 timestamp in the offset of `date`.
    pub fn expires_at<Tz>(mut self, date: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.expiry = Some(to_iso8601(date));
        self
    }

    /// The URI to open when the message is tapped.
    pub fn set_uri<S>(mut self, uri: S) -> Self
    where
        S: Into<String>,
    {
        self.uri = Some(uri.into());
        self
    }

    pub fn set_message_variation<S>(mut self, message_variation_id: S) -> Self
    where
        S: Into<String>,
    {
        self.message_variation_id = Some(message_variation_id.into());
        self
    }

    /// Attach rich content, e.g. `set_asset("https://cdn/x.jpg", "jpg")`.
    pub fn set_asset<U, T>(mut self, url: U, file_type: T) -> Self
    where
        U: Into<String>,
        T: Into<String>,
    {
        self.asset = Some((url.into(), file_type.into()));
        self
    }
}

impl PayloadBuilder for AppleMessageBuilder {
    type Payload = AppleMessage;

    fn build(&self) -> AppleMessage {
        let (asset_url, asset_file_type) = match self.asset.clone() {
            Some((url, file_type)) => (Some(url), Some(file_type)),
            None => (None, None),
        };

        AppleMessage {
            badge: self.badge,
            alert: self.alert.clone(),
            sound: self.sound.clone(),
            extra: self.extra.clone(),
            category: self.category.clone(),
            expiry: self.expiry.clone(),
            custom_uri: self.uri.clone(),
            message_variation_id: self.message_variation_id.clone(),
            asset_url,
            asset_file_type,
        }
    }
}

impl Default for AppleMessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
