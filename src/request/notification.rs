//! Audience targeting and the notification builders

mod scheduled;

pub use self::scheduled::{Schedule, ScheduledNotification, ScheduledNotificationBuilder};

use crate::request::message::Message;
use crate::request::payload::{ExternalUserId, IntoExternalUserIds, PayloadBuilder};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Which subscribers of the audience receive the message.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionState {
    /// Only users who explicitly opted in.
    OptedIn,
    /// Users who are subscribed or opted in.
    #[default]
    Subscribed,
    /// Every user, including the unsubscribed ones.
    All,
}

impl fmt::Display for SubscriptionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self {
            SubscriptionState::OptedIn => "opted_in",
            SubscriptionState::Subscribed => "subscribed",
            SubscriptionState::All => "all",
        };

        write!(f, "{}", state)
    }
}

/// The request data for `messages/send`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Notification {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub external_user_ids: Vec<ExternalUserId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,

    pub override_frequency_capping: bool,

    pub recipient_subscription_state: SubscriptionState,

    /// Message content keyed by platform, e.g.
    /// [`APPLE_PUSH`](../message/constant.APPLE_PUSH.html).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub messages: BTreeMap<String, Message>,
}

/// A builder to create the payload of an immediate send.
///
/// Targeting a segment and a list of users is not exclusive: when both are
/// set, both are sent and Appboy decides.
///
/// # Example
///
/// ```rust
/// # use appboy::request::message::{AppleMessageBuilder, APPLE_PUSH};
/// # use appboy::request::notification::NotificationBuilder;
/// # use appboy::request::payload::PayloadBuilder;
/// # use serde_json::json;
/// # fn main() {
/// let notification = NotificationBuilder::new()
///     .to_user(2)
///     .with_message(APPLE_PUSH, AppleMessageBuilder::new().set_alert("Hi").build())
///     .build();
///
/// assert_eq!(
///     json!({
///         "external_user_ids": [2],
///         "override_frequency_capping": false,
///         "recipient_subscription_state": "subscribed",
///         "messages": {"apple_push": {"alert": "Hi", "sound": "default"}}
///     }),
///     serde_json::to_value(&notification).unwrap()
/// );
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct NotificationBuilder {
    external_user_ids: Vec<ExternalUserId>,
    segment_id: Option<String>,
    campaign_id: Option<String>,
    override_frequency_capping: bool,
    recipient_subscription_state: SubscriptionState,
    messages: BTreeMap<String, Message>,
}

impl NotificationBuilder {
    pub fn new() -> NotificationBuilder {
        Self::default()
    }

    /// Send to one or many users by their external ids, replacing any
    /// previously set ids. A single id becomes a one-element list.
    pub fn to_users<U>(mut self, ids: U) -> Self
    where
        U: IntoExternalUserIds,
    {
        self.external_user_ids = ids.into_external_user_ids();
        self
    }

    pub fn to_user<U>(self, id: U) -> Self
    where
        U: Into<ExternalUserId>,
    {
        let id: ExternalUserId = id.into();
        self.to_users(id)
    }

    pub fn to_segment<S>(mut self, segment_id: S) -> Self
    where
        S: Into<String>,
    {
        self.segment_id = Some(segment_id.into());
        self
    }

    /// Track the send under a campaign.
    pub fn set_campaign<S>(mut self, campaign_id: S) -> Self
    where
        S: Into<String>,
    {
        self.campaign_id = Some(campaign_id.into());
        self
    }

    pub fn ignore_frequency_capping(mut self) -> Self {
        self.override_frequency_capping = true;
        self
    }

    pub fn respect_frequency_capping(mut self) -> Self {
        self.override_frequency_capping = false;
        self
    }

    pub fn set_subscription_state(mut self, state: SubscriptionState) -> Self {
        self.recipient_subscription_state = state;
        self
    }

    /// Replace all messages.
    pub fn with_messages<I, K, M>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = (K, M)>,
        K: Into<String>,
        M: Into<Message>,
    {
        self.messages = messages.into_iter().map(|(k, m)| (k.into(), m.into())).collect();
        self
    }

    /// Replace all messages with a single one for `platform`.
    pub fn with_message<K, M>(self, platform: K, message: M) -> Self
    where
        K: Into<String>,
        M: Into<Message>,
    {
        let entry: (String, Message) = (platform.into(), message.into());
        self.with_messages([entry])
    }

    /// Add the message for `platform`, replacing only an existing message of
    /// the same platform.
    pub fn add_message<K, M>(mut self, platform: K, message: M) -> Self
    where
        K: Into<String>,
        M: Into<Message>,
    {
        self.messages.insert(platform.into(), message.into());
        self
    }

    /// Schedule the notification instead of sending it immediately.
    pub fn scheduled(self) -> ScheduledNotificationBuilder {
        ScheduledNotificationBuilder::from(self)
    }
}

impl PayloadBuilder for NotificationBuilder {
    type Payload = Notification;

    fn build(&self) -> Notification {
        Notification {
            external_user_ids: self.external_user_ids.clone(),
            segment_id: self.segment_id.clone(),
            campaign_id: self.campaign_id.clone(),
            override_frequency_capping: self.override_frequency_capping,
            recipient_subscription_state: self.recipient_subscription_state,
            messages: self.messages.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::message::{AndroidMessageBuilder, AppleMessageBuilder, ANDROID_PUSH, APPLE_PUSH};
    use serde_json::value::to_value;
    use serde_json::Value;

    fn build(builder: &NotificationBuilder) -> Value {
        to_value(builder.build()).unwrap()
    }

    #[test]
    fn test_notification_defaults() {
        let expected_payload = json!({
            "override_frequency_capping": false,
            "recipient_subscription_state": "subscribed"
        });

        assert_eq!(expected_payload, build(&NotificationBuilder::new()));
    }

    #[test]
    fn test_to_users() {
        let builder = NotificationBuilder::new().to_users(vec![1, 2]);

        assert_eq!(json!([1, 2]), build(&builder)["external_user_ids"]);

        let builder = builder.to_users(2);

        assert_eq!(json!([2]), build(&builder)["external_user_ids"]);
    }

    #[test]
    fn test_to_user() {
        let builder = NotificationBuilder::new().to_user("user-2");

        assert_eq!(json!(["user-2"]), build(&builder)["external_user_ids"]);
    }

    #[test]
    fn test_to_segment() {
        let builder = NotificationBuilder::new().to_segment("abc123");

        assert_eq!(json!("abc123"), build(&builder)["segment_id"]);
    }

    #[test]
    fn test_users_and_segment_are_both_sent() {
        let payload = build(&NotificationBuilder::new().to_user(2).to_segment("abc123"));

        assert_eq!(json!([2]), payload["external_user_ids"]);
        assert_eq!(json!("abc123"), payload["segment_id"]);
    }

    #[test]
    fn test_set_campaign() {
        let builder = NotificationBuilder::new().set_campaign("my_campaign");

        assert_eq!(json!("my_campaign"), build(&builder)["campaign_id"]);
    }

    #[test]
    fn test_frequency_capping() {
        let builder = NotificationBuilder::new().ignore_frequency_capping();

        assert_eq!(json!(true), build(&builder)["override_frequency_capping"]);

        let builder = builder.respect_frequency_capping();

        assert_eq!(json!(false), build(&builder)["override_frequency_capping"]);
    }

    #[test]
    fn test_set_subscription_state() {
        let builder = NotificationBuilder::new().set_subscription_state(SubscriptionState::All);

        assert_eq!(json!("all"), build(&builder)["recipient_subscription_state"]);

        let builder = builder.set_subscription_state(SubscriptionState::OptedIn);

        assert_eq!(json!("opted_in"), build(&builder)["recipient_subscription_state"]);
        assert_eq!("opted_in", SubscriptionState::OptedIn.to_string());
    }

    #[test]
    fn test_with_messages_replaces() {
        let builder = NotificationBuilder::new().with_messages([
            (APPLE_PUSH, json!({"alert": "Message 1"})),
            (ANDROID_PUSH, json!({"alert": "Message 2"})),
        ]);

        assert_eq!(
            json!({"apple_push": {"alert": "Message 1"}, "android_push": {"alert": "Message 2"}}),
            build(&builder)["messages"]
        );

        let builder = builder.with_messages([(APPLE_PUSH, json!({"alert": "Message 3"}))]);

        assert_eq!(json!({"apple_push": {"alert": "Message 3"}}), build(&builder)["messages"]);
    }

    #[test]
    fn test_with_message_replaces() {
        let builder = NotificationBuilder::new()
            .add_message(ANDROID_PUSH, json!({"alert": "Message 1"}))
            .with_message(APPLE_PUSH, json!({"alert": "Message 2"}));

        assert_eq!(json!({"apple_push": {"alert": "Message 2"}}), build(&builder)["messages"]);
    }

    #[test]
    fn test_add_message_merges() {
        let builder = NotificationBuilder::new()
            .with_message(APPLE_PUSH, json!({"alert": "Message 1"}))
            .add_message(ANDROID_PUSH, json!({"alert": "Message 2"}))
            .add_message("kindle_push", json!({"alert": "Message 3"}))
            .add_message(APPLE_PUSH, json!({"alert": "Message 4"}));

        let expected_messages = json!({
            "apple_push": {"alert": "Message 4"},
            "android_push": {"alert": "Message 2"},
            "kindle_push": {"alert": "Message 3"}
        });

        assert_eq!(expected_messages, build(&builder)["messages"]);
    }

    #[test]
    fn test_notification_with_built_messages() {
        let builder = NotificationBuilder::new()
            .to_user(2)
            .add_message(APPLE_PUSH, AppleMessageBuilder::new().set_alert("Hello iOS").build())
            .add_message(ANDROID_PUSH, AndroidMessageBuilder::new().set_alert("Hello Android").build());

        let expected_payload = json!({
            "external_user_ids": [2],
            "override_frequency_capping": false,
            "recipient_subscription_state": "subscribed",
            "messages": {
                "apple_push": {
                    "alert": "Hello iOS",
                    "sound": "default"
                },
                "android_push": {
                    "alert": "Hello Android",
                    "sound": "default",
                    "priority": 0
                }
            }
        });

        assert_eq!(expected_payload, build(&builder));
    }

    #[test]
    fn test_notification_with_full_data() {
        let builder = NotificationBuilder::new()
            .to_users([1, 2])
            .set_campaign("my_campaign")
            .ignore_frequency_capping()
            .set_subscription_state(SubscriptionState::OptedIn)
            .with_message(APPLE_PUSH, json!({"alert": "Hello World!"}));

        let expected_payload = json!({
            "external_user_ids": [1, 2],
            "campaign_id": "my_campaign",
            "override_frequency_capping": true,
            "recipient_subscription_state": "opted_in",
            "messages": {
                "apple_push": {"alert": "Hello World!"}
            }
        });

        assert_eq!(expected_payload, build(&builder));
    }
}
