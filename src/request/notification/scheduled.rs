use crate::request::message::Message;
use crate::request::notification::{Notification, NotificationBuilder, SubscriptionState};
use crate::request::payload::{to_iso8601, ExternalUserId, IntoExternalUserIds, PayloadBuilder};
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt;

/// When a scheduled notification goes out.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// ISO-8601 send time.
    pub time: String,
}

/// The request data for `messages/schedule/create`: a
/// [Notification](struct.Notification.html) with an optional `schedule`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScheduledNotification {
    #[serde(flatten)]
    pub notification: Notification,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
}

/// A builder to create the payload of a scheduled send. Wraps a
/// [NotificationBuilder](struct.NotificationBuilder.html) and offers the same
/// targeting methods.
///
/// # Example
///
/// ```rust
/// # use appboy::request::notification::ScheduledNotificationBuilder;
/// # use appboy::request::payload::PayloadBuilder;
/// # use chrono::{FixedOffset, TimeZone};
/// # fn main() {
/// let johannesburg = FixedOffset::east_opt(2 * 3600).unwrap();
///
/// let notification = ScheduledNotificationBuilder::new()
///     .to_segment("abc123")
///     .sends_at(&johannesburg.with_ymd_and_hms(2017, 5, 29, 10, 0, 0).unwrap())
///     .build();
///
/// assert_eq!("2017-05-29T10:00:00+02:00", notification.schedule.unwrap().time);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduledNotificationBuilder {
    notification: NotificationBuilder,
    send_time: Option<String>,
}

impl ScheduledNotificationBuilder {
    pub fn new() -> ScheduledNotificationBuilder {
        Self::default()
    }

    /// The time to send the notification. Sent as an ISO-8601 timestamp in
    /// the offset of `date`.
    pub fn sends_at<Tz>(mut self, date: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.send_time = Some(to_iso8601(date));
        self
    }

    pub fn to_users<U>(self, ids: U) -> Self
    where
        U: IntoExternalUserIds,
    {
        self.map(|n| n.to_users(ids))
    }

    pub fn to_user<U>(self, id: U) -> Self
    where
        U: Into<ExternalUserId>,
    {
        self.map(|n| n.to_user(id))
    }

    pub fn to_segment<S>(self, segment_id: S) -> Self
    where
        S: Into<String>,
    {
        self.map(|n| n.to_segment(segment_id))
    }

    pub fn set_campaign<S>(self, campaign_id: S) -> Self
    where
        S: Into<String>,
    {
        self.map(|n| n.set_campaign(campaign_id))
    }

    pub fn ignore_frequency_capping(self) -> Self {
        self.map(NotificationBuilder::ignore_frequency_capping)
    }

    pub fn respect_frequency_capping(self) -> Self {
        self.map(NotificationBuilder::respect_frequency_capping)
    }

    pub fn set_subscription_state(self, state: SubscriptionState) -> Self {
        self.map(|n| n.set_subscription_state(state))
    }

    pub fn with_messages<I, K, M>(self, messages: I) -> Self
    where
        I: IntoIterator<Item = (K, M)>,
        K: Into<String>,
        M: Into<Message>,
    {
        self.map(|n| n.with_messages(messages))
    }

    pub fn with_message<K, M>(self, platform: K, message: M) -> Self
    where
        K: Into<String>,
        M: Into<Message>,
    {
        self.map(|n| n.with_message(platform, message))
    }

    pub fn add_message<K, M>(self, platform: K, message: M) -> Self
    where
        K: Into<String>,
        M: Into<Message>,
    {
        self.map(|n| n.add_message(platform, message))
    }

    fn map<F>(mut self, f: F) -> Self
    where
        F: FnOnce(NotificationBuilder) -> NotificationBuilder,
    {
        self.notification = f(self.notification);
        self
    }
}

impl From<NotificationBuilder> for ScheduledNotificationBuilder {
    fn from(notification: NotificationBuilder) -> Self {
        ScheduledNotificationBuilder {
            notification,
            send_time: None,
        }
    }
}

impl PayloadBuilder for ScheduledNotificationBuilder {
    type Payload = ScheduledNotification;

    fn build(&self) -> ScheduledNotification {
        ScheduledNotification {
            notification: self.notification.build(),
            schedule: self.send_time.clone().map(|time| Schedule { time }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::message::APPLE_PUSH;
    use chrono::FixedOffset;
    use serde_json::value::to_value;
    use serde_json::Value;

    fn build(builder: &ScheduledNotificationBuilder) -> Value {
        to_value(builder.build()).unwrap()
    }

    fn may_29th() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2017, 5, 29, 10, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_sends_at() {
        let builder = ScheduledNotificationBuilder::new().sends_at(&may_29th());

        assert_eq!(json!({"time": "2017-05-29T10:00:00+02:00"}), build(&builder)["schedule"]);
    }

    #[test]
    fn test_no_schedule_without_send_time() {
        let payload = build(&ScheduledNotificationBuilder::new().to_user(2));

        assert!(payload.get("schedule").is_none());
        assert_eq!(json!([2]), payload["external_user_ids"]);
    }

    #[test]
    fn test_targeting_is_delegated() {
        let builder = ScheduledNotificationBuilder::new()
            .to_users([1, 2])
            .to_segment("abc123")
            .set_campaign("my_campaign")
            .ignore_frequency_capping()
            .set_subscription_state(SubscriptionState::All);

        let payload = build(&builder);

        assert_eq!(json!([1, 2]), payload["external_user_ids"]);
        assert_eq!(json!("abc123"), payload["segment_id"]);
        assert_eq!(json!("my_campaign"), payload["campaign_id"]);
        assert_eq!(json!(true), payload["override_frequency_capping"]);
        assert_eq!(json!("all"), payload["recipient_subscription_state"]);

        let payload = build(&builder.respect_frequency_capping().to_users(2));

        assert_eq!(json!(false), payload["override_frequency_capping"]);
        assert_eq!(json!([2]), payload["external_user_ids"]);
    }

    #[test]
    fn test_messages_are_delegated() {
        let builder = ScheduledNotificationBuilder::new()
            .with_messages([("kindle_push", json!({"alert": "Message 1"}))])
            .add_message(APPLE_PUSH, json!({"alert": "Message 2"}));

        assert_eq!(
            json!({"kindle_push": {"alert": "Message 1"}, "apple_push": {"alert": "Message 2"}}),
            build(&builder)["messages"]
        );

        let builder = builder.with_message(APPLE_PUSH, json!({"alert": "Message 3"}));

        assert_eq!(json!({"apple_push": {"alert": "Message 3"}}), build(&builder)["messages"]);
    }

    #[test]
    fn test_scheduled_from_notification_builder() {
        let builder = NotificationBuilder::new()
            .to_user(2)
            .set_campaign("my_campaign")
            .scheduled()
            .sends_at(&may_29th());

        let expected_payload = json!({
            "external_user_ids": [2],
            "campaign_id": "my_campaign",
            "override_frequency_capping": false,
            "recipient_subscription_state": "subscribed",
            "schedule": {
                "time": "2017-05-29T10:00:00+02:00"
            }
        });

        assert_eq!(expected_payload, build(&builder));
    }
}
