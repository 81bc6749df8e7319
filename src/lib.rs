//! # Appboy
//!
//! An asynchronous client for the [Appboy](https://www.braze.com/docs/api/basics/)
//! messaging REST API, sending push notifications to Apple and Android
//! devices either immediately or at a scheduled time.
//!
//! The payloads are assembled with builders:
//!
//! * [AppleMessageBuilder](request/message/struct.AppleMessageBuilder.html)
//!   and [AndroidMessageBuilder](request/message/struct.AndroidMessageBuilder.html)
//!   for the per-platform content.
//! * [NotificationBuilder](request/notification/struct.NotificationBuilder.html)
//!   for the audience and the messages of an immediate send.
//! * [ScheduledNotificationBuilder](request/notification/struct.ScheduledNotificationBuilder.html)
//!   for a send at a given time.
//!
//! A [Client](client/struct.Client.html) then posts the payload with the app
//! group identifier of the sending application. Unset optional fields are
//! never sent.
//!
//! ## Example sending a push message
//!
//! ```no_run
//! use appboy::{
//!     AndroidMessageBuilder, AppleMessageBuilder, Client, NotificationBuilder, PayloadBuilder,
//!     ANDROID_PUSH, APPLE_PUSH,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), appboy::Error> {
//!     let client = Client::new("your-app-group-id");
//!
//!     let notification = NotificationBuilder::new()
//!         .to_user(2)
//!         .add_message(
//!             APPLE_PUSH,
//!             AppleMessageBuilder::new()
//!                 .set_alert("This is a test message")
//!                 .add_extra_attribute("is_test", true)
//!                 .build(),
//!         )
//!         .add_message(
//!             ANDROID_PUSH,
//!             AndroidMessageBuilder::new()
//!                 .set_alert("This is a test message")
//!                 .set_title("Message Title")
//!                 .build(),
//!         )
//!         .build();
//!
//!     let response = client.send_message(&notification).await?;
//!     println!("Sent: {:?}", response.message());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Tracing
//!
//! With the `tracing` feature enabled, requests are instrumented with
//! [tracing](https://docs.rs/tracing) spans and debug events.

#[cfg(test)]
#[macro_use]
extern crate serde_json;

pub mod client;
pub mod error;
pub mod request;
pub mod response;

pub use crate::request::message::{
    AndroidMessage, AndroidMessageBuilder, AppleMessage, AppleMessageBuilder, Message, ANDROID_PUSH, APPLE_PUSH,
};

pub use crate::request::notification::{
    Notification, NotificationBuilder, ScheduledNotification, ScheduledNotificationBuilder, SubscriptionState,
};

pub use crate::request::payload::{ExternalUserId, PayloadBuilder};

pub use crate::client::{Client, ClientOptions};

pub use crate::error::Error;
pub use crate::response::Response;
