use appboy::{
    AndroidMessageBuilder, AppleMessageBuilder, Client, ClientOptions, NotificationBuilder, PayloadBuilder,
    ScheduledNotificationBuilder, ANDROID_PUSH, APPLE_PUSH,
};
use argparse::{ArgumentParser, Store, StoreOption, StoreTrue};
use chrono::{Duration, FixedOffset, Utc};

// Sends a push message to one user, or schedules it an hour from now.
//
// usage:
// APPBOY_APP_GROUP_ID='your app group id' cargo run --example send_push -- -u 2
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt().init();

    let mut app_group_id = std::env::var("APPBOY_APP_GROUP_ID").unwrap_or_default();
    let mut user_id = String::new();
    let mut message = String::from("This is a test message");
    let mut base_uri: Option<String> = None;
    let mut schedule = false;

    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Appboy push message");
        ap.refer(&mut app_group_id)
            .add_option(&["-a", "--app_group_id"], Store, "Appboy app group id");
        ap.refer(&mut user_id)
            .add_option(&["-u", "--user_id"], Store, "External user id")
            .required();
        ap.refer(&mut message)
            .add_option(&["-m", "--message"], Store, "Notification message");
        ap.refer(&mut base_uri)
            .add_option(&["-b", "--base_uri"], StoreOption, "Appboy REST endpoint");
        ap.refer(&mut schedule).add_option(
            &["-s", "--schedule"],
            StoreTrue,
            "Schedule the message an hour from now",
        );
        ap.parse_args_or_exit();
    }

    let options = match base_uri {
        Some(base_uri) => ClientOptions::new(base_uri),
        None => ClientOptions::default(),
    };

    let client = Client::with_options(app_group_id, options);

    let johannesburg = FixedOffset::east_opt(2 * 3600).ok_or("invalid offset")?;
    let in_an_hour = Utc::now().with_timezone(&johannesburg) + Duration::hours(1);

    let apple = AppleMessageBuilder::new()
        .set_alert(message.as_str())
        .with_extra_attributes([("is_test", true)])
        .set_category("matthew_test")
        .expires_at(&in_an_hour)
        .set_uri("http://superbalist.com")
        .build();

    let android = AndroidMessageBuilder::new()
        .set_alert(message.as_str())
        .set_title("Message Title")
        .with_extra_attributes([("is_test", true)])
        .set_uri("http://superbalist.com")
        .set_summary_text("This is a summary line")
        .build();

    let notification = NotificationBuilder::new()
        .to_user(user_id)
        .with_messages([(APPLE_PUSH, appboy::Message::from(apple)), (ANDROID_PUSH, android.into())]);

    let result = if schedule {
        let scheduled = ScheduledNotificationBuilder::from(notification).sends_at(&in_an_hour);
        client.schedule_message(&scheduled.build()).await
    } else {
        client.send_message(&notification.build()).await
    };

    match result {
        Ok(response) => println!("Sent: {:?}", response),
        Err(error) => println!("Error: {}", error),
    };

    Ok(())
}
