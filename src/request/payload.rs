//! Shared payload types and the builder trait

use chrono::{DateTime, SecondsFormat, TimeZone};
use serde::Serialize;
use std::fmt;

pub trait PayloadBuilder {
    /// The serializable payload this builder produces.
    type Payload: Serialize;

    /// Generates the request payload from the current state of the builder.
    /// Can be called any number of times.
    fn build(&self) -> Self::Payload;
}

/// A caller-supplied identifier of a message recipient. Appboy accepts both
/// numeric and textual ids.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ExternalUserId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for ExternalUserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExternalUserId::Numeric(id) => write!(f, "{}", id),
            ExternalUserId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i32> for ExternalUserId {
    fn from(id: i32) -> Self {
        ExternalUserId::Numeric(id.into())
    }
}

impl From<u32> for ExternalUserId {
    fn from(id: u32) -> Self {
        ExternalUserId::Numeric(id.into())
    }
}

impl From<i64> for ExternalUserId {
    fn from(id: i64) -> Self {
        ExternalUserId::Numeric(id)
    }
}

impl From<u64> for ExternalUserId {
    /// Ids beyond `i64::MAX` are sent as text.
    fn from(id: u64) -> Self {
        i64::try_from(id).map_or_else(|_| ExternalUserId::Text(id.to_string()), ExternalUserId::Numeric)
    }
}

impl From<usize> for ExternalUserId {
    fn from(id: usize) -> Self {
        i64::try_from(id).map_or_else(|_| ExternalUserId::Text(id.to_string()), ExternalUserId::Numeric)
    }
}

impl From<&str> for ExternalUserId {
    fn from(id: &str) -> Self {
        ExternalUserId::Text(id.to_string())
    }
}

impl From<String> for ExternalUserId {
    fn from(id: String) -> Self {
        ExternalUserId::Text(id)
    }
}

/// Anything that can target one or many users: a single id is normalized to
/// a one-element list.
///
/// ```rust
/// # use appboy::request::payload::{ExternalUserId, IntoExternalUserIds};
/// assert_eq!(vec![ExternalUserId::Numeric(2)], 2i32.into_external_user_ids());
/// assert_eq!(2, vec!["a", "b"].into_external_user_ids().len());
/// ```
pub trait IntoExternalUserIds {
    fn into_external_user_ids(self) -> Vec<ExternalUserId>;
}

macro_rules! single_user_id {
    ($($t:ty),*) => {
        $(
            impl IntoExternalUserIds for $t {
                fn into_external_user_ids(self) -> Vec<ExternalUserId> {
                    vec![self.into()]
                }
            }
        )*
    };
}

single_user_id!(i32, u32, i64, u64, usize, &str, String);

impl IntoExternalUserIds for ExternalUserId {
    fn into_external_user_ids(self) -> Vec<ExternalUserId> {
        vec![self]
    }
}

impl<T> IntoExternalUserIds for Vec<T>
where
    T: Into<ExternalUserId>,
{
    fn into_external_user_ids(self) -> Vec<ExternalUserId> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T, const N: usize> IntoExternalUserIds for [T; N]
where
    T: Into<ExternalUserId>,
{
    fn into_external_user_ids(self) -> Vec<ExternalUserId> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T> IntoExternalUserIds for &[T]
where
    T: Into<ExternalUserId> + Clone,
{
    fn into_external_user_ids(self) -> Vec<ExternalUserId> {
        self.iter().cloned().map(Into::into).collect()
    }
}

/// ISO-8601 with the offset of the given time and whole seconds, e.g.
/// `2017-05-29T10:00:00+02:00`.
pub(crate) fn to_iso8601<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    time.to_rfc3339_opts(SecondsFormat::Secs, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_single_ids_become_a_list() {
        assert_eq!(vec![ExternalUserId::Numeric(2)], 2i32.into_external_user_ids());
        assert_eq!(
            vec![ExternalUserId::Text("user-1".into())],
            "user-1".into_external_user_ids()
        );
        assert_eq!(
            vec![ExternalUserId::Text("user-2".into())],
            String::from("user-2").into_external_user_ids()
        );
    }

    #[test]
    fn test_unsigned_ids() {
        assert_eq!(vec![ExternalUserId::Numeric(42)], 42u64.into_external_user_ids());
        assert_eq!(vec![ExternalUserId::Numeric(42)], 42usize.into_external_user_ids());
        assert_eq!(
            vec![ExternalUserId::Text("18446744073709551615".into())],
            u64::MAX.into_external_user_ids()
        );
        assert_eq!(
            vec![ExternalUserId::Numeric(1), ExternalUserId::Numeric(2)],
            vec![1u64, 2u64].into_external_user_ids()
        );
        assert_eq!(json!(["18446744073709551615"]), serde_json::to_value(u64::MAX.into_external_user_ids()).unwrap());
    }

    #[test]
    fn test_collections_keep_their_order() {
        let expected = vec![ExternalUserId::Numeric(1), ExternalUserId::Numeric(2)];

        assert_eq!(expected, vec![1, 2].into_external_user_ids());
        assert_eq!(expected, [1, 2].into_external_user_ids());
        assert_eq!(expected, (&[1, 2][..]).into_external_user_ids());
    }

    #[test]
    fn test_user_id_serialization() {
        let ids = vec![ExternalUserId::from(7i32), ExternalUserId::from("abc")];

        assert_eq!(json!([7, "abc"]), serde_json::to_value(&ids).unwrap());
        assert_eq!("7", ids[0].to_string());
        assert_eq!("abc", ids[1].to_string());
    }

    #[test]
    fn test_iso8601_keeps_the_offset() {
        let johannesburg = FixedOffset::east_opt(2 * 3600).unwrap();
        let time = johannesburg.with_ymd_and_hms(2017, 5, 29, 10, 0, 0).unwrap();

        assert_eq!("2017-05-29T10:00:00+02:00", to_iso8601(&time));
    }

    #[test]
    fn test_iso8601_in_utc() {
        let time = Utc.with_ymd_and_hms(2017, 5, 29, 8, 0, 0).unwrap();

        assert_eq!("2017-05-29T08:00:00+00:00", to_iso8601(&time));
    }
}
