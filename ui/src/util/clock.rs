//! Timestamps and conversation identifiers.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::OffsetDateTime;
use time::macros::format_description;

/// Current UTC time as an ISO-8601 string with millisecond precision,
/// e.g. `2024-05-01T09:30:00.123Z`.
pub fn now_iso() -> String {
    format_iso(OffsetDateTime::now_utc())
}

pub fn format_iso(at: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");
    at.to_offset(time::UtcOffset::UTC).format(&format).unwrap_or_default()
}

/// New conversation id: `chat_{unix millis}_{9 lowercase base36 chars}`.
pub fn new_chat_id() -> String {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    chat_id_from_parts(millis, uuid::Uuid::new_v4().as_u128())
}

pub(crate) fn chat_id_from_parts(millis: i128, entropy: u128) -> String {
    const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut suffix = String::with_capacity(9);
    let mut rest = entropy;
    for _ in 0..9 {
        suffix.push(char::from(ALPHABET[(rest % 36) as usize]));
        rest /= 36;
    }
    format!("chat_{millis}_{suffix}")
}
