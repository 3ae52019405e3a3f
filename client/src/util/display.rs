//! Small formatting helpers shared by pages.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::net::types::User;

const NOT_AVAILABLE: &str = "Not available";
const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DUE_DATE: &[BorrowedFormatItem<'static>] = format_description!("[month repr:short] [day padding:none], [year]");

/// First word of the user's name, for greetings.
#[must_use]
pub fn first_name(user: Option<&User>) -> String {
    user.and_then(|u| u.name.split_whitespace().next())
        .unwrap_or("Student")
        .to_owned()
}

/// Upper-cased first letter of the email, for the avatar bubble.
#[must_use]
pub fn avatar_initial(email: Option<&str>) -> String {
    email
        .and_then(|e| e.trim().chars().next())
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

#[must_use]
pub fn email_label(email: Option<&str>) -> String {
    email.filter(|e| !e.trim().is_empty()).unwrap_or(NOT_AVAILABLE).to_owned()
}

/// `YYYY-MM-DD` (UTC) for an epoch-millisecond timestamp.
#[must_use]
pub fn member_since_label(created_at_ms: Option<i64>) -> String {
    created_at_ms
        .and_then(|ms| OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000).ok())
        .map_or_else(
            || NOT_AVAILABLE.to_owned(),
            |at| format!("{:04}-{:02}-{:02}", at.year(), u8::from(at.month()), at.day()),
        )
}

/// Integer with `,` thousands separators.
#[must_use]
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Price in whole cents rendered as dollars.
#[must_use]
pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// `Mon D, YYYY` for an ISO `YYYY-MM-DD` date; unparseable or impossible
/// dates are shown as given.
#[must_use]
pub fn due_date_label(iso: &str) -> String {
    Date::parse(iso.trim(), ISO_DATE)
        .ok()
        .and_then(|date| date.format(DUE_DATE).ok())
        .unwrap_or_else(|| iso.to_owned())
}
