//! Input checks shared by the public forms and the admin panels.

use anyhow::{bail, Result};
use time::{macros::format_description, Date};

pub const NAME_MAX: usize = 120;
pub const EMAIL_MAX: usize = 254;
pub const TITLE_MAX: usize = 200;
pub const SUBJECT_MAX: usize = 200;
pub const BODY_MAX: usize = 5_000;
pub const URL_MAX: usize = 2_048;

const LIMIT_MAX: i64 = 200;

/// Trimmed, non-empty, at most `max` characters.
pub fn required(field: &str, value: &str, max: usize) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        bail!("{field} is required");
    }
    if value.chars().count() > max {
        bail!("{field} must be at most {max} characters");
    }
    Ok(value.to_string())
}

/// Like [`required`], but blank input is `None`.
pub fn optional(field: &str, value: &str, max: usize) -> Result<Option<String>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    required(field, value, max).map(Some)
}

pub fn email(value: &str) -> Result<String> {
    let value = required("email", value, EMAIL_MAX)?;
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains('@')
        }
        None => false,
    };
    if !valid || value.chars().any(char::is_whitespace) {
        bail!("email is not a valid address");
    }
    Ok(value)
}

pub fn optional_email(value: &str) -> Result<Option<String>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    email(value).map(Some)
}

/// An absolute `http`/`https` URL.
pub fn http_url(field: &str, value: &str) -> Result<String> {
    let value = required(field, value, URL_MAX)?;
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(rest) if !rest.is_empty() && !rest.starts_with('/') => Ok(value),
        _ => bail!("{field} must be an http(s) URL"),
    }
}

/// `YYYY-MM-DD`, or `None` for blank input.
pub fn optional_date(field: &str, value: &str) -> Result<Option<Date>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match Date::parse(value, format_description!("[year]-[month]-[day]")) {
        Ok(date) => Ok(Some(date)),
        Err(_) => bail!("{field} must be a date like 2024-12-25"),
    }
}

/// Page sizes requested by clients, kept within `1..=200`.
pub fn clamp_limit(limit: i64) -> i64 {
    limit.clamp(1, LIMIT_MAX)
}
