/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Composable request validators
//!
//! Every check returns `Result<()>` and names the offending field, so request
//! types can chain them with `?` inside their [`Validate`] impl.

use crate::error::{Error, Result};
use std::fmt::Display;
use std::ops::RangeInclusive;
use url::Url;

/// Implemented by every request body sent to the API
pub trait Validate {
  /// Check the request locally, before any network call
  fn validate(&self) -> Result<()>;
}

/// Instance names are opaque but must never be blank
pub fn instance_name(instance: &str) -> Result<()> {
  not_blank("instance", instance)
}

/// Reject empty or whitespace-only strings
pub fn not_blank(field: &str, value: &str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::validation(field, "must not be blank"));
  }
  Ok(())
}

/// Like [`not_blank`] but for optional values: `None` fails too
pub fn required(field: &str, value: Option<&str>) -> Result<()> {
  match value {
    Some(v) => not_blank(field, v),
    None => Err(Error::validation(field, "is required")),
  }
}

/// `Some("")` is rejected, `None` passes
pub fn optional_not_blank(field: &str, value: Option<&str>) -> Result<()> {
  value.map_or(Ok(()), |v| not_blank(field, v))
}

/// Inclusive numeric range check
pub fn in_range<T>(field: &str, value: T, range: RangeInclusive<T>) -> Result<()>
where
  T: PartialOrd + Display + Copy,
{
  if !range.contains(&value) {
    return Err(Error::validation(
      field,
      format!("{} is outside {}..={}", value, range.start(), range.end()),
    ));
  }
  Ok(())
}

/// Range check for optional numbers
pub fn optional_in_range<T>(field: &str, value: Option<T>, range: RangeInclusive<T>) -> Result<()>
where
  T: PartialOrd + Display + Copy,
{
  value.map_or(Ok(()), |v| in_range(field, v, range))
}

/// String length in characters must not exceed `max`
pub fn max_chars(field: &str, value: &str, max: usize) -> Result<()> {
  let len = value.chars().count();
  if len > max {
    return Err(Error::validation(field, format!("length {} exceeds {}", len, max)));
  }
  Ok(())
}

/// Collections that must carry at least one entry
pub fn not_empty<T>(field: &str, items: &[T]) -> Result<()> {
  if items.is_empty() {
    return Err(Error::validation(field, "must contain at least one entry"));
  }
  Ok(())
}

/// Collection length must fall within `range`
pub fn len_in_range<T>(field: &str, items: &[T], range: RangeInclusive<usize>) -> Result<()> {
  if !range.contains(&items.len()) {
    return Err(Error::validation(
      field,
      format!("expected {}..={} entries, got {}", range.start(), range.end(), items.len()),
    ));
  }
  Ok(())
}

/// Value must be one of a fixed set
pub fn one_of<T>(field: &str, value: T, allowed: &[T]) -> Result<()>
where
  T: PartialEq + Display,
{
  if !allowed.contains(&value) {
    return Err(Error::validation(field, format!("{} is not an allowed value", value)));
  }
  Ok(())
}

/// Absolute http(s) URL; returns the parsed value for further checks
pub fn absolute_url(field: &str, value: &str) -> Result<Url> {
  not_blank(field, value)?;
  let url = Url::parse(value)
    .map_err(|e| Error::validation(field, format!("not an absolute URL: {}", e)))?;
  if !matches!(url.scheme(), "http" | "https") {
    return Err(Error::validation(field, format!("unsupported scheme {}", url.scheme())));
  }
  if url.host_str().is_none() {
    return Err(Error::validation(field, "URL has no host"));
  }
  Ok(url)
}

/// Optional URL; `None` passes
pub fn optional_absolute_url(field: &str, value: Option<&str>) -> Result<()> {
  if let Some(v) = value {
    absolute_url(field, v)?;
  }
  Ok(())
}

/// Group JIDs look like `1203630...@g.us`
pub fn group_jid(field: &str, value: &str) -> Result<()> {
  not_blank(field, value)?;
  if !value.ends_with("@g.us") {
    return Err(Error::validation(field, "group JID must end with @g.us"));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_instance_name() {
    assert!(instance_name("main").is_ok());
    let err = instance_name("   ").unwrap_err();
    assert_eq!(err.field(), Some("instance"));
  }

  #[test]
  fn test_in_range_boundaries() {
    assert!(in_range("delaySeconds", 0u32, 0..=900).is_ok());
    assert!(in_range("delaySeconds", 900u32, 0..=900).is_ok());
    assert!(in_range("delaySeconds", 901u32, 0..=900).is_err());
    assert!(in_range("connectionTimeout", 0u32, 1..=300).is_err());
    assert!(optional_in_range::<u32>("x", None, 1..=2).is_ok());
  }

  #[test]
  fn test_absolute_url() {
    assert!(absolute_url("url", "https://example.com/hook").is_ok());
    assert!(absolute_url("url", "/relative/path").is_err());
    assert!(absolute_url("url", "mailto:someone@example.com").is_err());
    assert!(absolute_url("url", "").is_err());
  }

  #[test]
  fn test_collections_and_sets() {
    assert!(not_empty::<u8>("numbers", &[]).is_err());
    assert!(len_in_range("values", &[1, 2], 2..=12).is_ok());
    assert!(len_in_range("values", &[1], 2..=12).is_err());
    assert!(one_of("expiration", 86_400u32, &[0, 86_400, 604_800, 7_776_000]).is_ok());
    assert!(one_of("expiration", 5u32, &[0, 86_400, 604_800, 7_776_000]).is_err());
  }

  #[test]
  fn test_group_jid_and_text() {
    assert!(group_jid("groupJid", "120363000000000000@g.us").is_ok());
    assert!(group_jid("groupJid", "5511999999999@s.whatsapp.net").is_err());
    assert!(max_chars("name", "abc", 3).is_ok());
    assert!(max_chars("name", "abcd", 3).is_err());
    assert!(required("token", None).is_err());
    assert!(optional_not_blank("token", None).is_ok());
    assert!(optional_not_blank("token", Some(" ")).is_err());
  }
}
