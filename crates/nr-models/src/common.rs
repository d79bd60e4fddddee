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

//! Common types used across the models

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Paginated envelope returned by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
  /// Records on this page
  #[serde(deserialize_with = "crate::common::null_as_default")]
  pub items: Vec<T>,

  /// Total matching records across all pages
  pub total: Option<u64>,

  /// Page size the server applied
  pub limit: Option<u32>,

  /// Number of records skipped
  pub offset: Option<u32>,
}

impl<T> Default for Page<T> {
  fn default() -> Self {
    Page { items: Vec::new(), total: None, limit: None, offset: None }
  }
}

impl<T> Page<T> {
  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Whether records remain past this page, when the server reported a total
  pub fn has_more(&self) -> bool {
    match self.total {
      Some(total) => {
        let seen = u64::from(self.offset.unwrap_or(0)) + self.items.len() as u64;
        seen < total
      }
      None => false,
    }
  }

  /// Offset to request the following page with
  pub fn next_offset(&self) -> Option<u32> {
    if !self.has_more() {
      return None;
    }
    let next = u64::from(self.offset.unwrap_or(0)) + self.items.len() as u64;
    u32::try_from(next).ok()
  }
}

impl<T> IntoIterator for Page<T> {
  type Item = T;
  type IntoIter = std::vec::IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    self.items.into_iter()
  }
}

/// Read an explicit JSON `null` as the type's default.
///
/// The API writes empty lists and maps as `null`; `#[serde(default)]` alone
/// only covers keys that are absent.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse an API timestamp.
///
/// Accepts RFC 3339 and the space separated `YYYY-MM-DD HH:MM:SS` form,
/// the latter read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
  let raw = raw.trim();
  if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
    return Some(ts.with_timezone(&Utc));
  }
  NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
    .ok()
    .map(|naive| naive.and_utc())
}

/// Convert a millisecond Unix timestamp, as used by `since_ms` style params
pub fn from_millis(ms: i64) -> Option<DateTime<Utc>> {
  DateTime::from_timestamp_millis(ms)
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{Datelike, Timelike};

  #[test]
  fn test_page_defaults_when_fields_missing() {
    let page: Page<u32> = serde_json::from_str(r#"{"items": [1, 2]}"#).unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page.total, None);
    assert!(!page.has_more());
  }

  #[test]
  fn test_page_null_items_is_empty() {
    let page: Page<u32> =
      serde_json::from_str(r#"{"items": null, "total": 0, "limit": 20, "offset": 0}"#).unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total, Some(0));
    assert!(!page.has_more());
  }

  #[test]
  fn test_next_offset() {
    let page: Page<u32> =
      serde_json::from_str(r#"{"items": [1, 2, 3], "total": 10, "limit": 3, "offset": 3}"#).unwrap();
    assert!(page.has_more());
    assert_eq!(page.next_offset(), Some(6));

    let last: Page<u32> =
      serde_json::from_str(r#"{"items": [1], "total": 10, "limit": 3, "offset": 9}"#).unwrap();
    assert_eq!(last.next_offset(), None);
  }

  #[test]
  fn test_parse_timestamp_formats() {
    let ts = parse_timestamp("2025-03-04T05:06:07Z").unwrap();
    assert_eq!((ts.year(), ts.month(), ts.day()), (2025, 3, 4));

    let ts = parse_timestamp("2025-03-04T05:06:07+02:00").unwrap();
    assert_eq!(ts.hour(), 3);

    let ts = parse_timestamp("2025-03-04 05:06:07").unwrap();
    assert_eq!(ts.minute(), 6);

    assert!(parse_timestamp("yesterday").is_none());
  }

  #[test]
  fn test_from_millis() {
    let ts = from_millis(1_700_000_000_000).unwrap();
    assert_eq!(ts.year(), 2023);
  }
}
