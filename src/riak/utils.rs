// Riak HTTP Client Library for Rust
// Copyright 2026 The riak-rs Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Various utility and helper functions

use chrono::{DateTime, NaiveDateTime, ParseError, Utc};
use std::borrow::Cow;
use std::collections::HashMap;
pub use urlencoding::encode as urlencode;

use crate::riak::error::Error;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    chrono::offset::Utc::now()
}

/// Gets HTTP header value (RFC 1123) of given time
pub fn to_http_header_value(time: UtcTime) -> String {
    time.format(HTTP_DATE_FORMAT).to_string()
}

/// Parses HTTP header value (RFC 1123) to time.
///
/// Accepts the `GMT` form servers send, the `UTC` suffix some clients
/// produce, and numeric offsets.
pub fn from_http_header_value(s: &str) -> Result<UtcTime, ParseError> {
    let s = s.trim();
    match NaiveDateTime::parse_from_str(s, HTTP_DATE_FORMAT) {
        Ok(d) => Ok(DateTime::<Utc>::from_naive_utc_and_offset(d, Utc)),
        Err(_) => match NaiveDateTime::parse_from_str(s, "%a, %d %b %Y %H:%M:%S UTC") {
            Ok(d) => Ok(DateTime::<Utc>::from_naive_utc_and_offset(d, Utc)),
            Err(_) => DateTime::parse_from_rfc2822(s).map(|d| d.with_timezone(&Utc)),
        },
    }
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

/// Returns the canonical MIME form of a header key: the first letter and
/// every letter following a hyphen are upper case, the rest lower case
/// (`x-riak-meta-agent` becomes `X-Riak-Meta-Agent`).
///
/// Keys holding bytes that are not valid in a header field name are
/// returned unchanged.
pub fn canonical_header_key(key: &str) -> Cow<'_, str> {
    if key.is_empty() || !key.bytes().all(is_token_byte) {
        return Cow::Borrowed(key);
    }

    let mut upper = true;
    let mut changed = false;
    let mut out = String::with_capacity(key.len());
    for c in key.chars() {
        let mapped = if upper {
            c.to_ascii_uppercase()
        } else {
            c.to_ascii_lowercase()
        };
        changed |= mapped != c;
        out.push(mapped);
        upper = c == '-';
    }

    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(key)
    }
}

/// Splits a `Content-Type` style value into its lower-cased media type and
/// parameters. Quoted parameter values are unquoted; parameter names are
/// lower-cased.
pub fn parse_media_type(value: &str) -> Result<(String, HashMap<String, String>), Error> {
    let mut parts = value.split(';');
    let media_type = parts.next().unwrap_or_default().trim().to_ascii_lowercase();
    if media_type.is_empty() || !media_type.contains('/') {
        return Err(Error::InvalidMultipart(format!(
            "invalid media type {value:?}"
        )));
    }

    let mut params = HashMap::new();
    for param in parts {
        let param = param.trim();
        if param.is_empty() {
            continue;
        }
        let (name, val) = match param.split_once('=') {
            Some(v) => v,
            None => {
                return Err(Error::InvalidMultipart(format!(
                    "invalid media parameter {param:?}"
                )));
            }
        };
        let val = val.trim();
        let val = val
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(val);
        params.insert(name.trim().to_ascii_lowercase(), val.to_string());
    }

    Ok((media_type, params))
}

/// Fails with [`Error::InvalidArgument`] if `value` is empty.
pub fn check_non_empty(name: &str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::InvalidArgument(format!("{name} cannot be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_canonical_header_key() {
        assert_eq!(canonical_header_key("content-type"), "Content-Type");
        assert_eq!(canonical_header_key("X-RIAK-VCLOCK"), "X-Riak-Vclock");
        assert_eq!(canonical_header_key("username_bin"), "Username_bin");
        assert_eq!(canonical_header_key("USERNAME_bin"), "Username_bin");
        assert_eq!(canonical_header_key("etag"), "Etag");
        assert_eq!(canonical_header_key("a--b"), "A--B");
    }

    #[test]
    fn test_canonical_header_key_borrows_when_unchanged() {
        assert!(matches!(canonical_header_key("Link"), Cow::Borrowed(_)));
        assert!(matches!(canonical_header_key("link"), Cow::Owned(_)));
    }

    #[test]
    fn test_canonical_header_key_invalid_bytes_untouched() {
        assert_eq!(canonical_header_key("has space"), "has space");
        assert_eq!(canonical_header_key("colon:key"), "colon:key");
        assert_eq!(canonical_header_key(""), "");
    }

    #[test]
    fn test_http_header_value_round_trip() {
        let t = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
        let s = to_http_header_value(t);
        assert_eq!(s, "Mon, 02 Jan 2006 15:04:05 GMT");
        assert_eq!(from_http_header_value(&s).unwrap(), t);
    }

    #[test]
    fn test_from_http_header_value_variants() {
        let t = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(
            from_http_header_value("Mon, 02 Jan 2006 15:04:05 UTC").unwrap(),
            t
        );
        assert_eq!(
            from_http_header_value("Mon, 02 Jan 2006 16:04:05 +0100").unwrap(),
            t
        );
        assert!(from_http_header_value("yesterday").is_err());
    }

    #[test]
    fn test_to_http_header_value_drops_subseconds() {
        let now = utc_now();
        let parsed = from_http_header_value(&to_http_header_value(now)).unwrap();
        assert_eq!(parsed, now.with_nanosecond(0).unwrap());
    }

    #[test]
    fn test_parse_media_type() {
        let (mt, params) =
            parse_media_type("multipart/mixed; boundary=YinLMzyUR9feB17okMytgKsylvh").unwrap();
        assert_eq!(mt, "multipart/mixed");
        assert_eq!(params["boundary"], "YinLMzyUR9feB17okMytgKsylvh");

        let (mt, params) = parse_media_type("Multipart/Mixed; Boundary=\"a b\"").unwrap();
        assert_eq!(mt, "multipart/mixed");
        assert_eq!(params["boundary"], "a b");

        let (mt, params) = parse_media_type("text/plain").unwrap();
        assert_eq!(mt, "text/plain");
        assert!(params.is_empty());
    }

    #[test]
    fn test_parse_media_type_invalid() {
        assert!(parse_media_type("").is_err());
        assert!(parse_media_type("plain").is_err());
        assert!(parse_media_type("text/plain; charset").is_err());
    }

    #[test]
    fn test_check_non_empty() {
        assert!(check_non_empty("bucket", "b").is_ok());
        assert!(matches!(
            check_non_empty("bucket", ""),
            Err(Error::InvalidArgument(m)) if m == "bucket cannot be empty"
        ));
    }
}
