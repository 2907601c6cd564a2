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

//! Mapping between an [`Object`] and HTTP headers.
//!
//! Encoding writes the representation headers Riak understands:
//!
//! | Field | Header |
//! |---|---|
//! | `content_type` | `Content-Type` (`text/plain` when empty) |
//! | `vclock` | `X-Riak-Vclock` |
//! | `etag` | `Etag` |
//! | `last_modified` | `Last-Modified` (RFC 1123) |
//! | `links` | `Link` |
//! | `meta` | `X-Riak-Meta-{key}` |
//! | `index` | `X-Riak-Index-{name}` |
//!
//! Decoding is the inverse. Header names are matched case-insensitively,
//! unknown headers are ignored, and a `Location` header addresses an object
//! that has no key yet.

use crate::riak::error::Error;
use crate::riak::header_constants::*;
use crate::riak::link::{format_links, parse_links};
use crate::riak::multimap_ext::{Multimap, MultimapExt};
use crate::riak::object::Object;
use crate::riak::utils::{canonical_header_key, from_http_header_value, to_http_header_value};
use bytes::{BufMut, BytesMut};
use std::borrow::Cow;
use std::collections::HashMap;
use std::io::{self, Read};

impl Object {
    /// Writes the header fields of this object into `hdr`, replacing values
    /// already present under the same names.
    pub fn write_header(&self, hdr: &mut Multimap) {
        if self.content_type.is_empty() {
            hdr.set(CONTENT_TYPE, DEFAULT_CONTENT_TYPE);
        } else {
            hdr.set(CONTENT_TYPE, self.content_type.as_str());
        }

        if !self.vclock.is_empty() {
            hdr.set(X_RIAK_VCLOCK, self.vclock.as_str());
        }

        if !self.etag.is_empty() {
            hdr.set(ETAG, self.etag.as_str());
        }

        if let Some(t) = self.last_modified {
            hdr.set(LAST_MODIFIED, to_http_header_value(t));
        }

        if !self.links.is_empty() {
            hdr.set(LINK, format_links(&self.links));
        }

        write_prefixed(hdr, X_RIAK_META_PREFIX, &self.meta);
        write_prefixed(hdr, X_RIAK_INDEX_PREFIX, &self.index);
    }

    /// Returns the header fields of this object.
    pub fn to_header(&self) -> Multimap {
        let mut hdr = Multimap::new();
        self.write_header(&mut hdr);
        hdr
    }

    /// Reads response headers and, optionally, a body into this object.
    ///
    /// When `hdr` holds at least one header, links, metadata and indexes are
    /// cleared before the new values are applied; a call without header data
    /// leaves them untouched, so the same method attaches a body alone.
    ///
    /// A supplied body replaces the current one. The reader is consumed and
    /// dropped whether or not reading succeeds.
    pub fn from_response<R: Read>(
        &mut self,
        hdr: Option<&Multimap>,
        body: Option<R>,
    ) -> Result<(), Error> {
        if let Some(hdr) = hdr.filter(|h| !h.is_empty()) {
            self.read_header(hdr);
        }

        match body {
            Some(body) => self.read_body(body).map_err(Error::from),
            None => Ok(()),
        }
    }

    fn read_header(&mut self, hdr: &Multimap) {
        self.links.clear();
        self.meta.clear();
        self.index.clear();

        for (k, vals) in hdr.iter_all() {
            let first = match vals.first() {
                Some(v) => v,
                None => continue,
            };
            let key = canonical_header_key(k);

            match key.as_ref() {
                CONTENT_TYPE => self.content_type = first.clone(),
                LAST_MODIFIED => match from_http_header_value(first) {
                    Ok(t) => self.last_modified = Some(t),
                    Err(e) => log::debug!("ignoring Last-Modified {first:?}: {e}"),
                },
                X_RIAK_VCLOCK => self.vclock = first.clone(),
                ETAG => self.etag = first.clone(),
                LINK => {
                    for val in vals {
                        parse_links(val, &mut self.links);
                    }
                }
                LOCATION => {
                    if let Some((bucket, key)) = parse_location(first) {
                        self.assign_address(bucket, key);
                    }
                }
                other => {
                    if let Some(meta_key) = other.strip_prefix(X_RIAK_META_PREFIX) {
                        if !meta_key.is_empty() {
                            self.meta.insert(meta_key.to_string(), first.clone());
                        }
                    } else if let Some(index_key) = other.strip_prefix(X_RIAK_INDEX_PREFIX) {
                        if !index_key.is_empty() {
                            self.add_index(index_key, first);
                        }
                    }
                }
            }
        }
    }

    fn read_body<R: Read>(&mut self, mut body: R) -> io::Result<()> {
        let buf = self.body.get_or_insert_with(BytesMut::new);
        buf.clear();
        let mut writer = BufMut::writer(buf);
        io::copy(&mut body, &mut writer)?;
        Ok(())
    }
}

// Keys are written canonicalized. When several map keys fold to the same
// header, the one already in canonical form wins, then the greatest value.
fn write_prefixed(hdr: &mut Multimap, prefix: &str, map: &HashMap<String, String>) {
    let mut entries: Vec<(Cow<'_, str>, bool, &String)> = map
        .iter()
        .map(|(key, val)| {
            let canonical = canonical_header_key(key);
            let exact = canonical == key.as_str();
            (canonical, exact, val)
        })
        .collect();
    entries.sort();

    for (key, _, val) in entries {
        hdr.set(format!("{prefix}{key}"), val.as_str());
    }
}

/// Splits a `Location` value (`/riak/bucket/key` or
/// `/buckets/bucket/keys/key`) into bucket and key.
pub fn parse_location(location: &str) -> Option<(&str, &str)> {
    let path = location.split('?').next().unwrap_or_default();
    if let Some(rest) = path.strip_prefix("/riak/") {
        return rest.split_once('/').filter(|(b, k)| !b.is_empty() && !k.is_empty());
    }
    let rest = path.strip_prefix("/buckets/")?;
    let (bucket, key) = rest.split_once("/keys/")?;
    if bucket.is_empty() || key.is_empty() {
        return None;
    }
    Some((bucket, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riak::object::Link;
    use crate::riak::utils::utc_now;
    use chrono::Timelike;
    use std::collections::HashMap;

    fn populated() -> Object {
        let mut obj = Object::default();
        obj.content_type = "text/plain".into();
        obj.vclock = "125g85gu90[g89-]".into();
        obj.etag = "h801235hi0ggasty890".into();
        obj.last_modified = Some(utc_now().with_nanosecond(0).unwrap());
        obj.add_link("result", "blah", "rs1");
        obj.add_link("other", "things", "j90");
        obj.add_meta("Agent", "testing");
        obj.add_index("Username", "Bob");
        obj
    }

    #[test]
    fn test_write_header() {
        let obj = populated();
        let t = obj.last_modified.unwrap();
        let header = obj.to_header();

        let mut wanted = Multimap::new();
        wanted.add("Content-Type", "text/plain");
        wanted.add("X-Riak-Vclock", "125g85gu90[g89-]");
        wanted.add("Etag", "h801235hi0ggasty890");
        wanted.add("Last-Modified", to_http_header_value(t));
        wanted.add(
            "Link",
            "</riak/things/j90>; riaktag=\"other\", </riak/blah/rs1>; riaktag=\"result\"",
        );
        wanted.add("X-Riak-Meta-Agent", "testing");
        wanted.add("X-Riak-Index-Username", "Bob");

        assert_eq!(header, wanted);
    }

    #[test]
    fn test_write_header_canonicalizes_map_keys() {
        let mut obj = Object::default();
        obj.meta.insert("agent".into(), "testing".into());
        obj.index.insert("username_bin".into(), "bob".into());

        let header = obj.to_header();
        assert!(header.contains_key("X-Riak-Meta-Agent"));
        assert!(header.contains_key("X-Riak-Index-Username_bin"));
        assert!(!header.contains_key("X-Riak-Meta-agent"));

        let mut decoded = Object::default();
        decoded.from_response(Some(&header), None::<&[u8]>).unwrap();
        assert_eq!(decoded.get_meta("agent"), Some("testing"));
        assert_eq!(decoded.get_index("USERNAME_BIN"), "bob");
        assert_eq!(decoded.to_header(), header);
    }

    #[test]
    fn test_write_header_colliding_map_keys() {
        let mut obj = Object::default();
        obj.meta.insert("agent".into(), "one".into());
        obj.meta.insert("Agent".into(), "two".into());
        obj.meta.insert("AGENT".into(), "three".into());

        let header = obj.to_header();
        assert_eq!(header.get_vec("X-Riak-Meta-Agent"), Some(&vec!["two".to_string()]));
        assert_eq!(header.get_all_ci("x-riak-meta-agent"), ["two"]);
    }

    #[test]
    fn test_write_header_defaults_and_omissions() {
        let header = Object::default().to_header();
        assert_eq!(header.len(), 1);
        assert_eq!(header.get_ci("content-type"), Some(DEFAULT_CONTENT_TYPE));
        assert!(header.get_ci(LAST_MODIFIED).is_none());
        assert!(header.get_ci(LINK).is_none());
        assert!(header.get_ci(X_RIAK_VCLOCK).is_none());
    }

    #[test]
    fn test_round_trip() {
        let obj = populated();
        let mut decoded = Object::default();
        decoded
            .from_response(Some(&obj.to_header()), None::<&[u8]>)
            .unwrap();
        assert_eq!(decoded, obj);
    }

    #[test]
    fn test_round_trip_with_body() {
        let obj = populated().with_body("Testing, 1, 2, 3");
        let mut decoded = Object::default();
        decoded
            .from_response(Some(&obj.to_header()), Some(obj.body_bytes()))
            .unwrap();
        assert_eq!(decoded, obj);
    }

    #[test]
    fn test_index_accessors_survive_round_trip() {
        let pairs: HashMap<&str, &str> = [
            ("indexKey", "value"),
            ("CAPSKEY", "otherval"),
            ("lower_snake", "whaarrrgarbbblll"),
        ]
        .into_iter()
        .collect();

        let mut obj = Object::default();
        for (k, v) in &pairs {
            obj.add_index(k, v);
        }
        let mut decoded = Object::default();
        decoded
            .from_response(Some(&obj.to_header()), None::<&[u8]>)
            .unwrap();
        for (k, v) in &pairs {
            assert_eq!(decoded.get_index(k), *v, "index {k}");
        }
    }

    #[test]
    fn test_read_lowercase_wire_headers() {
        let mut hdr = Multimap::new();
        hdr.add("content-type", "application/json");
        hdr.add("x-riak-vclock", "a85hYGBgzGDKBVIcR4M2cgczH7HPYEpkzGNlsP");
        hdr.add("etag", "\"6NW2Va5r7Y4jYxXVMGSp5w\"");
        hdr.add("last-modified", "Mon, 02 Jan 2006 15:04:05 GMT");
        hdr.add("link", "</riak/test>; rel=\"up\"");
        hdr.add("link", "</riak/test/doc2>; riaktag=\"next\"");
        hdr.add("x-riak-meta-color", "blue");
        hdr.add("x-riak-index-email_bin", "bob@example.com");
        hdr.add("x-riak-index-email_bin", "ignored@example.com");
        hdr.add("server", "MochiWeb/1.1 WebMachine/1.10.8");

        let mut obj = Object::new("test", "doc1");
        obj.from_response(Some(&hdr), None::<&[u8]>).unwrap();

        assert_eq!(obj.content_type, "application/json");
        assert_eq!(obj.vclock, "a85hYGBgzGDKBVIcR4M2cgczH7HPYEpkzGNlsP");
        assert_eq!(obj.etag, "\"6NW2Va5r7Y4jYxXVMGSp5w\"");
        assert_eq!(
            to_http_header_value(obj.last_modified.unwrap()),
            "Mon, 02 Jan 2006 15:04:05 GMT"
        );
        assert_eq!(obj.links.len(), 1);
        assert_eq!(obj.get_link("next"), Some(&Link::new("test", "doc2")));
        assert_eq!(obj.get_meta("color"), Some("blue"));
        assert_eq!(obj.get_index("EMAIL_BIN"), "bob@example.com");
    }

    #[test]
    fn test_new_headers_replace_maps() {
        let mut obj = populated();
        let mut hdr = Multimap::new();
        hdr.add("X-Riak-Meta-Fresh", "yes");

        obj.from_response(Some(&hdr), None::<&[u8]>).unwrap();
        assert!(obj.links.is_empty());
        assert!(obj.index.is_empty());
        assert_eq!(obj.meta.len(), 1);
        assert_eq!(obj.get_meta("fresh"), Some("yes"));
        // scalar fields absent from the response stay as they were
        assert_eq!(obj.vclock, "125g85gu90[g89-]");
    }

    #[test]
    fn test_body_only_decode_keeps_maps() {
        let mut obj = populated().with_body("old");
        let before = obj.clone();

        obj.from_response(None, Some(&b"new body"[..])).unwrap();
        assert_eq!(obj.body_bytes(), b"new body");
        assert_eq!(obj.links, before.links);
        assert_eq!(obj.meta, before.meta);
        assert_eq!(obj.index, before.index);

        obj.from_response(Some(&Multimap::new()), Some(&b"again"[..]))
            .unwrap();
        assert_eq!(obj.body_bytes(), b"again");
        assert_eq!(obj.links, before.links);
    }

    #[test]
    fn test_malformed_last_modified_keeps_previous() {
        let mut obj = populated();
        let t = obj.last_modified;
        let mut hdr = Multimap::new();
        hdr.add("Last-Modified", "not a date");
        obj.from_response(Some(&hdr), None::<&[u8]>).unwrap();
        assert_eq!(obj.last_modified, t);
    }

    #[test]
    fn test_empty_value_list_is_noop() {
        let mut hdr = Multimap::new();
        hdr.insert_many("X-Riak-Meta-Empty".to_string(), Vec::<String>::new());
        hdr.insert_many("Content-Type".to_string(), Vec::<String>::new());

        let mut obj = Object::default().with_content_type("text/html");
        obj.from_response(Some(&hdr), None::<&[u8]>).unwrap();
        assert!(obj.meta.is_empty());
        assert_eq!(obj.content_type, "text/html");
    }

    #[test]
    fn test_location_addresses_unkeyed_object() {
        let mut hdr = Multimap::new();
        hdr.add("Location", "/riak/testing/Z4Ikp7IcTvxBqiyb3ljWgnGQyLX");

        let mut obj = Object::in_bucket("testing");
        obj.from_response(Some(&hdr), None::<&[u8]>).unwrap();
        assert_eq!(obj.key(), "Z4Ikp7IcTvxBqiyb3ljWgnGQyLX");

        let mut keyed = Object::new("testing", "mine");
        keyed.from_response(Some(&hdr), None::<&[u8]>).unwrap();
        assert_eq!(keyed.key(), "mine");
    }

    #[test]
    fn test_parse_location() {
        assert_eq!(parse_location("/riak/b/k"), Some(("b", "k")));
        assert_eq!(parse_location("/buckets/b/keys/k"), Some(("b", "k")));
        assert_eq!(parse_location("/riak/b/k?returnbody=true"), Some(("b", "k")));
        assert_eq!(parse_location("/riak/b"), None);
        assert_eq!(parse_location("/riak//k"), None);
        assert_eq!(parse_location("/elsewhere"), None);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    #[test]
    fn test_body_read_error_propagates() {
        let mut obj = Object::default();
        let err = obj
            .from_response(None, Some(FailingReader))
            .unwrap_err();
        assert!(matches!(err, Error::IOError(e) if e.kind() == io::ErrorKind::ConnectionReset));
    }
}
