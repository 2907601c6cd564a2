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

//! The `Link` header microformat.
//!
//! Each link is written as `</riak/{bucket}/{key}>; riaktag="{tag}"` and
//! entries are joined with `", "`. An empty bucket or key is written as the
//! placeholder `_`.

use crate::riak::object::{Link, Links};
use lazy_static::lazy_static;
use regex::Regex;

/// Path segment standing in for an empty bucket or key.
pub const PLACEHOLDER: &str = "_";

lazy_static! {
    // groups: full match, bucket, key, tag
    static ref LINK_REGEX: Regex =
        Regex::new(r#"</riak/([^/>]*)/([^>]*)>;\s*riaktag="([^"]*)""#).unwrap();
}

fn segment(s: &str) -> &str {
    if s.is_empty() { PLACEHOLDER } else { s }
}

fn unsegment(s: &str) -> &str {
    if s == PLACEHOLDER { "" } else { s }
}

/// Parses one `Link` header value into `links`. Text that does not match
/// the microformat, such as the `rel="up"` link Riak adds to every object,
/// is ignored.
pub fn parse_links(value: &str, links: &mut Links) {
    for caps in LINK_REGEX.captures_iter(value) {
        let (bucket, key, tag) = match (caps.get(1), caps.get(2), caps.get(3)) {
            (Some(b), Some(k), Some(t)) => (b.as_str(), k.as_str(), t.as_str()),
            _ => continue,
        };
        links.insert(tag.to_string(), Link::new(unsegment(bucket), unsegment(key)));
    }
}

/// Formats `links` as a single `Link` header value. Entries are ordered by
/// tag so the output is stable.
pub fn format_links(links: &Links) -> String {
    let mut tags: Vec<&String> = links.keys().collect();
    tags.sort();

    let mut value = String::with_capacity(64 * tags.len());
    for tag in tags {
        let link = &links[tag];
        if !value.is_empty() {
            value.push_str(", ");
        }
        value.push_str("</riak/");
        value.push_str(segment(&link.bucket));
        value.push('/');
        value.push_str(segment(&link.key));
        value.push_str(">; riaktag=\"");
        value.push_str(tag);
        value.push('"');
    }
    value
}

/// Link-walking path for a single phase:
/// `/riak/{bucket}/{key}/{target bucket|_},{tag},_`
pub fn walk_path(bucket: &str, key: &str, target_bucket: &str, tag: &str) -> String {
    let mut path = String::with_capacity(16 + bucket.len() + key.len() + tag.len());
    path.push_str("/riak/");
    path.push_str(bucket);
    path.push('/');
    path.push_str(key);
    path.push('/');
    path.push_str(segment(target_bucket));
    path.push(',');
    path.push_str(segment(tag));
    path.push(',');
    path.push_str(PLACEHOLDER);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links_of(entries: &[(&str, &str, &str)]) -> Links {
        entries
            .iter()
            .map(|(t, b, k)| (t.to_string(), Link::new(b, k)))
            .collect()
    }

    #[test]
    fn test_format_single() {
        let links = links_of(&[("result", "blah", "rs1")]);
        assert_eq!(format_links(&links), "</riak/blah/rs1>; riaktag=\"result\"");
    }

    #[test]
    fn test_format_many_sorted() {
        let links = links_of(&[("result", "blah", "rs1"), ("other", "things", "j90")]);
        assert_eq!(
            format_links(&links),
            "</riak/things/j90>; riaktag=\"other\", </riak/blah/rs1>; riaktag=\"result\""
        );
    }

    #[test]
    fn test_round_trip_sizes() {
        for entries in [
            vec![],
            vec![("child", "testing", "anotherKey")],
            vec![("a", "b1", "k1"), ("b", "b2", "k2"), ("c", "b3", "k3")],
        ] {
            let links = links_of(&entries);
            let mut parsed = Links::new();
            parse_links(&format_links(&links), &mut parsed);
            assert_eq!(parsed, links);
        }
    }

    #[test]
    fn test_placeholder_round_trip() {
        let links = links_of(&[("nobucket", "", "k"), ("nokey", "b", ""), ("neither", "", "")]);
        let value = format_links(&links);
        assert!(value.contains("</riak/_/k>"));
        assert!(value.contains("</riak/b/_>"));
        assert!(value.contains("</riak/_/_>"));

        let mut parsed = Links::new();
        parse_links(&value, &mut parsed);
        assert_eq!(parsed, links);
    }

    #[test]
    fn test_parse_ignores_foreign_links() {
        let mut links = Links::new();
        parse_links(
            "</riak/test>; rel=\"up\", </riak/test/doc2>; riaktag=\"next\"",
            &mut links,
        );
        assert_eq!(links, links_of(&[("next", "test", "doc2")]));

        let mut links = Links::new();
        parse_links("garbage", &mut links);
        parse_links("", &mut links);
        assert!(links.is_empty());
    }

    #[test]
    fn test_parse_tolerates_missing_space() {
        let mut links = Links::new();
        parse_links("</riak/b/k>;riaktag=\"t\"", &mut links);
        assert_eq!(links, links_of(&[("t", "b", "k")]));
    }

    #[test]
    fn test_walk_path() {
        assert_eq!(
            walk_path("testing", "testKey", "testing", "child"),
            "/riak/testing/testKey/testing,child,_"
        );
        assert_eq!(walk_path("a", "b", "", "friend"), "/riak/a/b/_,friend,_");
    }

    fn clean(s: &str) -> String {
        s.chars().filter(char::is_ascii_alphanumeric).collect()
    }

    quickcheck! {
        fn prop_link_round_trip(entries: Vec<(String, String, String)>) -> bool {
            let links: Links = entries
                .iter()
                .map(|(t, b, k)| (clean(t), Link { bucket: clean(b), key: clean(k) }))
                .collect();
            let mut parsed = Links::new();
            parse_links(&format_links(&links), &mut parsed);
            parsed == links
        }
    }
}
