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

use crate::riak::utils::urlencode;
use http::HeaderMap;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds a multimap to the current multimap
    fn add_multimap(&mut self, other: Multimap);

    /// Replaces all values stored under a key equal to `key` ignoring ASCII
    /// case. The casing already stored wins; `key` is used only when no such
    /// entry exists.
    fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Removes every key equal to `key` ignoring ASCII case, returning the
    /// number of keys removed.
    fn remove_ci(&mut self, key: &str) -> usize;

    /// Returns the first value stored under `key`, ignoring ASCII case.
    fn get_ci(&self, key: &str) -> Option<&str>;

    /// Returns every value stored under keys equal to `key` ignoring ASCII case.
    fn get_all_ci(&self, key: &str) -> Vec<&str>;

    /// Converts multimap to HTTP query string
    fn to_query_string(&self) -> String;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            self.insert_many(key, values);
        }
    }

    fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        let existing: Vec<String> = self
            .keys()
            .filter(|k| k.eq_ignore_ascii_case(&key))
            .cloned()
            .collect();

        let target = match existing.first() {
            Some(first) => first.clone(),
            None => key,
        };
        for k in &existing {
            self.remove(k);
        }
        self.insert(target, value.into());
    }

    fn remove_ci(&mut self, key: &str) -> usize {
        let matching: Vec<String> = self
            .keys()
            .filter(|k| k.eq_ignore_ascii_case(key))
            .cloned()
            .collect();
        for k in &matching {
            self.remove(k);
        }
        matching.len()
    }

    fn get_ci(&self, key: &str) -> Option<&str> {
        self.iter_all()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .and_then(|(_, values)| values.first())
            .map(String::as_str)
    }

    fn get_all_ci(&self, key: &str) -> Vec<&str> {
        self.iter_all()
            .filter(|(k, _)| k.eq_ignore_ascii_case(key))
            .flat_map(|(_, values)| values.iter().map(String::as_str))
            .collect()
    }

    fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, values) in self.iter_all() {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&urlencode(key));
                query.push('=');
                query.push_str(&urlencode(value));
            }
        }
        query
    }
}

/// Copies a response header map into a [`Multimap`]. Values that are not
/// visible ASCII are decoded lossily.
pub fn from_header_map(headers: &HeaderMap) -> Multimap {
    let mut map = Multimap::new();
    for (name, value) in headers.iter() {
        map.insert(
            name.as_str().to_string(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        );
    }
    map
}
