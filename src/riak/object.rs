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

//! The Riak object and its attribute containers.

use crate::riak::utils::{UtcTime, canonical_header_key};
use bytes::BytesMut;
use std::collections::HashMap;

/// Target of a named link: the unique bucket/key tuple of another object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Link {
    pub bucket: String,
    pub key: String,
}

impl Link {
    pub fn new(bucket: &str, key: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
        }
    }
}

/// Links keyed by tag (`riaktag`); one target per tag.
pub type Links = HashMap<String, Link>;

/// A Riak object: addressing, representation metadata and body.
///
/// This package does not escape strings before forming URL paths, so
/// bucket and key must already be URL-safe.
///
/// Bucket and key are set once, at construction or from the `Location`
/// header of a create, and are cleared only by [`Object::hard_reset`].
#[derive(Clone, Debug, Default)]
pub struct Object {
    bucket: String,
    key: String,
    /// `Content-Type`; `text/plain` is sent when empty.
    pub content_type: String,
    /// Last seen vector clock (`X-Riak-Vclock`), opaque.
    pub vclock: String,
    /// `Etag` of the last seen representation.
    pub etag: String,
    /// `Last-Modified`.
    pub last_modified: Option<UtcTime>,
    /// `Link: </riak/bucket/key>; riaktag="tag"`
    pub links: Links,
    /// `X-Riak-Meta-*`
    pub meta: HashMap<String, String>,
    /// `X-Riak-Index-*`
    pub index: HashMap<String, String>,
    pub body: Option<BytesMut>,
}

impl Object {
    pub fn new(bucket: &str, key: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
            ..Default::default()
        }
    }

    /// Creates an object that lets the server pick its key on create.
    pub fn in_bucket(bucket: &str) -> Self {
        Self::new(bucket, "")
    }

    /// Sets the body, replacing any previous content.
    pub fn with_body<B: AsRef<[u8]>>(mut self, body: B) -> Self {
        self.set_body(body);
        self
    }

    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.to_string();
        self
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns `true` once both bucket and key are known.
    pub fn is_addressed(&self) -> bool {
        !self.bucket.is_empty() && !self.key.is_empty()
    }

    /// Assigns bucket and key unless the object is already addressed.
    pub(crate) fn assign_address(&mut self, bucket: &str, key: &str) {
        if self.is_addressed() {
            return;
        }
        if self.bucket.is_empty() {
            self.bucket = bucket.to_string();
        }
        if self.bucket == bucket {
            self.key = key.to_string();
        }
    }

    /// Body bytes; empty when there is no body.
    pub fn body_bytes(&self) -> &[u8] {
        self.body.as_deref().unwrap_or_default()
    }

    /// Replaces the body, reusing the existing buffer.
    pub fn set_body<B: AsRef<[u8]>>(&mut self, body: B) {
        let buf = self.body.get_or_insert_with(BytesMut::new);
        buf.clear();
        buf.extend_from_slice(body.as_ref());
    }

    /// Appends to the body.
    pub fn append_body<B: AsRef<[u8]>>(&mut self, data: B) {
        self.body
            .get_or_insert_with(BytesMut::new)
            .extend_from_slice(data.as_ref());
    }

    /// Adds a named key/bucket link, replacing a previous link with the same tag.
    pub fn add_link(&mut self, tag: &str, bucket: &str, key: &str) {
        self.links.insert(tag.to_string(), Link::new(bucket, key));
    }

    /// Links this object to `target` under `tag`.
    pub fn add_link_to(&mut self, tag: &str, target: &Object) {
        self.add_link(tag, &target.bucket, &target.key);
    }

    pub fn remove_link(&mut self, tag: &str) {
        self.links.remove(tag);
    }

    pub fn get_link(&self, tag: &str) -> Option<&Link> {
        self.links.get(tag)
    }

    /// Registers `value` under the secondary index `index`, overwriting the
    /// previous value. Index names are case-insensitive.
    pub fn add_index(&mut self, index: &str, value: &str) {
        self.index
            .insert(canonical_header_key(index).into_owned(), value.to_string());
    }

    /// Returns the value of a secondary index, or an empty string if it is
    /// not set.
    pub fn get_index(&self, index: &str) -> &str {
        self.index
            .get(canonical_header_key(index).as_ref())
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn remove_index(&mut self, index: &str) {
        self.index.remove(canonical_header_key(index).as_ref());
    }

    /// Sets user metadata. Keys are case-insensitive.
    pub fn add_meta(&mut self, key: &str, value: &str) {
        self.meta
            .insert(canonical_header_key(key).into_owned(), value.to_string());
    }

    pub fn get_meta(&self, key: &str) -> Option<&str> {
        self.meta
            .get(canonical_header_key(key).as_ref())
            .map(String::as_str)
    }

    pub fn remove_meta(&mut self, key: &str) {
        self.meta.remove(canonical_header_key(key).as_ref());
    }

    /// `/riak/bucket/key`
    pub fn path(&self) -> String {
        object_path(&self.bucket, &self.key)
    }

    /// Clears every field. Maps and body keep their allocations.
    pub fn hard_reset(&mut self) {
        self.links.clear();
        self.meta.clear();
        self.index.clear();
        if let Some(b) = self.body.as_mut() {
            b.clear();
        }
        self.last_modified = None;
        self.bucket.clear();
        self.key.clear();
        self.content_type.clear();
        self.vclock.clear();
        self.etag.clear();
    }
}

// An absent body equals an empty one; maps are compared by content.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.bucket == other.bucket
            && self.key == other.key
            && self.content_type == other.content_type
            && self.vclock == other.vclock
            && self.etag == other.etag
            && self.last_modified == other.last_modified
            && self.links == other.links
            && self.meta == other.meta
            && self.index == other.index
            && self.body_bytes() == other.body_bytes()
    }
}

impl Eq for Object {}

/// `/riak/bucket/key`
pub fn object_path(bucket: &str, key: &str) -> String {
    let mut path = String::with_capacity(7 + bucket.len() + key.len());
    path.push_str("/riak/");
    path.push_str(bucket);
    path.push('/');
    path.push_str(key);
    path
}

/// `/riak/bucket`, the target of a server-assigned-key create.
pub fn bucket_path(bucket: &str) -> String {
    format!("/riak/{bucket}")
}
