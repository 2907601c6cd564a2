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

// Names are in canonical MIME form; see `utils::canonical_header_key`.

pub const CONTENT_TYPE: &str = "Content-Type";
pub const LAST_MODIFIED: &str = "Last-Modified";
pub const ETAG: &str = "Etag";
pub const LINK: &str = "Link";
pub const LOCATION: &str = "Location";
pub const ACCEPT: &str = "Accept";

pub const IF_MATCH: &str = "If-Match";
pub const IF_NONE_MATCH: &str = "If-None-Match";
pub const IF_MODIFIED_SINCE: &str = "If-Modified-Since";
pub const IF_UNMODIFIED_SINCE: &str = "If-Unmodified-Since";

pub const X_RIAK_VCLOCK: &str = "X-Riak-Vclock";
pub const X_RIAK_CLIENT_ID: &str = "X-Riak-Clientid";

pub const X_RIAK_META_PREFIX: &str = "X-Riak-Meta-";
pub const X_RIAK_INDEX_PREFIX: &str = "X-Riak-Index-";

pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";
pub const MULTIPART_MIXED: &str = "multipart/mixed";
pub const APPLICATION_JSON: &str = "application/json";

/// First line of a plain-text sibling listing.
pub const SIBLINGS_MARKER: &str = "Siblings:";
