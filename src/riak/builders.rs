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

//! Argument builders for [`RiakClient`](crate::riak::client::RiakClient) APIs

mod bucket_common;
mod bucket_props;
mod buckets;
mod delete_object;
mod fetch_object;
mod index_lookup;
mod store_object;
mod update_object;
mod walk_link;

pub use bucket_common::*;
pub use bucket_props::*;
pub use buckets::*;
pub use delete_object::*;
pub use fetch_object::*;
pub use index_lookup::*;
pub use store_object::*;
pub use update_object::*;
pub use walk_link::*;

use crate::riak::multimap_ext::{Multimap, MultimapExt};

/// Adds `name=value` to `query` when a value is given.
pub(crate) fn add_param<V: ToString>(query: &mut Multimap, name: &str, value: Option<V>) {
    if let Some(v) = value {
        query.add(name, v.to_string());
    }
}
