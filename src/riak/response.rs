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

//! Responses for [`RiakClient`](crate::riak::client::RiakClient) APIs

mod bucket_props;
mod buckets;
mod delete_object;
mod fetch_object;
mod index_lookup;
mod store_object;
mod update_object;
mod walk_link;

pub use bucket_props::*;
pub use buckets::*;
pub use delete_object::*;
pub use fetch_object::*;
pub use index_lookup::*;
pub use store_object::*;
pub use update_object::*;
pub use walk_link::*;

use crate::riak::error::Error;
use bytes::Bytes;
use http::HeaderMap;
use serde::de::DeserializeOwned;
use std::mem;

/// Splits a response into status code, headers and the fully read body.
pub(crate) async fn take_response(
    mut resp: reqwest::Response,
) -> Result<(u16, HeaderMap, Bytes), Error> {
    let status = resp.status().as_u16();
    let headers = mem::take(resp.headers_mut());
    let body = resp.bytes().await?;
    Ok((status, headers, body))
}

/// Decodes a JSON body, failing with [`Error::InvalidBody`] when it is empty.
pub(crate) fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::InvalidBody);
    }
    Ok(serde_json::from_slice(body)?)
}
