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

use crate::impl_has_riak_fields;
use crate::riak::conflict::sibling_error;
use crate::riak::error::Error;
use crate::riak::multimap_ext::from_header_map;
use crate::riak::multipart::{PartialObjects, decode_objects};
use crate::riak::object::Object;
use crate::riak::response::take_response;
use crate::riak::response_traits::{HasBucket, HasKey};
use crate::riak::types::{FromRiakResponse, RiakRequest};
use async_trait::async_trait;
use http::HeaderMap;

/// Response of [`walk_link`](crate::riak::client::RiakClient::walk_link).
///
/// A part that fails to decode does not fail the walk: the objects decoded
/// around it are kept and the last such error is reported in `error`.
#[derive(Debug)]
pub struct WalkLinkResponse {
    request: RiakRequest,
    headers: HeaderMap,
    /// Objects reached by the walk, taken from the object pool.
    pub objects: Vec<Object>,
    /// Last part or framing error met while decoding.
    pub error: Option<Box<Error>>,
}

impl_has_riak_fields!(WalkLinkResponse);

impl HasBucket for WalkLinkResponse {}
impl HasKey for WalkLinkResponse {}

impl WalkLinkResponse {
    /// Returns the objects, or the decoding error if there is one.
    pub fn into_objects(self) -> Result<Vec<Object>, Error> {
        PartialObjects {
            objects: self.objects,
            error: self.error,
        }
        .into_result()
    }
}

#[async_trait]
impl FromRiakResponse for WalkLinkResponse {
    async fn from_riak_response(
        request: RiakRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let (status, headers, body) = take_response(response?).await?;
        let hdr = from_header_map(&headers);
        match status {
            300 => return Err(sibling_error(&hdr, &body)),
            304 => return Err(Error::StatusCode(status)),
            _ => {}
        }

        let PartialObjects { objects, error } = decode_objects(&hdr, &body[..]);
        Ok(Self {
            request,
            headers,
            objects,
            error,
        })
    }
}
