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
use crate::riak::object::Object;
use crate::riak::response::take_response;
use crate::riak::response_traits::{HasBucket, HasKey};
use crate::riak::types::{FromRiakResponse, RiakRequest};
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;

/// Response of [`update_object`](crate::riak::client::RiakClient::update_object).
#[derive(Clone, Debug)]
pub struct UpdateObjectResponse {
    request: RiakRequest,
    headers: HeaderMap,
    /// `false` when the server answered `304 Not Modified`.
    pub modified: bool,
    body: Bytes,
}

impl_has_riak_fields!(UpdateObjectResponse);

impl HasBucket for UpdateObjectResponse {}
impl HasKey for UpdateObjectResponse {}

impl UpdateObjectResponse {
    pub(crate) fn apply_to(&self, object: &mut Object) -> Result<(), Error> {
        if !self.modified {
            return Ok(());
        }
        let hdr = from_header_map(&self.headers);
        object.from_response(Some(&hdr), Some(&self.body[..]))
    }
}

#[async_trait]
impl FromRiakResponse for UpdateObjectResponse {
    async fn from_riak_response(
        request: RiakRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let (status, headers, body) = take_response(response?).await?;
        if status == 300 {
            return Err(sibling_error(&from_header_map(&headers), &body));
        }
        Ok(Self {
            request,
            headers,
            modified: status != 304,
            body,
        })
    }
}
