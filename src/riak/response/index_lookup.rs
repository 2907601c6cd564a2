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
use crate::riak::error::Error;
use crate::riak::response::{parse_json, take_response};
use crate::riak::response_traits::HasBucket;
use crate::riak::types::{FromRiakResponse, RiakRequest};
use async_trait::async_trait;
use http::HeaderMap;
use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct KeyList {
    pub(crate) keys: Vec<String>,
}

/// Response of [`index_lookup`](crate::riak::client::RiakClient::index_lookup)
/// and [`index_range`](crate::riak::client::RiakClient::index_range).
#[derive(Clone, Debug)]
pub struct IndexLookupResponse {
    request: RiakRequest,
    headers: HeaderMap,
    /// Keys whose index value matched, in server order.
    pub keys: Vec<String>,
}

impl_has_riak_fields!(IndexLookupResponse);

impl HasBucket for IndexLookupResponse {}

#[async_trait]
impl FromRiakResponse for IndexLookupResponse {
    async fn from_riak_response(
        request: RiakRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let (status, headers, body) = take_response(response?).await?;
        if status != 200 {
            return Err(Error::StatusCode(status));
        }
        let KeyList { keys } = parse_json(&body)?;
        Ok(Self {
            request,
            headers,
            keys,
        })
    }
}
