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
use crate::riak::pool;
use crate::riak::response::take_response;
use crate::riak::response_traits::{HasBucket, HasKey, HasVclock};
use crate::riak::types::{FromRiakResponse, RiakRequest};
use async_trait::async_trait;
use http::HeaderMap;

/// Response of [`fetch_object`](crate::riak::client::RiakClient::fetch_object).
#[derive(Debug)]
pub struct FetchObjectResponse {
    request: RiakRequest,
    headers: HeaderMap,
    /// The fetched object, taken from the object pool. Hand it back with
    /// [`pool::release`] once done.
    pub object: Object,
}

impl_has_riak_fields!(FetchObjectResponse);

impl HasBucket for FetchObjectResponse {}
impl HasKey for FetchObjectResponse {}
impl HasVclock for FetchObjectResponse {}

#[async_trait]
impl FromRiakResponse for FetchObjectResponse {
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

        let mut object = pool::acquire();
        object.assign_address(
            request.bucket.as_deref().unwrap_or_default(),
            request.key.as_deref().unwrap_or_default(),
        );
        if let Err(e) = object.from_response(Some(&hdr), Some(&body[..])) {
            pool::release(object);
            return Err(e);
        }

        Ok(Self {
            request,
            headers,
            object,
        })
    }
}
