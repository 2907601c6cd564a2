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
use crate::riak::header::parse_location;
use crate::riak::header_constants::LOCATION;
use crate::riak::multimap_ext::{MultimapExt, from_header_map};
use crate::riak::object::Object;
use crate::riak::response::take_response;
use crate::riak::response_traits::{HasBucket, HasKey, HasVclock};
use crate::riak::types::{FromRiakResponse, RiakRequest};
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;

/// Response of [`store_object`](crate::riak::client::RiakClient::store_object),
/// [`merge_object`](crate::riak::client::RiakClient::merge_object) and
/// [`create_object`](crate::riak::client::RiakClient::create_object).
#[derive(Clone, Debug)]
pub struct StoreObjectResponse {
    request: RiakRequest,
    headers: HeaderMap,
    /// `200`, `201` (created) or `204` (stored, no body returned).
    pub status: u16,
    body: Bytes,
}

impl_has_riak_fields!(StoreObjectResponse);

impl HasBucket for StoreObjectResponse {}
impl HasKey for StoreObjectResponse {}
impl HasVclock for StoreObjectResponse {}

impl StoreObjectResponse {
    /// Bucket and key of the stored object, from the `Location` header of a
    /// create.
    pub fn location(&self) -> Option<(&str, &str)> {
        self.headers
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_location)
    }

    /// Brings `object` in line with the stored representation.
    ///
    /// With a returned body the whole representation is decoded into the
    /// object. Otherwise only a server-assigned key is taken over; links,
    /// metadata and indexes stay as written.
    pub(crate) fn apply_to(&self, object: &mut Object, return_body: bool) -> Result<(), Error> {
        let hdr = from_header_map(&self.headers);
        if return_body && self.status != 204 {
            return object.from_response(Some(&hdr), Some(&self.body[..]));
        }
        if let Some((bucket, key)) = hdr.get_ci(LOCATION).and_then(parse_location) {
            object.assign_address(bucket, key);
        }
        Ok(())
    }
}

#[async_trait]
impl FromRiakResponse for StoreObjectResponse {
    async fn from_riak_response(
        request: RiakRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let (status, headers, body) = take_response(response?).await?;
        match status {
            // allow_mult bucket returning every sibling of the new write
            300 => Err(sibling_error(&from_header_map(&headers), &body)),
            304 => Err(Error::StatusCode(status)),
            _ => Ok(Self {
                request,
                headers,
                status,
                body,
            }),
        }
    }
}
