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

use crate::riak::error::Error;
use crate::riak::response::{parse_json, take_response};
use crate::riak::response_traits::HasBucket;
use crate::riak::types::{BucketProps, FromRiakResponse, PropsEnvelope, RiakRequest};
use crate::{impl_from_riak_response, impl_has_riak_fields};
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;

/// Response of [`get_bucket_props`](crate::riak::client::RiakClient::get_bucket_props).
#[derive(Clone, Debug)]
pub struct GetBucketPropsResponse {
    request: RiakRequest,
    headers: HeaderMap,
    pub props: BucketProps,
}

impl_has_riak_fields!(GetBucketPropsResponse);

impl HasBucket for GetBucketPropsResponse {}

#[async_trait]
impl FromRiakResponse for GetBucketPropsResponse {
    async fn from_riak_response(
        request: RiakRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let (status, headers, body) = take_response(response?).await?;
        if status != 200 {
            return Err(Error::StatusCode(status));
        }
        let PropsEnvelope { props } = parse_json(&body)?;
        Ok(Self {
            request,
            headers,
            props,
        })
    }
}

/// Response of [`set_bucket_props`](crate::riak::client::RiakClient::set_bucket_props).
#[derive(Clone, Debug)]
pub struct SetBucketPropsResponse {
    request: RiakRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_riak_response!(SetBucketPropsResponse);
impl_has_riak_fields!(SetBucketPropsResponse);

impl HasBucket for SetBucketPropsResponse {}

/// Response of [`reset_bucket_props`](crate::riak::client::RiakClient::reset_bucket_props).
#[derive(Clone, Debug)]
pub struct ResetBucketPropsResponse {
    request: RiakRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_riak_response!(ResetBucketPropsResponse);
impl_has_riak_fields!(ResetBucketPropsResponse);

impl HasBucket for ResetBucketPropsResponse {}
