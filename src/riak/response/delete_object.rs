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

use crate::riak::response_traits::{HasBucket, HasKey};
use crate::riak::types::RiakRequest;
use crate::{impl_from_riak_response, impl_has_riak_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response of [`delete_object`](crate::riak::client::RiakClient::delete_object).
#[derive(Clone, Debug)]
pub struct DeleteObjectResponse {
    request: RiakRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_riak_response!(DeleteObjectResponse);
impl_has_riak_fields!(DeleteObjectResponse);

impl HasBucket for DeleteObjectResponse {}
impl HasKey for DeleteObjectResponse {}
