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

use crate::riak::builders::add_param;
use crate::riak::client::RiakClient;
use crate::riak::error::Error;
use crate::riak::header_constants::X_RIAK_VCLOCK;
use crate::riak::multimap_ext::{Multimap, MultimapExt};
use crate::riak::object::object_path;
use crate::riak::response::DeleteObjectResponse;
use crate::riak::types::{RiakApi, RiakRequest, ToRiakRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for deleting an object (`DELETE /riak/{bucket}/{key}`).
///
/// This struct constructs the parameters required for the
/// [`RiakClient::delete_object`](crate::riak::client::RiakClient::delete_object) method.
/// The object's vclock is sent along so the tombstone descends from the
/// version that was read.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteObject {
    #[builder(!default)] // force required
    client: RiakClient,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    key: String,
    #[builder(setter(into))] // force required + accept Into<String>
    vclock: String,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    /// Quorum for both the read and the write of the delete (`rw`).
    #[builder(default, setter(into, strip_option))]
    rw: Option<String>,
}

pub type DeleteObjectBldr =
    DeleteObjectBuilder<((RiakClient,), (String,), (String,), (String,), (), (), ())>;

impl RiakApi for DeleteObject {
    type RiakResponse = DeleteObjectResponse;
}

impl ToRiakRequest for DeleteObject {
    fn to_riak_request(self) -> Result<RiakRequest, Error> {
        // nothing can be stored at an incomplete address
        if self.bucket.is_empty() || self.key.is_empty() {
            return Err(Error::NotFound);
        }

        let mut query_params = self.extra_query_params.unwrap_or_default();
        add_param(&mut query_params, "rw", self.rw);

        let mut headers = self.extra_headers.unwrap_or_default();
        if !self.vclock.is_empty() {
            headers.set(X_RIAK_VCLOCK, self.vclock);
        }

        Ok(RiakRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .path(object_path(&self.bucket, &self.key))
            .bucket(self.bucket)
            .key(self.key)
            .query_params(query_params)
            .headers(headers)
            .build())
    }
}
