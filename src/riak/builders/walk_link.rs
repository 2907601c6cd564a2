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

use crate::riak::client::RiakClient;
use crate::riak::error::Error;
use crate::riak::link::walk_path;
use crate::riak::multimap_ext::Multimap;
use crate::riak::object::Link;
use crate::riak::response::WalkLinkResponse;
use crate::riak::types::{RiakApi, RiakRequest, ToRiakRequest};
use crate::riak::utils::check_non_empty;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for following one named link of an object
/// (`GET /riak/{bucket}/{key}/{target bucket},{tag},_`).
///
/// Riak answers with a `multipart/mixed` body, one phase per part, each
/// phase itself a multipart document of objects. The objects of every phase
/// are returned flattened.
#[derive(Clone, Debug, TypedBuilder)]
pub struct WalkLink {
    #[builder(!default)] // force required
    client: RiakClient,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    key: String,
    #[builder(setter(into))] // force required + accept Into<String>
    tag: String,
    /// Link stored under `tag`; `None` when the object has no such link.
    #[builder(!default)] // force required
    link: Option<Link>,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
}

pub type WalkLinkBldr = WalkLinkBuilder<(
    (RiakClient,),
    (String,),
    (String,),
    (String,),
    (Option<Link>,),
    (),
    (),
)>;

impl RiakApi for WalkLink {
    type RiakResponse = WalkLinkResponse;
}

impl ToRiakRequest for WalkLink {
    fn to_riak_request(self) -> Result<RiakRequest, Error> {
        let link = self.link.ok_or_else(|| Error::LinkNotFound(self.tag.clone()))?;
        check_non_empty("bucket", &self.bucket)?;
        check_non_empty("key", &self.key)?;

        Ok(RiakRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path(walk_path(&self.bucket, &self.key, &link.bucket, &self.tag))
            .bucket(self.bucket)
            .key(self.key)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
