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
use crate::riak::header_constants::{ACCEPT, MULTIPART_MIXED};
use crate::riak::multimap_ext::{Multimap, MultimapExt};
use crate::riak::object::object_path;
use crate::riak::response::FetchObjectResponse;
use crate::riak::types::{RiakApi, RiakRequest, ToRiakRequest};
use crate::riak::utils::check_non_empty;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for fetching an object (`GET /riak/{bucket}/{key}`).
///
/// This struct constructs the parameters required for the
/// [`RiakClient::fetch_object`](crate::riak::client::RiakClient::fetch_object) method.
///
/// When the key holds siblings the request fails with
/// [`Error::MultipleChoices`]. By default the error carries the sibling
/// vclocks; with `siblings_as_objects(true)` it carries the sibling objects.
#[derive(Clone, Debug, TypedBuilder)]
pub struct FetchObject {
    #[builder(!default)] // force required
    client: RiakClient,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    key: String,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    /// Read quorum (`r`), a count or `one`, `quorum`, `all`.
    #[builder(default, setter(into, strip_option))]
    r: Option<String>,
    /// Primary read quorum (`pr`).
    #[builder(default, setter(into, strip_option))]
    pr: Option<String>,
    #[builder(default, setter(strip_option))]
    basic_quorum: Option<bool>,
    #[builder(default, setter(strip_option))]
    notfound_ok: Option<bool>,
    /// Selects one sibling by its vtag.
    #[builder(default, setter(into, strip_option))]
    vtag: Option<String>,
    /// Ask for siblings as `multipart/mixed` and decode them into objects.
    #[builder(default)]
    siblings_as_objects: bool,
}

pub type FetchObjectBldr = FetchObjectBuilder<(
    (RiakClient,),
    (String,),
    (String,),
    (),
    (),
    (),
    (),
    (),
    (),
    (),
    (),
)>;

impl RiakApi for FetchObject {
    type RiakResponse = FetchObjectResponse;
}

impl ToRiakRequest for FetchObject {
    fn to_riak_request(self) -> Result<RiakRequest, Error> {
        check_non_empty("bucket", &self.bucket)?;
        check_non_empty("key", &self.key)?;

        let mut query_params = self.extra_query_params.unwrap_or_default();
        add_param(&mut query_params, "r", self.r);
        add_param(&mut query_params, "pr", self.pr);
        add_param(&mut query_params, "basic_quorum", self.basic_quorum);
        add_param(&mut query_params, "notfound_ok", self.notfound_ok);
        add_param(&mut query_params, "vtag", self.vtag);

        let mut headers = self.extra_headers.unwrap_or_default();
        if self.siblings_as_objects {
            headers.set(ACCEPT, MULTIPART_MIXED);
        }

        Ok(RiakRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path(object_path(&self.bucket, &self.key))
            .bucket(self.bucket)
            .key(self.key)
            .query_params(query_params)
            .headers(headers)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riak::http::BaseUrl;

    fn client() -> RiakClient {
        RiakClient::new(BaseUrl::default()).unwrap()
    }

    #[test]
    fn test_fetch_request() {
        let req = client()
            .fetch_object("users", "bob")
            .r("quorum")
            .notfound_ok(false)
            .build()
            .to_riak_request()
            .unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/riak/users/bob");
        assert_eq!(req.bucket.as_deref(), Some("users"));
        assert_eq!(req.query_params.get_ci("r"), Some("quorum"));
        assert_eq!(req.query_params.get_ci("notfound_ok"), Some("false"));
        assert!(req.headers.get_ci(ACCEPT).is_none());
    }

    #[test]
    fn test_fetch_siblings_as_objects() {
        let req = client()
            .fetch_object("users", "bob")
            .siblings_as_objects(true)
            .build()
            .to_riak_request()
            .unwrap();
        assert_eq!(req.headers.get_ci("accept"), Some(MULTIPART_MIXED));
    }

    #[test]
    fn test_fetch_requires_address() {
        let err = client()
            .fetch_object("users", "")
            .build()
            .to_riak_request()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
