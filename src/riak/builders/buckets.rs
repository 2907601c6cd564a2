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

use crate::riak::builders::{BucketCommon, BucketCommonBuilder};
use crate::riak::client::RiakClient;
use crate::riak::error::Error;
use crate::riak::multimap_ext::{Multimap, MultimapExt};
use crate::riak::response::{ListBucketsResponse, ListKeysResponse};
use crate::riak::types::{RiakApi, RiakRequest, ToRiakRequest};
use crate::riak::utils::check_non_empty;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for listing every bucket (`GET /buckets?buckets=true`).
///
/// Riak walks the whole keyspace to answer; not for production traffic.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListBuckets {
    #[builder(!default)] // force required
    client: RiakClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
}

pub type ListBucketsBldr = ListBucketsBuilder<((RiakClient,), (), ())>;

impl RiakApi for ListBuckets {
    type RiakResponse = ListBucketsResponse;
}

impl ToRiakRequest for ListBuckets {
    fn to_riak_request(self) -> Result<RiakRequest, Error> {
        let mut query_params = self.extra_query_params.unwrap_or_default();
        query_params.set("buckets", "true");

        Ok(RiakRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path("/buckets")
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}

/// Argument builder for listing the keys of a bucket
/// (`GET /buckets/{bucket}/keys?keys=true`).
pub type ListKeys = BucketCommon<ListKeysPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct ListKeysPhantomData;

pub type ListKeysBldr = BucketCommonBuilder<ListKeysPhantomData, ((RiakClient,), (), (), (String,), ())>;

impl RiakApi for ListKeys {
    type RiakResponse = ListKeysResponse;
}

impl ToRiakRequest for ListKeys {
    fn to_riak_request(self) -> Result<RiakRequest, Error> {
        check_non_empty("bucket", &self.bucket)?;

        let mut query_params = self.extra_query_params.unwrap_or_default();
        query_params.set("keys", "true");

        Ok(RiakRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path(format!("/buckets/{}/keys", self.bucket))
            .bucket(self.bucket)
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
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
    fn test_list_buckets_request() {
        let req = client().list_buckets().build().to_riak_request().unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/buckets");
        assert_eq!(req.query_params.get_ci("buckets"), Some("true"));
    }

    #[test]
    fn test_list_keys_request() {
        let req = client().list_keys("users").build().to_riak_request().unwrap();
        assert_eq!(req.path, "/buckets/users/keys");
        assert_eq!(req.query_params.get_ci("keys"), Some("true"));
        assert_eq!(req.bucket.as_deref(), Some("users"));
    }
}
