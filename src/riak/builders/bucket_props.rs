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
use crate::riak::header_constants::{APPLICATION_JSON, CONTENT_TYPE};
use crate::riak::multimap_ext::{Multimap, MultimapExt};
use crate::riak::response::{
    GetBucketPropsResponse, ResetBucketPropsResponse, SetBucketPropsResponse,
};
use crate::riak::types::{BucketProps, PropsEnvelope, RiakApi, RiakRequest, ToRiakRequest};
use crate::riak::utils::check_non_empty;
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

fn props_path(bucket: &str) -> String {
    format!("/buckets/{bucket}/props")
}

/// Argument builder for reading bucket properties (`GET /buckets/{bucket}/props`).
pub type GetBucketProps = BucketCommon<GetBucketPropsPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct GetBucketPropsPhantomData;

pub type GetBucketPropsBldr =
    BucketCommonBuilder<GetBucketPropsPhantomData, ((RiakClient,), (), (), (String,), ())>;

impl RiakApi for GetBucketProps {
    type RiakResponse = GetBucketPropsResponse;
}

impl ToRiakRequest for GetBucketProps {
    fn to_riak_request(self) -> Result<RiakRequest, Error> {
        check_non_empty("bucket", &self.bucket)?;

        Ok(RiakRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path(props_path(&self.bucket))
            .bucket(self.bucket)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}

/// Argument builder for writing bucket properties (`PUT /buckets/{bucket}/props`).
///
/// Only the properties set in [`BucketProps`] are sent; the others keep
/// their current values.
#[derive(Clone, Debug, TypedBuilder)]
pub struct SetBucketProps {
    #[builder(!default)] // force required
    client: RiakClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(!default)] // force required
    props: BucketProps,
}

pub type SetBucketPropsBldr =
    SetBucketPropsBuilder<((RiakClient,), (), (), (String,), (BucketProps,))>;

impl RiakApi for SetBucketProps {
    type RiakResponse = SetBucketPropsResponse;
}

impl ToRiakRequest for SetBucketProps {
    fn to_riak_request(self) -> Result<RiakRequest, Error> {
        check_non_empty("bucket", &self.bucket)?;

        let body = serde_json::to_vec(&PropsEnvelope { props: &self.props })?;
        let mut headers = self.extra_headers.unwrap_or_default();
        headers.set(CONTENT_TYPE, APPLICATION_JSON);

        Ok(RiakRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .path(props_path(&self.bucket))
            .bucket(self.bucket)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .body(Bytes::from(body))
            .build())
    }
}

/// Argument builder for restoring the default bucket properties
/// (`DELETE /buckets/{bucket}/props`).
pub type ResetBucketProps = BucketCommon<ResetBucketPropsPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct ResetBucketPropsPhantomData;

pub type ResetBucketPropsBldr =
    BucketCommonBuilder<ResetBucketPropsPhantomData, ((RiakClient,), (), (), (String,), ())>;

impl RiakApi for ResetBucketProps {
    type RiakResponse = ResetBucketPropsResponse;
}

impl ToRiakRequest for ResetBucketProps {
    fn to_riak_request(self) -> Result<RiakRequest, Error> {
        check_non_empty("bucket", &self.bucket)?;

        Ok(RiakRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .path(props_path(&self.bucket))
            .bucket(self.bucket)
            .query_params(self.extra_query_params.unwrap_or_default())
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
    fn test_get_and_reset_requests() {
        let req = client().get_bucket_props("users").build().to_riak_request().unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/buckets/users/props");

        let req = client().reset_bucket_props("users").build().to_riak_request().unwrap();
        assert_eq!(req.method, Method::DELETE);
        assert_eq!(req.path, "/buckets/users/props");
    }

    #[test]
    fn test_set_request() {
        let props = BucketProps {
            allow_mult: Some(true),
            ..Default::default()
        };
        let req = client()
            .set_bucket_props("users", props)
            .build()
            .to_riak_request()
            .unwrap();
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.headers.get_ci("content-type"), Some(APPLICATION_JSON));
        assert_eq!(req.body.as_deref(), Some(&br#"{"props":{"allow_mult":true}}"#[..]));
    }

    #[test]
    fn test_empty_bucket_rejected() {
        let err = client().get_bucket_props("").build().to_riak_request().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
