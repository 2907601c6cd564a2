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
use crate::riak::header_constants::{IF_MODIFIED_SINCE, IF_NONE_MATCH};
use crate::riak::multimap_ext::{Multimap, MultimapExt};
use crate::riak::object::Object;
use crate::riak::response::UpdateObjectResponse;
use crate::riak::types::{FromRiakResponse, RiakApi, RiakRequest, ToRiakRequest};
use crate::riak::utils::{check_non_empty, to_http_header_value};
use async_trait::async_trait;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for refreshing an object if the stored representation
/// changed (`GET /riak/{bucket}/{key}` with `If-None-Match` and
/// `If-Modified-Since`).
///
/// On `304 Not Modified` the object is left untouched and
/// [`UpdateObjectResponse::modified`] is `false`. Otherwise the object is
/// replaced by the fetched representation.
#[derive(Debug, TypedBuilder)]
pub struct UpdateObject<'a> {
    #[builder(!default)] // force required
    client: RiakClient,
    #[builder(!default)] // force required
    object: &'a mut Object,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(default, setter(into, strip_option))]
    r: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pr: Option<String>,
}

pub type UpdateObjectBldr<'a> =
    UpdateObjectBuilder<'a, ((RiakClient,), (&'a mut Object,), (), (), (), ())>;

impl UpdateObject<'_> {
    fn request(&self) -> Result<RiakRequest, Error> {
        let object: &Object = self.object;
        check_non_empty("bucket", object.bucket())?;
        check_non_empty("key", object.key())?;

        let mut query_params = self.extra_query_params.clone().unwrap_or_default();
        add_param(&mut query_params, "r", self.r.as_ref());
        add_param(&mut query_params, "pr", self.pr.as_ref());

        let mut headers = self.extra_headers.clone().unwrap_or_default();
        if !object.etag.is_empty() {
            headers.set(IF_NONE_MATCH, object.etag.as_str());
        }
        if let Some(t) = object.last_modified {
            headers.set(IF_MODIFIED_SINCE, to_http_header_value(t));
        }

        Ok(RiakRequest::builder()
            .client(self.client.clone())
            .method(Method::GET)
            .path(object.path())
            .bucket(object.bucket().to_string())
            .key(object.key().to_string())
            .query_params(query_params)
            .headers(headers)
            .build())
    }
}

impl ToRiakRequest for UpdateObject<'_> {
    fn to_riak_request(self) -> Result<RiakRequest, Error> {
        self.request()
    }
}

#[async_trait]
impl RiakApi for UpdateObject<'_> {
    type RiakResponse = UpdateObjectResponse;

    async fn send(self) -> Result<UpdateObjectResponse, Error> {
        let mut req: RiakRequest = self.request()?;
        let resp: Result<reqwest::Response, Error> = req.execute().await;
        let resp = UpdateObjectResponse::from_riak_response(req, resp).await?;
        resp.apply_to(self.object)?;
        Ok(resp)
    }
}
