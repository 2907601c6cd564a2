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
use crate::riak::header_constants::*;
use crate::riak::multimap_ext::{Multimap, MultimapExt};
use crate::riak::object::{Object, bucket_path};
use crate::riak::response::StoreObjectResponse;
use crate::riak::types::{FromRiakResponse, RiakApi, RiakRequest, ToRiakRequest};
use crate::riak::utils::{check_non_empty, to_http_header_value};
use async_trait::async_trait;
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Precondition attached to a write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteCondition {
    /// Write unconditionally, carrying the object's vclock.
    #[default]
    None,
    /// Write only if the stored representation is the one last read
    /// (`If-Match` on the etag, else `If-Unmodified-Since`). A mismatch
    /// fails with [`Error::Modified`].
    Unmodified,
    /// Write only if nothing is stored yet. Without a key, Riak assigns one.
    Absent,
}

/// Argument builder for writing an object (`PUT /riak/{bucket}/{key}`, or
/// `POST /riak/{bucket}` to let Riak choose the key).
///
/// The object is updated in place from the response: by default Riak
/// returns the stored representation (`returnbody=true`), so the vclock,
/// etag and last-modified time are those of the new version.
///
/// Built by [`RiakClient::store_object`](crate::riak::client::RiakClient::store_object),
/// [`RiakClient::merge_object`](crate::riak::client::RiakClient::merge_object) and
/// [`RiakClient::create_object`](crate::riak::client::RiakClient::create_object).
#[derive(Debug, TypedBuilder)]
pub struct StoreObject<'a> {
    #[builder(!default)] // force required
    client: RiakClient,
    #[builder(!default)] // force required
    object: &'a mut Object,
    #[builder(default)]
    condition: WriteCondition,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    /// Write quorum (`w`).
    #[builder(default, setter(into, strip_option))]
    w: Option<String>,
    /// Durable write quorum (`dw`).
    #[builder(default, setter(into, strip_option))]
    dw: Option<String>,
    /// Primary write quorum (`pw`).
    #[builder(default, setter(into, strip_option))]
    pw: Option<String>,
    #[builder(default = true)]
    return_body: bool,
}

pub type StoreObjectBldr<'a> = StoreObjectBuilder<
    'a,
    (
        (RiakClient,),
        (&'a mut Object,),
        (WriteCondition,),
        (),
        (),
        (),
        (),
        (),
        (),
    ),
>;

impl StoreObject<'_> {
    fn request(&self) -> Result<RiakRequest, Error> {
        let object: &Object = self.object;
        check_non_empty("bucket", object.bucket())?;
        if self.condition != WriteCondition::Absent {
            check_non_empty("key", object.key())?;
        }

        let mut query_params = self.extra_query_params.clone().unwrap_or_default();
        add_param(&mut query_params, "w", self.w.as_ref());
        add_param(&mut query_params, "dw", self.dw.as_ref());
        add_param(&mut query_params, "pw", self.pw.as_ref());
        query_params.set("returnbody", self.return_body.to_string());

        let mut headers = self.extra_headers.clone().unwrap_or_default();
        object.write_header(&mut headers);
        // representation metadata owned by the server
        headers.remove_ci(ETAG);
        headers.remove_ci(LAST_MODIFIED);

        match self.condition {
            WriteCondition::None => {}
            WriteCondition::Unmodified => {
                if !object.etag.is_empty() {
                    headers.set(IF_MATCH, object.etag.as_str());
                } else if let Some(t) = object.last_modified {
                    headers.set(IF_UNMODIFIED_SINCE, to_http_header_value(t));
                } else {
                    log::debug!(
                        "merge of {} has no etag or last-modified; writing unconditionally",
                        object.path()
                    );
                }
            }
            WriteCondition::Absent => {
                if !object.key().is_empty() {
                    headers.set(IF_NONE_MATCH, "*");
                }
            }
        }

        let (method, path) = if object.key().is_empty() {
            (Method::POST, bucket_path(object.bucket()))
        } else {
            (Method::PUT, object.path())
        };

        Ok(RiakRequest::builder()
            .client(self.client.clone())
            .method(method)
            .path(path)
            .bucket(object.bucket().to_string())
            .key(object.key().to_string())
            .query_params(query_params)
            .headers(headers)
            .body(Bytes::copy_from_slice(object.body_bytes()))
            .build())
    }
}

impl ToRiakRequest for StoreObject<'_> {
    fn to_riak_request(self) -> Result<RiakRequest, Error> {
        self.request()
    }
}

#[async_trait]
impl RiakApi for StoreObject<'_> {
    type RiakResponse = StoreObjectResponse;

    async fn send(self) -> Result<StoreObjectResponse, Error> {
        let mut req: RiakRequest = self.request()?;
        let resp: Result<reqwest::Response, Error> = req.execute().await;
        let resp = StoreObjectResponse::from_riak_response(req, resp).await?;
        resp.apply_to(self.object, self.return_body)?;
        Ok(resp)
    }
}
