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

//! Request and response plumbing shared by every operation.

use crate::riak::client::RiakClient;
use crate::riak::error::Error;
use crate::riak::multimap_ext::Multimap;
use async_trait::async_trait;
use bytes::Bytes;
use http::Method;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
/// Generic Riak HTTP request
pub struct RiakRequest {
    #[builder(!default)] // force required
    pub(crate) client: RiakClient,

    #[builder(!default)] // force required
    pub(crate) method: Method,

    #[builder(setter(into))] // force required + accept Into<String>
    pub(crate) path: String,

    /// Bucket addressed by the request, if any
    #[builder(default, setter(into))]
    pub(crate) bucket: Option<String>,

    /// Key addressed by the request, if any
    #[builder(default, setter(into))]
    pub(crate) key: Option<String>,

    #[builder(default)]
    pub(crate) query_params: Multimap,

    #[builder(default)]
    pub(crate) headers: Multimap,

    #[builder(default, setter(into))]
    pub(crate) body: Option<Bytes>,
}

impl RiakRequest {
    /// Execute the request, returning the response. Only used in [`RiakApi::send()`]
    pub async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        self.client
            .execute(
                self.method.clone(),
                &self.path,
                &mut self.headers,
                &self.query_params,
                self.body.clone(),
            )
            .await
    }
}

/// Converts a request builder into a [`RiakRequest`].
pub trait ToRiakRequest: Sized {
    /// Consumes this request builder and returns a [`RiakRequest`], or an
    /// error if the arguments are invalid.
    fn to_riak_request(self) -> Result<RiakRequest, Error>;
}

/// Converts an HTTP response into a typed response.
#[async_trait]
pub trait FromRiakResponse: Sized {
    /// Parses `resp`, the outcome of executing `req`.
    ///
    /// Status codes that carry protocol meaning (`300`, `304`) arrive here
    /// as successful responses and are interpreted by the implementation.
    async fn from_riak_response(
        req: RiakRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

/// Common interface of all request builders.
#[async_trait]
pub trait RiakApi: ToRiakRequest {
    /// The response type associated with this request builder.
    type RiakResponse: FromRiakResponse;

    /// Sends the request and returns the typed response.
    async fn send(self) -> Result<Self::RiakResponse, Error> {
        let mut req: RiakRequest = self.to_riak_request()?;
        let resp: Result<reqwest::Response, Error> = req.execute().await;
        Self::RiakResponse::from_riak_response(req, resp).await
    }
}

/// Read or write quorum: a node count or one of `one`, `quorum`, `all`,
/// `default`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quorum {
    Count(u32),
    Named(String),
}

impl From<u32> for Quorum {
    fn from(n: u32) -> Self {
        Quorum::Count(n)
    }
}

impl From<&str> for Quorum {
    fn from(s: &str) -> Self {
        Quorum::Named(s.to_string())
    }
}

/// Erlang module/function pair naming a bucket callback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModFun {
    #[serde(rename = "mod")]
    pub module: String,
    pub fun: String,
}

/// Pre- or post-commit hook: `{"mod": ..., "fun": ...}` for Erlang hooks,
/// `{"name": ...}` for JavaScript ones.
pub type Hook = HashMap<String, String>;

/// Bucket properties (`/buckets/{bucket}/props`).
///
/// Every field is optional: unset fields are not sent on write, so a write
/// changes only what is set. Properties this type does not name are kept
/// in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_val: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_mult: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_write_wins: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precommit: Option<Vec<Hook>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcommit: Option<Vec<Hook>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chash_keyfun: Option<ModFun>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkfun: Option<ModFun>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_vclock: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub young_vclock: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub big_vclock: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_vclock: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<Quorum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<Quorum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dw: Option<Quorum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rw: Option<Quorum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pr: Option<Quorum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pw: Option<Quorum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_quorum: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notfound_ok: Option<bool>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// `{"props": {...}}`, the envelope of the bucket properties resource.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PropsEnvelope<T> {
    pub(crate) props: T,
}
