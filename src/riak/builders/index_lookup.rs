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
use crate::riak::multimap_ext::Multimap;
use crate::riak::response::IndexLookupResponse;
use crate::riak::types::{RiakApi, RiakRequest, ToRiakRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for a secondary index query
/// (`GET /buckets/{bucket}/index/{index}/{value}`), or a range query when
/// `range_end` is set (`.../{value}/{range_end}`).
///
/// Built by [`RiakClient::index_lookup`](crate::riak::client::RiakClient::index_lookup)
/// and [`RiakClient::index_range`](crate::riak::client::RiakClient::index_range).
#[derive(Clone, Debug, TypedBuilder)]
pub struct IndexLookup {
    #[builder(!default)] // force required
    client: RiakClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    /// Index name including its type suffix, e.g. `username_bin`.
    #[builder(setter(into))] // force required + accept Into<String>
    index: String,
    #[builder(setter(into))] // force required + accept Into<String>
    value: String,
    #[builder(default, setter(into, strip_option))]
    range_end: Option<String>,
}

pub type IndexLookupBldr =
    IndexLookupBuilder<((RiakClient,), (), (), (String,), (String,), (String,), ())>;

pub type IndexRangeBldr = IndexLookupBuilder<(
    (RiakClient,),
    (),
    (),
    (String,),
    (String,),
    (String,),
    (Option<String>,),
)>;

impl RiakApi for IndexLookup {
    type RiakResponse = IndexLookupResponse;
}

impl ToRiakRequest for IndexLookup {
    fn to_riak_request(self) -> Result<RiakRequest, Error> {
        let empty_end = matches!(&self.range_end, Some(end) if end.is_empty());
        if self.bucket.is_empty() || self.index.is_empty() || self.value.is_empty() || empty_end {
            return Err(Error::InvalidArgument(
                "index query arguments cannot be empty".into(),
            ));
        }

        Ok(RiakRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path(index_path(
                &self.bucket,
                &self.index,
                &self.value,
                self.range_end.as_deref(),
            ))
            .bucket(self.bucket)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}

/// `/buckets/{bucket}/index/{index}/{value}[/{end}]`
fn index_path(bucket: &str, index: &str, value: &str, end: Option<&str>) -> String {
    let mut path = String::with_capacity(80);
    path.push_str("/buckets/");
    path.push_str(bucket);
    path.push_str("/index/");
    path.push_str(index);
    path.push('/');
    path.push_str(value);
    if let Some(end) = end {
        path.push('/');
        path.push_str(end);
    }
    path
}
