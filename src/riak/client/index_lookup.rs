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

use crate::riak::builders::{IndexLookup, IndexLookupBldr, IndexRangeBldr};
use crate::riak::client::RiakClient;

impl RiakClient {
    /// Creates an [`IndexLookup`] request builder for the keys of `bucket`
    /// whose secondary index `index` equals `value`.
    ///
    /// To execute the request, call [`IndexLookup::send()`](crate::riak::types::RiakApi::send),
    /// which returns a [`Result`] containing an [`IndexLookupResponse`](crate::riak::response::IndexLookupResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use riak::riak::RiakClient;
    /// use riak::riak::types::RiakApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = RiakClient::create_client_on_localhost().unwrap();
    ///     let resp = client
    ///         .index_lookup("users", "username_bin", "bob")
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("keys: {:?}", resp.keys);
    /// }
    /// ```
    pub fn index_lookup<S1: Into<String>, S2: Into<String>, S3: Into<String>>(
        &self,
        bucket: S1,
        index: S2,
        value: S3,
    ) -> IndexLookupBldr {
        IndexLookup::builder()
            .client(self.clone())
            .bucket(bucket)
            .index(index)
            .value(value)
    }

    /// Like [`index_lookup`](Self::index_lookup), for index values between
    /// `start` and `end` inclusive.
    pub fn index_range<S1, S2, S3, S4>(
        &self,
        bucket: S1,
        index: S2,
        start: S3,
        end: S4,
    ) -> IndexRangeBldr
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        S4: Into<String>,
    {
        self.index_lookup(bucket, index, start).range_end(end)
    }
}
