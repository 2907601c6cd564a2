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

use crate::riak::builders::{ListBuckets, ListBucketsBldr, ListKeys, ListKeysBldr};
use crate::riak::client::RiakClient;

impl RiakClient {
    /// Creates a [`ListBuckets`] request builder.
    ///
    /// To execute the request, call [`ListBuckets::send()`](crate::riak::types::RiakApi::send),
    /// which returns a [`Result`] containing a [`ListBucketsResponse`](crate::riak::response::ListBucketsResponse).
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
    ///     let resp = client.list_buckets().build().send().await.unwrap();
    ///     println!("buckets: {:?}", resp.buckets);
    /// }
    /// ```
    pub fn list_buckets(&self) -> ListBucketsBldr {
        ListBuckets::builder().client(self.clone())
    }

    /// Creates a [`ListKeys`] request builder for every key of `bucket`.
    ///
    /// To execute the request, call [`ListKeys::send()`](crate::riak::types::RiakApi::send),
    /// which returns a [`Result`] containing a [`ListKeysResponse`](crate::riak::response::ListKeysResponse).
    pub fn list_keys<S: Into<String>>(&self, bucket: S) -> ListKeysBldr {
        ListKeys::builder().client(self.clone()).bucket(bucket)
    }
}
