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

use crate::riak::builders::{FetchObject, FetchObjectBldr};
use crate::riak::client::RiakClient;

impl RiakClient {
    /// Creates a [`FetchObject`] request builder.
    ///
    /// To execute the request, call [`FetchObject::send()`](crate::riak::types::RiakApi::send),
    /// which returns a [`Result`] containing a [`FetchObjectResponse`](crate::riak::response::FetchObjectResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use riak::riak::RiakClient;
    /// use riak::riak::error::Error;
    /// use riak::riak::types::RiakApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = RiakClient::create_client_on_localhost().unwrap();
    ///     match client.fetch_object("users", "bob").r("quorum").build().send().await {
    ///         Ok(resp) => println!("vclock {}", resp.object.vclock),
    ///         Err(Error::MultipleChoices(siblings)) => println!("{} siblings", siblings.len()),
    ///         Err(e) => panic!("{e}"),
    ///     }
    /// }
    /// ```
    pub fn fetch_object<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        key: S2,
    ) -> FetchObjectBldr {
        FetchObject::builder()
            .client(self.clone())
            .bucket(bucket)
            .key(key)
    }
}
