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

use crate::riak::builders::{UpdateObject, UpdateObjectBldr};
use crate::riak::client::RiakClient;
use crate::riak::object::Object;

impl RiakClient {
    /// Creates an [`UpdateObject`] request builder that re-reads `object`
    /// if it changed on the server since it was last read.
    ///
    /// To execute the request, call [`UpdateObject::send()`](crate::riak::types::RiakApi::send),
    /// which returns a [`Result`] containing an [`UpdateObjectResponse`](crate::riak::response::UpdateObjectResponse).
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
    ///     let mut obj = client.fetch_object("users", "bob").build().send().await.unwrap().object;
    ///     let resp = client.update_object(&mut obj).build().send().await.unwrap();
    ///     println!("modified: {}", resp.modified);
    /// }
    /// ```
    pub fn update_object<'a>(&self, object: &'a mut Object) -> UpdateObjectBldr<'a> {
        UpdateObject::builder().client(self.clone()).object(object)
    }
}
