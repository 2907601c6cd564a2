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

use crate::riak::builders::{WalkLink, WalkLinkBldr};
use crate::riak::client::RiakClient;
use crate::riak::object::Object;

impl RiakClient {
    /// Creates a [`WalkLink`] request builder following the link `tag` of
    /// `object`.
    ///
    /// To execute the request, call [`WalkLink::send()`](crate::riak::types::RiakApi::send),
    /// which returns a [`Result`] containing a [`WalkLinkResponse`](crate::riak::response::WalkLinkResponse).
    /// If `object` has no link named `tag` the request fails with
    /// [`Error::LinkNotFound`](crate::riak::error::Error::LinkNotFound)
    /// without contacting the server.
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
    ///     let bob = client.fetch_object("users", "bob").build().send().await.unwrap().object;
    ///     let resp = client.walk_link(&bob, "friend").build().send().await.unwrap();
    ///     for friend in &resp.objects {
    ///         println!("{}", friend.path());
    ///     }
    /// }
    /// ```
    pub fn walk_link<S: Into<String>>(&self, object: &Object, tag: S) -> WalkLinkBldr {
        let tag = tag.into();
        let link = object.get_link(&tag).cloned();
        WalkLink::builder()
            .client(self.clone())
            .bucket(object.bucket())
            .key(object.key())
            .tag(tag)
            .link(link)
    }
}
