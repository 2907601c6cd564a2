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

use crate::riak::builders::{DeleteObject, DeleteObjectBldr};
use crate::riak::client::RiakClient;
use crate::riak::object::Object;

impl RiakClient {
    /// Creates a [`DeleteObject`] request builder for `object`.
    ///
    /// To execute the request, call [`DeleteObject::send()`](crate::riak::types::RiakApi::send),
    /// which returns a [`Result`] containing a [`DeleteObjectResponse`](crate::riak::response::DeleteObjectResponse).
    /// An object without bucket or key fails with
    /// [`Error::NotFound`](crate::riak::error::Error::NotFound).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use riak::riak::{Object, RiakClient};
    /// use riak::riak::types::RiakApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = RiakClient::create_client_on_localhost().unwrap();
    ///     let obj = Object::new("users", "bob");
    ///     client.delete_object(&obj).build().send().await.unwrap();
    /// }
    /// ```
    pub fn delete_object(&self, object: &Object) -> DeleteObjectBldr {
        DeleteObject::builder()
            .client(self.clone())
            .bucket(object.bucket())
            .key(object.key())
            .vclock(object.vclock.as_str())
    }
}
