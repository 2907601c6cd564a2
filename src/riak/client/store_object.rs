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

use crate::riak::builders::{StoreObject, StoreObjectBldr, WriteCondition};
use crate::riak::client::RiakClient;
use crate::riak::object::Object;

impl RiakClient {
    /// Creates a [`StoreObject`] request builder that writes `object`
    /// unconditionally, carrying its vclock.
    ///
    /// To execute the request, call [`StoreObject::send()`](crate::riak::types::RiakApi::send),
    /// which returns a [`Result`] containing a [`StoreObjectResponse`](crate::riak::response::StoreObjectResponse)
    /// and updates `object` with the stored representation.
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
    ///     let mut obj = Object::new("users", "bob").with_body("{\"name\":\"Bob\"}");
    ///     obj.content_type = "application/json".into();
    ///     obj.add_index("username_bin", "bob");
    ///     client.store_object(&mut obj).build().send().await.unwrap();
    ///     println!("stored, vclock {}", obj.vclock);
    /// }
    /// ```
    pub fn store_object<'a>(&self, object: &'a mut Object) -> StoreObjectBldr<'a> {
        self.write(object, WriteCondition::None)
    }

    /// Creates a [`StoreObject`] request builder that writes `object` only
    /// if the stored representation is still the one last read. A lost race
    /// fails with [`Error::Modified`](crate::riak::error::Error::Modified).
    pub fn merge_object<'a>(&self, object: &'a mut Object) -> StoreObjectBldr<'a> {
        self.write(object, WriteCondition::Unmodified)
    }

    /// Creates a [`StoreObject`] request builder that writes `object` only
    /// if nothing is stored at its key. An object without a key gets one
    /// assigned by Riak.
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
    ///     let mut obj = Object::in_bucket("events").with_body("login");
    ///     client.create_object(&mut obj).build().send().await.unwrap();
    ///     println!("created {}", obj.path());
    /// }
    /// ```
    pub fn create_object<'a>(&self, object: &'a mut Object) -> StoreObjectBldr<'a> {
        self.write(object, WriteCondition::Absent)
    }

    fn write<'a>(&self, object: &'a mut Object, condition: WriteCondition) -> StoreObjectBldr<'a> {
        StoreObject::builder()
            .client(self.clone())
            .object(object)
            .condition(condition)
    }
}
