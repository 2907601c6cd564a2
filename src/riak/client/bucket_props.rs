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

use crate::riak::builders::{
    GetBucketProps, GetBucketPropsBldr, ResetBucketProps, ResetBucketPropsBldr, SetBucketProps,
    SetBucketPropsBldr,
};
use crate::riak::client::RiakClient;
use crate::riak::types::BucketProps;

impl RiakClient {
    /// Creates a [`GetBucketProps`] request builder.
    ///
    /// To execute the request, call [`GetBucketProps::send()`](crate::riak::types::RiakApi::send),
    /// which returns a [`Result`] containing a [`GetBucketPropsResponse`](crate::riak::response::GetBucketPropsResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use riak::riak::RiakClient;
    /// use riak::riak::types::{BucketProps, RiakApi};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = RiakClient::create_client_on_localhost().unwrap();
    ///     let resp = client.get_bucket_props("users").build().send().await.unwrap();
    ///     println!("n_val: {:?}", resp.props.n_val);
    ///
    ///     let props = BucketProps { allow_mult: Some(true), ..Default::default() };
    ///     client.set_bucket_props("users", props).build().send().await.unwrap();
    /// }
    /// ```
    pub fn get_bucket_props<S: Into<String>>(&self, bucket: S) -> GetBucketPropsBldr {
        GetBucketProps::builder().client(self.clone()).bucket(bucket)
    }

    /// Creates a [`SetBucketProps`] request builder writing the properties
    /// set in `props`.
    pub fn set_bucket_props<S: Into<String>>(
        &self,
        bucket: S,
        props: BucketProps,
    ) -> SetBucketPropsBldr {
        SetBucketProps::builder()
            .client(self.clone())
            .bucket(bucket)
            .props(props)
    }

    /// Creates a [`ResetBucketProps`] request builder restoring the default
    /// properties of `bucket`.
    pub fn reset_bucket_props<S: Into<String>>(&self, bucket: S) -> ResetBucketPropsBldr {
        ResetBucketProps::builder().client(self.clone()).bucket(bucket)
    }
}
