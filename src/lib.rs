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

//! # Riak HTTP client (`riak-rs`)
//!
//! This crate speaks the Riak HTTP interface. At its heart is the object
//! wire codec: a [`riak::object::Object`] (body, content type, vclock, etag,
//! links, user metadata and secondary indexes) is mapped to and from HTTP
//! headers, multipart bodies and the `Link` header microformat.
//!
//! Each supported operation has a request builder (e.g. [`riak::builders::FetchObject`],
//! [`riak::builders::StoreObject`], [`riak::builders::WalkLink`]) which implements
//! the [`riak::types::RiakApi`] trait and is executed with
//! [`send`](crate::riak::types::RiakApi::send).
//!
//! ## Basic Usage
//!
//! ```no_run
//! use riak::riak::RiakClient;
//! use riak::riak::types::RiakApi;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = RiakClient::create_client_on_localhost().unwrap();
//!
//!     let resp = client
//!         .fetch_object("users", "bob")
//!         .build()
//!         .send()
//!         .await
//!         .expect("request failed");
//!
//!     println!("content type: {}", resp.object.content_type);
//! }
//! ```
//!
//! ## Conflicts
//!
//! Riak reports concurrent writes at one bucket/key as siblings (HTTP 300).
//! They surface as [`riak::error::Error::MultipleChoices`] carrying either the
//! competing vclocks or the sibling objects themselves. Nothing is resolved
//! automatically.

#![allow(clippy::result_large_err)]
pub mod riak;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
