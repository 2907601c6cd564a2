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

//! Implementation of the Riak HTTP interface

pub mod builders;
pub mod client;
pub mod conflict;
pub mod error;
pub mod header;
pub mod header_constants;
pub mod http;
pub mod link;
pub mod multimap_ext;
pub mod multipart;
pub mod object;
pub mod pool;
pub mod response;
pub mod response_traits;
pub mod types;
pub mod utils;


pub use client::{RiakClient, RiakClientBuilder};
pub use object::{Link, Object};
