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

//! Accessors shared by the typed responses.
//!
//! Every response keeps the [`RiakRequest`](crate::riak::types::RiakRequest)
//! that produced it and the response headers. Traits layered on
//! [`HasRiakFields`] expose what the request addressed.

use crate::riak::header_constants::X_RIAK_VCLOCK;
use crate::riak::multimap_ext::{Multimap, from_header_map};
use crate::riak::types::RiakRequest;
use http::HeaderMap;

#[macro_export]
/// Implements the `FromRiakResponse` trait for responses made of the request,
/// the headers and the raw body.
macro_rules! impl_from_riak_response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::riak::types::FromRiakResponse for $ty {
                async fn from_riak_response(
                    request: $crate::riak::types::RiakRequest,
                    response: Result<reqwest::Response, $crate::riak::error::Error>,
                ) -> Result<Self, $crate::riak::error::Error> {
                    let mut resp: reqwest::Response = response?;
                    Ok(Self {
                        request,
                        headers: std::mem::take(resp.headers_mut()),
                        body: resp.bytes().await?,
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasRiakFields` trait for the specified types.
macro_rules! impl_has_riak_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::riak::response_traits::HasRiakFields for $ty {
                fn request(&self) -> &$crate::riak::types::RiakRequest {
                    &self.request
                }

                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }
            }
        )*
    };
}

pub trait HasRiakFields {
    /// The request that was sent to Riak.
    fn request(&self) -> &RiakRequest;
    /// HTTP headers returned by the server.
    fn headers(&self) -> &HeaderMap;

    /// The response headers as a [`Multimap`].
    fn header_multimap(&self) -> Multimap {
        from_header_map(self.headers())
    }
}

/// Returns the bucket addressed by the request.
pub trait HasBucket: HasRiakFields {
    #[inline]
    fn bucket(&self) -> &str {
        self.request().bucket.as_deref().unwrap_or_default()
    }
}

/// Returns the key addressed by the request.
pub trait HasKey: HasRiakFields {
    #[inline]
    fn key(&self) -> &str {
        self.request().key.as_deref().unwrap_or_default()
    }
}

/// Returns the `X-Riak-Vclock` response header.
pub trait HasVclock: HasRiakFields {
    #[inline]
    fn vclock(&self) -> Option<&str> {
        self.headers()
            .get(X_RIAK_VCLOCK)
            .and_then(|v| v.to_str().ok())
    }
}
