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

//! Error definitions for Riak operations

use crate::riak::multipart::PartialObjects;
use thiserror::Error;

/// Competing representations reported with HTTP 300.
#[derive(Debug)]
pub enum Siblings {
    /// One vclock per sibling, in the order the server listed them.
    Vclocks(Vec<String>),
    /// Sibling objects decoded from a `multipart/mixed` body, together with
    /// the last part error, if any.
    Objects(PartialObjects),
}

impl Siblings {
    /// Number of siblings that were decoded.
    pub fn len(&self) -> usize {
        match self {
            Siblings::Vclocks(v) => v.len(),
            Siblings::Objects(p) => p.objects.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Error definitions
#[derive(Debug, Error)]
pub enum Error {
    #[error("modified since last read (412)")]
    Modified,

    #[error("multiple choices (300); {} siblings", .0.len())]
    MultipleChoices(Siblings),

    #[error("bad request (400)")]
    BadRequest,

    #[error("not found (404)")]
    NotFound,

    #[error("riak request timeout (503)")]
    Timeout,

    #[error("empty or missing body")]
    InvalidBody,

    #[error("server failed with HTTP status code {0}")]
    StatusCode(u16),

    #[error("{0}")]
    IOError(#[from] std::io::Error),

    #[error("invalid multipart body: {0}")]
    InvalidMultipart(String),

    #[error("{0}")]
    HttpError(#[from] reqwest::Error),

    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    InvalidUrl(#[from] http::uri::InvalidUri),

    #[error("{0}")]
    InvalidBaseUrl(String),

    #[error("link {0:?} does not exist for this object")]
    LinkNotFound(String),

    #[error("{0}")]
    InvalidArgument(String),
}

impl Error {
    /// Maps a status code the object endpoints treat as a protocol signal
    /// to its error. Success codes are not expected here.
    pub fn from_status(status: u16) -> Error {
        match status {
            400 => Error::BadRequest,
            404 => Error::NotFound,
            412 => Error::Modified,
            503 => Error::Timeout,
            code => Error::StatusCode(code),
        }
    }

    /// Returns the competing vclocks of a sibling conflict.
    pub fn vclocks(&self) -> Option<&[String]> {
        match self {
            Error::MultipleChoices(Siblings::Vclocks(v)) => Some(v),
            _ => None,
        }
    }

    /// Returns the decoded sibling objects of a sibling conflict.
    pub fn sibling_objects(&self) -> Option<&PartialObjects> {
        match self {
            Error::MultipleChoices(Siblings::Objects(p)) => Some(p),
            _ => None,
        }
    }
}
