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

//! Handling of `300 Multiple Choices` responses.
//!
//! Without an `Accept: multipart/mixed` request header Riak lists siblings
//! as plain text:
//!
//! ```text
//! Siblings:
//! 4v5xOg4bVR96Ri7D0SlUB
//! 3mRAS6pOymKVPbAWnVkTXq
//! ```
//!
//! With it, the body is a multipart document with one part per sibling.

use crate::riak::error::{Error, Siblings};
use crate::riak::header_constants::{CONTENT_TYPE, SIBLINGS_MARKER};
use crate::riak::multimap_ext::{Multimap, MultimapExt};
use crate::riak::multipart::decode_objects;
use std::io::{self, BufRead, BufReader, Read};

/// Reads the vclock list of a plain-text sibling body. The first
/// `Siblings:` marker line and blank lines are skipped.
pub fn parse_vclocks<R: Read>(body: R) -> Result<Vec<String>, Error> {
    let mut reader = BufReader::new(body);
    let mut vclocks = Vec::new();
    let mut marker_seen = false;
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let token = line.trim_end_matches(['\r', '\n']);
        if token.is_empty() {
            continue;
        }
        if !marker_seen && token == SIBLINGS_MARKER {
            marker_seen = true;
            continue;
        }
        vclocks.push(token.to_string());
    }
    Ok(vclocks)
}

/// Builds the conflict error for a plain-text sibling body.
///
/// The body is read to its end. A read failure is returned in place of the
/// conflict, after draining what is left.
pub fn multiple<R: Read>(body: R) -> Error {
    let mut reader = BufReader::new(body);
    match parse_vclocks(&mut reader) {
        Ok(vclocks) => {
            log::debug!("found {} siblings", vclocks.len());
            Error::MultipleChoices(Siblings::Vclocks(vclocks))
        }
        Err(e) => {
            let _ = io::copy(&mut reader, &mut io::sink());
            e
        }
    }
}

/// Builds the conflict error for a `multipart/mixed` sibling body. Every
/// sibling that decoded is kept, together with the last part error.
pub fn multiple_objects<R: Read>(headers: &Multimap, body: R) -> Error {
    let siblings = decode_objects(headers, body);
    log::debug!(
        "found {} sibling objects (error: {:?})",
        siblings.objects.len(),
        siblings.error
    );
    Error::MultipleChoices(Siblings::Objects(siblings))
}

/// Builds the conflict error for a `300` response, choosing the body format
/// from its `Content-Type`.
pub fn sibling_error(headers: &Multimap, body: &[u8]) -> Error {
    if is_multipart(headers) {
        multiple_objects(headers, body)
    } else {
        multiple(body)
    }
}

/// Returns `true` if the fetched body should be decoded as sibling objects.
pub fn is_multipart(headers: &Multimap) -> bool {
    headers
        .get_ci(CONTENT_TYPE)
        .map(|ct| ct.trim_start().to_ascii_lowercase().starts_with("multipart/"))
        .unwrap_or(false)
}
