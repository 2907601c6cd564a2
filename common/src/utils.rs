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

use uuid::Uuid;

pub fn rand_bucket_name() -> String {
    format!("test-{}", &Uuid::new_v4().simple().to_string()[..8])
}

pub fn rand_key() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Builds a two-level link walk body: one outer part per phase, each a
/// multipart document holding the given `(location, content type, body)`
/// objects.
pub fn walk_body(outer: &str, phases: &[(&str, &[(&str, &str, &str)])]) -> String {
    let mut body = String::new();
    for (inner, objects) in phases {
        body.push_str(&format!(
            "\r\n--{outer}\r\nContent-Type: multipart/mixed; boundary={inner}\r\n\r\n"
        ));
        for (location, content_type, data) in *objects {
            body.push_str(&format!(
                "--{inner}\r\nLocation: {location}\r\nContent-Type: {content_type}\r\n\r\n{data}\r\n"
            ));
        }
        body.push_str(&format!("--{inner}--\r\n"));
    }
    body.push_str(&format!("\r\n--{outer}--\r\n"));
    body
}
