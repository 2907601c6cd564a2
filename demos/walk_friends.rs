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

use riak::riak::Object;
use riak::riak::RiakClient;
use riak::riak::types::RiakApi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="DEBUG" to see every request
    let client: RiakClient = RiakClient::create_client_on_localhost()?;

    let mut alice = Object::new("people", "alice")
        .with_content_type("application/json")
        .with_body(r#"{"name":"Alice"}"#);
    client.store_object(&mut alice).build().send().await?;

    let mut carol = Object::new("people", "carol")
        .with_content_type("application/json")
        .with_body(r#"{"name":"Carol"}"#);
    client.store_object(&mut carol).build().send().await?;

    let mut bob = Object::new("people", "bob")
        .with_content_type("application/json")
        .with_body(r#"{"name":"Bob"}"#);
    bob.add_link_to("friend", &alice);
    bob.add_link_to("colleague", &carol);
    bob.add_index("age_int", "42");
    client.store_object(&mut bob).build().send().await?;
    println!("stored {} (vclock {})", bob.path(), bob.vclock);

    let friends = client
        .walk_link(&bob, "friend")
        .build()
        .send()
        .await?
        .into_objects()?;
    for friend in &friends {
        println!(
            "{}: {}",
            friend.path(),
            String::from_utf8_lossy(friend.body_bytes())
        );
    }

    let resp = client
        .index_lookup("people", "age_int", "42")
        .build()
        .send()
        .await?;
    println!("42 year olds: {:?}", resp.keys);

    Ok(())
}
