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

use riak::riak::error::{Error, Siblings};
use riak::riak::types::{BucketProps, RiakApi};
use riak::riak::{Object, RiakClient};

const BUCKET: &str = "carts";
const KEY: &str = "cart-17";

/// Keeps the most recently modified sibling and writes it back under the
/// shared vclock, which collapses the siblings.
async fn resolve(client: &RiakClient, siblings: Vec<Object>) -> Result<Object, Error> {
    let Some(newest) = siblings.into_iter().max_by_key(|o| o.last_modified) else {
        return Err(Error::NotFound);
    };

    let mut resolved = Object::new(BUCKET, KEY).with_body(newest.body_bytes());
    resolved.content_type = newest.content_type.clone();
    resolved.vclock = newest.vclock.clone();
    resolved.links = newest.links.clone();
    resolved.meta = newest.meta.clone();
    resolved.index = newest.index.clone();

    client.store_object(&mut resolved).build().send().await?;
    Ok(resolved)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="DEBUG" to see every request
    let client: RiakClient = RiakClient::create_client_on_localhost()?;

    let props = BucketProps {
        allow_mult: Some(true),
        ..Default::default()
    };
    client.set_bucket_props(BUCKET, props).build().send().await?;

    // two writers without a vclock produce siblings
    for item in ["apples", "pears"] {
        let mut cart = Object::new(BUCKET, KEY).with_body(item);
        client.store_object(&mut cart).build().send().await?;
    }

    let cart = match client
        .fetch_object(BUCKET, KEY)
        .siblings_as_objects(true)
        .build()
        .send()
        .await
    {
        Ok(resp) => resp.object,
        Err(Error::MultipleChoices(Siblings::Objects(partial))) => {
            println!("{} siblings", partial.objects.len());
            resolve(&client, partial.into_result()?).await?
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "{} = {:?} (vclock {})",
        cart.path(),
        String::from_utf8_lossy(cart.body_bytes()),
        cart.vclock
    );
    Ok(())
}
