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
use riak::riak::error::Error;
use riak::riak::types::RiakApi;
use riak_common::mock_riak::MockResponse;
use riak_common::test_context::TestContext;
use riak_common::utils::walk_body;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn walk_link() {
    let ctx = TestContext::mocked().await;
    let body = walk_body(
        "AKMzxOZ0PHVRHGxkvNnD3Yd5oKm",
        &[
            (
                "7LYOl6AaCNzvcgDlXv0zvAsxj3k",
                &[
                    ("/riak/people/alice", "application/json", "{\"name\":\"Alice\"}"),
                    ("/riak/people/carol", "application/json", "{\"name\":\"Carol\"}"),
                ],
            ),
            (
                "OmL6mTXrNJsVQEpUAjbFgpEzmJ3",
                &[("/riak/people/dave", "text/plain", "dave")],
            ),
        ],
    );
    ctx.mock().enqueue(
        MockResponse::new(200)
            .header("Content-Type", "multipart/mixed; boundary=AKMzxOZ0PHVRHGxkvNnD3Yd5oKm")
            .body(body),
    );

    let mut bob = Object::new("people", "bob");
    bob.add_link("friend", "people", "alice");

    let resp = ctx
        .client
        .walk_link(&bob, "friend")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(
        ctx.mock().last_request().path,
        "/riak/people/bob/people,friend,_"
    );

    let objects = resp.into_objects().unwrap();
    let paths: Vec<String> = objects.iter().map(Object::path).collect();
    assert_eq!(
        paths,
        ["/riak/people/alice", "/riak/people/carol", "/riak/people/dave"]
    );
    assert_eq!(objects[1].body_bytes(), b"{\"name\":\"Carol\"}");
    assert_eq!(objects[2].content_type, "text/plain");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn walk_link_partial_failure() {
    let ctx = TestContext::mocked().await;
    let body = "\r\n--outer\r\nContent-Type: multipart/mixed; boundary=inner\r\n\r\n\
--inner\r\nLocation: /riak/people/alice\r\n\r\nalice\r\n\
--inner\r\nthis is not a header line\r\n\r\nbroken\r\n\
--inner\r\nLocation: /riak/people/carol\r\n\r\ncarol\r\n\
--inner--\r\n\r\n--outer--\r\n";
    ctx.mock().enqueue(
        MockResponse::new(200)
            .header("Content-Type", "multipart/mixed; boundary=outer")
            .body(body),
    );

    let mut bob = Object::new("people", "bob");
    bob.add_link("friend", "", "");

    let resp = ctx
        .client
        .walk_link(&bob, "friend")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(ctx.mock().last_request().path, "/riak/people/bob/_,friend,_");

    let keys: Vec<&str> = resp.objects.iter().map(|o| o.key()).collect();
    assert_eq!(keys, ["alice", "carol"]);
    assert!(matches!(
        resp.error.as_deref(),
        Some(Error::InvalidMultipart(_))
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn walk_missing_link() {
    let ctx = TestContext::mocked().await;
    let bob = Object::new("people", "bob");

    let err = ctx
        .client
        .walk_link(&bob, "enemy")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::LinkNotFound(ref t) if t == "enemy"));
    assert!(ctx.mock().requests().is_empty());
}
