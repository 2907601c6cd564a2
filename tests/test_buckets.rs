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

use riak::riak::error::Error;
use riak::riak::types::{BucketProps, Quorum, RiakApi};
use riak_common::mock_riak::MockResponse;
use riak_common::test_context::TestContext;

fn json(body: &str) -> MockResponse {
    MockResponse::new(200)
        .header("Content-Type", "application/json")
        .body(body.to_string())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn index_lookup() {
    let ctx = TestContext::mocked().await;
    ctx.mock().enqueue(json(r#"{"keys":["bob","bob_2"]}"#));
    ctx.mock().enqueue(json(r#"{"keys":[]}"#));

    let resp = ctx
        .client
        .index_lookup("users", "username_bin", "bob")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.keys, ["bob", "bob_2"]);
    assert_eq!(
        ctx.mock().last_request().path,
        "/buckets/users/index/username_bin/bob"
    );

    let resp = ctx
        .client
        .index_range("users", "age_int", "18", "30")
        .build()
        .send()
        .await
        .unwrap();
    assert!(resp.keys.is_empty());
    assert_eq!(
        ctx.mock().last_request().path,
        "/buckets/users/index/age_int/18/30"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn index_lookup_rejects_empty_arguments() {
    let ctx = TestContext::mocked().await;
    let err = ctx
        .client
        .index_lookup("users", "", "bob")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(ctx.mock().requests().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn list_buckets_and_keys() {
    let ctx = TestContext::mocked().await;
    ctx.mock().enqueue(json(r#"{"buckets":["users","events"]}"#));
    ctx.mock().enqueue(json(r#"{"keys":["bob","alice"]}"#));

    let resp = ctx.client.list_buckets().build().send().await.unwrap();
    assert_eq!(resp.buckets, ["users", "events"]);
    let req = ctx.mock().last_request();
    assert_eq!(req.path, "/buckets");
    assert_eq!(req.query_param("buckets"), Some("true"));

    let resp = ctx.client.list_keys("users").build().send().await.unwrap();
    assert_eq!(resp.keys, ["bob", "alice"]);
    let req = ctx.mock().last_request();
    assert_eq!(req.path, "/buckets/users/keys");
    assert_eq!(req.query_param("keys"), Some("true"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn list_buckets_unexpected_body() {
    let ctx = TestContext::mocked().await;
    ctx.mock().enqueue(json(r#"{"keys":[]}"#));

    let err = ctx.client.list_buckets().build().send().await.unwrap_err();
    assert!(matches!(err, Error::JsonError(_)), "{err:?}");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn bucket_props() {
    let ctx = TestContext::mocked().await;
    ctx.mock().enqueue(json(
        r#"{"props":{"name":"users","n_val":3,"allow_mult":false,"last_write_wins":false,
        "precommit":[],"postcommit":[],
        "chash_keyfun":{"mod":"riak_core_util","fun":"chash_std_keyfun"},
        "linkfun":{"mod":"riak_kv_wm_link_walker","fun":"mapreduce_linkfun"},
        "old_vclock":86400,"young_vclock":20,"big_vclock":50,"small_vclock":50,
        "r":"quorum","w":"quorum","dw":"quorum","rw":"quorum"}}"#,
    ));
    ctx.mock().enqueue(MockResponse::new(204));
    ctx.mock().enqueue(MockResponse::new(204));

    let resp = ctx.client.get_bucket_props("users").build().send().await.unwrap();
    assert_eq!(resp.props.n_val, Some(3));
    assert_eq!(resp.props.allow_mult, Some(false));
    assert_eq!(resp.props.w, Some(Quorum::Named("quorum".into())));
    assert_eq!(resp.props.linkfun.unwrap().fun, "mapreduce_linkfun");

    let props = BucketProps {
        allow_mult: Some(true),
        n_val: Some(5),
        ..Default::default()
    };
    ctx.client
        .set_bucket_props("users", props)
        .build()
        .send()
        .await
        .unwrap();
    let req = ctx.mock().last_request();
    assert_eq!(req.method, "PUT");
    assert_eq!(req.path, "/buckets/users/props");
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(&req.body[..], br#"{"props":{"n_val":5,"allow_mult":true}}"#);

    ctx.client
        .reset_bucket_props("users")
        .build()
        .send()
        .await
        .unwrap();
    let req = ctx.mock().last_request();
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.path, "/buckets/users/props");
}
