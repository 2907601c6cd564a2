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

use riak::riak::RiakClientBuilder;
use riak::riak::error::Error;
use riak::riak::types::{BucketProps, RiakApi};
use riak_common::mock_riak::{MockResponse, MockRiak};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn client_id_header() {
    let mock = MockRiak::start().await.unwrap();
    mock.enqueue(MockResponse::new(204));

    let client = RiakClientBuilder::new(mock.base_url())
        .client_id(Some("riak-rs-test".into()))
        .app_info(Some(("riak-tests".into(), "1.0".into())))
        .build()
        .unwrap();
    client.reset_bucket_props("users").build().send().await.unwrap();

    let req = mock.last_request();
    assert_eq!(req.header("x-riak-clientid"), Some("riak-rs-test"));
    let agent = req.header("user-agent").unwrap();
    assert!(agent.starts_with("Riak ("), "{agent}");
    assert!(agent.ends_with(" riak-tests/1.0"), "{agent}");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn round_robin_over_hosts() {
    let first = MockRiak::start().await.unwrap();
    let second = MockRiak::start().await.unwrap();
    for _ in 0..2 {
        first.enqueue(MockResponse::new(204));
        second.enqueue(MockResponse::new(204));
    }

    let client = RiakClientBuilder::with_hosts(vec![first.base_url(), second.base_url()])
        .build()
        .unwrap();
    for _ in 0..4 {
        client.reset_bucket_props("users").build().send().await.unwrap();
    }

    assert_eq!(first.requests().len(), 2);
    assert_eq!(second.requests().len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn status_codes_map_to_errors() {
    let mock = MockRiak::start().await.unwrap();
    let client = mock.client();

    let cases: [(u16, fn(&Error) -> bool); 3] = [
        (400, |e| matches!(e, Error::BadRequest)),
        (503, |e| matches!(e, Error::Timeout)),
        (500, |e| matches!(e, Error::StatusCode(500))),
    ];
    for (status, check) in cases {
        mock.enqueue(MockResponse::new(status).body("error text"));
        let err = client
            .fetch_object("users", "bob")
            .build()
            .send()
            .await
            .unwrap_err();
        assert!(check(&err), "{status}: {err:?}");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn connection_refused() {
    let mock = MockRiak::start().await.unwrap();
    let client = mock.client();
    drop(mock);
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let err = client
        .fetch_object("users", "bob")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpError(_)), "{err:?}");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn requests_with_bodies_share_a_connection() {
    let mock = MockRiak::start().await.unwrap();
    let client = mock.client();
    for _ in 0..3 {
        mock.enqueue(MockResponse::new(204));
    }

    for n_val in [3, 5] {
        let props = BucketProps {
            n_val: Some(n_val),
            ..Default::default()
        };
        client
            .set_bucket_props("users", props)
            .build()
            .send()
            .await
            .unwrap();
    }
    client.reset_bucket_props("users").build().send().await.unwrap();

    let requests = mock.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(&requests[0].body[..], br#"{"props":{"n_val":3}}"#);
    assert_eq!(&requests[1].body[..], br#"{"props":{"n_val":5}}"#);
    assert_eq!(requests[2].method, "DELETE");
    assert!(requests[2].body.is_empty());
}
