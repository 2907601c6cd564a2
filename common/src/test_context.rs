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

use crate::mock_riak::MockRiak;
use riak::riak::RiakClient;
use riak::riak::http::BaseUrl;

/// Where a test sends its requests: the node named by `RIAK_URL`, or a
/// fresh in-process mock.
pub struct TestContext {
    pub client: RiakClient,
    pub base_url: BaseUrl,
    /// Present when no live node is configured.
    pub mock: Option<MockRiak>,
}

/// Routes `log` output through the test harness; `RUST_LOG` selects the level.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

impl TestContext {
    pub async fn new_from_env() -> Self {
        init_logging();
        match std::env::var("RIAK_URL") {
            Ok(url) if !url.is_empty() => {
                let base_url: BaseUrl = url.parse().expect("RIAK_URL is a valid base url");
                log::info!("testing against live node {base_url}");
                Self {
                    client: RiakClient::new(base_url.clone()).expect("client for RIAK_URL"),
                    base_url,
                    mock: None,
                }
            }
            _ => Self::mocked().await,
        }
    }

    pub async fn mocked() -> Self {
        init_logging();
        let mock = MockRiak::start().await.expect("mock riak node");
        Self {
            client: mock.client(),
            base_url: mock.base_url(),
            mock: Some(mock),
        }
    }

    /// The mock node; panics when testing against a live node.
    pub fn mock(&self) -> &MockRiak {
        self.mock.as_ref().expect("test needs the mock node")
    }
}
