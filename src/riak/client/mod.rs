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

//! Riak client to perform object, link, index and bucket operations.
//!
//! Requests are spread round-robin over the configured nodes. Every request
//! carries the `X-Riak-ClientId` header; Riak uses it to attribute vclock
//! entries.

use bytes::Bytes;
pub use hyper::http::Method;
pub use reqwest::Response;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

use crate::riak::error::Error;
use crate::riak::header_constants::*;
use crate::riak::http::BaseUrl;
use crate::riak::multimap_ext::{Multimap, MultimapExt};

mod bucket_props;
mod buckets;
mod delete_object;
mod fetch_object;
mod index_lookup;
mod store_object;
mod update_object;
mod walk_link;

/// Configuration for the HTTP connection pool.
///
/// # Example
///
/// ```
/// use riak::riak::client::ConnectionPoolConfig;
/// use std::time::Duration;
///
/// let config = ConnectionPoolConfig::default()
///     .max_idle_per_host(64)
///     .idle_timeout(Duration::from_secs(120));
/// ```
#[derive(Debug, Clone)]
pub struct ConnectionPoolConfig {
    /// Maximum number of idle connections per host. Default: 32
    pub max_idle_per_host: usize,

    /// How long idle connections are kept in the pool. Default: 90 seconds
    pub idle_timeout: std::time::Duration,

    /// TCP keepalive interval. Default: 60 seconds
    pub tcp_keepalive: std::time::Duration,

    /// Enable TCP_NODELAY (disable Nagle's algorithm). Default: true
    pub tcp_nodelay: bool,
}

impl Default for ConnectionPoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 32,
            idle_timeout: std::time::Duration::from_secs(90),
            tcp_keepalive: std::time::Duration::from_secs(60),
            tcp_nodelay: true,
        }
    }
}

impl ConnectionPoolConfig {
    /// Set the maximum number of idle connections per host.
    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    /// Set how long idle connections are kept in the pool.
    pub fn idle_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    /// Set the TCP keepalive interval.
    pub fn tcp_keepalive(mut self, interval: std::time::Duration) -> Self {
        self.tcp_keepalive = interval;
        self
    }

    /// Enable or disable TCP_NODELAY (Nagle's algorithm).
    pub fn tcp_nodelay(mut self, enable: bool) -> Self {
        self.tcp_nodelay = enable;
        self
    }
}

/// Client Builder manufactures a [`RiakClient`] using given parameters.
#[derive(Debug)]
pub struct RiakClientBuilder {
    hosts: Vec<BaseUrl>,
    /// Value of `X-Riak-ClientId`. A random UUID is used if not set.
    client_id: Option<String>,
    /// Set flag to ignore certificate check. This is insecure and should only be used for testing.
    ignore_cert_check: Option<bool>,
    /// Set the app info as an Option of (app_name, app_version) pair. This will show up in the client's user-agent.
    app_info: Option<(String, String)>,
    /// HTTP connection pool configuration.
    connection_pool_config: ConnectionPoolConfig,
}

impl RiakClientBuilder {
    /// Creates a builder for a client talking to the node at `base_url`.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            hosts: vec![base_url],
            client_id: None,
            ignore_cert_check: None,
            app_info: None,
            connection_pool_config: ConnectionPoolConfig::default(),
        }
    }

    /// Creates a builder for a client spreading requests over `hosts`.
    pub fn with_hosts(hosts: Vec<BaseUrl>) -> Self {
        Self {
            hosts,
            ..Self::new(BaseUrl::default())
        }
    }

    /// Adds another node.
    pub fn host(mut self, base_url: BaseUrl) -> Self {
        self.hosts.push(base_url);
        self
    }

    /// Sets the `X-Riak-ClientId` sent with every request.
    pub fn client_id(mut self, client_id: Option<String>) -> Self {
        self.client_id = client_id;
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Set flag to ignore certificate check. This is insecure and should only
    /// be used for testing.
    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    /// Configure the HTTP connection pool settings.
    pub fn connection_pool_config(mut self, config: ConnectionPoolConfig) -> Self {
        self.connection_pool_config = config;
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<RiakClient, Error> {
        if self.hosts.is_empty() {
            return Err(Error::InvalidBaseUrl(
                "at least one host must be provided".into(),
            ));
        }

        let pool_config = &self.connection_pool_config;
        let mut builder = reqwest::Client::builder()
            .no_gzip()
            .tcp_nodelay(pool_config.tcp_nodelay)
            .tcp_keepalive(pool_config.tcp_keepalive)
            .pool_max_idle_per_host(pool_config.max_idle_per_host)
            .pool_idle_timeout(pool_config.idle_timeout);

        let mut user_agent = String::from("Riak (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") riak-rs/"
            + env!("CARGO_PKG_VERSION");

        if let Some((app_name, app_version)) = self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent);

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ignore_cert_check {
            builder = builder.danger_accept_invalid_certs(v);
        }

        let client_id = match self.client_id {
            Some(id) if !id.is_empty() => id,
            _ => Uuid::new_v4().to_string(),
        };

        Ok(RiakClient {
            http_client: builder.build()?,
            shared: Arc::new(SharedClientItems {
                hosts: self.hosts,
                client_id,
                next_host: AtomicUsize::new(0),
            }),
        })
    }
}

/// Riak HTTP client.
///
/// Cloning is cheap; clones share the connection pool, the node list and
/// the client id.
#[derive(Clone, Debug)]
pub struct RiakClient {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
}

impl RiakClient {
    /// Returns a client for the node at `base_url`.
    ///
    /// # Examples
    ///
    /// ```
    /// use riak::riak::client::RiakClient;
    /// use riak::riak::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "http://127.0.0.1:8098".parse().unwrap();
    /// let client = RiakClient::new(base_url).unwrap();
    /// ```
    pub fn new(base_url: BaseUrl) -> Result<Self, Error> {
        RiakClientBuilder::new(base_url).build()
    }

    /// Value sent as `X-Riak-ClientId`.
    pub fn client_id(&self) -> &str {
        &self.shared.client_id
    }

    /// Configured nodes, in rotation order.
    pub fn hosts(&self) -> &[BaseUrl] {
        &self.shared.hosts
    }

    fn next_host(&self) -> &BaseUrl {
        let hosts = &self.shared.hosts;
        let i = self.shared.next_host.fetch_add(1, Ordering::Relaxed);
        &hosts[i % hosts.len()]
    }

    /// Sends one request to the next node.
    ///
    /// `2xx`, `300 Multiple Choices` and `304 Not Modified` are returned as
    /// responses; every other status is drained and mapped with
    /// [`Error::from_status`].
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        headers: &mut Multimap,
        query_params: &Multimap,
        body: Option<Bytes>,
    ) -> Result<reqwest::Response, Error> {
        let url = self.next_host().build_url(path, query_params);
        headers.set(X_RIAK_CLIENT_ID, self.shared.client_id.as_str());

        log::debug!("{method} {url}");

        let mut req = self.http_client.request(method.clone(), url.to_string());
        for (key, values) in headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }

        if method == Method::PUT || method == Method::POST {
            req = req.body(body.unwrap_or_default());
        } else if let Some(b) = body {
            req = req.body(b);
        }

        let resp = match req.send().await {
            Ok(r) => r,
            Err(e) => {
                log::warn!("{method} {url} failed: {e}");
                return Err(e.into());
            }
        };

        let status = resp.status().as_u16();
        match status {
            200..=299 | 300 | 304 => Ok(resp),
            _ => {
                log::debug!("{method} {url} returned {status}");
                // drain so the connection can be reused
                let _ = resp.bytes().await;
                Err(Error::from_status(status))
            }
        }
    }

    /// create an example client for testing on localhost
    pub fn create_client_on_localhost() -> Result<RiakClient, Error> {
        let base_url = "http://127.0.0.1:8098".parse::<BaseUrl>()?;
        log::info!("Trying to connect to Riak at: `{base_url}`");
        RiakClientBuilder::new(base_url).build()
    }
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) hosts: Vec<BaseUrl>,
    pub(crate) client_id: String,
    next_host: AtomicUsize,
}
