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

use crate::riak::error::Error;
use crate::riak::multimap_ext::{Multimap, MultimapExt};
use hyper::Uri;
use std::fmt;
use std::str::FromStr;

/// Port of the Riak HTTP listener unless configured otherwise.
pub const DEFAULT_PORT: u16 = 8098;

#[derive(Clone, Debug)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl Default for Url {
    fn default() -> Self {
        Self {
            https: false,
            host: String::default(),
            port: u16::default(),
            path: String::default(),
            query: Multimap::default(),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }

        if self.host.is_empty() {
            f.write_str("<invalid-host>")?;
        } else {
            f.write_str(&self.host_header_value())?;
        }

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents the base URL of one Riak node
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            https: false,
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    /// Convert a string to a BaseUrl.
    ///
    /// Without a scheme, plain HTTP is used. Without a port, the Riak
    /// default `8098` is used for HTTP and the scheme default for HTTPS.
    ///
    /// # Examples
    ///
    /// ```
    /// use riak::riak::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "riak1.example.com".parse().unwrap();
    /// assert_eq!(base_url.port(), 8098);
    /// let base_url: BaseUrl = "http://192.168.124.63:10018".parse().unwrap();
    /// let base_url: BaseUrl = "[::1]:8098".parse().unwrap();
    /// ```
    fn from_str(s: &str) -> Result<Self, Error> {
        let url = s.parse::<Uri>()?;

        let https = match url.scheme() {
            None => false,
            Some(scheme) => match scheme.as_str() {
                "http" => false,
                "https" => true,
                _ => {
                    return Err(Error::InvalidBaseUrl(
                        "scheme must be http or https".into(),
                    ));
                }
            },
        };

        let mut host = match url.host() {
            Some(h) if !h.is_empty() => h,
            _ => {
                return Err(Error::InvalidBaseUrl("valid host must be provided".into()));
            }
        };

        let ipv6host = "[".to_string() + host + "]";
        if host.parse::<std::net::Ipv6Addr>().is_ok() {
            host = &ipv6host;
        }

        let mut port = match url.port() {
            Some(p) => p.as_u16(),
            None if https => 0u16,
            None => DEFAULT_PORT,
        };

        if (https && port == 443) || (!https && port == 80) {
            port = 0u16;
        }

        if url.path() != "/" && !url.path().is_empty() {
            return Err(Error::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }

        if url.query().is_some() {
            return Err(Error::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        Ok(BaseUrl {
            https,
            host: host.to_string(),
            port,
        })
    }
}

impl BaseUrl {
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port of the node; `0` means the scheme default.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Builds the URL of `path` on this node.
    pub fn build_url(&self, path: &str, query: &Multimap) -> Url {
        Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: path.to_string(),
            query: query.clone(),
        }
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let url = Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: String::new(),
            query: Multimap::new(),
        };
        let s = url.to_string();
        f.write_str(s.trim_end_matches('/'))
    }
}
