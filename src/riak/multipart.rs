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

//! Decoding of `multipart/mixed` responses into objects.
//!
//! Riak answers a link walk, and a fetch that accepts `multipart/mixed`
//! while siblings exist, with one MIME part per object. Each part carries
//! the same headers as a single-object response, so parts are decoded with
//! [`Object::from_response`].
//!
//! A link walk nests one `multipart/mixed` document per phase inside the
//! outer document; nested documents are expanded in place.

use crate::riak::error::Error;
use crate::riak::header_constants::*;
use crate::riak::multimap_ext::{Multimap, MultimapExt};
use crate::riak::object::Object;
use crate::riak::pool;
use crate::riak::utils::parse_media_type;
use bytes::BytesMut;
use std::io::{self, BufRead, BufReader, Read};

/// Objects decoded from a multipart body, with the last error met while
/// decoding. A present error does not discard the objects decoded around it.
#[derive(Debug, Default)]
pub struct PartialObjects {
    pub objects: Vec<Object>,
    pub error: Option<Box<Error>>,
}

impl PartialObjects {
    /// Returns the objects, or the deferred error if there is one.
    pub fn into_result(self) -> Result<Vec<Object>, Error> {
        match self.error {
            Some(e) => Err(*e),
            None => Ok(self.objects),
        }
    }

    /// Returns every object to the process-wide pool.
    pub fn release(self) {
        self.objects.into_iter().for_each(pool::release);
    }

    fn defer(&mut self, err: Error) {
        log::warn!("skipping multipart part: {err}");
        self.error = Some(Box::new(err));
    }
}

/// A single MIME part.
#[derive(Debug, Default)]
pub struct Part {
    pub headers: Multimap,
    pub body: BytesMut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReaderState {
    Preamble,
    Parts,
    Done,
}

enum Delimiter {
    Next,
    Close,
}

enum HeaderBlock {
    /// Headers up to the blank line, with the last malformed line if any.
    Complete(Multimap, Option<Error>),
    /// A delimiter came before the blank line; the part has no body.
    Cut,
}

/// Iterates over the parts of a multipart body.
///
/// A malformed part header yields an error for that part only; enumeration
/// continues with the next part. A framing error (missing boundary,
/// truncated stream) or a read error yields an error and ends enumeration.
pub struct MultipartReader<R> {
    reader: R,
    dash_boundary: Vec<u8>,
    state: ReaderState,
    line: Vec<u8>,
}

impl<R: BufRead> MultipartReader<R> {
    pub fn new(reader: R, boundary: &str) -> Self {
        let mut dash_boundary = Vec::with_capacity(boundary.len() + 2);
        dash_boundary.extend_from_slice(b"--");
        dash_boundary.extend_from_slice(boundary.as_bytes());
        Self {
            reader,
            dash_boundary,
            state: ReaderState::Preamble,
            line: Vec::with_capacity(256),
        }
    }

    /// Returns the underlying reader, positioned wherever enumeration stopped.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_line(&mut self) -> io::Result<bool> {
        self.line.clear();
        Ok(self.reader.read_until(b'\n', &mut self.line)? > 0)
    }

    fn delimiter(&self) -> Option<Delimiter> {
        let line = trim_line_end(&self.line);
        let rest = line.strip_prefix(self.dash_boundary.as_slice())?;
        let rest = trim_padding(rest);
        if rest.is_empty() {
            Some(Delimiter::Next)
        } else if rest == b"--" {
            Some(Delimiter::Close)
        } else {
            None
        }
    }

    fn framing_error(&mut self, msg: &str) -> Error {
        self.state = ReaderState::Done;
        Error::InvalidMultipart(msg.to_string())
    }

    fn skip_preamble(&mut self) -> Result<(), Error> {
        loop {
            if !self.read_line()? {
                return Err(self.framing_error("missing first boundary"));
            }
            match self.delimiter() {
                Some(Delimiter::Next) => {
                    self.state = ReaderState::Parts;
                    return Ok(());
                }
                Some(Delimiter::Close) => {
                    self.state = ReaderState::Done;
                    return Ok(());
                }
                None => continue,
            }
        }
    }

    // Reads the header block up to the blank line. A malformed line is
    // reported after the block has been consumed. A delimiter ends the block
    // early and belongs to the following part.
    fn read_part_headers(&mut self) -> Result<HeaderBlock, Error> {
        let mut headers = Multimap::new();
        let mut malformed = None;
        let mut last_key: Option<String> = None;

        loop {
            if !self.read_line()? {
                return Err(self.framing_error("unexpected end of part headers"));
            }
            match self.delimiter() {
                Some(Delimiter::Next) => return Ok(HeaderBlock::Cut),
                Some(Delimiter::Close) => {
                    self.state = ReaderState::Done;
                    return Ok(HeaderBlock::Cut);
                }
                None => {}
            }

            let line = String::from_utf8_lossy(trim_line_end(&self.line)).into_owned();
            if line.is_empty() {
                return Ok(HeaderBlock::Complete(headers, malformed));
            }

            if line.starts_with([' ', '\t']) {
                // folded continuation of the previous header
                if let Some(values) = last_key.as_ref().and_then(|k| headers.get_vec_mut(k)) {
                    if let Some(v) = values.last_mut() {
                        v.push(' ');
                        v.push_str(line.trim());
                        continue;
                    }
                }
            }

            match line.split_once(':') {
                Some((name, value)) if !name.trim().is_empty() && !name.contains(' ') => {
                    let name = name.trim().to_string();
                    headers.add(name.clone(), value.trim());
                    last_key = Some(name);
                }
                _ => {
                    malformed =
                        Some(Error::InvalidMultipart(format!("malformed part header {line:?}")));
                }
            }
        }
    }

    fn read_part_body(&mut self) -> Result<BytesMut, Error> {
        let mut body = BytesMut::new();
        loop {
            if !self.read_line()? {
                return Err(self.framing_error("unexpected end of multipart body"));
            }
            match self.delimiter() {
                Some(Delimiter::Next) => break,
                Some(Delimiter::Close) => {
                    self.state = ReaderState::Done;
                    break;
                }
                None => body.extend_from_slice(&self.line),
            }
        }

        // the line break before a delimiter belongs to the delimiter
        if body.ends_with(b"\r\n") {
            body.truncate(body.len() - 2);
        } else if body.ends_with(b"\n") {
            body.truncate(body.len() - 1);
        }
        Ok(body)
    }

    fn next_part(&mut self) -> Result<Option<Part>, Error> {
        if self.state == ReaderState::Preamble {
            self.skip_preamble()?;
        }
        if self.state == ReaderState::Done {
            return Ok(None);
        }

        let (headers, malformed) = match self.read_part_headers()? {
            HeaderBlock::Complete(headers, malformed) => (headers, malformed),
            HeaderBlock::Cut => {
                return Err(Error::InvalidMultipart(
                    "part headers not terminated by a blank line".into(),
                ));
            }
        };
        let body = self.read_part_body()?;
        match malformed {
            Some(e) => Err(e),
            None => Ok(Some(Part { headers, body })),
        }
    }
}

impl<R: BufRead> Iterator for MultipartReader<R> {
    type Item = Result<Part, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_part() {
            Ok(part) => part.map(Ok),
            Err(e) => {
                if let Error::IOError(_) = e {
                    self.state = ReaderState::Done;
                }
                Some(Err(e))
            }
        }
    }
}

fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn trim_padding(mut s: &[u8]) -> &[u8] {
    while let [rest @ .., b' ' | b'\t'] = s {
        s = rest;
    }
    s
}

/// Returns the boundary if `content_type` names a multipart document.
///
/// `Ok(None)` means the body is a single representation.
pub fn multipart_boundary(content_type: &str) -> Result<Option<String>, Error> {
    if content_type.is_empty() {
        return Ok(None);
    }
    let (media_type, mut params) = match parse_media_type(content_type) {
        Ok(v) => v,
        Err(e) => {
            log::debug!("treating body as a single object: {e}");
            return Ok(None);
        }
    };
    if !media_type.starts_with("multipart/") {
        return Ok(None);
    }
    match params.remove("boundary") {
        Some(b) if !b.is_empty() => Ok(Some(b)),
        _ => Err(Error::InvalidMultipart(format!(
            "no boundary in {content_type:?}"
        ))),
    }
}

/// Decodes a response into objects.
///
/// A multipart response yields one object per part, in stream order; a
/// part that fails is skipped and its error deferred. Any other response is
/// decoded as a single object from `headers` and the whole body.
///
/// The body is read to its end before returning, whatever the outcome.
/// Objects come from the process-wide [`pool`]; hand them back with
/// [`PartialObjects::release`] once done.
pub fn decode_objects<R: Read>(headers: &Multimap, body: R) -> PartialObjects {
    let mut out = PartialObjects::default();
    let content_type = headers.get_ci(CONTENT_TYPE).unwrap_or_default();

    match multipart_boundary(content_type) {
        Ok(Some(boundary)) => {
            let shared_vclock = headers.get_ci(X_RIAK_VCLOCK).unwrap_or_default();
            let mut reader = MultipartReader::new(BufReader::new(body), &boundary);
            decode_parts(&mut reader, shared_vclock, &mut out);
            drain(reader.into_inner());
        }
        Ok(None) => {
            let mut obj = pool::acquire();
            match obj.from_response(Some(headers), Some(body)) {
                Ok(()) => out.objects.push(obj),
                Err(e) => {
                    pool::release(obj);
                    out.defer(e);
                }
            }
        }
        Err(e) => {
            drain(body);
            out.defer(e);
        }
    }
    out
}

fn decode_parts<R: BufRead>(
    reader: &mut MultipartReader<R>,
    shared_vclock: &str,
    out: &mut PartialObjects,
) {
    for part in reader {
        let part = match part {
            Ok(p) => p,
            Err(e) => {
                out.defer(e);
                continue;
            }
        };

        let content_type = part.headers.get_ci(CONTENT_TYPE).unwrap_or_default();
        match multipart_boundary(content_type) {
            Ok(Some(boundary)) => {
                let mut nested = MultipartReader::new(&part.body[..], &boundary);
                decode_parts(&mut nested, shared_vclock, out);
                continue;
            }
            Ok(None) => {}
            Err(e) => {
                out.defer(e);
                continue;
            }
        }

        let mut obj = pool::acquire();
        match obj.from_response(Some(&part.headers), Some(&part.body[..])) {
            Ok(()) => {
                if obj.vclock.is_empty() {
                    obj.vclock.push_str(shared_vclock);
                }
                out.objects.push(obj);
            }
            Err(e) => {
                pool::release(obj);
                out.defer(e);
            }
        }
    }
}

fn drain<R: Read>(mut body: R) {
    if let Err(e) = io::copy(&mut body, &mut io::sink()) {
        log::debug!("failed to drain response body: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riak::object::Link;

    fn multipart_headers(boundary: &str) -> Multimap {
        let mut hdr = Multimap::new();
        hdr.add("Content-Type", format!("multipart/mixed; boundary={boundary}"));
        hdr
    }

    const WALK_BODY: &str = "\r\n--AKMzxOZ0PHVRHGxkvNnD3Yd5oKm\r\n\
Content-Type: multipart/mixed; boundary=7LYOl6AaCNzvcgDlXv0zvAsxj3k\r\n\
\r\n\
--7LYOl6AaCNzvcgDlXv0zvAsxj3k\r\n\
X-Riak-Vclock: a85hYGBgzGDKBVIcypz/fgaUHjmdwZTImMfKcN3h1Um+LAA=\r\n\
Location: /riak/testing/anotherKey\r\n\
Content-Type: text/plain\r\n\
Link: </riak/testing>; rel=\"up\"\r\n\
Etag: 7ZU1wkSTaGL5SQVdlLGVSD\r\n\
Last-Modified: Mon, 02 Jan 2006 15:04:05 GMT\r\n\
\r\n\
Some content\r\n\
--7LYOl6AaCNzvcgDlXv0zvAsxj3k\r\n\
Location: /riak/testing/thirdKey\r\n\
Content-Type: application/json\r\n\
Link: </riak/testing/testKey>; riaktag=\"parent\"\r\n\
\r\n\
{\"a\":1}\r\n\
--7LYOl6AaCNzvcgDlXv0zvAsxj3k--\r\n\
\r\n\
--AKMzxOZ0PHVRHGxkvNnD3Yd5oKm--\r\n";

    #[test]
    fn test_walk_response_flattens_phases() {
        let hdr = multipart_headers("AKMzxOZ0PHVRHGxkvNnD3Yd5oKm");
        let out = decode_objects(&hdr, WALK_BODY.as_bytes());
        assert!(out.error.is_none(), "{:?}", out.error);
        assert_eq!(out.objects.len(), 2);

        let first = &out.objects[0];
        assert_eq!(first.bucket(), "testing");
        assert_eq!(first.key(), "anotherKey");
        assert_eq!(first.content_type, "text/plain");
        assert_eq!(first.etag, "7ZU1wkSTaGL5SQVdlLGVSD");
        assert_eq!(first.body_bytes(), b"Some content");
        assert!(first.links.is_empty());
        assert!(first.last_modified.is_some());

        let second = &out.objects[1];
        assert_eq!(second.key(), "thirdKey");
        assert_eq!(second.body_bytes(), b"{\"a\":1}");
        assert_eq!(second.get_link("parent"), Some(&Link::new("testing", "testKey")));
    }

    #[test]
    fn test_partial_failure_continues() {
        let body = "--b\r\n\
Content-Type: text/plain\r\n\
\r\n\
one\r\n\
--b\r\n\
this line is not a header\r\n\
\r\n\
two\r\n\
--b\r\n\
Content-Type: text/plain\r\n\
\r\n\
three\r\n\
--b--\r\n";
        let out = decode_objects(&multipart_headers("b"), body.as_bytes());
        assert_eq!(out.objects.len(), 2);
        assert_eq!(out.objects[0].body_bytes(), b"one");
        assert_eq!(out.objects[1].body_bytes(), b"three");
        assert!(matches!(out.error.as_deref(), Some(Error::InvalidMultipart(_))));
        assert!(out.into_result().is_err());
    }

    #[test]
    fn test_unterminated_part_headers_keep_next_part() {
        let body = "--b\r\n\
Content-Type: text/plain\r\n\
--b\r\n\
Content-Type: text/plain\r\n\
\r\n\
two\r\n\
--b\r\n\
Content-Type: text/plain\r\n\
\r\n\
three\r\n\
--b--\r\n";
        let out = decode_objects(&multipart_headers("b"), body.as_bytes());
        let bodies: Vec<&[u8]> = out.objects.iter().map(Object::body_bytes).collect();
        assert_eq!(bodies, [&b"two"[..], &b"three"[..]]);
        assert!(matches!(out.error.as_deref(), Some(Error::InvalidMultipart(_))));
    }

    #[test]
    fn test_unterminated_headers_at_close_delimiter() {
        let body = "--b\r\n\
Content-Type: text/plain\r\n\
\r\n\
one\r\n\
--b\r\n\
Content-Type: text/plain\r\n\
--b--\r\n\
epilogue\r\n";
        let out = decode_objects(&multipart_headers("b"), body.as_bytes());
        assert_eq!(out.objects.len(), 1);
        assert_eq!(out.objects[0].body_bytes(), b"one");
        assert!(matches!(out.error.as_deref(), Some(Error::InvalidMultipart(_))));
    }

    #[test]
    fn test_truncated_stream_keeps_decoded_parts() {
        let body = "--b\r\n\r\none\r\n--b\r\n\r\ntwo is cut off";
        let out = decode_objects(&multipart_headers("b"), body.as_bytes());
        assert_eq!(out.objects.len(), 1);
        assert_eq!(out.objects[0].body_bytes(), b"one");
        assert!(out.error.is_some());
    }

    #[test]
    fn test_missing_first_boundary() {
        let out = decode_objects(&multipart_headers("b"), &b"no parts here"[..]);
        assert!(out.objects.is_empty());
        assert!(out.error.is_some());
    }

    #[test]
    fn test_empty_multipart_is_success() {
        let out = decode_objects(&multipart_headers("b"), &b"--b--\r\n"[..]);
        assert!(out.objects.is_empty());
        assert!(out.error.is_none());
    }

    #[test]
    fn test_missing_boundary_parameter() {
        let mut hdr = Multimap::new();
        hdr.add("Content-Type", "multipart/mixed");
        let out = decode_objects(&hdr, &b"--b--\r\n"[..]);
        assert!(out.objects.is_empty());
        assert!(matches!(out.error.as_deref(), Some(Error::InvalidMultipart(_))));
    }

    #[test]
    fn test_single_object_response() {
        let mut hdr = Multimap::new();
        hdr.add("content-type", "application/json");
        hdr.add("x-riak-vclock", "a85hYGBgzGDKBVIcR4M2cgczH7HPYEpkzGNlsP");
        let out = decode_objects(&hdr, &b"{\"name\":\"bob\"}"[..]);
        assert!(out.error.is_none());
        assert_eq!(out.objects.len(), 1);
        assert_eq!(out.objects[0].content_type, "application/json");
        assert_eq!(out.objects[0].body_bytes(), b"{\"name\":\"bob\"}");
    }

    #[test]
    fn test_siblings_share_response_vclock() {
        let mut hdr = multipart_headers("sib");
        hdr.add("X-Riak-Vclock", "shared");
        let body = "--sib\r\nContent-Type: text/plain\r\nEtag: e1\r\n\r\nv1\r\n\
--sib\r\nContent-Type: text/plain\r\nEtag: e2\r\n\r\nv2\r\n--sib--\r\n";
        let out = decode_objects(&hdr, body.as_bytes());
        let objects = out.into_result().unwrap();
        assert_eq!(objects.len(), 2);
        assert!(objects.iter().all(|o| o.vclock == "shared"));
        assert_eq!(objects[1].etag, "e2");
    }

    #[test]
    fn test_part_body_keeps_inner_line_breaks() {
        let body = "--b\r\n\r\nline one\r\nline two\n\r\n--b--";
        let out = decode_objects(&multipart_headers("b"), body.as_bytes());
        assert_eq!(out.objects[0].body_bytes(), b"line one\r\nline two\n");
    }

    #[test]
    fn test_folded_part_header() {
        let body = "--b\r\nLink: </riak/a/b>; \r\n riaktag=\"t\"\r\n\r\nx\r\n--b--\r\n";
        let out = decode_objects(&multipart_headers("b"), body.as_bytes());
        assert_eq!(out.objects[0].get_link("t"), Some(&Link::new("a", "b")));
    }

    struct Counting<'a> {
        inner: &'a [u8],
        read: &'a mut usize,
    }

    impl Read for Counting<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.inner.read(buf)?;
            *self.read += n;
            Ok(n)
        }
    }

    #[test]
    fn test_body_is_drained() {
        let body = "--b\r\n\r\none\r\n--b--\r\nepilogue that nobody parses";
        let mut read = 0;
        let out = decode_objects(
            &multipart_headers("b"),
            Counting {
                inner: body.as_bytes(),
                read: &mut read,
            },
        );
        assert_eq!(out.objects.len(), 1);
        assert_eq!(read, body.len());

        let mut read = 0;
        let mut hdr = Multimap::new();
        hdr.add("Content-Type", "multipart/mixed");
        decode_objects(
            &hdr,
            Counting {
                inner: body.as_bytes(),
                read: &mut read,
            },
        );
        assert_eq!(read, body.len());
    }

    #[test]
    fn test_multipart_boundary() {
        assert_eq!(
            multipart_boundary("multipart/mixed; boundary=abc").unwrap(),
            Some("abc".to_string())
        );
        assert_eq!(multipart_boundary("text/plain").unwrap(), None);
        assert_eq!(multipart_boundary("").unwrap(), None);
        assert!(multipart_boundary("multipart/mixed; boundary=").is_err());
    }
}
