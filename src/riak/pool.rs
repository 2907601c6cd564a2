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

//! Recycling of [`Object`] values.
//!
//! Decoding a multipart sibling response allocates one object per part. A
//! pool keeps released objects, already reset, so their maps and body
//! buffers can be reused. Pooling is an optimization only: `acquire` never
//! blocks and falls back to a fresh object, and `release` drops the object
//! when the pool is full or busy.

use crate::riak::object::Object;
use bytes::BytesMut;
use lazy_static::lazy_static;
use std::sync::Mutex;

/// Default number of idle objects a pool retains.
pub const DEFAULT_POOL_CAPACITY: usize = 64;

lazy_static! {
    static ref GLOBAL_POOL: ObjectPool = ObjectPool::new(DEFAULT_POOL_CAPACITY);
}

/// A bounded, thread-safe pool of reset objects.
#[derive(Debug)]
pub struct ObjectPool {
    idle: Mutex<Vec<Object>>,
    capacity: usize,
}

impl Default for ObjectPool {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_CAPACITY)
    }
}

impl ObjectPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::with_capacity(capacity)),
            capacity,
        }
    }

    /// Returns a zero-valued object with an empty body buffer, reused when
    /// one is idle.
    pub fn acquire(&self) -> Object {
        let reused = match self.idle.try_lock() {
            Ok(mut idle) => idle.pop(),
            Err(_) => None,
        };
        let mut obj = reused.unwrap_or_default();
        obj.body.get_or_insert_with(BytesMut::new);
        obj
    }

    /// Resets `obj` and keeps it for a later [`ObjectPool::acquire`].
    pub fn release(&self, mut obj: Object) {
        obj.hard_reset();
        if let Ok(mut idle) = self.idle.try_lock() {
            if idle.len() < self.capacity {
                idle.push(obj);
            }
        }
    }

    /// Number of idle objects.
    pub fn len(&self) -> usize {
        self.idle.lock().map(|idle| idle.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Acquires an object from the process-wide pool.
pub fn acquire() -> Object {
    GLOBAL_POOL.acquire()
}

/// Returns an object to the process-wide pool.
pub fn release(obj: Object) {
    GLOBAL_POOL.release(obj)
}
