// src/core/pool.rs
//! Bounded pool of reusable objects using crossbeam ArrayQueue.
//!
//! `get` never blocks: an empty pool builds a fresh object, and a full pool
//! drops whatever is handed back.

use std::fmt;
use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut};

use crossbeam_queue::ArrayQueue;

pub struct Pool<T> {
    idle: ArrayQueue<T>,
    make: fn() -> T,
}

impl<T> Pool<T> {
    /// Create a pool holding at most `capacity` idle objects.
    pub fn new(capacity: usize, make: fn() -> T) -> Self {
        Self {
            idle: ArrayQueue::new(capacity.max(1)),
            make,
        }
    }

    /// Take an idle object, or build one if none is available.
    ///
    /// Thread-safe: can be called from any thread.
    pub fn get(&self) -> Pooled<'_, T> {
        let value = self.idle.pop().unwrap_or_else(self.make);
        Pooled {
            pool: self,
            value: ManuallyDrop::new(value),
        }
    }

    /// Number of objects currently waiting to be reused.
    pub fn idle(&self) -> usize {
        self.idle.len()
    }

    pub fn capacity(&self) -> usize {
        self.idle.capacity()
    }

    fn put(&self, value: T) {
        // Full pool: let it drop
        let _ = self.idle.push(value);
    }
}

impl<T> fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("idle", &self.idle.len())
            .field("capacity", &self.idle.capacity())
            .finish()
    }
}

/// Borrowed pool object; returns itself to the pool on drop.
pub struct Pooled<'a, T> {
    pool: &'a Pool<T>,
    value: ManuallyDrop<T>,
}

impl<T> Deref for Pooled<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Pooled<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T> Drop for Pooled<'_, T> {
    fn drop(&mut self) {
        // SAFETY: `value` is taken exactly once, here, and never touched again.
        let value = unsafe { ManuallyDrop::take(&mut self.value) };
        self.pool.put(value);
    }
}
