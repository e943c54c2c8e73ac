// src/core/validate.rs
//! JSON well-formedness checks backed by simd-json.
//!
//! simd-json parses in place, so input is first copied into scratch space
//! owned by the parser instance. The caller's bytes are never touched.
//!
//! Only the tape is built (stage 1 + stage 2, iterative), never a value tree,
//! so nesting depth is bounded by memory rather than by the thread's stack.

use simd_json::{Buffers, Deserializer};

use crate::consts::MAX_RETAINED_SCRATCH_BYTES;
use crate::core::Result;
use crate::error::DedupError;

/// Reusable parser instance: input copy plus simd-json's stage buffers.
#[derive(Default)]
pub struct ParserScratch {
    input: Vec<u8>,
    buffers: Buffers,
}

impl ParserScratch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fully parse `data` to a tape, discarding it.
    pub fn validate(&mut self, data: &[u8]) -> Result<()> {
        if data.is_empty() {
            return Err(DedupError::InvalidJson("empty input".into()));
        }

        self.input.clear();
        self.input.extend_from_slice(data);

        let parsed = Deserializer::from_slice_with_buffers(&mut self.input, &mut self.buffers)
            .map(drop)
            .map_err(DedupError::from);

        if self.input.capacity() > MAX_RETAINED_SCRATCH_BYTES {
            self.input = Vec::new();
            self.buffers = Buffers::default();
        }

        parsed
    }
}

/// One-shot check with a throwaway parser.
pub fn is_valid_json(data: &[u8]) -> bool {
    ParserScratch::new().validate(data).is_ok()
}
