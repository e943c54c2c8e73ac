// src/core/mod.rs
pub mod cache;
pub mod dedup;
pub mod pool;
pub mod util;
pub mod validate;

pub use cache::*;
pub use dedup::*;
pub use pool::*;
pub use util::*;
pub use validate::*;

pub type Result<T> = std::result::Result<T, crate::error::DedupError>;
