// tests/core/mod.rs

#[cfg(test)]
mod pool;
#[cfg(test)]
mod util;
