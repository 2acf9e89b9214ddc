//! Whole-soundscape benchmarks.
//!
//! Each one times a full `generate` call, the same work the generation
//! loop does per buffer.

mod generators;

pub use generators::bench_generators;
