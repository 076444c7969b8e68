/*! Filtering utilities

Filters operate on sentence level and implement [filter::Filter]:
a pure detection (2 successive equal inputs -> 2 equal outputs) deciding
whether a sentence is kept by the pipeline.
! */
mod filter;
mod sentence;

pub use filter::Filter;
pub use sentence::MinTokens;
