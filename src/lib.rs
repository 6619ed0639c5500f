//! Reflows plain-text paragraphs to a fixed column width.
//!
//! Unlike a greedy ragged-right wrap, the engine first finds the minimum
//! number of lines the paragraph can occupy, then picks the partition with
//! that line count whose line lengths have the lowest variance, so the
//! wrapped block looks evenly filled. Shared leading markers (`>`, `#`,
//! bullets, indentation) are detected per block, stripped before wrapping,
//! and reattached to every output line.

pub mod app;
pub mod engine;
pub mod input;
