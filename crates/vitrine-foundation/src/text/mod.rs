//! Phrase segmentation into animatable units.
//!
//! Staggered text animations address individual characters, but layout must
//! never break inside a word. Segmentation therefore groups characters by
//! word and assigns every character a global index that downstream staggers
//! key off.
//!
//! Two modes exist, matching the two ways the presentation renders text:
//!
//! - word mode ([`segment_chars`]): inter-word spaces are separators, not
//!   units. Used for body copy and titles.
//! - line mode ([`segment_line`] / [`segment_lines`]): inter-word gaps
//!   become non-breaking-space units so a line keeps its shape while every
//!   visible slot animates. Used for the hero phrases.

mod segment;

pub use segment::{
    segment_chars, segment_line, segment_lines, segment_words, CharUnit, WordUnit, NBSP,
};
