//! Sequence-level statistics: GC content and open reading frame scanning.

pub mod gc;
pub mod orf;

pub use gc::{gc3_content, gc_content};
pub use orf::{Finder, Orf};
