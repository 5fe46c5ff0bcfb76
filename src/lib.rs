//! Pairwise sequence alignment built on the Gotoh affine-gap dynamic
//! program, plus the edit-distance kernels, substitution matrices,
//! alphabets, and sequence-analysis helpers it leans on.
//!
//! The core is [`alignment::pairwise::PairwiseAligner`]: construct a
//! [`alignment::pairwise::Scoring`] policy, build an aligner from it, and
//! call [`global`](alignment::pairwise::PairwiseAligner::global),
//! [`semiglobal`](alignment::pairwise::PairwiseAligner::semiglobal),
//! [`local`](alignment::pairwise::PairwiseAligner::local), or
//! [`custom`](alignment::pairwise::PairwiseAligner::custom) to get an
//! [`alignment::Alignment`].
//!
//! ```
//! use bioalign::alignment::pairwise::{PairwiseAligner, Scoring};
//!
//! let scoring = Scoring::from_scores(-5, -1, 1, -1);
//! let mut aligner = PairwiseAligner::new(scoring);
//! let alignment = aligner.global(b"ACGT", b"ACGT").unwrap();
//! assert_eq!(alignment.score, 4);
//! ```

pub mod alignment;
pub mod alphabets;
pub mod error;
pub mod scores;
pub mod seq_analysis;

pub use alignment::pairwise::{MatchFunc, MatchParams, MatrixMatch, PairwiseAligner, Scoring, DEFAULT_ALIGNER_CAPACITY};
pub use alignment::{Alignment, AlignmentMode, AlignmentOperation};
pub use error::{Error, Result};
pub use scores::SubstitutionMatrix;
