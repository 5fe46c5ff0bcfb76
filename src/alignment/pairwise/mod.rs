//! The Gotoh affine-gap pairwise aligner.
//!
//! [`Scoring`] describes the cost model; [`PairwiseAligner`] owns the DP
//! buffers and the traceback matrix and exposes the four alignment modes as
//! methods.

use crate::alignment::{Alignment, AlignmentMode, AlignmentOperation};
use crate::error::Error;
use crate::scores::SubstitutionMatrix;

/// A clip penalty this far negative is "disabled" for practical purposes:
/// never worth paying, so it never wins a `max` against a real path.
pub const MIN_SCORE: i32 = i32::MIN / 4;

/// Default capacity hint (`m` and `n`) for a freshly constructed aligner.
pub const DEFAULT_ALIGNER_CAPACITY: usize = 200;

/// Something that can score a pair of symbols. Implemented for closures
/// `Fn(u8, u8) -> i32`, for [`MatchParams`] (flat match/mismatch), and for
/// [`MatrixMatch`] (a named substitution matrix).
pub trait MatchFunc {
    fn score(&self, a: u8, b: u8) -> i32;

    /// Check that every symbol of `x` and `y` is scoreable. The default is a
    /// no-op; matrix-backed implementations override it so alphabet errors
    /// surface before the DP fill begins rather than as a bogus score.
    fn validate(&self, _x: &[u8], _y: &[u8]) -> Result<(), Error> {
        Ok(())
    }
}

impl<F> MatchFunc for F
where
    F: Fn(u8, u8) -> i32,
{
    fn score(&self, a: u8, b: u8) -> i32 {
        self(a, b)
    }
}

/// Flat match/mismatch scoring: `match_score` when two symbols are equal,
/// `mismatch_score` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchParams {
    pub match_score: i32,
    pub mismatch_score: i32,
}

impl MatchFunc for MatchParams {
    fn score(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}

/// Adapts a named [`SubstitutionMatrix`] to [`MatchFunc`]. `score` is total
/// after [`validate`](MatchFunc::validate) has rejected unknown symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixMatch(pub SubstitutionMatrix);

impl MatchFunc for MatrixMatch {
    fn score(&self, a: u8, b: u8) -> i32 {
        self.0.score(a, b).unwrap_or(MIN_SCORE)
    }

    fn validate(&self, x: &[u8], y: &[u8]) -> Result<(), Error> {
        self.0.validate(x, y)
    }
}

/// The cost model for a [`PairwiseAligner`]: affine gap costs plus a
/// substitution function, plus four clip penalties used only by
/// [`PairwiseAligner::custom`].
#[derive(Debug, Clone, Copy)]
pub struct Scoring<F: MatchFunc> {
    pub gap_open: i32,
    pub gap_extend: i32,
    pub match_fn: F,
    pub xclip_prefix: i32,
    pub xclip_suffix: i32,
    pub yclip_prefix: i32,
    pub yclip_suffix: i32,
}

impl Scoring<MatchParams> {
    /// Flat match/mismatch scoring. Clip penalties default to disabled.
    pub fn from_scores(gap_open: i32, gap_extend: i32, match_score: i32, mismatch_score: i32) -> Self {
        Scoring {
            gap_open,
            gap_extend,
            match_fn: MatchParams { match_score, mismatch_score },
            xclip_prefix: MIN_SCORE,
            xclip_suffix: MIN_SCORE,
            yclip_prefix: MIN_SCORE,
            yclip_suffix: MIN_SCORE,
        }
    }
}

impl Scoring<MatrixMatch> {
    /// Named substitution-matrix scoring. Clip penalties default to
    /// disabled.
    pub fn from_matrix(gap_open: i32, gap_extend: i32, matrix: SubstitutionMatrix) -> Self {
        Scoring {
            gap_open,
            gap_extend,
            match_fn: MatrixMatch(matrix),
            xclip_prefix: MIN_SCORE,
            xclip_suffix: MIN_SCORE,
            yclip_prefix: MIN_SCORE,
            yclip_suffix: MIN_SCORE,
        }
    }
}

impl<F: MatchFunc> Scoring<F> {
    pub fn xclip(mut self, penalty: i32) -> Self {
        self.xclip_prefix = penalty;
        self.xclip_suffix = penalty;
        self
    }

    pub fn xclip_prefix(mut self, penalty: i32) -> Self {
        self.xclip_prefix = penalty;
        self
    }

    pub fn xclip_suffix(mut self, penalty: i32) -> Self {
        self.xclip_suffix = penalty;
        self
    }

    pub fn yclip(mut self, penalty: i32) -> Self {
        self.yclip_prefix = penalty;
        self.yclip_suffix = penalty;
        self
    }

    pub fn yclip_prefix(mut self, penalty: i32) -> Self {
        self.yclip_prefix = penalty;
        self
    }

    pub fn yclip_suffix(mut self, penalty: i32) -> Self {
        self.yclip_suffix = penalty;
        self
    }

    fn validate(&self, x: &[u8], y: &[u8]) -> Result<(), Error> {
        self.match_fn.validate(x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceM {
    None,
    Diag,
    Start,
    XclipPrefix,
    YclipPrefix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceGap {
    None,
    FromM,
    FromGap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lane {
    M,
    I,
    D,
}

/// Owns the DP score matrices and the full traceback matrix for a
/// [`Scoring`] policy, reused across alignment calls.
pub struct PairwiseAligner<F: MatchFunc> {
    scoring: Scoring<F>,
    rows: usize,
    cols: usize,
    m: Vec<i32>,
    i_mat: Vec<i32>,
    d_mat: Vec<i32>,
    tb_m: Vec<SourceM>,
    tb_i: Vec<SourceGap>,
    tb_d: Vec<SourceGap>,
}

impl<F: MatchFunc> PairwiseAligner<F> {
    pub fn new(scoring: Scoring<F>) -> Self {
        Self::with_capacity(DEFAULT_ALIGNER_CAPACITY, DEFAULT_ALIGNER_CAPACITY, scoring)
    }

    pub fn with_capacity(m: usize, n: usize, scoring: Scoring<F>) -> Self {
        let mut aligner = PairwiseAligner {
            scoring,
            rows: 0,
            cols: 0,
            m: Vec::new(),
            i_mat: Vec::new(),
            d_mat: Vec::new(),
            tb_m: Vec::new(),
            tb_i: Vec::new(),
            tb_d: Vec::new(),
        };
        aligner.ensure_capacity(m, n);
        aligner
    }

    fn ensure_capacity(&mut self, m: usize, n: usize) {
        let rows = self.rows.max(m + 1);
        let cols = self.cols.max(n + 1);
        if rows * cols > self.m.len() {
            log::trace!("growing pairwise aligner buffers to {rows}x{cols}");
            self.rows = rows;
            self.cols = cols;
            let size = rows * cols;
            self.m = vec![0; size];
            self.i_mat = vec![0; size];
            self.d_mat = vec![0; size];
            self.tb_m = vec![SourceM::None; size];
            self.tb_i = vec![SourceGap::None; size];
            self.tb_d = vec![SourceGap::None; size];
        }
    }

    fn idx(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    /// Needleman-Wunsch: full x aligned to full y, no clipping.
    pub fn global(&mut self, x: &[u8], y: &[u8]) -> Result<Alignment, Error> {
        log::debug!("global alignment: |x|={}, |y|={}", x.len(), y.len());
        self.scoring.validate(x, y)?;
        self.fill(x, y, MIN_SCORE, MIN_SCORE, MIN_SCORE, MIN_SCORE, false, false);
        let (i, j, lane) = (x.len(), y.len(), self.best_lane(x.len(), y.len()));
        Ok(self.traceback(x, y, i, j, lane, AlignmentMode::Global))
    }

    /// Free end-gaps on y: x is aligned fully somewhere inside y.
    pub fn semiglobal(&mut self, x: &[u8], y: &[u8]) -> Result<Alignment, Error> {
        log::debug!("semiglobal alignment: |x|={}, |y|={}", x.len(), y.len());
        self.scoring.validate(x, y)?;
        self.fill(x, y, MIN_SCORE, MIN_SCORE, 0, 0, true, false);
        let m = x.len();
        let mut best_j = 0;
        let mut best_score = i32::MIN;
        for j in 0..=y.len() {
            let cell = self.m[self.idx(m, j)].max(self.i_mat[self.idx(m, j)]);
            if cell > best_score {
                best_score = cell;
                best_j = j;
            }
        }
        let lane = if self.i_mat[self.idx(m, best_j)] > self.m[self.idx(m, best_j)] {
            Lane::I
        } else {
            Lane::M
        };
        Ok(self.traceback(x, y, m, best_j, lane, AlignmentMode::Semiglobal))
    }

    /// Smith-Waterman: best-scoring substring alignment.
    pub fn local(&mut self, x: &[u8], y: &[u8]) -> Result<Alignment, Error> {
        log::debug!("local alignment: |x|={}, |y|={}", x.len(), y.len());
        self.scoring.validate(x, y)?;
        self.fill(x, y, MIN_SCORE, MIN_SCORE, MIN_SCORE, MIN_SCORE, false, true);
        let mut best = (0usize, 0usize);
        let mut best_score = 0;
        for i in 0..=x.len() {
            for j in 0..=y.len() {
                let score = self.m[self.idx(i, j)];
                if score > best_score {
                    best_score = score;
                    best = (i, j);
                }
            }
        }
        Ok(self.traceback(x, y, best.0, best.1, Lane::M, AlignmentMode::Local))
    }

    /// Full Gotoh with all four clip costs honoured; clips appear
    /// explicitly in the operation list when used.
    pub fn custom(&mut self, x: &[u8], y: &[u8]) -> Result<Alignment, Error> {
        log::debug!("custom alignment: |x|={}, |y|={}", x.len(), y.len());
        self.scoring.validate(x, y)?;
        let (xclip_prefix, xclip_suffix, yclip_prefix, yclip_suffix) = (
            self.scoring.xclip_prefix,
            self.scoring.xclip_suffix,
            self.scoring.yclip_prefix,
            self.scoring.yclip_suffix,
        );
        self.fill(x, y, xclip_prefix, xclip_suffix, yclip_prefix, yclip_suffix, false, false);
        let (m, n) = (x.len(), y.len());
        let mut best = (m, n);
        let mut best_score = i32::MIN;
        let mut consider = |i: usize, j: usize, score: i32, best: &mut (usize, usize), best_score: &mut i32| {
            if score > *best_score {
                *best_score = score;
                *best = (i, j);
            }
        };
        for i in 0..=m {
            let score = self.m[self.idx(i, n)].max(self.i_mat[self.idx(i, n)]) + if i < m { xclip_suffix } else { 0 };
            consider(i, n, score, &mut best, &mut best_score);
        }
        for j in 0..=n {
            let score = self.m[self.idx(m, j)].max(self.d_mat[self.idx(m, j)]) + if j < n { yclip_suffix } else { 0 };
            consider(m, j, score, &mut best, &mut best_score);
        }
        let lane = {
            let (i, j) = best;
            if self.i_mat[self.idx(i, j)] > self.m[self.idx(i, j)] && self.i_mat[self.idx(i, j)] >= self.d_mat[self.idx(i, j)] {
                Lane::I
            } else if self.d_mat[self.idx(i, j)] > self.m[self.idx(i, j)] {
                Lane::D
            } else {
                Lane::M
            }
        };
        Ok(self.traceback(x, y, best.0, best.1, lane, AlignmentMode::Custom))
    }

    fn best_lane(&self, i: usize, j: usize) -> Lane {
        let (m, ins, del) = (self.m[self.idx(i, j)], self.i_mat[self.idx(i, j)], self.d_mat[self.idx(i, j)]);
        if m >= ins && m >= del {
            Lane::M
        } else if del >= ins {
            Lane::D
        } else {
            Lane::I
        }
    }

    /// Fill the M/I/D matrices and their traceback codes. `xclip_*`/
    /// `yclip_*` are the flat entry/exit penalties available at the row-0/
    /// col-0 boundary and, when `free_y_boundary` is set, the boundary is
    /// additionally pinned to exactly 0 (semiglobal's non-operation free
    /// ends) rather than competing as a clip. `floor_at_zero` floors every
    /// M cell at 0 (Smith-Waterman's fresh-start rule).
    fn fill(
        &mut self,
        x: &[u8],
        y: &[u8],
        xclip_prefix: i32,
        xclip_suffix: i32,
        yclip_prefix: i32,
        yclip_suffix: i32,
        free_y_boundary: bool,
        floor_at_zero: bool,
    ) {
        let (m, n) = (x.len(), y.len());
        self.ensure_capacity(m, n);
        let go = self.scoring.gap_open;
        let ge = self.scoring.gap_extend;

        {
            let idx = self.idx(0, 0);
            self.m[idx] = 0;
            self.i_mat[idx] = MIN_SCORE;
            self.d_mat[idx] = MIN_SCORE;
            self.tb_m[idx] = SourceM::None;
        }
        // M[i][0] and M[0][j] for i, j > 0 are reachable only through a
        // leading clip (or not at all): the real affine gap-chain lives in
        // I[i][0]/D[0][j], which diag_best already draws on.
        for i in 1..=m {
            let idx = self.idx(i, 0);
            self.i_mat[idx] = go + ge * i as i32;
            self.tb_i[idx] = SourceGap::FromGap;
            self.d_mat[idx] = MIN_SCORE;
            self.m[idx] = xclip_prefix;
            self.tb_m[idx] = SourceM::XclipPrefix;
        }
        for j in 1..=n {
            let idx = self.idx(0, j);
            self.d_mat[idx] = go + ge * j as i32;
            self.tb_d[idx] = SourceGap::FromGap;
            self.i_mat[idx] = MIN_SCORE;
            if free_y_boundary {
                self.m[idx] = 0;
                self.tb_m[idx] = SourceM::None;
            } else {
                self.m[idx] = yclip_prefix;
                self.tb_m[idx] = SourceM::YclipPrefix;
            }
        }

        for i in 1..=m {
            for j in 1..=n {
                let idx = self.idx(i, j);
                let diag = self.idx(i - 1, j - 1);
                let up = self.idx(i - 1, j);
                let left = self.idx(i, j - 1);

                let sub = self.scoring.match_fn.score(x[i - 1], y[j - 1]);
                let diag_best = self.m[diag].max(self.i_mat[diag]).max(self.d_mat[diag]) + sub;
                if floor_at_zero && diag_best <= 0 {
                    self.m[idx] = 0;
                    self.tb_m[idx] = SourceM::Start;
                } else {
                    self.m[idx] = diag_best;
                    self.tb_m[idx] = SourceM::Diag;
                }

                let ins_open = self.m[up] + go + ge;
                let ins_ext = self.i_mat[up] + ge;
                if ins_ext >= ins_open {
                    self.i_mat[idx] = ins_ext;
                    self.tb_i[idx] = SourceGap::FromGap;
                } else {
                    self.i_mat[idx] = ins_open;
                    self.tb_i[idx] = SourceGap::FromM;
                }

                let del_open = self.m[left] + go + ge;
                let del_ext = self.d_mat[left] + ge;
                if del_ext >= del_open {
                    self.d_mat[idx] = del_ext;
                    self.tb_d[idx] = SourceGap::FromGap;
                } else {
                    self.d_mat[idx] = del_open;
                    self.tb_d[idx] = SourceGap::FromM;
                }
            }
        }
        let _ = (xclip_suffix, yclip_suffix);
    }

    fn traceback(
        &self,
        x: &[u8],
        y: &[u8],
        start_i: usize,
        start_j: usize,
        start_lane: Lane,
        mode: AlignmentMode,
    ) -> Alignment {
        let mut ops = Vec::new();
        let mut i = start_i;
        let mut j = start_j;
        let mut lane = start_lane;
        let score = match start_lane {
            Lane::M => self.m[self.idx(i, j)],
            Lane::I => self.i_mat[self.idx(i, j)],
            Lane::D => self.d_mat[self.idx(i, j)],
        };

        loop {
            match lane {
                Lane::M => {
                    if i == 0 && j == 0 {
                        break;
                    }
                    match self.tb_m[self.idx(i, j)] {
                        SourceM::None => break,
                        SourceM::Start => {
                            let op = if x[i - 1] == y[j - 1] { AlignmentOperation::Match } else { AlignmentOperation::Subst };
                            ops.push(op);
                            i -= 1;
                            j -= 1;
                            break;
                        }
                        SourceM::XclipPrefix => {
                            ops.push(AlignmentOperation::Xclip(i));
                            i = 0;
                            break;
                        }
                        SourceM::YclipPrefix => {
                            ops.push(AlignmentOperation::Yclip(j));
                            j = 0;
                            break;
                        }
                        SourceM::Diag => {
                            let op = if x[i - 1] == y[j - 1] { AlignmentOperation::Match } else { AlignmentOperation::Subst };
                            ops.push(op);
                            let diag = self.idx(i - 1, j - 1);
                            let best = self.m[diag].max(self.i_mat[diag]).max(self.d_mat[diag]);
                            lane = if self.m[diag] == best {
                                Lane::M
                            } else if self.d_mat[diag] == best {
                                Lane::D
                            } else {
                                Lane::I
                            };
                            i -= 1;
                            j -= 1;
                        }
                    }
                }
                Lane::I => {
                    if i == 0 {
                        break;
                    }
                    ops.push(AlignmentOperation::Ins);
                    lane = match self.tb_i[self.idx(i, j)] {
                        SourceGap::FromGap => Lane::I,
                        _ => Lane::M,
                    };
                    i -= 1;
                }
                Lane::D => {
                    if j == 0 {
                        break;
                    }
                    ops.push(AlignmentOperation::Del);
                    lane = match self.tb_d[self.idx(i, j)] {
                        SourceGap::FromGap => Lane::D,
                        _ => Lane::M,
                    };
                    j -= 1;
                }
            }
        }

        ops.reverse();
        Alignment {
            score,
            x_start: i,
            y_start: j,
            x_end: start_i,
            y_end: start_j,
            x_len: x.len(),
            y_len: y.len(),
            operations: ops,
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::AlignmentOperation::*;

    #[test]
    fn test_semiglobal_prefers_mismatch() {
        let scoring = Scoring::from_scores(-5, -1, 1, -1);
        let mut aligner = PairwiseAligner::new(scoring);
        let aln = aligner.semiglobal(b"ACCGTGGAT", b"AAAAACCGTTGAT").unwrap();
        assert_eq!(aln.y_start, 4);
        assert_eq!(
            aln.operations,
            vec![Match, Match, Match, Match, Match, Subst, Match, Match, Match]
        );
    }

    #[test]
    fn test_semiglobal_prefers_gap() {
        let scoring = Scoring::from_scores(-1, -1, 1, -5);
        let mut aligner = PairwiseAligner::new(scoring);
        let aln = aligner.semiglobal(b"ACCGTGGAT", b"AAAAACCGTTGAT").unwrap();
        assert_eq!(
            aln.operations,
            vec![Match, Match, Match, Match, Del, Match, Ins, Match, Match, Match]
        );
    }

    #[test]
    fn test_global() {
        let scoring = Scoring::from_scores(-5, -1, 1, -3);
        let mut aligner = PairwiseAligner::new(scoring);
        let aln = aligner.global(b"ACGAGAACA", b"ACGACA").unwrap();
        assert_eq!(
            aln.operations,
            vec![Match, Match, Match, Ins, Ins, Ins, Match, Match, Match]
        );
        assert_eq!(aln.x_start, 0);
        assert_eq!(aln.y_start, 0);
        assert_eq!(aln.x_end, 9);
        assert_eq!(aln.y_end, 6);
    }

    #[test]
    fn test_local_blosum62() {
        let scoring = Scoring::from_matrix(-10, -1, SubstitutionMatrix::Blosum62);
        let mut aligner = PairwiseAligner::new(scoring);
        let aln = aligner.local(b"LSPADKTNVKAA", b"PEEKSAV").unwrap();
        assert_eq!(aln.x_start, 2);
        assert_eq!(aln.y_start, 0);
        assert_eq!(aln.x_end, 9);
        assert_eq!(aln.y_end, 7);
        assert_eq!(aln.score, 16);
        assert_eq!(aln.operations, vec![Match, Subst, Subst, Match, Subst, Subst, Match]);
    }

    #[test]
    fn test_global_consumes_everything() {
        let scoring = Scoring::from_scores(-5, -1, 1, -3);
        let mut aligner = PairwiseAligner::new(scoring);
        let aln = aligner.global(b"ACGT", b"ACGT").unwrap();
        assert_eq!(aln.x_aln_len(), 4);
        assert_eq!(aln.y_aln_len(), 4);
        assert!(aln.filter_clip_operations().iter().all(|op| matches!(op, Match | Subst)));
    }

    #[test]
    fn test_custom_prefers_cheap_prefix_clip_over_leading_insertions() {
        // Only the x-prefix clip is enabled; y and the x-suffix must be
        // consumed in full. Clipping "TT" for a flat fee beats opening a
        // gap to align it against nothing.
        let scoring = Scoring::from_scores(-5, -1, 1, -1).xclip_prefix(-1);
        let mut aligner = PairwiseAligner::new(scoring);
        let aln = aligner.custom(b"TTACGT", b"ACGT").unwrap();
        assert_eq!(aln.score, 3);
        assert_eq!(aln.x_start, 0);
        assert_eq!(aln.y_start, 0);
        assert_eq!(aln.x_end, 6);
        assert_eq!(aln.y_end, 4);
        assert_eq!(aln.operations, vec![Xclip(2), Match, Match, Match, Match]);
    }

    #[test]
    fn test_local_never_clips() {
        let scoring = Scoring::from_scores(-5, -1, 2, -1);
        let mut aligner = PairwiseAligner::new(scoring);
        let aln = aligner.local(b"TTTTACGTAAAA", b"CCCCACGTCCCC").unwrap();
        assert!(aln.score >= 0);
        assert!(!aln
            .operations
            .iter()
            .any(|op| matches!(op, AlignmentOperation::Xclip(_) | AlignmentOperation::Yclip(_))));
    }
}
