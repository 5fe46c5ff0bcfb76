//! The alignment value object: [`AlignmentOperation`], [`AlignmentMode`], and
//! [`Alignment`] itself, with its CIGAR, pretty-print and path projections.

pub mod distance;
pub mod pairwise;

use std::fmt;
use std::str::FromStr;

/// One step of an alignment path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignmentOperation {
    /// Consume one symbol from each sequence; they compare equal.
    Match,
    /// Consume one symbol from each sequence; they compare unequal.
    Subst,
    /// Consume one symbol from y only (a gap in x).
    Del,
    /// Consume one symbol from x only (a gap in y).
    Ins,
    /// Clip `n` leading or trailing symbols from x.
    Xclip(usize),
    /// Clip `n` leading or trailing symbols from y.
    Yclip(usize),
}

impl AlignmentOperation {
    fn cigar_char(self) -> Option<char> {
        match self {
            AlignmentOperation::Match => Some('='),
            AlignmentOperation::Subst => Some('X'),
            AlignmentOperation::Ins => Some('I'),
            AlignmentOperation::Del => Some('D'),
            AlignmentOperation::Xclip(_) | AlignmentOperation::Yclip(_) => None,
        }
    }
}

/// The shape of the alignment problem a [`pairwise::PairwiseAligner`] was
/// asked to solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignmentMode {
    Global,
    Semiglobal,
    Local,
    Custom,
}

impl fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlignmentMode::Global => "global",
            AlignmentMode::Semiglobal => "semiglobal",
            AlignmentMode::Local => "local",
            AlignmentMode::Custom => "custom",
        };
        f.write_str(s)
    }
}

impl FromStr for AlignmentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(AlignmentMode::Global),
            "semiglobal" => Ok(AlignmentMode::Semiglobal),
            "local" => Ok(AlignmentMode::Local),
            "custom" => Ok(AlignmentMode::Custom),
            other => Err(format!("unrecognised alignment mode: {other}")),
        }
    }
}

/// The result of aligning two byte sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub score: i32,
    pub x_start: usize,
    pub y_start: usize,
    pub x_end: usize,
    pub y_end: usize,
    pub x_len: usize,
    pub y_len: usize,
    pub operations: Vec<AlignmentOperation>,
    pub mode: AlignmentMode,
}

impl Alignment {
    /// Length of the alignment's footprint on x.
    pub fn x_aln_len(&self) -> usize {
        self.x_end - self.x_start
    }

    /// Length of the alignment's footprint on y.
    pub fn y_aln_len(&self) -> usize {
        self.y_end - self.y_start
    }

    /// Operations with any leading/trailing `Xclip`/`Yclip` stripped.
    pub fn filter_clip_operations(&self) -> Vec<AlignmentOperation> {
        self.operations
            .iter()
            .copied()
            .filter(|op| !matches!(op, AlignmentOperation::Xclip(_) | AlignmentOperation::Yclip(_)))
            .collect()
    }

    /// CIGAR string. Only `Xclip` renders (as `S`/`H` depending on
    /// `hard_clip`); `Yclip` contributes no characters at all, since it
    /// clips the *other* sequence and has no CIGAR representation. Either
    /// kind is still skipped when walking the core operations, so it is
    /// never run-length-encoded as a Match/Subst/Ins/Del. An unclipped end
    /// that still has `x_start > 0` or `x_len - x_end > 0` is rendered as an
    /// implicit `Xclip` of that length.
    pub fn cigar(&self, hard_clip: bool) -> String {
        let clip_char = if hard_clip { 'H' } else { 'S' };
        let mut out = String::new();

        let ops = &self.operations;
        let (core_start, leading_clip) = match ops.first() {
            Some(AlignmentOperation::Xclip(n)) => (1, *n),
            Some(AlignmentOperation::Yclip(_)) => (1, 0),
            _ => (0, self.x_start),
        };
        let (core_end, trailing_clip) = match ops.last() {
            Some(AlignmentOperation::Xclip(n)) if ops.len() > core_start => (ops.len() - 1, *n),
            Some(AlignmentOperation::Yclip(_)) if ops.len() > core_start => (ops.len() - 1, 0),
            _ => (ops.len(), self.x_len - self.x_end),
        };

        if leading_clip > 0 {
            out.push_str(&format!("{leading_clip}{clip_char}"));
        }

        let mut run_char: Option<char> = None;
        let mut run_len = 0usize;
        for op in &ops[core_start..core_end] {
            if let Some(c) = op.cigar_char() {
                if Some(c) == run_char {
                    run_len += 1;
                } else {
                    if let Some(rc) = run_char {
                        out.push_str(&format!("{run_len}{rc}"));
                    }
                    run_char = Some(c);
                    run_len = 1;
                }
            }
        }
        if let Some(rc) = run_char {
            out.push_str(&format!("{run_len}{rc}"));
        }

        if trailing_clip > 0 {
            out.push_str(&format!("{trailing_clip}{clip_char}"));
        }
        out
    }

    /// For each non-clip operation, the `(i, j)` position reached after it
    /// (1-based, offset by `x_start`/`y_start`).
    pub fn path(&self) -> Vec<(usize, usize, AlignmentOperation)> {
        let mut i = self.x_start;
        let mut j = self.y_start;
        let mut out = Vec::new();
        for &op in &self.operations {
            match op {
                AlignmentOperation::Match | AlignmentOperation::Subst => {
                    i += 1;
                    j += 1;
                    out.push((i, j, op));
                }
                AlignmentOperation::Ins => {
                    i += 1;
                    out.push((i, j, op));
                }
                AlignmentOperation::Del => {
                    j += 1;
                    out.push((i, j, op));
                }
                AlignmentOperation::Xclip(_) | AlignmentOperation::Yclip(_) => {}
            }
        }
        out
    }

    /// Three-line alignment diagram, wrapped into blocks of `width` columns
    /// (default 100).
    pub fn pretty(&self, x: &[u8], y: &[u8], width: Option<usize>) -> String {
        let width = width.unwrap_or(100);

        let leading = self.x_start.max(self.y_start);
        let trailing = (self.x_len - self.x_end).max(self.y_len - self.y_end);

        let mut top = Vec::new();
        let mut mid = Vec::new();
        let mut bot = Vec::new();

        top.extend(std::iter::repeat(b' ').take(leading - self.x_start));
        top.extend_from_slice(&x[..self.x_start]);
        bot.extend(std::iter::repeat(b' ').take(leading - self.y_start));
        bot.extend_from_slice(&y[..self.y_start]);
        mid.extend(std::iter::repeat(b' ').take(leading));

        let mut xi = self.x_start;
        let mut yi = self.y_start;
        for op in self.filter_clip_operations() {
            match op {
                AlignmentOperation::Match => {
                    top.push(x[xi]);
                    bot.push(y[yi]);
                    mid.push(b'|');
                    xi += 1;
                    yi += 1;
                }
                AlignmentOperation::Subst => {
                    top.push(x[xi]);
                    bot.push(y[yi]);
                    mid.push(b'\\');
                    xi += 1;
                    yi += 1;
                }
                AlignmentOperation::Ins => {
                    top.push(x[xi]);
                    bot.push(b'-');
                    mid.push(b'+');
                    xi += 1;
                }
                AlignmentOperation::Del => {
                    top.push(b'-');
                    bot.push(y[yi]);
                    mid.push(b'x');
                    yi += 1;
                }
                AlignmentOperation::Xclip(_) | AlignmentOperation::Yclip(_) => unreachable!(),
            }
        }

        top.extend_from_slice(&x[self.x_end..]);
        top.extend(std::iter::repeat(b' ').take(trailing - (self.x_len - self.x_end)));
        bot.extend_from_slice(&y[self.y_end..]);
        bot.extend(std::iter::repeat(b' ').take(trailing - (self.y_len - self.y_end)));
        mid.extend(std::iter::repeat(b' ').take(trailing));

        let len = top.len();
        let mut blocks = Vec::new();
        let mut start = 0;
        while start < len.max(1) {
            let end = (start + width).min(len);
            blocks.push(format!(
                "{}\n{}\n{}",
                String::from_utf8_lossy(&top[start..end]),
                String::from_utf8_lossy(&mid[start..end]),
                String::from_utf8_lossy(&bot[start..end]),
            ));
            start = end;
            if end == len {
                break;
            }
        }
        format!("{}\n\n\n", blocks.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AlignmentOperation::*;

    fn base_alignment(ops: Vec<AlignmentOperation>) -> Alignment {
        Alignment {
            score: 0,
            x_start: 3,
            y_start: 0,
            x_end: 9,
            y_end: 0,
            x_len: 10,
            y_len: 0,
            operations: ops,
            mode: AlignmentMode::Custom,
        }
    }

    #[test]
    fn test_cigar() {
        let aln = base_alignment(vec![Match, Match, Match, Subst, Ins, Ins, Del, Del]);
        assert_eq!(aln.cigar(false), "3S3=1X2I2D1S");
        assert_eq!(aln.cigar(true), "3H3=1X2I2D1H");
    }

    #[test]
    fn test_cigar_embedded_yclip_does_not_render() {
        let mut aln = base_alignment(vec![
            Yclip(5),
            Match,
            Subst,
            Subst,
            Ins,
            Del,
            Del,
            Xclip(1),
        ]);
        aln.x_start = 0;
        aln.x_end = 10;
        assert_eq!(aln.cigar(false), "1=2X1I2D1S");
    }

    #[test]
    fn test_cigar_leading_and_trailing_yclip_both_vanish() {
        let mut aln = base_alignment(vec![Yclip(5), Subst, Match, Subst, Yclip(2)]);
        aln.x_start = 0;
        aln.x_end = 10;
        assert_eq!(aln.cigar(false), "1X1=1X");
    }

    #[test]
    fn test_path() {
        let mut aln = base_alignment(vec![Match, Match, Match, Subst, Ins, Ins, Del, Del]);
        aln.y_start = 4;
        assert_eq!(
            aln.path(),
            vec![
                (4, 5, Match),
                (5, 6, Match),
                (6, 7, Match),
                (7, 8, Subst),
                (8, 8, Ins),
                (9, 8, Ins),
                (9, 9, Del),
                (9, 10, Del),
            ]
        );
    }

    #[test]
    fn test_pretty() {
        let aln = Alignment {
            score: 0,
            x_start: 0,
            y_start: 2,
            x_end: 3,
            y_end: 5,
            x_len: 3,
            y_len: 7,
            operations: vec![Subst, Match, Match],
            mode: AlignmentMode::Semiglobal,
        };
        assert_eq!(
            aln.pretty(b"GAT", b"CTAATCC", None),
            "  GAT  \n  \\||  \nCTAATCC\n\n\n"
        );
    }

    #[test]
    fn test_mode_roundtrip() {
        for mode in [
            AlignmentMode::Global,
            AlignmentMode::Semiglobal,
            AlignmentMode::Local,
            AlignmentMode::Custom,
        ] {
            let s = mode.to_string();
            assert_eq!(s.parse::<AlignmentMode>().unwrap(), mode);
        }
        assert!("bogus".parse::<AlignmentMode>().is_err());
    }
}
