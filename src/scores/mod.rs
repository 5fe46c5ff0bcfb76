//! Fixed amino-acid substitution matrices: BLOSUM62 and PAM40/120/200/250.
//!
//! These are external collaborators to the alignment core (see the crate's
//! top-level docs): the aligner only ever calls through a plain
//! `Fn(u8, u8) -> i32`, never these functions directly. They are exposed here
//! as standalone, fallible, symbol-level functions (matching the NCBI
//! convention of scoring single residues, including the ambiguity codes
//! `B`/`Z`/`X` and the stop symbol `*`), and as [`MatchFunc`](crate::alignment::pairwise::MatchFunc)
//! adaptors usable directly with [`Scoring`](crate::alignment::pairwise::Scoring).

use crate::error::Error;
use lazy_static::lazy_static;

mod tables;

/// The fixed substitution matrices a [`Scoring`](crate::alignment::pairwise::Scoring)
/// can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubstitutionMatrix {
    Blosum62,
    Pam40,
    Pam120,
    Pam200,
    Pam250,
}

impl SubstitutionMatrix {
    /// Score a pair of single-byte amino acid symbols, failing if either is
    /// outside this matrix's alphabet.
    pub fn score(&self, a: u8, b: u8) -> Result<i32, Error> {
        match self {
            SubstitutionMatrix::Blosum62 => blosum62(&[a], &[b]),
            SubstitutionMatrix::Pam40 => pam40(&[a], &[b]),
            SubstitutionMatrix::Pam120 => pam120(&[a], &[b]),
            SubstitutionMatrix::Pam200 => pam200(&[a], &[b]),
            SubstitutionMatrix::Pam250 => pam250(&[a], &[b]),
        }
    }

    /// Whether every byte of both `x` and `y` lies in this matrix's alphabet.
    pub(crate) fn validate(&self, x: &[u8], y: &[u8]) -> Result<(), Error> {
        for &byte in x.iter().chain(y.iter()) {
            if tables::index_of(byte).is_none() {
                return Err(Error::UnknownSymbol(byte));
            }
        }
        Ok(())
    }
}

lazy_static! {
    static ref PAM40: tables::Matrix = tables::build_pam(40.0);
    static ref PAM200: tables::Matrix = tables::build_pam(200.0);
}

fn lookup(matrix: &tables::Matrix, a: &[u8], b: &[u8]) -> Result<i32, Error> {
    if a.len() != 1 || b.len() != 1 {
        return Err(Error::LengthMismatch {
            reason: format!(
                "substitution-matrix lookup requires single-byte operands, got lengths {} and {}",
                a.len(),
                b.len()
            ),
        });
    }
    let i = tables::index_of(a[0]).ok_or(Error::UnknownSymbol(a[0]))?;
    let j = tables::index_of(b[0]).ok_or(Error::UnknownSymbol(b[0]))?;
    Ok(matrix[i][j])
}

/// Score two single-byte amino acid symbols under BLOSUM62.
pub fn blosum62(a: &[u8], b: &[u8]) -> Result<i32, Error> {
    lookup(&tables::BLOSUM62, a, b)
}

/// Score two single-byte amino acid symbols under PAM40.
pub fn pam40(a: &[u8], b: &[u8]) -> Result<i32, Error> {
    lookup(&PAM40, a, b)
}

/// Score two single-byte amino acid symbols under PAM120.
pub fn pam120(a: &[u8], b: &[u8]) -> Result<i32, Error> {
    lookup(&tables::PAM120, a, b)
}

/// Score two single-byte amino acid symbols under PAM200.
pub fn pam200(a: &[u8], b: &[u8]) -> Result<i32, Error> {
    lookup(&PAM200, a, b)
}

/// Score two single-byte amino acid symbols under PAM250.
pub fn pam250(a: &[u8], b: &[u8]) -> Result<i32, Error> {
    lookup(&tables::PAM250, a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_length_and_unknown_errors(func: impl Fn(&[u8], &[u8]) -> Result<i32, Error>) {
        assert!(matches!(
            func(b"AA", b"T"),
            Err(Error::LengthMismatch { .. })
        ));
        assert!(matches!(
            func(b"T", b"AA"),
            Err(Error::LengthMismatch { .. })
        ));
        assert!(matches!(
            func(b"", b""),
            Err(Error::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_blosum62() {
        assert_eq!(blosum62(b"A", b"A").unwrap(), 4);
        assert_eq!(blosum62(b"O", b"*").unwrap(), -4);
        assert_eq!(blosum62(b"A", b"*").unwrap(), -4);
        assert_eq!(blosum62(b"*", b"*").unwrap(), 1);
        assert_eq!(blosum62(b"X", b"X").unwrap(), -1);
        assert_eq!(blosum62(b"X", b"Z").unwrap(), -1);
        assert_length_and_unknown_errors(blosum62);
    }

    #[test]
    fn test_pam120() {
        assert_eq!(pam120(b"A", b"A").unwrap(), 3);
        assert_eq!(pam120(b"*", b"*").unwrap(), 1);
        assert_eq!(pam120(b"A", b"*").unwrap(), -8);
        assert_eq!(pam120(b"X", b"X").unwrap(), -2);
        assert_eq!(pam120(b"X", b"Z").unwrap(), -1);
        assert_length_and_unknown_errors(pam120);
    }

    #[test]
    fn test_pam200() {
        assert_eq!(pam200(b"A", b"A").unwrap(), 3);
        assert_eq!(pam200(b"*", b"*").unwrap(), 1);
        assert_eq!(pam200(b"A", b"*").unwrap(), -9);
        assert_eq!(pam200(b"Y", b"Z").unwrap(), -5);
        assert_eq!(pam200(b"X", b"X").unwrap(), -1);
        assert_eq!(pam200(b"X", b"Z").unwrap(), -1);
        assert_length_and_unknown_errors(pam200);
    }

    #[test]
    fn test_pam250() {
        assert_eq!(pam250(b"A", b"A").unwrap(), 2);
        assert_eq!(pam250(b"*", b"*").unwrap(), 1);
        assert_eq!(pam250(b"A", b"*").unwrap(), -8);
        assert_eq!(pam250(b"X", b"X").unwrap(), -1);
        assert_eq!(pam250(b"X", b"Z").unwrap(), -1);
        assert_length_and_unknown_errors(pam250);
    }

    #[test]
    fn test_pam40() {
        assert_eq!(pam40(b"A", b"A").unwrap(), 6);
        assert_eq!(pam40(b"*", b"*").unwrap(), 1);
        assert_eq!(pam40(b"A", b"*").unwrap(), -15);
        assert_eq!(pam40(b"X", b"X").unwrap(), -4);
        assert_eq!(pam40(b"X", b"Z").unwrap(), -4);
        assert_length_and_unknown_errors(pam40);
    }

    #[test]
    fn test_unknown_symbol() {
        assert!(matches!(blosum62(b"J", b"A"), Err(Error::UnknownSymbol(b'J'))));
    }
}
