//! Open reading frame scanning.

use std::collections::HashSet;

use crate::error::Error;

/// A start-codon-to-stop-codon run in one reading frame. `start`/`end` are
/// half-open byte offsets into the scanned sequence; `end` includes the stop
/// codon. `offset` is the reading frame, `0..codon_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orf {
    pub start: usize,
    pub end: usize,
    pub offset: usize,
}

/// Scans a nucleotide sequence for open reading frames across every reading
/// frame implied by the codon length.
pub struct Finder {
    start_codons: HashSet<Vec<u8>>,
    stop_codons: HashSet<Vec<u8>>,
    codon_len: usize,
    min_len: usize,
}

impl Finder {
    /// `min_len` is the minimum byte span of an ORF, stop codon included.
    /// Fails with `EmptyArgument` if either codon set is empty, or
    /// `InvalidConfiguration` if start and stop codons don't share a common
    /// length.
    pub fn new(start_codons: Vec<Vec<u8>>, stop_codons: Vec<Vec<u8>>, min_len: usize) -> Result<Self, Error> {
        if start_codons.is_empty() || stop_codons.is_empty() {
            log::warn!("ORF finder construction rejected: empty start or stop codon set");
            return Err(Error::EmptyArgument {
                reason: "ORF finder requires at least one start codon and one stop codon".to_string(),
            });
        }
        let mut lengths = start_codons.iter().chain(stop_codons.iter()).map(|c| c.len());
        let codon_len = lengths.next().unwrap();
        if lengths.any(|l| l != codon_len) {
            log::warn!("ORF finder construction rejected: mismatched codon lengths");
            return Err(Error::InvalidConfiguration {
                reason: "start and stop codons must all share a common length".to_string(),
            });
        }
        Ok(Finder {
            start_codons: start_codons.into_iter().collect(),
            stop_codons: stop_codons.into_iter().collect(),
            codon_len,
            min_len,
        })
    }

    /// All ORFs across every reading frame, sorted by `(end, start)`. A
    /// start codon stays "open" until the next in-frame stop codon closes
    /// every open start seen so far, so nested starts sharing one stop each
    /// produce their own `Orf`.
    pub fn find_all(&self, seq: &[u8]) -> Vec<Orf> {
        let l = self.codon_len;
        let mut orfs = Vec::new();
        for offset in 0..l {
            let mut open_starts: Vec<usize> = Vec::new();
            let mut pos = offset;
            while pos + l <= seq.len() {
                let codon = &seq[pos..pos + l];
                if self.stop_codons.contains(codon) {
                    let end = pos + l;
                    for &start in &open_starts {
                        if end - start >= self.min_len {
                            orfs.push(Orf { start, end, offset });
                        }
                    }
                    open_starts.clear();
                } else if self.start_codons.contains(codon) {
                    open_starts.push(pos);
                }
                pos += l;
            }
        }
        orfs.sort_by_key(|o| (o.end, o.start));
        orfs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codons(strs: &[&[u8]]) -> Vec<Vec<u8>> {
        strs.iter().map(|s| s.to_vec()).collect()
    }

    #[test]
    fn test_finder_rejects_mismatched_codon_lengths() {
        let err = Finder::new(codons(&[b"ATGG"]), codons(&[b"TGA"]), 50).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_finder_rejects_empty_codon_sets() {
        let err = Finder::new(vec![], vec![], 50).unwrap_err();
        assert!(matches!(err, Error::EmptyArgument { .. }));
    }

    #[test]
    fn test_find_all_no_start_codon() {
        let f = Finder::new(codons(&[b"ATG"]), codons(&[b"TGA", b"TAG", b"TAA"]), 5).unwrap();
        assert_eq!(f.find_all(b"ACGGCTAGAAAAGGCTAGAAAA"), vec![]);
    }

    #[test]
    fn test_find_all_single_orf() {
        let f = Finder::new(codons(&[b"ATG"]), codons(&[b"TGA", b"TAG", b"TAA"]), 5).unwrap();

        let res = f.find_all(b"GGGATGGGGTGAGGG");
        assert_eq!(res, vec![Orf { start: 3, end: 12, offset: 0 }]);

        let res = f.find_all(b"AGGGATGGGGTGAGGG");
        assert_eq!(res, vec![Orf { start: 4, end: 13, offset: 1 }]);
    }

    #[test]
    fn test_find_all_two_frames() {
        let f = Finder::new(codons(&[b"ATG"]), codons(&[b"TGA", b"TAG", b"TAA"]), 5).unwrap();
        let res = f.find_all(b"ATGGGGTGAGGGGGATGGAAAAATAAG");
        assert_eq!(
            res,
            vec![
                Orf { start: 0, end: 9, offset: 0 },
                Orf { start: 14, end: 26, offset: 2 },
            ]
        );
    }

    #[test]
    fn test_find_all_nested_starts_share_a_stop() {
        let f = Finder::new(codons(&[b"ATG"]), codons(&[b"TGA", b"TAG", b"TAA"]), 5).unwrap();
        let res = f.find_all(b"ATGGGGATGGGGGGATGGAAAAATAAGTAG");
        assert_eq!(
            res,
            vec![
                Orf { start: 14, end: 26, offset: 2 },
                Orf { start: 0, end: 30, offset: 0 },
                Orf { start: 6, end: 30, offset: 0 },
            ]
        );
    }
}
