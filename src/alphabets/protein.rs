//! Protein alphabets.

use super::Alphabet;

/// The 20 standard amino acids, upper and lower case.
pub fn protein_alphabet() -> Alphabet {
    Alphabet::new(b"ARNDCEQGHILKMFPSTWYVarndceqghilkmfpstwyv")
}

/// The 20 standard amino acids plus the `B`/`X`/`Z` ambiguity codes.
pub fn protein_iupac_alphabet() -> Alphabet {
    Alphabet::new(b"ABCDEFGHIKLMNPQRSTVWXYZabcdefghiklmnpqrstvwxyz")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabets() {
        assert_eq!(
            protein_alphabet().symbols(),
            Alphabet::new(b"ARNDCEQGHILKMFPSTWYVarndceqghilkmfpstwyv").symbols()
        );
        assert_eq!(
            protein_iupac_alphabet().symbols(),
            Alphabet::new(b"ABCDEFGHIKLMNPQRSTVWXYZabcdefghiklmnpqrstvwxyz").symbols()
        );
    }
}
