use std::fmt;
use std::str::FromStr;

use crate::generated::parsimony;

/// Nucleotide codes as stored in the MAT protobuf (index form, 0..=3).
const NUCLEOTIDES: [char; 4] = ['A', 'C', 'G', 'T'];

fn nuc_char(code: i32) -> char {
    usize::try_from(code)
        .ok()
        .and_then(|i| NUCLEOTIDES.get(i).copied())
        .unwrap_or('N')
}

fn nuc_code(base: char) -> i32 {
    NUCLEOTIDES
        .iter()
        .position(|&b| b == base.to_ascii_uppercase())
        .map_or(4, |i| i as i32)
}

/// A point mutation carried on a tree branch.
///
/// Only the position takes part in the split statistics; the allele fields
/// and chromosome are carried through untouched so the tree can be written
/// back without loss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    position: i32,
    pub ref_nuc: i32,
    pub par_nuc: i32,
    pub mut_nuc: Vec<i32>,
    pub chromosome: String,
}

impl Mutation {
    pub fn new(position: i32, par_nuc: char, mut_nuc: char) -> Self {
        Self {
            position,
            ref_nuc: nuc_code(par_nuc),
            par_nuc: nuc_code(par_nuc),
            mut_nuc: vec![nuc_code(mut_nuc)],
            chromosome: String::new(),
        }
    }

    /// Genomic position, or `None` when the stored value cannot be one.
    pub fn position(&self) -> Option<u32> {
        u32::try_from(self.position).ok()
    }

    pub fn raw_position(&self) -> i32 {
        self.position
    }
}

/// Extracts the first run of ASCII digits from a mutation name such as
/// `C241T`.
pub fn parse_position(name: &str) -> Option<u32> {
    let start = name.find(|c: char| c.is_ascii_digit())?;
    let digits = &name[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", nuc_char(self.par_nuc), self.position)?;
        for &code in &self.mut_nuc {
            write!(f, "{}", nuc_char(code))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMutationError(pub String);

impl fmt::Display for ParseMutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a mutation name: {:?}", self.0)
    }
}

impl std::error::Error for ParseMutationError {}

impl FromStr for Mutation {
    type Err = ParseMutationError;

    /// Parses the `<parent base><position><mutated base>` form, e.g. `A123G`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMutationError(s.to_string());
        let position = parse_position(s).ok_or_else(err)?;
        let par = s.chars().next().filter(|c| c.is_ascii_alphabetic()).ok_or_else(err)?;
        let alt = s.chars().last().filter(|c| c.is_ascii_alphabetic()).ok_or_else(err)?;
        let position = i32::try_from(position).map_err(|_| err())?;
        Ok(Mutation::new(position, par, alt))
    }
}

impl From<parsimony::Mutation> for Mutation {
    fn from(m: parsimony::Mutation) -> Self {
        Self {
            position: m.position,
            ref_nuc: m.ref_nuc,
            par_nuc: m.par_nuc,
            mut_nuc: m.mut_nuc,
            chromosome: m.chromosome,
        }
    }
}

impl From<&Mutation> for parsimony::Mutation {
    fn from(m: &Mutation) -> Self {
        parsimony::Mutation {
            position: m.position,
            ref_nuc: m.ref_nuc,
            par_nuc: m.par_nuc,
            mut_nuc: m.mut_nuc.clone(),
            chromosome: m.chromosome.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("C241T"), Some(241));
        assert_eq!(parse_position("241"), Some(241));
        assert_eq!(parse_position("chr1:A10G"), Some(1));
        assert_eq!(parse_position("ACGT"), None);
        assert_eq!(parse_position(""), None);
    }

    #[test]
    fn test_mutation_name_round_trip() {
        let m: Mutation = "C241T".parse().unwrap();
        assert_eq!(m.position(), Some(241));
        assert_eq!(m.to_string(), "C241T");
        assert!("241".parse::<Mutation>().is_err());
    }

    #[test]
    fn test_negative_position_is_unparseable() {
        let raw = parsimony::Mutation {
            position: -5,
            ..Default::default()
        };
        let m = Mutation::from(raw);
        assert_eq!(m.position(), None);
        assert_eq!(m.raw_position(), -5);
    }
}
