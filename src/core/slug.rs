use std::fmt;
use std::str::FromStr;

use crate::core::allele::Allele;
use crate::error::InvalidAllele;

/// GL string operators that express ambiguity or phase
const AMBIGUITY_OPERATORS: [char; 4] = ['/', '|', '~', '^'];

/// Genotype operator joining the two alleles of a SLUG
const GENOTYPE_OPERATOR: char = '+';

/// Single Locus Unambiguous Genotype
///
/// Two alleles at the same locus, stored in canonical (sorted) order so that
/// `A*02:01+A*01:01` and `A*01:01+A*02:01` are the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug {
    alleles: [Allele; 2],
}

impl Slug {
    /// Parse a SLUG from its GL string form, e.g. `A*01:01+A*02:01`
    pub fn from_glstring(glstring: &str) -> Result<Self, InvalidAllele> {
        if glstring.is_empty() {
            return Err(InvalidAllele::Malformed(glstring.to_string()));
        }

        if glstring.contains(&AMBIGUITY_OPERATORS[..]) {
            return Err(InvalidAllele::Ambiguous(glstring.to_string()));
        }

        let parts: Vec<&str> = glstring.split(GENOTYPE_OPERATOR).collect();
        let [first, second] = parts.as_slice() else {
            return Err(InvalidAllele::AlleleCount {
                glstring: glstring.to_string(),
                found: parts.len(),
            });
        };

        let first: Allele = first.parse()?;
        let second: Allele = second.parse()?;

        if first.locus() != second.locus() {
            return Err(InvalidAllele::MixedLoci(glstring.to_string()));
        }

        let alleles = if first <= second {
            [first, second]
        } else {
            [second, first]
        };

        Ok(Self { alleles })
    }

    pub fn locus(&self) -> &str {
        self.alleles[0].locus()
    }

    pub fn alleles(&self) -> &[Allele; 2] {
        &self.alleles
    }
}

impl FromStr for Slug {
    type Err = InvalidAllele;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_glstring(s)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.alleles[0], GENOTYPE_OPERATOR, self.alleles[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_heterozygous() {
        let slug = Slug::from_glstring("A*01:01+A*02:01").unwrap();
        assert_eq!(slug.locus(), "A");
        assert_ne!(slug.alleles()[0], slug.alleles()[1]);
        assert_eq!(slug.to_string(), "A*01:01+A*02:01");
    }

    #[test]
    fn test_canonical_order() {
        let slug = Slug::from_glstring("HLA-A*02:01+HLA-A*01:01").unwrap();
        assert_eq!(slug.to_string(), "A*01:01+A*02:01");
    }

    #[test]
    fn test_homozygous() {
        let slug: Slug = "B*07:02+B*07:02".parse().unwrap();
        assert_eq!(slug.alleles()[0], slug.alleles()[1]);
    }

    #[test]
    fn test_single_allele_rejected() {
        let err = Slug::from_glstring("A*01:01").unwrap_err();
        assert_eq!(
            err,
            InvalidAllele::AlleleCount {
                glstring: "A*01:01".to_string(),
                found: 1,
            }
        );
    }

    #[test]
    fn test_ambiguous_rejected() {
        let err = Slug::from_glstring("A*01:01/A*01:02+A*02:01").unwrap_err();
        assert!(matches!(err, InvalidAllele::Ambiguous(_)));
    }

    #[test]
    fn test_mixed_loci_rejected() {
        let err = Slug::from_glstring("A*01:01+B*07:02").unwrap_err();
        assert!(matches!(err, InvalidAllele::MixedLoci(_)));
    }

    #[test]
    fn test_bad_allele_message() {
        let err = Slug::from_glstring("A*01:01+A*XX").unwrap_err();
        assert_eq!(err.to_string(), "A*XX is not a valid allele");
    }

    #[test]
    fn test_empty_rejected() {
        let err = Slug::from_glstring("").unwrap_err();
        assert!(matches!(err, InvalidAllele::Malformed(_)));
    }
}
