use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::InvalidAllele;

/// Optional nomenclature prefix, dropped from the canonical form
const HLA_PREFIX: &str = "HLA-";

/// Maximum number of colon-separated fields in an allele name
const MAX_FIELDS: usize = 4;

/// Expression status suffixes allowed after the last field
const EXPRESSION_SUFFIXES: [char; 6] = ['N', 'L', 'S', 'C', 'A', 'Q'];

/// A single numeric field of an allele name (e.g. `01`, `101`)
///
/// Ordered numerically: a shorter digit string sorts first, equal lengths
/// compare lexically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field(String);

impl Field {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for Field {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Field {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An HLA allele such as `A*01:01` or `HLA-DRB1*04:01:01:01N`
///
/// Field order matters for the derived ordering: locus, then fields, then
/// expression suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Allele {
    locus: String,
    fields: Vec<Field>,
    expression: Option<char>,
}

impl Allele {
    pub fn locus(&self) -> &str {
        &self.locus
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn expression(&self) -> Option<char> {
        self.expression
    }
}

impl FromStr for Allele {
    type Err = InvalidAllele;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidAllele::Malformed(text.to_string());

        let name = text.strip_prefix(HLA_PREFIX).unwrap_or(text);
        let (locus, typing) = name.split_once('*').ok_or_else(malformed)?;

        if locus.is_empty()
            || !locus
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(malformed());
        }

        // Expression suffix hangs off the last field
        let (typing, expression) = match typing.chars().last() {
            Some(c) if EXPRESSION_SUFFIXES.contains(&c) => {
                (&typing[..typing.len() - c.len_utf8()], Some(c))
            }
            _ => (typing, None),
        };

        let fields: Vec<Field> = typing
            .split(':')
            .map(|field| {
                if field.len() >= 2 && field.chars().all(|c| c.is_ascii_digit()) {
                    Ok(Field(field.to_string()))
                } else {
                    Err(malformed())
                }
            })
            .collect::<Result<_, _>>()?;

        if fields.len() > MAX_FIELDS {
            return Err(malformed());
        }

        Ok(Allele {
            locus: locus.to_string(),
            fields,
            expression,
        })
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*", self.locus)?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            f.write_str(field.as_str())?;
        }
        if let Some(suffix) = self.expression {
            write!(f, "{}", suffix)?;
        }
        Ok(())
    }
}
