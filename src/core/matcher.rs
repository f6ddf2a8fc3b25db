use crate::core::slug::Slug;
use crate::error::InvalidAllele;

/// Compare a patient's and a donor's SLUG
///
/// Both genotypes must be typed at the same locus. They match when the
/// canonical allele pairs are identical, regardless of the order in which
/// the alleles were written or whether an `HLA-` prefix was used.
pub fn slug_match(patient: &Slug, donor: &Slug) -> Result<bool, InvalidAllele> {
    if patient.locus() != donor.locus() {
        return Err(InvalidAllele::LocusMismatch {
            patient: patient.to_string(),
            donor: donor.to_string(),
        });
    }

    Ok(patient.alleles() == donor.alleles())
}
