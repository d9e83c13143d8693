//! ATT&CK label catalogs for both universes.
//!
//! Each entry carries its code, display name and STIX identifier in one
//! `Label`, so the old four-parallel-tables layout (codes, names, keys,
//! identifiers) cannot drift out of alignment. Catalog order is fixed and
//! matches the index order of the model's output vectors.

mod tables;

use std::collections::HashSet;
use triage_core::{Label, TriageError, TriageResult};

pub use tables::{TACTICS, TECHNIQUES};

/// The tactic universe, in model output order.
pub fn tactics() -> &'static [Label] {
    TACTICS
}

/// The technique universe, in model output order.
pub fn techniques() -> &'static [Label] {
    TECHNIQUES
}

/// Every label across both universes, tactics first.
pub fn all() -> impl Iterator<Item = &'static Label> {
    TACTICS.iter().chain(TECHNIQUES.iter())
}

/// Look up a label by its raw catalog code (the key submitted by the
/// review form), e.g. "TA0001" or "T1059".
pub fn find(code: &str) -> Option<&'static Label> {
    all().find(|l| l.code == code)
}

/// Residual integrity check run at startup: with codes, names and STIX
/// identifiers collapsed into one entry the only way the catalog can
/// still be corrupt is a duplicated code or identifier.
pub fn validate() -> TriageResult<()> {
    let mut codes = HashSet::new();
    let mut stix_ids = HashSet::new();
    for label in all() {
        if !codes.insert(label.code) {
            return Err(TriageError::DataIntegrity(format!(
                "duplicate catalog code {}",
                label.code
            )));
        }
        if !stix_ids.insert(label.stix_id) {
            return Err(TriageError::DataIntegrity(format!(
                "duplicate STIX identifier {} (code {})",
                label.stix_id, label.code
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::LabelKind;

    #[test]
    fn catalog_passes_validation() {
        validate().unwrap();
    }

    #[test]
    fn universes_are_disjoint_and_typed() {
        assert!(tactics().iter().all(|l| l.kind == LabelKind::Tactic));
        assert!(techniques().iter().all(|l| l.kind == LabelKind::Technique));
        assert!(tactics().iter().all(|l| l.code.starts_with("TA")));
        assert!(techniques()
            .iter()
            .all(|l| l.code.starts_with('T') && !l.code.starts_with("TA")));
    }

    #[test]
    fn find_maps_code_to_full_entry() {
        let label = find("TA0001").unwrap();
        assert_eq!(label.name, "Initial Access");
        assert_eq!(label.kind, LabelKind::Tactic);
        assert!(label.stix_id.starts_with("x-mitre-tactic--"));

        let label = find("T1059").unwrap();
        assert_eq!(label.kind, LabelKind::Technique);
        assert!(label.stix_id.starts_with("attack-pattern--"));
    }

    #[test]
    fn unknown_code_is_none() {
        assert!(find("name").is_none());
        assert!(find("hidereport").is_none());
        assert!(find("T9999").is_none());
    }
}
