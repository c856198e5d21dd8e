use super::{Capacity, ModelFamily, SpecificationProfile, DEFAULT_PROFILE};

/// First family whose key occurs in the identifier, tried in `ModelFamily::ALL` order.
pub fn match_family(model_identifier: &str) -> Option<ModelFamily> {
    ModelFamily::ALL
        .into_iter()
        .find(|family| model_identifier.contains(family.key()))
}

/// Resolve an identifier to its specification profile.
///
/// Never fails: unknown identifiers get [`DEFAULT_PROFILE`]. A detected
/// capacity replaces the nominal storage, normalized to gigabytes.
pub fn resolve(model_identifier: &str, detected_capacity: Option<Capacity>) -> SpecificationProfile {
    let base = match match_family(model_identifier) {
        Some(family) => family.profile(),
        None => &DEFAULT_PROFILE,
    };
    let mut profile = base.clone();
    if let Some(capacity) = detected_capacity {
        profile.storage_gb = capacity.in_gb();
    }
    profile
}
