use crate::models::{AttributeSet, ALLERGY, LOVES_PETS, NO_PET_BUT_LOVES_THEM, NO_PREFERENCE};

/// Compatibility score (0-100) between a housing candidate and a seeker.
///
/// Rules fire in a fixed order and consume the dimensions they settle, which
/// is why both attribute sets are taken by value; callers re-normalize before
/// scoring the same participant again.
///
/// 1. Pet tolerance, on the union of both sides' labels: `Allergy` vetoes the
///    pair outright; an enthusiast label auto-satisfies the dimension;
///    otherwise the dimension contributes nothing.
/// 2. Gender preference: `No preference` on either side auto-satisfies and
///    consumes the dimension.
/// 3. Occupancy: candidate limit must not exceed the seeker's. Counted
///    exactly once per call, match or not.
/// 4. Remaining scalars compare by exact equality, two empty values included.
pub fn score_pair(mut candidate: AttributeSet, mut seeker: AttributeSet) -> f64 {
    let mut total: u32 = 0;
    let mut matched: u32 = 0;

    // Stage 1: pet-tolerance overrides. The dimension is never compared as a
    // plain scalar, so without an override it simply drops out.
    let pets = candidate.pet_tolerance.union(&seeker.pet_tolerance);
    if pets.contains(ALLERGY) {
        tracing::debug!("Pet allergy on either side, vetoing pair");
        return 0.0;
    }
    if pets.contains(LOVES_PETS) || pets.contains(NO_PET_BUT_LOVES_THEM) {
        total += 1;
        matched += 1;
    }

    // Stage 2: gender wildcard consumes the dimension on both sides
    if candidate.gender_preference.as_deref() == Some(NO_PREFERENCE)
        || seeker.gender_preference.as_deref() == Some(NO_PREFERENCE)
    {
        total += 1;
        matched += 1;
        candidate.gender_preference = None;
        seeker.gender_preference = None;
    }

    // Stage 3: occupancy capacity, evaluated exactly once per call
    total += 1;
    match (
        parse_occupants(&candidate.max_occupants),
        parse_occupants(&seeker.max_occupants),
    ) {
        (Some(candidate_max), Some(seeker_max)) => {
            if candidate_max <= seeker_max {
                matched += 1;
            }
        }
        _ => {
            tracing::warn!(
                "Unparseable occupancy ({:?} vs {:?}), counting as unmatched",
                candidate.max_occupants,
                seeker.max_occupants
            );
        }
    }

    // Stage 4: remaining scalar dimensions by exact equality. Gender is
    // skipped when stage 2 already settled it.
    if candidate.gender_preference.is_some() {
        total += 1;
        if candidate.gender_preference == seeker.gender_preference {
            matched += 1;
        }
    }

    total += 1;
    if candidate.smoking_frequency == seeker.smoking_frequency {
        matched += 1;
    }

    total += 1;
    if candidate.drinking_frequency == seeker.drinking_frequency {
        matched += 1;
    }

    // Unreachable while stage 3 is unconditional, but never divide by zero
    if total == 0 {
        return 0.0;
    }

    let score = f64::from(matched) / f64::from(total) * 100.0;
    tracing::debug!("Pair scored {:.1} ({}/{} dimensions matched)", score, matched, total);
    score
}

/// Occupancy arrives as free text: an absent field counts as zero, while
/// text that is present but non-numeric is a parse failure.
fn parse_occupants(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse().ok()
}
