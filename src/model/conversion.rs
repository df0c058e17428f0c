//! Conversion cycle policy: the tick threshold and the staged damage bands
//! applied when a cycle is interrupted before completion.

use super::body::{BodyPartKind, DamageInfo, DamageKind};

/// Ticks of powered, occupied operation needed to complete a conversion.
pub const CONVERSION_TICKS: u32 = 2500;

/// The wound applied per damaged part on an interrupted ejection.
pub const CONVERSION_WOUND: DamageInfo = DamageInfo {
    kind: DamageKind::Cut,
    amount: 100,
};

/// Where a casket is in its cycle, derived from accumulated progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionPhase {
    /// Still accumulating ticks toward the threshold.
    Accumulating,
    /// Past the threshold; the next ejection replaces the occupant.
    Completing,
}

impl ConversionPhase {
    pub fn of(progress: u32) -> Self {
        if progress > CONVERSION_TICKS {
            Self::Completing
        } else {
            Self::Accumulating
        }
    }
}

/// Damage bands over accumulated progress, as half-open ranges: each row is
/// (exclusive upper bound, parts wounded). Bands are cumulative — the longer
/// the interrupted cycle ran, the more limbs it has already worked over.
const DAMAGE_BANDS: &[(u32, &[BodyPartKind])] = &[
    (500, &[BodyPartKind::LeftArm]),
    (1000, &[BodyPartKind::LeftArm, BodyPartKind::RightArm]),
    (
        1500,
        &[
            BodyPartKind::LeftArm,
            BodyPartKind::RightArm,
            BodyPartKind::LeftLeg,
        ],
    ),
    (
        u32::MAX,
        &[
            BodyPartKind::LeftArm,
            BodyPartKind::RightArm,
            BodyPartKind::LeftLeg,
            BodyPartKind::RightLeg,
        ],
    ),
];

/// Parts wounded when ejecting at the given progress without completing.
pub fn parts_to_damage(progress: u32) -> &'static [BodyPartKind] {
    DAMAGE_BANDS
        .iter()
        .find(|(end, _)| progress < *end)
        .map_or(&[], |(_, parts)| parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_flips_past_threshold() {
        assert_eq!(ConversionPhase::of(0), ConversionPhase::Accumulating);
        assert_eq!(
            ConversionPhase::of(CONVERSION_TICKS),
            ConversionPhase::Accumulating
        );
        assert_eq!(
            ConversionPhase::of(CONVERSION_TICKS + 1),
            ConversionPhase::Completing
        );
    }

    #[test]
    fn first_band_wounds_left_arm_only() {
        assert_eq!(parts_to_damage(0), &[BodyPartKind::LeftArm]);
        assert_eq!(parts_to_damage(499), &[BodyPartKind::LeftArm]);
    }

    #[test]
    fn bands_are_half_open_at_boundaries() {
        // Exact multiples of 500 fall into the next band, not a gap.
        assert_eq!(
            parts_to_damage(500),
            &[BodyPartKind::LeftArm, BodyPartKind::RightArm]
        );
        assert_eq!(
            parts_to_damage(1000),
            &[
                BodyPartKind::LeftArm,
                BodyPartKind::RightArm,
                BodyPartKind::LeftLeg
            ]
        );
        assert_eq!(parts_to_damage(1500).len(), 4);
    }

    #[test]
    fn bands_are_cumulative() {
        for progress in 0..CONVERSION_TICKS {
            let parts = parts_to_damage(progress);
            assert!(!parts.is_empty(), "no band covers progress {progress}");
            assert!(parts.starts_with(&[BodyPartKind::LeftArm]));
        }
    }

    #[test]
    fn past_threshold_uses_last_band() {
        assert_eq!(parts_to_damage(2499).len(), 4);
        assert_eq!(parts_to_damage(2500).len(), 4);
        assert_eq!(parts_to_damage(10_000).len(), 4);
    }
}
