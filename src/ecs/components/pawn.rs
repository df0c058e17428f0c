use std::collections::VecDeque;

use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;

use crate::model::{BodyPart, BodyPartKind, BodyPartSpec, DamageInfo};

/// Which creature-kind template this pawn was generated from.
#[derive(Component, Debug, Clone)]
pub struct PawnKind(pub String);

/// What applying a wound actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WoundOutcome {
    pub applied: u32,
    /// The part dropped to zero and is now missing.
    pub severed: bool,
}

/// Body-part health of a living creature.
#[derive(Component, Debug, Clone)]
pub struct PawnHealth {
    pub parts: Vec<BodyPart>,
}

impl PawnHealth {
    pub fn from_plan(plan: &[BodyPartSpec]) -> Self {
        Self {
            parts: plan
                .iter()
                .map(|spec| BodyPart {
                    kind: spec.kind,
                    hit_points: spec.max_hit_points,
                    max_hit_points: spec.max_hit_points,
                })
                .collect(),
        }
    }

    /// First part of the given kind that is still attached.
    pub fn not_missing(&self, kind: BodyPartKind) -> Option<&BodyPart> {
        self.parts
            .iter()
            .find(|p| p.kind == kind && !p.is_missing())
    }

    pub fn is_missing(&self, kind: BodyPartKind) -> bool {
        self.not_missing(kind).is_none()
    }

    /// Wound the first attached part of the given kind. Returns `None` when
    /// no such part remains — callers decide whether that is worth a warning.
    pub fn apply_damage(&mut self, kind: BodyPartKind, wound: DamageInfo) -> Option<WoundOutcome> {
        let part = self
            .parts
            .iter_mut()
            .find(|p| p.kind == kind && !p.is_missing())?;
        let applied = wound.amount.min(part.hit_points);
        part.hit_points -= applied;
        Some(WoundOutcome {
            applied,
            severed: part.hit_points == 0,
        })
    }
}

// ---------------------------------------------------------------------------
// Jobs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    EnterCasket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub kind: JobKind,
    pub target: Entity,
}

/// FIFO of ordered jobs for a pawn. The job system resolves at most one
/// entry per pawn per tick.
#[derive(Component, Debug, Clone, Default)]
pub struct JobDriver {
    pub queue: VecDeque<Job>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DamageKind, humanoid_plan};

    const CUT_10: DamageInfo = DamageInfo {
        kind: DamageKind::Cut,
        amount: 10,
    };

    #[test]
    fn damage_reduces_hit_points() {
        let mut health = PawnHealth::from_plan(&humanoid_plan());
        let outcome = health.apply_damage(BodyPartKind::LeftArm, CUT_10).unwrap();
        assert_eq!(outcome.applied, 10);
        assert!(!outcome.severed);
        assert_eq!(
            health.not_missing(BodyPartKind::LeftArm).unwrap().hit_points,
            20
        );
    }

    #[test]
    fn overkill_severs_the_part() {
        let mut health = PawnHealth::from_plan(&humanoid_plan());
        let wound = DamageInfo {
            kind: DamageKind::Cut,
            amount: 100,
        };
        let outcome = health.apply_damage(BodyPartKind::RightLeg, wound).unwrap();
        assert_eq!(outcome.applied, 30);
        assert!(outcome.severed);
        assert!(health.is_missing(BodyPartKind::RightLeg));
    }

    #[test]
    fn damage_to_missing_part_is_refused() {
        let mut health = PawnHealth::from_plan(&humanoid_plan());
        let wound = DamageInfo {
            kind: DamageKind::Cut,
            amount: 100,
        };
        health.apply_damage(BodyPartKind::LeftArm, wound).unwrap();
        assert!(health.apply_damage(BodyPartKind::LeftArm, wound).is_none());
    }

    #[test]
    fn wounds_stack_until_severed() {
        let mut health = PawnHealth::from_plan(&humanoid_plan());
        health.apply_damage(BodyPartKind::LeftLeg, CUT_10).unwrap();
        health.apply_damage(BodyPartKind::LeftLeg, CUT_10).unwrap();
        let outcome = health.apply_damage(BodyPartKind::LeftLeg, CUT_10).unwrap();
        assert!(outcome.severed);
        assert!(health.is_missing(BodyPartKind::LeftLeg));
    }
}
