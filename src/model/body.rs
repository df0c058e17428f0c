use serde::{Deserialize, Serialize};

/// Body part slots a creature body plan can provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPartKind {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyPartKind {
    pub fn label(self) -> &'static str {
        match self {
            BodyPartKind::Head => "head",
            BodyPartKind::Torso => "torso",
            BodyPartKind::LeftArm => "left arm",
            BodyPartKind::RightArm => "right arm",
            BodyPartKind::LeftLeg => "left leg",
            BodyPartKind::RightLeg => "right leg",
        }
    }
}

/// One slot of a creature-kind body plan: which part, and how much it can take.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyPartSpec {
    pub kind: BodyPartKind,
    pub max_hit_points: u32,
}

/// A concrete body part on a living creature.
///
/// A part at zero hit points is missing (severed or destroyed); it stays in
/// the part list so lookups can distinguish "never had one" from "lost it".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyPart {
    pub kind: BodyPartKind,
    pub hit_points: u32,
    pub max_hit_points: u32,
}

impl BodyPart {
    pub fn is_missing(&self) -> bool {
        self.hit_points == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageKind {
    Cut,
    Blunt,
    Burn,
}

/// A typed wound to apply to a specific body part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageInfo {
    pub kind: DamageKind,
    pub amount: u32,
}

/// Standard humanoid body plan. Hit points follow the usual
/// head < limbs < torso spread.
pub fn humanoid_plan() -> Vec<BodyPartSpec> {
    vec![
        BodyPartSpec {
            kind: BodyPartKind::Head,
            max_hit_points: 25,
        },
        BodyPartSpec {
            kind: BodyPartKind::Torso,
            max_hit_points: 40,
        },
        BodyPartSpec {
            kind: BodyPartKind::LeftArm,
            max_hit_points: 30,
        },
        BodyPartSpec {
            kind: BodyPartKind::RightArm,
            max_hit_points: 30,
        },
        BodyPartSpec {
            kind: BodyPartKind::LeftLeg,
            max_hit_points: 30,
        },
        BodyPartSpec {
            kind: BodyPartKind::RightLeg,
            max_hit_points: 30,
        },
    ]
}
