//! Definition registry — the explicit replacement for ambient global def
//! lookups. Built once by the embedder and inserted as a resource; systems
//! resolve casket variants and creature kinds through it by name.

use bevy_ecs::resource::Resource;

use crate::model::{CasketDef, CreatureKindDef, humanoid_plan};

#[derive(Resource, Debug, Clone, Default)]
pub struct DefRegistry {
    caskets: Vec<CasketDef>,
    creature_kinds: Vec<CreatureKindDef>,
}

impl DefRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a casket variant. Panics on a duplicate def_name.
    pub fn add_casket(&mut self, def: CasketDef) {
        assert!(
            self.casket(&def.def_name).is_none(),
            "duplicate casket def {}",
            def.def_name
        );
        self.caskets.push(def);
    }

    /// Register a creature kind. Panics on a duplicate def_name.
    pub fn add_creature_kind(&mut self, def: CreatureKindDef) {
        assert!(
            self.creature_kind(&def.def_name).is_none(),
            "duplicate creature kind {}",
            def.def_name
        );
        self.creature_kinds.push(def);
    }

    pub fn with_casket(mut self, def: CasketDef) -> Self {
        self.add_casket(def);
        self
    }

    pub fn with_creature_kind(mut self, def: CreatureKindDef) -> Self {
        self.add_creature_kind(def);
        self
    }

    pub fn casket(&self, def_name: &str) -> Option<&CasketDef> {
        self.caskets.iter().find(|d| d.def_name == def_name)
    }

    pub fn creature_kind(&self, def_name: &str) -> Option<&CreatureKindDef> {
        self.creature_kinds.iter().find(|d| d.def_name == def_name)
    }

    /// All casket variants, in registration order. The finder scans variants
    /// in exactly this order.
    pub fn caskets(&self) -> &[CasketDef] {
        &self.caskets
    }

    /// Stock content: one casket variant and the two creature kinds it needs.
    pub fn builtin() -> Self {
        Self::new()
            .with_casket(CasketDef {
                def_name: "conversion_casket".to_string(),
                label: "conversion casket".to_string(),
                player_ejectable: true,
                replacement_kind: "converted".to_string(),
                interaction_offset: (0, -1),
                accept_sound: "casket_accept".to_string(),
                eject_sound: "casket_eject".to_string(),
            })
            .with_creature_kind(CreatureKindDef {
                def_name: "colonist".to_string(),
                label: "colonist".to_string(),
                names: vec![
                    "Aldric".to_string(),
                    "Mara".to_string(),
                    "Tobin".to_string(),
                ],
                body: humanoid_plan(),
            })
            .with_creature_kind(CreatureKindDef {
                def_name: "converted".to_string(),
                label: "converted unit".to_string(),
                names: vec![
                    "Unit Theta".to_string(),
                    "Unit Sigma".to_string(),
                    "Unit Omega".to_string(),
                ],
                body: humanoid_plan(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_internally_consistent() {
        let defs = DefRegistry::builtin();
        for casket in defs.caskets() {
            assert!(
                defs.creature_kind(&casket.replacement_kind).is_some(),
                "casket {} names unknown replacement kind {}",
                casket.def_name,
                casket.replacement_kind
            );
        }
    }

    #[test]
    fn lookup_by_name() {
        let defs = DefRegistry::builtin();
        assert!(defs.casket("conversion_casket").is_some());
        assert!(defs.casket("no_such_def").is_none());
    }

    #[test]
    #[should_panic(expected = "duplicate casket def")]
    fn duplicate_casket_def_panics() {
        let defs = DefRegistry::builtin();
        let dup = defs.caskets()[0].clone();
        defs.with_casket(dup);
    }
}
