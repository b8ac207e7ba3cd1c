use lexicon_core::{InventoryOracle, RelicId};

/// Fixed relic ownership for a run or a test.
#[derive(Clone, Debug, Default)]
pub struct StaticInventory {
    equipped: Vec<RelicId>,
    owned: Vec<RelicId>,
}

impl StaticInventory {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_equipped<I, S>(mut self, relics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.equipped = relics.into_iter().map(RelicId::new).collect();
        self
    }

    #[must_use]
    pub fn with_owned<I, S>(mut self, relics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.owned = relics.into_iter().map(RelicId::new).collect();
        self
    }
}

impl InventoryOracle for StaticInventory {
    fn equipped_relics(&self) -> Vec<RelicId> {
        self.equipped.clone()
    }

    fn owned_relics(&self) -> Vec<RelicId> {
        self.owned.clone()
    }
}
