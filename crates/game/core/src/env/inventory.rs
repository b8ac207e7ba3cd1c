use crate::relic::RelicId;

/// Relic ownership collaborator.
pub trait InventoryOracle: Send + Sync {
    fn equipped_relics(&self) -> Vec<RelicId>;

    fn owned_relics(&self) -> Vec<RelicId>;

    /// Relics active in combat: the equipped list, or every owned relic when
    /// nothing is equipped.
    fn active_relics(&self) -> Vec<RelicId> {
        let equipped = self.equipped_relics();
        if equipped.is_empty() {
            self.owned_relics()
        } else {
            equipped
        }
    }
}
