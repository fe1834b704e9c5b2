use serde::{Deserialize, Serialize};

use crate::world::inventory::{Inventory, CHEST_SLOT_COUNT, DISPENSER_SLOT_COUNT};

/// Closed set of block-state variants the command host must distinguish.
/// Coordinates with no entry in the world map are air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Stone,
    Dirt,
    Glass,
    Chest,
    Dispenser,
    Dropper,
}

impl BlockKind {
    /// Dispenser-type blocks expose a fixed-capacity ejecting inventory.
    pub fn is_dispenser_like(&self) -> bool {
        matches!(self, BlockKind::Dispenser | BlockKind::Dropper)
    }

    pub fn inventory_size(&self) -> Option<usize> {
        match self {
            BlockKind::Dispenser | BlockKind::Dropper => Some(DISPENSER_SLOT_COUNT),
            BlockKind::Chest => Some(CHEST_SLOT_COUNT),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
    pub inventory: Option<Inventory>,
}

impl Block {
    /// Container blocks get their inventory allocated up front.
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            inventory: kind.inventory_size().map(Inventory::new),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispenser_like_variants() {
        assert!(BlockKind::Dispenser.is_dispenser_like());
        assert!(BlockKind::Dropper.is_dispenser_like());
        assert!(!BlockKind::Chest.is_dispenser_like());
        assert!(!BlockKind::Stone.is_dispenser_like());
    }

    #[test]
    fn test_new_allocates_container_inventory() {
        let dispenser = Block::new(BlockKind::Dispenser);
        assert_eq!(
            dispenser.inventory.as_ref().map(Inventory::size),
            Some(DISPENSER_SLOT_COUNT)
        );

        let stone = Block::new(BlockKind::Stone);
        assert!(stone.inventory.is_none());
    }
}
