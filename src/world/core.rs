use std::collections::HashMap;

use glam::IVec3;
use parking_lot::RwLock;

use crate::world::block::{Block, BlockKind};
use crate::world::inventory::Inventory;

/// Sparse block store for the live world. Coordinates with no entry are air.
///
/// Reads may come from any thread; mutation is confined to the authoritative
/// game-state thread (see `scheduler::TaskQueue`).
pub struct World {
    blocks: RwLock<HashMap<IVec3, Block>>,
}

impl World {
    pub fn new() -> Self {
        Self {
            blocks: RwLock::new(HashMap::new()),
        }
    }

    pub fn set_block(&self, pos: IVec3, block: Block) {
        self.blocks.write().insert(pos, block);
    }

    pub fn remove_block(&self, pos: IVec3) -> Option<Block> {
        self.blocks.write().remove(&pos)
    }

    pub fn block_kind(&self, pos: IVec3) -> Option<BlockKind> {
        self.blocks.read().get(&pos).map(|b| b.kind)
    }

    /// Snapshot of the inventory at `pos`, if that block is a container.
    pub fn inventory(&self, pos: IVec3) -> Option<Inventory> {
        self.blocks.read().get(&pos).and_then(|b| b.inventory.clone())
    }

    /// Runs `f` against the inventory at `pos` under the write lock, so no
    /// reader observes a half-updated container. Returns false when there is
    /// no container block at `pos`.
    pub fn update_inventory<F>(&self, pos: IVec3, f: F) -> bool
    where
        F: FnOnce(&mut Inventory),
    {
        let mut blocks = self.blocks.write();
        match blocks.get_mut(&pos).and_then(|b| b.inventory.as_mut()) {
            Some(inventory) => {
                f(inventory);
                true
            }
            None => false,
        }
    }

    pub fn block_count(&self) -> usize {
        self.blocks.read().len()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
