use serde::{Deserialize, Serialize};

use crate::item::ItemStack;

/// Number of slots in a dispenser-type inventory.
pub const DISPENSER_SLOT_COUNT: usize = 9;
/// Number of slots in a chest inventory.
pub const CHEST_SLOT_COUNT: usize = 27;

/// Fixed-capacity item container backing container blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<Option<ItemStack>>,
}

impl Inventory {
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, index: usize) -> Option<&ItemStack> {
        self.slots.get(index)?.as_ref()
    }

    pub fn set_slot(&mut self, index: usize, stack: Option<ItemStack>) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = stack;
        }
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    /// Writes a clone of `stack` into every slot.
    pub fn fill_all(&mut self, stack: ItemStack) {
        for slot in &mut self.slots {
            *slot = Some(stack.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemKind;

    #[test]
    fn test_fill_all_overwrites_every_slot() {
        let mut inv = Inventory::new(DISPENSER_SLOT_COUNT);
        inv.set_slot(4, Some(ItemStack::new(ItemKind::Stone, 12)));

        inv.fill_all(ItemStack::new(ItemKind::Arrow, 64));
        assert_eq!(inv.size(), DISPENSER_SLOT_COUNT);
        for i in 0..inv.size() {
            assert_eq!(inv.slot(i), Some(&ItemStack::new(ItemKind::Arrow, 64)));
        }
    }

    #[test]
    fn test_clear_empties_inventory() {
        let mut inv = Inventory::new(DISPENSER_SLOT_COUNT);
        inv.fill_all(ItemStack::new(ItemKind::Snowball, 16));
        assert!(!inv.is_empty());

        inv.clear();
        assert!(inv.is_empty());
    }

    #[test]
    fn test_set_slot_out_of_range_is_ignored() {
        let mut inv = Inventory::new(DISPENSER_SLOT_COUNT);
        inv.set_slot(99, Some(ItemStack::new(ItemKind::Stone, 1)));
        assert!(inv.is_empty());
    }
}
