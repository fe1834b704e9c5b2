pub mod block;
pub mod core;
pub mod inventory;

pub use block::{Block, BlockKind};
pub use core::World;
pub use inventory::{Inventory, CHEST_SLOT_COUNT, DISPENSER_SLOT_COUNT};
