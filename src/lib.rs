pub mod command;
pub mod config;
pub mod item;
pub mod player;
pub mod scheduler;
pub mod world;

// Re-export commonly used types
pub use command::{CommandError, CommandHandler, CommandRegistry, CommandSender};
pub use command::{FillDispensersCommand, FILL_PERMISSION};
pub use config::{FillConfig, RADIUS_CEILING};
pub use item::{ItemKind, ItemStack};
pub use player::{Player, SharedPlayer};
pub use scheduler::{TaskHandle, TaskQueue};
pub use world::{Block, BlockKind, Inventory, World, DISPENSER_SLOT_COUNT};
