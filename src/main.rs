use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use glam::{IVec3, Vec3};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use dispenserfill::{
    Block, BlockKind, CommandRegistry, CommandSender, FillConfig, FillDispensersCommand, ItemKind,
    ItemStack, Player, TaskQueue, World, FILL_PERMISSION,
};

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;
    info!("Starting dispenser fill host...");

    let config = FillConfig::load(Path::new("dispenserfill.toml"))?;
    let world = Arc::new(World::new());

    // A row of dispensers plus some bystander blocks around spawn.
    for x in -2..=2 {
        world.set_block(IVec3::new(x * 3, 64, 0), Block::new(BlockKind::Dispenser));
    }
    world.set_block(IVec3::new(0, 64, 3), Block::new(BlockKind::Dropper));
    world.set_block(IVec3::new(0, 64, -3), Block::new(BlockKind::Chest));
    world.set_block(IVec3::new(0, 63, 0), Block::new(BlockKind::Stone));

    let queue = TaskQueue::new();
    let mut registry = CommandRegistry::new();
    registry.register(
        "filldispensers",
        Box::new(FillDispensersCommand::new(
            Arc::clone(&world),
            queue.handle(),
            config,
        )),
    );

    let player = {
        let mut p = Player::new("steve", Vec3::new(0.5, 65.0, 0.5));
        p.grant(FILL_PERMISSION);
        p.held_item = Some(ItemStack::new(ItemKind::Arrow, 3));
        p.shared()
    };
    let sender = CommandSender::Player(Arc::clone(&player));

    registry.dispatch(&sender, "/filldispensers 8");
    registry.dispatch(&sender, "/filldispensers 8");

    // One drain cycle of the authoritative thread.
    let ran = queue.drain();
    info!("Drained {ran} queued tasks");

    let name = player.read().name.clone();
    for message in player.write().drain_messages() {
        info!("[{name}] {message}");
    }
    Ok(())
}
