use std::sync::Arc;

use glam::IVec3;
use log::debug;

use crate::command::cooldown::{epoch_millis, Cooldowns};
use crate::command::{CommandError, CommandHandler, CommandSender};
use crate::config::FillConfig;
use crate::item::ItemStack;
use crate::player::SharedPlayer;
use crate::scheduler::TaskHandle;
use crate::world::World;

/// Capability gating the command.
pub const FILL_PERMISSION: &str = "dispenserfill.fill";

/// Everything the executor needs, captured at validation time. The held item
/// is cloned here so later hotbar changes cannot leak into the fill.
pub struct FillRequest {
    pub player: SharedPlayer,
    pub held_item: ItemStack,
    pub radius: i32,
}

/// Gateway for `filldispensers [radius]`.
///
/// Runs on whatever thread dispatches commands; it never touches world state
/// itself. Admitted requests are handed to the task queue and executed by
/// `fill_region` on the authoritative thread.
pub struct FillDispensersCommand {
    world: Arc<World>,
    queue: TaskHandle,
    cooldowns: Cooldowns,
    config: FillConfig,
}

impl FillDispensersCommand {
    pub fn new(world: Arc<World>, queue: TaskHandle, config: FillConfig) -> Self {
        let cooldowns = Cooldowns::new(config.cooldown_secs);
        Self {
            world,
            queue,
            cooldowns,
            config,
        }
    }

    fn validate(
        &self,
        sender: &CommandSender,
        args: &[&str],
        now_ms: u64,
    ) -> Result<FillRequest, CommandError> {
        let CommandSender::Player(player) = sender else {
            return Err(CommandError::NotAPlayer);
        };

        let (player_id, held_item) = {
            let p = player.read();
            if !p.has_permission(FILL_PERMISSION) {
                return Err(CommandError::Unauthorized);
            }
            (p.id, p.held_item.clone())
        };

        if let Some(secs) = self.cooldowns.remaining_secs(player_id, now_ms) {
            return Err(CommandError::OnCooldown(secs));
        }

        let held_item = held_item.ok_or(CommandError::EmptyHand)?;
        let radius = self.parse_radius(sender, args)?;

        Ok(FillRequest {
            player: Arc::clone(player),
            held_item,
            radius,
        })
    }

    /// Default when no argument is given; clamp with a warning above the
    /// maximum; reject negatives and non-numbers outright.
    fn parse_radius(&self, sender: &CommandSender, args: &[&str]) -> Result<i32, CommandError> {
        let Some(raw) = args.first() else {
            sender.send_message(format!(
                "No radius specified. Using default radius of {} blocks.",
                self.config.default_radius
            ));
            return Ok(self.config.default_radius);
        };

        let radius: i32 = raw.parse().map_err(|_| CommandError::InvalidRadius)?;
        if radius < 0 {
            return Err(CommandError::InvalidRadius);
        }
        if radius > self.config.max_radius {
            sender.send_message(format!(
                "Radius is too large. Using the maximum radius of {} blocks.",
                self.config.max_radius
            ));
            return Ok(self.config.max_radius);
        }
        Ok(radius)
    }
}

impl CommandHandler for FillDispensersCommand {
    fn execute(&self, sender: &CommandSender, args: &[&str]) -> bool {
        let now_ms = epoch_millis();
        match self.validate(sender, args, now_ms) {
            Ok(request) => {
                // Cooldown starts at schedule time, not completion time.
                self.cooldowns.record(request.player.read().id, now_ms);

                let world = Arc::clone(&self.world);
                self.queue.submit(Box::new(move || fill_region(&world, request)));
            }
            Err(err) => sender.send_message(err.to_string()),
        }
        true
    }
}

/// Scans the cube of side `2*radius+1` around the player's block position at
/// execution time and refills every dispenser-type inventory with the
/// maximum legal stack of the held snapshot. Authoritative thread only.
pub fn fill_region(world: &World, request: FillRequest) {
    let FillRequest {
        player,
        held_item,
        radius,
    } = request;

    let center = player.read().block_pos();
    let fill = held_item.with_amount(held_item.max_stack_size());

    let mut filled = 0usize;
    for x in center.x - radius..=center.x + radius {
        for y in center.y - radius..=center.y + radius {
            for z in center.z - radius..=center.z + radius {
                let pos = IVec3::new(x, y, z);
                let Some(kind) = world.block_kind(pos) else {
                    continue;
                };
                if !kind.is_dispenser_like() {
                    continue;
                }
                world.update_inventory(pos, |inv| {
                    inv.clear();
                    inv.fill_all(fill.clone());
                });
                filled += 1;
            }
        }
    }

    debug!("filled {filled} dispensers around {center} (radius {radius})");
    player
        .write()
        .send_message(format!("Filled all dispensers within {radius} blocks."));
}
