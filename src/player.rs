use std::collections::HashSet;
use std::sync::Arc;

use glam::{IVec3, Vec3};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::item::ItemStack;

/// Handle shared between command dispatch threads and the game-state thread.
pub type SharedPlayer = Arc<RwLock<Player>>;

pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub position: Vec3,
    pub held_item: Option<ItemStack>,
    permissions: HashSet<String>,
    outbox: Vec<String>,
}

impl Player {
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            position,
            held_item: None,
            permissions: HashSet::new(),
            outbox: Vec::new(),
        }
    }

    pub fn shared(self) -> SharedPlayer {
        Arc::new(RwLock::new(self))
    }

    /// Block-floored world coordinates.
    pub fn block_pos(&self) -> IVec3 {
        self.position.floor().as_ivec3()
    }

    pub fn grant(&mut self, capability: impl Into<String>) {
        self.permissions.insert(capability.into());
    }

    pub fn has_permission(&self, capability: &str) -> bool {
        self.permissions.contains(capability)
    }

    pub fn send_message(&mut self, message: impl Into<String>) {
        self.outbox.push(message.into());
    }

    pub fn drain_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.outbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_pos_floors_coordinates() {
        let player = Player::new("steve", Vec3::new(10.7, 64.2, -0.5));
        assert_eq!(player.block_pos(), IVec3::new(10, 64, -1));
    }

    #[test]
    fn test_permissions() {
        let mut player = Player::new("steve", Vec3::ZERO);
        assert!(!player.has_permission("dispenserfill.fill"));
        player.grant("dispenserfill.fill");
        assert!(player.has_permission("dispenserfill.fill"));
    }

    #[test]
    fn test_message_outbox() {
        let mut player = Player::new("steve", Vec3::ZERO);
        player.send_message("hello");
        player.send_message("world");
        assert_eq!(player.drain_messages(), vec!["hello", "world"]);
        assert!(player.drain_messages().is_empty());
    }
}
