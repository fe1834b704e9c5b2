use serde::{Deserialize, Serialize};

/// Closed set of item types the server knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Stone,
    Arrow,
    Snowball,
    EnderPearl,
    Bucket,
    IronSword,
}

impl ItemKind {
    /// Per-slot quantity cap. Not uniformly 64.
    pub fn stack_limit(&self) -> u32 {
        match self {
            ItemKind::Stone | ItemKind::Arrow => 64,
            ItemKind::Snowball | ItemKind::EnderPearl | ItemKind::Bucket => 16,
            ItemKind::IronSword => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub kind: ItemKind,
    pub amount: u32,
}

impl ItemStack {
    pub fn new(kind: ItemKind, amount: u32) -> Self {
        Self { kind, amount }
    }

    pub fn max_stack_size(&self) -> u32 {
        self.kind.stack_limit()
    }

    /// Copy of this stack with a different amount, keeping the kind.
    pub fn with_amount(&self, amount: u32) -> Self {
        Self {
            kind: self.kind,
            amount,
        }
    }
}
