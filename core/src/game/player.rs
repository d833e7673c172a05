//! Player state: identity and resource balance.

use crate::types::{Gems, PlayerId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    gems: Gems,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            gems: 0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gems(&self) -> Gems {
        self.gems
    }

    pub(crate) fn add_gems(&mut self, amount: Gems) {
        self.gems += amount;
    }
}
