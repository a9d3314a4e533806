//! Editable, descriptor-based loadout model.

use crate::core_api::{ItemCategory, ItemSlot};

pub const GEAR_SLOT_COUNT: usize = 4;
pub const TAUNT_SLOT_COUNT: usize = 8;
pub const DEPOT_SLOT_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weapon {
    pub is_primary: bool,
    pub receiver: ItemSlot,
    pub barrel: ItemSlot,
    pub muzzle: ItemSlot,
    pub magazine: ItemSlot,
    pub stock: ItemSlot,
    pub scope: ItemSlot,
    pub grip: ItemSlot,
    pub ammo: ItemSlot,
    pub tag: ItemSlot,
    pub camo: ItemSlot,
    pub skin: ItemSlot,
}

impl Weapon {
    pub fn new(is_primary: bool) -> Self {
        Self {
            is_primary,
            receiver: None,
            barrel: None,
            muzzle: None,
            magazine: None,
            stock: None,
            scope: None,
            grip: None,
            ammo: None,
            tag: None,
            camo: None,
            skin: None,
        }
    }

    pub fn receiver_category(&self) -> ItemCategory {
        ItemCategory::receiver(self.is_primary)
    }
}

/// One of the three loadouts of a profile. Array slots are positional:
/// `gear[0]` is the first gear slot, `depot[3]` the fourth depot slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loadout {
    pub primary: Weapon,
    pub secondary: Weapon,
    pub avatar: ItemSlot,
    pub body_camo: ItemSlot,
    pub upper_body: ItemSlot,
    pub lower_body: ItemSlot,
    pub helmet: ItemSlot,
    pub tactical: ItemSlot,
    pub trophy: ItemSlot,
    pub gear: [ItemSlot; GEAR_SLOT_COUNT],
    pub taunts: [ItemSlot; TAUNT_SLOT_COUNT],
    pub depot: [ItemSlot; DEPOT_SLOT_COUNT],
    pub is_female: bool,
    pub is_bot: bool,
}

impl Default for Loadout {
    fn default() -> Self {
        Self {
            primary: Weapon::new(true),
            secondary: Weapon::new(false),
            avatar: None,
            body_camo: None,
            upper_body: None,
            lower_body: None,
            helmet: None,
            tactical: None,
            trophy: None,
            gear: Default::default(),
            taunts: Default::default(),
            depot: Default::default(),
            is_female: false,
            is_bot: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub player_name: String,
    pub loadout1: Loadout,
    pub loadout2: Loadout,
    pub loadout3: Loadout,
}

impl Profile {
    pub const DEFAULT_PLAYER_NAME: &'static str = "Player";

    pub fn loadouts(&self) -> [&Loadout; 3] {
        [&self.loadout1, &self.loadout2, &self.loadout3]
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            player_name: Self::DEFAULT_PLAYER_NAME.to_string(),
            loadout1: Loadout::default(),
            loadout2: Loadout::default(),
            loadout3: Loadout::default(),
        }
    }
}
