use serde::{Deserialize, Serialize};

use crate::core_api::{ItemCatalog, ItemCategory, ItemSlot};
use crate::model::{DEPOT_SLOT_COUNT, Loadout, TAUNT_SLOT_COUNT};

use super::weapon::ShareableWeapon;

/// Id form of a [`Loadout`].
///
/// Butt pack, hanger and patch fields only exist in this form; mapping leaves
/// them alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareableLoadout {
    #[serde(rename = "R1")]
    pub primary: ShareableWeapon,
    #[serde(rename = "R2")]
    pub secondary: ShareableWeapon,
    #[serde(rename = "F1")]
    pub female: bool,
    #[serde(rename = "B1")]
    pub bot: bool,
    #[serde(rename = "A1")]
    pub avatar: i32,
    #[serde(rename = "B2")]
    pub body_camo: i32,
    #[serde(rename = "B3")]
    pub badge: i32,
    #[serde(rename = "B4")]
    pub butt_pack: i32,
    #[serde(rename = "D1")]
    pub depot: [i32; DEPOT_SLOT_COUNT],
    #[serde(rename = "U1")]
    pub upper_body: i32,
    #[serde(rename = "L1")]
    pub lower_body: i32,
    #[serde(rename = "H1")]
    pub helmet: i32,
    #[serde(rename = "H2")]
    pub hanger: i32,
    #[serde(rename = "G1")]
    pub gear_r1: i32,
    #[serde(rename = "G2")]
    pub gear_r2: i32,
    #[serde(rename = "G3")]
    pub gear_l1: i32,
    #[serde(rename = "G4")]
    pub gear_l2: i32,
    #[serde(rename = "P1")]
    pub patch_icon: i32,
    #[serde(rename = "P2")]
    pub patch_icon_color: i32,
    #[serde(rename = "P3")]
    pub patch_shape: i32,
    #[serde(rename = "P4")]
    pub patch_shape_color: i32,
    #[serde(rename = "T1")]
    pub tactical: i32,
    #[serde(rename = "T2")]
    pub taunts: [i32; TAUNT_SLOT_COUNT],
}

impl Default for ShareableLoadout {
    fn default() -> Self {
        Self {
            primary: ShareableWeapon::default(),
            secondary: ShareableWeapon::default(),
            female: false,
            bot: false,
            avatar: ItemCategory::AVATAR_SENTINEL_ID,
            body_camo: 0,
            badge: 0,
            butt_pack: 0,
            depot: [0; DEPOT_SLOT_COUNT],
            upper_body: 0,
            lower_body: 0,
            helmet: 0,
            hanger: 0,
            gear_r1: 0,
            gear_r2: 0,
            gear_l1: 0,
            gear_l2: 0,
            patch_icon: 0,
            patch_icon_color: 0,
            patch_shape: 0,
            patch_shape_color: 0,
            tactical: 0,
            taunts: [0; TAUNT_SLOT_COUNT],
        }
    }
}

fn ids<const N: usize>(
    catalog: &ItemCatalog,
    category: ItemCategory,
    slots: &[ItemSlot; N],
) -> [i32; N] {
    std::array::from_fn(|i| catalog.reverse_lookup(category, slots[i].as_deref()))
}

fn slots<const N: usize>(
    catalog: &ItemCatalog,
    category: ItemCategory,
    ids: &[i32; N],
) -> [ItemSlot; N] {
    std::array::from_fn(|i| Some(catalog.lookup(category, ids[i])))
}

impl ShareableLoadout {
    /// Export used when building a shareable set from a profile.
    ///
    /// Gear goes right side first (`gear[0..2]` to `G1`/`G2`, `gear[2..4]` to
    /// `G3`/`G4`) and `is_bot` is not exported.
    pub fn from_loadout(loadout: &Loadout, catalog: &ItemCatalog) -> Self {
        let id = |category, item: &ItemSlot| catalog.reverse_lookup(category, item.as_deref());

        Self {
            primary: ShareableWeapon::from_weapon(&loadout.primary, catalog),
            secondary: ShareableWeapon::from_weapon(&loadout.secondary, catalog),
            female: loadout.is_female,
            avatar: id(ItemCategory::Avatars, &loadout.avatar),
            body_camo: id(ItemCategory::CamosBodies, &loadout.body_camo),
            badge: id(ItemCategory::Badges, &loadout.trophy),
            upper_body: id(ItemCategory::UpperBodies, &loadout.upper_body),
            lower_body: id(ItemCategory::LowerBodies, &loadout.lower_body),
            helmet: id(ItemCategory::Helmets, &loadout.helmet),
            tactical: id(ItemCategory::Tactical, &loadout.tactical),
            gear_r1: id(ItemCategory::Attachments, &loadout.gear[0]),
            gear_r2: id(ItemCategory::Attachments, &loadout.gear[1]),
            gear_l1: id(ItemCategory::Attachments, &loadout.gear[2]),
            gear_l2: id(ItemCategory::Attachments, &loadout.gear[3]),
            taunts: ids(catalog, ItemCategory::Emotes, &loadout.taunts),
            depot: ids(catalog, ItemCategory::Shop, &loadout.depot),
            ..Self::default()
        }
    }

    pub fn to_loadout(&self, catalog: &ItemCatalog) -> Loadout {
        let mut loadout = Loadout::default();
        self.read(&mut loadout, catalog);
        loadout
    }

    pub fn read(&self, loadout: &mut Loadout, catalog: &ItemCatalog) {
        let slot = |category, id| Some(catalog.lookup(category, id));

        self.primary.read(&mut loadout.primary, catalog);
        self.secondary.read(&mut loadout.secondary, catalog);
        loadout.is_female = self.female;
        loadout.is_bot = self.bot;

        loadout.avatar = slot(ItemCategory::Avatars, self.avatar);
        loadout.body_camo = slot(ItemCategory::CamosBodies, self.body_camo);
        loadout.depot = slots(catalog, ItemCategory::Shop, &self.depot);

        loadout.gear[0] = slot(ItemCategory::Attachments, self.gear_r1);
        loadout.gear[1] = slot(ItemCategory::Attachments, self.gear_r2);
        loadout.gear[2] = slot(ItemCategory::Attachments, self.gear_l1);
        loadout.gear[3] = slot(ItemCategory::Attachments, self.gear_l2);

        loadout.helmet = slot(ItemCategory::Helmets, self.helmet);
        loadout.upper_body = slot(ItemCategory::UpperBodies, self.upper_body);
        loadout.lower_body = slot(ItemCategory::LowerBodies, self.lower_body);
        loadout.tactical = slot(ItemCategory::Tactical, self.tactical);
        loadout.taunts = slots(catalog, ItemCategory::Emotes, &self.taunts);
        loadout.trophy = slot(ItemCategory::Badges, self.badge);
    }

    /// Field-by-field export. Unlike [`Self::from_loadout`], gear goes left
    /// side first (`gear[0..2]` to `G3`/`G4`) and `is_bot` is copied.
    pub fn write(&mut self, loadout: &Loadout, catalog: &ItemCatalog) {
        let id = |category, item: &ItemSlot| catalog.reverse_lookup(category, item.as_deref());

        self.primary.write(&loadout.primary, catalog);
        self.secondary.write(&loadout.secondary, catalog);
        self.female = loadout.is_female;
        self.bot = loadout.is_bot;

        self.avatar = id(ItemCategory::Avatars, &loadout.avatar);
        self.body_camo = id(ItemCategory::CamosBodies, &loadout.body_camo);
        self.depot = ids(catalog, ItemCategory::Shop, &loadout.depot);

        self.gear_l1 = id(ItemCategory::Attachments, &loadout.gear[0]);
        self.gear_l2 = id(ItemCategory::Attachments, &loadout.gear[1]);
        self.gear_r1 = id(ItemCategory::Attachments, &loadout.gear[2]);
        self.gear_r2 = id(ItemCategory::Attachments, &loadout.gear[3]);

        self.helmet = id(ItemCategory::Helmets, &loadout.helmet);
        self.upper_body = id(ItemCategory::UpperBodies, &loadout.upper_body);
        self.lower_body = id(ItemCategory::LowerBodies, &loadout.lower_body);
        self.tactical = id(ItemCategory::Tactical, &loadout.tactical);
        self.taunts = ids(catalog, ItemCategory::Emotes, &loadout.taunts);
        self.badge = id(ItemCategory::Badges, &loadout.trophy);
    }
}
