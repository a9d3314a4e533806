use serde::{Deserialize, Serialize};

use crate::core_api::{ItemCatalog, ItemCategory, ItemSlot};
use crate::model::Weapon;

/// Pairs a named weapon part with its slot on [`Weapon`] and its id field on
/// [`ShareableWeapon`].
pub struct WeaponPart {
    pub name: &'static str,
    pub category: fn(bool) -> ItemCategory,
    pub item: for<'a> fn(&'a Weapon) -> &'a ItemSlot,
    pub id: for<'a> fn(&'a mut ShareableWeapon) -> &'a mut i32,
}

#[rustfmt::skip]
pub const WEAPON_PARTS: [WeaponPart; 11] = [
    WeaponPart { name: "Reciever", category: ItemCategory::receiver,          item: |w| &w.receiver, id: |s| &mut s.receiver },
    WeaponPart { name: "Barrel",   category: |_| ItemCategory::Barrels,       item: |w| &w.barrel,   id: |s| &mut s.barrel },
    WeaponPart { name: "Muzzle",   category: |_| ItemCategory::Muzzles,       item: |w| &w.muzzle,   id: |s| &mut s.muzzle },
    WeaponPart { name: "Magazine", category: |_| ItemCategory::Magazines,     item: |w| &w.magazine, id: |s| &mut s.magazine },
    WeaponPart { name: "Stock",    category: |_| ItemCategory::Stocks,        item: |w| &w.stock,    id: |s| &mut s.stock },
    WeaponPart { name: "Scope",    category: |_| ItemCategory::Scopes,        item: |w| &w.scope,    id: |s| &mut s.scope },
    WeaponPart { name: "Grip",     category: |_| ItemCategory::Grips,         item: |w| &w.grip,     id: |s| &mut s.grip },
    WeaponPart { name: "Ammo",     category: |_| ItemCategory::Ammo,          item: |w| &w.ammo,     id: |s| &mut s.ammo },
    WeaponPart { name: "Tag",      category: |_| ItemCategory::Hangers,       item: |w| &w.tag,      id: |s| &mut s.tag },
    WeaponPart { name: "Camo",     category: |_| ItemCategory::CamosWeapons,  item: |w| &w.camo,     id: |s| &mut s.camo },
    WeaponPart { name: "Skin",     category: |_| ItemCategory::PrimarySkins,  item: |w| &w.skin,     id: |s| &mut s.skin },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareableWeapon {
    #[serde(rename = "A1")]
    pub ammo: i32,
    #[serde(rename = "B1")]
    pub barrel: i32,
    #[serde(rename = "C1")]
    pub camo: i32,
    #[serde(rename = "G1")]
    pub grip: i32,
    #[serde(rename = "M1")]
    pub muzzle: i32,
    #[serde(rename = "M2")]
    pub magazine: i32,
    #[serde(rename = "R1")]
    pub receiver: i32,
    #[serde(rename = "S1")]
    pub scope: i32,
    #[serde(rename = "S2")]
    pub stock: i32,
    #[serde(rename = "S3")]
    pub skin: i32,
    #[serde(rename = "T1")]
    pub tag: i32,
}

impl Default for ShareableWeapon {
    fn default() -> Self {
        Self {
            ammo: 0,
            barrel: 0,
            camo: 0,
            grip: 0,
            muzzle: 0,
            magazine: 0,
            receiver: 1,
            scope: 0,
            stock: 0,
            skin: ItemCategory::SKIN_SENTINEL_ID,
            tag: 0,
        }
    }
}

impl ShareableWeapon {
    /// Exports every part listed in [`WEAPON_PARTS`].
    pub fn from_weapon(weapon: &Weapon, catalog: &ItemCatalog) -> Self {
        let mut shareable = Self::default();
        for part in &WEAPON_PARTS {
            let category = (part.category)(weapon.is_primary);
            *(part.id)(&mut shareable) =
                catalog.reverse_lookup(category, (part.item)(weapon).as_deref());
        }
        shareable
    }

    pub fn to_weapon(&self, is_primary: bool, catalog: &ItemCatalog) -> Weapon {
        let mut weapon = Weapon::new(is_primary);
        self.read(&mut weapon, catalog);
        weapon
    }

    /// Resolves every id into `weapon`. The receiver namespace follows
    /// `weapon.is_primary`.
    pub fn read(&self, weapon: &mut Weapon, catalog: &ItemCatalog) {
        let slot = |category, id| Some(catalog.lookup(category, id));

        weapon.receiver = slot(weapon.receiver_category(), self.receiver);
        weapon.barrel = slot(ItemCategory::Barrels, self.barrel);
        weapon.muzzle = slot(ItemCategory::Muzzles, self.muzzle);
        weapon.magazine = slot(ItemCategory::Magazines, self.magazine);
        weapon.stock = slot(ItemCategory::Stocks, self.stock);
        weapon.scope = slot(ItemCategory::Scopes, self.scope);
        weapon.grip = slot(ItemCategory::Grips, self.grip);
        weapon.ammo = slot(ItemCategory::Ammo, self.ammo);
        weapon.tag = slot(ItemCategory::Hangers, self.tag);
        weapon.camo = slot(ItemCategory::CamosWeapons, self.camo);
        weapon.skin = slot(ItemCategory::PrimarySkins, self.skin);
    }

    pub fn write(&mut self, weapon: &Weapon, catalog: &ItemCatalog) {
        let id = |category, item: &ItemSlot| catalog.reverse_lookup(category, item.as_deref());

        self.receiver = id(weapon.receiver_category(), &weapon.receiver);
        self.barrel = id(ItemCategory::Barrels, &weapon.barrel);
        self.muzzle = id(ItemCategory::Muzzles, &weapon.muzzle);
        self.magazine = id(ItemCategory::Magazines, &weapon.magazine);
        self.stock = id(ItemCategory::Stocks, &weapon.stock);
        self.scope = id(ItemCategory::Scopes, &weapon.scope);
        self.grip = id(ItemCategory::Grips, &weapon.grip);
        self.ammo = id(ItemCategory::Ammo, &weapon.ammo);
        self.tag = id(ItemCategory::Hangers, &weapon.tag);
        self.camo = id(ItemCategory::CamosWeapons, &weapon.camo);
        self.skin = id(ItemCategory::PrimarySkins, &weapon.skin);
    }
}
