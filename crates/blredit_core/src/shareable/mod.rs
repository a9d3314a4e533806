//! Compact id-based forms of the loadout model and the mapping to and from it.
//!
//! Serialized field tags are short and must stay stable: previously shared
//! loadouts are decoded with them.

mod loadout;
mod profile;
mod weapon;

pub use loadout::ShareableLoadout;
pub use profile::{LOADOUT_COUNT, LoadoutSet, Shareable3LoadoutSet, ShareableProfile};
pub use weapon::{ShareableWeapon, WEAPON_PARTS, WeaponPart};
