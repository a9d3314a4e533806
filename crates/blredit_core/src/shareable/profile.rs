use serde::{Deserialize, Serialize};

use crate::core_api::ItemCatalog;
use crate::model::Profile;
use crate::notify::{ObserverId, PropertyObservers};
use crate::registry::ProfileRegistry;

use super::loadout::ShareableLoadout;

pub const LOADOUT_COUNT: usize = 3;

/// Three shareable loadouts mapped onto a [`Profile`].
pub trait LoadoutSet {
    fn get_loadout(&self, index: i32) -> &ShareableLoadout;

    fn get_loadout_mut(&mut self, index: i32) -> &mut ShareableLoadout;

    /// Resolves the three loadouts into `profile`, leaving its player name alone.
    fn read(&self, profile: &mut Profile, catalog: &ItemCatalog);

    fn write(&mut self, profile: &Profile, catalog: &ItemCatalog);

    fn to_profile(&self, catalog: &ItemCatalog) -> Profile {
        let mut profile = Profile::default();
        self.read(&mut profile, catalog);
        profile
    }
}

/// A named, observable profile as kept in the profile list.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareableProfile {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Loadouts")]
    pub loadouts: [ShareableLoadout; LOADOUT_COUNT],
    #[serde(skip)]
    observers: PropertyObservers,
}

impl ShareableProfile {
    pub const DEFAULT_NAME: &'static str = "New Profile";
    pub const NAME_PROPERTY: &'static str = "Name";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Notifies `"Name"` observers on every call, changed value or not.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.observers.notify(Self::NAME_PROPERTY);
    }

    pub fn refresh_info(&mut self) {
        self.observers.notify(Self::NAME_PROPERTY);
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&str) + 'static) -> ObserverId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Clones this profile and appends the copy to `registry`.
    pub fn duplicate<'r>(&self, registry: &'r mut ProfileRegistry) -> &'r mut ShareableProfile {
        registry.register(self.clone())
    }

    fn loadout_index(index: i32) -> usize {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < LOADOUT_COUNT)
            .unwrap_or(0)
    }
}

impl Default for ShareableProfile {
    fn default() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            loadouts: Default::default(),
            observers: PropertyObservers::new(),
        }
    }
}

/// Copies name and loadouts. Observers stay with the original.
impl Clone for ShareableProfile {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            loadouts: self.loadouts.clone(),
            observers: PropertyObservers::new(),
        }
    }
}

impl PartialEq for ShareableProfile {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.loadouts == other.loadouts
    }
}

impl LoadoutSet for ShareableProfile {
    /// Indices outside `0..3` fall back to the first loadout.
    fn get_loadout(&self, index: i32) -> &ShareableLoadout {
        &self.loadouts[Self::loadout_index(index)]
    }

    fn get_loadout_mut(&mut self, index: i32) -> &mut ShareableLoadout {
        &mut self.loadouts[Self::loadout_index(index)]
    }

    fn read(&self, profile: &mut Profile, catalog: &ItemCatalog) {
        self.loadouts[0].read(&mut profile.loadout1, catalog);
        self.loadouts[1].read(&mut profile.loadout2, catalog);
        self.loadouts[2].read(&mut profile.loadout3, catalog);
    }

    fn write(&mut self, profile: &Profile, catalog: &ItemCatalog) {
        self.loadouts[0].write(&profile.loadout1, catalog);
        self.loadouts[1].write(&profile.loadout2, catalog);
        self.loadouts[2].write(&profile.loadout3, catalog);
    }
}

/// Bare three-loadout form used for share codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shareable3LoadoutSet {
    #[serde(rename = "L1")]
    pub loadout1: ShareableLoadout,
    #[serde(rename = "L2")]
    pub loadout2: ShareableLoadout,
    #[serde(rename = "L3")]
    pub loadout3: ShareableLoadout,
}

impl Shareable3LoadoutSet {
    /// `1` and `2` select the second and third loadout; anything else the first.
    pub fn loadout_index(index: i32) -> usize {
        match index {
            1 => 1,
            2 => 2,
            _ => 0,
        }
    }

    pub fn from_profile(profile: &Profile, catalog: &ItemCatalog) -> Self {
        Self {
            loadout1: ShareableLoadout::from_loadout(&profile.loadout1, catalog),
            loadout2: ShareableLoadout::from_loadout(&profile.loadout2, catalog),
            loadout3: ShareableLoadout::from_loadout(&profile.loadout3, catalog),
        }
    }
}

impl LoadoutSet for Shareable3LoadoutSet {
    /// Indexed through [`Shareable3LoadoutSet::loadout_index`].
    fn get_loadout(&self, index: i32) -> &ShareableLoadout {
        match Self::loadout_index(index) {
            1 => &self.loadout2,
            2 => &self.loadout3,
            _ => &self.loadout1,
        }
    }

    fn get_loadout_mut(&mut self, index: i32) -> &mut ShareableLoadout {
        match Self::loadout_index(index) {
            1 => &mut self.loadout2,
            2 => &mut self.loadout3,
            _ => &mut self.loadout1,
        }
    }

    fn read(&self, profile: &mut Profile, catalog: &ItemCatalog) {
        self.loadout1.read(&mut profile.loadout1, catalog);
        self.loadout2.read(&mut profile.loadout2, catalog);
        self.loadout3.read(&mut profile.loadout3, catalog);
    }

    fn write(&mut self, profile: &Profile, catalog: &ItemCatalog) {
        self.loadout1.write(&profile.loadout1, catalog);
        self.loadout2.write(&profile.loadout2, catalog);
        self.loadout3.write(&profile.loadout3, catalog);
    }
}
