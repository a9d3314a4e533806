use log::debug;

use crate::shareable::ShareableProfile;

/// Append-only list of the profiles known to the editor.
#[derive(Debug, Default)]
pub struct ProfileRegistry {
    profiles: Vec<ShareableProfile>,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, profile: ShareableProfile) -> &mut ShareableProfile {
        debug!(
            "registering profile \"{}\" at index {}",
            profile.name(),
            self.profiles.len()
        );
        self.profiles.push(profile);
        let last = self.profiles.len() - 1;
        &mut self.profiles[last]
    }

    pub fn get(&self, index: usize) -> Option<&ShareableProfile> {
        self.profiles.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ShareableProfile> {
        self.profiles.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShareableProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
