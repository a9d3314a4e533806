use std::fmt;

/// A disjoint numeric-ID namespace in the item catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemCategory {
    Primary,
    Secondary,
    Barrels,
    Muzzles,
    Magazines,
    Stocks,
    Scopes,
    Grips,
    Ammo,
    Hangers,
    CamosWeapons,
    PrimarySkins,
    CamosBodies,
    Avatars,
    Helmets,
    UpperBodies,
    LowerBodies,
    Tactical,
    Badges,
    Emotes,
    Shop,
    Attachments,
}

impl ItemCategory {
    pub const DEFAULT_SENTINEL_ID: i32 = 0;
    pub const AVATAR_SENTINEL_ID: i32 = 99;
    pub const SKIN_SENTINEL_ID: i32 = -1;

    pub const COUNT: usize = 22;

    #[rustfmt::skip]
    pub const ALL: [ItemCategory; Self::COUNT] = [
        Self::Primary,     Self::Secondary,    Self::Barrels,     Self::Muzzles,
        Self::Magazines,   Self::Stocks,       Self::Scopes,      Self::Grips,
        Self::Ammo,        Self::Hangers,      Self::CamosWeapons, Self::PrimarySkins,
        Self::CamosBodies, Self::Avatars,      Self::Helmets,     Self::UpperBodies,
        Self::LowerBodies, Self::Tactical,     Self::Badges,      Self::Emotes,
        Self::Shop,        Self::Attachments,
    ];

    /// ID meaning "nothing equipped" in this category.
    pub fn sentinel_id(self) -> i32 {
        match self {
            Self::Avatars => Self::AVATAR_SENTINEL_ID,
            Self::PrimarySkins => Self::SKIN_SENTINEL_ID,
            _ => Self::DEFAULT_SENTINEL_ID,
        }
    }

    /// Key used for this category in catalog files.
    pub fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Barrels => "barrels",
            Self::Muzzles => "muzzles",
            Self::Magazines => "magazines",
            Self::Stocks => "stocks",
            Self::Scopes => "scopes",
            Self::Grips => "grips",
            Self::Ammo => "ammo",
            Self::Hangers => "hangers",
            Self::CamosWeapons => "camosWeapon",
            Self::PrimarySkins => "primarySkins",
            Self::CamosBodies => "camosBody",
            Self::Avatars => "avatars",
            Self::Helmets => "helmets",
            Self::UpperBodies => "upperBodies",
            Self::LowerBodies => "lowerBodies",
            Self::Tactical => "tactical",
            Self::Badges => "badges",
            Self::Emotes => "emotes",
            Self::Shop => "shop",
            Self::Attachments => "attachments",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|category| category.key() == key)
    }

    /// Receiver namespace for a primary or secondary weapon.
    pub fn receiver(is_primary: bool) -> Self {
        if is_primary {
            Self::Primary
        } else {
            Self::Secondary
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::ItemCategory;

    #[test]
    fn keys_round_trip_through_from_key() {
        for category in ItemCategory::ALL {
            assert_eq!(ItemCategory::from_key(category.key()), Some(category));
        }
        assert_eq!(ItemCategory::from_key("weapons"), None);
    }

    #[test]
    fn sentinels_follow_category_conventions() {
        assert_eq!(ItemCategory::Avatars.sentinel_id(), 99);
        assert_eq!(ItemCategory::PrimarySkins.sentinel_id(), -1);
        assert_eq!(ItemCategory::Barrels.sentinel_id(), 0);
        assert_eq!(ItemCategory::Emotes.sentinel_id(), 0);
    }
}
