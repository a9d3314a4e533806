use std::path::PathBuf;
use std::sync::Arc;

use blredit_core::core_api::{ItemCatalog, ItemCategory, ItemSlot};
use blredit_core::model::{Loadout, Profile, Weapon};
use blredit_core::share_code::from_json;
use blredit_core::shareable::{
    LoadoutSet, Shareable3LoadoutSet, ShareableLoadout, ShareableWeapon, WEAPON_PARTS,
};
use pretty_assertions::assert_eq;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn load_catalog() -> ItemCatalog {
    ItemCatalog::load_from_path(&workspace_root().join("tests/fixtures/item_catalog.json"))
        .expect("fixture catalog should load")
}

fn load_fixture_set() -> Shareable3LoadoutSet {
    let path = workspace_root().join("tests/fixtures/loadout_set.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {:?}: {}", path, e));
    from_json(&contents).unwrap_or_else(|e| panic!("failed to parse {:?}: {}", path, e))
}

fn item(catalog: &ItemCatalog, category: ItemCategory, id: i32) -> ItemSlot {
    let found = catalog
        .get(category, id)
        .unwrap_or_else(|| panic!("fixture has no {category} item {id}"));
    Some(Arc::clone(found))
}

fn sample_loadout(catalog: &ItemCatalog) -> Loadout {
    let mut primary = Weapon::new(true);
    primary.receiver = item(catalog, ItemCategory::Primary, 3);
    primary.barrel = item(catalog, ItemCategory::Barrels, 2);
    primary.muzzle = item(catalog, ItemCategory::Muzzles, 3);
    primary.magazine = item(catalog, ItemCategory::Magazines, 1);
    primary.stock = item(catalog, ItemCategory::Stocks, 2);
    primary.scope = item(catalog, ItemCategory::Scopes, 3);
    primary.grip = item(catalog, ItemCategory::Grips, 1);
    primary.ammo = item(catalog, ItemCategory::Ammo, 2);
    primary.tag = item(catalog, ItemCategory::Hangers, 1);
    primary.camo = item(catalog, ItemCategory::CamosWeapons, 2);
    primary.skin = item(catalog, ItemCategory::PrimarySkins, 1);

    let mut secondary = Weapon::new(false);
    secondary.receiver = item(catalog, ItemCategory::Secondary, 4);
    secondary.barrel = item(catalog, ItemCategory::Barrels, 1);
    secondary.muzzle = item(catalog, ItemCategory::Muzzles, 0);
    secondary.magazine = item(catalog, ItemCategory::Magazines, 0);
    secondary.stock = item(catalog, ItemCategory::Stocks, 0);
    secondary.scope = item(catalog, ItemCategory::Scopes, 1);
    secondary.grip = item(catalog, ItemCategory::Grips, 0);
    secondary.ammo = item(catalog, ItemCategory::Ammo, 1);
    secondary.tag = item(catalog, ItemCategory::Hangers, 0);
    secondary.camo = item(catalog, ItemCategory::CamosWeapons, 1);
    secondary.skin = item(catalog, ItemCategory::PrimarySkins, 0);

    let emote = |id| item(catalog, ItemCategory::Emotes, id);
    let shop = |id| item(catalog, ItemCategory::Shop, id);
    let gear = |id| item(catalog, ItemCategory::Attachments, id);

    Loadout {
        primary,
        secondary,
        avatar: item(catalog, ItemCategory::Avatars, 2),
        body_camo: item(catalog, ItemCategory::CamosBodies, 1),
        upper_body: item(catalog, ItemCategory::UpperBodies, 1),
        lower_body: item(catalog, ItemCategory::LowerBodies, 1),
        helmet: item(catalog, ItemCategory::Helmets, 2),
        tactical: item(catalog, ItemCategory::Tactical, 2),
        trophy: item(catalog, ItemCategory::Badges, 1),
        gear: [gear(1), gear(2), gear(3), gear(4)],
        taunts: [
            emote(1),
            emote(2),
            emote(3),
            emote(4),
            emote(0),
            emote(4),
            emote(3),
            emote(2),
        ],
        depot: [shop(1), shop(2), shop(3), shop(4), shop(5)],
        is_female: true,
        is_bot: false,
    }
}

#[test]
fn constructor_export_round_trips_catalog_descriptors() {
    let catalog = load_catalog();
    let loadout = sample_loadout(&catalog);

    let shareable = ShareableLoadout::from_loadout(&loadout, &catalog);
    assert_eq!(shareable.to_loadout(&catalog), loadout);
}

#[test]
fn write_export_round_trips_everything_but_gear_order() {
    let catalog = load_catalog();
    let mut loadout = sample_loadout(&catalog);
    loadout.is_bot = true;

    let mut shareable = ShareableLoadout::default();
    shareable.write(&loadout, &catalog);
    let restored = shareable.to_loadout(&catalog);

    let mut expected = loadout.clone();
    expected.gear = [
        loadout.gear[2].clone(),
        loadout.gear[3].clone(),
        loadout.gear[0].clone(),
        loadout.gear[1].clone(),
    ];
    assert_eq!(restored, expected);
}

#[test]
fn gear_slot_assignment_differs_between_export_paths() {
    let catalog = load_catalog();
    let loadout = sample_loadout(&catalog);

    let constructed = ShareableLoadout::from_loadout(&loadout, &catalog);
    assert_eq!(
        [
            constructed.gear_r1,
            constructed.gear_r2,
            constructed.gear_l1,
            constructed.gear_l2
        ],
        [1, 2, 3, 4]
    );

    let mut written = ShareableLoadout::default();
    written.write(&loadout, &catalog);
    assert_eq!(
        [written.gear_r1, written.gear_r2, written.gear_l1, written.gear_l2],
        [3, 4, 1, 2]
    );

    let imported = constructed.to_loadout(&catalog);
    let ids: Vec<i32> = imported
        .gear
        .iter()
        .map(|g| g.as_ref().map_or(-100, |d| d.id))
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn bot_flag_is_only_exported_by_write() {
    let catalog = load_catalog();
    let mut loadout = sample_loadout(&catalog);
    loadout.is_bot = true;

    assert!(!ShareableLoadout::from_loadout(&loadout, &catalog).bot);

    let mut written = ShareableLoadout::default();
    written.write(&loadout, &catalog);
    assert!(written.bot);
}

#[test]
fn receiver_namespace_follows_weapon_role() {
    let catalog = load_catalog();
    let shareable = ShareableWeapon {
        receiver: 4,
        ..ShareableWeapon::default()
    };

    let primary = shareable.to_weapon(true, &catalog);
    let secondary = shareable.to_weapon(false, &catalog);
    assert_eq!(primary.receiver.as_ref().map(|r| r.name.as_str()), Some("Light Machine Gun"));
    assert_eq!(secondary.receiver.as_ref().map(|r| r.name.as_str()), Some("Revolver"));
    assert_eq!(ShareableWeapon::from_weapon(&primary, &catalog).receiver, 4);
    assert_eq!(ShareableWeapon::from_weapon(&secondary, &catalog).receiver, 4);

    let mut misplaced = Weapon::new(false);
    misplaced.receiver = item(&catalog, ItemCategory::Primary, 3);
    assert_eq!(ShareableWeapon::from_weapon(&misplaced, &catalog).receiver, 0);
}

#[test]
fn weapon_part_table_matches_field_by_field_export() {
    let catalog = load_catalog();
    let loadout = sample_loadout(&catalog);

    let names: Vec<&str> = WEAPON_PARTS.iter().map(|p| p.name).collect();
    assert_eq!(
        names,
        vec![
            "Reciever", "Barrel", "Muzzle", "Magazine", "Stock", "Scope", "Grip", "Ammo", "Tag",
            "Camo", "Skin"
        ]
    );

    for weapon in [&loadout.primary, &loadout.secondary] {
        let mut written = ShareableWeapon::default();
        written.write(weapon, &catalog);
        assert_eq!(ShareableWeapon::from_weapon(weapon, &catalog), written);
    }
}

#[test]
fn unequipped_slots_export_as_category_sentinels() {
    let catalog = load_catalog();
    let loadout = Loadout::default();

    let shareable = ShareableLoadout::from_loadout(&loadout, &catalog);
    assert_eq!(shareable.avatar, 99);
    assert_eq!(shareable.primary.skin, -1);
    assert_eq!(shareable.secondary.skin, -1);
    assert_eq!(shareable.primary.receiver, 0);
    assert_eq!(shareable.depot, [0; 5]);
    assert_eq!(shareable.taunts, [0; 8]);
}

#[test]
fn unknown_ids_degrade_to_empty_entries() {
    let catalog = load_catalog();
    let set = load_fixture_set();

    let loadout = set.loadout3.to_loadout(&catalog);
    let name = |slot: &ItemSlot| slot.as_ref().map(|d| d.name.clone());

    assert_eq!(name(&loadout.primary.barrel).as_deref(), Some("No Barrel"));
    assert_eq!(loadout.primary.skin.as_ref().map(|d| d.id), Some(-1));
    assert_eq!(loadout.avatar.as_ref().map(|d| d.id), Some(99));
    assert_eq!(name(&loadout.gear[0]).as_deref(), Some("No Gear"));

    let depot: Vec<String> = loadout
        .depot
        .iter()
        .map(|slot| name(slot).unwrap_or_default())
        .collect();
    assert_eq!(
        depot,
        vec!["No Depot Item", "Ammo Pack", "No Depot Item", "Ammo Pack", "No Depot Item"]
    );
}

#[test]
fn array_slots_keep_their_positions() {
    let catalog = load_catalog();
    let set = load_fixture_set();

    let loadout = set.loadout1.to_loadout(&catalog);
    for (index, slot) in loadout.depot.iter().enumerate() {
        assert_eq!(slot.as_ref().map(|d| d.id), Some(set.loadout1.depot[index]));
    }
    assert_eq!(loadout.depot[3].as_ref().map(|d| d.name.as_str()), Some("Turret"));
    for (index, slot) in loadout.taunts.iter().enumerate() {
        assert_eq!(slot.as_ref().map(|d| d.id), Some(set.loadout1.taunts[index]));
    }

    let exported = ShareableLoadout::from_loadout(&loadout, &catalog);
    assert_eq!(exported.depot, set.loadout1.depot);
    assert_eq!(exported.taunts, set.loadout1.taunts);
}

#[test]
fn read_and_to_profile_agree() {
    let catalog = load_catalog();
    let set = load_fixture_set();

    let built = set.to_profile(&catalog);

    let mut overwritten = Profile {
        player_name: Profile::DEFAULT_PLAYER_NAME.to_string(),
        loadout1: sample_loadout(&catalog),
        loadout2: sample_loadout(&catalog),
        loadout3: sample_loadout(&catalog),
    };
    set.read(&mut overwritten, &catalog);

    assert_eq!(overwritten, built);
}

#[test]
fn shareable_fields_without_internal_counterpart_survive_write() {
    let catalog = load_catalog();
    let mut shareable = ShareableLoadout {
        butt_pack: 3,
        hanger: 2,
        patch_icon: 7,
        patch_shape_color: 5,
        ..ShareableLoadout::default()
    };

    shareable.write(&sample_loadout(&catalog), &catalog);
    assert_eq!(shareable.butt_pack, 3);
    assert_eq!(shareable.hanger, 2);
    assert_eq!(shareable.patch_icon, 7);
    assert_eq!(shareable.patch_shape_color, 5);
}

#[test]
fn internal_clone_does_not_alias_arrays_or_weapons() {
    let catalog = load_catalog();
    let original = sample_loadout(&catalog);

    let mut copy = original.clone();
    copy.depot[0] = None;
    copy.taunts[7] = item(&catalog, ItemCategory::Emotes, 1);
    copy.primary.barrel = item(&catalog, ItemCategory::Barrels, 3);

    assert_eq!(original.depot[0].as_ref().map(|d| d.id), Some(1));
    assert_eq!(original.taunts[7].as_ref().map(|d| d.id), Some(2));
    assert_eq!(original.primary.barrel.as_ref().map(|d| d.id), Some(2));
}

#[test]
fn shareable_clone_does_not_alias_arrays_or_weapons() {
    let original = ShareableLoadout::default();

    let mut copy = original.clone();
    copy.taunts[2] = 4;
    copy.depot[4] = 5;
    copy.primary.barrel = 3;

    assert_eq!(original.taunts[2], 0);
    assert_eq!(original.depot[4], 0);
    assert_eq!(original.primary.barrel, 0);
}
