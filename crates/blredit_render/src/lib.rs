use blredit_core::core_api::{ItemDescriptor, ItemSlot};
use blredit_core::model::{Loadout, Profile, Weapon};
use serde_json::{Map as JsonMap, Value as JsonValue};

const SHEET_WIDTH: usize = 76;
const TWO_COL_WIDTH_LEFT: usize = 38;
const TWO_COL_WIDTH_RIGHT: usize = 36;
const LABEL_WIDTH: usize = 12;
const EMPTY_SLOT: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    ResolvedV1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    LoadoutSheet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRenderOptions {
    /// Append item ids to every resolved name.
    pub verbose: bool,
}

pub fn render_json_profile(profile: &Profile, style: JsonStyle) -> JsonValue {
    match style {
        JsonStyle::ResolvedV1 => {
            let mut out = JsonMap::new();
            out.insert(
                "player_name".to_string(),
                JsonValue::String(profile.player_name.clone()),
            );
            out.insert(
                "loadouts".to_string(),
                JsonValue::Array(profile.loadouts().into_iter().map(loadout_json).collect()),
            );
            JsonValue::Object(out)
        }
    }
}

pub fn render_json_loadout(loadout: &Loadout, style: JsonStyle) -> JsonValue {
    match style {
        JsonStyle::ResolvedV1 => loadout_json(loadout),
    }
}

pub fn render_text(profile: &Profile, style: TextStyle) -> String {
    render_text_with_options(profile, style, TextRenderOptions::default())
}

pub fn render_text_with_options(
    profile: &Profile,
    style: TextStyle,
    options: TextRenderOptions,
) -> String {
    match style {
        TextStyle::LoadoutSheet => render_profile_sheet(profile, options),
    }
}

pub fn render_profile_sheet(profile: &Profile, options: TextRenderOptions) -> String {
    let mut out = String::new();
    line(&mut out, "");
    line(&mut out, &centered_no_trailing("BLREDIT PROFILE", SHEET_WIDTH));
    line(
        &mut out,
        &centered_no_trailing(&profile.player_name, SHEET_WIDTH),
    );

    for (index, loadout) in profile.loadouts().into_iter().enumerate() {
        line(&mut out, "");
        write_loadout_sheet(&mut out, loadout, index, options);
    }
    out
}

/// Sheet for a single loadout; `index` is zero-based and only used for the heading.
pub fn render_loadout_sheet(loadout: &Loadout, index: usize, options: TextRenderOptions) -> String {
    let mut out = String::new();
    line(&mut out, "");
    write_loadout_sheet(&mut out, loadout, index, options);
    out
}

fn loadout_json(loadout: &Loadout) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert("primary".to_string(), weapon_json(&loadout.primary));
    out.insert("secondary".to_string(), weapon_json(&loadout.secondary));
    for (key, slot) in cosmetic_slots(loadout) {
        out.insert(key.to_string(), slot_json(slot));
    }
    out.insert("gear".to_string(), slots_json(&loadout.gear));
    out.insert("taunts".to_string(), slots_json(&loadout.taunts));
    out.insert("depot".to_string(), slots_json(&loadout.depot));
    out.insert("is_female".to_string(), JsonValue::Bool(loadout.is_female));
    out.insert("is_bot".to_string(), JsonValue::Bool(loadout.is_bot));
    JsonValue::Object(out)
}

fn weapon_json(weapon: &Weapon) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("is_primary".to_string(), JsonValue::Bool(weapon.is_primary));
    for (key, _, slot) in weapon_slots(weapon) {
        m.insert(key.to_string(), slot_json(slot));
    }
    JsonValue::Object(m)
}

fn slots_json(slots: &[ItemSlot]) -> JsonValue {
    JsonValue::Array(slots.iter().map(slot_json).collect())
}

fn slot_json(slot: &ItemSlot) -> JsonValue {
    match slot.as_deref() {
        Some(item) => item_json(item),
        None => JsonValue::Null,
    }
}

fn item_json(item: &ItemDescriptor) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("id".to_string(), JsonValue::from(item.id));
    m.insert("name".to_string(), JsonValue::String(item.name.clone()));
    JsonValue::Object(m)
}

fn weapon_slots(weapon: &Weapon) -> [(&'static str, &'static str, &ItemSlot); 11] {
    [
        ("receiver", "Receiver", &weapon.receiver),
        ("barrel", "Barrel", &weapon.barrel),
        ("muzzle", "Muzzle", &weapon.muzzle),
        ("magazine", "Magazine", &weapon.magazine),
        ("stock", "Stock", &weapon.stock),
        ("scope", "Scope", &weapon.scope),
        ("grip", "Grip", &weapon.grip),
        ("ammo", "Ammo", &weapon.ammo),
        ("tag", "Tag", &weapon.tag),
        ("camo", "Camo", &weapon.camo),
        ("skin", "Skin", &weapon.skin),
    ]
}

fn cosmetic_slots(loadout: &Loadout) -> [(&'static str, &ItemSlot); 7] {
    [
        ("avatar", &loadout.avatar),
        ("body_camo", &loadout.body_camo),
        ("upper_body", &loadout.upper_body),
        ("lower_body", &loadout.lower_body),
        ("helmet", &loadout.helmet),
        ("tactical", &loadout.tactical),
        ("trophy", &loadout.trophy),
    ]
}

fn write_loadout_sheet(
    out: &mut String,
    loadout: &Loadout,
    index: usize,
    options: TextRenderOptions,
) {
    line(
        out,
        &centered_no_trailing(&format!("LOADOUT {}", index + 1), SHEET_WIDTH),
    );
    line(out, "");

    two_columns(out, "  PRIMARY", "SECONDARY");
    let primary = weapon_slots(&loadout.primary);
    let secondary = weapon_slots(&loadout.secondary);
    for ((_, label, left), (_, _, right)) in primary.iter().zip(secondary.iter()) {
        two_columns(
            out,
            &labeled(label, &slot_label(left, options)),
            &labeled(label, &slot_label(right, options)),
        );
    }
    line(out, "");

    line(out, "  COSMETICS");
    let cosmetics = [
        ("Avatar", &loadout.avatar),
        ("Body Camo", &loadout.body_camo),
        ("Upper Body", &loadout.upper_body),
        ("Lower Body", &loadout.lower_body),
        ("Helmet", &loadout.helmet),
        ("Tactical", &loadout.tactical),
        ("Badge", &loadout.trophy),
    ];
    for pair in cosmetics.chunks(2) {
        let left = labeled(pair[0].0, &slot_label(pair[0].1, options));
        let right = pair
            .get(1)
            .map(|(label, slot)| labeled(label, &slot_label(slot, options)))
            .unwrap_or_default();
        two_columns(out, &left, &right);
    }
    two_columns(
        out,
        &labeled("Female", yes_no(loadout.is_female)),
        &labeled("Bot", yes_no(loadout.is_bot)),
    );
    line(out, "");

    write_slot_list(out, "GEAR", "Gear", &loadout.gear, options);
    write_slot_list(out, "DEPOT", "Depot", &loadout.depot, options);
    write_slot_list(out, "TAUNTS", "Taunt", &loadout.taunts, options);
}

fn write_slot_list(
    out: &mut String,
    heading: &str,
    label: &str,
    slots: &[ItemSlot],
    options: TextRenderOptions,
) {
    line(out, &format!("  {heading}"));
    let rows: Vec<String> = slots
        .iter()
        .enumerate()
        .map(|(i, slot)| labeled(&format!("{label}{}", i + 1), &slot_label(slot, options)))
        .collect();
    for pair in rows.chunks(2) {
        let right = pair.get(1).map(String::as_str).unwrap_or("");
        two_columns(out, &pair[0], right);
    }
    line(out, "");
}

fn slot_label(slot: &ItemSlot, options: TextRenderOptions) -> String {
    match slot.as_deref() {
        Some(item) if options.verbose => format!("{} [{}]", item.name, item.id),
        Some(item) => item.name.clone(),
        None => EMPTY_SLOT.to_string(),
    }
}

fn labeled(label: &str, value: &str) -> String {
    format!("{:>w$}: {}", label, value, w = LABEL_WIDTH)
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn two_columns(out: &mut String, left: &str, right: &str) {
    let text = format!(
        "{:<l$}{:<r$}",
        fit_column(left, TWO_COL_WIDTH_LEFT),
        fit_column(right, TWO_COL_WIDTH_RIGHT),
        l = TWO_COL_WIDTH_LEFT,
        r = TWO_COL_WIDTH_RIGHT,
    );
    line(out, text.trim_end());
}

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn fit_column(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 3 {
        return value.chars().take(width).collect();
    }

    let mut out = String::with_capacity(width);
    for ch in value.chars().take(width - 3) {
        out.push(ch);
    }
    out.push_str("...");
    out
}

fn centered_no_trailing(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }

    let left_padding = (width - len) / 2;
    format!("{}{}", " ".repeat(left_padding), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_column_truncates_with_ellipsis() {
        assert_eq!(fit_column("Frontier Standard Barrel", 10), "Frontie...");
        assert_eq!(fit_column("Grip", 10), "Grip");
        assert_eq!(fit_column("Grip", 2), "Gr");
    }

    #[test]
    fn centered_text_has_no_trailing_padding() {
        assert_eq!(centered_no_trailing("AB", 6), "  AB");
        assert_eq!(centered_no_trailing("ABCDEFG", 6), "ABCDEFG");
    }
}
