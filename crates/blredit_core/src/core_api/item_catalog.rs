use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};
use serde::Deserialize;

use super::category::ItemCategory;
use super::error::{CoreError, CoreErrorCode};
use super::types::ItemDescriptor;

#[derive(Debug, Clone, Deserialize)]
struct CatalogRecord {
    #[serde(default)]
    id: Option<i32>,
    name: String,
}

/// Immutable `(category, id) -> descriptor` table.
///
/// Lookups never fail: an id the catalog does not know resolves to the
/// category's empty entry, which is the catalog's own item at the sentinel id
/// when there is one and a synthesized `"None"` descriptor otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCatalog {
    source: Option<PathBuf>,
    entries: BTreeMap<ItemCategory, BTreeMap<i32, Arc<ItemDescriptor>>>,
    empties: [Arc<ItemDescriptor>; ItemCategory::COUNT],
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self {
            source: None,
            entries: BTreeMap::new(),
            empties: ItemCategory::ALL.map(|category| Arc::new(ItemDescriptor::empty(category))),
        }
    }

    pub fn insert(
        &mut self,
        category: ItemCategory,
        id: i32,
        name: impl Into<String>,
    ) -> Result<Arc<ItemDescriptor>, CoreError> {
        let items = self.entries.entry(category).or_default();
        if items.contains_key(&id) {
            return Err(CoreError::new(
                CoreErrorCode::Parse,
                format!("duplicate {category} item id {id}"),
            ));
        }
        let item = Arc::new(ItemDescriptor::new(category, id, name));
        items.insert(id, Arc::clone(&item));
        Ok(item)
    }

    /// Builds a catalog from a JSON object mapping category keys to item lists.
    /// An entry without an explicit `id` takes its position in the list.
    pub fn from_json_str(contents: &str) -> Result<Self, CoreError> {
        let document: BTreeMap<String, Vec<CatalogRecord>> = serde_json::from_str(contents)
            .map_err(|e| {
                CoreError::new(CoreErrorCode::Parse, format!("invalid item catalog: {e}"))
            })?;

        let mut catalog = Self::new();
        for (key, records) in document {
            let category = ItemCategory::from_key(&key).ok_or_else(|| {
                CoreError::new(
                    CoreErrorCode::Parse,
                    format!("unknown item category \"{key}\""),
                )
            })?;
            for (index, record) in records.into_iter().enumerate() {
                let id = match record.id {
                    Some(id) => id,
                    None => i32::try_from(index).map_err(|_| {
                        CoreError::new(
                            CoreErrorCode::Parse,
                            format!("too many {category} items to assign positional ids"),
                        )
                    })?,
                };
                catalog.insert(category, id, record.name)?;
            }
        }
        Ok(catalog)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, CoreError> {
        let bytes = fs::read(path).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Io,
                format!("failed to read {}: {e}", path.display()),
            )
        })?;
        let contents = std::str::from_utf8(&bytes).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Parse,
                format!("{}: item catalog is not valid UTF-8: {e}", path.display()),
            )
        })?;
        let mut catalog = Self::from_json_str(contents).map_err(|e| {
            CoreError::new(e.code, format!("{}: {}", path.display(), e.message))
        })?;
        catalog.source = Some(path.to_path_buf());
        info!(
            "loaded {} catalog items from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn get(&self, category: ItemCategory, id: i32) -> Option<&Arc<ItemDescriptor>> {
        self.entries.get(&category).and_then(|items| items.get(&id))
    }

    pub fn lookup(&self, category: ItemCategory, id: i32) -> Arc<ItemDescriptor> {
        if let Some(item) = self.get(category, id) {
            return Arc::clone(item);
        }
        if id != category.sentinel_id() {
            debug!("no {category} item with id {id}, using empty entry");
        }
        self.empty(category)
    }

    pub fn empty(&self, category: ItemCategory) -> Arc<ItemDescriptor> {
        self.get(category, category.sentinel_id())
            .map_or_else(|| Arc::clone(&self.empties[category as usize]), Arc::clone)
    }

    /// Maps a descriptor back to its id within `category`. Unequipped slots,
    /// descriptors from another category and descriptors this catalog does not
    /// hold all map to the category sentinel.
    pub fn reverse_lookup(&self, category: ItemCategory, item: Option<&ItemDescriptor>) -> i32 {
        let sentinel = category.sentinel_id();
        let Some(item) = item else {
            return sentinel;
        };
        if item.category != category {
            debug!(
                "{} item \"{}\" placed in a {category} slot, using sentinel {sentinel}",
                item.category, item.name
            );
            return sentinel;
        }
        match self.get(category, item.id) {
            Some(known) if known.as_ref() == item => item.id,
            _ => {
                if item.id != sentinel {
                    debug!(
                        "{category} item \"{}\" (id {}) not in catalog, using sentinel {sentinel}",
                        item.name, item.id
                    );
                }
                sentinel
            }
        }
    }

    pub fn items(&self, category: ItemCategory) -> impl Iterator<Item = &Arc<ItemDescriptor>> {
        self.entries
            .get(&category)
            .into_iter()
            .flat_map(|items| items.values())
    }

    pub fn category_len(&self, category: ItemCategory) -> usize {
        self.entries.get(&category).map_or(0, BTreeMap::len)
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
