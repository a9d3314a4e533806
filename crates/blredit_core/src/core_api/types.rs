use std::sync::Arc;

use super::category::ItemCategory;

pub const EMPTY_ITEM_NAME: &str = "None";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemDescriptor {
    pub category: ItemCategory,
    pub id: i32,
    pub name: String,
}

impl ItemDescriptor {
    pub fn new(category: ItemCategory, id: i32, name: impl Into<String>) -> Self {
        Self {
            category,
            id,
            name: name.into(),
        }
    }

    pub fn empty(category: ItemCategory) -> Self {
        Self::new(category, category.sentinel_id(), EMPTY_ITEM_NAME)
    }

    pub fn is_empty(&self) -> bool {
        self.id == self.category.sentinel_id()
    }
}

/// An equipment slot in the internal model; `None` is unequipped.
pub type ItemSlot = Option<Arc<ItemDescriptor>>;
