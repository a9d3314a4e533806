mod category;
mod error;
mod item_catalog;
mod types;

pub use category::ItemCategory;
pub use error::{CoreError, CoreErrorCode};
pub use item_catalog::ItemCatalog;
pub use types::{ItemDescriptor, ItemSlot};
