pub mod core_api;
pub mod model;
pub mod notify;
pub mod registry;
pub mod share_code;
pub mod shareable;
