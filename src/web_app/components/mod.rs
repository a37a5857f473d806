// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Modal, Loading, etc.)
// - filters.rs: Listing filter controls (range, unit type, view)
// - units.rs: Unit cards, result grid, pagination
// - chat.rs: AI assistant panel
// - admin.rs: Back-office widgets

pub mod admin;
pub mod chat;
pub mod common;
pub mod filters;
pub mod units;

pub use admin::*;
pub use chat::*;
pub use common::*;
pub use filters::*;
pub use units::*;
