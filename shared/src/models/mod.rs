//! Domain models
//!
//! Immutable entity values. A `New*` type is a validated, not-yet-stored entity;
//! the store assigns the id and hands back the stored type. State changes
//! (`with_status`, `with_empty`, `assigned_to`, `released`, ...) return a new
//! value and leave the original untouched.
//!
//! All ids are `i64` (SQLite INTEGER PRIMARY KEY). Timestamps are Unix millis.

pub mod menu;
pub mod menu_group;
pub mod order;
pub mod order_table;
pub mod price;
pub mod product;
pub mod table_group;

// Re-exports
pub use menu::*;
pub use menu_group::*;
pub use order::*;
pub use order_table::*;
pub use price::*;
pub use product::*;
pub use table_group::*;
