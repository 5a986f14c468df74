//! Inventory data access for the concierge bot.
//!
//! Models the externally supplied availability table (one row per date, one
//! column per room type), fetches it over HTTP, and resolves per-day
//! availability values for a parsed query.

pub mod client;
pub mod resolver;
pub mod table;

pub use client::{HttpInventoryClient, InventoryError, InventorySource};
pub use resolver::{resolve, AvailabilityResult, DayAvailability, MISSING_VALUE};
pub use table::{find_date_key, parse_cell_date, InventoryRow, InventoryTable};
