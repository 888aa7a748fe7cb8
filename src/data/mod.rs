//! Bundled lookup tables, read-only after process start. Every table is
//! loaded into an explicitly constructed context object so tests can
//! substitute their own data.

pub mod carriers;
pub mod localities;
pub mod timezones;
pub mod type_patterns;
pub mod world;

pub use carriers::CarrierTable;
pub use localities::LocalityTable;
pub use timezones::TimezoneTable;
pub use type_patterns::{TypePattern, TYPE_PATTERNS};
pub use world::{CountryRecord, WorldTable, WORLD};
