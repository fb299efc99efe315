pub mod catalog;
mod chance;
pub mod error;
pub mod loader;
pub mod registry;
pub mod seeding;
pub mod substrate;
pub mod validator;
pub mod vein;

pub use catalog::{BlockCatalog, BlockDef, CapabilityRole};
pub use error::CatalogError;
pub use loader::{default_catalog, load_all_catalogs, load_catalog_from_str};
pub use registry::{build_registry, world_for};
pub use seeding::SeedingCapability;
pub use substrate::SubstrateCapability;
pub use validator::{validate_catalog, validate_replaceable_set};
pub use vein::{regrow_vein, spread_along_surface, VeinCapability};
