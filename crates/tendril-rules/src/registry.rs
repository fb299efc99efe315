use std::sync::Arc;

use tendril_core::config::SpreaderConfig;
use tendril_sim::CapabilityRegistry;
use tendril_world::GridWorld;

use crate::catalog::{BlockCatalog, CapabilityRole};
use crate::error::CatalogError;
use crate::seeding::SeedingCapability;
use crate::substrate::SubstrateCapability;
use crate::vein::VeinCapability;

/// Declare the reference capabilities for every substrate and vein kind in
/// the catalog and install the vein-seeding fallback.
///
/// The first vein and growth kinds listed are the ones substrate produces.
pub fn build_registry(
    catalog: &BlockCatalog,
    config: &SpreaderConfig,
) -> Result<CapabilityRegistry, CatalogError> {
    let substrate = catalog
        .first_with_role(CapabilityRole::Substrate)
        .ok_or(CatalogError::MissingRole("Substrate"))?
        .kind();
    let vein = catalog
        .first_with_role(CapabilityRole::Vein)
        .ok_or(CatalogError::MissingRole("Vein"))?
        .kind();
    let growth = catalog
        .first_with_role(CapabilityRole::Growth)
        .map(|b| b.kind());

    let mut registry = CapabilityRegistry::with_fallback(Arc::new(SeedingCapability::new(vein)));

    let substrate_cap = Arc::new(SubstrateCapability::new(vein, growth));
    for kind in catalog.kinds_with_role(CapabilityRole::Substrate) {
        registry.declare(kind, substrate_cap.clone());
    }
    for kind in catalog.kinds_with_role(CapabilityRole::Vein) {
        registry.declare(
            kind,
            Arc::new(VeinCapability::new(
                kind,
                substrate,
                config.replaceable_set.clone(),
            )),
        );
    }

    log::info!(
        "Capability registry: {} declared kinds (substrate {}, vein {}, growth {:?})",
        registry.len(),
        substrate.0,
        vein.0,
        growth.map(|g| g.0)
    );
    Ok(registry)
}

/// An empty world whose solid kinds follow the catalog.
pub fn world_for(catalog: &BlockCatalog) -> GridWorld {
    GridWorld::with_solid_kinds(catalog.solid_kinds())
}
