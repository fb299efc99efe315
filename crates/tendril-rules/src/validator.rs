use std::collections::HashSet;

use tendril_core::config::ReplaceableSet;

use crate::catalog::{BlockCatalog, CapabilityRole};
use crate::error::CatalogError;

/// Validate a block catalog: ids and names unique, id 0 left to air.
pub fn validate_catalog(catalog: &BlockCatalog) -> Result<(), Vec<CatalogError>> {
    let mut errors = Vec::new();

    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();
    for block in &catalog.blocks {
        if block.id == 0 {
            errors.push(CatalogError::ReservedAirId(block.name.clone()));
        }
        if !seen_ids.insert(block.id) {
            errors.push(CatalogError::DuplicateId(block.id));
        }
        if !seen_names.insert(block.name.as_str()) {
            errors.push(CatalogError::DuplicateName(block.name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check that every kind in a replaceable set exists in the catalog and is
/// marked replaceable.
pub fn validate_replaceable_set(
    set: &ReplaceableSet,
    catalog: &BlockCatalog,
) -> Result<(), Vec<CatalogError>> {
    let mut errors = Vec::new();

    for &kind in &set.kinds {
        match catalog.get(kind) {
            None => errors.push(CatalogError::UnknownReplaceableRef {
                set: set.name.clone(),
                id: kind.0,
            }),
            Some(block) if block.role != CapabilityRole::Replaceable => {
                errors.push(CatalogError::NotReplaceable {
                    set: set.name.clone(),
                    name: block.name.clone(),
                })
            }
            Some(_) => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BlockDef;
    use tendril_core::types::BlockKind;

    fn block(id: u16, name: &str, role: CapabilityRole) -> BlockDef {
        BlockDef {
            id,
            name: name.into(),
            solid: true,
            role,
        }
    }

    fn small_catalog() -> BlockCatalog {
        BlockCatalog {
            blocks: vec![
                block(1, "stone", CapabilityRole::Replaceable),
                block(4, "bedrock", CapabilityRole::Inert),
                block(10, "mat", CapabilityRole::Substrate),
            ],
        }
    }

    #[test]
    fn test_valid_catalog() {
        assert!(validate_catalog(&small_catalog()).is_ok());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = small_catalog();
        catalog.blocks.push(block(4, "bedrock_copy", CapabilityRole::Inert));
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, CatalogError::DuplicateId(4))));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut catalog = small_catalog();
        catalog.blocks.push(block(20, "stone", CapabilityRole::Inert));
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, CatalogError::DuplicateName(n) if n == "stone")));
    }

    #[test]
    fn test_air_id_rejected() {
        let mut catalog = small_catalog();
        catalog.blocks.push(block(0, "void", CapabilityRole::Inert));
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, CatalogError::ReservedAirId(_))));
    }

    #[test]
    fn test_replaceable_set_refs() {
        let catalog = small_catalog();
        let good = ReplaceableSet::new("ok", [BlockKind(1)]);
        assert!(validate_replaceable_set(&good, &catalog).is_ok());

        let bad = ReplaceableSet::new("bad", [BlockKind(1), BlockKind(4), BlockKind(99)]);
        let errors = validate_replaceable_set(&bad, &catalog).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .any(|e| matches!(e, CatalogError::UnknownReplaceableRef { id: 99, .. })));
        assert!(errors
            .iter()
            .any(|e| matches!(e, CatalogError::NotReplaceable { name, .. } if name == "bedrock")));
    }
}
