use crate::catalog::{BlockCatalog, BlockDef};
use crate::error::CatalogError;

/// Parse a single block catalog RON string.
pub fn load_catalog_from_str(ron_str: &str) -> Result<BlockCatalog, CatalogError> {
    let options = ron::Options::default();
    let blocks: Vec<BlockDef> = options
        .from_str(ron_str)
        .map_err(|e| CatalogError::ParseError(e.to_string()))?;
    Ok(BlockCatalog { blocks })
}

/// Load and concatenate several catalog sources.
pub fn load_all_catalogs(sources: &[&str]) -> Result<BlockCatalog, CatalogError> {
    let mut blocks = Vec::new();
    for source in sources {
        let catalog = load_catalog_from_str(source)?;
        blocks.extend(catalog.blocks);
    }
    Ok(BlockCatalog { blocks })
}

/// The bundled catalog shipped in `data/blocks.ron`.
pub fn default_catalog() -> Result<BlockCatalog, CatalogError> {
    load_catalog_from_str(include_str!("../../../data/blocks.ron"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CapabilityRole;
    use tendril_core::types::BlockKind;

    #[test]
    fn test_load_single_block() {
        let ron = r#"[
            (id: 7, name: "tuff", solid: true, role: Replaceable),
        ]"#;
        let catalog = load_catalog_from_str(ron).expect("should parse");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.blocks[0].name, "tuff");
        assert_eq!(catalog.kind_of("tuff"), Some(BlockKind(7)));
    }

    #[test]
    fn test_malformed_ron_rejected() {
        let result = load_catalog_from_str(r#"[(id: 1, name: "stone", solid: yes"#);
        assert!(matches!(result, Err(CatalogError::ParseError(_))));
    }

    #[test]
    fn test_unknown_role_rejected() {
        let ron = r#"[(id: 1, name: "stone", solid: true, role: Explosive)]"#;
        assert!(load_catalog_from_str(ron).is_err());
    }

    #[test]
    fn test_load_all_merges() {
        let a = r#"[(id: 1, name: "stone", solid: true, role: Replaceable)]"#;
        let b = r#"[(id: 10, name: "mat", solid: true, role: Substrate)]"#;
        let catalog = load_all_catalogs(&[a, b]).expect("should merge");
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.kinds_with_role(CapabilityRole::Substrate),
            vec![BlockKind(10)]
        );
    }

    #[test]
    fn test_default_catalog_loads() {
        let catalog = default_catalog().expect("bundled catalog should parse");
        assert!(catalog.first_with_role(CapabilityRole::Substrate).is_some());
        assert!(catalog.first_with_role(CapabilityRole::Vein).is_some());
        assert!(catalog.first_with_role(CapabilityRole::Growth).is_some());
        assert!(catalog.solid_kinds().contains(&BlockKind(1)));
    }
}
