use serde::{Deserialize, Serialize};
use tendril_core::types::BlockKind;

/// What the spreading engine may do with a block kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapabilityRole {
    /// Untouched by spreading.
    Inert,
    /// May be converted into substrate.
    Replaceable,
    /// Converted bulk material that cursors travel through.
    Substrate,
    /// Face-attached cover grown onto neighbouring surfaces.
    Vein,
    /// Auxiliary block placed on top of substrate.
    Growth,
}

/// One block kind entry from a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDef {
    pub id: u16,
    pub name: String,
    /// Full cube with sturdy faces on every side.
    pub solid: bool,
    pub role: CapabilityRole,
}

impl BlockDef {
    pub fn kind(&self) -> BlockKind {
        BlockKind(self.id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BlockCatalog {
    pub blocks: Vec<BlockDef>,
}

impl BlockCatalog {
    pub fn get(&self, kind: BlockKind) -> Option<&BlockDef> {
        self.blocks.iter().find(|b| b.id == kind.0)
    }

    pub fn by_name(&self, name: &str) -> Option<&BlockDef> {
        self.blocks.iter().find(|b| b.name == name)
    }

    /// Kind id for a block name.
    pub fn kind_of(&self, name: &str) -> Option<BlockKind> {
        self.by_name(name).map(BlockDef::kind)
    }

    /// First block listed with the given role.
    pub fn first_with_role(&self, role: CapabilityRole) -> Option<&BlockDef> {
        self.blocks.iter().find(|b| b.role == role)
    }

    pub fn kinds_with_role(&self, role: CapabilityRole) -> Vec<BlockKind> {
        self.blocks
            .iter()
            .filter(|b| b.role == role)
            .map(BlockDef::kind)
            .collect()
    }

    pub fn solid_kinds(&self) -> Vec<BlockKind> {
        self.blocks.iter().filter(|b| b.solid).map(BlockDef::kind).collect()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
