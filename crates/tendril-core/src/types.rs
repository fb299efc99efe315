use glam::IVec3;
use serde::{Deserialize, Serialize};

use crate::constants::{CHUNK_SIZE, MAX_WORLD_COORD};
use crate::direction::FaceSet;

/// Newtype for cell kind identifiers. 0 = air/empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockKind(pub u16);

impl BlockKind {
    pub const AIR: BlockKind = BlockKind(0);

    pub fn is_air(self) -> bool {
        self == Self::AIR
    }
}

/// World coordinate in cell-space.
pub type BlockPos = IVec3;

/// Chunk coordinate in chunk-space (each unit = CHUNK_SIZE cells).
pub type ChunkCoord = IVec3;

/// State of one world cell: its kind plus the faces it is attached to.
/// Faces are only meaningful for face-attached (multiface) kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellState {
    pub kind: BlockKind,
    pub faces: FaceSet,
}

impl CellState {
    pub const AIR: CellState = CellState {
        kind: BlockKind::AIR,
        faces: FaceSet::EMPTY,
    };

    pub fn of(kind: BlockKind) -> Self {
        Self {
            kind,
            faces: FaceSet::EMPTY,
        }
    }

    pub fn with_faces(kind: BlockKind, faces: FaceSet) -> Self {
        Self { kind, faces }
    }

    pub fn is_air(&self) -> bool {
        self.kind.is_air()
    }
}

/// Chunk containing a world position.
pub fn chunk_of(pos: BlockPos) -> ChunkCoord {
    IVec3::new(
        pos.x.div_euclid(CHUNK_SIZE),
        pos.y.div_euclid(CHUNK_SIZE),
        pos.z.div_euclid(CHUNK_SIZE),
    )
}

/// Whether `pos` lies inside the simulated world bound.
pub fn in_world(pos: BlockPos) -> bool {
    clamp_to_world(pos) == pos
}

/// Clamp each axis of `pos` into the simulated world bound.
pub fn clamp_to_world(pos: BlockPos) -> BlockPos {
    pos.clamp(IVec3::splat(-MAX_WORLD_COORD), IVec3::splat(MAX_WORLD_COORD))
}

/// Squared distance between two positions ignoring Y.
pub fn horizontal_distance_sq(a: BlockPos, b: BlockPos) -> i64 {
    let d = a.as_i64vec3() - b.as_i64vec3();
    d.x.saturating_mul(d.x).saturating_add(d.z.saturating_mul(d.z))
}

/// Squared euclidean distance between two positions.
pub fn distance_sq(a: BlockPos, b: BlockPos) -> i64 {
    let d = a.as_i64vec3() - b.as_i64vec3();
    d.x.saturating_mul(d.x)
        .saturating_add(d.y.saturating_mul(d.y))
        .saturating_add(d.z.saturating_mul(d.z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_of_negative_coords() {
        assert_eq!(chunk_of(IVec3::new(0, 0, 0)), IVec3::ZERO);
        assert_eq!(chunk_of(IVec3::new(15, 15, 15)), IVec3::ZERO);
        assert_eq!(chunk_of(IVec3::new(16, 0, -1)), IVec3::new(1, 0, -1));
        assert_eq!(chunk_of(IVec3::new(-16, -17, 0)), IVec3::new(-1, -2, 0));
    }

    #[test]
    fn test_horizontal_distance_ignores_y() {
        let a = IVec3::new(0, 100, 0);
        let b = IVec3::new(3, -50, 4);
        assert_eq!(horizontal_distance_sq(a, b), 25);
        assert_eq!(distance_sq(IVec3::ZERO, IVec3::new(1, 2, 2)), 9);
    }

    #[test]
    fn test_distances_at_extreme_coords() {
        let far = IVec3::new(i32::MAX, 0, i32::MIN);
        let near = IVec3::new(i32::MIN, 0, i32::MAX);
        assert_eq!(horizontal_distance_sq(far, near), i64::MAX);
        let edge = IVec3::new(i32::MAX, 0, 0);
        assert_eq!(distance_sq(edge, IVec3::ZERO), (i32::MAX as i64).pow(2));
    }

    #[test]
    fn test_clamp_to_world() {
        let pos = IVec3::new(i32::MAX, -5, i32::MIN);
        assert!(!in_world(pos));
        let clamped = clamp_to_world(pos);
        assert!(in_world(clamped));
        assert_eq!(clamped, IVec3::new(MAX_WORLD_COORD, -5, -MAX_WORLD_COORD));
    }

    #[test]
    fn test_default_cell_is_air() {
        assert!(CellState::default().is_air());
        assert_eq!(CellState::default(), CellState::AIR);
    }
}
