use glam::IVec3;
use tendril_core::types::{BlockKind, CellState};

use crate::access::WorldAccess;
use crate::grid::GridWorld;

/// Deterministic rolling floor used by scenes and integration tests.
///
/// Heights come from bilinear value noise over a lattice of hashed corner
/// heights, so neighbouring columns differ by at most a cell or two.
pub struct FloorGenerator {
    seed: u32,
    /// Lattice spacing in cells.
    cell_size: i32,
    /// Maximum height variation above `base_y`.
    amplitude: i32,
}

/// Kinds used to build a floor: `fill` below, `top` as the surface layer.
#[derive(Debug, Clone, Copy)]
pub struct FloorLayers {
    pub fill: BlockKind,
    pub top: BlockKind,
}

impl FloorGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            cell_size: 8,
            amplitude: 3,
        }
    }

    pub fn with_amplitude(mut self, amplitude: i32) -> Self {
        self.amplitude = amplitude.max(0);
        self
    }

    /// Surface height of column (x, z) relative to `base_y`, in `[0, amplitude]`.
    pub fn column_height(&self, x: i32, z: i32) -> i32 {
        if self.amplitude == 0 {
            return 0;
        }
        let cs = self.cell_size;
        let (gx, gz) = (x.div_euclid(cs), z.div_euclid(cs));
        let fx = x.rem_euclid(cs) as f32 / cs as f32;
        let fz = z.rem_euclid(cs) as f32 / cs as f32;

        let h00 = self.lattice(gx, gz);
        let h10 = self.lattice(gx + 1, gz);
        let h01 = self.lattice(gx, gz + 1);
        let h11 = self.lattice(gx + 1, gz + 1);

        let top = h00 + (h10 - h00) * fx;
        let bottom = h01 + (h11 - h01) * fx;
        let v = top + (bottom - top) * fz;
        (v * self.amplitude as f32).round() as i32
    }

    /// Fill columns in `[min_xz, max_xz]` from `base_y - depth + 1` up to the
    /// column surface.
    pub fn generate(
        &self,
        world: &mut GridWorld,
        min_xz: (i32, i32),
        max_xz: (i32, i32),
        base_y: i32,
        depth: i32,
        layers: FloorLayers,
    ) {
        let depth = depth.max(1);
        for x in min_xz.0..=max_xz.0 {
            for z in min_xz.1..=max_xz.1 {
                let surface = base_y + self.column_height(x, z);
                for y in (base_y - depth + 1)..=surface {
                    let kind = if y == surface { layers.top } else { layers.fill };
                    world.set_cell(IVec3::new(x, y, z), CellState::of(kind));
                }
            }
        }
        log::debug!(
            "generated floor x={}..={} z={}..={} base_y={}",
            min_xz.0,
            max_xz.0,
            min_xz.1,
            max_xz.1,
            base_y
        );
    }

    /// Lattice height in [0, 1).
    fn lattice(&self, gx: i32, gz: i32) -> f32 {
        let mut state = (gx as u32)
            .wrapping_mul(0x9E3779B9)
            .wrapping_add((gz as u32).wrapping_mul(0x6C62272E))
            .wrapping_add(self.seed.wrapping_mul(0x2545F491));

        state ^= state >> 16;
        state = state.wrapping_mul(0x45D9F3B);
        state ^= state >> 16;
        state = state.wrapping_mul(0x45D9F3B);
        state ^= state >> 16;

        (state >> 8) as f32 / 16_777_216.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STONE: BlockKind = BlockKind(1);
    const DIRT: BlockKind = BlockKind(2);

    fn layers() -> FloorLayers {
        FloorLayers {
            fill: STONE,
            top: DIRT,
        }
    }

    #[test]
    fn test_floor_deterministic() {
        let gen = FloorGenerator::new(42);
        for x in -20..20 {
            for z in -20..20 {
                assert_eq!(gen.column_height(x, z), gen.column_height(x, z));
            }
        }
    }

    #[test]
    fn test_column_heights_within_amplitude() {
        let gen = FloorGenerator::new(7).with_amplitude(4);
        for x in -30..30 {
            for z in -30..30 {
                let h = gen.column_height(x, z);
                assert!((0..=4).contains(&h), "height {h} out of range");
            }
        }
    }

    #[test]
    fn test_flat_floor_layers() {
        let gen = FloorGenerator::new(1).with_amplitude(0);
        let mut world = GridWorld::new();
        gen.generate(&mut world, (0, 0), (3, 3), 0, 2, layers());
        assert_eq!(world.count_kind(DIRT), 16);
        assert_eq!(world.count_kind(STONE), 16);
        assert_eq!(world.get_cell(IVec3::new(1, 0, 1)).kind, DIRT);
        assert_eq!(world.get_cell(IVec3::new(1, -1, 1)).kind, STONE);
        assert!(world.get_cell(IVec3::new(1, 1, 1)).is_air());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = FloorGenerator::new(1).with_amplitude(6);
        let b = FloorGenerator::new(2).with_amplitude(6);
        let differs = (0..64).any(|x| a.column_height(x, x * 3) != b.column_height(x, x * 3));
        assert!(differs, "seeds should change the heightmap");
    }
}
