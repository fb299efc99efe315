//! Bulk substrate left behind by conversion.
//!
//! Outside the no-growth radius substrate spends charge on growth blocks.
//! Closer in, and when growth is not possible, charge trickles away at a
//! rate that rises with distance from the origin.

use glam::IVec3;
use rand::RngCore;
use tendril_core::config::SpreaderConfig;
use tendril_core::constants::MAX_GROWTH_RATE_RADIUS;
use tendril_core::direction::{FaceSet, ALL_FACES};
use tendril_core::event::WorldEvent;
use tendril_core::types::{distance_sq, BlockKind, BlockPos, CellState};
use tendril_sim::{BlockCapability, ChargeCursor};
use tendril_world::WorldAccess;

use crate::chance::{below, one_in};
use crate::vein::regrow_vein;

/// Growth blocks allowed in the neighbourhood before another is refused.
const MAX_NEARBY_GROWTHS: usize = 2;
/// Half-extent of the neighbourhood scanned for existing growths.
const GROWTH_SCAN_RADIUS: i32 = 4;
const GROWTH_SCAN_HEIGHT: i32 = 2;

#[derive(Debug, Clone)]
pub struct SubstrateCapability {
    vein: BlockKind,
    growth: Option<BlockKind>,
}

impl SubstrateCapability {
    pub fn new(vein: BlockKind, growth: Option<BlockKind>) -> Self {
        Self { vein, growth }
    }

    /// Air above and no more than a couple of growths already nearby.
    pub fn can_place_growth(&self, world: &dyn WorldAccess, pos: BlockPos) -> bool {
        let Some(growth) = self.growth else {
            return false;
        };
        if !world.get_cell(pos + IVec3::Y).is_air() {
            return false;
        }

        let mut nearby = 0;
        for dx in -GROWTH_SCAN_RADIUS..=GROWTH_SCAN_RADIUS {
            for dy in 0..=GROWTH_SCAN_HEIGHT {
                for dz in -GROWTH_SCAN_RADIUS..=GROWTH_SCAN_RADIUS {
                    if world.get_cell(pos + IVec3::new(dx, dy, dz)).kind == growth {
                        nearby += 1;
                        if nearby > MAX_NEARBY_GROWTHS {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }
}

/// Charge lost outside the no-growth radius. Scales with the squared
/// distance past the radius up to `MAX_GROWTH_RATE_RADIUS`, never below 1.
pub fn distance_decay(
    config: &SpreaderConfig,
    pos: BlockPos,
    origin: BlockPos,
    charge: i32,
) -> i32 {
    let radius = config.no_growth_radius as f32;
    let dist = (distance_sq(pos, origin) as f32).sqrt();
    let span = ((MAX_GROWTH_RATE_RADIUS - config.no_growth_radius) as f32).powi(2);
    let scale = if span > 0.0 {
        ((dist - radius).powi(2) / span).min(1.0)
    } else {
        1.0
    };
    ((charge as f32 * scale * 0.5) as i32).max(1)
}

impl BlockCapability for SubstrateCapability {
    /// Cover open neighbours with vein resting on the surrounding surfaces.
    fn attempt_spread_vein(
        &self,
        world: &mut dyn WorldAccess,
        pos: BlockPos,
        _state: CellState,
        _faces: Option<FaceSet>,
        _is_world_generation: bool,
    ) -> bool {
        let mut spread = false;
        for face in ALL_FACES {
            spread |= regrow_vein(world, self.vein, pos + face.offset(), FaceSet::ALL);
        }
        spread
    }

    fn can_change_block_state_on_spread(&self) -> bool {
        false
    }

    fn attempt_use_charge(
        &self,
        cursor: &ChargeCursor,
        world: &mut dyn WorldAccess,
        origin: BlockPos,
        rng: &mut dyn RngCore,
        config: &SpreaderConfig,
        _should_convert_blocks: bool,
    ) -> i32 {
        let charge = cursor.charge();
        if charge == 0 || !one_in(rng, config.charge_decay_rate) {
            return charge;
        }

        let pos = cursor.pos();
        let r = config.no_growth_radius as i64;
        let inside = distance_sq(pos, origin) < r * r;

        if !inside && self.can_place_growth(&*world, pos) {
            let cost = config.growth_spawn_cost;
            if let Some(growth) = self.growth {
                if below(rng, cost) < charge {
                    let above = pos + IVec3::Y;
                    world.set_cell(above, CellState::of(growth));
                    world.schedule_tick(above, 1);
                    world.emit_event(WorldEvent::GrowthPlaced, above, growth.0 as u32);
                }
            }
            return (charge - cost).max(0);
        }

        if !one_in(rng, config.additional_decay_rate) {
            charge
        } else if inside {
            charge - 1
        } else {
            charge - distance_decay(config, pos, origin, charge)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tendril_core::config::ReplaceableSet;
    use tendril_core::direction::Face;
    use tendril_world::GridWorld;

    const STONE: BlockKind = BlockKind(1);
    const MAT: BlockKind = BlockKind(10);
    const VEIN: BlockKind = BlockKind(11);
    const BLOOM: BlockKind = BlockKind(12);

    /// Config where every roll hits.
    fn eager_config() -> SpreaderConfig {
        let mut config = SpreaderConfig::level(ReplaceableSet::new("stone", [STONE]));
        config.charge_decay_rate = 1;
        config.additional_decay_rate = 1;
        config.growth_spawn_cost = 1;
        config
    }

    fn world() -> GridWorld {
        GridWorld::with_solid_kinds([STONE, MAT])
    }

    #[test]
    fn test_growth_placed_outside_radius() {
        let mut world = world();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let cap = SubstrateCapability::new(VEIN, Some(BLOOM));
        let pos = IVec3::new(10, 0, 0);
        world.set_cell(pos, CellState::of(MAT));

        let cursor = ChargeCursor::new(pos, 30);
        let config = eager_config();
        let charge =
            cap.attempt_use_charge(&cursor, &mut world, IVec3::ZERO, &mut rng, &config, true);
        assert_eq!(charge, 29);
        assert_eq!(world.get_cell(pos + IVec3::Y).kind, BLOOM);
        assert_eq!(world.events_of(WorldEvent::GrowthPlaced).count(), 1);
        assert_eq!(world.scheduled_ticks().len(), 1);
    }

    #[test]
    fn test_no_growth_inside_radius() {
        let mut world = world();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let cap = SubstrateCapability::new(VEIN, Some(BLOOM));
        let pos = IVec3::new(1, 0, 0);
        world.set_cell(pos, CellState::of(MAT));

        let cursor = ChargeCursor::new(pos, 30);
        let config = eager_config();
        let charge =
            cap.attempt_use_charge(&cursor, &mut world, IVec3::ZERO, &mut rng, &config, true);
        assert_eq!(charge, 29, "inside the radius decay is exactly 1");
        assert!(world.get_cell(pos + IVec3::Y).is_air());
    }

    #[test]
    fn test_crowded_neighbourhood_refuses_growth() {
        let mut world = world();
        let cap = SubstrateCapability::new(VEIN, Some(BLOOM));
        let pos = IVec3::new(10, 0, 0);
        for dx in 1..=3 {
            world.set_cell(pos + IVec3::new(dx, 1, 0), CellState::of(BLOOM));
        }
        assert!(!cap.can_place_growth(&world, pos));

        world.set_cell(pos + IVec3::new(3, 1, 0), CellState::AIR);
        assert!(cap.can_place_growth(&world, pos));

        world.set_cell(pos + IVec3::Y, CellState::of(STONE));
        assert!(!cap.can_place_growth(&world, pos), "blocked above");
    }

    #[test]
    fn test_without_growth_kind_decays_by_distance() {
        let mut world = world();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let cap = SubstrateCapability::new(VEIN, None);
        let config = eager_config();
        let pos = IVec3::new(24, 0, 0);
        let cursor = ChargeCursor::new(pos, 100);
        let charge =
            cap.attempt_use_charge(&cursor, &mut world, IVec3::ZERO, &mut rng, &config, true);
        // At the max growth radius the penalty is half the charge.
        assert_eq!(charge, 50);
    }

    #[test]
    fn test_distance_decay_floor() {
        let config = eager_config();
        assert_eq!(distance_decay(&config, IVec3::new(4, 0, 0), IVec3::ZERO, 100), 1);
        assert_eq!(distance_decay(&config, IVec3::new(40, 0, 0), IVec3::ZERO, 100), 50);
        let mid = distance_decay(&config, IVec3::new(14, 0, 0), IVec3::ZERO, 100);
        assert!(mid > 1 && mid < 50, "got {mid}");
    }

    #[test]
    fn test_spread_covers_open_neighbours() {
        let mut world = world();
        let cap = SubstrateCapability::new(VEIN, None);
        world.set_cell(IVec3::ZERO, CellState::of(MAT));
        world.set_cell(IVec3::X, CellState::of(STONE));

        assert!(cap.attempt_spread_vein(&mut world, IVec3::ZERO, CellState::of(MAT), None, false));
        let above = world.get_cell(IVec3::Y);
        assert_eq!(above.kind, VEIN);
        assert!(above.faces.contains(Face::Down));
        assert_eq!(world.get_cell(IVec3::X).kind, STONE, "solid neighbours untouched");
        assert!(!cap.can_change_block_state_on_spread());
    }
}
