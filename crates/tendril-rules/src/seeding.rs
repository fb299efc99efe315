use rand::RngCore;
use tendril_core::config::SpreaderConfig;
use tendril_core::direction::FaceSet;
use tendril_core::types::{BlockKind, BlockPos, CellState};
use tendril_sim::{BlockCapability, ChargeCursor, DefaultCapability};
use tendril_world::WorldAccess;

use crate::vein::regrow_vein;

/// Fallback for undeclared cells that seeds a vein at the cursor.
///
/// With unknown faces every sturdy neighbour is a candidate. With known
/// faces only those are regrown. Charge and delay hooks behave like
/// [`DefaultCapability`].
#[derive(Debug, Clone, Copy)]
pub struct SeedingCapability {
    vein: BlockKind,
}

impl SeedingCapability {
    pub fn new(vein: BlockKind) -> Self {
        Self { vein }
    }
}

impl BlockCapability for SeedingCapability {
    fn attempt_spread_vein(
        &self,
        world: &mut dyn WorldAccess,
        pos: BlockPos,
        _state: CellState,
        faces: Option<FaceSet>,
        _is_world_generation: bool,
    ) -> bool {
        let candidates = match faces {
            Some(set) if !set.is_empty() => set,
            _ => FaceSet::ALL,
        };
        regrow_vein(world, self.vein, pos, candidates)
    }

    fn attempt_use_charge(
        &self,
        cursor: &ChargeCursor,
        world: &mut dyn WorldAccess,
        origin: BlockPos,
        rng: &mut dyn RngCore,
        config: &SpreaderConfig,
        should_convert_blocks: bool,
    ) -> i32 {
        DefaultCapability.attempt_use_charge(
            cursor,
            world,
            origin,
            rng,
            config,
            should_convert_blocks,
        )
    }

    fn update_decay_delay(&self, decay_delay: i32) -> i32 {
        DefaultCapability.update_decay_delay(decay_delay)
    }
}
