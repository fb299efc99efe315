//! Shared fixtures for engine unit tests: a scripted capability that
//! records discharges, and a world/registry/RNG bundle.

use std::cell::RefCell;
use std::sync::Arc;

use glam::IVec3;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tendril_core::config::{ReplaceableSet, SpreaderConfig};
use tendril_core::direction::FaceSet;
use tendril_core::types::{BlockKind, BlockPos, CellState};
use tendril_world::{GridWorld, WorldAccess};

use crate::capability::{BlockCapability, CapabilityRegistry};
use crate::cursor::ChargeCursor;

pub const SOLID: BlockKind = BlockKind(1);
pub const SUBSTRATE: BlockKind = BlockKind(10);

pub fn level_config() -> SpreaderConfig {
    SpreaderConfig::level(ReplaceableSet::new("solid", [SOLID]))
}

pub fn world_generation_config() -> SpreaderConfig {
    SpreaderConfig::world_generation(ReplaceableSet::new("solid", [SOLID]))
}

/// Deterministic capability: fixed charge cost per action, optional
/// spreading, substrate access at listed positions.
#[derive(Debug)]
pub struct ScriptedCapability {
    pub charge_cost: i32,
    /// When true, a spread attaches all faces to the current cell.
    pub spreads: bool,
    pub substrate_at: Vec<BlockPos>,
    pub discharged: RefCell<Vec<BlockPos>>,
}

impl Default for ScriptedCapability {
    fn default() -> Self {
        Self {
            charge_cost: 1,
            spreads: false,
            substrate_at: Vec::new(),
            discharged: RefCell::new(Vec::new()),
        }
    }
}

impl BlockCapability for ScriptedCapability {
    fn attempt_spread_vein(
        &self,
        world: &mut dyn WorldAccess,
        pos: BlockPos,
        state: CellState,
        _faces: Option<FaceSet>,
        _is_world_generation: bool,
    ) -> bool {
        if !self.spreads {
            return false;
        }
        world.set_cell(pos, CellState::with_faces(state.kind, FaceSet::ALL));
        true
    }

    fn attempt_use_charge(
        &self,
        cursor: &ChargeCursor,
        _world: &mut dyn WorldAccess,
        _origin: BlockPos,
        _rng: &mut dyn RngCore,
        _config: &SpreaderConfig,
        _should_convert_blocks: bool,
    ) -> i32 {
        cursor.charge() - self.charge_cost
    }

    fn on_discharged(
        &self,
        _world: &mut dyn WorldAccess,
        _state: CellState,
        pos: BlockPos,
        _rng: &mut dyn RngCore,
    ) {
        self.discharged.borrow_mut().push(pos);
    }

    fn has_substrate_access(
        &self,
        _world: &dyn WorldAccess,
        _state: CellState,
        pos: BlockPos,
    ) -> bool {
        self.substrate_at.contains(&pos)
    }
}

pub struct Fixture {
    pub world: GridWorld,
    pub blocks: CapabilityRegistry,
    pub rng: ChaCha8Rng,
    pub config: SpreaderConfig,
    pub origin: BlockPos,
    pub capability: Arc<ScriptedCapability>,
}

impl Fixture {
    pub fn level() -> Self {
        Self::build(ScriptedCapability::default(), level_config())
    }

    pub fn world_generation() -> Self {
        Self::build(ScriptedCapability::default(), world_generation_config())
    }

    pub fn with_capability(capability: ScriptedCapability) -> Self {
        Self::build(capability, level_config())
    }

    fn build(capability: ScriptedCapability, config: SpreaderConfig) -> Self {
        let capability = Arc::new(capability);
        let mut blocks = CapabilityRegistry::new();
        blocks.declare(SUBSTRATE, capability.clone());
        Self {
            world: GridWorld::with_solid_kinds([SOLID]),
            blocks,
            rng: ChaCha8Rng::seed_from_u64(0xC0FFEE),
            config,
            origin: IVec3::ZERO,
            capability,
        }
    }

    pub fn step(&mut self, cursor: &mut ChargeCursor) {
        self.step_converting(cursor, true);
    }

    pub fn step_converting(&mut self, cursor: &mut ChargeCursor, should_convert_blocks: bool) {
        cursor.update(
            &mut self.world,
            &self.blocks,
            self.origin,
            &mut self.rng,
            &self.config,
            should_convert_blocks,
        );
    }

    pub fn discharged_at(&self) -> Vec<BlockPos> {
        self.capability.discharged.borrow().clone()
    }
}
