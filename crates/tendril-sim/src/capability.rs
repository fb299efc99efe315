//! Per-block-type behaviour hooks invoked by the spreading engine.
//!
//! Each cell kind may declare a [`BlockCapability`]. Cells that declare
//! none resolve to the registry's fallback, which is [`DefaultCapability`]
//! unless the host installs its own.

use std::collections::HashMap;
use std::sync::Arc;

use rand::RngCore;
use tendril_core::config::SpreaderConfig;
use tendril_core::direction::FaceSet;
use tendril_core::types::{BlockKind, BlockPos, CellState};
use tendril_world::WorldAccess;

use crate::cursor::ChargeCursor;

/// Behaviour hooks for one kind of cell.
///
/// Only `attempt_use_charge` is required. Every other hook has a neutral
/// default.
pub trait BlockCapability {
    /// Try to convert cells at `pos`. Returns true if anything changed.
    fn attempt_spread_vein(
        &self,
        _world: &mut dyn WorldAccess,
        _pos: BlockPos,
        _state: CellState,
        _faces: Option<FaceSet>,
        _is_world_generation: bool,
    ) -> bool {
        false
    }

    /// Whether a successful spread may change the state of the cell the
    /// cursor is on. When true the engine re-reads the cell afterwards.
    fn can_change_block_state_on_spread(&self) -> bool {
        true
    }

    /// Spend charge for one action. Returns the cursor's new charge.
    fn attempt_use_charge(
        &self,
        cursor: &ChargeCursor,
        world: &mut dyn WorldAccess,
        origin: BlockPos,
        rng: &mut dyn RngCore,
        config: &SpreaderConfig,
        should_convert_blocks: bool,
    ) -> i32;

    /// Called when a cursor leaves this cell or runs dry on it.
    fn on_discharged(
        &self,
        _world: &mut dyn WorldAccess,
        _state: CellState,
        _pos: BlockPos,
        _rng: &mut dyn RngCore,
    ) {
    }

    /// Next decay delay after an action.
    fn update_decay_delay(&self, _decay_delay: i32) -> i32 {
        1
    }

    /// Ticks a cursor rests after acting on this cell.
    fn spread_delay(&self) -> i32 {
        1
    }

    /// Connection faces a cursor records while standing on this cell.
    fn available_faces(&self, state: &CellState) -> FaceSet {
        state.faces
    }

    /// Whether this cell has backing material to grow from. Movement
    /// prefers candidates that do.
    fn has_substrate_access(
        &self,
        _world: &dyn WorldAccess,
        _state: CellState,
        _pos: BlockPos,
    ) -> bool {
        false
    }
}

/// Fallback for cells that declare no capability.
///
/// Never converts anything. Charge survives while the decay delay is
/// positive, and the delay counts down one step per action, so a cursor
/// stranded on an undeclared cell expires after a single rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCapability;

impl BlockCapability for DefaultCapability {
    fn attempt_use_charge(
        &self,
        cursor: &ChargeCursor,
        _world: &mut dyn WorldAccess,
        _origin: BlockPos,
        _rng: &mut dyn RngCore,
        _config: &SpreaderConfig,
        _should_convert_blocks: bool,
    ) -> i32 {
        if cursor.decay_delay() > 0 {
            cursor.charge()
        } else {
            0
        }
    }

    fn update_decay_delay(&self, decay_delay: i32) -> i32 {
        (decay_delay - 1).max(0)
    }
}

/// Maps cell kinds to their declared capabilities.
pub struct CapabilityRegistry {
    declared: HashMap<BlockKind, Arc<dyn BlockCapability>>,
    fallback: Arc<dyn BlockCapability>,
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::with_fallback(Arc::new(DefaultCapability))
    }

    pub fn with_fallback(fallback: Arc<dyn BlockCapability>) -> Self {
        Self {
            declared: HashMap::new(),
            fallback,
        }
    }

    /// Declare a capability for a kind, replacing any previous one.
    pub fn declare(&mut self, kind: BlockKind, capability: Arc<dyn BlockCapability>) {
        self.declared.insert(kind, capability);
    }

    /// Declared capability for a kind. Cells with one are spreadable.
    pub fn resolve(&self, kind: BlockKind) -> Option<&dyn BlockCapability> {
        self.declared.get(&kind).map(|c| c.as_ref())
    }

    /// Declared capability, or the fallback when none is declared.
    pub fn resolve_or_fallback(&self, kind: BlockKind) -> &dyn BlockCapability {
        self.resolve(kind).unwrap_or(self.fallback.as_ref())
    }

    pub fn is_declared(&self, kind: BlockKind) -> bool {
        self.declared.contains_key(&kind)
    }

    /// Number of kinds with a declared capability.
    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }
}
