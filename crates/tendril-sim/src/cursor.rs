//! Charge cursor: a single mobile agent of the spreading engine.
//!
//! A cursor rests while `update_delay > 0`, then acts on its cell (spread,
//! spend charge), then either moves to a neighbouring spreadable cell or
//! stays. It is discharged once charge reaches 0.

use rand::seq::SliceRandom;
use rand::RngCore;
use tendril_core::config::SpreaderConfig;
use tendril_core::constants::{
    INITIAL_DECAY_DELAY, MAX_CHARGE, MAX_DECAY_DELAY, WORLDGEN_MAX_HORIZONTAL_RADIUS,
};
use tendril_core::direction::{Face, FaceSet, NON_CORNER_OFFSETS};
use tendril_core::event::WorldEvent;
use tendril_core::types::{clamp_to_world, horizontal_distance_sq, in_world, BlockPos};
use tendril_world::WorldAccess;

use crate::capability::CapabilityRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeCursor {
    pos: BlockPos,
    /// Always within `[0, MAX_CHARGE]`.
    charge: i32,
    update_delay: i32,
    decay_delay: i32,
    faces: Option<FaceSet>,
}

impl ChargeCursor {
    /// Fresh cursor as created by charge injection. `charge` is clamped to
    /// `[0, MAX_CHARGE]` and `pos` to the world bound.
    pub fn new(pos: BlockPos, charge: i32) -> Self {
        Self {
            pos: clamp_to_world(pos),
            charge: charge.clamp(0, MAX_CHARGE),
            update_delay: 0,
            decay_delay: INITIAL_DECAY_DELAY,
            faces: None,
        }
    }

    /// Rebuild a cursor from stored fields, clamping each into range.
    pub fn restored(
        pos: BlockPos,
        charge: i32,
        decay_delay: i32,
        update_delay: i32,
        faces: Option<FaceSet>,
    ) -> Self {
        Self {
            pos: clamp_to_world(pos),
            charge: charge.clamp(0, MAX_CHARGE),
            update_delay: update_delay.max(0),
            decay_delay: decay_delay.clamp(0, MAX_DECAY_DELAY),
            faces,
        }
    }

    pub fn pos(&self) -> BlockPos {
        self.pos
    }

    pub fn charge(&self) -> i32 {
        self.charge
    }

    pub fn update_delay(&self) -> i32 {
        self.update_delay
    }

    pub fn decay_delay(&self) -> i32 {
        self.decay_delay
    }

    /// Faces of the cell the cursor last refreshed on. None until then.
    pub fn faces(&self) -> Option<FaceSet> {
        self.faces
    }

    pub fn is_discharged(&self) -> bool {
        self.charge <= 0
    }

    /// Absorb `other` into this cursor. `other` is left with no charge.
    pub fn merge_with(&mut self, other: &mut ChargeCursor) {
        self.charge = (self.charge + other.charge).min(MAX_CHARGE);
        other.charge = 0;
        self.update_delay = self.update_delay.min(other.update_delay);
    }

    /// Advance this cursor by one step.
    pub fn update(
        &mut self,
        world: &mut dyn WorldAccess,
        blocks: &CapabilityRegistry,
        origin: BlockPos,
        rng: &mut dyn RngCore,
        config: &SpreaderConfig,
        should_convert_blocks: bool,
    ) {
        if !self.should_update(&*world, config.is_world_generation) {
            return;
        }

        if self.update_delay > 0 {
            self.update_delay -= 1;
            return;
        }

        let mut state = world.get_cell(self.pos);
        let mut capability = blocks.resolve_or_fallback(state.kind);

        if should_convert_blocks
            && capability.attempt_spread_vein(
                world,
                self.pos,
                state,
                self.faces,
                config.is_world_generation,
            )
        {
            if capability.can_change_block_state_on_spread() {
                state = world.get_cell(self.pos);
                capability = blocks.resolve_or_fallback(state.kind);
            }
            world.emit_event(WorldEvent::VeinSpread, self.pos, 0);
        }

        let charge =
            capability.attempt_use_charge(self, world, origin, rng, config, should_convert_blocks);
        self.charge = charge.clamp(0, MAX_CHARGE);

        if self.charge <= 0 {
            capability.on_discharged(world, state, self.pos, rng);
            return;
        }

        if let Some(target) = valid_movement_pos(&*world, blocks, self.pos, rng) {
            capability.on_discharged(world, state, self.pos, rng);
            self.pos = target;
            if config.is_world_generation && exceeds_worldgen_radius(self.pos, origin) {
                self.charge = 0;
                return;
            }
            state = world.get_cell(target);
        }

        if let Some(current) = blocks.resolve(state.kind) {
            self.faces = Some(current.available_faces(&state));
        }

        self.decay_delay = capability
            .update_decay_delay(self.decay_delay)
            .clamp(0, MAX_DECAY_DELAY);
        self.update_delay = capability.spread_delay().max(0);
    }

    fn should_update(&self, world: &dyn WorldAccess, is_world_generation: bool) -> bool {
        if self.charge <= 0 {
            false
        } else if is_world_generation {
            true
        } else {
            world.is_tick_due(self.pos)
        }
    }
}

fn exceeds_worldgen_radius(pos: BlockPos, origin: BlockPos) -> bool {
    let r = WORLDGEN_MAX_HORIZONTAL_RADIUS as i64;
    horizontal_distance_sq(pos, origin) > r * r
}

/// The 18 non-corner offsets in a fresh random order.
pub fn shuffled_offsets(rng: &mut dyn RngCore) -> [glam::IVec3; 18] {
    let mut offsets = NON_CORNER_OFFSETS;
    offsets.shuffle(rng);
    offsets
}

/// Pick the cell a cursor at `from` moves to, if any.
///
/// Candidates are spreadable cells inside the world bound reachable without
/// crossing a sturdy face. The first candidate with substrate access wins
/// outright, otherwise the first candidate found is used.
pub fn valid_movement_pos(
    world: &dyn WorldAccess,
    blocks: &CapabilityRegistry,
    from: BlockPos,
    rng: &mut dyn RngCore,
) -> Option<BlockPos> {
    let mut found = None;
    for offset in shuffled_offsets(rng) {
        let candidate = from.saturating_add(offset);
        if !in_world(candidate) {
            continue;
        }
        let state = world.get_cell(candidate);
        let Some(capability) = blocks.resolve(state.kind) else {
            continue;
        };
        if !is_movement_unobstructed(world, from, candidate) {
            continue;
        }
        if capability.has_substrate_access(world, state, candidate) {
            return Some(candidate);
        }
        if found.is_none() {
            found = Some(candidate);
        }
    }
    found
}

/// A single-axis step is always allowed. A two-axis step is allowed when at
/// least one of the two intermediate neighbours is open toward `from`.
pub fn is_movement_unobstructed(world: &dyn WorldAccess, from: BlockPos, to: BlockPos) -> bool {
    let delta = to - from;
    let mut steps = [None; 3];
    for (axis, slot) in steps.iter_mut().enumerate() {
        *slot = Face::along_axis(axis, delta[axis]);
    }

    let faces: Vec<Face> = steps.into_iter().flatten().collect();
    if faces.len() <= 1 {
        return true;
    }
    faces.iter().any(|face| is_unobstructed(world, from, *face))
}

fn is_unobstructed(world: &dyn WorldAccess, pos: BlockPos, face: Face) -> bool {
    let neighbor = pos + face.offset();
    !world.is_face_sturdy(neighbor, face.opposite())
}
