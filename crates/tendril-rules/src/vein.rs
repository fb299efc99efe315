//! Face-attached vein cover.
//!
//! A vein cell lies against one or more sturdy neighbouring faces. Cursors
//! on a vein convert the replaceable block behind an attached face into
//! substrate, and a vein whose faces are all backed by substrate is
//! consumed when a cursor discharges on it.

use rand::seq::SliceRandom;
use rand::RngCore;
use tendril_core::config::{ReplaceableSet, SpreaderConfig};
use tendril_core::direction::{FaceSet, ALL_FACES};
use tendril_core::types::{BlockKind, BlockPos, CellState};
use tendril_sim::{BlockCapability, ChargeCursor};
use tendril_world::WorldAccess;

use crate::chance::one_in;

/// Attach vein faces at `pos` wherever a candidate face backs onto a sturdy
/// neighbour. Only air or an existing vein of `vein` kind is touched.
/// Returns true if the cell changed.
pub fn regrow_vein(
    world: &mut dyn WorldAccess,
    vein: BlockKind,
    pos: BlockPos,
    candidates: FaceSet,
) -> bool {
    let state = world.get_cell(pos);
    let before = if state.kind == vein {
        state.faces
    } else if state.is_air() {
        FaceSet::EMPTY
    } else {
        return false;
    };

    let mut faces = before;
    for face in candidates.iter() {
        if world.is_face_sturdy(pos + face.offset(), face.opposite()) {
            faces.insert(face);
        }
    }

    if faces == before || faces.is_empty() {
        return false;
    }
    world.set_cell(pos, CellState::with_faces(vein, faces));
    true
}

/// Grow the vein at `pos` onto its own sturdy neighbours, then carry each
/// attached face one cell sideways along the surface it rests on.
pub fn spread_along_surface(world: &mut dyn WorldAccess, vein: BlockKind, pos: BlockPos) -> bool {
    let state = world.get_cell(pos);
    if state.kind != vein {
        return false;
    }

    let mut changed = regrow_vein(world, vein, pos, FaceSet::ALL);
    for face in state.faces.iter() {
        for dir in ALL_FACES {
            if dir == face || dir == face.opposite() {
                continue;
            }
            changed |= regrow_vein(world, vein, pos + dir.offset(), FaceSet::EMPTY.with(face));
        }
    }
    changed
}

/// Vein cover over the blocks of one replaceable set. The set is fixed when
/// the capability is built and drives both conversion and substrate access.
#[derive(Debug, Clone)]
pub struct VeinCapability {
    vein: BlockKind,
    substrate: BlockKind,
    replaceable: ReplaceableSet,
}

impl VeinCapability {
    pub fn new(vein: BlockKind, substrate: BlockKind, replaceable: ReplaceableSet) -> Self {
        Self {
            vein,
            substrate,
            replaceable,
        }
    }

    /// Convert one replaceable block behind an attached face into
    /// substrate. Faces are tried in random order.
    fn attempt_place_substrate(
        &self,
        world: &mut dyn WorldAccess,
        pos: BlockPos,
        rng: &mut dyn RngCore,
    ) -> bool {
        let state = world.get_cell(pos);
        if state.kind != self.vein {
            return false;
        }

        let mut order = ALL_FACES;
        order.shuffle(rng);
        for face in order {
            if !state.faces.contains(face) {
                continue;
            }
            let target = pos + face.offset();
            if !self.is_replaceable(world, target) {
                continue;
            }

            world.set_cell(target, CellState::of(self.substrate));
            // Neighbouring veins now backed by the new substrate shed those faces.
            for other in ALL_FACES {
                if other == face.opposite() {
                    continue;
                }
                let neighbor = target + other.offset();
                let neighbor_state = world.get_cell(neighbor);
                if neighbor_state.kind == self.vein {
                    self.on_discharged(world, neighbor_state, neighbor, rng);
                }
            }
            return true;
        }
        false
    }

    fn is_replaceable(&self, world: &dyn WorldAccess, pos: BlockPos) -> bool {
        self.replaceable.contains(world.get_cell(pos).kind)
    }
}

impl BlockCapability for VeinCapability {
    fn attempt_spread_vein(
        &self,
        world: &mut dyn WorldAccess,
        pos: BlockPos,
        _state: CellState,
        _faces: Option<FaceSet>,
        _is_world_generation: bool,
    ) -> bool {
        spread_along_surface(world, self.vein, pos)
    }

    fn attempt_use_charge(
        &self,
        cursor: &ChargeCursor,
        world: &mut dyn WorldAccess,
        _origin: BlockPos,
        rng: &mut dyn RngCore,
        config: &SpreaderConfig,
        should_convert_blocks: bool,
    ) -> i32 {
        let charge = cursor.charge();
        if should_convert_blocks && self.attempt_place_substrate(world, cursor.pos(), rng) {
            charge - 1
        } else if one_in(rng, config.charge_decay_rate) {
            charge / 2
        } else {
            charge
        }
    }

    fn on_discharged(
        &self,
        world: &mut dyn WorldAccess,
        state: CellState,
        pos: BlockPos,
        _rng: &mut dyn RngCore,
    ) {
        if state.kind != self.vein {
            return;
        }
        let mut faces = state.faces;
        for face in state.faces.iter() {
            if world.get_cell(pos + face.offset()).kind == self.substrate {
                faces.remove(face);
            }
        }
        if faces.is_empty() {
            world.set_cell(pos, CellState::AIR);
        } else {
            world.set_cell(pos, CellState::with_faces(self.vein, faces));
        }
    }

    fn has_substrate_access(
        &self,
        world: &dyn WorldAccess,
        state: CellState,
        pos: BlockPos,
    ) -> bool {
        state.kind == self.vein
            && state
                .faces
                .iter()
                .any(|face| self.is_replaceable(world, pos + face.offset()))
    }
}
