use std::collections::HashMap;

use rand::RngCore;
use tendril_core::config::SpreaderConfig;
use tendril_core::constants::{INTENSITY_LOG_DIVISOR, INTENSITY_SHIFT, MAX_CHARGE, MAX_CURSORS};
use tendril_core::event::WorldEvent;
use tendril_core::types::BlockPos;
use tendril_world::WorldAccess;

use crate::capability::CapabilityRegistry;
use crate::cursor::ChargeCursor;

/// Counts from one `update_cursors` pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Cursors that ran out of charge this tick.
    pub expired: u32,
    /// Cursors absorbed into another cursor at the same position.
    pub merged: u32,
    /// Cursors carried into the next tick.
    pub survivors: u32,
    /// Charge feedback events emitted.
    pub feedback_events: u32,
}

/// A bounded set of charge cursors owned by one world object.
#[derive(Debug, Clone)]
pub struct Spreader {
    config: SpreaderConfig,
    cursors: Vec<ChargeCursor>,
}

impl Spreader {
    pub fn new(config: SpreaderConfig) -> Self {
        Self {
            config,
            cursors: Vec::new(),
        }
    }

    pub fn config(&self) -> &SpreaderConfig {
        &self.config
    }

    pub fn is_world_generation(&self) -> bool {
        self.config.is_world_generation
    }

    pub fn cursors(&self) -> &[ChargeCursor] {
        &self.cursors
    }

    pub fn total_charge(&self) -> i64 {
        self.cursors.iter().map(|c| c.charge() as i64).sum()
    }

    pub fn clear(&mut self) {
        self.cursors.clear();
    }

    /// Deposit `charge` at `origin` as cursors of at most `MAX_CHARGE` each.
    /// Chunks that do not fit under the cursor cap are dropped.
    pub fn add_charge(&mut self, origin: BlockPos, charge: i32) {
        let mut remaining = charge;
        while remaining > 0 {
            let chunk = remaining.min(MAX_CHARGE);
            self.add_cursor(ChargeCursor::new(origin, chunk));
            remaining -= chunk;
        }
    }

    fn add_cursor(&mut self, cursor: ChargeCursor) {
        if self.cursors.len() < MAX_CURSORS {
            self.cursors.push(cursor);
        }
    }

    /// Advance every cursor one step, then merge cursors that share a cell
    /// and emit per-cell charge feedback.
    pub fn update_cursors(
        &mut self,
        world: &mut dyn WorldAccess,
        blocks: &CapabilityRegistry,
        origin: BlockPos,
        rng: &mut dyn RngCore,
        should_convert_blocks: bool,
    ) -> TickSummary {
        let mut summary = TickSummary::default();
        if self.cursors.is_empty() {
            return summary;
        }

        let mut survivors: Vec<ChargeCursor> = Vec::with_capacity(self.cursors.len());
        // Cursor at each position that later arrivals merge into.
        let mut tracked: HashMap<BlockPos, usize> = HashMap::new();
        let mut totals: HashMap<BlockPos, i32> = HashMap::new();
        // Positions in first-seen order so feedback ordering is stable.
        let mut positions: Vec<BlockPos> = Vec::new();

        for mut cursor in std::mem::take(&mut self.cursors) {
            cursor.update(
                world,
                blocks,
                origin,
                rng,
                &self.config,
                should_convert_blocks,
            );

            if cursor.is_discharged() {
                world.emit_event(WorldEvent::CursorDespawn, cursor.pos(), 0);
                summary.expired += 1;
                continue;
            }

            let pos = cursor.pos();
            let total = totals.entry(pos).or_insert_with(|| {
                positions.push(pos);
                0
            });
            *total += cursor.charge();

            match tracked.get(&pos).copied() {
                None => {
                    tracked.insert(pos, survivors.len());
                    survivors.push(cursor);
                }
                Some(idx)
                    if !self.config.is_world_generation
                        && cursor.charge() + survivors[idx].charge() <= MAX_CHARGE =>
                {
                    survivors[idx].merge_with(&mut cursor);
                    summary.merged += 1;
                }
                Some(idx) => {
                    if cursor.charge() < survivors[idx].charge() {
                        tracked.insert(pos, survivors.len());
                    }
                    survivors.push(cursor);
                }
            }
        }

        for pos in positions {
            let total = totals.get(&pos).copied().unwrap_or(0);
            let faces = tracked.get(&pos).and_then(|&idx| survivors[idx].faces());
            if let (true, Some(faces)) = (total > 0, faces) {
                let payload = (feedback_intensity(total) << INTENSITY_SHIFT) + faces.pack();
                world.emit_event(WorldEvent::ChargeFeedback, pos, payload);
                summary.feedback_events += 1;
            }
        }

        summary.survivors = survivors.len() as u32;
        self.cursors = survivors;

        log::debug!(
            "spreader tick: {} survivors, {} expired, {} merged",
            summary.survivors,
            summary.expired,
            summary.merged
        );
        summary
    }

    /// Snapshot of the cursor list for persistence.
    pub fn save(&self) -> Vec<ChargeCursor> {
        self.cursors.clone()
    }

    /// Replace the cursor list, keeping at most the first `MAX_CURSORS`.
    pub fn load(&mut self, cursors: impl IntoIterator<Item = ChargeCursor>) {
        self.cursors.clear();
        for cursor in cursors.into_iter().take(MAX_CURSORS) {
            self.add_cursor(cursor);
        }
    }
}

/// Coarse intensity for a cell's pooled charge: `floor(ln(1 + charge) / 2.3) + 1`.
pub fn feedback_intensity(total_charge: i32) -> u32 {
    let total = total_charge.max(0) as f64;
    (total.ln_1p() / INTENSITY_LOG_DIVISOR).floor() as u32 + 1
}
