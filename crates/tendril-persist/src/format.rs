//! On-disk shape of a persisted cursor.
//!
//! A cursor document is a RON list of records:
//!
//! ```ron
//! [
//!     (pos: (4, 64, -2), charge: 250, decay_delay: 1, update_delay: 0, facings: None),
//!     (pos: (5, 64, -2), charge: 80, facings: Some(["down", "east"])),
//! ]
//! ```
//!
//! Numeric fields are wide so out-of-range values survive parsing and get
//! clamped instead of failing the record.

use glam::IVec3;
use serde::{Deserialize, Serialize};
use tendril_core::direction::{Face, FaceSet};
use tendril_sim::ChargeCursor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorRecord {
    pub pos: (i32, i32, i32),
    pub charge: i64,
    #[serde(default)]
    pub decay_delay: i64,
    #[serde(default)]
    pub update_delay: i64,
    #[serde(default)]
    pub facings: Option<Vec<String>>,
}

impl CursorRecord {
    pub fn from_cursor(cursor: &ChargeCursor) -> Self {
        let pos = cursor.pos();
        Self {
            pos: (pos.x, pos.y, pos.z),
            charge: cursor.charge() as i64,
            decay_delay: cursor.decay_delay() as i64,
            update_delay: cursor.update_delay() as i64,
            facings: cursor
                .faces()
                .map(|faces| faces.iter().map(|f| f.name().to_string()).collect()),
        }
    }

    /// Rebuild the cursor, clamping numeric fields. Fails on an unknown
    /// facing name.
    pub fn to_cursor(&self) -> Result<ChargeCursor, String> {
        let faces = match &self.facings {
            None => None,
            Some(names) => {
                let mut set = FaceSet::EMPTY;
                for name in names {
                    let face =
                        Face::from_name(name).ok_or_else(|| format!("unknown facing '{name}'"))?;
                    set.insert(face);
                }
                Some(set)
            }
        };

        let (x, y, z) = self.pos;
        Ok(ChargeCursor::restored(
            IVec3::new(x, y, z),
            narrow(self.charge),
            narrow(self.decay_delay),
            narrow(self.update_delay),
            faces,
        ))
    }
}

fn narrow(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
