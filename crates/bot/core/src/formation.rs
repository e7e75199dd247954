//! Row-based formation geometry behind a controller.
//!
//! Tanks take the front row, melee the middle row, and ranged/healers spread
//! into wings on the back row. Rows are laid out opposite to the
//! controller's facing.

use crate::config::MovementConfig;
use crate::types::{Position, Role};

/// Formation row, front to back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum FormationRow {
    Front,
    Middle,
    Back,
}

impl FormationRow {
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Tank => FormationRow::Front,
            Role::MeleeDps => FormationRow::Middle,
            Role::Healer | Role::RangedDps => FormationRow::Back,
        }
    }

    /// Rows between this one and the front row.
    const fn depth(self) -> u8 {
        self as u8
    }
}

/// Place of one bot inside the formation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormationSlot {
    pub row: FormationRow,
    /// Position inside the row, in registration order.
    pub index: usize,
    /// Number of bots sharing the row.
    pub row_size: usize,
}

/// Assigns one slot per role, preserving input order.
pub fn assign_slots(roles: &[Role]) -> Vec<FormationSlot> {
    let mut sizes = [0usize; 3];
    for role in roles {
        sizes[FormationRow::for_role(*role).depth() as usize] += 1;
    }

    let mut next = [0usize; 3];
    roles
        .iter()
        .map(|role| {
            let row = FormationRow::for_role(*role);
            let depth = row.depth() as usize;
            let index = next[depth];
            next[depth] += 1;
            FormationSlot {
                row,
                index,
                row_size: sizes[depth],
            }
        })
        .collect()
}

/// World position of `slot` for a controller at `anchor` facing `facing`.
pub fn slot_point(
    anchor: Position,
    facing: f32,
    slot: FormationSlot,
    config: &MovementConfig,
) -> Position {
    let behind = config.follow_distance + f32::from(slot.row.depth()) * config.row_spacing;
    let lateral = match slot.row {
        FormationRow::Front | FormationRow::Middle => {
            let center = slot.row_size.saturating_sub(1) as f32 / 2.0;
            (slot.index as f32 - center) * config.lateral_spacing
        }
        FormationRow::Back => {
            // Wings alternate right then left, widening every pair.
            let reach = (slot.index / 2 + 1) as f32 * config.lateral_spacing;
            if slot.index % 2 == 0 { -reach } else { reach }
        }
    };
    anchor.offset(facing, behind, lateral)
}
