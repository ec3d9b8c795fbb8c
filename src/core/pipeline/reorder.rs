//! Reorder Legality.
//!
//! Moving an instruction earlier is only safe if it has no dependency at all
//! (RAW in either direction, WAR, WAW) with any instruction it crosses. The
//! check covers the whole crossed span, not just the neighbour. Control
//! transfers, bubbles and malformed lines pin the stream: nothing moves
//! across them and they are never moved themselves.

use tracing::trace;

use crate::core::pipeline::hazards::{has_raw, independent};
use crate::core::pipeline::policy::HazardContext;
use crate::isa::Instruction;

/// Checks whether `candidate` may move to the slot right after `producer`.
///
/// # Arguments
///
/// * `program` - The input instruction stream
/// * `pending` - Positions not yet emitted; emitted ones are not crossed
/// * `producer` - Position the candidate will follow
/// * `candidate` - Position of the instruction to move
///
/// # Returns
///
/// `true` if every pending instruction strictly between `producer` and
/// `candidate` is movable and independent of the candidate.
pub fn can_reorder(
    program: &[Instruction],
    pending: &[bool],
    producer: usize,
    candidate: usize,
) -> bool {
    let Some(moved) = program.get(candidate) else {
        return false;
    };
    if candidate <= producer || !moved.is_movable() {
        return false;
    }

    (producer + 1..candidate)
        .filter(|&k| pending[k])
        .all(|k| {
            let crossed = &program[k];
            crossed.is_movable() && independent(crossed, moved)
        })
}

/// Searches for an instruction to fill the slot after the producer.
///
/// Candidates are pending instructions after the consumer, scanned left to
/// right up to `reorder_window` positions from the producer. A candidate must
/// not read the producer's result and must pass [`can_reorder`]. The first
/// legal candidate wins.
///
/// # Returns
///
/// The input position of the filler, or `None` if no legal reorder exists.
pub fn find_filler(ctx: &HazardContext<'_>) -> Option<usize> {
    let producer = &ctx.program[ctx.producer];
    let limit = ctx
        .producer
        .saturating_add(ctx.reorder_window)
        .saturating_add(1)
        .min(ctx.program.len());

    for idx in ctx.consumer + 1..limit {
        if !ctx.pending[idx] {
            continue;
        }
        let candidate = &ctx.program[idx];
        if !candidate.is_movable() {
            // Every later candidate would have to cross this one.
            break;
        }
        if has_raw(producer, candidate) {
            continue;
        }
        if can_reorder(ctx.program, ctx.pending, ctx.producer, idx) {
            return Some(idx);
        }
        trace!(producer = ctx.producer, candidate = idx, "reorder rejected");
    }
    None
}
