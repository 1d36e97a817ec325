//! Line module - the one-dimensional slide-and-merge pass
//!
//! This is the only merge logic in the system. Every directional move is a
//! re-projection of this pass over rows or columns, so it must be correct
//! in isolation.

use crate::types::GRID_SIZE;

/// Slide a single lane toward index 0, merging equal neighbors.
///
/// The lane is given in the direction of travel: index 0 is the edge tiles
/// move toward. Non-zero values compact toward index 0 in order; a freshly
/// placed value equal to the previous compacted slot doubles that slot
/// instead of occupying a new one. A slot that has absorbed a merge never
/// merges again in the same pass, so `[2, 2, 4]` packs to `[4, 4]` rather
/// than collapsing to `[8]`.
///
/// Returns true if any cell changed or any merge occurred.
pub fn slide_and_merge(lane: &mut [u32; GRID_SIZE]) -> bool {
    let mut packed = [0u32; GRID_SIZE];
    let mut write = 0;
    let mut merged_slot = usize::MAX;
    let mut merged = false;

    for &value in lane.iter() {
        if value == 0 {
            continue;
        }
        if write > 0 && packed[write - 1] == value && merged_slot != write - 1 {
            packed[write - 1] = value * 2;
            merged_slot = write - 1;
            merged = true;
        } else {
            packed[write] = value;
            write += 1;
        }
    }

    // A merge counts as a change even without a net positional difference.
    let changed = merged || *lane != packed;
    *lane = packed;
    changed
}
