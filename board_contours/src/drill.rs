//! Driver for merging circular drill hits into a board outline.
//!
//! Overlapping drills are first unioned with each other into compound
//! groups, then each group is removed from the board: boundary-crossing
//! groups notch the ring, interior groups become cutouts or isolated drill
//! holes.

use crate::core::traits::Real;
use crate::error::OutlineError;
use crate::outline::{Outline, OutlineOpResult};
use crate::segment::{Segment, SegmentKind};

/// Applies a batch of circular drills to `board`.
///
/// Every drill must be a full circle. Duplicate or otherwise degenerate
/// drill geometry fails the whole batch; the board is only modified once
/// grouping has succeeded, and each group application rolls back on its own
/// failure.
pub fn apply_drills<T>(board: &mut Outline<T>, drills: Vec<Segment<T>>) -> Result<(), OutlineError>
where
    T: Real,
{
    let mut groups: Vec<Outline<T>> = Vec::with_capacity(drills.len());
    for drill in drills {
        if drill.kind() != SegmentKind::Circle {
            return Err(OutlineError::InvalidGeometry(
                "drill must be a full circle".into(),
            ));
        }
        let mut group = Outline::new();
        group.add_segment(drill)?;
        groups.push(group);
    }

    // union overlapping groups until no pair merges; a merged group is
    // re-scanned since its grown boundary may now reach further drills
    let mut changed = true;
    while changed {
        changed = false;
        let mut i = 0;
        'groups: while i < groups.len() {
            let mut j = i + 1;
            while j < groups.len() {
                let candidate = groups.remove(j);
                match groups[i].add_outline(candidate)? {
                    OutlineOpResult::Merged => {
                        tracing::debug!(group = i, "merged overlapping drills");
                        changed = true;
                        continue 'groups;
                    }
                    OutlineOpResult::Untouched(o) => {
                        groups.insert(j, o);
                        j += 1;
                    }
                }
            }
            i += 1;
        }
    }

    tracing::debug!(groups = groups.len(), "applying drill groups to board");
    for group in groups {
        if group.segments().len() == 1 && group.segments()[0].kind() == SegmentKind::Circle {
            let circle = group.segments()[0];
            board.add_cutout_circle(circle)?;
        } else {
            board.add_cutout(group)?;
        }
    }
    Ok(())
}
