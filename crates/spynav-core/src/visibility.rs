//! Most-visible-section evaluation.

use tracing::trace;

use crate::geometry::PaneGeometry;

/// Rows of tolerance at the scroll extremes. Within one row of the start the
/// first section wins outright, within one row of the end the last one does;
/// rounding in the measured geometry can otherwise report the edge sections
/// at less than full visibility.
const EDGE_TOLERANCE: u16 = 1;

/// Index of the section occupying the largest visible fraction of the
/// content viewport, or `None` when no section has measured bounds yet.
///
/// Ties keep the earliest index: the scan runs in index order and a later
/// section must be strictly more visible to displace the current best.
pub fn most_visible(geometry: &PaneGeometry) -> Option<usize> {
    let count = geometry.sections.len();
    if count == 0 {
        return None;
    }

    if geometry.offset <= EDGE_TOLERANCE {
        return Some(0);
    }
    if geometry.offset.saturating_add(EDGE_TOLERANCE) >= geometry.max_offset {
        return Some(count - 1);
    }

    let mut best: Option<(usize, f64)> = None;
    for (index, bounds) in geometry.sections.iter().enumerate() {
        let Some(bounds) = bounds else { continue };
        let fraction = bounds.visible_fraction(geometry.viewport_height);
        trace!(index, fraction, "section visibility");
        if best.map_or(true, |(_, best_fraction)| fraction > best_fraction) {
            best = Some((index, fraction));
        }
    }

    best.map(|(index, _)| index)
}
