//! Two-pass greedy rectangle merging.
//!
//! 1. [`merge_horizontal`]: run-length merge of flush rectangles inside each row.
//! 2. [`merge_vertical`]: stack same-column runs on top of each other.
//!
//! The result is a reduced, not minimal, disjoint cover of the input. The
//! greedy order is deliberate: a true minimum rectangle cover is much more
//! work and collision setup only needs fewer boxes. The vertical pass is
//! O(n²) in the number of row runs, which is fine at map scale since it runs
//! once at load time.
//!
//! Both passes sort their input first, so the output does not depend on the
//! order in which rectangles were supplied.

use crate::rect::Rect;

/// Orders by `y`, then `x`, using the IEEE total order so sorting never panics.
fn row_major(a: &Rect, b: &Rect) -> std::cmp::Ordering {
    a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x))
}

/// Merges horizontally flush rectangles that share a row band.
///
/// Rows are grouped by exact `y` after sorting, so no float is ever used as a
/// hash key. Within a row, rectangles are visited left to right and folded
/// into an accumulator while each next one is row-adjacent to it.
pub fn merge_horizontal(rects: &[Rect]) -> Vec<Rect> {
    let mut sorted = rects.to_vec();
    sorted.sort_by(row_major);

    let mut merged = Vec::with_capacity(sorted.len());
    for row in sorted.chunk_by(|a, b| a.y == b.y) {
        let mut current = row[0];
        for next in &row[1..] {
            if current.is_row_adjacent_to(next) {
                current.width += next.width;
            } else {
                merged.push(current);
                current = *next;
            }
        }
        merged.push(current);
    }

    merged
}

/// Merges vertically stacked rectangles with identical `x` and `width`.
///
/// Each unconsumed base absorbs every later rectangle sitting exactly on its
/// current top edge. The base grows as it absorbs, so a whole column of equal
/// runs collapses into one rectangle in a single scan.
pub fn merge_vertical(rects: &[Rect]) -> Vec<Rect> {
    let mut sorted = rects.to_vec();
    sorted.sort_by(row_major);

    let mut used = vec![false; sorted.len()];
    let mut merged = Vec::with_capacity(sorted.len());

    for i in 0..sorted.len() {
        if used[i] {
            continue;
        }
        let mut base = sorted[i];

        for j in (i + 1)..sorted.len() {
            if used[j] {
                continue;
            }
            let check = sorted[j];
            if base.is_column_adjacent_to(&check) {
                base.height += check.height;
                used[j] = true;
            }
        }

        merged.push(base);
    }

    merged
}

/// Runs the horizontal pass followed by the vertical pass.
pub fn merge_rects(rects: &[Rect]) -> Vec<Rect> {
    let horizontal = merge_horizontal(rects);
    let vertical = merge_vertical(&horizontal);
    log::debug!(
        "Merged {} rects: {} after horizontal pass, {} after vertical pass",
        rects.len(),
        horizontal.len(),
        vertical.len()
    );
    vertical
}
