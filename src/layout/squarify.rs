use super::row::layout_row;
use super::{Container, Item, Rect};

/// Running aggregates of the open row, so each candidate costs O(1).
#[derive(Debug, Clone, Copy)]
struct RowStats {
    sum: f64,
    min: f64,
    max: f64,
}

impl RowStats {
    const EMPTY: RowStats = RowStats {
        sum: 0.0,
        min: f64::INFINITY,
        max: 0.0,
    };

    fn with(self, weight: f64) -> RowStats {
        RowStats {
            sum: self.sum + weight,
            min: self.min.min(weight),
            max: self.max.max(weight),
        }
    }

    fn worst(&self, side: f64) -> f64 {
        worst_aspect_ratio(self.sum, self.min, self.max, side)
    }
}

/// Worst aspect ratio among the tiles of a row with the given aggregates if
/// it were laid out along `side` now (Bruls, Huizing & van Wijk).
pub fn worst_aspect_ratio(sum: f64, min: f64, max: f64, side: f64) -> f64 {
    if sum <= 0.0 || side <= 0.0 {
        return f64::MAX;
    }
    let side_sq = side * side;
    let sum_sq = sum * sum;
    let a = (side_sq * max) / sum_sq;
    let b = sum_sq / (side_sq * min);
    let worst = a.max(b);
    // inf / inf once side² and sum² both overflow
    if worst.is_nan() {
        return f64::MAX;
    }
    worst
}

/// Greedy row partitioning of normalized items (weights already in area
/// units, sorted descending) into `container`.
///
/// An item joins the open row only if it strictly lowers the row's worst
/// aspect ratio. A tie closes the row.
pub fn squarify<K, P>(items: Vec<Item<K, P>>, mut container: Container) -> Vec<Rect<K, P>> {
    let mut rects = Vec::with_capacity(items.len());
    let mut row: Vec<Item<K, P>> = Vec::new();
    let mut stats = RowStats::EMPTY;

    for item in items {
        let side = container.short_side();
        let extended = stats.with(item.weight);

        if row.is_empty() || extended.worst(side) < stats.worst(side) {
            row.push(item);
            stats = extended;
            continue;
        }

        tracing::trace!(
            "Row of {} closed (sum={:.2}, side={:.2}, worst={:.3})",
            row.len(),
            stats.sum,
            side,
            stats.worst(side)
        );
        container = layout_row(&mut row, side, container, &mut rects);
        stats = RowStats::EMPTY.with(item.weight);
        row.push(item);
    }

    if !row.is_empty() {
        let side = container.short_side();
        tracing::trace!("Flushing final row of {} (sum={:.2})", row.len(), stats.sum);
        layout_row(&mut row, side, container, &mut rects);
    }

    rects
}
