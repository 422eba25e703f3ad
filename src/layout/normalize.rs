use super::Item;

/// Whether a raw weight takes part in layout: positive and finite.
pub fn is_layout_weight(weight: f64) -> bool {
    weight > 0.0 && weight.is_finite()
}

/// Drop unusable weights and rescale the rest so they sum to `area`.
///
/// When the plain total overflows, weights are first divided by the
/// largest one so the total stays finite.
///
/// The result is sorted by weight, descending. The sort is stable so equal
/// weights keep their input order, which keeps the layout deterministic.
pub fn normalize<K, P, I>(items: I, area: f64) -> Vec<Item<K, P>>
where
    I: IntoIterator<Item = Item<K, P>>,
{
    let mut kept: Vec<Item<K, P>> = items
        .into_iter()
        .filter(|item| {
            if is_layout_weight(item.weight) {
                return true;
            }
            if item.weight <= 0.0 {
                tracing::trace!("Dropping item with non-positive weight {}", item.weight);
            } else {
                tracing::warn!("Dropping item with non-finite weight {}", item.weight);
            }
            false
        })
        .collect();

    if kept.is_empty() {
        return Vec::new();
    }

    let total: f64 = kept.iter().map(|item| item.weight).sum();
    if total.is_finite() {
        for item in &mut kept {
            item.weight = item.weight / total * area;
        }
    } else {
        let max = kept.iter().map(|item| item.weight).fold(0.0, f64::max);
        let scaled_total: f64 = kept.iter().map(|item| item.weight / max).sum();
        tracing::debug!("Total weight overflowed, rescaling {} items by {:e}", kept.len(), max);
        for item in &mut kept {
            item.weight = item.weight / max / scaled_total * area;
        }
    }
    kept.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    kept
}
