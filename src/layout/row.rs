use super::{Container, Item, Rect};

/// Place a finalized row inside `container` and return what is left of it.
/// The row is drained.
///
/// `side` is the container's shorter dimension. The row spans that side
/// with thickness `sum / side`; each item gets `weight / thickness` along
/// it. The remaining container loses `thickness` on the other axis.
///
/// Thickness never exceeds the container's long side and extents never
/// run past `side`. Once the container has collapsed (`side <= 0`), items
/// get zero-extent tiles on its edge.
pub fn layout_row<K, P>(
    row: &mut Vec<Item<K, P>>,
    side: f64,
    container: Container,
    out: &mut Vec<Rect<K, P>>,
) -> Container {
    let row_sum: f64 = row.iter().map(|item| item.weight).sum();
    let long = container.width.max(container.height);
    let thickness = if side > 0.0 {
        (row_sum / side).min(long)
    } else {
        0.0
    };
    if thickness == 0.0 && row_sum > 0.0 {
        tracing::trace!("Container collapsed, {} items get empty tiles", row.len());
    }

    // Horizontal strip across the top when the width is the short side,
    // vertical column down the left otherwise.
    let horizontal = container.width <= container.height;

    let mut offset = 0.0;
    for item in row.drain(..) {
        // Capped at what is left of the side: a subnormal thickness can
        // overshoot it.
        let extent = if thickness > 0.0 {
            (item.weight / thickness).min((side - offset).max(0.0))
        } else {
            0.0
        };
        let rect = if horizontal {
            Rect {
                id: item.id,
                x: container.x + offset,
                y: container.y,
                width: extent,
                height: thickness,
                payload: item.payload,
            }
        } else {
            Rect {
                id: item.id,
                x: container.x,
                y: container.y + offset,
                width: thickness,
                height: extent,
                payload: item.payload,
            }
        };
        out.push(rect);
        offset += extent;
    }

    if horizontal {
        Container {
            y: container.y + thickness,
            height: (container.height - thickness).max(0.0),
            ..container
        }
    } else {
        Container {
            x: container.x + thickness,
            width: (container.width - thickness).max(0.0),
            ..container
        }
    }
}
