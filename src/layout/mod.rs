mod normalize;
mod row;
mod squarify;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::weights::{weight_from_category, Category, WeightTable};

pub use normalize::{is_layout_weight, normalize};
pub use row::layout_row;
pub use squarify::{squarify, worst_aspect_ratio};

/// A weighted item to be laid out. `payload` is carried through to the
/// output rectangle untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item<K, P = ()> {
    pub id: K,
    pub weight: f64,
    #[serde(default)]
    pub payload: Option<P>,
}

impl<K, P> Item<K, P> {
    pub fn new(id: K, weight: f64) -> Self {
        Self {
            id,
            weight,
            payload: None,
        }
    }

    /// Build an item whose weight comes from the caller's category table.
    pub fn from_category(id: K, category: Category, table: &WeightTable) -> Self {
        Self::new(id, weight_from_category(category, table))
    }

    pub fn with_payload(mut self, payload: P) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Axis-aligned region being partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Container {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn at_origin(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Length of the shorter side. Rows are measured along this axis.
    pub fn short_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Finite origin, strictly positive finite dimensions, and an area that
    /// neither overflows nor underflows to zero.
    pub fn is_valid(&self) -> bool {
        let area = self.area();
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
            && area.is_finite()
            && area > 0.0
    }
}

/// A positioned tile in the treemap output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<K, P = ()> {
    pub id: K,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub payload: Option<P>,
}

impl<K, P> Rect<K, P> {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Long side over short side (1.0 = square).
    pub fn aspect_ratio(&self) -> f64 {
        let (long, short) = if self.width >= self.height {
            (self.width, self.height)
        } else {
            (self.height, self.width)
        };
        if short <= 0.0 {
            return f64::INFINITY;
        }
        long / short
    }

    /// Half-open containment: shared edges belong to the right/lower tile,
    /// so a point inside the container hits exactly one tile.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid container {width}x{height}: dimensions and area must be finite and positive")]
    InvalidContainer { width: f64, height: f64 },
}

/// Lay out `items` inside a `width` x `height` container anchored at (0, 0).
///
/// Items with a non-positive weight are dropped. Empty (or fully filtered)
/// input yields an empty list.
pub fn layout<K, P, I>(items: I, width: f64, height: f64) -> Result<Vec<Rect<K, P>>, LayoutError>
where
    I: IntoIterator<Item = Item<K, P>>,
{
    layout_in(items, Container::at_origin(width, height))
}

/// Same as [`layout`], for a container with an arbitrary origin.
pub fn layout_in<K, P, I>(items: I, container: Container) -> Result<Vec<Rect<K, P>>, LayoutError>
where
    I: IntoIterator<Item = Item<K, P>>,
{
    if !container.is_valid() {
        return Err(LayoutError::InvalidContainer {
            width: container.width,
            height: container.height,
        });
    }

    let normalized = normalize(items, container.area());
    if normalized.is_empty() {
        tracing::debug!(
            "No positive-weight items for {:.1}x{:.1} container",
            container.width,
            container.height
        );
        return Ok(Vec::new());
    }

    tracing::debug!(
        "Laying out {} items in {:.1}x{:.1} container at ({:.1}, {:.1})",
        normalized.len(),
        container.width,
        container.height,
        container.x,
        container.y
    );

    Ok(squarify(normalized, container))
}

/// First tile containing the point, if any.
pub fn hit_test<K, P>(rects: &[Rect<K, P>], px: f64, py: f64) -> Option<&Rect<K, P>> {
    rects.iter().find(|r| r.contains(px, py))
}
