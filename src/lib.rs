// Public library interface for taskmap.
// The debug-layout tool uses the same modules.

pub mod layout;
pub mod weights;

pub use layout::{hit_test, is_layout_weight, layout, layout_in, Container, Item, LayoutError, Rect};
pub use weights::{weight_from_category, Category, ParseCategoryError, WeightTable};
