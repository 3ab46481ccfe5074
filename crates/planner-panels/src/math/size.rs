//! 2D extent

use serde::{Deserialize, Serialize};

/// Width and height in viewport pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Component-wise clamp between `min` and an optional `max`.
    ///
    /// `min` wins when the two bounds disagree.
    pub fn clamp(self, min: Size, max: Option<Size>) -> Size {
        let (mut width, mut height) = (self.width, self.height);
        if let Some(max) = max {
            width = width.min(max.width);
            height = height.min(max.height);
        }
        Size::new(width.max(min.width), height.max(min.height))
    }

    /// True if this size fits inside `other` on both axes
    pub fn fits_within(self, other: Size) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}
