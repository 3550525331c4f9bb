//! Basic value types projected out of the raw tracker structures

use tracker_meta_sys::NvOSD_RectParams;

/// Bounding box of a tracked object, in tracker coordinate space
///
/// A plain-value projection of the geometry fields of `NvOSD_RectParams`;
/// the OSD color fields of the raw structure are not carried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectParams {
    /// Left coordinate
    pub left: f32,
    /// Top coordinate
    pub top: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl RectParams {
    /// Create a new rectangle with the given dimensions
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Get the right coordinate
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Get the bottom coordinate
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Get the center point
    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Check if a point is inside the rectangle
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }

    /// Get the area of the rectangle
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

impl From<&NvOSD_RectParams> for RectParams {
    fn from(raw: &NvOSD_RectParams) -> Self {
        Self {
            left: raw.left,
            top: raw.top,
            width: raw.width,
            height: raw.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_helpers() {
        let r = RectParams::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), (25.0, 40.0));
        assert_eq!(r.area(), 1200.0);
        assert!(r.contains(10.0, 20.0));
        assert!(r.contains(40.0, 60.0));
        assert!(!r.contains(41.0, 20.0));
    }
}
