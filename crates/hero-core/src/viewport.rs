use crate::constants::*;

/// Browser viewport snapshot, read at init and on resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn aspect(&self) -> f32 {
        self.width as f32 / (self.height.max(1)) as f32
    }

    pub fn layout(&self) -> Layout {
        Layout::classify(self.width)
    }

    /// Backing-store size in physical pixels, with the pixel ratio capped.
    pub fn backing_size(&self) -> (u32, u32) {
        let dpr = self.device_pixel_ratio.min(DEVICE_PIXEL_RATIO_MAX).max(0.0);
        let w = (self.width as f64 * dpr) as u32;
        let h = (self.height as f64 * dpr) as u32;
        (w.max(1), h.max(1))
    }
}

/// Responsive layout class; a pure function of viewport width, so re-applying
/// the same viewport is a no-op and a class change is observable exactly once
/// per breakpoint crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Desktop,
    Mobile,
}

impl Layout {
    pub fn classify(width_px: u32) -> Self {
        if width_px < MOBILE_BREAKPOINT_PX {
            Layout::Mobile
        } else {
            Layout::Desktop
        }
    }

    pub fn mesh_scale(self) -> f32 {
        match self {
            Layout::Desktop => DESKTOP_MESH_SCALE,
            Layout::Mobile => MOBILE_MESH_SCALE,
        }
    }

    pub fn camera_z(self) -> f32 {
        match self {
            Layout::Desktop => DESKTOP_CAMERA_Z,
            Layout::Mobile => MOBILE_CAMERA_Z,
        }
    }
}
