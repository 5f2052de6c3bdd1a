//! Hand-off boundary between merged rectangles and a physics engine.
//!
//! The core never creates physics bodies itself. Each merged rectangle is
//! turned into a [`StaticBox`] request and passed to a [`StaticBodyFactory`]
//! supplied by the caller. Material properties (friction, density,
//! restitution) belong to the factory, not to the request.

use crate::rect::Rect;

/// Request for one static, axis-aligned box volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticBox {
    /// Centre of the box in world space.
    pub center: (f32, f32),
    /// Half width and half height.
    pub half_extents: (f32, f32),
}

impl StaticBox {
    pub fn from_rect(rect: &Rect) -> Self {
        Self {
            center: rect.center(),
            half_extents: rect.half_extents(),
        }
    }

    /// Recovers the rectangle this box covers.
    pub fn to_rect(&self) -> Rect {
        let (cx, cy) = self.center;
        let (hx, hy) = self.half_extents;
        Rect::new(cx - hx, cy - hy, hx * 2.0, hy * 2.0)
    }
}

impl From<Rect> for StaticBox {
    fn from(rect: Rect) -> Self {
        Self::from_rect(&rect)
    }
}

/// Physics collaborator that turns box requests into engine bodies.
///
/// `Handle` is opaque to the core; it is only stored and returned in
/// request order.
pub trait StaticBodyFactory {
    type Handle;

    fn create_static_box(&mut self, request: &StaticBox) -> Self::Handle;
}

/// Records every request. Useful as a stand-in collaborator.
#[derive(Debug, Default, Clone)]
pub struct RecordingFactory {
    pub requests: Vec<StaticBox>,
}

impl StaticBodyFactory for RecordingFactory {
    type Handle = usize;

    fn create_static_box(&mut self, request: &StaticBox) -> usize {
        self.requests.push(*request);
        self.requests.len() - 1
    }
}
