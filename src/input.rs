//! Pointer and viewport tracking
//!
//! Window events are folded into the session's pointer and viewport
//! state here. Everything runs on the event-loop thread; last write
//! wins, no synchronization.

use crate::gpu::GpuContext;
use crate::session::RenderSession;

/// Current drawable size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    pub width: u32,
    pub height: u32,
}

impl ViewportState {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Record a new size. Returns true only when the stored size
    /// actually changed; zero-dimension updates are ignored.
    pub fn apply(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        if width == self.width && height == self.height {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    pub fn as_f32(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }
}

/// Last observed pointer position in render coordinates (origin
/// bottom-left, y flipped from window coordinates).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Record a pointer position given in window coordinates.
    pub fn record(&mut self, x: f32, window_y: f32, drawable_height: u32) {
        self.x = x;
        self.y = drawable_height as f32 - window_y;
    }

    pub fn as_f32(&self) -> [f32; 2] {
        [self.x, self.y]
    }
}

/// Fold a cursor-move event into the session.
pub fn handle_pointer_moved(session: &mut RenderSession, x: f64, y: f64) {
    let height = session.viewport.height;
    session.pointer.record(x as f32, y as f32, height);
}

/// Fold a resize notification into the session. The surface is only
/// reconfigured when the drawable size actually changed.
pub fn handle_resize(session: &mut RenderSession, gpu: &GpuContext, width: u32, height: u32) {
    if session.resize(&gpu.device, width, height) {
        log::debug!("Resized drawable to {}x{}", width, height);
    }
}
