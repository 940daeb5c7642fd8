use winit::event::WindowEvent;

use crate::paint::Color;
use crate::render::RenderCtx;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by `window::Runtime`.
pub trait App {
    /// Called once after the window and graphics context exist, before the
    /// first frame. GPU resources that live for the whole run are built here.
    fn on_start(&mut self, ctx: &RenderCtx<'_>) {
        let _ = ctx;
    }

    /// Color for the priming frame presented before the loop starts.
    fn clear_color(&self) -> Color {
        Color::BLACK
    }

    /// Called for every window event before the runtime handles it.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per loop iteration.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Called once after the loop ends, while the graphics context is still alive.
    fn on_exit(&mut self) {}
}
