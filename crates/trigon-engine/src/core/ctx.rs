use winit::window::Window;

use crate::device::{Gpu, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::{FrameStats, RenderCtx, RenderTarget};

use super::app::AppControl;

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
    /// Zero-based index of the frame, counting presented frames only.
    pub frame_index: u64,
    /// Draws recorded by `render` during this frame.
    pub stats: FrameStats,
    /// Set when the surface reported an unrecoverable error.
    pub(crate) surface_fatal: bool,
    /// Set once `render` has submitted and presented.
    pub(crate) presented: bool,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    pub fn new(window: &'a Window, gpu: &'a mut Gpu<'w>, frame_index: u64) -> Self {
        Self {
            window,
            gpu,
            frame_index,
            stats: FrameStats::default(),
            surface_fatal: false,
            presented: false,
        }
    }

    pub fn render_ctx(&self) -> RenderCtx<'_> {
        RenderCtx::new(self.gpu.device(), self.gpu.queue(), self.gpu.surface_format())
    }

    /// Clears the surface with `clear`, calls `draw` with a ready [`RenderCtx`]
    /// and [`RenderTarget`], then presents the frame.
    ///
    /// Frames are skipped while the window has no drawable area or the
    /// surface reports a transient error. Returns `Exit` only on a fatal
    /// surface error.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        if !self.gpu.is_drawable() {
            return AppControl::Continue;
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                if self.gpu.handle_surface_error(err) == SurfaceErrorAction::Fatal {
                    self.surface_fatal = true;
                    return AppControl::Exit;
                }
                return AppControl::Continue;
            }
        };

        // Clear pass; dropped before the draw closure borrows the encoder.
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("trigon clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        let rctx = RenderCtx::new(self.gpu.device(), self.gpu.queue(), self.gpu.surface_format());

        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view, &mut self.stats);
            draw(&rctx, &mut target);
        }

        self.window.pre_present_notify();
        self.gpu.submit(frame);
        self.presented = true;

        AppControl::Continue
    }
}
