use trigon_engine::core::{App, AppControl, FrameCtx};
use trigon_engine::paint::Color;
use trigon_engine::render::triangle::TriangleRenderer;
use trigon_engine::render::RenderCtx;

/// Dark blue-grey background.
pub const BACKGROUND: Color = Color::rgb(0.07, 0.13, 0.17);

/// Clears to [`BACKGROUND`] and draws the static triangle, every frame.
#[derive(Default)]
pub struct TriangleApp {
    renderer: Option<TriangleRenderer>,
}

impl TriangleApp {
    pub fn new() -> Self {
        Self::default()
    }
}

impl App for TriangleApp {
    fn on_start(&mut self, ctx: &RenderCtx<'_>) {
        let mut renderer = TriangleRenderer::new();
        renderer.prepare(ctx);
        log::debug!(
            "shader program linked, {} vertices uploaded",
            TriangleRenderer::DRAW.vertex_count()
        );
        self.renderer = Some(renderer);
    }

    fn clear_color(&self) -> Color {
        BACKGROUND
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let renderer = self.renderer.get_or_insert_with(TriangleRenderer::new);
        ctx.render(BACKGROUND, |rctx, target| renderer.render(rctx, target))
    }

    fn on_exit(&mut self) {
        // Pipeline and vertex buffer go before the graphics context.
        self.renderer = None;
    }
}
