use wgpu::util::DeviceExt;

use crate::geometry::{Vertex, EQUILATERAL_TRIANGLE, TRIANGLE_VERTEX_COUNT};
use crate::render::{DrawCall, RenderCtx, RenderTarget};

const SHADER_SRC: &str = include_str!("shaders/triangle.wgsl");

/// Renders the static equilateral triangle.
///
/// Owns the linked shader program (render pipeline) and the vertex buffer.
/// Both are created on first use; the pipeline is rebuilt only if the
/// surface format changes. The vertex buffer is uploaded once and never
/// written again.
#[derive(Default)]
pub struct TriangleRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    vertex_buffer: Option<wgpu::Buffer>,
}

impl TriangleRenderer {
    /// The one draw issued per frame.
    pub const DRAW: DrawCall = DrawCall::vertices(TRIANGLE_VERTEX_COUNT);

    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles the shaders and uploads the geometry ahead of the first frame.
    pub fn prepare(&mut self, ctx: &RenderCtx<'_>) {
        self.ensure_pipeline(ctx);
        self.ensure_vertex_buffer(ctx);
    }

    /// Draws the triangle into `target` on top of whatever it already holds.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.prepare(ctx);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("trigon triangle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
        target.stats.issue(&mut rpass, &Self::DRAW);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("trigon triangle shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SRC.into()),
        });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("trigon triangle pipeline layout"),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("trigon triangle pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("triangle pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
    }

    fn ensure_vertex_buffer(&mut self, ctx: &RenderCtx<'_>) {
        if self.vertex_buffer.is_some() {
            return;
        }

        self.vertex_buffer = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("trigon triangle vbo"),
            contents: bytemuck::cast_slice(&EQUILATERAL_TRIANGLE),
            usage: wgpu::BufferUsages::VERTEX,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::render::FrameStats;

    /// Fill color baked into the fragment stage.
    const FILL: Color = Color::rgb(0.8, 0.3, 0.02);

    #[test]
    fn one_draw_of_three_vertices() {
        assert_eq!(TriangleRenderer::DRAW.vertices, 0..3);
        assert_eq!(TriangleRenderer::DRAW.instances, 0..1);

        let mut stats = FrameStats::default();
        stats.record(&TriangleRenderer::DRAW);
        assert_eq!(stats, FrameStats { draw_calls: 1, vertices: 3 });
    }

    #[test]
    fn draw_covers_every_uploaded_vertex() {
        assert_eq!(
            TriangleRenderer::DRAW.vertex_count() as usize,
            EQUILATERAL_TRIANGLE.len()
        );
    }

    #[test]
    fn shader_entry_points_match_pipeline() {
        assert!(SHADER_SRC.contains("fn vs_main"));
        assert!(SHADER_SRC.contains("fn fs_main"));
        assert!(SHADER_SRC.contains(&format!("@location({})", Vertex::POSITION_LOCATION)));
    }

    #[test]
    fn shader_fill_matches_constant() {
        let Color { r, g, b, a } = FILL;
        assert!(SHADER_SRC.contains(&format!("vec4<f32>({r}, {g}, {b}, {a:.1})")));
    }
}
