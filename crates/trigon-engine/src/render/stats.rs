use std::ops::Range;

/// One non-indexed draw: a vertex range drawn for an instance range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCall {
    pub vertices: Range<u32>,
    pub instances: Range<u32>,
}

impl DrawCall {
    /// A single, non-instanced draw of `count` vertices starting at 0.
    pub const fn vertices(count: u32) -> Self {
        Self {
            vertices: 0..count,
            instances: 0..1,
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.end.saturating_sub(self.vertices.start)
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.end.saturating_sub(self.instances.start)
    }
}

/// Work recorded during one frame.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub draw_calls: u32,
    /// Vertices submitted, counting every instance.
    pub vertices: u32,
}

impl FrameStats {
    /// Issues `call` on `rpass` and counts it.
    ///
    /// Renderers draw through here so the tally matches what was submitted.
    pub fn issue(&mut self, rpass: &mut wgpu::RenderPass<'_>, call: &DrawCall) {
        rpass.draw(call.vertices.clone(), call.instances.clone());
        self.record(call);
    }

    pub fn record(&mut self, call: &DrawCall) {
        self.draw_calls += 1;
        self.vertices += call.vertex_count() * call.instance_count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_constructor_is_single_instance() {
        let call = DrawCall::vertices(3);
        assert_eq!(call.vertices, 0..3);
        assert_eq!(call.instances, 0..1);
        assert_eq!(call.vertex_count(), 3);
        assert_eq!(call.instance_count(), 1);
    }

    #[test]
    fn record_counts_instances() {
        let mut stats = FrameStats::default();
        stats.record(&DrawCall {
            vertices: 0..3,
            instances: 0..4,
        });
        assert_eq!(stats, FrameStats { draw_calls: 1, vertices: 12 });
    }

    #[test]
    fn empty_ranges_count_zero_vertices() {
        let mut stats = FrameStats::default();
        stats.record(&DrawCall {
            vertices: 3..3,
            instances: 0..1,
        });
        assert_eq!(stats.draw_calls, 1);
        assert_eq!(stats.vertices, 0);
    }
}
