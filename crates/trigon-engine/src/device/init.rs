/// Initialization parameters for the GPU layer.
///
/// These are the context hints: which backends may be used, what the device
/// must support and how the surface presents.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// With `false`, a linear (non-sRGB) format is chosen when offered, so
    /// color values written by shaders reach the framebuffer unchanged.
    pub prefer_srgb: bool,

    /// Backends the instance may use. An empty set cannot produce a context.
    pub backends: wgpu::Backends,

    /// Adapter selection preference.
    pub power_preference: wgpu::PowerPreference,

    /// Present mode (swap behavior).
    ///
    /// FIFO waits for vertical sync and is supported everywhere.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface (a hint).
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::HighPerformance,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

impl GpuInit {
    /// Rejects hints that can never produce a context.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.backends.is_empty(), "no graphics backends enabled");
        anyhow::ensure!(
            self.desired_maximum_frame_latency > 0,
            "desired_maximum_frame_latency must be at least 1"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GpuInit::default().validate().is_ok());
    }

    #[test]
    fn empty_backends_rejected() {
        let init = GpuInit {
            backends: wgpu::Backends::empty(),
            ..GpuInit::default()
        };
        let err = init.validate().unwrap_err();
        assert_eq!(err.to_string(), "no graphics backends enabled");
    }

    #[test]
    fn zero_frame_latency_rejected() {
        let init = GpuInit {
            desired_maximum_frame_latency: 0,
            ..GpuInit::default()
        };
        assert!(init.validate().is_err());
    }
}
