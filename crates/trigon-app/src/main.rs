mod app;

use trigon_engine::device::GpuInit;
use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::window::{Runtime, RuntimeConfig, StartupError};

use app::TriangleApp;

/// Status when the window (or its graphics context) could not be created.
const EXIT_STARTUP_FAILED: i32 = -1;
/// Status for any other fatal error.
const EXIT_RUNTIME_FAILED: i32 = 1;

fn main() {
    init_logging(LoggingConfig::default());

    let gpu_init = GpuInit {
        // Write the configured color values to the framebuffer unchanged.
        prefer_srgb: false,
        present_mode: wgpu::PresentMode::Fifo,
        ..GpuInit::default()
    };

    let result = Runtime::run(RuntimeConfig::default(), gpu_init, TriangleApp::new());
    let status = exit_status(&result);

    if let Err(err) = &result {
        log::error!("{err:#}");
    }

    std::process::exit(status);
}

fn exit_status(result: &anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) if err.downcast_ref::<StartupError>().is_some() => EXIT_STARTUP_FAILED,
        Err(_) => EXIT_RUNTIME_FAILED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn startup_failure(stage: StartupError) -> anyhow::Result<()> {
        Err(std::io::Error::other("no display")).context(stage)
    }

    #[test]
    fn normal_close_exits_zero() {
        assert_eq!(exit_status(&Ok(())), 0);
    }

    #[test]
    fn window_creation_failure_exits_minus_one() {
        assert_eq!(exit_status(&startup_failure(StartupError::Window)), -1);
    }

    #[test]
    fn context_creation_failure_exits_minus_one() {
        assert_eq!(exit_status(&startup_failure(StartupError::Gpu)), -1);
    }

    #[test]
    fn empty_backend_hints_exit_minus_one() {
        let init = GpuInit {
            backends: wgpu::Backends::empty(),
            ..GpuInit::default()
        };
        assert_eq!(exit_status(&Runtime::check_context_hints(&init)), -1);
    }

    #[test]
    fn valid_hints_do_not_fail_startup() {
        let init = GpuInit {
            prefer_srgb: false,
            ..GpuInit::default()
        };
        assert_eq!(exit_status(&Runtime::check_context_hints(&init)), 0);
    }

    #[test]
    fn other_failures_exit_one() {
        let result: anyhow::Result<()> = Err(anyhow::anyhow!("surface failed beyond recovery"));
        assert_eq!(exit_status(&result), 1);
    }
}
