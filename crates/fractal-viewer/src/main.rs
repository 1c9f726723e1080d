use fractal_engine::device::GpuInit;
use fractal_engine::logging::{init_logging, LoggingConfig};
use fractal_engine::window::{Runtime, RuntimeConfig};
use fractal_viewer::app::FractalViewer;
use winit::dpi::LogicalSize;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "Fractal Renderer".to_string(),
        initial_size: LogicalSize::new(1920.0, 1080.0),
        resizable: false,
    };

    // The shader writes display-ready colors; an sRGB target would encode them twice.
    let gpu_init = GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    };

    Runtime::run(config, gpu_init, FractalViewer::default())
}
