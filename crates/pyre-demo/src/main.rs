mod app;

use anyhow::Result;

use pyre_engine::device::GpuInit;
use pyre_engine::logging::{init_logging, LoggingConfig};
use pyre_engine::window::{Runtime, RuntimeConfig};

use app::FireApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // Key bindings — printed before the window opens.
    println!();
    println!("  pyre — procedural fire");
    println!("  ──────────────────────────────────────────");
    println!("  0-8        tessellation level");
    println!("  u/j        fire frequency +/-");
    println!("  i/k        speed +/-");
    println!("  o/l        detail +/-");
    println!("  p/;        voronoi scale +/-");
    println!("  g c e      ghost / cherry / evening palette");
    println!("  r          reset scene");
    println!("  enter      reload scene");
    println!("  ← →        orbit camera");
    println!("  esc        quit");
    println!();

    let config = RuntimeConfig {
        title: "pyre — procedural fire".to_string(),
        ..RuntimeConfig::default()
    };

    // Vsync-locked presentation; the animation counter ticks once per frame.
    let gpu_init = GpuInit {
        present_mode: wgpu::PresentMode::Fifo,
        ..GpuInit::default()
    };

    Runtime::run(config, gpu_init, FireApp::new())
}
