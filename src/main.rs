use clap::Parser;
use druid::{AppLauncher, LocalizedString, PlatformError, WindowDesc};
use tracing::info;

mod graphics;
mod input;
mod matrix;
mod state;
mod transform;
mod vertex;
mod widget;

use state::AppState;
use widget::ShapeWidget;

/// Command-line options
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 500.0)]
    width: f64,
    /// Initial window height in pixels
    #[arg(long, default_value_t = 500.0)]
    height: f64,
    /// Start with the debug overlay enabled
    #[arg(long)]
    debug: bool,
}

/// Main function
fn main() -> Result<(), PlatformError> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    info!(width = args.width, height = args.height, "opening window");

    let main_window = WindowDesc::new(ShapeWidget::new())
        .title(LocalizedString::new("shape2d"))
        .window_size((args.width, args.height));

    AppLauncher::with_window(main_window).launch(AppState::new(args.debug))?;

    info!("window closed");
    Ok(())
}
