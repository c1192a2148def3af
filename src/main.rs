use anyhow::{Context, Result};

use hello_triangle::{
    config::WindowConfig,
    frame::FrameState,
    logging::{init_logging, LoggingConfig},
    render::Render,
    window::AppWindow,
};

fn main() {
    init_logging(LoggingConfig::default());

    let (mut app_window, mut render_ctx) = match setup(&WindowConfig::default()) {
        Ok(parts) => parts,
        Err(e) => {
            log::error!("{e:#}");
            std::process::abort();
        }
    };
    app_window.show();

    let mut frame_count: u64 = 0;
    let mut state = FrameState::Running;
    while state == FrameState::Running {
        render_ctx.render_frame();
        app_window.swap();
        frame_count += 1;

        state = state.after_events(app_window.poll_close_requested());
    }

    log::info!("window closed after {frame_count} frames");
    // GL objects go before the context they live in
    drop(render_ctx);
    drop(app_window);
}

fn setup(config: &WindowConfig) -> Result<(AppWindow, Render)> {
    let app_window = AppWindow::init(config).context("setting up the window")?;
    let render_ctx = Render::init().context("building the scene")?;
    Ok((app_window, render_ctx))
}
