use log::info;
use mandelbrot_explorer::{
    FixedRatePacer, InputEvent, RasterSurface, ScriptedEventSource, StillImageController,
    StillRenderConfig, ViewKey, ViewerConfig, ViewerController,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    render_still()?;
    run_viewer_session()?;

    Ok(())
}

fn render_still() -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = StillImageController::new(StillRenderConfig::default());
    let image = controller.generate()?;

    let pixels = image.data().chunks_exact(3);
    let total = pixels.len();
    let interior = pixels.filter(|pixel| pixel.iter().all(|byte| *byte == 0)).count();

    info!(
        "Still {}x{}: {} of {} pixels black",
        image.width(),
        image.height(),
        interior,
        total
    );

    Ok(())
}

fn run_viewer_session() -> Result<(), Box<dyn std::error::Error>> {
    let config = ViewerConfig::default();
    let mut controller = ViewerController::new(config)?;
    let mut surface = RasterSurface::new(config.width, config.height);
    let mut pacer = FixedRatePacer::from_config(&config);
    let mut events = ScriptedEventSource::default()
        .then(vec![InputEvent::KeyDown(ViewKey::ZoomIn)])
        .idle(20)
        .then(vec![
            InputEvent::KeyUp(ViewKey::ZoomIn),
            InputEvent::KeyDown(ViewKey::PanRight),
        ])
        .idle(10)
        .then(vec![InputEvent::KeyUp(ViewKey::PanRight)])
        .then(vec![InputEvent::KeyDown(ViewKey::Escape)]);

    let frames = controller.run(&mut events, &mut surface, &mut pacer)?;
    let state = controller.state();

    info!(
        "Viewer session drew {} frames ({} presented), ended at x: {}, y: {}, z: {}",
        frames,
        surface.frames_presented(),
        state.center_x,
        state.center_y,
        state.zoom
    );

    Ok(())
}
