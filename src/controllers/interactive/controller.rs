use crate::controllers::interactive::errors::ViewerError;
use crate::controllers::interactive::ports::draw_surface::DrawSurface;
use crate::controllers::interactive::ports::event_source::EventSource;
use crate::controllers::interactive::ports::frame_pacer::FramePacer;
use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::actions::shade_view::shade_view::shade_view;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_map::EmberColourMap;
use crate::core::view::controls::InputEvent;
use crate::core::view::settings::ViewerConfig;
use crate::core::view::state::{LoopState, ViewState};
use log::{debug, trace};
use std::time::{Duration, Instant};

/// Drives one interactive session: owns the view state, folds input into it
/// once per frame and draws the result.
pub struct ViewerController<CMap = EmberColourMap> {
    config: ViewerConfig,
    state: ViewState,
    colour_map: CMap,
    frames_drawn: u64,
    last_frame_duration: Option<Duration>,
}

impl ViewerController<EmberColourMap> {
    pub fn new(config: ViewerConfig) -> Result<Self, ViewerError> {
        Self::with_colour_map(config, EmberColourMap)
    }
}

impl<CMap> ViewerController<CMap>
where
    CMap: ColourMap<f64> + Sync,
{
    pub fn with_colour_map(config: ViewerConfig, colour_map: CMap) -> Result<Self, ViewerError> {
        config.validate()?;

        Ok(Self {
            config,
            state: ViewState::initial(&config),
            colour_map,
            frames_drawn: 0,
            last_frame_duration: None,
        })
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    #[must_use]
    pub fn last_frame_duration(&self) -> Option<Duration> {
        self.last_frame_duration
    }

    /// Runs frames until a quit event or the escape key arrives.
    ///
    /// Returns the number of frames drawn.
    pub fn run<E, D, P>(
        &mut self,
        events: &mut E,
        surface: &mut D,
        pacer: &mut P,
    ) -> Result<u64, ViewerError>
    where
        E: EventSource,
        D: DrawSurface,
        P: FramePacer,
    {
        let first_frame = self.frames_drawn;
        let mut loop_state = LoopState::Running;

        while loop_state == LoopState::Running {
            loop_state = self.step(events.poll_events(), surface)?;

            if loop_state == LoopState::Running {
                pacer.wait_for_next_frame();
            }
        }

        debug!(
            "Viewer stopped after {} frames at x: {}, y: {}, z: {}",
            self.frames_drawn - first_frame,
            self.state.center_x,
            self.state.center_y,
            self.state.zoom
        );

        Ok(self.frames_drawn - first_frame)
    }

    /// Processes one frame's events in arrival order, then integrates and
    /// draws.
    ///
    /// A terminating event ends the frame on the spot: later events in the
    /// batch are dropped and nothing is integrated or drawn.
    pub fn step<I, D>(&mut self, events: I, surface: &mut D) -> Result<LoopState, ViewerError>
    where
        I: IntoIterator<Item = InputEvent>,
        D: DrawSurface,
    {
        for event in events {
            if self.state.apply_event(event, self.config.speed) == LoopState::Terminating {
                return Ok(LoopState::Terminating);
            }
        }

        self.state.integrate(self.config.zoom_rate);

        trace!(
            "x: {}, y: {}, z: {}",
            self.state.center_x, self.state.center_y, self.state.zoom
        );

        let start = Instant::now();
        self.draw_frame(surface).map_err(|err| ViewerError::Surface(Box::new(err)))?;
        self.last_frame_duration = Some(start.elapsed());
        self.frames_drawn += 1;

        Ok(LoopState::Running)
    }

    fn draw_frame<D: DrawSurface>(&self, surface: &mut D) -> Result<(), D::Error> {
        let scale = self.config.down_scale_factor;
        let virtual_width = self.config.virtual_width();
        let virtual_height = self.config.virtual_height();

        let colours = shade_view(
            &self.state,
            virtual_width,
            virtual_height,
            self.config.max_iterations,
            &self.colour_map,
        );

        surface.fill_rect(0, 0, self.config.width, self.config.height, Colour::BLACK)?;

        for y in 0..virtual_height {
            for x in 0..virtual_width {
                let colour = colours[(y * virtual_width + x) as usize];
                surface.fill_rect(x * scale, y * scale, scale, scale, colour)?;
            }
        }

        self.draw_crosshair(surface)?;
        surface.present()
    }

    fn draw_crosshair<D: DrawSurface>(&self, surface: &mut D) -> Result<(), D::Error> {
        let centre_x = self.config.width / 2;
        let centre_y = self.config.height / 2;

        surface.fill_rect(centre_x.saturating_sub(1), centre_y, 3, 1, Colour::WHITE)?;
        surface.fill_rect(centre_x, centre_y.saturating_sub(1), 1, 3, Colour::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::controls::ViewKey;
    use crate::core::view::settings::ViewerConfigError;
    use std::collections::VecDeque;
    use std::fmt;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum DrawCall {
        Fill {
            x: u32,
            y: u32,
            width: u32,
            height: u32,
            colour: Colour,
        },
        Present,
    }

    #[derive(Debug, Default)]
    struct RecordingSurface {
        calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        fn presents(&self) -> usize {
            self.calls
                .iter()
                .filter(|call| **call == DrawCall::Present)
                .count()
        }
    }

    #[derive(Debug)]
    struct SurfaceLost;

    impl fmt::Display for SurfaceLost {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "surface lost")
        }
    }

    impl std::error::Error for SurfaceLost {}

    impl DrawSurface for RecordingSurface {
        type Error = SurfaceLost;

        fn fill_rect(
            &mut self,
            x: u32,
            y: u32,
            width: u32,
            height: u32,
            colour: Colour,
        ) -> Result<(), Self::Error> {
            self.calls.push(DrawCall::Fill {
                x,
                y,
                width,
                height,
                colour,
            });
            Ok(())
        }

        fn present(&mut self) -> Result<(), Self::Error> {
            self.calls.push(DrawCall::Present);
            Ok(())
        }
    }

    struct FailingSurface;

    impl DrawSurface for FailingSurface {
        type Error = SurfaceLost;

        fn fill_rect(&mut self, _: u32, _: u32, _: u32, _: u32, _: Colour) -> Result<(), Self::Error> {
            Err(SurfaceLost)
        }

        fn present(&mut self) -> Result<(), Self::Error> {
            Err(SurfaceLost)
        }
    }

    struct QueuedEvents {
        frames: VecDeque<Vec<InputEvent>>,
    }

    impl EventSource for QueuedEvents {
        fn poll_events(&mut self) -> Vec<InputEvent> {
            self.frames.pop_front().unwrap_or_else(|| vec![InputEvent::Quit])
        }
    }

    #[derive(Default)]
    struct CountingPacer {
        waits: u32,
    }

    impl FramePacer for CountingPacer {
        fn wait_for_next_frame(&mut self) {
            self.waits += 1;
        }
    }

    fn small_config() -> ViewerConfig {
        ViewerConfig {
            width: 40,
            height: 30,
            down_scale_factor: 10,
            max_iterations: 20,
            ..ViewerConfig::default()
        }
    }

    #[test]
    fn test_indivisible_screen_is_a_config_error() {
        let config = ViewerConfig {
            width: 41,
            ..small_config()
        };

        let result = ViewerController::new(config);

        assert!(matches!(
            result,
            Err(ViewerError::Config(ViewerConfigError::NotDivisible { .. }))
        ));
    }

    #[test]
    fn test_frame_clears_draws_blocks_crosshair_then_presents() {
        let mut controller = ViewerController::new(small_config()).unwrap();
        let mut surface = RecordingSurface::default();

        let loop_state = controller.step(Vec::new(), &mut surface).unwrap();

        assert_eq!(loop_state, LoopState::Running);
        // clear + 4x3 blocks + 2 crosshair bars + present
        assert_eq!(surface.calls.len(), 1 + 12 + 2 + 1);
        assert_eq!(
            surface.calls[0],
            DrawCall::Fill {
                x: 0,
                y: 0,
                width: 40,
                height: 30,
                colour: Colour::BLACK
            }
        );
        assert_eq!(
            surface.calls[13],
            DrawCall::Fill {
                x: 19,
                y: 15,
                width: 3,
                height: 1,
                colour: Colour::WHITE
            }
        );
        assert_eq!(
            surface.calls[14],
            DrawCall::Fill {
                x: 20,
                y: 14,
                width: 1,
                height: 3,
                colour: Colour::WHITE
            }
        );
        assert_eq!(surface.calls[15], DrawCall::Present);
    }

    #[test]
    fn test_blocks_are_scaled_logical_pixels() {
        let mut controller = ViewerController::new(small_config()).unwrap();
        let mut surface = RecordingSurface::default();

        controller.step(Vec::new(), &mut surface).unwrap();

        let expected = shade_view(controller.state(), 4, 3, 20, &EmberColourMap);
        for (index, call) in surface.calls[1..13].iter().enumerate() {
            let x = (index % 4) as u32;
            let y = (index / 4) as u32;
            assert_eq!(
                *call,
                DrawCall::Fill {
                    x: x * 10,
                    y: y * 10,
                    width: 10,
                    height: 10,
                    colour: expected[index]
                }
            );
        }
    }

    #[test]
    fn test_integration_happens_every_frame_without_new_events() {
        let mut controller = ViewerController::new(small_config()).unwrap();
        let mut surface = RecordingSurface::default();

        controller
            .step(vec![InputEvent::KeyDown(ViewKey::PanRight)], &mut surface)
            .unwrap();
        controller.step(Vec::new(), &mut surface).unwrap();
        controller.step(Vec::new(), &mut surface).unwrap();

        assert_eq!(controller.state().center_x, 9.0);
        assert_eq!(controller.frames_drawn(), 3);
        assert_eq!(surface.presents(), 3);
    }

    #[test]
    fn test_events_apply_in_arrival_order() {
        let mut controller = ViewerController::new(small_config()).unwrap();
        let mut surface = RecordingSurface::default();

        controller
            .step(
                vec![
                    InputEvent::KeyDown(ViewKey::ZoomIn),
                    InputEvent::KeyUp(ViewKey::ZoomIn),
                    InputEvent::KeyDown(ViewKey::ZoomOut),
                ],
                &mut surface,
            )
            .unwrap();

        assert_eq!(controller.state().zoom_velocity, -3.0);
        assert_eq!(controller.state().zoom, 8.0 - 9.0);
    }

    #[test]
    fn test_quit_stops_the_frame_before_any_mutation_or_drawing() {
        let mut controller = ViewerController::new(small_config()).unwrap();
        let mut surface = RecordingSurface::default();
        let before = *controller.state();

        let loop_state = controller
            .step(
                vec![
                    InputEvent::Quit,
                    InputEvent::KeyDown(ViewKey::PanRight),
                ],
                &mut surface,
            )
            .unwrap();

        assert_eq!(loop_state, LoopState::Terminating);
        assert_eq!(*controller.state(), before);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_escape_after_a_key_keeps_only_earlier_events() {
        let mut controller = ViewerController::new(small_config()).unwrap();
        let mut surface = RecordingSurface::default();

        let loop_state = controller
            .step(
                vec![
                    InputEvent::KeyDown(ViewKey::PanDown),
                    InputEvent::KeyDown(ViewKey::Escape),
                    InputEvent::KeyDown(ViewKey::PanLeft),
                ],
                &mut surface,
            )
            .unwrap();

        assert_eq!(loop_state, LoopState::Terminating);
        assert_eq!(controller.state().pan_velocity_y, 3.0);
        assert_eq!(controller.state().pan_velocity_x, 0.0);
        assert_eq!(controller.state().center_y, 0.0);
    }

    #[test]
    fn test_run_loops_until_quit_and_paces_between_frames() {
        let mut controller = ViewerController::new(small_config()).unwrap();
        let mut surface = RecordingSurface::default();
        let mut pacer = CountingPacer::default();
        let mut events = QueuedEvents {
            frames: VecDeque::from(vec![
                vec![InputEvent::KeyDown(ViewKey::ZoomIn)],
                Vec::new(),
                vec![InputEvent::KeyUp(ViewKey::ZoomIn)],
                Vec::new(),
                vec![InputEvent::KeyDown(ViewKey::Escape)],
            ]),
        };

        let frames = controller.run(&mut events, &mut surface, &mut pacer).unwrap();

        assert_eq!(frames, 4);
        assert_eq!(pacer.waits, 4);
        assert_eq!(surface.presents(), 4);
        // two frames of zooming in at 3 * 3 per frame
        assert_eq!(controller.state().zoom, 8.0 + 18.0);
    }

    #[test]
    fn test_run_with_immediate_quit_draws_nothing() {
        let mut controller = ViewerController::new(small_config()).unwrap();
        let mut surface = RecordingSurface::default();
        let mut pacer = CountingPacer::default();
        let mut events = QueuedEvents {
            frames: VecDeque::new(),
        };

        let frames = controller.run(&mut events, &mut surface, &mut pacer).unwrap();

        assert_eq!(frames, 0);
        assert_eq!(pacer.waits, 0);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_surface_errors_are_surfaced() {
        let mut controller = ViewerController::new(small_config()).unwrap();

        let result = controller.step(Vec::new(), &mut FailingSurface);

        match result {
            Err(ViewerError::Surface(err)) => assert_eq!(err.to_string(), "surface lost"),
            other => panic!("expected surface error, got {:?}", other),
        }
        assert_eq!(controller.frames_drawn(), 0);
    }

    #[test]
    fn test_last_frame_duration_recorded_after_draw() {
        let mut controller = ViewerController::new(small_config()).unwrap();
        let mut surface = RecordingSurface::default();

        assert_eq!(controller.last_frame_duration(), None);

        controller.step(Vec::new(), &mut surface).unwrap();

        assert!(controller.last_frame_duration().is_some());
    }
}
