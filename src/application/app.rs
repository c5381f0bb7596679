use crate::application::clock::SlideClock;
use crate::application::state::ViewerState;
use crate::core::config::AppConfig;
use crate::core::events::*;
use crate::core::models::Story;
use crate::core::traits::ViewerRenderer;
use crate::modules::playback::controller::StoryController;
use anyhow::{Context, Result};
use crossbeam_channel::unbounded;
use std::time::{Duration, Instant};
use tracing::debug;

/// Hosts one open story: the single owner of the controller.
///
/// Input from the renderer, the slide clock and any other sender goes through
/// one control channel and is handled in arrival order on this loop.
pub struct Application {
    controller: StoryController,
    viewer_rx: ViewerEventReceiver,
    control_tx: ControlSender,
    control_rx: ControlReceiver,

    state: ViewerState,
    clock: Option<SlideClock>,
    config: AppConfig,

    renderer: Option<Box<dyn ViewerRenderer>>,
}

impl Application {
    /// Open `story` with the given configuration
    pub fn open(story: &Story, config: AppConfig) -> Result<Self> {
        let (viewer_tx, viewer_rx) = unbounded();
        let (control_tx, control_rx) = unbounded();

        let controller =
            StoryController::open(story, config.playback, config.tap_zones, viewer_tx)?;

        let mut app = Self {
            controller,
            viewer_rx,
            control_tx,
            control_rx,
            state: ViewerState::for_story(story),
            clock: None,
            config,
            renderer: None,
        };
        app.process_viewer_events();

        Ok(app)
    }

    /// Set the playback surface
    pub fn with_renderer(mut self, renderer: Box<dyn ViewerRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Get control sender (for surfaces to feed input)
    pub fn control_sender(&self) -> ControlSender {
        self.control_tx.clone()
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn controller(&self) -> &StoryController {
        &self.controller
    }

    pub fn init(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.init()?;
        }
        Ok(())
    }

    /// Run until the story closes
    pub fn run(&mut self) -> Result<CloseReason> {
        loop {
            self.step()?;

            if let Some(reason) = self.state.closed {
                return Ok(reason);
            }

            // Small sleep to prevent CPU spinning
            std::thread::sleep(Duration::from_millis(16));
        }
    }

    /// One loop iteration: gather input, process it in order, render
    pub fn step(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            for event in renderer.poll_input()? {
                self.control_tx
                    .send(event)
                    .context("control channel disconnected")?;
            }
        }

        if let Some(event) = self.clock.as_ref().and_then(SlideClock::poll) {
            self.control_tx
                .send(event)
                .context("control channel disconnected")?;
        }

        self.process_control_events()?;

        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.state)?;
        }

        Ok(())
    }

    fn process_control_events(&mut self) -> Result<()> {
        while let Ok(event) = self.control_rx.try_recv() {
            self.controller.handle(event)?;
            self.process_viewer_events();
            self.state
                .sync_playback(self.controller.state(), self.controller.current_duration());
        }
        Ok(())
    }

    fn process_viewer_events(&mut self) {
        while let Ok(event) = self.viewer_rx.try_recv() {
            self.state.apply_event(&event);

            match &event {
                ViewerEvent::SlideChanged { tag, duration, .. } => {
                    debug!(index = tag.index, "starting slide clock");
                    self.clock = Some(SlideClock::start(
                        *tag,
                        *duration,
                        self.config.playback.tick_interval(),
                        self.config.terminal.video_report_interval(),
                    ));
                }
                ViewerEvent::Paused => {
                    if let Some(clock) = &mut self.clock {
                        clock.pause(Instant::now());
                    }
                }
                ViewerEvent::Resumed => {
                    if let Some(clock) = &mut self.clock {
                        clock.resume(Instant::now());
                    }
                }
                ViewerEvent::Closed { .. } => {
                    self.clock = None;
                }
            }
        }
    }

    /// Initialise the surface, run until close and always restore the surface.
    ///
    /// A loop failure wins over a cleanup failure; when both fail the cleanup
    /// error is attached as context.
    pub fn play(&mut self) -> Result<CloseReason> {
        let outcome = self.init().and_then(|()| self.run());
        let cleaned = self.cleanup();

        match (outcome, cleaned) {
            (Err(err), Err(cleanup_err)) => {
                Err(err.context(format!("surface cleanup also failed: {cleanup_err:#}")))
            }
            (outcome, cleaned) => {
                let reason = outcome?;
                cleaned?;
                Ok(reason)
            }
        }
    }

    /// Cleanup resources
    pub fn cleanup(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.cleanup()?;
        }
        Ok(())
    }
}
