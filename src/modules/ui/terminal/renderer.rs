use crate::application::state::ViewerState;
use crate::core::events::ControlEvent;
use crate::core::models::{MediaList, Story};
use crate::core::traits::ViewerRenderer;
use crate::modules::media::media_list::build_media_list;
use crate::modules::ui::progress_formatter::{fit_line, render_segments, slide_label};
use anyhow::{Context, Result};
use crossterm::{
    ExecutableCommand, cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{self, ClearType},
};
use std::io::{Write, stdout};
use std::time::Duration;

/// Fraction of the surface width used for keyboard taps
const KEY_TAP_BACK: f64 = 0.1;
const KEY_TAP_FORWARD: f64 = 0.9;

const KEY_HELP: &str = " | [←/B: Prev | →/N: Next | Space: Pause | Q: Close]";

pub struct TerminalRenderer {
    initialized: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self { initialized: false }
    }

    pub fn print_message(&self, message: &str) {
        println!("{}", message);
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("Error: {}", message);
    }

    pub fn print_story_list(&self, stories: &[Story]) {
        let total = stories.len();
        for (index, story) in stories.iter().enumerate() {
            let slides = build_media_list(story).len();
            println!("[{}/{}] {} - {} ({} slides)", index + 1, total, story.id, story.title, slides);
        }
    }

    pub fn print_media_list(&self, story: &Story, media: &MediaList) {
        println!("{} ({})", story.title, story.id);
        for (index, item) in media.iter().enumerate() {
            println!("  {:>2}. {}", index + 1, item);
        }
        if let Some(link) = story.link.as_deref().filter(|_| story.has_link()) {
            println!("  link: {}", link);
        }
    }

    pub fn print_search_results(&self, query: &str, results: &[(usize, Story)]) {
        if results.is_empty() {
            println!("No stories found matching: '{}'", query);
        } else {
            println!("Found {} matches:", results.len());
            for (index, story) in results {
                println!("[{}] {} - {}", index, story.id, story.title);
            }
        }
    }

    fn surface_width() -> f64 {
        terminal::size().map(|(cols, _)| cols as f64).unwrap_or(80.0)
    }

    fn key_to_control(code: KeyCode) -> Option<ControlEvent> {
        let width = Self::surface_width();
        match code {
            KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
                Some(ControlEvent::TogglePause)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Right => Some(ControlEvent::Tap {
                x: width * KEY_TAP_FORWARD,
                width,
            }),
            KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Left => Some(ControlEvent::Tap {
                x: width * KEY_TAP_BACK,
                width,
            }),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(ControlEvent::Close),
            _ => None,
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerRenderer for TerminalRenderer {
    fn init(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("Could not enable raw mode")?;
        // From here on cleanup must run, even if the rest of init fails
        self.initialized = true;

        let mut out = stdout();
        out.execute(EnableMouseCapture)?;
        out.execute(cursor::Hide)?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.initialized {
            let mut out = stdout();
            out.execute(cursor::Show)?;
            out.execute(DisableMouseCapture)?;
            terminal::disable_raw_mode().context("Could not disable raw mode")?;
            println!();
            self.initialized = false;
        }
        Ok(())
    }

    fn render(&mut self, state: &ViewerState) -> Result<()> {
        let mut out = stdout();

        out.execute(cursor::MoveToColumn(0))?;
        out.execute(terminal::Clear(ClearType::CurrentLine))?;

        let playback = &state.playback;
        let bar = render_segments(state.slide_count, playback.current_index, playback.progress, 30);
        let label = slide_label(playback.current_index, state.slide_count, playback.progress, state.duration);
        let icon = if playback.is_playing { '▶' } else { '⏸' };

        // Placeholder slides render the story title as a card
        let content = match &state.current {
            Some(item) if item.is_placeholder() => format!("« {} »", state.title),
            Some(item) => item.to_string(),
            None => state.status_message.clone(),
        };

        let mut line = format!("{} {} {} | {}", icon, bar, label, content);
        if let Some(link) = &state.link {
            line.push_str(&format!(" | View Project: {}", link));
        }

        print!("{}", fit_line(&line, KEY_HELP, Self::surface_width() as usize));

        out.flush()?;
        Ok(())
    }

    fn poll_input(&mut self) -> Result<Vec<ControlEvent>> {
        let mut events = Vec::new();

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(KeyEvent { code, kind, .. }) if kind == KeyEventKind::Press => {
                    events.extend(Self::key_to_control(code));
                }
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    ..
                }) => {
                    events.push(ControlEvent::Tap {
                        x: column as f64,
                        width: Self::surface_width(),
                    });
                }
                _ => {}
            }
        }

        Ok(events)
    }
}
