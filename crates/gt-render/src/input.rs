use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use gt_core::traits::{InputEvent, InputSource};

/// Traduit un événement crossterm en événement de lecture.
///
/// Quitter : `q`, `Esc`, `Ctrl-C`, `Ctrl-D`.
///
/// # Example
/// ```
/// use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
/// use gt_core::traits::InputEvent;
/// use gt_render::input::classify;
///
/// let ev = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
/// assert_eq!(classify(&ev), InputEvent::Quit);
/// ```
#[must_use]
pub fn classify(event: &Event) -> InputEvent {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) if *kind != KeyEventKind::Release => match code {
            KeyCode::Char('q') | KeyCode::Esc => InputEvent::Quit,
            KeyCode::Char('c' | 'd') if modifiers.contains(KeyModifiers::CONTROL) => InputEvent::Quit,
            _ => InputEvent::Other,
        },
        Event::Resize(columns, rows) => InputEvent::Resize(*columns, *rows),
        _ => InputEvent::Other,
    }
}

/// File d'événements du terminal, interrogée sans attente.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll(&mut self) -> Result<Option<InputEvent>> {
        if event::poll(Duration::ZERO)? {
            Ok(Some(classify(&event::read()?)))
        } else {
            Ok(None)
        }
    }
}
