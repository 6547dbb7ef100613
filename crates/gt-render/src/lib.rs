/// Terminal side of gifterm.
///
/// Provides the ratatui cell sink, crossterm input polling and terminal
/// size discovery.
pub mod input;
pub mod sink;
pub mod terminal;

pub use input::CrosstermInput;
pub use sink::RatatuiSink;
