use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event (keys, bracketed paste, resize)
    Terminal(CrosstermEvent),

    /// Tick for UI refresh
    Tick,
}
