use std::time::{Duration, Instant};

use crate::ui::primitives::icon::Icon;

const FRAMES_BRAILLE: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const FRAMES_ASCII: &[char] = &['-', '\\', '|', '/'];

/// Redraw interval for the ticker thread
pub const TICK: Duration = Duration::from_millis(80);

#[derive(Debug, Clone)]
pub struct Spinner {
    current: usize,
    message: String,
    started: Instant,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            current: 0,
            message: message.into(),
            started: Instant::now(),
        }
    }

    pub fn tick(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let frames = if supports_unicode {
            FRAMES_BRAILLE
        } else {
            FRAMES_ASCII
        };
        let frame = frames[self.current % frames.len()];
        format!("{} {}", frame, self.message)
    }

    /// Final line once the wait is over, with elapsed seconds
    pub fn finish(&self, supports_color: bool, supports_unicode: bool) -> String {
        format!(
            "{} {} ({:.1}s)",
            Icon::Arrow.colored(supports_color, supports_unicode),
            self.message,
            self.elapsed().as_secs_f32()
        )
    }
}
