//! Character-by-character text reveal for the narrative panel.

use std::time::Duration;

/// Default delay between two revealed characters.
pub const DEFAULT_TYPEWRITER_SPEED: Duration = Duration::from_millis(20);

/// Prefix put in front of every narrative line.
pub const LINE_PREFIX: &str = "> ";

/// One line with its own reveal sequence.
#[derive(Debug, Clone)]
pub struct TypewriterLine {
    chars: Vec<char>,
    speed: Duration,
    elapsed: Duration,
}

impl TypewriterLine {
    fn new(text: &str, speed: Duration) -> Self {
        Self {
            chars: text.chars().collect(),
            speed,
            elapsed: Duration::ZERO,
        }
    }

    /// Number of characters currently visible.
    ///
    /// The first character shows immediately, then one more per `speed`.
    #[must_use]
    pub fn revealed(&self) -> usize {
        let len = self.chars.len();
        if self.speed.is_zero() {
            return len;
        }
        let steps = self.elapsed.as_nanos() / self.speed.as_nanos();
        usize::try_from(steps)
            .map_or(len, |steps| steps.saturating_add(1))
            .min(len)
    }

    /// Whether the trailing line break has been written.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let total = u32::try_from(self.chars.len())
            .map_or(Duration::MAX, |len| self.speed.saturating_mul(len));
        self.elapsed >= total
    }

    /// Visible text including the prefix.
    #[must_use]
    pub fn visible_text(&self) -> String {
        let mut text = String::with_capacity(LINE_PREFIX.len() + self.chars.len());
        text.push_str(LINE_PREFIX);
        text.extend(&self.chars[..self.revealed()]);
        text
    }

    /// Full text of the line without the prefix.
    #[must_use]
    pub fn full_text(&self) -> String {
        self.chars.iter().collect()
    }

    fn advance(&mut self, elapsed: Duration) {
        if !self.is_complete() {
            self.elapsed = self.elapsed.saturating_add(elapsed);
        }
    }
}

/// Narrative panel contents.
#[derive(Debug, Clone)]
pub struct Typewriter {
    lines: Vec<TypewriterLine>,
    default_speed: Duration,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(DEFAULT_TYPEWRITER_SPEED)
    }
}

impl Typewriter {
    #[must_use]
    pub fn new(default_speed: Duration) -> Self {
        Self {
            lines: Vec::new(),
            default_speed,
        }
    }

    /// Starts revealing `text` on a new line at `speed` per character.
    pub fn emit(&mut self, text: &str, speed: Duration) {
        self.lines.push(TypewriterLine::new(text, speed));
    }

    /// Starts revealing `text` at the configured speed.
    pub fn emit_default(&mut self, text: &str) {
        self.emit(text, self.default_speed);
    }

    /// Advances every in-progress line.
    pub fn tick(&mut self, elapsed: Duration) {
        for line in &mut self.lines {
            line.advance(elapsed);
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[TypewriterLine] {
        &self.lines
    }

    /// Whether any line is still being revealed.
    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.lines.iter().any(|line| !line.is_complete())
    }
}
