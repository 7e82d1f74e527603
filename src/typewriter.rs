use std::time::Duration;

pub const LANDING_TEXT: &str = "From Insight to Actionable AI";
pub const TYPING_INTERVAL: Duration = Duration::from_millis(100);
pub const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Reveals a line of text one character per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    // byte offset of the revealed prefix, always on a char boundary
    revealed: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            revealed: 0,
        }
    }

    /// Reveals the next character. Returns false once there is nothing left to type.
    pub fn tick(&mut self) -> bool {
        match self.text[self.revealed..].chars().next() {
            Some(c) => {
                self.revealed += c.len_utf8();
                true
            }
            None => false,
        }
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.revealed]
    }

    pub fn is_complete(&self) -> bool {
        self.revealed == self.text.len()
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(LANDING_TEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_one_char_per_tick() {
        let mut tw = Typewriter::new("abc");
        assert_eq!(tw.visible(), "");
        assert!(!tw.is_complete());
        assert!(tw.tick());
        assert_eq!(tw.visible(), "a");
        assert!(tw.tick());
        assert!(tw.tick());
        assert_eq!(tw.visible(), "abc");
        assert!(tw.is_complete());
        assert!(!tw.tick());
        assert_eq!(tw.visible(), "abc");
    }

    #[test]
    fn test_multibyte_chars() {
        let mut tw = Typewriter::new("é→x");
        tw.tick();
        assert_eq!(tw.visible(), "é");
        tw.tick();
        assert_eq!(tw.visible(), "é→");
    }

    #[test]
    fn test_empty_text_is_complete() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_complete());
        assert!(!tw.tick());
    }

    #[test]
    fn test_landing_text_tick_count() {
        let mut tw = Typewriter::default();
        let mut ticks = 0;
        while tw.tick() {
            ticks += 1;
        }
        assert_eq!(ticks, LANDING_TEXT.chars().count());
        assert_eq!(tw.visible(), LANDING_TEXT);
    }
}
