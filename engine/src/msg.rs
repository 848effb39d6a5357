//! Messages about game events for the display layer.

/// Color tag of a message, the display decides the actual color.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
pub enum Color {
    #[default]
    White,
    PlayerAttack,
    EnemyAttack,
    /// Hostiles noticing the player or locking on.
    Alert,
    Death,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Msg {
    pub text: String,
    pub color: Color,
}

/// Messages accumulated since the display last collected them.
#[derive(Clone, Default, Debug)]
pub struct MessageLog(Vec<Msg>);

impl MessageLog {
    pub fn add_message(&mut self, text: impl Into<String>, color: Color) {
        let text = text.into();
        log::debug!("msg: {text}");
        self.0.push(Msg { text, color });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Msg> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Remove and return all pending messages.
    pub fn take(&mut self) -> Vec<Msg> {
        std::mem::take(&mut self.0)
    }
}

/// Uppercase the first letter of a sentence.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Add a formatted message to the runtime's message log.
///
/// ```ignore
/// msg!(r, Color::Alert; "{} spots {}!", name, target);
/// ```
#[macro_export]
macro_rules! msg {
    ($r:expr, $color:expr; $($fmt:tt)*) => {{
        let __txt = $crate::msg::capitalize(&format!($($fmt)*));
        $crate::Runtime::add_message($r, __txt, $color)
    }};
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn capitalization() {
        assert_eq!(capitalize("the guard dies."), "The guard dies.");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn take_empties_log() {
        let mut log = MessageLog::default();
        log.add_message("one", Color::White);
        log.add_message(String::from("two"), Color::Alert);
        assert_eq!(log.iter().count(), 2);
        let msgs = log.take();
        assert_eq!(msgs[1].color, Color::Alert);
        assert!(log.is_empty());
    }
}
