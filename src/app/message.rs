//! Application messages

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// Animation frame while a border indicator is in flight
    AnimationTick,
    /// External "collapsed" signal; a false→true edge starts the border runs
    SetCollapsed(bool),
}

// Manual Debug implementation keeps high-frequency messages terse in iced_debug
impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            Self::AnimationTick => simple!("AnimationTick"),
            Self::SetCollapsed(collapsed) => simple!("SetCollapsed", "{}", collapsed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Message::AnimationTick), "AnimationTick");
        assert_eq!(
            format!("{:?}", Message::SetCollapsed(true)),
            "SetCollapsed(true)"
        );
    }
}
