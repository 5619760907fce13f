use colored::Colorize;

/// Coloured prefix printed in front of every log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Http,
    Cycle,
    Screen,
    State,
    Thread,
    Warn,
    Error,
}

pub const HTTP: Tag = Tag::Http;
pub const CYCLE: Tag = Tag::Cycle;
pub const SCREEN: Tag = Tag::Screen;
pub const STATE: Tag = Tag::State;
pub const THREAD: Tag = Tag::Thread;
pub const WARN: Tag = Tag::Warn;
pub const ERROR: Tag = Tag::Error;

impl Tag {
    pub const fn label(self) -> &'static str {
        match self {
            Tag::Http => "[HTTP]",
            Tag::Cycle => "[CYCLE]",
            Tag::Screen => "[SCREEN]",
            Tag::State => "[STATE]",
            Tag::Thread => "[THREAD]",
            Tag::Warn => "[WARN]",
            Tag::Error => "[ERROR]",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = self.label();
        let colored = match self {
            Tag::Http => label.blue(),
            Tag::Cycle => label.cyan(),
            Tag::Screen => label.magenta(),
            Tag::State => label.green(),
            Tag::Thread => label.white().dimmed(),
            Tag::Warn => label.yellow().bold(),
            Tag::Error => label.red().bold(),
        };
        write!(f, "{}", colored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_keeps_label_text() {
        colored::control::set_override(false);
        assert_eq!(format!("{}", ERROR), "[ERROR]");
        assert_eq!(format!("{}", CYCLE), "[CYCLE]");
        colored::control::unset_override();
    }
}
