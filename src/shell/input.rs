/// A command typed at the shell prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Prev,
    Help,
    Quit,
}

impl Action {
    /// Parse one input line; `None` for blank lines
    pub fn parse(line: &str) -> Option<Self> {
        let word = line.trim().to_ascii_lowercase();
        match word.as_str() {
            "" => None,
            "n" | "next" => Some(Action::Next),
            "p" | "prev" => Some(Action::Prev),
            "q" | "quit" | "exit" => Some(Action::Quit),
            _ => Some(Action::Help),
        }
    }
}

pub const HELP: &str = "Commands: n/next, p/prev, q/quit";
