//! Command vocabulary of the interactive loop.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Log,
    HardestCard,
    ResetStats,
    Exit,
}

impl Command {
    /// Case-sensitive match against the fixed vocabulary.
    pub fn parse(input: &str) -> Option<Self> {
        let command = match input {
            "add" => Self::Add,
            "remove" => Self::Remove,
            "import" => Self::Import,
            "export" => Self::Export,
            "ask" => Self::Ask,
            "log" => Self::Log,
            "hardest card" => Self::HardestCard,
            "reset stats" => Self::ResetStats,
            "exit" => Self::Exit,
            _ => return None,
        };
        Some(command)
    }
}
