//! Input line parsing.

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain text for the interviewer.
    Say(String),
    Start,
    /// Document type name, unparsed; `None` uses the session's type.
    Doc(Option<String>),
    Model(String),
    Models,
    History,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command: /{0} (try /help)")]
    Unknown(String),
    #[error("/{command} needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::Empty);
        }
        let Some(rest) = line.strip_prefix('/') else {
            return Ok(Command::Say(line.to_string()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (rest, None),
        };

        match name {
            "start" => Ok(Command::Start),
            "doc" => Ok(Command::Doc(arg.map(str::to_string))),
            "model" => arg
                .map(|id| Command::Model(id.to_string()))
                .ok_or(CommandError::MissingArgument {
                    command: "model",
                    argument: "a model id",
                }),
            "models" => Ok(Command::Models),
            "history" => Ok(Command::History),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
