//! REPL command parsing.

use practice_core::SessionId;

pub const COMMANDS: [&str; 6] = ["/log", "/list", "/remove", "/export", "/help", "/quit"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fill in the draft field by field and submit it.
    Log,
    List,
    Remove(SessionId),
    Export,
    Help,
    Quit,
    Empty,
}

pub fn parse(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(Command::Empty);
    };

    let command = match head {
        "/log" | "/add" => Command::Log,
        "/list" | "/ls" => Command::List,
        "/remove" | "/rm" => {
            let raw = parts.next().ok_or("usage: /remove <id>")?;
            let id = raw
                .parse::<SessionId>()
                .map_err(|_| format!("'{raw}' is not a session id"))?;
            Command::Remove(id)
        }
        "/export" => Command::Export,
        "/help" | "/?" => Command::Help,
        "/quit" | "/exit" => Command::Quit,
        other => return Err(format!("unknown command '{other}', try /help")),
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!(parse("/log"), Ok(Command::Log));
        assert_eq!(parse("  /ls "), Ok(Command::List));
        assert_eq!(parse("/rm 3"), Ok(Command::Remove(SessionId::new(3))));
        assert_eq!(parse("/export"), Ok(Command::Export));
        assert_eq!(parse("/exit"), Ok(Command::Quit));
        assert_eq!(parse(""), Ok(Command::Empty));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse("/remove").is_err());
        assert!(parse("/remove abc").is_err());
        assert!(parse("hello").is_err());
    }
}
