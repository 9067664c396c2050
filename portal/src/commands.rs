use gif_portal_client::{
    controller::Command,
    logs::{
        log_info,
        log_warning,
    },
};
use tokio::{
    io::{
        AsyncBufReadExt,
        BufReader,
    },
    sync::mpsc,
};

pub const HELP: &str =
    "connect | submit <link> | input <text> | init | refresh | disconnect | quit";

#[derive(Debug, Eq, PartialEq)]
pub enum Line {
    Command(Command),
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Result<Line, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match word {
        "connect" => Command::ConnectInteractive,
        "submit" => Command::Submit(rest.to_string()),
        "input" => Command::EditInput(rest.to_string()),
        "init" => Command::InitializeAccount,
        "refresh" | "retry" => Command::Refresh,
        "disconnect" => Command::Disconnect,
        "help" | "" => return Ok(Line::Help),
        "quit" | "exit" => return Ok(Line::Quit),
        other => return Err(format!("Unknown command `{other}`")),
    };
    Ok(Line::Command(command))
}

/// Forwards commands typed on stdin until `quit` or end of input. Dropping the sender on return
/// stops the controller once its queued commands are done.
pub async fn read_commands(sender: mpsc::Sender<Command>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    log_info("Commands", HELP);

    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Ok(Line::Command(command)) => sender.send(command).await?,
            Ok(Line::Help) => log_info("Commands", HELP),
            Ok(Line::Quit) => break,
            Err(e) => log_warning("Input", e),
        }
    }

    Ok(())
}
