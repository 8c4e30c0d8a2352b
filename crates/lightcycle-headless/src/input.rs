use std::io::BufRead;

use tokio::sync::mpsc;

/// Commands sent from the stdin reader to the tick loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Leave the intro screen.
    Start,
    /// A key-down event, identified by its key symbol.
    Key(String),
    Quit,
}

/// Split a line into commands. Each whitespace-separated token is one
/// command; anything that is not `start` or `quit` is treated as a key.
pub fn parse_line(line: &str) -> Vec<HostCommand> {
    line.split_whitespace()
        .map(|token| match token {
            "start" => HostCommand::Start,
            "quit" | "exit" => HostCommand::Quit,
            key => HostCommand::Key(key.to_string()),
        })
        .collect()
}

/// Read stdin on a dedicated thread. The channel closes when stdin does.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<HostCommand> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!(error = %e, "stdin read failed");
                    break;
                },
            };
            for command in parse_line(&line) {
                if tx.send(command).is_err() {
                    return;
                }
            }
        }
        tracing::debug!("stdin closed");
    });
    rx
}
