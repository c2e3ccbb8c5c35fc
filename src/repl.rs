//! The interactive read loop.
//!
//! Reads lines from any async buffered reader, hands them to the
//! interpreter, and writes replies to any async writer. `main` wires it to
//! stdin and stdout; tests wire it to in-memory buffers.

use crate::config::Config;
use crate::interpreter::{CommandInterpreter, Evaluation, HELP};
use crate::observability::{MetricsTracker, Timer};
use crate::repositories::ContactRepository;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

/// Lines that end the session, compared case-insensitively.
pub const EXIT_PHRASES: [&str; 3] = ["exit", "good bye", "close"];

/// Farewell printed when the session ends.
pub const GOODBYE: &str = "Bye";

/// True for an empty line or one of the [`EXIT_PHRASES`].
///
/// Only the line terminator is stripped. A line of spaces is not empty and
/// goes to the interpreter like any other command.
pub fn is_exit_phrase(line: &str) -> bool {
    let line = line.trim_end_matches('\r').to_lowercase();
    line.is_empty() || EXIT_PHRASES.contains(&line.as_str())
}

/// Run a session until an exit phrase or end of input.
///
/// A pending deletion reads exactly one more line as its answer; end of
/// input at that point declines the deletion.
pub async fn run<R, I, O>(
    interpreter: &mut CommandInterpreter<R>,
    config: &Config,
    input: I,
    output: &mut O,
) -> io::Result<MetricsTracker>
where
    R: ContactRepository,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut metrics = MetricsTracker::new();

    if config.show_banner {
        output.write_all(HELP.as_bytes()).await?;
        output.write_all(b"\n").await?;
    }

    info!("Session started");

    loop {
        output.write_all(config.prompt.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if is_exit_phrase(&line) {
            break;
        }

        let timer = Timer::start();
        let evaluation = interpreter.evaluate(&line);
        let mut duration_us = timer.elapsed_us();

        let reply = match evaluation {
            Evaluation::Reply(reply) => reply,
            Evaluation::Confirm(pending) => {
                output
                    .write_all(format!("{}\n{}", pending.prompt(), config.prompt).as_bytes())
                    .await?;
                output.flush().await?;

                let answer = lines.next_line().await?.unwrap_or_else(|| "n".to_string());
                metrics.track_confirmation();

                // Time spent waiting for the answer is not command time
                let timer = Timer::start();
                let reply = interpreter.confirm_delete(pending, &answer);
                duration_us += timer.elapsed_us();
                reply
            }
        };
        metrics.track_command(duration_us, reply.error_kind());

        output.write_all(reply.text().as_bytes()).await?;
        output.write_all(b"\n").await?;
    }

    output.write_all(GOODBYE.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;

    info!(
        commands = metrics.commands_total(),
        errors = metrics.command_errors_total(),
        "Session ended"
    );
    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_phrases() {
        assert!(is_exit_phrase(""));
        assert!(is_exit_phrase("\r"));
        assert!(is_exit_phrase("exit"));
        assert!(is_exit_phrase("EXIT"));
        assert!(is_exit_phrase("Good Bye"));
        assert!(is_exit_phrase("close\r"));
        assert!(!is_exit_phrase("   "));
        assert!(!is_exit_phrase(" close "));
        assert!(!is_exit_phrase("exit "));
        assert!(!is_exit_phrase("goodbye"));
        assert!(!is_exit_phrase("show all"));
    }
}
