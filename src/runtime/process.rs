//! Subprocess execution for normalized commands
//!
//! Two strategies are supported, selected by [`ExecutionMode`]:
//!
//! - **Shell**: the command text goes to `<shell> -c` untouched. Recorded
//!   commands may rely on quoting, pipes or redirections, and this keeps them
//!   working. It also means the runner executes whatever the files say, so
//!   it must only be pointed at trusted directories.
//! - **Direct**: the text is split into words with POSIX-like quoting rules
//!   and the first word is resolved on `PATH` and spawned with the rest as
//!   arguments. No shell is involved.

use crate::core::{Error, ExecutionMode, ExecutionResult, Result, RunnerConfig};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Run `command` according to `config` and capture its output
///
/// With a timeout configured the child is started in a process group of
/// its own, so that expiry takes down everything the command spawned
/// (pipelines, subshells) and not just the shell itself.
pub async fn execute_command(config: &RunnerConfig, command: &str) -> Result<ExecutionResult> {
    let timeout = config.timeout();
    let mut cmd = build_command(config, command)?;
    if timeout.is_some() {
        isolate_process_group(&mut cmd);
    }
    run_with_timeout(cmd, timeout).await
}

fn build_command(config: &RunnerConfig, command: &str) -> Result<Command> {
    let mut cmd = match config.mode {
        ExecutionMode::Shell => {
            let mut cmd = Command::new(&config.shell);
            cmd.arg("-c").arg(command);
            cmd
        }
        ExecutionMode::Direct => {
            let argv = split_command(command)?;
            let (program, args) = argv
                .split_first()
                .ok_or_else(|| Error::invalid_command("command is empty"))?;
            let resolved = which::which(program)
                .map_err(|_| Error::ProgramNotFound(program.clone()))?;
            let mut cmd = Command::new(resolved);
            cmd.args(args);
            cmd
        }
    };

    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    Ok(cmd)
}

async fn run_with_timeout(mut cmd: Command, timeout: Option<Duration>) -> Result<ExecutionResult> {
    let program = cmd.as_std().get_program().to_string_lossy().into_owned();
    debug!(program = %program, ?timeout, "spawning command");

    let child = cmd.spawn().map_err(|source| Error::Spawn {
        program: program.clone(),
        source,
    })?;

    let output = match timeout {
        Some(limit) => {
            let pid = child.id();
            match tokio::time::timeout(limit, child.wait_with_output()).await {
                Ok(output) => output?,
                Err(_) => {
                    // kill_on_drop only reaches the direct child
                    // once the future is dropped; take the group down too.
                    if let Some(pid) = pid {
                        kill_process_group(pid);
                    }
                    return Err(Error::Timeout(limit.as_secs()));
                }
            }
        }
        None => child.wait_with_output().await?,
    };

    debug!(program = %program, status = ?output.status, "command finished");
    Ok(ExecutionResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(unix)]
fn isolate_process_group(cmd: &mut Command) {
    cmd.process_group(0);
}

#[cfg(not(unix))]
fn isolate_process_group(_cmd: &mut Command) {}

/// Kill every process of the group led by `pgid`
#[cfg(unix)]
fn kill_process_group(pgid: u32) {
    let Ok(pgid) = libc::pid_t::try_from(pgid) else {
        return;
    };
    // SAFETY: killpg takes plain integers and touches no memory of ours.
    let rc = unsafe { libc::killpg(pgid, libc::SIGKILL) };
    if rc != 0 {
        debug!(pgid, error = %std::io::Error::last_os_error(), "failed to kill process group");
    }
}

#[cfg(not(unix))]
fn kill_process_group(_pgid: u32) {}

/// Split a command line into words
///
/// Supports the quoting found in recorded curl invocations: single quotes
/// are fully literal, double quotes allow `\"`, `\\`, `\$` and `` \` ``
/// escapes, and outside quotes a backslash escapes the next character.
/// Shell operators such as `|` or `>` are not interpreted and end up as
/// plain words.
pub fn split_command(command: &str) -> Result<Vec<String>> {
    #[derive(PartialEq)]
    enum State {
        Normal,
        Single,
        Double,
    }

    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut state = State::Normal;
    let mut chars = command.chars();

    while let Some(c) = chars.next() {
        match state {
            State::Normal => match c {
                '\'' => {
                    state = State::Single;
                    in_word = true;
                }
                '"' => {
                    state = State::Double;
                    in_word = true;
                }
                '\\' => match chars.next() {
                    // line continuation
                    Some('\n') => {}
                    Some(next) => {
                        current.push(next);
                        in_word = true;
                    }
                    None => {
                        return Err(Error::invalid_command("trailing backslash"));
                    }
                },
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
            State::Single => match c {
                '\'' => state = State::Normal,
                c => current.push(c),
            },
            State::Double => match c {
                '"' => state = State::Normal,
                '\\' => match chars.next() {
                    Some(next @ ('"' | '\\' | '$' | '`')) => current.push(next),
                    Some('\n') => {}
                    Some(next) => {
                        current.push('\\');
                        current.push(next);
                    }
                    None => {
                        return Err(Error::invalid_command("unterminated double quote"));
                    }
                },
                c => current.push(c),
            },
        }
    }

    match state {
        State::Single => Err(Error::invalid_command("unterminated single quote")),
        State::Double => Err(Error::invalid_command("unterminated double quote")),
        State::Normal => {
            if in_word {
                words.push(current);
            }
            Ok(words)
        }
    }
}
