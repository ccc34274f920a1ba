//! Implementation of the `editlease shell` command.
//!
//! The shell plays the part of the editor's request handlers: each line is
//! one call into a shared `LockManager`. With a real clock the reaper runs on
//! its own thread; with `--simulated` time only moves on `advance`, and the
//! reaper ticks that fall inside the advanced span are accounted for.
//!
//! ```text
//! acquire <resource> [session]   take the edit lock
//! release <resource> [session]   drop it (mismatches are ignored)
//! commit <resource> [session]    finish an edit: re-validate if configured, then release
//! list [--json]                 show held locks
//! sweep                          run one reaper sweep now
//! session                        print a fresh session token
//! advance <ms>                   move the simulated clock
//! now                            print the current time
//! help                           show this list
//! ```

use super::config::resolve_config;
use crate::cli::ShellArgs;
use chrono::{Duration, SecondsFormat, Utc};
use editlease::clock::{Clock, ManualClock};
use editlease::config::Config;
use editlease::error::{EditLockError, Result};
use editlease::locks::{LockManager, Reaper, ReaperHandle, ReleaseOutcome};
use editlease::session::{SessionId, local_owner};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::sync::Arc;
use tracing::debug;


const HELP: &str = "\
commands:
  acquire <resource> [session]
  release <resource> [session]
  commit <resource> [session]
  list [--json]
  sweep
  session
  advance <ms>      (--simulated only)
  now
  help";

pub fn cmd_shell(args: ShellArgs) -> Result<()> {
    let config = resolve_config(&args.config)?;

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                EditLockError::UserError(format!(
                    "failed to open script '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut shell = if args.simulated {
        Shell::simulated(config)
    } else {
        Shell::live(config)?
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    shell.run(input, &mut out, args.fail_fast)
}

/// How reaper ticks happen in this shell.
enum ReaperDriver {
    /// Real reaper thread on the wall clock. Held so the thread lives as long
    /// as the shell.
    Thread(#[allow(dead_code)] ReaperHandle),
    /// Ticks driven by `advance` on a manual clock.
    Simulated {
        clock: Arc<ManualClock>,
        reaper: Reaper,
        until_tick_ms: u64,
    },
}

pub(crate) struct Shell {
    manager: Arc<LockManager>,
    reaper: ReaperDriver,
    default_session: SessionId,
}

impl Shell {
    /// Wall clock with the reaper thread running.
    pub(crate) fn live(config: Config) -> Result<Self> {
        let manager = Arc::new(LockManager::new(config));
        let handle = Reaper::new(Arc::clone(&manager)).spawn()?;
        Ok(Self {
            manager,
            reaper: ReaperDriver::Thread(handle),
            default_session: local_owner(),
        })
    }

    /// Manual clock starting now; reaper ticks every `sweep_interval_ms` of
    /// simulated time.
    pub(crate) fn simulated(config: Config) -> Self {
        let until_tick_ms = config.sweep_interval_ms;
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let manager = Arc::new(LockManager::with_clock(config, clock.clone()));
        let reaper = Reaper::new(Arc::clone(&manager));
        Self {
            manager,
            reaper: ReaperDriver::Simulated {
                clock,
                reaper,
                until_tick_ms,
            },
            default_session: local_owner(),
        }
    }

    /// Execute every line of `input`, writing results to `out`.
    ///
    /// Errors are reported inline. With `fail_fast`, the first error ends the
    /// run and is returned.
    pub(crate) fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
        fail_fast: bool,
    ) -> Result<()> {
        for line in input.lines() {
            let line = line
                .map_err(|e| EditLockError::UserError(format!("failed to read input: {}", e)))?;

            if let Err(err) = self.execute(&line, out) {
                if fail_fast {
                    return Err(err);
                }
                emit(out, &format!("Error: {}", err))?;
            }
        }
        Ok(())
    }

    /// Execute one command line.
    pub(crate) fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let words = shell_words::split(line)
            .map_err(|e| EditLockError::UserError(format!("failed to parse '{}': {}", line, e)))?;
        let Some((command, rest)) = words.split_first() else {
            return Ok(());
        };
        debug!(command = %command, args = ?rest, "shell command");

        match command.as_str() {
            "acquire" => {
                let (resource, session) = self.resource_and_session(command, rest)?;
                self.manager
                    .try_acquire(resource, &session)
                    .into_result(resource)?;
                emit(out, &format!("acquired {} for {}", resource, session))
            }
            "release" => {
                let (resource, session) = self.resource_and_session(command, rest)?;
                let outcome = self.manager.release(resource, &session);
                emit(out, &describe_release(resource, &session, outcome))
            }
            "commit" => {
                let (resource, session) = self.resource_and_session(command, rest)?;
                let outcome = self.manager.finish_edit(resource, &session)?;
                emit(
                    out,
                    &format!(
                        "committed {}; {}",
                        resource,
                        describe_release(resource, &session, outcome)
                    ),
                )
            }
            "list" if rest.first().is_some_and(|flag| flag == "--json") => {
                expect_args(command, rest, 1)?;
                let json = serde_json::to_string_pretty(&self.manager.list()).map_err(|e| {
                    EditLockError::UserError(format!("failed to serialize locks: {}", e))
                })?;
                emit(out, &json)
            }
            "list" => {
                expect_args(command, rest, 0)?;
                let listing = self.manager.render_list();
                if listing.is_empty() {
                    emit(out, "no locks held")
                } else {
                    emit(out, listing.trim_end())
                }
            }
            "sweep" => {
                expect_args(command, rest, 0)?;
                let removed = self.manager.sweep_expired();
                emit(out, &format!("swept {} expired lease(s)", removed))
            }
            "session" => {
                expect_args(command, rest, 0)?;
                emit(out, SessionId::generate().as_str())
            }
            "advance" => {
                expect_args(command, rest, 1)?;
                let ms: u64 = rest[0].parse().map_err(|_| {
                    EditLockError::UserError(format!(
                        "advance expects milliseconds, got '{}'",
                        rest[0]
                    ))
                })?;
                let removed = self.advance(ms)?;
                emit(
                    out,
                    &format!("advanced {}ms; reaper removed {} lease(s)", ms, removed),
                )
            }
            "now" => {
                expect_args(command, rest, 0)?;
                emit(
                    out,
                    &self
                        .manager
                        .now()
                        .to_rfc3339_opts(SecondsFormat::Millis, true),
                )
            }
            "help" => emit(out, HELP),
            other => Err(EditLockError::UserError(format!(
                "unknown command '{}' (try 'help')",
                other
            ))),
        }
    }

    /// Move the simulated clock forward by `ms`, running the reaper as if it
    /// had ticked at every interval boundary on the way.
    ///
    /// Nothing can acquire mid-advance and expiry only grows with time, so the
    /// last boundary's sweep removes exactly what all of them together would.
    fn advance(&mut self, ms: u64) -> Result<usize> {
        let ReaperDriver::Simulated {
            clock,
            reaper,
            until_tick_ms,
        } = &mut self.reaper
        else {
            return Err(EditLockError::UserError(
                "advance requires --simulated".to_string(),
            ));
        };

        let total = millis(ms)?;
        if clock.now().checked_add_signed(total).is_none() {
            return Err(out_of_range(ms));
        }

        if ms < *until_tick_ms {
            clock.advance(total)?;
            *until_tick_ms -= ms;
            return Ok(0);
        }

        let interval = self.manager.config().sweep_interval_ms;
        let past_last_tick = (ms - *until_tick_ms) % interval;
        clock.advance(millis(ms - past_last_tick)?)?;
        let removed = reaper.tick();
        clock.advance(millis(past_last_tick)?)?;
        *until_tick_ms = interval - past_last_tick;
        Ok(removed)
    }

    fn resource_and_session<'a>(
        &self,
        command: &str,
        rest: &'a [String],
    ) -> Result<(&'a str, SessionId)> {
        match rest {
            [resource] => Ok((resource.as_str(), self.default_session.clone())),
            [resource, session] => Ok((resource.as_str(), SessionId::new(session.as_str()))),
            _ => Err(EditLockError::UserError(format!(
                "usage: {} <resource> [session]",
                command
            ))),
        }
    }
}

fn millis(ms: u64) -> Result<Duration> {
    i64::try_from(ms)
        .ok()
        .and_then(Duration::try_milliseconds)
        .ok_or_else(|| out_of_range(ms))
}

fn out_of_range(ms: u64) -> EditLockError {
    EditLockError::UserError(format!(
        "advance of {}ms is out of range for the simulated clock",
        ms
    ))
}

fn expect_args(command: &str, rest: &[String], count: usize) -> Result<()> {
    if rest.len() != count {
        return Err(EditLockError::UserError(format!(
            "{} takes {} argument(s), got {}",
            command,
            count,
            rest.len()
        )));
    }
    Ok(())
}

fn describe_release(resource: &str, session: &SessionId, outcome: ReleaseOutcome) -> String {
    match outcome {
        ReleaseOutcome::Released => format!("released {}", resource),
        ReleaseOutcome::NotOwner => format!("{} is not held by {} (ignored)", resource, session),
        ReleaseOutcome::NotFound => format!("{} is not locked (ignored)", resource),
    }
}

fn emit<W: Write>(out: &mut W, text: &str) -> Result<()> {
    writeln!(out, "{}", text)
        .map_err(|e| EditLockError::UserError(format!("failed to write output: {}", e)))
}
