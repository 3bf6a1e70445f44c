//! Command interpreter
//!
//! Executes parsed commands against a `QueueService` and checks the results
//! it can verify independently: removed values against expectations, sort
//! order, structural invariants. Failed checks and refused operations count
//! as errors; removal from an empty or absent queue is only a warning.

use std::io::{BufRead, Write};

use lq_queue::{
    FaultInjector, MetricsSnapshot, QueueApi, QueueConfig, QueueError, QueueService,
};
use lq_telemetry::log_event;
use serde::Serialize;

use crate::command::{parse_line, Command, COMMANDS};
use crate::config::{ShellConfig, OPTIONS};
use crate::error::ShellError;

/// Whether to keep reading commands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Outcome of a whole run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines that held a command
    pub commands: usize,
    pub errors: usize,
    /// True when the run stopped because the error limit was exceeded
    pub aborted: bool,
}

#[derive(Serialize)]
struct StatsReport {
    metrics: MetricsSnapshot,
    injected_faults: u64,
    errors: usize,
}

/// Reads commands, drives the queue, writes results to `out`.
pub struct Interpreter<W: Write> {
    service: QueueService<FaultInjector>,
    config: ShellConfig,
    out: W,
    errors: usize,
}

impl<W: Write> Interpreter<W> {
    pub fn new(config: ShellConfig, out: W) -> Result<Self, ShellError> {
        config.validate()?;
        let injector = FaultInjector::new(config.fail_probability, config.seed)?;
        let queue_config = QueueConfig {
            max_elements: config.max_elements,
            ..QueueConfig::default()
        };
        let service = QueueService::with_config(injector, queue_config)?;

        Ok(Self {
            service,
            config,
            out,
            errors: 0,
        })
    }

    pub fn errors(&self) -> usize {
        self.errors
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn service(&self) -> &QueueService<FaultInjector> {
        &self.service
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Execute every line of `input` until `quit`, end of input, or the
    /// error limit is exceeded. With `echo`, each command is written back
    /// prefixed by `cmd> `.
    pub fn run<R: BufRead>(&mut self, mut input: R, echo: bool) -> Result<RunSummary, ShellError> {
        let mut summary = RunSummary::default();
        let mut line = String::new();

        loop {
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let trimmed = line.trim_end_matches(['\r', '\n']);
            if echo {
                writeln!(self.out, "cmd> {}", trimmed)?;
            }

            let parsed = match parse_line(trimmed) {
                Ok(parsed) => parsed,
                Err(e) => {
                    summary.commands += 1;
                    self.fail(&e.to_string())?;
                    if self.over_limit()? {
                        summary.aborted = true;
                        break;
                    }
                    continue;
                }
            };
            let Some(command) = parsed else {
                continue;
            };

            summary.commands += 1;
            let flow = self.execute(command)?;
            if self.over_limit()? {
                summary.aborted = true;
                break;
            }
            if flow == Flow::Quit {
                break;
            }
        }

        summary.errors = self.errors;
        Ok(summary)
    }

    /// Parse and execute a single line.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow, ShellError> {
        match parse_line(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Ok(Flow::Continue),
            Err(e) => {
                self.fail(&e.to_string())?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Execute one command. Only output failures are returned as `Err`;
    /// queue failures are reported on `out` and counted.
    pub fn execute(&mut self, command: Command) -> Result<Flow, ShellError> {
        tracing::debug!(command = command.name(), "Executing");

        match command {
            Command::New => {
                if let Err(e) = self.service.create() {
                    self.fail(&format!("Queue creation failed: {}", e))?;
                }
            }
            Command::Free => self.service.destroy(),
            Command::InsertHead { value, count } => self.insert(&value, count, true)?,
            Command::InsertTail { value, count } => self.insert(&value, count, false)?,
            Command::RemoveHead { expected } => self.remove_head(expected.as_deref())?,
            Command::RemoveHeadQuiet => match self.service.remove_head(None) {
                Ok(_) => {}
                Err(e) => self.report_removal_failure(e)?,
            },
            Command::Size { count } => self.size(count)?,
            Command::Reverse => {
                if !self.service.has_queue() {
                    self.warn("Calling reverse on absent queue")?;
                }
                self.service.reverse();
            }
            Command::Sort => self.sort()?,
            Command::Show => {
                self.show()?;
                return Ok(Flow::Continue);
            }
            Command::Stats => {
                self.stats()?;
                return Ok(Flow::Continue);
            }
            Command::Help => {
                self.help()?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Options { assignment } => {
                self.options(assignment)?;
                return Ok(Flow::Continue);
            }
        }

        if self.config.verbose {
            self.show()?;
        }
        Ok(Flow::Continue)
    }

    fn insert(&mut self, value: &str, count: usize, at_head: bool) -> Result<(), ShellError> {
        if !self.service.has_queue() {
            return self.fail("Trying to insert into absent queue");
        }

        for _ in 0..count {
            let result = if at_head {
                self.service.insert_head(value)
            } else {
                self.service.insert_tail(value)
            };
            if let Err(e) = result {
                return self.fail(&format!("Insertion of {} failed: {}", value, e));
            }
        }
        Ok(())
    }

    fn remove_head(&mut self, expected: Option<&str>) -> Result<(), ShellError> {
        let mut buf = vec![0xFFu8; self.config.remove_buffer_len()];
        let written = match self.service.remove_head(Some(&mut buf)) {
            Ok(written) => written,
            Err(e) => return self.report_removal_failure(e),
        };

        if buf.get(written) != Some(&0) {
            return self.fail("Removed value is not terminated");
        }
        let removed = String::from_utf8_lossy(&buf[..written]).into_owned();
        writeln!(self.out, "Removed {} from queue", removed)?;

        if let Some(expected) = expected {
            // Compare against what fits in the buffer, as the queue does
            let bytes = expected.as_bytes();
            let comparable = &bytes[..bytes.len().min(self.config.string_length)];
            if comparable != &buf[..written] {
                return self.fail(&format!(
                    "Removed value {} != expected value {}",
                    removed, expected
                ));
            }
        }
        Ok(())
    }

    fn report_removal_failure(&mut self, error: QueueError) -> Result<(), ShellError> {
        match error {
            QueueError::EmptyQueue => self.warn("Calling remove head on empty queue"),
            QueueError::InvalidHandle => self.warn("Calling remove head on absent queue"),
            other => self.fail(&format!("Removal failed: {}", other)),
        }
    }

    fn size(&mut self, count: usize) -> Result<(), ShellError> {
        let mut size = self.service.size();
        for _ in 1..count {
            size = self.service.size();
        }

        if let Some(queue) = self.service.queue() {
            if let Err(e) = queue.check_invariants() {
                return self.fail(&format!("Computed size {} is inconsistent: {}", size, e));
            }
        } else {
            self.warn("Computing size of absent queue")?;
        }
        writeln!(self.out, "Queue size = {}", size)?;
        Ok(())
    }

    fn sort(&mut self) -> Result<(), ShellError> {
        if !self.service.has_queue() {
            self.warn("Calling sort on absent queue")?;
        }
        self.service.sort();

        let unsorted = self
            .service
            .queue()
            .map(|q| q.values().windows(2).any(|pair| pair[0] > pair[1]))
            .unwrap_or(false);
        if unsorted {
            return self.fail("Not sorted in ascending order");
        }
        Ok(())
    }

    fn show(&mut self) -> Result<(), ShellError> {
        let Some(queue) = self.service.queue() else {
            writeln!(self.out, "q = NULL")?;
            return Ok(());
        };

        if let Err(e) = queue.check_invariants() {
            let message = e.to_string();
            return self.fail(&message);
        }

        let values = queue.values();
        let shown = values.len().min(self.config.show_limit);
        let mut line = format!("q = [{}", values[..shown].join(" "));
        if values.len() > shown {
            line.push_str(" ...");
        }
        line.push(']');
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn stats(&mut self) -> Result<(), ShellError> {
        let report = StatsReport {
            metrics: self.service.metrics(),
            injected_faults: self.service.allocator().injected(),
            errors: self.errors,
        };
        writeln!(self.out, "{}", serde_json::to_string(&report)?)?;
        Ok(())
    }

    fn help(&mut self) -> Result<(), ShellError> {
        writeln!(self.out, "Commands:")?;
        for (_, usage, description) in COMMANDS {
            writeln!(self.out, "  {:<18} | {}", usage, description)?;
        }
        writeln!(self.out, "Options:")?;
        for (name, description) in OPTIONS {
            writeln!(self.out, "  {:<18} | {}", name, description)?;
        }
        Ok(())
    }

    fn options(&mut self, assignment: Option<(String, String)>) -> Result<(), ShellError> {
        let Some((name, value)) = assignment else {
            writeln!(self.out, "{}", serde_json::to_string(&self.config)?)?;
            return Ok(());
        };

        if let Err(e) = self.config.set_option(&name, &value) {
            return self.fail(&e.to_string());
        }

        // Push the new settings down to the queue side
        self.service
            .allocator_mut()
            .set_probability(self.config.fail_probability)?;
        let mut queue_config = self.service.config().clone();
        queue_config.max_elements = self.config.max_elements;
        self.service.set_config(queue_config)?;

        log_event!(info, "shell", "Option updated", name = %name, value = %value);
        Ok(())
    }

    fn fail(&mut self, message: &str) -> Result<(), ShellError> {
        self.errors += 1;
        log_event!(warn, "shell", "Command failed", error = %message, errors = self.errors);
        writeln!(self.out, "ERROR: {}", message)?;
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<(), ShellError> {
        writeln!(self.out, "WARNING: {}", message)?;
        Ok(())
    }

    fn over_limit(&mut self) -> Result<bool, ShellError> {
        if self.errors > self.config.error_limit {
            writeln!(self.out, "Error limit exceeded. Stopping command execution")?;
            log_event!(error, "shell", "Error limit exceeded", errors = self.errors);
            return Ok(true);
        }
        Ok(false)
    }
}
