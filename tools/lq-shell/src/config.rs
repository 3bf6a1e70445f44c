//! Shell options
//!
//! Set from command-line arguments at startup and adjustable with
//! `option name value` while running.

use serde::Serialize;

use crate::error::ShellError;

/// Runtime options of the interpreter
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShellConfig {
    /// Print the queue after every command
    pub verbose: bool,
    /// Probability that a create/insert allocation is refused
    pub fail_probability: f64,
    /// Seed for the failure sequence; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Stop once this many errors have been exceeded
    pub error_limit: usize,
    /// Longest removed value reported by `rh`; the buffer holds one more byte
    pub string_length: usize,
    /// Items printed by `show` before eliding
    pub show_limit: usize,
    /// Element limit passed to the queue; `None` is unlimited
    pub max_elements: Option<usize>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            fail_probability: 0.0,
            seed: None,
            error_limit: 5,
            string_length: 1024,
            show_limit: 50,
            max_elements: None,
        }
    }
}

/// Upper bound on `length`; the `rh` buffer is allocated at this size plus one
pub const MAX_STRING_LENGTH: usize = 1 << 20;

/// Name and description of every settable option
pub const OPTIONS: &[(&str, &str)] = &[
    ("verbose", "Print queue after each command (0/1)"),
    ("fail", "Allocation failure probability (0.0 to 1.0)"),
    ("error", "Number of errors tolerated before stopping"),
    ("length", "Maximum length of removed strings reported by rh"),
    ("show", "Maximum items printed by show"),
    ("capacity", "Maximum queue elements (0 = unlimited)"),
];

impl ShellConfig {
    pub fn validate(&self) -> Result<(), ShellError> {
        if !(0.0..=1.0).contains(&self.fail_probability) {
            return Err(invalid(
                "fail",
                &self.fail_probability.to_string(),
                "must be between 0 and 1",
            ));
        }
        if self.string_length > MAX_STRING_LENGTH {
            return Err(invalid(
                "length",
                &self.string_length.to_string(),
                &format!("must be at most {}", MAX_STRING_LENGTH),
            ));
        }
        if self.max_elements == Some(0) {
            return Err(invalid("capacity", "0", "use 'option capacity 0' for unlimited"));
        }
        Ok(())
    }

    /// Apply `option name value`.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ShellError> {
        let mut updated = self.clone();
        match name {
            "verbose" => updated.verbose = parse_flag(name, value)?,
            "fail" => updated.fail_probability = parse_number(name, value)?,
            "error" => updated.error_limit = parse_number(name, value)?,
            "length" => updated.string_length = parse_number(name, value)?,
            "show" => updated.show_limit = parse_number(name, value)?,
            "capacity" => {
                let max: usize = parse_number(name, value)?;
                updated.max_elements = (max > 0).then_some(max);
            }
            other => return Err(ShellError::UnknownOption(other.to_string())),
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Capacity of the `rh` output buffer, terminator included.
    pub fn remove_buffer_len(&self) -> usize {
        self.string_length.saturating_add(1)
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ShellError> {
    match value {
        "1" | "true" | "on" => Ok(true),
        "0" | "false" | "off" => Ok(false),
        _ => Err(invalid(name, value, "expected 0 or 1")),
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ShellError> {
    value
        .parse()
        .map_err(|_| invalid(name, value, "not a number"))
}

fn invalid(name: &str, value: &str, reason: &str) -> ShellError {
    ShellError::InvalidOption {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
