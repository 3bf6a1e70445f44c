//! Command syntax
//!
//! One command per line. Tokens are separated by whitespace; a token may be
//! wrapped in double quotes to include spaces. An unquoted `#` starts a
//! comment that runs to the end of the line.

use crate::error::ShellError;

/// A syntactically valid shell command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    New,
    Free,
    InsertHead { value: String, count: usize },
    InsertTail { value: String, count: usize },
    /// Remove into a bounded buffer, optionally checking the removed value
    RemoveHead { expected: Option<String> },
    /// Remove without an output buffer
    RemoveHeadQuiet,
    Size { count: usize },
    Reverse,
    Sort,
    Show,
    Stats,
    Help,
    Quit,
    /// List options, or set `name` to `value`
    Options { assignment: Option<(String, String)> },
}

/// Name, usage and description of every command
pub const COMMANDS: &[(&str, &str, &str)] = &[
    ("new", "new", "Create new queue"),
    ("free", "free", "Delete queue"),
    ("ih", "ih str [n]", "Insert string str at head of queue n times (default 1)"),
    ("it", "it str [n]", "Insert string str at tail of queue n times (default 1)"),
    ("rh", "rh [str]", "Remove from head of queue, optionally comparing with str"),
    ("rhq", "rhq", "Remove from head of queue without reporting value"),
    ("size", "size [n]", "Compute queue size n times (default 1)"),
    ("reverse", "reverse", "Reverse queue"),
    ("sort", "sort", "Sort queue in ascending order"),
    ("show", "show", "Display queue contents"),
    ("stats", "stats", "Print operation counters as JSON"),
    ("option", "option [name val]", "Display or set options"),
    ("help", "help", "Show summary"),
    ("quit", "quit", "Exit program"),
];

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Free => "free",
            Self::InsertHead { .. } => "ih",
            Self::InsertTail { .. } => "it",
            Self::RemoveHead { .. } => "rh",
            Self::RemoveHeadQuiet => "rhq",
            Self::Size { .. } => "size",
            Self::Reverse => "reverse",
            Self::Sort => "sort",
            Self::Show => "show",
            Self::Stats => "stats",
            Self::Help => "help",
            Self::Quit => "quit",
            Self::Options { .. } => "option",
        }
    }
}

/// Parse one input line. Blank and comment-only lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ShellError> {
    let tokens = tokenize(line)?;
    let Some((name, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match name.as_str() {
        "new" => no_args(args, Command::New, "new")?,
        "free" => no_args(args, Command::Free, "free")?,
        "ih" => {
            let (value, count) = value_and_count(args, "ih str [n]")?;
            Command::InsertHead { value, count }
        }
        "it" => {
            let (value, count) = value_and_count(args, "it str [n]")?;
            Command::InsertTail { value, count }
        }
        "rh" => match args {
            [] => Command::RemoveHead { expected: None },
            [expected] => Command::RemoveHead {
                expected: Some(expected.clone()),
            },
            _ => return Err(ShellError::Usage { usage: "rh [str]" }),
        },
        "rhq" => no_args(args, Command::RemoveHeadQuiet, "rhq")?,
        "size" => match args {
            [] => Command::Size { count: 1 },
            [n] => Command::Size {
                count: parse_count(n)?,
            },
            _ => return Err(ShellError::Usage { usage: "size [n]" }),
        },
        "reverse" => no_args(args, Command::Reverse, "reverse")?,
        "sort" => no_args(args, Command::Sort, "sort")?,
        "show" => no_args(args, Command::Show, "show")?,
        "stats" => no_args(args, Command::Stats, "stats")?,
        "help" => no_args(args, Command::Help, "help")?,
        "quit" => no_args(args, Command::Quit, "quit")?,
        "option" => match args {
            [] => Command::Options { assignment: None },
            [name, value] => Command::Options {
                assignment: Some((name.clone(), value.clone())),
            },
            _ => {
                return Err(ShellError::Usage {
                    usage: "option [name val]",
                })
            }
        },
        other => return Err(ShellError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn no_args(args: &[String], command: Command, usage: &'static str) -> Result<Command, ShellError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(ShellError::Usage { usage })
    }
}

fn value_and_count(args: &[String], usage: &'static str) -> Result<(String, usize), ShellError> {
    match args {
        [value] => Ok((value.clone(), 1)),
        [value, n] => Ok((value.clone(), parse_count(n)?)),
        _ => Err(ShellError::Usage { usage }),
    }
}

fn parse_count(raw: &str) -> Result<usize, ShellError> {
    raw.parse().map_err(|_| ShellError::InvalidNumber {
        what: "repeat count",
        value: raw.to_string(),
    })
}

fn tokenize(line: &str) -> Result<Vec<String>, ShellError> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c == '#' {
            break;
        } else if c == '"' {
            chars.next();
            let mut token = String::new();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '"' {
                    closed = true;
                    break;
                }
                token.push(c);
            }
            if !closed {
                return Err(ShellError::UnterminatedQuote(line.to_string()));
            }
            tokens.push(token);
        } else {
            let mut token = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                token.push(c);
                chars.next();
            }
            tokens.push(token);
        }
    }

    Ok(tokens)
}
