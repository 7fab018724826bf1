use std::process::Command;

use crate::envutil;

const SINGLE: u8 = b'\'';
const DOUBLE: u8 = b'"';

/// Quote state carried across fragments while merging a multi-word span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quoting {
    None,
    Single,
    Double,
}

impl Quoting {
    fn open(byte: u8) -> Option<Self> {
        match byte {
            SINGLE => Some(Quoting::Single),
            DOUBLE => Some(Quoting::Double),
            _ => None,
        }
    }
}

fn is_quote(byte: u8) -> bool {
    byte == SINGLE || byte == DOUBLE
}

/// Splits one raw command line into argument tokens.
///
/// Quoted spans may contain spaces and the *other* quote character. Malformed
/// quoting never fails: a stray trailing quote is stripped, a trailing quote
/// of the wrong kind still closes the pending span, and an unterminated span
/// is emitted as a final token. This leniency is deliberate; callers feeding
/// hand-typed lines get a best-effort token vector instead of a syntax error.
///
/// The first call to [`parse`](LineParser::parse) tokenizes and caches;
/// repeat calls return the cached tokens without recomputation.
#[derive(Debug, Clone)]
pub struct LineParser {
    line: String,
    parse_env: bool,
    parsed: bool,
    tokens: Vec<String>,
}

impl LineParser {
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            parse_env: false,
            parsed: false,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the line. First call computes, later calls return the cache.
    /// A blank line yields an empty token list. Never errors.
    pub fn parse(&mut self) -> &[String] {
        if self.parsed {
            return &self.tokens;
        }
        self.parsed = true;

        let line = if self.parse_env {
            envutil::parse_env_value(&self.line)
        } else {
            self.line.clone()
        };

        let line = line.trim();
        if line.is_empty() {
            return &self.tokens;
        }

        let mut pending = Quoting::None;
        let mut partial = String::new();

        for fragment in line.split(' ') {
            if fragment.is_empty() {
                continue;
            }

            let bytes = fragment.as_bytes();
            let first = bytes[0];
            let last = bytes[bytes.len() - 1];

            match pending {
                Quoting::None => {
                    if let Some(quote) = Quoting::open(first) {
                        if fragment.len() > 1 && last == first {
                            // complete standalone quoted token; `""`/`''`
                            // legitimately yield an empty token
                            self.tokens
                                .push(fragment[1..fragment.len() - 1].to_string());
                        } else {
                            pending = quote;
                            partial.push_str(&fragment[1..]);
                        }
                    } else if is_quote(last) {
                        // missing opening quote; strip the stray closer
                        self.tokens
                            .push(fragment[..fragment.len() - 1].to_string());
                    } else {
                        self.tokens.push(fragment.to_string());
                    }
                }
                Quoting::Single | Quoting::Double => {
                    // restore the space the raw split removed
                    partial.push(' ');
                    if is_quote(last) {
                        // a differing quote character still closes the span
                        partial.push_str(&fragment[..fragment.len() - 1]);
                        self.tokens.push(std::mem::take(&mut partial));
                        pending = Quoting::None;
                    } else {
                        partial.push_str(fragment);
                    }
                }
            }
        }

        // unterminated span: emit what accumulated instead of erroring
        if !partial.is_empty() {
            self.tokens.push(partial);
        }

        &self.tokens
    }

    /// Expand `${VAR}` / `${VAR|default}` references before tokenizing.
    /// No effect if the line was already parsed.
    pub fn parse_with_env_expansion(&mut self) -> &[String] {
        self.parse_env = true;
        self.parse()
    }

    /// Split into the program name (first token) and the remaining arguments.
    /// Zero tokens yield an empty program name and no arguments.
    pub fn split_program_and_args(&mut self) -> (String, Vec<String>) {
        self.parse();

        let program = self.tokens.first().cloned().unwrap_or_default();
        let args = if self.tokens.len() > 1 {
            self.tokens[1..].to_vec()
        } else {
            Vec::new()
        };

        (program, args)
    }

    /// Build a [`Command`] bound to the parsed program and arguments.
    ///
    /// Construction never fails, even for an empty or nonexistent program;
    /// the OS error surfaces when the returned command is spawned.
    pub fn to_command(&mut self) -> Command {
        let (program, args) = self.split_program_and_args();
        let mut cmd = Command::new(program);
        if !args.is_empty() {
            cmd.args(&args);
        }
        cmd
    }
}
