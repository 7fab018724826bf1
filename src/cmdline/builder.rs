use std::fmt;

/// Builds a displayable command-line string from an argument vector.
///
/// Arguments are separated by single spaces and auto-quoted when ambiguous:
/// an argument containing `"` is wrapped in single quotes (interior characters
/// left alone, even embedded single quotes), and an argument that is empty or
/// contains `'` or a space is wrapped in double quotes. The output is meant
/// for display and logging, not as an injection-safe shell encoding.
#[derive(Debug, Default, Clone)]
pub struct LineBuilder {
    buf: String,
}

impl LineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder seeded with a program name and its arguments.
    pub fn with_program<S: AsRef<str>>(program: &str, args: &[S]) -> Self {
        let mut builder = Self::new();
        builder.add_arg(program);
        builder.add_args(args);
        builder
    }

    /// Append one argument, preceded by a space unless the buffer is empty.
    /// Returns the number of bytes written. Never fails.
    pub fn add_arg(&mut self, arg: &str) -> usize {
        let before = self.buf.len();

        if !self.buf.is_empty() {
            self.buf.push(' ');
        }

        if arg.contains('"') {
            self.buf.push('\'');
            self.buf.push_str(arg);
            self.buf.push('\'');
        } else if arg.is_empty() || arg.contains('\'') || arg.contains(' ') {
            self.buf.push('"');
            self.buf.push_str(arg);
            self.buf.push('"');
        } else {
            self.buf.push_str(arg);
        }

        self.buf.len() - before
    }

    /// Append each argument in order.
    pub fn add_args<S: AsRef<str>>(&mut self, args: &[S]) {
        for arg in args {
            self.add_arg(arg.as_ref());
        }
    }

    /// The accumulated command line. Idempotent.
    pub fn render(&self) -> &str {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Clear accumulated state. The next append emits no leading separator.
    pub fn reset(&mut self) {
        self.buf.clear();
    }
}

impl fmt::Display for LineBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
