//! Template-driven code writer with automatic indentation tracking.
//!
//! This module provides the only component that touches the output buffer:
//! a [`Printer`] that substitutes `$name$` placeholders from a [`Vars`]
//! dictionary and prefixes every non-empty output line with the current
//! indentation. All other modules produce strings or variable dictionaries
//! and feed them here.
//!
//! # Contract violations fail fast
//!
//! A placeholder with no matching variable, an unterminated `$`, or an
//! outdent below level zero each abort emission with an error rather than
//! silently producing a corrupt unit.
//!
//! # Example
//!
//! ```
//! use xrpc_codegen::code_writer::{Printer, Vars};
//!
//! let mut p = Printer::new();
//! let vars = Vars::new().with("name", "Greeter");
//! p.print(&vars, "interface $name$ {\n").unwrap();
//! p.indent();
//! p.print_raw("int x;\n");
//! p.outdent().unwrap();
//! p.print_raw("}\n");
//! assert_eq!(p.into_string(), "interface Greeter {\n  int x;\n}\n");
//! ```

use crate::error::{Error, Result};

/// Two spaces per indentation level, matching the upstream schema
/// compiler's printer.
const INDENT: &str = "  ";

/// An ordered variable dictionary for template substitution.
///
/// Keys keep insertion order; setting an existing key overwrites its value
/// in place. Built by value so each emission call receives exactly the
/// bindings it needs, rebuilt per method rather than mutated across calls.
#[derive(Debug, Clone, Default)]
pub struct Vars {
    entries: Vec<(&'static str, String)>,
}

impl Vars {
    pub fn new() -> Self {
        Vars::default()
    }

    /// Bind `key` to `value`, replacing any existing binding.
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// An indentation-aware text sink for one output unit.
///
/// Scoped to a single generated file and discarded afterward; no state is
/// shared between units.
#[derive(Debug)]
pub struct Printer {
    buf: String,
    indent: usize,
    at_line_start: bool,
}

impl Printer {
    pub fn new() -> Self {
        Printer {
            buf: String::new(),
            indent: 0,
            at_line_start: true,
        }
    }

    /// Emit `template`, substituting each `$name$` placeholder from `vars`.
    ///
    /// `$$` emits a literal `$`. A placeholder naming an unbound variable or
    /// a `$` with no closing `$` is a fatal error.
    pub fn print(&mut self, vars: &Vars, template: &str) -> Result<()> {
        let mut rest = template;
        while let Some(pos) = rest.find('$') {
            self.write(&rest[..pos]);
            let after = &rest[pos + 1..];
            let end = after.find('$').ok_or_else(|| Error::UnterminatedVariable {
                template: template.to_string(),
            })?;
            let name = &after[..end];
            if name.is_empty() {
                self.write("$");
            } else {
                let value = vars.get(name).ok_or_else(|| Error::UndefinedVariable {
                    name: name.to_string(),
                })?;
                self.write(value);
            }
            rest = &after[end + 1..];
        }
        self.write(rest);
        Ok(())
    }

    /// Emit fixed text verbatim, with indentation but no substitution.
    pub fn print_raw(&mut self, text: &str) {
        self.write(text);
    }

    /// Increase the indentation applied to subsequent lines.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease the indentation. Outdenting below zero is a fatal error.
    pub fn outdent(&mut self) -> Result<()> {
        if self.indent == 0 {
            return Err(Error::IndentUnderflow);
        }
        self.indent -= 1;
        Ok(())
    }

    /// Consume the printer and return the accumulated text.
    pub fn into_string(self) -> String {
        self.buf
    }

    fn write(&mut self, text: &str) {
        let mut rest = text;
        while let Some(nl) = rest.find('\n') {
            self.write_line_fragment(&rest[..nl]);
            self.buf.push('\n');
            self.at_line_start = true;
            rest = &rest[nl + 1..];
        }
        self.write_line_fragment(rest);
    }

    // Empty fragments at line start stay empty: blank lines carry no
    // indentation.
    fn write_line_fragment(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        if self.at_line_start {
            for _ in 0..self.indent {
                self.buf.push_str(INDENT);
            }
            self.at_line_start = false;
        }
        self.buf.push_str(fragment);
    }
}
