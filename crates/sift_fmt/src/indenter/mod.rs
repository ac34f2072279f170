//! Indent-unit based text layout.

/// Indent unit used by [`Indenter::default`]: four spaces.
pub const DEFAULT_UNIT: &str = "    ";

/// Applies and removes indentation in whole units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Indenter {
    unit: String,
}

impl Default for Indenter {
    fn default() -> Self {
        Self::new(DEFAULT_UNIT)
    }
}

impl Indenter {
    /// An indenter that indents by `unit` per level.
    pub fn new(unit: impl Into<String>) -> Self {
        Self { unit: unit.into() }
    }

    /// The text inserted per indentation level.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Prefix `text` with `amount` indent units.
    pub fn indent(&self, text: &str, amount: usize) -> String {
        let mut out = self.unit.repeat(amount);
        out.push_str(text);
        out
    }

    /// Indent every line of `text` by `amount` units.
    ///
    /// Lines are split on `\n`; a trailing `\r` stays with its line.
    pub fn indent_lines(&self, text: &str, amount: usize) -> String {
        if amount == 0 {
            return text.to_owned();
        }
        text.split('\n')
            .map(|line| self.indent(line, amount))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Wrap `text` in a brace-delimited block, indenting its lines by `amount`.
    ///
    /// ```text
    /// {
    ///     text
    /// }
    /// ```
    pub fn create_block(&self, text: &str, amount: usize) -> String {
        format!("{{\n{}\n}}", self.indent_lines(text, amount))
    }

    /// Strip the indentation shared by every non-blank line.
    ///
    /// The common leading whitespace is measured in characters and rounded
    /// down to a whole number of indent units, so partial units survive.
    /// Whitespace-only lines do not take part in the measurement and lose
    /// at most the stripped amount. Text without any non-blank line, or an
    /// indenter with an empty unit, leaves `text` unchanged.
    pub fn remove_redundant_indentation(&self, text: &str) -> String {
        let width = self.unit.chars().count();
        let Some(shared) = text.split('\n').filter_map(leading_whitespace).min() else {
            return text.to_owned();
        };
        if width == 0 {
            return text.to_owned();
        }
        let strip = shared / width * width;
        text.split('\n')
            .map(|line| drop_chars(line, strip))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Join two strings with `amount` newlines between them.
///
/// Empty operands are not joined: if either side is empty the other is
/// returned as-is. With `amount == 0` the strings are concatenated.
pub fn join_with_newlines(first: &str, second: &str, amount: usize) -> String {
    if amount == 0 {
        return [first, second].concat();
    }
    if first.is_empty() {
        return second.to_owned();
    }
    if second.is_empty() {
        return first.to_owned();
    }
    let mut out = String::with_capacity(first.len() + amount + second.len());
    out.push_str(first);
    out.push_str(&"\n".repeat(amount));
    out.push_str(second);
    out
}

/// Count of leading whitespace characters, or `None` for a blank line.
fn leading_whitespace(line: &str) -> Option<usize> {
    line.chars().position(|ch| !ch.is_whitespace())
}

/// `line` without its first `n` characters.
fn drop_chars(line: &str, n: usize) -> &str {
    line.char_indices().nth(n).map_or("", |(offset, _)| &line[offset..])
}
