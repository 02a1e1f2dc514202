//! Variable substitution for `{{variable}}` syntax
//!
//! Substitution is a single pass over the original string: values spliced
//! in are never rescanned, so a variable value containing `{{other}}`
//! stays literal. Unknown placeholders are left verbatim.

use std::collections::BTreeMap;
use std::ops::Range;

/// A parsed variable reference in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReference {
    /// The variable name (without `{{ }}`).
    pub name: String,
    /// Byte range in the original string where this reference appears.
    pub span: Range<usize>,
}

/// Parses a string and extracts all `{{name}}` references.
///
/// Whitespace inside the braces is trimmed from the name; empty or
/// unterminated references are ignored.
#[must_use]
pub fn parse_variables(input: &str) -> Vec<VariableReference> {
    let mut references = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if ch != '{' {
            continue;
        }
        let Some((_, '{')) = chars.peek() else {
            continue;
        };
        chars.next(); // consume second {

        let start = i;
        let mut name = String::new();
        let mut found_end = false;

        while let Some((_, ch)) = chars.next() {
            if ch == '}' {
                if let Some((end_idx, '}')) = chars.peek() {
                    let end = *end_idx + 1;
                    chars.next(); // consume second }

                    let trimmed = name.trim();
                    if !trimmed.is_empty() {
                        references.push(VariableReference {
                            name: trimmed.to_string(),
                            span: start..end,
                        });
                    }
                    found_end = true;
                    break;
                }
            }
            name.push(ch);
        }

        // Unterminated reference: nothing further can close it either.
        if !found_end {
            break;
        }
    }

    references
}

/// Replaces every `{{name}}` whose name appears in `vars` with its value.
///
/// Unknown placeholders are kept verbatim; an empty mapping makes this the
/// identity function. Substituted values are not rescanned.
#[must_use]
pub fn substitute(input: &str, vars: &BTreeMap<String, String>) -> String {
    let references = parse_variables(input);
    if references.is_empty() || vars.is_empty() {
        return input.to_string();
    }

    let mut result = String::with_capacity(input.len());
    let mut last_end = 0;

    for var_ref in &references {
        result.push_str(&input[last_end..var_ref.span.start]);

        if let Some(value) = vars.get(&var_ref.name) {
            result.push_str(value);
        } else {
            // Keep the original {{name}} for unknown variables
            result.push_str(&input[var_ref.span.clone()]);
        }

        last_end = var_ref.span.end;
    }

    result.push_str(&input[last_end..]);
    result
}
