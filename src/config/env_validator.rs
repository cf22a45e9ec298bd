//! Validation of enumerated environment variable values
//!
//! An invalid value is reported with a typo suggestion and the caller's
//! default is used instead.

use std::fmt;
use std::io::Write;

/// An environment variable held a value outside its allowed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEnvValue {
    pub var_name: String,
    pub value: String,
    pub suggestion: Option<String>,
    pub valid_values: Vec<String>,
}

impl fmt::Display for InvalidEnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Warning: Invalid {} value '{}'", self.var_name, self.value)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, ". Did you mean '{suggestion}'?")?;
        }
        write!(f, "\nValid values: {}", self.valid_values.join(", "))
    }
}

pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, describing the failure when `parser` rejects it
    pub fn check<T, F>(&self, value: &str, parser: F) -> Result<T, InvalidEnvValue>
    where
        F: Fn(&str) -> Option<T>,
    {
        parser(value).ok_or_else(|| InvalidEnvValue {
            var_name: self.var_name.to_string(),
            value: value.to_string(),
            suggestion: self.suggest(value).map(str::to_string),
            valid_values: self.valid_values.iter().map(|v| v.to_string()).collect(),
        })
    }

    /// Parse a value, returning default if invalid (warning on stderr)
    pub fn parse<T, F>(&self, value: &str, parser: F, default: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        self.parse_with_writer(value, parser, default, &mut std::io::stderr())
    }

    pub fn parse_with_writer<T, F, W>(
        &self,
        value: &str,
        parser: F,
        default: T,
        writer: &mut W,
    ) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        match self.check(value, parser) {
            Ok(parsed) => parsed,
            Err(invalid) => {
                tracing::warn!(var = self.var_name, value, "ignoring invalid environment value");
                let _ = writeln!(writer, "{invalid}");
                default
            }
        }
    }

    /// Closest allowed value within two edits
    fn suggest(&self, value: &str) -> Option<&'a str> {
        let input = value.trim().to_lowercase();
        self.valid_values
            .iter()
            .map(|valid| (*valid, levenshtein(&input, valid)))
            .min_by_key(|(_, dist)| *dist)
            .filter(|(_, dist)| (1..=2).contains(dist))
            .map(|(valid, _)| valid)
    }
}

/// Edit distance over chars, used for typo suggestions
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len());
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ac != bc);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
