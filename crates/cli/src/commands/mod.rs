//! Command implementations.

use serde::Serialize;

pub mod config_cmd;
pub mod entropy;
pub mod index;
pub mod random;
pub mod scaling;

/// Where command results go: human-readable text or pretty JSON on stdout.
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print `value` as JSON, or hand it to `text` for the plain rendering.
    pub fn emit<T: Serialize>(
        &self,
        value: &T,
        text: impl FnOnce(&T),
    ) -> Result<(), Box<dyn std::error::Error>> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            text(value);
        }
        Ok(())
    }
}

/// Explicit seed, else the configured one, else a fresh random seed.
pub fn resolve_seed(explicit: Option<u64>, configured: Option<u64>) -> u64 {
    explicit.or(configured).unwrap_or_else(rand::random)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_seed_wins() {
        assert_eq!(resolve_seed(Some(1), Some(2)), 1);
        assert_eq!(resolve_seed(None, Some(2)), 2);
    }
}
