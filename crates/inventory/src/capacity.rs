use serde::{Deserialize, Serialize};

use bakeryplan_core::{DomainError, DomainResult};

/// Total production units still obtainable in the planning period.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capacity(u64);

impl Capacity {
    pub const DEFAULT: u64 = 2_000;

    pub fn new(units: u64) -> Self {
        Self(units)
    }

    pub fn remaining(&self) -> u64 {
        self.0
    }

    pub fn is_exhausted(&self) -> bool {
        self.0 == 0
    }

    pub fn consume(&mut self, units: u64) -> DomainResult<()> {
        self.0 = self.0.checked_sub(units).ok_or_else(|| {
            DomainError::invariant(format!(
                "capacity cannot go negative (remaining {}, requested {units})",
                self.0
            ))
        })?;
        Ok(())
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_until_exhausted() {
        let mut capacity = Capacity::new(15);
        capacity.consume(10).unwrap();
        assert_eq!(capacity.remaining(), 5);
        capacity.consume(5).unwrap();
        assert!(capacity.is_exhausted());
    }

    #[test]
    fn overdraw_is_rejected() {
        let mut capacity = Capacity::new(5);
        assert!(capacity.consume(10).is_err());
        assert_eq!(capacity.remaining(), 5);
    }
}
