use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::OpdError;

/// Hands out queue numbers. Each appointment date runs its own sequence and a
/// number is never handed out twice for the same date.
#[derive(Debug, Clone)]
pub struct TokenDispenser {
    start: u32,
    issued: HashMap<NaiveDate, u32>,
}

impl TokenDispenser {
    pub fn new(start: u32) -> Self {
        Self {
            start: start.max(1),
            issued: HashMap::new(),
        }
    }

    /// Fails once the day's sequence has reached `u32::MAX`; nothing is
    /// recorded in that case.
    pub fn next_token(&mut self, date: NaiveDate) -> Result<u32, OpdError> {
        let token = match self.issued.get(&date) {
            Some(last) => last.checked_add(1).ok_or_else(|| {
                warn!("Token sequence for {} exhausted at {}", date, last);
                OpdError::TokenSequenceExhausted(date)
            })?,
            None => self.start,
        };
        self.issued.insert(date, token);

        debug!("Issued token {} for {}", token, date);
        Ok(token)
    }

    /// Last token handed out for `date`, if any.
    pub fn last_issued(&self, date: NaiveDate) -> Option<u32> {
        self.issued.get(&date).copied()
    }
}

impl Default for TokenDispenser {
    fn default() -> Self {
        Self::new(1)
    }
}
