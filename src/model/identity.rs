use std::cell::Cell;

use chrono::{DateTime, Utc};
use rand::Rng;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

pub trait IdSource {
    fn next_id(&self, now: DateTime<Utc>) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

const RANDOM_SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut rng = rand::thread_rng();
        let mut id = to_base36(now.timestamp_millis().max(0) as u64);
        for _ in 0..RANDOM_SUFFIX_LEN {
            id.push(BASE36[rng.gen_range(0..BASE36.len())] as char);
        }
        id
    }
}

#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: Cell<u64>,
}

impl SequentialIds {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: Cell::new(1),
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self, _now: DateTime<Utc>) -> String {
        let n = self.next.get();
        self.next.set(n + 1);
        format!("{}-{}", self.prefix, n)
    }
}

pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/identity.rs"]
mod tests;
