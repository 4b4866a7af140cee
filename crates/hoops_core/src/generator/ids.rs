use serde::{Deserialize, Serialize};

/// Monotonic player id source.
///
/// Lives inside `GameState` so two peers replaying the same state hand out
/// the same ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdGenerator {
    #[serde(default)]
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue after an existing id (e.g. when resuming from an older save).
    pub fn starting_after(last: u64) -> Self {
        Self { last }
    }

    pub fn next_id(&mut self) -> String {
        self.last += 1;
        format!("p_{}", self.last)
    }

    pub fn last(&self) -> u64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id(), "p_1");
        assert_eq!(ids.next_id(), "p_2");
        assert_eq!(ids.last(), 2);
    }

    #[test]
    fn test_clone_replays_same_ids() {
        let mut a = IdGenerator::starting_after(41);
        let mut b = a.clone();
        assert_eq!(a.next_id(), "p_42");
        assert_eq!(b.next_id(), "p_42");
    }
}
