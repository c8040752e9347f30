use crate::entry::EntryId;

/// Issues identifiers for entries whose source carries none
pub trait IdSource {
    fn next_id(&mut self) -> EntryId;
}

/// Deterministic ids: `1`, `2`, `3`, ...
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    last: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue after `last`, e.g. the highest id already in use
    pub fn starting_after(last: u64) -> Self {
        Self { last }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> EntryId {
        self.last += 1;
        EntryId::new(self.last.to_string())
    }
}

/// Random v4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> EntryId {
        EntryId::new(uuid::Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id().as_str(), "1");
        assert_eq!(ids.next_id().as_str(), "2");

        let mut ids = SequentialIds::starting_after(41);
        assert_eq!(ids.next_id().as_str(), "42");
    }

    #[test]
    fn test_random_ids_are_unique() {
        let mut ids = RandomIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
