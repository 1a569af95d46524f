//! Identifier source port.
//!
//! Storage adapters key their rows with opaque ids drawn from an `IdSource`.
//! Ids never take part in domain equality.

use uuid::Uuid;

/// Produces unique opaque identifiers.
pub trait IdSource: Send + Sync + 'static {
    fn next_id(&self) -> Uuid;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_ids_are_unique() {
        let ids = RandomIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
