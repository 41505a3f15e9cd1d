use std::collections::HashSet;

use rand::Rng;

use crate::model::row::RowId;

/// Size of the generated id space (6 decimal digits)
pub const ID_SPACE: u32 = 1_000_000;

/// Random draws before falling back to a linear scan
const MAX_RANDOM_ATTEMPTS: usize = 64;

/// Error type for id generation
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    #[error("no free row id left: all {0} six-digit ids are in use")]
    Exhausted(u32),
}

/// Produce a 6-digit row id not present in `existing`.
///
/// Draws uniformly from `0..1_000_000`, retrying on collision. After
/// `MAX_RANDOM_ATTEMPTS` collisions, scans the space in order and returns the
/// first free id, so the call always terminates.
pub fn generate_row_id<R: Rng + ?Sized>(existing: &[RowId], rng: &mut R) -> Result<RowId, IdError> {
    let taken: HashSet<&str> = existing.iter().map(RowId::as_str).collect();
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let candidate = RowId::from_number(rng.gen_range(0..ID_SPACE));
        if !taken.contains(candidate.as_str()) {
            return Ok(candidate);
        }
    }

    log::warn!(
        "[taskcard.id_gen] {} random collisions against {} rows, scanning for a free id",
        MAX_RANDOM_ATTEMPTS,
        existing.len()
    );
    (0..ID_SPACE)
        .map(RowId::from_number)
        .find(|id| !taken.contains(id.as_str()))
        .ok_or(IdError::Exhausted(ID_SPACE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Rng that always yields the same value
    struct ConstRng(u64);

    impl rand::RngCore for ConstRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }
        fn next_u64(&mut self) -> u64 {
            self.0
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for b in dest.iter_mut() {
                *b = 0;
            }
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn generated_id_is_six_digits() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let id = generate_row_id(&[], &mut rng).unwrap();
            assert!(id.is_generated(), "bad id {}", id);
        }
    }

    #[test]
    fn generated_id_avoids_existing() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut existing = vec![RowId::from("date"), RowId::from("status")];
        for _ in 0..500 {
            let id = generate_row_id(&existing, &mut rng).unwrap();
            assert!(!existing.contains(&id));
            existing.push(id);
        }
    }

    #[test]
    fn falls_back_to_scan_when_rng_keeps_colliding() {
        let mut rng = ConstRng(0);
        let first = generate_row_id(&[], &mut rng).unwrap();
        // a constant rng always draws the same id; with it taken the scan must kick in
        let existing = vec![first.clone()];
        let second = generate_row_id(&existing, &mut rng).unwrap();
        assert_ne!(first, second);
        assert!(second.is_generated());
    }

    #[test]
    fn scan_picks_lowest_free_id() {
        let mut rng = ConstRng(0);
        let drawn = generate_row_id(&[], &mut rng).unwrap();
        let mut existing: Vec<RowId> = (0..10).map(RowId::from_number).collect();
        existing.push(drawn.clone());
        let id = generate_row_id(&existing, &mut rng).unwrap();
        let expected = (0..ID_SPACE)
            .map(RowId::from_number)
            .find(|c| !existing.contains(c))
            .unwrap();
        assert_eq!(id, expected);
    }

    #[test]
    fn full_id_space_is_exhausted() {
        let existing: Vec<RowId> = (0..ID_SPACE).map(RowId::from_number).collect();
        let mut rng = StdRng::seed_from_u64(5);
        let result = generate_row_id(&existing, &mut rng);
        assert!(matches!(result, Err(IdError::Exhausted(ID_SPACE))));
    }

    #[test]
    fn last_free_id_is_found() {
        let last = ID_SPACE - 1;
        let existing: Vec<RowId> = (0..last).map(RowId::from_number).collect();
        let mut rng = StdRng::seed_from_u64(5);
        let id = generate_row_id(&existing, &mut rng).unwrap();
        assert_eq!(id, RowId::from_number(last));
    }
}
