//! Bounded generation counter.
//!
//! A slot is reserved before the generator runs and only counted once a
//! schedule has been installed. Dropping an uncommitted reservation gives the
//! slot back, so failed generations never use up the allowance.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::errors::AppError;

#[derive(Debug)]
struct Counters {
    limit: u32,
    /// Committed plus in-flight reservations.
    reserved: AtomicU32,
    committed: AtomicU32,
}

#[derive(Debug, Clone)]
pub struct GenerationQuota {
    inner: Arc<Counters>,
}

impl GenerationQuota {
    pub fn new(limit: u32) -> Self {
        Self {
            inner: Arc::new(Counters {
                limit,
                reserved: AtomicU32::new(0),
                committed: AtomicU32::new(0),
            }),
        }
    }

    pub fn limit(&self) -> u32 {
        self.inner.limit
    }

    pub fn used(&self) -> u32 {
        self.inner.committed.load(Ordering::Acquire)
    }

    pub fn remaining(&self) -> u32 {
        self.inner.limit.saturating_sub(self.used())
    }

    pub fn try_reserve(&self) -> Result<QuotaReservation, AppError> {
        let limit = self.inner.limit;
        self.inner
            .reserved
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < limit).then_some(n + 1)
            })
            .map_err(|_| AppError::GenerationLimitReached { limit })?;

        Ok(QuotaReservation {
            quota: self.clone(),
            committed: false,
        })
    }
}

#[must_use = "dropping a reservation without committing releases the slot"]
#[derive(Debug)]
pub struct QuotaReservation {
    quota: GenerationQuota,
    committed: bool,
}

impl QuotaReservation {
    /// Marks the generation as used. Returns the new used count.
    pub fn commit(mut self) -> u32 {
        self.committed = true;
        self.quota.inner.committed.fetch_add(1, Ordering::AcqRel) + 1
    }
}

impl Drop for QuotaReservation {
    fn drop(&mut self) {
        if !self.committed {
            self.quota.inner.reserved.fetch_sub(1, Ordering::AcqRel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_committed_reservations_exhaust_quota() {
        let quota = GenerationQuota::new(3);
        for expected in 1..=3 {
            assert_eq!(quota.try_reserve().unwrap().commit(), expected);
        }
        assert_eq!(quota.remaining(), 0);
        assert!(matches!(
            quota.try_reserve(),
            Err(AppError::GenerationLimitReached { limit: 3 })
        ));
    }

    #[test]
    fn test_dropped_reservation_releases_slot() {
        let quota = GenerationQuota::new(1);
        {
            let _reservation = quota.try_reserve().unwrap();
            assert!(quota.try_reserve().is_err());
        }
        assert_eq!(quota.used(), 0);
        assert!(quota.try_reserve().is_ok());
    }

    #[test]
    fn test_in_flight_reservations_count_against_limit() {
        let quota = GenerationQuota::new(2);
        let a = quota.try_reserve().unwrap();
        let b = quota.try_reserve().unwrap();
        assert!(quota.try_reserve().is_err());
        a.commit();
        drop(b);
        assert_eq!(quota.used(), 1);
        assert_eq!(quota.remaining(), 1);
    }

    #[test]
    fn test_zero_limit_rejects_immediately() {
        assert!(GenerationQuota::new(0).try_reserve().is_err());
    }
}
