//! Token-bucket admission control.
//!
//! The bucket starts full and refills continuously at `refill_per_sec`, capped
//! at `capacity`. Refill, decision and deduction run inside one mutex guard so
//! concurrent callers can never spend the same token twice.

use std::sync::Mutex;
use std::time::Instant;

/// Shared token-bucket limiter gating request admission.
#[derive(Debug)]
pub struct AdmissionLimiter {
    capacity: f64,
    refill_per_sec: f64,
    bucket: Mutex<TokenBucket>,
}

#[derive(Debug)]
struct TokenBucket {
    tokens: f64,
    last: Instant,
}

impl AdmissionLimiter {
    /// `refill_per_sec` below zero (or NaN) is treated as zero.
    pub fn new(capacity: u32, refill_per_sec: f64) -> Self {
        Self::new_at(capacity, refill_per_sec, Instant::now())
    }

    /// Like [`AdmissionLimiter::new`] with an explicit starting instant.
    pub fn new_at(capacity: u32, refill_per_sec: f64, now: Instant) -> Self {
        let capacity = f64::from(capacity);
        let refill_per_sec = if refill_per_sec.is_finite() {
            refill_per_sec.max(0.0)
        } else {
            0.0
        };
        Self {
            capacity,
            refill_per_sec,
            bucket: Mutex::new(TokenBucket {
                tokens: capacity,
                last: now,
            }),
        }
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn refill_per_sec(&self) -> f64 {
        self.refill_per_sec
    }

    /// Admit one request if a whole token is available.
    pub fn try_acquire(&self) -> bool {
        self.try_acquire_at(Instant::now())
    }

    /// Same as [`AdmissionLimiter::try_acquire`], evaluated at `now`.
    ///
    /// An instant earlier than the last refill adds no tokens.
    pub fn try_acquire_at(&self, now: Instant) -> bool {
        // Poisoned mutex means logic bug; treat as reject instead of panic.
        let Ok(mut b) = self.bucket.lock() else {
            return false;
        };
        self.refill(&mut b, now);

        if b.tokens < 1.0 {
            return false;
        }
        b.tokens -= 1.0;
        true
    }

    /// Tokens currently in the bucket, refilled up to now.
    pub fn available(&self) -> f64 {
        let Ok(mut b) = self.bucket.lock() else {
            return 0.0;
        };
        self.refill(&mut b, Instant::now());
        b.tokens
    }

    fn refill(&self, b: &mut TokenBucket, now: Instant) {
        let elapsed = now.saturating_duration_since(b.last);
        if elapsed.is_zero() {
            return;
        }
        b.tokens = (b.tokens + elapsed.as_secs_f64() * self.refill_per_sec).min(self.capacity);
        b.last = now;
    }
}
