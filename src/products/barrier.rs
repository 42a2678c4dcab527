// src/products/barrier.rs
//! Barrier tests relative to the initial spot price.
//!
//! A barrier is quoted as a percentage of `spot_price`; the level it
//! represents is `spot_price * barrier_pct / 100`. These functions do not
//! validate their inputs: callers reject non-positive spot prices first.

/// Absolute price level of a percentage-of-spot barrier.
#[inline]
pub fn barrier_level(barrier_pct: f64, spot_price: f64) -> f64 {
    spot_price * barrier_pct / 100.0
}

/// True iff `price` lies strictly below an absolute price level.
#[inline]
pub fn is_below(price: f64, level: f64) -> bool {
    price < level
}

/// True iff `price` lies strictly below the barrier.
#[inline]
pub fn crosses_below(price: f64, barrier_pct: f64, spot_price: f64) -> bool {
    is_below(price, barrier_level(barrier_pct, spot_price))
}

/// True iff `price` is at or above the barrier; the complement of [`crosses_below`].
#[inline]
pub fn crosses_above(price: f64, barrier_pct: f64, spot_price: f64) -> bool {
    !crosses_below(price, barrier_pct, spot_price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barrier_level() {
        assert_eq!(barrier_level(60.0, 150.0), 90.0);
        assert_eq!(barrier_level(100.0, 150.0), 150.0);
    }

    #[test]
    fn test_touching_the_barrier_counts_as_above() {
        assert!(!crosses_below(90.0, 60.0, 150.0));
        assert!(crosses_above(90.0, 60.0, 150.0));
    }

    #[test]
    fn test_strictly_below() {
        assert!(crosses_below(89.99, 60.0, 150.0));
        assert!(!crosses_above(89.99, 60.0, 150.0));
    }

    #[test]
    fn test_complement_over_a_sweep() {
        for i in 0..=300 {
            let price = i as f64;
            assert_ne!(
                crosses_below(price, 75.0, 200.0),
                crosses_above(price, 75.0, 200.0)
            );
        }
    }
}
