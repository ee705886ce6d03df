//! Blocking delay abstraction
//!
//! Every wait in the display protocol is a minimum, not a hint: the
//! controller has no busy flag we can read back, so a short wait silently
//! corrupts its state. Implementations must block for at least the
//! requested duration.

/// Blocking delay service
pub trait Delay {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}

impl<D: Delay + ?Sized> Delay for &mut D {
    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingDelay {
        total_us: u64,
        calls: u32,
    }

    impl Delay for CountingDelay {
        fn delay_us(&mut self, us: u32) {
            self.total_us += us as u64;
            self.calls += 1;
        }
    }

    #[test]
    fn test_default_delay_ms_is_built_from_micros() {
        let mut delay = CountingDelay {
            total_us: 0,
            calls: 0,
        };

        delay.delay_ms(3);
        assert_eq!(delay.total_us, 3_000);
        assert_eq!(delay.calls, 3);
    }

    #[test]
    fn test_zero_ms_does_not_wait() {
        let mut delay = CountingDelay {
            total_us: 0,
            calls: 0,
        };

        delay.delay_ms(0);
        assert_eq!(delay.total_us, 0);
    }
}
