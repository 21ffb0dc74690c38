//! Process-wide RC5/RC6 toggle counter.
//!
//! A legacy convenience: when an encoder isn't given an
//! explicit toggle bit, it flips this single atomic and uses the result.
//! There's no ordering guarantee between concurrent callers beyond the
//! atomicity of the flip itself — callers who need a deterministic toggle
//! sequence should set `Command::Rc5`/`Command::Rc6`'s `toggle` field
//! directly instead of relying on this.

use std::sync::atomic::{AtomicBool, Ordering};

static TOGGLE: AtomicBool = AtomicBool::new(false);

/// Flip the process-wide toggle and return its new value.
pub fn next() -> bool {
    // fetch_xor(true) flips the stored bit and returns the *previous*
    // value, so the new value is its complement.
    !TOGGLE.fetch_xor(true, Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternates() {
        let a = next();
        let b = next();
        assert_ne!(a, b);
        let c = next();
        assert_eq!(a, c);
    }
}
