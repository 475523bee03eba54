//! Build-time selection of the trap mechanism.
//!
//! Priority: breakpoint instruction, then `raise(SIGTRAP)`, then
//! `process::abort()`. Exactly one `imp` module is compiled per target.

/// Trap mechanism compiled into this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mechanism {
    /// Breakpoint instruction; stops under a debugger, `SIGTRAP` otherwise.
    Breakpoint,
    /// `raise(SIGTRAP)`.
    Signal,
    /// `std::process::abort()`.
    Abort,
}

pub const MECHANISM: Mechanism = imp::MECHANISM;

/// Invoke the trap. Returns if a debugger resumes execution.
#[inline(always)]
pub fn debug_trap() {
    imp::trap()
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod imp {
    use super::Mechanism;

    pub const MECHANISM: Mechanism = Mechanism::Breakpoint;

    #[inline(always)]
    pub fn trap() {
        // SAFETY: `int3` only raises a breakpoint exception.
        unsafe { core::arch::asm!("int3", options(nomem, nostack)) }
    }
}

#[cfg(target_arch = "aarch64")]
mod imp {
    use super::Mechanism;

    pub const MECHANISM: Mechanism = Mechanism::Breakpoint;

    #[inline(always)]
    pub fn trap() {
        // SAFETY: `brk` only raises a breakpoint exception.
        unsafe { core::arch::asm!("brk #0xf000", options(nomem, nostack)) }
    }
}

#[cfg(all(
    unix,
    not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64"))
))]
mod imp {
    use super::Mechanism;

    pub const MECHANISM: Mechanism = Mechanism::Signal;

    #[inline(always)]
    pub fn trap() {
        // SAFETY: raising a signal on the current thread has no preconditions.
        unsafe {
            libc::raise(libc::SIGTRAP);
        }
    }
}

#[cfg(not(any(
    unix,
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "aarch64"
)))]
mod imp {
    use super::Mechanism;

    pub const MECHANISM: Mechanism = Mechanism::Abort;

    #[inline(always)]
    pub fn trap() {
        std::process::abort()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mechanism_matches_target() {
        if cfg!(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")) {
            assert_eq!(MECHANISM, Mechanism::Breakpoint);
        } else if cfg!(unix) {
            assert_eq!(MECHANISM, Mechanism::Signal);
        } else {
            assert_eq!(MECHANISM, Mechanism::Abort);
        }
    }
}
