//! The `info` code every LAPACK routine returns: this crate
//! never interprets it, only carries it back to the caller per routine.

use std::fmt::Display;

/// A non-zero LAPACK `info` code, carried verbatim. The caller
/// interprets it: for factorization routines a positive `info` usually
/// names the first non-positive-definite/singular leading minor or pivot,
/// for `*ev`/`*gesdd` it names a failed-to-converge element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LapackInfo(pub i32);

impl LapackInfo {
    #[must_use]
    pub fn is_success(self) -> bool {
        self.0 == 0
    }

    /// Wraps a raw LAPACK `info` output into `Ok(())` / `Err(LapackInfo)`.
    pub fn check(info: i32) -> Result<(), LapackInfo> {
        if info == 0 {
            Ok(())
        } else {
            Err(LapackInfo(info))
        }
    }
}

impl Display for LapackInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LAPACK routine returned info = {}", self.0)
    }
}

impl std::error::Error for LapackInfo {}
