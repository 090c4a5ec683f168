//! The LAPACK workspace-query idiom: invoke a routine with
//! `lwork = -1` so it writes its recommended workspace size into the first
//! element of a length-1 work buffer, then allocate that much and invoke it
//! for real. [`Workspace::sized`] wraps the second call's buffer so it is
//! dropped on every return path, and [`recommended_lwork_real`]/
//! [`recommended_lwork_complex`] pull the recommended size out of the first
//! call's probe buffer.

/// A scratch buffer sized by a prior workspace query, released when it goes
/// out of scope.
pub struct Workspace<T> {
    buf: Vec<T>,
}

impl<T: Clone + Default> Workspace<T> {
    /// Allocates a workspace of exactly `lwork` elements, zero/default
    /// initialized.
    #[must_use]
    pub fn sized(lwork: usize) -> Self {
        Self { buf: vec![T::default(); lwork.max(1)] }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

/// Reads the recommended `lwork` out of a length-1 probe buffer's first
/// element, as LAPACK's `lwork = -1` query convention leaves it.
#[must_use]
pub fn recommended_lwork_real(probe: f64) -> usize {
    probe.max(1.0) as usize
}

/// Complex-valued routines (the `c*`/`z*` family) report the recommended
/// `lwork` in the real part of the probe's first complex element.
#[must_use]
pub fn recommended_lwork_complex(probe_real_part: f64) -> usize {
    probe_real_part.max(1.0) as usize
}
