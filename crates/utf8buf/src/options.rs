/// How far capacity grows when an append or insert overflows it.
///
/// Either policy keeps the new capacity at least as large as the bytes
/// required, so repeated appends reallocate a logarithmic number of times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// Grow to `max(required, capacity * 3 / 2)`.
    #[default]
    OneAndHalf,
    /// Grow to `max(required, capacity * 2)`.
    Double,
}

impl GrowthPolicy {
    pub(crate) fn next_capacity(self, capacity: usize, required: usize) -> usize {
        let grown = match self {
            GrowthPolicy::OneAndHalf => capacity.saturating_add(capacity / 2),
            GrowthPolicy::Double => capacity.saturating_mul(2),
        };
        grown.max(required)
    }
}

/// Configuration for a [`Utf8Buf`](crate::Utf8Buf).
///
/// # Examples
///
/// ```rust
/// use utf8buf::{BufferOptions, GrowthPolicy, Utf8Buf};
///
/// let mut buf = Utf8Buf::with_options(BufferOptions {
///     max_capacity: Some(8),
///     ..Default::default()
/// });
/// buf.append_bytes("12345678").unwrap();
/// assert!(buf.append_bytes("9").is_err());
/// assert_eq!(buf, "12345678");
/// ```
///
/// # Default
///
/// No capacity limit and [`GrowthPolicy::OneAndHalf`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferOptions {
    /// Upper bound on the buffer's capacity in bytes.
    ///
    /// Growth that would need more than this fails with
    /// [`Error::AllocationFailure`](crate::Error::AllocationFailure) and
    /// leaves the buffer unchanged. When the policy would overshoot the limit
    /// but the required size fits, capacity is clamped to the limit.
    ///
    /// # Default
    ///
    /// `None`
    pub max_capacity: Option<usize>,

    /// Growth policy applied when capacity is exhausted.
    ///
    /// # Default
    ///
    /// [`GrowthPolicy::OneAndHalf`]
    pub growth: GrowthPolicy,
}

#[cfg(test)]
mod tests {
    use super::GrowthPolicy;

    #[test]
    fn growth_never_undershoots_requirement() {
        assert_eq!(GrowthPolicy::OneAndHalf.next_capacity(0, 1), 1);
        assert_eq!(GrowthPolicy::OneAndHalf.next_capacity(10, 11), 15);
        assert_eq!(GrowthPolicy::OneAndHalf.next_capacity(10, 40), 40);
        assert_eq!(GrowthPolicy::Double.next_capacity(10, 11), 20);
        assert_eq!(GrowthPolicy::Double.next_capacity(usize::MAX, 3), usize::MAX);
    }
}
