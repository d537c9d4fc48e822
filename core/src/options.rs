//! Construction and growth settings.

/// Settings shared by every array a [`Factory`](crate::Factory) builds.
///
/// # Example
///
/// ```
/// use arrayc_core::ArrayOptions;
///
/// let options = ArrayOptions {
///     expand_step: 8,
///     ..Default::default()
/// };
/// assert!(!options.fixed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayOptions {
    /// Extra slots added by [`TypedArray::grow`](crate::TypedArray::grow).
    pub expand_step: usize,

    /// Whether arrays are fixed unless the caller says otherwise.
    pub fixed: bool,

    /// Upper bound on the length an array may be constructed with or grow to.
    ///
    /// Lengths under the bound can still fail with an error when the
    /// allocator has no memory for them.
    pub max_length: usize,
}

impl ArrayOptions {
    pub const DEFAULT_EXPAND_STEP: usize = 21;

    /// Default for [`ArrayOptions::max_length`]: 64Mi slots.
    pub const DEFAULT_MAX_LENGTH: usize = 1 << 26;

    pub const fn default() -> Self {
        Self {
            expand_step: Self::DEFAULT_EXPAND_STEP,
            fixed: false,
            max_length: Self::DEFAULT_MAX_LENGTH,
        }
    }
}

impl Default for ArrayOptions {
    fn default() -> Self {
        ArrayOptions::default()
    }
}
