//! Builder utilities for configuring the widest-path pipeline.
//!
//! Validates caller-supplied settings before constructing [`Widepath`]
//! instances.

use std::num::NonZeroUsize;

use crate::{Result, error::WidepathError, tokenizer::DEFAULT_READ_BUFFER_SIZE, widepath::Widepath};

/// Configures and constructs [`Widepath`] instances.
///
/// # Examples
/// ```
/// use widepath_core::WidepathBuilder;
///
/// let widepath = WidepathBuilder::new()
///     .with_read_buffer_size(4096)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(widepath.read_buffer_size().get(), 4096);
/// ```
#[derive(Debug, Clone)]
pub struct WidepathBuilder {
    read_buffer_size: usize,
}

impl Default for WidepathBuilder {
    fn default() -> Self {
        Self {
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE.get(),
        }
    }
}

impl WidepathBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use widepath_core::{DEFAULT_READ_BUFFER_SIZE, WidepathBuilder};
    ///
    /// let builder = WidepathBuilder::new();
    /// assert_eq!(builder.read_buffer_size(), DEFAULT_READ_BUFFER_SIZE.get());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the capacity of the input read buffer in bytes.
    #[must_use]
    pub const fn with_read_buffer_size(mut self, bytes: usize) -> Self {
        self.read_buffer_size = bytes;
        self
    }

    /// Returns the configured read buffer capacity.
    #[must_use]
    pub const fn read_buffer_size(&self) -> usize {
        self.read_buffer_size
    }

    /// Validates the configuration and constructs a [`Widepath`] instance.
    ///
    /// # Errors
    /// Returns [`WidepathError::InvalidReadBufferSize`] when the read buffer
    /// size is zero.
    ///
    /// # Examples
    /// ```
    /// use widepath_core::{WidepathBuilder, WidepathError};
    ///
    /// let err = WidepathBuilder::new().with_read_buffer_size(0).build().unwrap_err();
    /// assert!(matches!(err, WidepathError::InvalidReadBufferSize { got: 0 }));
    /// ```
    pub fn build(self) -> Result<Widepath> {
        let read_buffer_size = NonZeroUsize::new(self.read_buffer_size).ok_or(
            WidepathError::InvalidReadBufferSize {
                got: self.read_buffer_size,
            },
        )?;

        Ok(Widepath::new(read_buffer_size))
    }
}
