//! Error types for the widepath core library.
//!
//! Each pipeline stage owns its error enum next to the stage itself; this
//! module defines the top-level [`WidepathError`] that wraps them, the macro
//! that attaches stable machine-readable codes to every enum, and a
//! convenient result alias.

use std::{fmt, io};

use thiserror::Error;

#[cfg(feature = "generator")]
use crate::generator::GeneratorError;
use crate::{
    graph::GraphError, mst::MstError, serializer::SerializeError, table::TableError,
};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::std::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

pub(crate) use define_error_codes;

/// Error type produced when configuring or running [`crate::Widepath`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum WidepathError {
    /// The tokenizer read buffer must hold at least one byte.
    #[error("read buffer size must be at least 1 byte (got {got})")]
    InvalidReadBufferSize {
        /// The invalid buffer size supplied by the caller.
        got: usize,
    },
    /// Reading or validating the input graph failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Building the maximum spanning forest failed.
    #[error(transparent)]
    Mst(#[from] MstError),
    /// Allocating the bottleneck table failed.
    #[error(transparent)]
    Table(#[from] TableError),
    /// Rendering or flushing the bottleneck table failed.
    #[error(transparent)]
    Serialize(#[from] SerializeError),
    /// Generating a random input graph failed.
    #[cfg(feature = "generator")]
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// Writing an auxiliary document (input dump, Graphviz) failed.
    #[error("failed to write {document}: {source}")]
    Io {
        /// Short description of the document being written.
        document: &'static str,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Stable codes describing [`WidepathError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum WidepathErrorCode {
    /// The tokenizer read buffer must hold at least one byte.
    InvalidReadBufferSize,
    /// Reading or validating the input graph failed.
    Graph,
    /// Building the maximum spanning forest failed.
    Mst,
    /// Allocating the bottleneck table failed.
    Table,
    /// Rendering or flushing the bottleneck table failed.
    Serialize,
    /// Generating a random input graph failed.
    Generator,
    /// Writing an auxiliary document failed.
    Io,
}

impl WidepathErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidReadBufferSize => "WIDEPATH_INVALID_READ_BUFFER_SIZE",
            Self::Graph => "WIDEPATH_GRAPH_FAILURE",
            Self::Mst => "WIDEPATH_MST_FAILURE",
            Self::Table => "WIDEPATH_TABLE_FAILURE",
            Self::Serialize => "WIDEPATH_SERIALIZE_FAILURE",
            Self::Generator => "WIDEPATH_GENERATOR_FAILURE",
            Self::Io => "WIDEPATH_IO_FAILURE",
        }
    }
}

impl fmt::Display for WidepathErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl WidepathError {
    /// Retrieve the stable [`WidepathErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> WidepathErrorCode {
        match self {
            Self::InvalidReadBufferSize { .. } => WidepathErrorCode::InvalidReadBufferSize,
            Self::Graph(_) => WidepathErrorCode::Graph,
            Self::Mst(_) => WidepathErrorCode::Mst,
            Self::Table(_) => WidepathErrorCode::Table,
            Self::Serialize(_) => WidepathErrorCode::Serialize,
            #[cfg(feature = "generator")]
            Self::Generator(_) => WidepathErrorCode::Generator,
            Self::Io { .. } => WidepathErrorCode::Io,
        }
    }

    /// Retrieve the code of the wrapped stage error, when there is one.
    ///
    /// # Examples
    /// ```
    /// use widepath_core::{GraphError, WidepathError};
    ///
    /// let err = WidepathError::from(GraphError::NegativeWeight { weight: -3 });
    /// assert_eq!(err.stage_code(), Some("GRAPH_NEGATIVE_WEIGHT"));
    /// ```
    #[must_use]
    pub const fn stage_code(&self) -> Option<&'static str> {
        match self {
            Self::Graph(error) => Some(error.code().as_str()),
            Self::Mst(error) => Some(error.code().as_str()),
            Self::Table(error) => Some(error.code().as_str()),
            Self::Serialize(error) => Some(error.code().as_str()),
            #[cfg(feature = "generator")]
            Self::Generator(error) => Some(error.code().as_str()),
            Self::InvalidReadBufferSize { .. } | Self::Io { .. } => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, WidepathError>;
