//! Error kinds for cloudmap operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// This enum categorizes errors to help users write clear error handling logic.
/// Users can match on ErrorKind to decide how to handle specific error cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// The requested feature or operation is not supported
    Unsupported,

    /// Invalid configuration or parameters
    ConfigInvalid,

    /// Invalid argument passed to function
    InvalidArgument,

    // =========================================================================
    // Discovery errors
    // =========================================================================
    /// A discovery collaborator failed to fetch a resource family
    DiscoveryFailed,

    /// A requested resource (e.g. a VPC id filter) matched nothing
    NotFound,

    // =========================================================================
    // Inventory errors
    // =========================================================================
    /// The resource inventory document is structurally invalid
    InventoryInvalid,

    /// Deserialization of an inventory document failed
    DeserializeFailed,

    /// Serialization of a topology or report failed
    SerializeFailed,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    /// Writing rendered output to a sink failed
    WriteFailed,

    // =========================================================================
    // Resource errors
    // =========================================================================
    /// Timeout occurred
    Timeout,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if this error kind is retryable by default
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorKind::DiscoveryFailed | ErrorKind::Timeout | ErrorKind::IoFailed
        )
    }
}
