//! Error handling and result types for UnrolledList operations.
//!
//! This module provides the error type shared by every fallible list operation,
//! together with result type aliases and a small extension trait for attaching
//! operation context to errors as they propagate.

use crate::types::NodeId;

/// Error type for unrolled list operations.
#[derive(Debug, Clone, PartialEq)]
pub enum UnrolledListError {
    /// A position does not refer to a live element of this list.
    InvalidPosition(String),
    /// Storage for a bucket could not be obtained.
    AllocationError(String),
    /// Internal bookkeeping disagrees with the stored buckets.
    DataIntegrityError(String),
    /// The bucket chain is broken (dangling or asymmetric links).
    CorruptedChain(String),
}

impl UnrolledListError {
    /// Create an InvalidPosition error for a (bucket, index) pair
    pub fn invalid_position(node: NodeId, index: usize, details: &str) -> Self {
        Self::InvalidPosition(format!("bucket {} index {}: {}", node, index, details))
    }

    /// Create an AllocationError with context
    pub fn allocation_error(resource: &str, reason: &str) -> Self {
        Self::AllocationError(format!("Failed to allocate {}: {}", resource, reason))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create a CorruptedChain error with context
    pub fn corrupted_chain(component: &str, details: &str) -> Self {
        Self::CorruptedChain(format!("{} corruption: {}", component, details))
    }

    /// A chained bucket id that the allocator no longer knows about.
    pub fn dangling_bucket(id: NodeId) -> Self {
        Self::corrupted_chain("Bucket chain", &format!("bucket {} is not allocated", id))
    }

    /// Check if this error reports resource exhaustion
    pub fn is_allocation_error(&self) -> bool {
        matches!(self, Self::AllocationError(_))
    }

    /// Check if this error reports a bad caller-supplied position
    pub fn is_invalid_position(&self) -> bool {
        matches!(self, Self::InvalidPosition(_))
    }
}

impl std::fmt::Display for UnrolledListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnrolledListError::InvalidPosition(msg) => write!(f, "Invalid position: {}", msg),
            UnrolledListError::AllocationError(msg) => write!(f, "Allocation error: {}", msg),
            UnrolledListError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
            UnrolledListError::CorruptedChain(msg) => write!(f, "Corrupted chain: {}", msg),
        }
    }
}

impl std::error::Error for UnrolledListError {}

/// Public result type for list operations that may fail
pub type ListResult<T> = Result<T, UnrolledListError>;

/// Result type for list modification operations
pub type ModifyResult<T> = Result<T, UnrolledListError>;

/// Result type for list construction and validation
pub type InitResult<T> = Result<T, UnrolledListError>;

/// Result extension trait for improved error handling
pub trait ListResultExt<T> {
    /// Convert to a ListResult with additional context
    fn with_context(self, context: &str) -> ListResult<T>;

    /// Convert to a ListResult with operation context
    fn with_operation(self, operation: &str) -> ListResult<T>;
}

impl<T> ListResultExt<T> for Result<T, UnrolledListError> {
    fn with_context(self, context: &str) -> ListResult<T> {
        self.map_err(|e| match e {
            UnrolledListError::InvalidPosition(msg) => {
                UnrolledListError::InvalidPosition(format!("{}: {}", context, msg))
            }
            UnrolledListError::AllocationError(msg) => {
                UnrolledListError::AllocationError(format!("{}: {}", context, msg))
            }
            UnrolledListError::DataIntegrityError(msg) => {
                UnrolledListError::data_integrity(context, &msg)
            }
            UnrolledListError::CorruptedChain(msg) => {
                UnrolledListError::corrupted_chain(context, &msg)
            }
        })
    }

    fn with_operation(self, operation: &str) -> ListResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }
}
