//! Structured error types shared across the Lambda-Phi crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`LphiError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message naming the offending input.
    pub message: String,
    /// Contextual key value pairs (observed sizes, norms, qubit counts).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Fieldless discriminant of [`LphiError`], convenient for matching on the
/// failure family without inspecting the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// Input dimensionality is wrong.
    Shape,
    /// Shapes are valid but incompatible.
    DimensionMismatch,
    /// State norm deviates from one beyond tolerance.
    NotNormalized,
    /// Requested feature is not supported.
    Unimplemented,
    /// Allocation of an operator or temporary failed.
    OutOfMemory,
    /// Scalar argument outside its accepted domain.
    InvalidArgument,
    /// Serialization or decoding failure.
    Serde,
}

/// Canonical error type for the Lambda-Phi kernel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum LphiError {
    /// Operator is not 2-D, state is not 1-D, or a buffer does not match its shape.
    #[error("shape error: {0}")]
    Shape(ErrorInfo),
    /// Non-square operator, operator/state size mismatch, or wrong qubit count.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(ErrorInfo),
    /// State vector norm deviates from one.
    #[error("state not normalized: {0}")]
    NotNormalized(ErrorInfo),
    /// Feature requested but not supported.
    #[error("unimplemented: {0}")]
    Unimplemented(ErrorInfo),
    /// Allocation failure.
    #[error("out of memory: {0}")]
    OutOfMemory(ErrorInfo),
    /// Scalar argument outside its accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(ErrorInfo),
    /// Serialization and decoding errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl LphiError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            LphiError::Shape(info)
            | LphiError::DimensionMismatch(info)
            | LphiError::NotNormalized(info)
            | LphiError::Unimplemented(info)
            | LphiError::OutOfMemory(info)
            | LphiError::InvalidArgument(info)
            | LphiError::Serde(info) => info,
        }
    }

    /// Returns the failure family of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LphiError::Shape(_) => ErrorKind::Shape,
            LphiError::DimensionMismatch(_) => ErrorKind::DimensionMismatch,
            LphiError::NotNormalized(_) => ErrorKind::NotNormalized,
            LphiError::Unimplemented(_) => ErrorKind::Unimplemented,
            LphiError::OutOfMemory(_) => ErrorKind::OutOfMemory,
            LphiError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            LphiError::Serde(_) => ErrorKind::Serde,
        }
    }

    /// Builds an out-of-memory error for a failed allocation of `elements` scalars.
    pub fn out_of_memory(what: &str, elements: usize) -> Self {
        LphiError::OutOfMemory(
            ErrorInfo::new("out-of-memory", format!("failed to allocate {what}"))
                .with_context("elements", elements),
        )
    }
}
