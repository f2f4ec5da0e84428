#![deny(missing_docs)]
#![doc = "Core views, constants, and error types shared by the Lambda-Phi kernel."]

pub mod constants;
pub mod errors;
/// Tolerance configuration for validation.
pub mod tolerance;
pub mod view;

pub use constants::{ERROR_THRESHOLD, LAMBDA_PHI, PHI_THRESHOLD, THETA_LOCK};
pub use errors::{ErrorInfo, ErrorKind, LphiError};
pub use tolerance::Tolerances;
pub use view::{alloc_zeroed, Complex, ComplexMatrix, ComplexView};
