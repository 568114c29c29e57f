//! Shared primitive types used across the pipeline.

/// A stable applicant identifier ("APP" followed by 3-6 digits).
pub type ApplicantId = String;

/// The canonical batch-run identifier.
pub type RunId = String;

/// An externally computed risk score in [0, 100]. Higher = riskier.
pub type RiskScore = f64;
