//! Applicant field validation.
//!
//! Catches malformed records before they enter a batch. This is not
//! eligibility filtering (an upstream concern) — it only checks that
//! each field is inside its plausible domain. A failed report means
//! the record should be skipped and logged, never that the batch
//! aborts.

use crate::applicant::Applicant;

const MIN_INCOME: f64 = 0.0;
const MAX_INCOME: f64 = 1_000_000.0;
const MIN_DEBT: f64 = 0.0;
const MAX_DEBT: f64 = 500_000.0;
const MIN_CREDIT_SCORE: u32 = 300;
const MAX_CREDIT_SCORE: u32 = 850;
const MAX_EMPLOYMENT_MONTHS: u32 = 600;
const MIN_LOAN_AMOUNT: f64 = 100.0;
const MAX_LOAN_AMOUNT: f64 = 1_000_000.0;

#[derive(Debug, Default, Clone)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, field: &str, message: String) {
        self.errors.push(format!("{field}: {message}"));
    }

    fn warning(&mut self, field: &str, message: String) {
        self.warnings.push(format!("{field}: {message}"));
    }
}

pub fn validate_applicant(applicant: &Applicant) -> ValidationReport {
    let mut report = ValidationReport::default();

    if !is_valid_id(&applicant.id) {
        report.error(
            "ID",
            "Invalid ID format. Expected: APP followed by 3-6 digits".into(),
        );
    }

    if !(MIN_INCOME..=MAX_INCOME).contains(&applicant.monthly_income) {
        report.error(
            "Monthly Income",
            format!("Income must be between ${MIN_INCOME:.2} and ${MAX_INCOME:.2}"),
        );
    }

    if !(MIN_DEBT..=MAX_DEBT).contains(&applicant.existing_debt) {
        report.error(
            "Existing Debt",
            format!("Debt must be between ${MIN_DEBT:.2} and ${MAX_DEBT:.2}"),
        );
    }

    if !(MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&applicant.credit_score) {
        report.error(
            "Credit Score",
            format!("Credit score must be between {MIN_CREDIT_SCORE} and {MAX_CREDIT_SCORE}"),
        );
    }

    if applicant.employment_months > MAX_EMPLOYMENT_MONTHS {
        report.error(
            "Employment Duration",
            format!("Employment must be at most {MAX_EMPLOYMENT_MONTHS} months"),
        );
    }

    if !(MIN_LOAN_AMOUNT..=MAX_LOAN_AMOUNT).contains(&applicant.requested_amount) {
        report.error(
            "Loan Amount",
            format!("Loan amount must be between ${MIN_LOAN_AMOUNT:.2} and ${MAX_LOAN_AMOUNT:.2}"),
        );
    }

    if applicant.existing_debt > applicant.monthly_income * 100.0 {
        report.error(
            "Debt-to-Income",
            "Debt appears unreasonably high compared to income".into(),
        );
    }

    if applicant.requested_amount < 100.0 && applicant.monthly_income > 10_000.0 {
        report.warning(
            "Loan Amount",
            "Loan amount seems unusually low for income level".into(),
        );
    }

    report
}

/// "APP" followed by 3 to 6 ascii digits.
fn is_valid_id(id: &str) -> bool {
    let Some(digits) = id.strip_prefix("APP") else {
        return false;
    };
    (3..=6).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_applicant() -> Applicant {
        Applicant {
            id: "APP0042".into(),
            monthly_income: 4500.0,
            existing_debt: 12000.0,
            credit_score: 710,
            employment_months: 48,
            requested_amount: 25000.0,
            risk_score: 33.0,
        }
    }

    #[test]
    fn well_formed_applicant_passes() {
        let report = validate_applicant(&valid_applicant());
        assert!(report.is_valid(), "errors: {:?}", report.errors);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn id_format_enforced() {
        assert!(is_valid_id("APP001"));
        assert!(is_valid_id("APP123456"));
        assert!(!is_valid_id("APP12"));
        assert!(!is_valid_id("APP1234567"));
        assert!(!is_valid_id("APX123"));
        assert!(!is_valid_id("APP12a4"));
    }

    #[test]
    fn out_of_domain_fields_reported() {
        let mut applicant = valid_applicant();
        applicant.credit_score = 200;
        applicant.requested_amount = 50.0;
        let report = validate_applicant(&applicant);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn implausible_debt_to_income_flagged() {
        let mut applicant = valid_applicant();
        applicant.monthly_income = 100.0;
        applicant.existing_debt = 50000.0;
        let report = validate_applicant(&applicant);
        assert!(!report.is_valid());
    }
}
