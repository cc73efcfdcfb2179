//! Ordered, fail-fast validation of lead candidates.
//!
//! Rules run in a fixed order and stop at the first failure so a caller sees
//! exactly one error per attempt. The order is part of the contract: an empty
//! name with no consent must report [`ValidationError::MissingRequired`], not
//! [`ValidationError::ConsentRequired`].

use crate::domain::lead::{LeadCandidate, LeadSubmission};

/// One validation failure kind per rule, in rule order.
///
/// The `Display` text is the user-facing message; transport adapters wrap it
/// in whatever envelope they render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Name, email, project description, or ZIP code is empty.
    #[error("name, email, project description, and ZIP code are all required")]
    MissingRequired,
    /// Email does not look like `local@domain.tld`.
    #[error("that email address does not look right")]
    InvalidEmail,
    /// Consent checkbox was not ticked.
    #[error("we need your consent to share your project with contractors")]
    ConsentRequired,
    /// ZIP is not exactly five digits.
    #[error("ZIP code must be exactly five digits")]
    InvalidZip,
    /// Phone was provided but is not E.164.
    #[error("phone number must start with + followed by country code and digits")]
    InvalidPhone,
    /// Budget text was provided but no usable number could be read from it.
    #[error("budget could not be read as a number")]
    InvalidBudget,
}

/// Promote a normalized candidate into a validated [`LeadSubmission`].
///
/// # Errors
///
/// Returns the first failing rule's [`ValidationError`]; later rules are not
/// evaluated.
pub fn validate(candidate: LeadCandidate) -> Result<LeadSubmission, ValidationError> {
    if candidate.name.is_empty()
        || candidate.email.is_empty()
        || candidate.project.is_empty()
        || candidate.zip.is_empty()
    {
        return Err(ValidationError::MissingRequired);
    }
    if !is_well_formed_email(&candidate.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !candidate.consent {
        return Err(ValidationError::ConsentRequired);
    }
    if !is_five_digit_zip(&candidate.zip) {
        return Err(ValidationError::InvalidZip);
    }
    if !candidate.phone.is_empty() && !is_e164_phone(&candidate.phone) {
        return Err(ValidationError::InvalidPhone);
    }
    let budget = parse_budget(&candidate.budget_text, &candidate.budget_digits)?;

    Ok(LeadSubmission {
        name: candidate.name,
        email: candidate.email,
        phone: candidate.phone,
        project: candidate.project,
        zip: candidate.zip,
        ready_to_hire: candidate.ready_to_hire,
        urgent: candidate.urgent,
        budget,
        consent: candidate.consent,
    })
}

/// `local@domain.tld` shape: non-empty local part, a dot inside the domain,
/// at least two characters after the final dot, no whitespace or second `@`.
fn is_well_formed_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || has_forbidden_email_char(local) || has_forbidden_email_char(domain) {
        return false;
    }
    let Some((head, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !head.is_empty() && tld.len() >= 2
}

fn has_forbidden_email_char(part: &str) -> bool {
    part.chars().any(|c| c.is_whitespace() || c == '@')
}

fn is_five_digit_zip(zip: &str) -> bool {
    zip.len() == 5 && zip.chars().all(|c| c.is_ascii_digit())
}

/// E.164: `+`, a leading digit 1-9, then 9 to 14 more digits.
fn is_e164_phone(phone: &str) -> bool {
    let Some(digits) = phone.strip_prefix('+') else {
        return false;
    };
    (10..=15).contains(&digits.len())
        && !digits.starts_with('0')
        && digits.chars().all(|c| c.is_ascii_digit())
}

fn parse_budget(text: &str, digits: &str) -> Result<Option<i64>, ValidationError> {
    if text.is_empty() {
        return Ok(None);
    }
    if digits.is_empty() {
        return Err(ValidationError::InvalidBudget);
    }
    digits
        .parse::<i64>()
        .map(Some)
        .map_err(|_| ValidationError::InvalidBudget)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lead::LeadForm;
    use rstest::rstest;

    fn valid_form() -> LeadForm {
        LeadForm {
            name: Some("Dana Frey".to_owned()),
            email: Some("dana@example.com".to_owned()),
            phone: Some("+18885551234".to_owned()),
            project: Some("Replace the kitchen backsplash".to_owned()),
            zip: Some("06119".to_owned()),
            ready_to_hire: Some("yes".to_owned()),
            urgent: None,
            budget_text: Some("2,500".to_owned()),
            consent: Some("yes".to_owned()),
        }
    }

    fn validate_with(mutate: impl FnOnce(&mut LeadForm)) -> Result<LeadSubmission, ValidationError> {
        let mut form = valid_form();
        mutate(&mut form);
        validate(form.normalize())
    }

    #[rstest]
    fn fully_valid_form_passes() {
        let submission = validate(valid_form().normalize()).expect("valid form");
        assert_eq!(submission.zip, "06119");
        assert_eq!(submission.phone, "+18885551234");
        assert_eq!(submission.budget, Some(2500));
        assert!(submission.ready_to_hire);
        assert!(!submission.urgent);
        assert!(submission.consent);
    }

    #[rstest]
    #[case::name(|f: &mut LeadForm| f.name = None)]
    #[case::email(|f: &mut LeadForm| f.email = Some("   ".to_owned()))]
    #[case::project(|f: &mut LeadForm| f.project = None)]
    #[case::zip(|f: &mut LeadForm| f.zip = Some(String::new()))]
    fn empty_required_field_reports_missing_required(#[case] mutate: fn(&mut LeadForm)) {
        assert_eq!(
            validate_with(mutate).expect_err("must fail"),
            ValidationError::MissingRequired
        );
    }

    #[rstest]
    fn missing_required_wins_over_later_rules() {
        // Empty name plus no consent must still report the missing field.
        let err = validate_with(|f| {
            f.name = None;
            f.consent = None;
        })
        .expect_err("must fail");
        assert_eq!(err, ValidationError::MissingRequired);
    }

    #[rstest]
    #[case::no_at("dana.example.com")]
    #[case::no_domain_dot("dana@example")]
    #[case::short_tld("dana@example.c")]
    #[case::second_at("dana@ex@ample.com")]
    #[case::space_in_local("da na@example.com")]
    #[case::empty_local("@example.com")]
    #[case::dot_is_last("dana@example.")]
    fn malformed_email_reports_invalid_email(#[case] email: &str) {
        let err = validate_with(|f| f.email = Some(email.to_owned())).expect_err("must fail");
        assert_eq!(err, ValidationError::InvalidEmail);
    }

    #[rstest]
    #[case("dana@example.com")]
    #[case("dana.frey+leads@mail.example.co")]
    fn well_formed_email_passes(#[case] email: &str) {
        assert!(validate_with(|f| f.email = Some(email.to_owned())).is_ok());
    }

    #[rstest]
    fn consent_missing_reports_consent_required() {
        let err = validate_with(|f| f.consent = Some("no".to_owned())).expect_err("must fail");
        assert_eq!(err, ValidationError::ConsentRequired);
    }

    #[rstest]
    #[case::too_short("1234")]
    #[case::too_long("123456")]
    #[case::letter("1234a")]
    fn malformed_zip_reports_invalid_zip(#[case] zip: &str) {
        let err = validate_with(|f| f.zip = Some(zip.to_owned())).expect_err("must fail");
        assert_eq!(err, ValidationError::InvalidZip);
    }

    #[rstest]
    #[case::no_plus("8885551234")]
    #[case::leading_zero("+0885551234")]
    #[case::too_few_digits("+188855512")]
    #[case::too_many_digits("+1888555123456789")]
    #[case::separator("+1 888 555 1234")]
    fn malformed_phone_reports_invalid_phone(#[case] phone: &str) {
        let err = validate_with(|f| f.phone = Some(phone.to_owned())).expect_err("must fail");
        assert_eq!(err, ValidationError::InvalidPhone);
    }

    #[rstest]
    fn absent_phone_is_accepted_as_empty() {
        let submission = validate_with(|f| f.phone = None).expect("valid form");
        assert_eq!(submission.phone, "");
    }

    #[rstest]
    fn absent_budget_is_none_not_zero() {
        let submission = validate_with(|f| f.budget_text = None).expect("valid form");
        assert_eq!(submission.budget, None);
    }

    #[rstest]
    fn budget_without_digits_reports_invalid_budget() {
        let err = validate_with(|f| f.budget_text = Some("abc".to_owned())).expect_err("must fail");
        assert_eq!(err, ValidationError::InvalidBudget);
    }

    #[rstest]
    fn budget_zero_is_a_provided_budget() {
        let submission = validate_with(|f| f.budget_text = Some("0".to_owned())).expect("valid");
        assert_eq!(submission.budget, Some(0));
    }

    #[rstest]
    fn overlong_budget_reports_invalid_budget() {
        let err = validate_with(|f| f.budget_text = Some("9".repeat(24))).expect_err("must fail");
        assert_eq!(err, ValidationError::InvalidBudget);
    }
}
