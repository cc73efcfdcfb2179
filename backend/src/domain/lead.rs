//! Lead submission types and input normalization.
//!
//! A submission moves through three shapes: [`LeadForm`] carries the raw form
//! fields exactly as posted, [`LeadForm::normalize`] reshapes them into a
//! [`LeadCandidate`], and the validator promotes a candidate into a
//! [`LeadSubmission`]. Only validated submissions ever reach persistence.

/// Raw lead form fields as posted by the browser.
///
/// Every field is optional because HTML forms omit unchecked boxes and users
/// skip inputs. Normalization never fails; it only reshapes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    /// Homeowner's name as typed.
    pub name: Option<String>,
    /// Contact email as typed.
    pub email: Option<String>,
    /// Contact phone as typed.
    pub phone: Option<String>,
    /// Free-text project description.
    pub project: Option<String>,
    /// ZIP code as typed.
    pub zip: Option<String>,
    /// Ready-to-hire checkbox value (`"yes"` when ticked).
    pub ready_to_hire: Option<String>,
    /// Urgency checkbox value (`"yes"` when ticked).
    pub urgent: Option<String>,
    /// Budget as free text, e.g. `"2,500"` or `"$3000"`.
    pub budget_text: Option<String>,
    /// Consent checkbox value (`"yes"` when ticked).
    pub consent: Option<String>,
}

impl LeadForm {
    /// Trim and coerce the raw fields into a [`LeadCandidate`].
    ///
    /// Email is lower-cased, the three flags are true only for the literal
    /// string `"yes"`, and the budget keeps both its trimmed text and the
    /// digits extracted from it so the validator can tell "no budget" apart
    /// from "unreadable budget".
    pub fn normalize(self) -> LeadCandidate {
        let budget_text = trimmed(self.budget_text);
        let budget_digits = extract_digits(&budget_text);

        LeadCandidate {
            name: trimmed(self.name),
            email: trimmed(self.email).to_lowercase(),
            phone: trimmed(self.phone),
            project: trimmed(self.project),
            zip: trimmed(self.zip),
            ready_to_hire: flag_is_set(self.ready_to_hire.as_deref()),
            urgent: flag_is_set(self.urgent.as_deref()),
            budget_text,
            budget_digits,
            consent: flag_is_set(self.consent.as_deref()),
        }
    }
}

/// Normalized candidate record awaiting validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadCandidate {
    /// Trimmed name, possibly empty.
    pub name: String,
    /// Trimmed, lower-cased email, possibly empty.
    pub email: String,
    /// Trimmed phone, possibly empty.
    pub phone: String,
    /// Trimmed project description, possibly empty.
    pub project: String,
    /// Trimmed ZIP code, possibly empty.
    pub zip: String,
    /// True only when the raw value was the literal `"yes"`.
    pub ready_to_hire: bool,
    /// True only when the raw value was the literal `"yes"`.
    pub urgent: bool,
    /// Trimmed raw budget text, possibly empty.
    pub budget_text: String,
    /// Digit characters extracted from `budget_text`.
    pub budget_digits: String,
    /// True only when the raw value was the literal `"yes"`.
    pub consent: bool,
}

/// Fully validated lead submission.
///
/// ## Invariants
/// - `name`, `email`, and `project` are non-empty.
/// - `zip` is exactly five ASCII digits.
/// - `phone` is empty or E.164 (`+` then 10-15 digits, leading digit 1-9).
/// - `budget` is `None` when the homeowner gave no budget; zero is a valid
///   provided budget and is distinct from `None`.
/// - `consent` is true.
///
/// Constructed by [`crate::domain::validation::validate`]; a candidate that
/// fails any rule never becomes a `LeadSubmission`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadSubmission {
    /// Homeowner's name.
    pub name: String,
    /// Contact email, lower-cased.
    pub email: String,
    /// E.164 phone, or the empty string when not provided.
    pub phone: String,
    /// Project description.
    pub project: String,
    /// Five-digit ZIP code.
    pub zip: String,
    /// Whether the homeowner marked themselves ready to hire.
    pub ready_to_hire: bool,
    /// Whether the project is urgent.
    pub urgent: bool,
    /// Budget in whole dollars, absent when not provided.
    pub budget: Option<i64>,
    /// Consent flag, always true for a validated submission.
    pub consent: bool,
}

fn trimmed(raw: Option<String>) -> String {
    raw.as_deref().unwrap_or("").trim().to_owned()
}

fn flag_is_set(raw: Option<&str>) -> bool {
    raw.map(str::trim) == Some("yes")
}

fn extract_digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}
