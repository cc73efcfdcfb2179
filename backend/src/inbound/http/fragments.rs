//! HTML fragments returned by the lead endpoint.
//!
//! Rendering is kept apart from the validator: the domain produces error
//! kinds, this module turns them into presentation. A JSON surface could
//! map the same kinds into a structured envelope without touching the core.
//! Only server-generated values (ZIP digits, UUID) are interpolated, so no
//! escaping is required here.

use crate::domain::ValidationError;
use crate::domain::ports::LeadReceipt;

/// Fragment for a rejected submission; the message names the failing rule.
pub fn validation_fragment(error: &ValidationError) -> String {
    format!(
        "<div class=\"lead-result lead-result--error\"><p>{error}</p>\
         <p>Please correct the highlighted field and submit again.</p></div>"
    )
}

/// Generic fragment for geocode and persistence failures. The real cause is
/// logged server-side and never shown to the homeowner.
pub const RETRY_FRAGMENT: &str = "<div class=\"lead-result lead-result--error\">\
     <p>Something went wrong while saving your project.</p>\
     <p>Please try again in a moment.</p></div>";

/// Fragment for a stored lead, carrying the ZIP and the generated reference.
pub fn success_fragment(receipt: &LeadReceipt) -> String {
    format!(
        "<div class=\"lead-result lead-result--success\">\
         <p>Thanks! We are matching contractors near ZIP {zip}.</p>\
         <p>Your reference is <code>{id}</code>.</p></div>",
        zip = receipt.zip,
        id = receipt.lead_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn validation_fragment_carries_the_rule_message() {
        let fragment = validation_fragment(&ValidationError::InvalidZip);
        assert!(fragment.contains("exactly five digits"));
    }

    #[test]
    fn success_fragment_carries_zip_and_reference() {
        let receipt = LeadReceipt {
            lead_id: Uuid::nil(),
            zip: "06119".to_owned(),
        };
        let fragment = success_fragment(&receipt);
        assert!(fragment.contains("06119"));
        assert!(fragment.contains(&Uuid::nil().to_string()));
    }
}
