//! Submission gate
//!
//! The submit button's disabled state and the check performed when the form
//! is actually submitted both go through [`check`], so neither path can be
//! looser than the other.

use crate::challenge::Challenge;
use crate::form::ApplicationForm;
use crate::ValidationError;

/// Whether the application may be submitted right now
pub fn submission_enabled(challenge: &Challenge, form: &ApplicationForm) -> bool {
    check(challenge, form).is_ok()
}

/// Like [`submission_enabled`], but says which condition failed.
///
/// The challenge is reported first since that is the notice shown to the
/// visitor; the terms checkbox also disables the button.
pub fn check(challenge: &Challenge, form: &ApplicationForm) -> Result<(), ValidationError> {
    if !challenge.is_valid() {
        return Err(ValidationError::ChallengeUnsolved);
    }
    if !form.agree_to_terms() {
        return Err(ValidationError::TermsNotAccepted);
    }
    Ok(())
}
