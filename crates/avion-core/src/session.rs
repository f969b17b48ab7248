//! Lifecycle of one visitor's application
//!
//! [`ApplicationSession`] owns the form, the challenge and the dialog state
//! for a single page view and is the only way they change.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::challenge::Challenge;
use crate::delivery::LeadDelivery;
use crate::dialog::DialogState;
use crate::form::{ApplicationForm, FieldUpdate, Lead};
use crate::gate;
use crate::ValidationError;

/// Result of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation;

impl Confirmation {
    pub const MESSAGE: &'static str =
        "Thank you for your application! We will contact you within 24 hours.";
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicationSession {
    form: ApplicationForm,
    challenge: Challenge,
    dialog: DialogState,
    /// Why the last submission attempt was blocked, until the next edit
    #[serde(skip)]
    notice: Option<ValidationError>,
}

impl ApplicationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    pub fn notice(&self) -> Option<&ValidationError> {
        self.notice.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    /// Show the dialog with a fresh challenge. The form keeps its values.
    pub fn open(&mut self) {
        self.open_with(&mut rand::thread_rng());
    }

    pub fn open_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.dialog.open() {
            self.challenge = Challenge::generate_with(rng);
            tracing::debug!("application dialog opened");
        }
    }

    /// Close without submitting. Edits stay in the form.
    pub fn cancel(&mut self) {
        self.notice = None;
        if self.dialog.close() {
            tracing::debug!("application dialog cancelled");
        }
    }

    /// Escape key, backdrop click and similar; same as [`Self::cancel`]
    pub fn dismiss(&mut self) {
        self.cancel();
    }

    pub fn update_field(&mut self, update: FieldUpdate) {
        self.notice = None;
        self.form.apply(update);
    }

    pub fn set_answer(&mut self, text: impl Into<String>) {
        self.notice = None;
        self.challenge.set_answer(text);
    }

    /// Replace the challenge at the visitor's request
    pub fn new_challenge(&mut self) {
        self.new_challenge_with(&mut rand::thread_rng());
    }

    pub fn new_challenge_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.notice = None;
        self.challenge = Challenge::generate_with(rng);
    }

    pub fn submit_enabled(&self) -> bool {
        gate::submission_enabled(&self.challenge, &self.form)
    }

    /// Deliver the application and start over.
    ///
    /// A blocked submission only records the reason as [`Self::notice`];
    /// form, challenge and dialog are untouched. Once the lead has
    /// been handed to `delivery` the form and challenge are cleared and the
    /// dialog closes even if delivery reported an error.
    pub fn submit(&mut self, delivery: &dyn LeadDelivery) -> Result<Confirmation, ValidationError> {
        let lead = match gate::check(&self.challenge, &self.form)
            .and_then(|()| Lead::try_from(&self.form))
        {
            Ok(lead) => lead,
            Err(err) => {
                tracing::info!(reason = %err, "submission blocked");
                self.notice = Some(err.clone());
                return Err(err);
            }
        };

        if let Err(err) = delivery.deliver(&lead) {
            tracing::warn!(error = %err, "lead delivery failed");
        }

        self.form.reset();
        self.challenge = Challenge::cleared();
        self.dialog.close();
        self.notice = None;
        Ok(Confirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::Industry;
    use crate::delivery::tests::RecordingDelivery;
    use crate::form::tests::complete_form;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    /// Open session holding a complete form
    fn open_session(rng: &mut StdRng) -> ApplicationSession {
        let mut session = ApplicationSession::new();
        session.open_with(rng);
        for update in completed_updates() {
            session.update_field(update);
        }
        session
    }

    fn completed_updates() -> Vec<FieldUpdate> {
        let form = complete_form();
        vec![
            FieldUpdate::FirstName(form.first_name().into()),
            FieldUpdate::LastName(form.last_name().into()),
            FieldUpdate::Email(form.email().into()),
            FieldUpdate::Phone(form.phone().into()),
            FieldUpdate::Company(form.company().into()),
            FieldUpdate::Industry(form.industry()),
            FieldUpdate::FinancingType(form.financing_type()),
            FieldUpdate::AgreeToTerms(true),
        ]
    }

    /// Form, challenge and dialog are the same as in `before`
    fn assert_untouched(session: &ApplicationSession, before: &ApplicationSession) {
        assert_eq!(session.form(), before.form());
        assert_eq!(session.challenge(), before.challenge());
        assert_eq!(session.dialog(), before.dialog());
    }

    fn solve(session: &mut ApplicationSession) {
        let sum = session.challenge().num1() + session.challenge().num2();
        session.set_answer(sum.to_string());
    }

    #[test]
    fn test_open_generates_unanswered_challenge() {
        let mut rng = rng();
        let mut session = ApplicationSession::new();
        session.open_with(&mut rng);
        assert!(session.is_open());
        assert!(session.challenge().num1() >= 1);
        assert!(session.challenge().num2() >= 1);
        assert_eq!(session.challenge().answer(), "");
        assert!(!session.challenge().is_valid());
    }

    #[test]
    fn test_every_reopen_starts_with_a_fresh_challenge() {
        let mut rng = rng();
        let mut session = ApplicationSession::new();
        for _ in 0..20 {
            session.open_with(&mut rng);
            assert_eq!(session.challenge().answer(), "");
            assert!(!session.challenge().is_valid());
            solve(&mut session);
            assert!(session.challenge().is_valid());
            session.cancel();
        }
    }

    #[test]
    fn test_open_while_open_keeps_challenge() {
        let mut rng = rng();
        let mut session = ApplicationSession::new();
        session.open_with(&mut rng);
        solve(&mut session);
        let before = session.challenge().clone();
        session.open_with(&mut rng);
        assert_eq!(session.challenge(), &before);
    }

    #[test]
    fn test_open_does_not_reset_form() {
        let mut rng = rng();
        let mut session = ApplicationSession::new();
        session.update_field(FieldUpdate::Company("Skyward Aero".into()));
        session.open_with(&mut rng);
        assert_eq!(session.form().company(), "Skyward Aero");
    }

    #[test]
    fn test_cancel_keeps_form() {
        let mut rng = rng();
        let mut session = open_session(&mut rng);
        let form = session.form().clone();
        session.cancel();
        assert!(!session.is_open());
        assert_eq!(session.form(), &form);
    }

    #[test]
    fn test_dismiss_behaves_like_cancel() {
        let mut rng = rng();
        let mut cancelled = open_session(&mut rng);
        let mut dismissed = cancelled.clone();
        cancelled.cancel();
        dismissed.dismiss();
        assert_eq!(cancelled, dismissed);
    }

    #[test]
    fn test_new_challenge_scenario() {
        let mut rng = rng();
        let mut session = ApplicationSession::new();
        session.open_with(&mut rng);
        solve(&mut session);
        assert!(session.challenge().is_valid());
        session.new_challenge_with(&mut rng);
        assert_eq!(session.challenge().answer(), "");
        assert!(!session.challenge().is_valid());
    }

    #[test]
    fn test_submit_blocked_without_solved_challenge() {
        let mut rng = rng();
        let mut session = open_session(&mut rng);
        session.set_answer("not a number");
        let before = session.clone();
        let delivery = RecordingDelivery::default();

        assert_eq!(session.submit(&delivery), Err(ValidationError::ChallengeUnsolved));
        assert!(delivery.delivered.borrow().is_empty());
        assert_untouched(&session, &before);
        assert!(session.is_open());
    }

    #[test]
    fn test_submit_blocked_without_terms() {
        let mut rng = rng();
        let mut session = open_session(&mut rng);
        session.update_field(FieldUpdate::AgreeToTerms(false));
        solve(&mut session);
        assert!(!session.submit_enabled());
        let before = session.clone();
        let delivery = RecordingDelivery::default();

        assert_eq!(session.submit(&delivery), Err(ValidationError::TermsNotAccepted));
        assert!(delivery.delivered.borrow().is_empty());
        assert_untouched(&session, &before);
    }

    #[test]
    fn test_submit_blocked_by_missing_required_field() {
        let mut rng = rng();
        let mut session = open_session(&mut rng);
        session.update_field(FieldUpdate::Industry(None));
        solve(&mut session);
        let before = session.clone();
        let delivery = RecordingDelivery::default();

        assert_eq!(
            session.submit(&delivery),
            Err(ValidationError::MissingField("Industry"))
        );
        assert!(delivery.delivered.borrow().is_empty());
        assert_untouched(&session, &before);
    }

    #[test]
    fn test_submit_delivers_once_and_resets() {
        let mut rng = rng();
        let mut session = open_session(&mut rng);
        session.update_field(FieldUpdate::Industry(Some(Industry::Aviation)));
        solve(&mut session);
        assert!(session.submit_enabled());
        let delivery = RecordingDelivery::default();

        assert_eq!(session.submit(&delivery), Ok(Confirmation));

        let delivered = delivery.delivered.borrow();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].industry, Industry::Aviation);
        assert!(session.form().is_empty());
        assert_eq!(session.challenge(), &Challenge::cleared());
        assert!(!session.is_open());
        assert!(!session.submit_enabled());
    }

    #[test]
    fn test_delivery_failure_still_completes_submission() {
        let mut rng = rng();
        let mut session = open_session(&mut rng);
        solve(&mut session);
        let delivery = RecordingDelivery {
            fail: true,
            ..Default::default()
        };

        assert_eq!(session.submit(&delivery), Ok(Confirmation));
        assert_eq!(delivery.delivered.borrow().len(), 1);
        assert!(session.form().is_empty());
        assert!(!session.is_open());
    }

    #[test]
    fn test_gate_follows_state_across_edits() {
        let mut rng = rng();
        let mut session = ApplicationSession::new();
        session.open_with(&mut rng);
        assert!(!session.submit_enabled());
        solve(&mut session);
        assert!(!session.submit_enabled());
        session.update_field(FieldUpdate::AgreeToTerms(true));
        assert!(session.submit_enabled());
        session.set_answer("");
        assert!(!session.submit_enabled());
    }

    #[test]
    fn test_blocked_submission_notice_until_next_edit() {
        let mut rng = rng();
        let mut session = open_session(&mut rng);
        let delivery = RecordingDelivery::default();
        assert_eq!(session.notice(), None);

        let _ = session.submit(&delivery);
        assert_eq!(session.notice(), Some(&ValidationError::ChallengeUnsolved));
        session.update_field(FieldUpdate::Phone("555-0100".into()));
        assert_eq!(session.notice(), None);

        let _ = session.submit(&delivery);
        assert!(session.notice().is_some());
        session.set_answer("1");
        assert_eq!(session.notice(), None);

        let _ = session.submit(&delivery);
        session.new_challenge_with(&mut rng);
        assert_eq!(session.notice(), None);

        let _ = session.submit(&delivery);
        session.dismiss();
        assert_eq!(session.notice(), None);
    }

    #[test]
    fn test_successful_submission_leaves_no_notice() {
        let mut rng = rng();
        let mut session = open_session(&mut rng);
        let delivery = RecordingDelivery::default();
        let _ = session.submit(&delivery);
        solve(&mut session);
        assert_eq!(session.submit(&delivery), Ok(Confirmation));
        assert_eq!(session.notice(), None);
    }

    #[test]
    fn test_confirmation_message() {
        assert_eq!(
            Confirmation.to_string(),
            "Thank you for your application! We will contact you within 24 hours."
        );
    }
}
