//! Hand-off of a completed lead

use crate::form::Lead;
use crate::LeadResult;

/// Receives each lead that passes submission.
///
/// Called at most once per submission and never for a blocked one.
pub trait LeadDelivery {
    fn deliver(&self, lead: &Lead) -> LeadResult<()>;
}

/// Writes the lead to the log and always succeeds
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingDelivery;

impl LeadDelivery for LoggingDelivery {
    fn deliver(&self, lead: &Lead) -> LeadResult<()> {
        let payload = serde_json::to_string(lead)?;
        tracing::info!(
            industry = lead.industry.id(),
            financing_type = lead.financing_type.id(),
            %payload,
            "Application submitted"
        );
        Ok(())
    }
}
