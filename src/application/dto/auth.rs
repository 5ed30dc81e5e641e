use crate::domain::article::{BusinessId, ReviewerRef};
use crate::domain::errors::DomainResult;

/// Verified actor identity. Produced only by the token verifier; tenant and
/// privilege never come from request parameters.
#[derive(Debug, Clone)]
pub struct Principal {
    pub actor_id: String,
    pub actor_name: String,
    pub business_id: BusinessId,
    pub privileged: bool,
}

impl Principal {
    pub fn reviewer_ref(&self) -> DomainResult<ReviewerRef> {
        ReviewerRef::new(self.actor_id.clone(), self.actor_name.clone())
    }
}
