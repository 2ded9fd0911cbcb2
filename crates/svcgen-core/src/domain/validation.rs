use crate::domain::{
    entity::{EntityName, NamePolicy},
    error::DomainError,
    plan::ScaffoldPlan,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_name(raw: &str, policy: &dyn NamePolicy) -> Result<EntityName, DomainError> {
        EntityName::checked(raw, policy)
    }

    pub fn validate_plan(plan: &ScaffoldPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
