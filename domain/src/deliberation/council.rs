//! Council entity: the validated expert roster

use crate::core::error::DomainError;
use crate::core::expert::Expert;
use std::collections::HashSet;

/// The experts taking part in a deliberation plus the designated critic (Entity)
///
/// Construction validates the roster eagerly, so a `Council` value always
/// satisfies:
/// - at least one expert
/// - expert names are non-empty and unique
/// - the critic is one of the experts
///
/// Registration order is preserved; it is the order in which replies are
/// processed and recorded regardless of which backend answers first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Council {
    experts: Vec<Expert>,
    critic_index: usize,
}

impl Council {
    pub fn new(experts: Vec<Expert>, critic: &str) -> Result<Self, DomainError> {
        if experts.is_empty() {
            return Err(DomainError::NoExperts);
        }

        let mut seen = HashSet::new();
        for expert in &experts {
            if expert.name().trim().is_empty() {
                return Err(DomainError::InvalidExpert(
                    "expert name cannot be empty".to_string(),
                ));
            }
            if !seen.insert(expert.name()) {
                return Err(DomainError::DuplicateExpert(expert.name().to_string()));
            }
        }

        let critic_index = experts
            .iter()
            .position(|e| e.name() == critic)
            .ok_or_else(|| DomainError::CriticNotRegistered(critic.to_string()))?;

        Ok(Self {
            experts,
            critic_index,
        })
    }

    /// All experts in registration order
    pub fn experts(&self) -> &[Expert] {
        &self.experts
    }

    pub fn critic(&self) -> &Expert {
        &self.experts[self.critic_index]
    }

    pub fn is_critic(&self, expert: &Expert) -> bool {
        expert.name() == self.critic().name()
    }

    /// Experts whose answers the critic evaluates, in registration order
    pub fn critiqued(&self) -> impl Iterator<Item = &Expert> {
        self.experts.iter().filter(|e| !self.is_critic(e))
    }

    pub fn len(&self) -> usize {
        self.experts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experts.is_empty()
    }
}

impl Default for Council {
    fn default() -> Self {
        Self {
            experts: Expert::default_experts(),
            critic_index: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Vec<Expert> {
        names.iter().map(|n| Expert::local(*n)).collect()
    }

    #[test]
    fn test_valid_council() {
        let council = Council::new(roster(&["e1", "e2", "e3"]), "e2").unwrap();
        assert_eq!(council.len(), 3);
        assert_eq!(council.critic().name(), "e2");
        let critiqued: Vec<_> = council.critiqued().map(|e| e.name()).collect();
        assert_eq!(critiqued, vec!["e1", "e3"]);
    }

    #[test]
    fn test_critic_must_be_registered() {
        let err = Council::new(roster(&["e1", "e2"]), "e9").unwrap_err();
        assert_eq!(err, DomainError::CriticNotRegistered("e9".to_string()));
    }

    #[test]
    fn test_empty_roster_rejected() {
        assert_eq!(Council::new(vec![], "e1").unwrap_err(), DomainError::NoExperts);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = Council::new(roster(&["e1", "e2", "e1"]), "e1").unwrap_err();
        assert_eq!(err, DomainError::DuplicateExpert("e1".to_string()));
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = Council::new(roster(&["e1", " "]), "e1").unwrap_err();
        assert!(matches!(err, DomainError::InvalidExpert(_)));
    }

    #[test]
    fn test_critic_only_council_critiques_nobody() {
        let council = Council::new(roster(&["solo"]), "solo").unwrap();
        assert_eq!(council.critiqued().count(), 0);
    }

    #[test]
    fn test_default_council_is_valid() {
        let council = Council::default();
        let rebuilt = Council::new(council.experts().to_vec(), council.critic().name()).unwrap();
        assert_eq!(council, rebuilt);
    }
}
