//! Prompt Service - drives the prompt sequencer over a line source.
//!
//! One suspension point per state: show the prompt, wait for one line, feed
//! it to the sequencer. Input is never read again once the sequencer has
//! finished.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ports::Prompter, report::AbortReason},
    domain::{EntityName, NamePolicy, PromptSequencer, Transition, Verbatim},
    error::SvcgenResult,
};

/// What the interactive phase produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Collection {
    /// Every slot was answered.
    Names(Vec<EntityName>),
    /// Nothing will be generated.
    Aborted(AbortReason),
}

/// Collects the service count and names.
pub struct PromptService {
    policy: Arc<dyn NamePolicy>,
}

impl PromptService {
    pub fn new(policy: Arc<dyn NamePolicy>) -> Self {
        Self { policy }
    }

    /// Ask for a count, then that many names.
    ///
    /// Blank or rejected names re-ask the same slot. An invalid count or the
    /// end of input aborts with no names. Only I/O failures of the prompter
    /// are returned as errors.
    #[instrument(skip_all, fields(policy = self.policy.id()))]
    pub fn collect(&self, prompter: &mut dyn Prompter) -> SvcgenResult<Collection> {
        let mut sequencer = PromptSequencer::new(Arc::clone(&self.policy));

        while let Some(prompt) = sequencer.prompt() {
            let Some(line) = prompter.ask(&prompt)? else {
                warn!(state = ?sequencer.state(), "Input closed before all answers were given");
                sequencer.close();
                return Ok(Collection::Aborted(AbortReason::InputClosed));
            };

            match sequencer.submit(&line) {
                Transition::Advanced => debug!(state = ?sequencer.state(), "Answer accepted"),
                Transition::Retry(e) => {
                    debug!(error = %e, "Answer rejected, asking again");
                    prompter.warn(&e.to_string())?;
                }
                Transition::Closed(e) => {
                    prompter.warn(&e.to_string())?;
                    info!(error = %e, "Invalid count, nothing to generate");
                    return Ok(Collection::Aborted(AbortReason::InvalidCount(e)));
                }
                Transition::Collected | Transition::Ignored => {}
            }
        }

        let names = sequencer.into_names();
        info!(count = names.len(), "Names collected");
        Ok(Collection::Names(names))
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new(Arc::new(Verbatim))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockPrompter;
    use crate::domain::DomainError;
    use mockall::Sequence;
    use std::collections::VecDeque;

    /// Scripted prompter that records every prompt and warning.
    struct Script {
        answers: VecDeque<&'static str>,
        prompts: Vec<String>,
        warnings: Vec<String>,
    }

    impl Script {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                prompts: Vec::new(),
                warnings: Vec::new(),
            }
        }
    }

    impl Prompter for Script {
        fn ask(&mut self, prompt: &str) -> SvcgenResult<Option<String>> {
            self.prompts.push(prompt.to_string());
            Ok(self.answers.pop_front().map(str::to_string))
        }

        fn warn(&mut self, message: &str) -> SvcgenResult<()> {
            self.warnings.push(message.to_string());
            Ok(())
        }
    }

    fn collected(c: Collection) -> Vec<String> {
        match c {
            Collection::Names(names) => names.into_iter().map(EntityName::into_string).collect(),
            Collection::Aborted(reason) => panic!("aborted: {reason:?}"),
        }
    }

    #[test]
    fn n_names_take_exactly_n_name_prompts() {
        let mut script = Script::new(&["3", "Order", "User", "Cart"]);
        let names = collected(PromptService::default().collect(&mut script).unwrap());

        assert_eq!(names, vec!["Order", "User", "Cart"]);
        assert_eq!(script.prompts.len(), 4);
        assert!(script.prompts[0].starts_with("How many services"));
        assert_eq!(script.prompts[3], "Name of service 3: ");
        assert!(script.warnings.is_empty());
    }

    #[test]
    fn empty_answer_reissues_slot() {
        let mut script = Script::new(&["2", "", "A", "B"]);
        let names = collected(PromptService::default().collect(&mut script).unwrap());

        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(
            &script.prompts[1..],
            &["Name of service 1: ", "Name of service 1: ", "Name of service 2: "]
        );
        assert_eq!(script.warnings, vec![DomainError::EmptyName.to_string()]);
    }

    #[test]
    fn invalid_count_aborts_and_stops_reading() {
        for count in ["0", "abc", "-3"] {
            let mut script = Script::new(&[count, "Never"]);
            let result = PromptService::default().collect(&mut script).unwrap();

            assert!(matches!(
                result,
                Collection::Aborted(AbortReason::InvalidCount(_))
            ));
            assert_eq!(script.prompts.len(), 1, "read past count for {count}");
            assert_eq!(script.warnings.len(), 1);
        }
    }

    #[test]
    fn end_of_input_aborts() {
        let mut script = Script::new(&["2", "A"]);
        let result = PromptService::default().collect(&mut script).unwrap();
        assert_eq!(result, Collection::Aborted(AbortReason::InputClosed));
    }

    #[test]
    fn prompter_failure_propagates() {
        let mut prompter = MockPrompter::new();
        let mut seq = Sequence::new();
        prompter
            .expect_ask()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some("1".into())));
        prompter
            .expect_ask()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Err(crate::application::ApplicationError::PromptFailed {
                    reason: "stdin closed unexpectedly".into(),
                }
                .into())
            });

        assert!(PromptService::default().collect(&mut prompter).is_err());
    }
}
