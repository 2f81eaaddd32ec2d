use std::collections::VecDeque;

/// Capability for player decisions, so the game logic can run against the
/// real console or a scripted sequence of answers.
pub trait Prompter {
    /// Present a numbered menu and return the index of the chosen option.
    /// Implementations must return an index < options.len().
    fn choose(&mut self, question: &str, options: &[String]) -> usize;

    /// Free-form number entry; None means the player cancelled (or the
    /// input was not a number).
    fn prompt_number(&mut self, question: &str) -> Option<i32>;
}

/// Deterministic prompter for tests and the simulation API. Answers come
/// from pre-seeded queues; once the choice queue runs dry the fallback
/// option is used, and out-of-range answers clamp to the last option.
pub struct ScriptedPrompter {
    choices: VecDeque<usize>,
    numbers: VecDeque<i32>,
    fallback: usize,
}

impl ScriptedPrompter {
    pub fn new(choices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
            numbers: VecDeque::new(),
            fallback: 0,
        }
    }

    pub fn with_numbers(mut self, numbers: impl IntoIterator<Item = i32>) -> Self {
        self.numbers = numbers.into_iter().collect();
        self
    }

    pub fn with_fallback(mut self, fallback: usize) -> Self {
        self.fallback = fallback;
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn choose(&mut self, _question: &str, options: &[String]) -> usize {
        let pick = self.choices.pop_front().unwrap_or(self.fallback);
        pick.min(options.len().saturating_sub(1))
    }

    fn prompt_number(&mut self, _question: &str) -> Option<i32> {
        self.numbers.pop_front()
    }
}
