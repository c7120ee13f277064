use std::collections::HashMap;

use crate::workflows::application::AnsweredItem;

/// Answers keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionIndex {
    answers: HashMap<String, AnsweredItem>,
}

impl QuestionIndex {
    /// Later items win when a question was answered more than once.
    pub fn build(items: &[AnsweredItem]) -> Self {
        let answers = items
            .iter()
            .map(|item| (item.question_id.clone(), item.clone()))
            .collect();
        Self { answers }
    }

    pub fn get(&self, question_id: &str) -> Option<&AnsweredItem> {
        self.answers.get(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_answer_wins() {
        let index = QuestionIndex::build(&[
            AnsweredItem::new("q1", "first"),
            AnsweredItem::new("q2", "other"),
            AnsweredItem::new("q1", "second"),
        ]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("q1").map(|item| item.answer.as_str()), Some("second"));
        assert!(index.get("q3").is_none());
    }
}
