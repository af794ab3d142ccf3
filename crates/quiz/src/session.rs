use crate::questions::{QUESTIONS, Question};

pub const POINTS_PER_CORRECT: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    Finished,
    NoSelection,
    OptionOutOfRange(usize),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Finished => write!(f, "quiz already finished"),
            QuizError::NoSelection => write!(f, "no option selected"),
            QuizError::OptionOutOfRange(i) => write!(f, "option index out of range: {i}"),
        }
    }
}

impl std::error::Error for QuizError {}

/// Medal awarded from the final accuracy percentage.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
    Student,
}

impl Medal {
    pub fn for_accuracy(accuracy_pct: u32) -> Self {
        if accuracy_pct >= 90 {
            Medal::Gold
        } else if accuracy_pct >= 70 {
            Medal::Silver
        } else if accuracy_pct >= 50 {
            Medal::Bronze
        } else {
            Medal::Student
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
            Medal::Student => "Student",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Medal::Gold => "🥇",
            Medal::Silver => "🥈",
            Medal::Bronze => "🥉",
            Medal::Student => "📚",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Medal::Gold => "Excellent! You are an air quality expert!",
            Medal::Silver => "Very good! Keep learning about air quality!",
            Medal::Bronze => "Good start! Keep studying to improve!",
            Medal::Student => "Keep studying! Knowledge about air quality is important!",
        }
    }
}

/// Feedback returned when an answer is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub correct: bool,
    pub correct_option: usize,
    pub explanation: &'static str,
}

/// Final report for a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResults {
    pub score: u32,
    pub correct: u32,
    pub total: u32,
    pub accuracy_pct: u32,
    pub medal: Medal,
}

/// Linear run through the question bank.
///
/// Each question takes a `select` followed by `confirm` (scored) or a
/// `skip` (unscored); there is no going back. `results` becomes
/// available once the last question is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    current: usize,
    score: u32,
    correct: u32,
    selected: Option<usize>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            current: 0,
            score: 0,
            correct: 0,
            selected: None,
        }
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        QUESTIONS.get(self.current)
    }

    /// Zero-based index of the current question and the bank size.
    pub fn progress(&self) -> (usize, usize) {
        (self.current, QUESTIONS.len())
    }

    pub fn is_finished(&self) -> bool {
        self.current >= QUESTIONS.len()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Picks an option for the current question. Reselecting replaces
    /// the previous choice.
    pub fn select(&mut self, option: usize) -> Result<(), QuizError> {
        let Some(question) = self.current_question() else {
            return Err(QuizError::Finished);
        };
        if option >= question.options.len() {
            return Err(QuizError::OptionOutOfRange(option));
        }
        self.selected = Some(option);
        Ok(())
    }

    /// Locks in the selection, scores it, and advances.
    pub fn confirm(&mut self) -> Result<Answer, QuizError> {
        let Some(question) = self.current_question() else {
            return Err(QuizError::Finished);
        };
        let Some(selected) = self.selected else {
            return Err(QuizError::NoSelection);
        };

        let correct = selected == question.correct;
        if correct {
            self.correct += 1;
            self.score += POINTS_PER_CORRECT;
        }
        let answer = Answer {
            correct,
            correct_option: question.correct,
            explanation: question.explanation,
        };

        self.current += 1;
        self.selected = None;
        Ok(answer)
    }

    /// Advances without scoring.
    pub fn skip(&mut self) -> Result<(), QuizError> {
        if self.is_finished() {
            return Err(QuizError::Finished);
        }
        self.current += 1;
        self.selected = None;
        Ok(())
    }

    /// The final report, available once every question is resolved.
    pub fn results(&self) -> Option<QuizResults> {
        if !self.is_finished() {
            return None;
        }
        let total = QUESTIONS.len() as u32;
        let accuracy_pct = if total > 0 {
            ((f64::from(self.correct) / f64::from(total)) * 100.0).round() as u32
        } else {
            0
        };
        Some(QuizResults {
            score: self.score,
            correct: self.correct,
            total,
            accuracy_pct,
            medal: Medal::for_accuracy(accuracy_pct),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Medal, QuizError, QuizSession};
    use crate::questions::QUESTIONS;
    use pretty_assertions::assert_eq;

    #[test]
    fn perfect_run_earns_gold() {
        let mut session = QuizSession::new();
        while let Some(question) = session.current_question() {
            session.select(question.correct).unwrap();
            let answer = session.confirm().unwrap();
            assert!(answer.correct);
        }

        let results = session.results().unwrap();
        assert_eq!(results.score, 500);
        assert_eq!(results.correct, 5);
        assert_eq!(results.accuracy_pct, 100);
        assert_eq!(results.medal, Medal::Gold);
    }

    #[test]
    fn skipped_questions_never_score() {
        let mut session = QuizSession::new();
        for _ in 0..QUESTIONS.len() {
            session.skip().unwrap();
        }

        let results = session.results().unwrap();
        assert_eq!(results.score, 0);
        assert_eq!(results.accuracy_pct, 0);
        assert_eq!(results.medal, Medal::Student);
    }

    #[test]
    fn four_of_five_lands_on_silver() {
        let mut session = QuizSession::new();
        for i in 0..QUESTIONS.len() {
            let question = session.current_question().unwrap();
            let choice = if i == 0 {
                (question.correct + 1) % question.options.len()
            } else {
                question.correct
            };
            session.select(choice).unwrap();
            let answer = session.confirm().unwrap();
            assert_eq!(answer.correct, i != 0);
            assert_eq!(answer.correct_option, QUESTIONS[i].correct);
        }

        let results = session.results().unwrap();
        assert_eq!(results.score, 400);
        assert_eq!(results.accuracy_pct, 80);
        assert_eq!(results.medal, Medal::Silver);
    }

    #[test]
    fn medal_thresholds() {
        assert_eq!(Medal::for_accuracy(100), Medal::Gold);
        assert_eq!(Medal::for_accuracy(90), Medal::Gold);
        assert_eq!(Medal::for_accuracy(89), Medal::Silver);
        assert_eq!(Medal::for_accuracy(70), Medal::Silver);
        assert_eq!(Medal::for_accuracy(69), Medal::Bronze);
        assert_eq!(Medal::for_accuracy(50), Medal::Bronze);
        assert_eq!(Medal::for_accuracy(49), Medal::Student);
        assert_eq!(Medal::Gold.icon(), "🥇");
        assert_eq!(Medal::Student.label(), "Student");
    }

    #[test]
    fn selection_is_validated() {
        let mut session = QuizSession::new();
        assert_eq!(session.select(4), Err(QuizError::OptionOutOfRange(4)));
        assert_eq!(session.confirm().unwrap_err(), QuizError::NoSelection);

        session.select(0).unwrap();
        session.select(2).unwrap();
        assert_eq!(session.selected(), Some(2));
    }

    #[test]
    fn finished_session_rejects_further_play() {
        let mut session = QuizSession::new();
        for _ in 0..QUESTIONS.len() {
            session.skip().unwrap();
        }
        assert!(session.is_finished());
        assert_eq!(session.select(0), Err(QuizError::Finished));
        assert_eq!(session.confirm().unwrap_err(), QuizError::Finished);
        assert_eq!(session.skip(), Err(QuizError::Finished));
    }

    #[test]
    fn results_stay_hidden_mid_run() {
        let mut session = QuizSession::new();
        assert!(session.results().is_none());
        session.skip().unwrap();
        assert!(session.results().is_none());
        assert_eq!(session.progress(), (1, 5));
    }

    #[test]
    fn confirm_clears_the_selection() {
        let mut session = QuizSession::new();
        session.select(1).unwrap();
        session.confirm().unwrap();
        assert_eq!(session.selected(), None);
        assert_eq!(session.confirm().unwrap_err(), QuizError::NoSelection);
    }
}
