//! Quiz session state machine and the in-memory session store.
//!
//! A session walks Intro -> Question(0..n) -> Result and only moves through
//! the transitions defined here. Invalid inputs (answering outside the
//! question phase, starting twice) leave the session unchanged instead of
//! corrupting it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use ulid::Ulid;

use crate::catalog::{Level, QuizQuestion};
use crate::names;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Intro,
    Question { index: usize },
    Result,
}

/// What the visitor chose on one question, kept for the result scrollback.
#[derive(Clone, Debug)]
pub struct AnswerRecord {
    pub prompt: String,
    pub chosen: String,
    pub correct_text: String,
    pub was_correct: bool,
}

#[derive(Clone, Debug)]
pub struct QuizSession {
    pub level: Level,
    pub phase: Phase,
    pub total: usize,
    pub answers: Vec<AnswerRecord>,
}

/// Final score and the pass verdict derived from it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Verdict {
    pub correct: usize,
    pub total: usize,
    pub percentage: u32,
    pub passed: bool,
}

/// What to suggest once the verdict is in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Recommendation {
    /// Passed with a level above: take the next level's assessment.
    AdvanceTo(Level),
    /// Passed the top level: nothing left to assess, enroll in it.
    EnrollTopTier(Level),
    /// Failed: this level's course is the right starting point.
    EnrollCurrent(Level),
}

impl QuizSession {
    pub fn new(level: Level) -> QuizSession {
        QuizSession {
            level,
            phase: Phase::Intro,
            total: 0,
            answers: Vec::new(),
        }
    }

    /// Intro -> first question. A session with no questions goes straight
    /// to the result so the verdict math never divides by zero.
    pub fn start(&mut self, total: usize) {
        if self.phase != Phase::Intro {
            return;
        }
        self.total = total;
        self.phase = if total == 0 {
            Phase::Result
        } else {
            Phase::Question { index: 0 }
        };
    }

    /// Records the answer to the current question and advances. An
    /// out-of-range option index is recorded as a wrong answer rather than
    /// rejected, so a tampered form cannot stall the session.
    pub fn submit_answer(&mut self, questions: &[QuizQuestion], option: usize) {
        let Phase::Question { index } = self.phase else {
            return;
        };
        let Some(question) = questions.get(index) else {
            self.phase = Phase::Result;
            return;
        };

        let chosen = question
            .options
            .get(option)
            .cloned()
            .unwrap_or_else(|| "(no answer)".to_string());
        self.answers.push(AnswerRecord {
            prompt: question.prompt.clone(),
            correct_text: question.options[question.correct_option].clone(),
            was_correct: option == question.correct_option,
            chosen,
        });

        self.phase = if index + 1 >= self.total {
            Phase::Result
        } else {
            Phase::Question { index: index + 1 }
        };
    }

    /// Drops all progress and returns to the intro of the given level.
    pub fn reset(&mut self, level: Level) {
        *self = QuizSession::new(level);
    }

    pub fn current_question<'a>(&self, questions: &'a [QuizQuestion]) -> Option<&'a QuizQuestion> {
        match self.phase {
            Phase::Question { index } => questions.get(index),
            _ => None,
        }
    }

    pub fn verdict(&self) -> Verdict {
        let correct = self.answers.iter().filter(|a| a.was_correct).count();
        // Rounded to the nearest whole percent.
        let percentage = if self.total == 0 {
            0
        } else {
            ((correct * 100 + self.total / 2) / self.total) as u32
        };
        Verdict {
            correct,
            total: self.total,
            percentage,
            passed: percentage >= names::PASS_THRESHOLD_PERCENT,
        }
    }

    pub fn recommendation(&self) -> Recommendation {
        let verdict = self.verdict();
        if !verdict.passed {
            return Recommendation::EnrollCurrent(self.level);
        }
        match self.level.next() {
            Some(next) => Recommendation::AdvanceTo(next),
            None => Recommendation::EnrollTopTier(self.level),
        }
    }
}

struct Entry {
    session: QuizSession,
    opened_at: Instant,
}

/// Shared session store, keyed by the opaque token in the visitor's cookie.
///
/// Entries live exactly as long as the cookie that references them; expired
/// entries are invisible to `get`/`update` and swept out on every `open`,
/// so anonymous traffic hammering the open endpoint cannot grow the map
/// past its live sessions.
#[derive(Clone)]
pub struct QuizSessions {
    inner: Arc<Mutex<HashMap<String, Entry>>>,
    ttl: Duration,
}

impl Default for QuizSessions {
    fn default() -> QuizSessions {
        QuizSessions::with_ttl(Duration::from_secs(names::QUIZ_SESSION_TTL_SECS))
    }
}

impl QuizSessions {
    pub fn new() -> QuizSessions {
        QuizSessions::default()
    }

    pub fn with_ttl(ttl: Duration) -> QuizSessions {
        QuizSessions {
            inner: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Creates a fresh session and returns its token. Dead entries are
    /// swept here so the map tracks live cookies, not historical opens.
    pub fn open(&self, level: Level) -> String {
        let mut sessions = self.lock();
        let now = Instant::now();
        sessions.retain(|_, e| now.duration_since(e.opened_at) < self.ttl);

        let token = Ulid::new().to_string();
        sessions.insert(
            token.clone(),
            Entry {
                session: QuizSession::new(level),
                opened_at: now,
            },
        );
        token
    }

    /// Drops the session for `token`, if any. Called when a visitor opens
    /// a replacement session and the old cookie is about to be overwritten.
    pub fn remove(&self, token: &str) {
        self.lock().remove(token);
    }

    pub fn get(&self, token: &str) -> Option<QuizSession> {
        let sessions = self.lock();
        let entry = sessions.get(token)?;
        if entry.opened_at.elapsed() >= self.ttl {
            return None;
        }
        Some(entry.session.clone())
    }

    /// Runs `f` against the session for `token`, returning the updated
    /// session. `None` when the token is unknown or expired.
    pub fn update(
        &self,
        token: &str,
        f: impl FnOnce(&mut QuizSession),
    ) -> Option<QuizSession> {
        let mut sessions = self.lock();
        let entry = sessions.get_mut(token)?;
        if entry.opened_at.elapsed() >= self.ttl {
            return None;
        }
        f(&mut entry.session);
        Some(entry.session.clone())
    }

    /// Live entry count, including any not-yet-swept expired entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Entry>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn questions(level: Level) -> Vec<QuizQuestion> {
        Catalog::load().unwrap().questions(level).to_vec()
    }

    fn answer_correctly(session: &mut QuizSession, questions: &[QuizQuestion], count: usize) {
        for _ in 0..count {
            let Phase::Question { index } = session.phase else {
                panic!("expected a question phase");
            };
            session.submit_answer(questions, questions[index].correct_option);
        }
    }

    fn answer_wrong(session: &mut QuizSession, questions: &[QuizQuestion], count: usize) {
        for _ in 0..count {
            let Phase::Question { index } = session.phase else {
                panic!("expected a question phase");
            };
            let wrong = (questions[index].correct_option + 1) % questions[index].options.len();
            session.submit_answer(questions, wrong);
        }
    }

    #[test]
    fn walks_intro_to_result() {
        let questions = questions(Level::L1);
        let mut session = QuizSession::new(Level::L1);
        assert_eq!(session.phase, Phase::Intro);

        session.start(questions.len());
        assert_eq!(session.phase, Phase::Question { index: 0 });

        answer_correctly(&mut session, &questions, questions.len());
        assert_eq!(session.phase, Phase::Result);
        assert_eq!(session.answers.len(), questions.len());
    }

    #[test]
    fn four_of_five_passes_and_advances() {
        let questions = questions(Level::L1);
        let mut session = QuizSession::new(Level::L1);
        session.start(questions.len());
        answer_correctly(&mut session, &questions, 4);
        answer_wrong(&mut session, &questions, 1);

        let verdict = session.verdict();
        assert_eq!(verdict.percentage, 80);
        assert!(verdict.passed);
        assert_eq!(session.recommendation(), Recommendation::AdvanceTo(Level::L2));
    }

    #[test]
    fn three_of_five_fails_and_recommends_current() {
        let questions = questions(Level::L2);
        let mut session = QuizSession::new(Level::L2);
        session.start(questions.len());
        answer_correctly(&mut session, &questions, 3);
        answer_wrong(&mut session, &questions, 2);

        let verdict = session.verdict();
        assert_eq!(verdict.percentage, 60);
        assert!(!verdict.passed);
        assert_eq!(
            session.recommendation(),
            Recommendation::EnrollCurrent(Level::L2)
        );
    }

    #[test]
    fn perfect_top_tier_recommends_enrolling_in_it() {
        let questions = questions(Level::L4);
        let mut session = QuizSession::new(Level::L4);
        session.start(questions.len());
        answer_correctly(&mut session, &questions, questions.len());

        assert!(session.verdict().passed);
        assert_eq!(
            session.recommendation(),
            Recommendation::EnrollTopTier(Level::L4)
        );
    }

    #[test]
    fn answering_outside_question_phase_is_a_no_op() {
        let questions = questions(Level::L1);
        let mut session = QuizSession::new(Level::L1);
        session.submit_answer(&questions, 0);
        assert_eq!(session.phase, Phase::Intro);
        assert!(session.answers.is_empty());

        session.start(questions.len());
        answer_correctly(&mut session, &questions, questions.len());
        let before = session.answers.len();
        session.submit_answer(&questions, 0);
        assert_eq!(session.answers.len(), before);
    }

    #[test]
    fn starting_twice_does_not_restart() {
        let questions = questions(Level::L1);
        let mut session = QuizSession::new(Level::L1);
        session.start(questions.len());
        session.submit_answer(&questions, 0);
        session.start(questions.len());
        assert_eq!(session.phase, Phase::Question { index: 1 });
    }

    #[test]
    fn out_of_range_option_counts_as_wrong() {
        let questions = questions(Level::L1);
        let mut session = QuizSession::new(Level::L1);
        session.start(questions.len());
        session.submit_answer(&questions, 99);
        assert!(!session.answers[0].was_correct);
        assert_eq!(session.answers[0].chosen, "(no answer)");
        assert_eq!(session.phase, Phase::Question { index: 1 });
    }

    #[test]
    fn empty_bank_lands_on_a_failing_result() {
        let mut session = QuizSession::new(Level::L1);
        session.start(0);
        assert_eq!(session.phase, Phase::Result);
        let verdict = session.verdict();
        assert_eq!(verdict.percentage, 0);
        assert!(!verdict.passed);
    }

    #[test]
    fn reset_returns_to_intro_of_the_new_level() {
        let questions = questions(Level::L1);
        let mut session = QuizSession::new(Level::L1);
        session.start(questions.len());
        answer_correctly(&mut session, &questions, questions.len());

        session.reset(Level::L2);
        assert_eq!(session.phase, Phase::Intro);
        assert_eq!(session.level, Level::L2);
        assert!(session.answers.is_empty());
    }

    #[test]
    fn expired_sessions_are_invisible() {
        let store = QuizSessions::with_ttl(Duration::ZERO);
        let token = store.open(Level::L1);
        assert!(store.get(&token).is_none());
        assert!(store.update(&token, |s| s.start(5)).is_none());
    }

    #[test]
    fn open_sweeps_expired_entries() {
        let store = QuizSessions::with_ttl(Duration::ZERO);
        for _ in 0..10 {
            store.open(Level::L1);
        }
        // Each open evicts everything already past its lifetime, so only
        // the newest entry remains.
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn removing_a_replaced_token_frees_its_entry() {
        let store = QuizSessions::new();
        let old = store.open(Level::L1);
        store.remove(&old);
        let new = store.open(Level::L2);

        assert!(store.get(&old).is_none());
        assert_eq!(store.get(&new).unwrap().level, Level::L2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn live_sessions_survive_a_sweep() {
        let store = QuizSessions::new();
        let a = store.open(Level::L1);
        let b = store.open(Level::L2);
        assert!(store.get(&a).is_some());
        assert!(store.get(&b).is_some());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn store_round_trips_sessions_by_token() {
        let store = QuizSessions::new();
        let token = store.open(Level::L3);
        let session = store.get(&token).unwrap();
        assert_eq!(session.level, Level::L3);
        assert_eq!(session.phase, Phase::Intro);

        let updated = store.update(&token, |s| s.start(5)).unwrap();
        assert_eq!(updated.phase, Phase::Question { index: 0 });
        assert!(store.get("no-such-token").is_none());
        assert!(store.update("no-such-token", |_| {}).is_none());
    }
}
