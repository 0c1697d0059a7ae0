//! Run quiz use case
//!
//! Drives the whole quiz session: load the problem set, present each
//! problem in order, and race every answer read against one session-wide
//! deadline.

use crate::ports::answer_source::AnswerSourcePort;
use crate::ports::problem_source::{ProblemSourceError, ProblemSourcePort};
use crate::ports::prompter::{NullPrompter, ProblemPrompter};
use quizdash_domain::{ScoreReport, Session};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info};

/// Input for the RunQuiz use case
#[derive(Debug, Clone)]
pub struct RunQuizInput {
    /// Session deadline, measured from the moment the session starts
    pub time_limit: Duration,
}

impl RunQuizInput {
    pub fn new(time_limit: Duration) -> Self {
        Self { time_limit }
    }
}

/// Use case for running a timed quiz session
///
/// The runner is the only consumer of the answer channel and issues at
/// most one outstanding read at a time, so the single interactive input
/// stream is never contended. The loop suspends in exactly one place:
/// the race between "answer arrives" and "deadline elapses".
pub struct RunQuizUseCase<S, A>
where
    S: ProblemSourcePort + 'static,
    A: AnswerSourcePort + 'static,
{
    problems: Arc<S>,
    answers: Arc<A>,
}

impl<S, A> RunQuizUseCase<S, A>
where
    S: ProblemSourcePort + 'static,
    A: AnswerSourcePort + 'static,
{
    pub fn new(problems: Arc<S>, answers: Arc<A>) -> Self {
        Self { problems, answers }
    }

    /// Execute the use case without a prompt surface
    pub async fn execute(&self, input: RunQuizInput) -> Result<ScoreReport, ProblemSourceError> {
        self.execute_with_prompter(input, &NullPrompter).await
    }

    /// Execute the use case, announcing each problem through `prompter`
    pub async fn execute_with_prompter(
        &self,
        input: RunQuizInput,
        prompter: &dyn ProblemPrompter,
    ) -> Result<ScoreReport, ProblemSourceError> {
        let problems = self.problems.load().await?;
        info!(problems = problems.len(), "problem set loaded");

        let mut session = Session::new(problems.len());
        session.start();

        // One deadline for the whole session, fixed at start.
        let deadline = Instant::now() + input.time_limit;
        let timeout = sleep_until(deadline);
        tokio::pin!(timeout);

        while session.is_running() {
            let index = session.current_index();
            let Some(problem) = problems.get(index) else {
                // Unreachable while running: the session completes when
                // the index reaches the set size.
                break;
            };

            prompter.present_problem(index + 1, problem.question());
            let mut answer_rx = self.answers.request_answer();

            // Race the in-flight read against the deadline. `biased`
            // polls the deadline arm first: a tie is observed as a
            // timeout, and once the deadline fires the read is abandoned
            // with its eventual result discarded.
            tokio::select! {
                biased;
                _ = &mut timeout => {
                    debug!(problem = index + 1, "deadline reached, abandoning in-flight read");
                    session.time_out();
                }
                received = &mut answer_rx => match received {
                    Ok(answer) => {
                        session.record_answer(problem.check(&answer));
                    }
                    Err(_) => {
                        // Input stream closed: no answer will ever
                        // arrive, for this problem or any later one.
                        // Only the deadline can end the session now.
                        debug!(problem = index + 1, "input stream closed, waiting out the deadline");
                        timeout.as_mut().await;
                        session.time_out();
                    }
                },
            }
        }

        let report = session.report();
        info!(
            correct = report.correct,
            total = report.total,
            timed_out = report.timed_out,
            "session finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quizdash_domain::{Problem, ProblemSet};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    struct InMemorySource(Vec<Problem>);

    #[async_trait]
    impl ProblemSourcePort for InMemorySource {
        async fn load(&self) -> Result<ProblemSet, ProblemSourceError> {
            Ok(ProblemSet::new(self.0.clone()))
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ProblemSourcePort for FailingSource {
        async fn load(&self) -> Result<ProblemSet, ProblemSourceError> {
            Err(ProblemSourceError::MalformedRow { row: 1, fields: 1 })
        }
    }

    /// Scripted answer source: `Some` delivers immediately, `None`
    /// parks the request so no answer ever arrives (sender kept alive).
    struct ScriptedAnswers {
        script: Mutex<VecDeque<Option<String>>>,
        parked: Mutex<Vec<oneshot::Sender<String>>>,
    }

    impl ScriptedAnswers {
        fn new(script: Vec<Option<&str>>) -> Self {
            Self {
                script: Mutex::new(
                    script
                        .into_iter()
                        .map(|a| a.map(str::to_string))
                        .collect(),
                ),
                parked: Mutex::new(Vec::new()),
            }
        }
    }

    impl AnswerSourcePort for ScriptedAnswers {
        fn request_answer(&self) -> oneshot::Receiver<String> {
            let (tx, rx) = oneshot::channel();
            match self.script.lock().unwrap().pop_front() {
                Some(Some(answer)) => {
                    let _ = tx.send(answer);
                }
                Some(None) | None => self.parked.lock().unwrap().push(tx),
            }
            rx
        }
    }

    /// Answer source whose input stream is already closed.
    struct ClosedAnswers;

    impl AnswerSourcePort for ClosedAnswers {
        fn request_answer(&self) -> oneshot::Receiver<String> {
            let (_, rx) = oneshot::channel();
            rx
        }
    }

    #[derive(Default)]
    struct RecordingPrompter(Mutex<Vec<(usize, String)>>);

    impl ProblemPrompter for RecordingPrompter {
        fn present_problem(&self, number: usize, question: &str) {
            self.0.lock().unwrap().push((number, question.to_string()));
        }
    }

    fn two_problems() -> Vec<Problem> {
        vec![Problem::new("2+2", "4"), Problem::new("3+3", "6")]
    }

    fn use_case(
        problems: Vec<Problem>,
        answers: ScriptedAnswers,
    ) -> RunQuizUseCase<InMemorySource, ScriptedAnswers> {
        RunQuizUseCase::new(Arc::new(InMemorySource(problems)), Arc::new(answers))
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_correct_with_ample_time() {
        let uc = use_case(
            two_problems(),
            ScriptedAnswers::new(vec![Some("4\n"), Some("6\n")]),
        );
        let report = uc
            .execute(RunQuizInput::new(Duration::from_secs(30)))
            .await
            .unwrap();
        assert_eq!(report.correct, 2);
        assert_eq!(report.total, 2);
        assert!(!report.timed_out);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_answer_counts_attempt_not_score() {
        let uc = use_case(
            two_problems(),
            ScriptedAnswers::new(vec![Some("4\n"), Some("7\n")]),
        );
        let report = uc
            .execute(RunQuizInput::new(Duration::from_secs(30)))
            .await
            .unwrap();
        assert_eq!(report.correct, 1);
        assert_eq!(report.total, 2);
        assert!(!report.timed_out);
    }

    #[tokio::test(start_paused = true)]
    async fn test_answers_are_trimmed_before_comparison() {
        let uc = use_case(
            two_problems(),
            ScriptedAnswers::new(vec![Some("  4  \n"), Some("\t6\n")]),
        );
        let report = uc
            .execute(RunQuizInput::new(Duration::from_secs(30)))
            .await
            .unwrap();
        assert_eq!(report.correct, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_between_answers_scores_partial() {
        // First answer arrives, the second never does; the deadline ends
        // the session with the full set size as the total.
        let uc = use_case(
            two_problems(),
            ScriptedAnswers::new(vec![Some("4\n"), None]),
        );
        let report = uc
            .execute(RunQuizInput::new(Duration::from_secs(30)))
            .await
            .unwrap();
        assert_eq!(report.correct, 1);
        assert_eq!(report.total, 2);
        assert!(report.timed_out);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_deadline_scores_nothing() {
        // Answers are instantly available, but the deadline arm is
        // polled first and is already elapsed.
        let uc = use_case(
            two_problems(),
            ScriptedAnswers::new(vec![Some("4\n"), Some("6\n")]),
        );
        let report = uc.execute(RunQuizInput::new(Duration::ZERO)).await.unwrap();
        assert_eq!(report.correct, 0);
        assert_eq!(report.total, 2);
        assert!(report.timed_out);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_input_stream_waits_out_the_deadline() {
        let uc = RunQuizUseCase::new(
            Arc::new(InMemorySource(two_problems())),
            Arc::new(ClosedAnswers),
        );
        let start = Instant::now();
        let report = uc
            .execute(RunQuizInput::new(Duration::from_secs(30)))
            .await
            .unwrap();
        assert_eq!(report.correct, 0);
        assert_eq!(report.total, 2);
        assert!(report.timed_out);
        assert!(start.elapsed() >= Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_set_completes_without_prompting() {
        let prompter = RecordingPrompter::default();
        let uc = use_case(Vec::new(), ScriptedAnswers::new(Vec::new()));
        let report = uc
            .execute_with_prompter(RunQuizInput::new(Duration::from_secs(30)), &prompter)
            .await
            .unwrap();
        assert_eq!(report.correct, 0);
        assert_eq!(report.total, 0);
        assert!(!report.timed_out);
        assert!(prompter.0.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_problems_presented_in_order() {
        let prompter = RecordingPrompter::default();
        let uc = use_case(
            two_problems(),
            ScriptedAnswers::new(vec![Some("4\n"), Some("6\n")]),
        );
        uc.execute_with_prompter(RunQuizInput::new(Duration::from_secs(30)), &prompter)
            .await
            .unwrap();
        let presented = prompter.0.lock().unwrap();
        assert_eq!(
            *presented,
            vec![(1, "2+2".to_string()), (2, "3+3".to_string())]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_failure_aborts_before_session() {
        let uc = RunQuizUseCase::new(Arc::new(FailingSource), Arc::new(ClosedAnswers));
        let result = uc.execute(RunQuizInput::new(Duration::from_secs(30))).await;
        assert!(matches!(
            result,
            Err(ProblemSourceError::MalformedRow { row: 1, fields: 1 })
        ));
    }
}
