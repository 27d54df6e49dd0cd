//! Submission evaluation service
//!
//! Orchestrates the external judging flow: build one execution request per
//! test case, submit the batch, poll until every case is terminal or the
//! wait budget runs out, aggregate the per-case verdicts, and (in submit
//! mode) persist the outcome and update the solved set.

use std::time::Duration;

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::Config,
    db::repositories::{ProblemRepository, SubmissionRepository, UserRepository},
    error::{AppError, AppResult},
    models::{Language, Problem, Submission, SubmissionStatus},
    providers::{CaseResult, CaseStatus, ExecutionCase, JudgeProvider},
    utils::validation,
};

/// Aggregated outcome of one evaluation
#[derive(Debug, Clone)]
pub struct EvalOutcome {
    pub status: SubmissionStatus,
    pub passed: i32,
    pub total: i32,
    /// Maximum wall time across cases, in seconds
    pub runtime_seconds: f64,
    /// Maximum peak memory across cases, in kilobytes
    pub memory_kb: i64,
    pub error_message: Option<String>,
}

/// Per-case detail returned in run mode
#[derive(Debug, Clone)]
pub struct RunCase {
    pub input: String,
    pub expected_output: String,
    pub actual_output: Option<String>,
    pub passed: bool,
}

/// Outcome of a run-mode evaluation (nothing persisted)
#[derive(Debug, Clone)]
pub struct RunEvaluation {
    pub outcome: EvalOutcome,
    pub cases: Vec<RunCase>,
}

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Run-mode evaluation: visible test cases only, nothing persisted.
    ///
    /// A problem with zero visible cases yields an empty, successful result
    /// without touching the provider.
    pub async fn run(
        pool: &PgPool,
        judge: &dyn JudgeProvider,
        config: &Config,
        problem_id: &Uuid,
        code: &str,
        language: Language,
    ) -> AppResult<RunEvaluation> {
        validation::validate_source_code(code).map_err(|e| AppError::Validation(e.to_string()))?;

        let problem = Self::fetch_problem(pool, problem_id).await?;

        if problem.visible_test_cases.is_empty() {
            return Ok(RunEvaluation {
                outcome: EvalOutcome {
                    status: SubmissionStatus::Accepted,
                    passed: 0,
                    total: 0,
                    runtime_seconds: 0.0,
                    memory_kb: 0,
                    error_message: None,
                },
                cases: Vec::new(),
            });
        }

        let io: Vec<(&str, &str)> = problem
            .visible_test_cases
            .iter()
            .map(|tc| (tc.input.as_str(), tc.output.as_str()))
            .collect();

        let results = Self::execute(judge, config, code, language, &io).await?;
        let outcome = Self::aggregate(&results);

        let cases = io
            .iter()
            .zip(results.iter())
            .map(|((input, expected), result)| RunCase {
                input: (*input).to_string(),
                expected_output: (*expected).to_string(),
                actual_output: result.stdout.clone(),
                passed: result.status == CaseStatus::Accepted,
            })
            .collect();

        Ok(RunEvaluation { outcome, cases })
    }

    /// Submit-mode evaluation: all test cases, outcome persisted.
    ///
    /// The submission row is created `pending` before the provider is
    /// involved; if the wait budget runs out it stays that way and the
    /// timeout is surfaced to the caller. Only a fully accepted run adds
    /// the problem to the user's solved set (an idempotent set-add).
    pub async fn submit(
        pool: &PgPool,
        judge: &dyn JudgeProvider,
        config: &Config,
        user_id: &Uuid,
        problem_id: &Uuid,
        code: &str,
        language: Language,
    ) -> AppResult<(Submission, EvalOutcome)> {
        validation::validate_source_code(code).map_err(|e| AppError::Validation(e.to_string()))?;

        let problem = Self::fetch_problem(pool, problem_id).await?;
        let io = problem.all_test_cases();

        let submission = SubmissionRepository::create(
            pool,
            user_id,
            problem_id,
            code,
            language.as_str(),
            io.len() as i32,
        )
        .await?;

        let results = match Self::execute(judge, config, code, language, &io).await {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(
                    user_id = %user_id,
                    problem_id = %problem_id,
                    submission_id = %submission.id,
                    "Evaluation did not complete: {}",
                    e
                );
                return Err(e);
            }
        };

        let outcome = Self::aggregate(&results);

        let submission = SubmissionRepository::record_verdict(
            pool,
            &submission.id,
            outcome.status.as_str(),
            outcome.runtime_seconds,
            outcome.memory_kb,
            outcome.passed,
            outcome.error_message.as_deref(),
        )
        .await?;

        if outcome.status.is_accepted() {
            UserRepository::add_solved_problem(pool, user_id, problem_id).await?;
        }

        Ok((submission, outcome))
    }

    /// A user's submission history for one problem
    pub async fn list_for_problem(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: &Uuid,
    ) -> AppResult<Vec<Submission>> {
        if !ProblemRepository::exists(pool, problem_id).await? {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }

        SubmissionRepository::list_for_user_problem(pool, user_id, problem_id).await
    }

    async fn fetch_problem(pool: &PgPool, problem_id: &Uuid) -> AppResult<Problem> {
        ProblemRepository::find_by_id(pool, problem_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))
    }

    /// Submit one batch and wait for every case to reach a terminal state
    pub(crate) async fn execute(
        judge: &dyn JudgeProvider,
        config: &Config,
        code: &str,
        language: Language,
        io: &[(&str, &str)],
    ) -> AppResult<Vec<CaseResult>> {
        let cases: Vec<ExecutionCase> = io
            .iter()
            .map(|(input, expected)| ExecutionCase {
                source_code: code.to_string(),
                language_id: language.provider_id(),
                stdin: (*input).to_string(),
                expected_output: (*expected).to_string(),
            })
            .collect();

        let tokens = judge.submit_batch(&cases).await?;

        Self::wait_for_verdicts(
            judge,
            &tokens,
            Duration::from_millis(config.judge.poll_interval_ms),
            Duration::from_millis(config.judge.wait_budget_ms),
        )
        .await
    }

    /// Poll the provider at a fixed interval until all cases are terminal.
    ///
    /// The wait is a plain `tokio::time::sleep`, so the task yields between
    /// polls and the whole loop dies with the request future if the client
    /// goes away. Exceeding the budget is an error, not a retry trigger.
    pub(crate) async fn wait_for_verdicts(
        judge: &dyn JudgeProvider,
        tokens: &[String],
        poll_interval: Duration,
        wait_budget: Duration,
    ) -> AppResult<Vec<CaseResult>> {
        let deadline = tokio::time::Instant::now() + wait_budget;

        loop {
            let results = judge.fetch_batch(tokens).await?;

            if results.iter().all(|r| r.status.is_terminal()) {
                return Ok(results);
            }

            if tokio::time::Instant::now() >= deadline {
                return Err(AppError::JudgeTimeout);
            }

            tokio::time::sleep(poll_interval).await;
        }
    }

    /// Collapse per-case verdicts into one submission outcome.
    ///
    /// Precedence: any errored case wins, then any mismatch, then accepted.
    /// Runtime and memory are the maxima across cases.
    pub(crate) fn aggregate(results: &[CaseResult]) -> EvalOutcome {
        let total = results.len() as i32;
        let passed = results
            .iter()
            .filter(|r| r.status == CaseStatus::Accepted)
            .count() as i32;

        let status = if results.iter().any(|r| r.status == CaseStatus::Errored) {
            SubmissionStatus::RuntimeError
        } else if results.iter().any(|r| r.status == CaseStatus::WrongAnswer) {
            SubmissionStatus::WrongAnswer
        } else {
            SubmissionStatus::Accepted
        };

        let runtime_seconds = results
            .iter()
            .filter_map(|r| r.time_seconds)
            .fold(0.0_f64, f64::max);

        let memory_kb = results.iter().filter_map(|r| r.memory_kb).max().unwrap_or(0);

        let error_message = results
            .iter()
            .find(|r| r.status == CaseStatus::Errored)
            .and_then(|r| r.error_text())
            .map(|s| s.to_string());

        EvalOutcome {
            status,
            passed,
            total,
            runtime_seconds,
            memory_kb,
            error_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockJudgeProvider;

    fn case(status: CaseStatus, time: Option<f64>, memory: Option<i64>) -> CaseResult {
        CaseResult {
            token: "t".to_string(),
            status,
            stdout: None,
            stderr: None,
            compile_output: None,
            time_seconds: time,
            memory_kb: memory,
        }
    }

    #[test]
    fn test_aggregate_all_accepted() {
        let results = vec![
            case(CaseStatus::Accepted, Some(0.01), Some(1024)),
            case(CaseStatus::Accepted, Some(0.05), Some(4096)),
            case(CaseStatus::Accepted, Some(0.02), Some(2048)),
        ];

        let outcome = SubmissionService::aggregate(&results);
        assert_eq!(outcome.status, SubmissionStatus::Accepted);
        assert_eq!(outcome.passed, 3);
        assert_eq!(outcome.total, 3);
        assert_eq!(outcome.runtime_seconds, 0.05);
        assert_eq!(outcome.memory_kb, 4096);
        assert!(outcome.error_message.is_none());
    }

    #[test]
    fn test_aggregate_wrong_answer_precedence() {
        let results = vec![
            case(CaseStatus::Accepted, Some(0.01), Some(1024)),
            case(CaseStatus::WrongAnswer, Some(0.01), Some(1024)),
        ];

        let outcome = SubmissionService::aggregate(&results);
        assert_eq!(outcome.status, SubmissionStatus::WrongAnswer);
        assert_eq!(outcome.passed, 1);
        assert_eq!(outcome.total, 2);
    }

    #[test]
    fn test_aggregate_error_beats_wrong_answer() {
        let mut errored = case(CaseStatus::Errored, None, None);
        errored.stderr = Some("segfault".to_string());

        let results = vec![
            case(CaseStatus::WrongAnswer, Some(0.01), Some(1024)),
            errored,
            case(CaseStatus::Accepted, Some(0.02), Some(2048)),
        ];

        let outcome = SubmissionService::aggregate(&results);
        assert_eq!(outcome.status, SubmissionStatus::RuntimeError);
        assert_eq!(outcome.error_message.as_deref(), Some("segfault"));
    }

    #[test]
    fn test_aggregate_passed_never_exceeds_total() {
        let results: Vec<CaseResult> = (0..5)
            .map(|_| case(CaseStatus::Accepted, Some(0.01), Some(512)))
            .collect();

        let outcome = SubmissionService::aggregate(&results);
        assert!(outcome.passed <= outcome.total);
    }

    #[test]
    fn test_aggregate_empty_batch() {
        let outcome = SubmissionService::aggregate(&[]);
        assert_eq!(outcome.status, SubmissionStatus::Accepted);
        assert_eq!(outcome.passed, 0);
        assert_eq!(outcome.total, 0);
        assert_eq!(outcome.runtime_seconds, 0.0);
        assert_eq!(outcome.memory_kb, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_resolves_once_terminal() {
        let mut judge = MockJudgeProvider::new();
        let mut polls = 0;
        judge.expect_fetch_batch().returning(move |_| {
            polls += 1;
            let status = if polls < 3 {
                CaseStatus::Processing
            } else {
                CaseStatus::Accepted
            };
            Ok(vec![case(status, Some(0.01), Some(256))])
        });

        let tokens = vec!["t1".to_string()];
        let results = SubmissionService::wait_for_verdicts(
            &judge,
            &tokens,
            Duration::from_millis(100),
            Duration::from_secs(5),
        )
        .await
        .unwrap();

        assert_eq!(results[0].status, CaseStatus::Accepted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_budget_exhaustion_is_a_timeout() {
        let mut judge = MockJudgeProvider::new();
        judge
            .expect_fetch_batch()
            .returning(|_| Ok(vec![case(CaseStatus::InQueue, None, None)]));

        let tokens = vec!["t1".to_string()];
        let err = SubmissionService::wait_for_verdicts(
            &judge,
            &tokens,
            Duration::from_millis(100),
            Duration::from_millis(350),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::JudgeTimeout));
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let mut judge = MockJudgeProvider::new();
        judge
            .expect_fetch_batch()
            .returning(|_| Err(AppError::Judge("connection reset".to_string())));

        let tokens = vec!["t1".to_string()];
        let err = SubmissionService::wait_for_verdicts(
            &judge,
            &tokens,
            Duration::from_millis(10),
            Duration::from_millis(50),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Judge(_)));
    }
}
