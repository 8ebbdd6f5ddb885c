//! AI service use case
//!
//! Orchestrates one generation call:
//! prompt → transport → clean → parse → validate → result or fallback.
//!
//! Upstream faults never escape. Every public operation returns content,
//! tagged with [`Provenance`](coursegen_domain::Provenance) so the caller can
//! tell model output from placeholder content. The only error is
//! [`DomainError`] for invalid input, raised before any provider call.

use crate::config::PipelineConfig;
use crate::ports::completion_provider::TextCompletionProvider;
use crate::ports::progress::{GenerationProgress, NoProgress, PipelineStage};
use crate::use_cases::retrying_transport::RetryingTransport;
use coursegen_domain::{
    CourseOutline, Difficulty, DomainError, FallbackGenerator, FallbackReason, Generated,
    GenerationKind, GenerationRequest, ParseOutcome, PromptTemplate, QuizResult, RoadmapResult,
    TopicQuiz, clean_response, is_valid_quiz, is_valid_roadmap, parse_resilient,
};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Content the pipeline knows how to accept or replace.
trait PipelineOutput: Sized {
    const KIND: GenerationKind;

    /// Validate and convert parsed model output; `None` is a schema violation.
    fn accept(value: &Value, request: &GenerationRequest) -> Option<Self>;

    fn fallback(request: &GenerationRequest) -> Self;
}

impl PipelineOutput for RoadmapResult {
    const KIND: GenerationKind = GenerationKind::Roadmap;

    fn accept(value: &Value, _request: &GenerationRequest) -> Option<Self> {
        if !is_valid_roadmap(value) {
            return None;
        }
        RoadmapResult::from_value(value)
    }

    fn fallback(request: &GenerationRequest) -> Self {
        FallbackGenerator::roadmap(request)
    }
}

impl PipelineOutput for QuizResult {
    const KIND: GenerationKind = GenerationKind::Quiz;

    fn accept(value: &Value, request: &GenerationRequest) -> Option<Self> {
        if !is_valid_quiz(value) {
            return None;
        }
        // An empty array passes the predicate but does not answer a request
        // for at least one question
        QuizResult::from_value(value)
            .filter(|quiz| !(quiz.is_empty() && request.question_count() > 0))
    }

    fn fallback(request: &GenerationRequest) -> Self {
        FallbackGenerator::quiz(request)
    }
}

/// Orchestrator for roadmap, quiz and course generation.
///
/// Stateless across calls and cheap to clone; share it freely between tasks.
#[derive(Clone)]
pub struct AiService {
    transport: RetryingTransport,
    config: PipelineConfig,
    progress: Arc<dyn GenerationProgress>,
}

impl AiService {
    pub fn new(provider: Arc<dyn TextCompletionProvider>, config: PipelineConfig) -> Self {
        Self {
            transport: RetryingTransport::new(provider, config.retry.clone()),
            config,
            progress: Arc::new(NoProgress),
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn GenerationProgress>) -> Self {
        self.progress = progress;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    // ==================== Roadmap ====================

    /// Generate a course roadmap.
    pub async fn generate_roadmap(
        &self,
        subject: &str,
        difficulty: Difficulty,
        duration_weeks: u32,
    ) -> Result<Generated<RoadmapResult>, DomainError> {
        let request = GenerationRequest::roadmap(subject, difficulty, duration_weeks)?;
        Ok(self.run(&request, None).await)
    }

    pub async fn generate_roadmap_with_cancellation(
        &self,
        subject: &str,
        difficulty: Difficulty,
        duration_weeks: u32,
        token: &CancellationToken,
    ) -> Result<Generated<RoadmapResult>, DomainError> {
        let request = GenerationRequest::roadmap(subject, difficulty, duration_weeks)?;
        Ok(self.run(&request, Some(token)).await)
    }

    // ==================== Quiz ====================

    /// Generate a quiz about `topic` within `subject`.
    pub async fn generate_quiz(
        &self,
        topic: &str,
        subject: &str,
        count: usize,
    ) -> Result<Generated<QuizResult>, DomainError> {
        let request = GenerationRequest::quiz(topic, subject, count)?;
        Ok(self.run(&request, None).await)
    }

    pub async fn generate_quiz_with_cancellation(
        &self,
        topic: &str,
        subject: &str,
        count: usize,
        token: &CancellationToken,
    ) -> Result<Generated<QuizResult>, DomainError> {
        let request = GenerationRequest::quiz(topic, subject, count)?;
        Ok(self.run(&request, Some(token)).await)
    }

    // ==================== Course ====================

    /// Generate a roadmap, then one quiz per topic.
    ///
    /// Quizzes are generated concurrently, at most
    /// [`PipelineConfig::max_concurrent_quizzes`] at a time; the result keeps
    /// roadmap topic order.
    pub async fn generate_course(
        &self,
        subject: &str,
        difficulty: Difficulty,
        duration_weeks: u32,
    ) -> Result<CourseOutline, DomainError> {
        self.course(subject, difficulty, duration_weeks, None).await
    }

    pub async fn generate_course_with_cancellation(
        &self,
        subject: &str,
        difficulty: Difficulty,
        duration_weeks: u32,
        token: &CancellationToken,
    ) -> Result<CourseOutline, DomainError> {
        self.course(subject, difficulty, duration_weeks, Some(token))
            .await
    }

    async fn course(
        &self,
        subject: &str,
        difficulty: Difficulty,
        duration_weeks: u32,
        cancellation: Option<&CancellationToken>,
    ) -> Result<CourseOutline, DomainError> {
        let request = GenerationRequest::roadmap(subject, difficulty, duration_weeks)?;
        let count = self.config.questions_per_topic;
        if count == 0 {
            return Err(DomainError::InvalidQuestionCount);
        }

        let roadmap: Generated<RoadmapResult> = self.run(&request, cancellation).await;
        let titles: Vec<String> = roadmap.content.topic_titles().map(str::to_string).collect();

        info!(
            subject = request.subject_name(),
            topics = titles.len(),
            questions_per_topic = count,
            max_concurrent = self.config.quiz_concurrency(),
            "Generating course quizzes"
        );

        // The model decides how many topics there are; bound calls in flight
        let permits = Arc::new(Semaphore::new(self.config.quiz_concurrency()));
        let mut join_set = JoinSet::new();
        for (index, topic) in titles.iter().enumerate() {
            // Model-written titles can be blank; such topics get the fallback quiz below
            let quiz_request = match GenerationRequest::quiz(topic, request.subject_name(), count) {
                Ok(quiz_request) => quiz_request,
                Err(e) => {
                    warn!(index, error = %e, "Skipping quiz generation for topic");
                    continue;
                }
            };
            let service = self.clone();
            let token = cancellation.cloned();
            let permits = Arc::clone(&permits);
            join_set.spawn(async move {
                let _permit = permits.acquire_owned().await;
                let quiz: Generated<QuizResult> = service.run(&quiz_request, token.as_ref()).await;
                (index, quiz)
            });
        }

        let mut quizzes: Vec<Option<Generated<QuizResult>>> = vec![None; titles.len()];
        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((index, quiz)) => quizzes[index] = Some(quiz),
                Err(e) => warn!("Quiz task join error: {}", e),
            }
        }

        let quizzes = titles
            .into_iter()
            .zip(quizzes)
            .map(|(topic_title, quiz)| {
                let quiz = quiz.unwrap_or_else(|| {
                    let content =
                        FallbackGenerator::quiz_for(&topic_title, request.subject_name(), count);
                    Generated::fallback(content, FallbackReason::SchemaViolation)
                });
                TopicQuiz { topic_title, quiz }
            })
            .collect();

        Ok(CourseOutline { roadmap, quizzes })
    }

    // ==================== Pipeline ====================

    fn stage(&self, kind: GenerationKind, stage: PipelineStage) {
        debug!(kind = %kind, stage = %stage, "Pipeline stage");
        self.progress.on_stage(kind, stage);
    }

    async fn run<T: PipelineOutput>(
        &self,
        request: &GenerationRequest,
        cancellation: Option<&CancellationToken>,
    ) -> Generated<T> {
        let kind = T::KIND;
        let label = match kind {
            GenerationKind::Roadmap => request.subject_name(),
            GenerationKind::Quiz => request.topic_title(),
        };
        self.progress.on_generation_start(kind, label);

        let result = match self.model_output::<T>(request, cancellation).await {
            Ok(content) => {
                self.stage(kind, PipelineStage::Success);
                info!(kind = %kind, label, "Generated from model output");
                Generated::from_model(content)
            }
            Err(reason) => {
                self.stage(kind, PipelineStage::Fallback);
                warn!(kind = %kind, label, reason = %reason, "Using fallback content");
                Generated::fallback(T::fallback(request), reason)
            }
        };

        self.progress
            .on_generation_complete(kind, result.fallback_reason());
        result
    }

    async fn model_output<T: PipelineOutput>(
        &self,
        request: &GenerationRequest,
        cancellation: Option<&CancellationToken>,
    ) -> Result<T, FallbackReason> {
        let kind = T::KIND;

        self.stage(kind, PipelineStage::BuildingPrompt);
        let prompt = PromptTemplate::for_request(request);

        self.stage(kind, PipelineStage::Calling);
        let raw = self
            .transport
            .call_with_progress(&prompt, cancellation, self.progress.as_ref())
            .await
            .map_err(|failure| {
                warn!(kind = %kind, attempts = failure.attempts(), error = %failure, "Transport failed");
                FallbackReason::TransportFailure
            })?;

        self.stage(kind, PipelineStage::Cleaning);
        let cleaned = clean_response(&raw);

        self.stage(kind, PipelineStage::Parsing);
        let value = match parse_resilient(&cleaned) {
            ParseOutcome::Parsed { value, tier } => {
                debug!(kind = %kind, tier = %tier, "Parsed model output");
                value
            }
            ParseOutcome::Unparsed(_) => return Err(FallbackReason::Unparsed),
        };

        self.stage(kind, PipelineStage::Validating);
        T::accept(&value, request).ok_or(FallbackReason::SchemaViolation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryPolicy;
    use crate::ports::completion_provider::ProviderError;
    use async_trait::async_trait;
    use coursegen_domain::QuestionSpec;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    // ==================== Test Doubles ====================

    /// Provider that replays scripted results in order, then fails
    struct ScriptedProvider {
        responses: Mutex<VecDeque<Result<String, ProviderError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedProvider {
        fn new(responses: Vec<Result<String, ProviderError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn text(text: &str) -> Self {
            Self::new(vec![Ok(text.to_string())])
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextCompletionProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(ProviderError::Connection("refused".to_string())))
        }
    }

    /// Provider that answers roadmap prompts with `roadmap` and quiz prompts
    /// with a quiz naming the topic found in the prompt
    struct CourseProvider {
        roadmap: String,
        quiz_calls: AtomicUsize,
        quiz_latency: Duration,
        in_flight: AtomicUsize,
        peak_in_flight: AtomicUsize,
    }

    impl CourseProvider {
        fn new(roadmap: &str) -> Self {
            Self {
                roadmap: roadmap.to_string(),
                quiz_calls: AtomicUsize::new(0),
                quiz_latency: Duration::ZERO,
                in_flight: AtomicUsize::new(0),
                peak_in_flight: AtomicUsize::new(0),
            }
        }

        fn with_quiz_latency(mut self, latency: Duration) -> Self {
            self.quiz_latency = latency;
            self
        }
    }

    #[async_trait]
    impl TextCompletionProvider for CourseProvider {
        fn name(&self) -> &str {
            "course"
        }

        async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
            if prompt.contains("learning roadmap") {
                return Ok(self.roadmap.clone());
            }
            self.quiz_calls.fetch_add(1, Ordering::SeqCst);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
            if !self.quiz_latency.is_zero() {
                tokio::time::sleep(self.quiz_latency).await;
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(quiz_json(1))
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        stages: Mutex<Vec<PipelineStage>>,
        failed_attempts: AtomicUsize,
    }

    impl GenerationProgress for RecordingProgress {
        fn on_stage(&self, _kind: GenerationKind, stage: PipelineStage) {
            self.stages.lock().unwrap().push(stage);
        }

        fn on_attempt_failed(&self, _attempt: u32, _max: u32, _error: &ProviderError) {
            self.failed_attempts.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn config(max_retries: u32) -> PipelineConfig {
        PipelineConfig::default().with_retry(
            RetryPolicy::default()
                .with_max_retries(max_retries)
                .with_retry_delay(Duration::from_millis(10))
                .with_timeout(Duration::from_secs(1)),
        )
    }

    fn service(provider: Arc<dyn TextCompletionProvider>) -> AiService {
        AiService::new(provider, config(2))
    }

    fn quiz_json(count: usize) -> String {
        let questions: Vec<String> = (1..=count)
            .map(|i| {
                format!(
                    r#"{{"id": "{i}", "question": "Q{i}?", "options": ["a", "b", "c", "d"], "correct_answer": 3, "explanation": "E{i}"}}"#
                )
            })
            .collect();
        format!("[{}]", questions.join(", "))
    }

    const ROADMAP_JSON: &str = r#"{"description": "A course on algebra", "topics": [
        {"title": "Variables", "description": "Symbols", "estimated_time": "2 hours", "notes": "x"},
        {"title": "Equations", "description": "Balance", "estimated_time": 3, "notes": "y"},
        {"title": "Functions", "description": "Mappings", "notes": "z"}
    ]}"#;

    // ==================== Roadmap ====================

    #[tokio::test(start_paused = true)]
    async fn test_fenced_roadmap_end_to_end() {
        let raw = format!("```json\n{}\n```", ROADMAP_JSON);
        let provider = Arc::new(ScriptedProvider::text(&raw));
        let result = service(provider.clone())
            .generate_roadmap("Algebra", Difficulty::Beginner, 4)
            .await
            .unwrap();

        assert!(!result.is_fallback());
        assert_eq!(result.content.description, "A course on algebra");
        let titles: Vec<_> = result.content.topic_titles().collect();
        assert_eq!(titles, vec!["Variables", "Equations", "Functions"]);
        assert_eq!(result.content.topics[1].estimated_time, "3");
        assert_eq!(result.content.topics[2].estimated_time, "");
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_roadmap_prose_and_trailing_commas() {
        let raw = r#"Here is your roadmap:
{"description": "D", "topics": [{"title": "T", "description": "TD", "estimated_time": "1 hour", "notes": "N",},],}
Enjoy!"#;
        let result = service(Arc::new(ScriptedProvider::text(raw)))
            .generate_roadmap("Algebra", Difficulty::Advanced, 2)
            .await
            .unwrap();

        assert_eq!(result.provenance, coursegen_domain::Provenance::Model);
        assert_eq!(result.content.topics.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_roadmap_transport_failure_falls_back() {
        let provider = Arc::new(ScriptedProvider::new(Vec::new()));
        let result = service(provider.clone())
            .generate_roadmap("Algebra", Difficulty::Intermediate, 4)
            .await
            .unwrap();

        assert_eq!(result.fallback_reason(), Some(FallbackReason::TransportFailure));
        assert_eq!(
            result.content,
            FallbackGenerator::roadmap_for("Algebra", Difficulty::Intermediate)
        );
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_roadmap_schema_violation_falls_back() {
        let provider = Arc::new(ScriptedProvider::text(r#"{"description": "D", "topics": []}"#));
        let result = service(provider)
            .generate_roadmap("Algebra", Difficulty::Beginner, 4)
            .await
            .unwrap();
        assert_eq!(result.fallback_reason(), Some(FallbackReason::SchemaViolation));
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_input_is_rejected_before_calling() {
        let provider = Arc::new(ScriptedProvider::text(ROADMAP_JSON));
        let service = service(provider.clone());

        assert!(service.generate_roadmap("  ", Difficulty::Beginner, 4).await.is_err());
        assert!(service.generate_roadmap("Algebra", Difficulty::Beginner, 0).await.is_err());
        assert!(service.generate_quiz("", "Algebra", 3).await.is_err());
        assert!(service.generate_quiz("Variables", "Algebra", 0).await.is_err());
        assert_eq!(provider.calls(), 0);
    }

    // ==================== Quiz ====================

    #[tokio::test(start_paused = true)]
    async fn test_quiz_from_model() {
        let provider = Arc::new(ScriptedProvider::text(&quiz_json(3)));
        let result = service(provider.clone())
            .generate_quiz("Loops", "Python", 3)
            .await
            .unwrap();

        assert!(!result.is_fallback());
        assert_eq!(result.content.len(), 3);
        assert_eq!(result.content.questions[0].correct_option(), "d");
        let prompts = provider.prompts.lock().unwrap();
        assert!(prompts[0].contains("Loops"));
        assert!(prompts[0].contains("Python"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_quiz_python_literal_output() {
        let raw = "[{'id': 1, 'question': 'Q?', 'options': ('a', 'b', 'c', 'd'), \
                   'correct_answer': 0, 'explanation': 'E'}]";
        let result = service(Arc::new(ScriptedProvider::text(raw)))
            .generate_quiz("Loops", "Python", 1)
            .await
            .unwrap();

        assert!(!result.is_fallback());
        let expected = QuestionSpec {
            id: "1".to_string(),
            question: "Q?".to_string(),
            options: ["a", "b", "c", "d"].map(String::from),
            correct_answer: 0,
            explanation: "E".to_string(),
        };
        assert_eq!(result.content.questions, vec![expected]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quiz_empty_array_falls_back() {
        let result = service(Arc::new(ScriptedProvider::text("[]")))
            .generate_quiz("Loops", "Python", 2)
            .await
            .unwrap();
        assert_eq!(result.fallback_reason(), Some(FallbackReason::SchemaViolation));
        assert_eq!(result.content.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_output_never_fails() {
        let outputs = [
            "",
            "I'm sorry, I can't help with that.",
            "```json\n{\"description\": \"cut off",
            "[1, 2, 3]",
            "null",
            "{\"questions\": []}",
            "[{'id': '1', 'question': 'Q', 'options': ['a', 'b', 'c'], 'correct_answer': 0, 'explanation': 'E'}]",
        ];

        for output in outputs {
            let quiz_service = service(Arc::new(ScriptedProvider::text(output)));
            let quiz = quiz_service.generate_quiz("Loops", "Python", 5).await.unwrap();
            assert!(quiz.is_fallback(), "quiz for {output:?}");
            assert_eq!(quiz.content.len(), FallbackGenerator::QUIZ_BANK_SIZE);

            let roadmap_service = service(Arc::new(ScriptedProvider::text(output)));
            let roadmap = roadmap_service
                .generate_roadmap("Python", Difficulty::Beginner, 4)
                .await
                .unwrap();
            assert!(roadmap.is_fallback(), "roadmap for {output:?}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_unparsed_reason() {
        let result = service(Arc::new(ScriptedProvider::text("not json")))
            .generate_quiz("Loops", "Python", 1)
            .await
            .unwrap();
        assert_eq!(result.fallback_reason(), Some(FallbackReason::Unparsed));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallback_is_deterministic() {
        let a = service(Arc::new(ScriptedProvider::new(Vec::new())))
            .generate_quiz("Loops", "Python", 5)
            .await
            .unwrap();
        let b = service(Arc::new(ScriptedProvider::text("garbage")))
            .generate_quiz("Loops", "Python", 5)
            .await
            .unwrap();
        assert_eq!(a.content, b.content);
        assert_eq!(a.content, FallbackGenerator::quiz_for("Loops", "Python", 5));
    }

    // ==================== Progress & Cancellation ====================

    #[tokio::test(start_paused = true)]
    async fn test_stage_sequence() {
        let progress = Arc::new(RecordingProgress::default());
        let provider = Arc::new(ScriptedProvider::new(vec![
            Err(ProviderError::Timeout),
            Ok(quiz_json(1)),
        ]));
        let service = service(provider).with_progress(progress.clone());

        service.generate_quiz("Loops", "Python", 1).await.unwrap();

        assert_eq!(
            *progress.stages.lock().unwrap(),
            vec![
                PipelineStage::BuildingPrompt,
                PipelineStage::Calling,
                PipelineStage::Cleaning,
                PipelineStage::Parsing,
                PipelineStage::Validating,
                PipelineStage::Success,
            ]
        );
        assert_eq!(progress.failed_attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_generation_falls_back() {
        let provider = Arc::new(ScriptedProvider::text(ROADMAP_JSON));
        let token = CancellationToken::new();
        token.cancel();

        let result = service(provider.clone())
            .generate_roadmap_with_cancellation("Algebra", Difficulty::Beginner, 4, &token)
            .await
            .unwrap();

        assert_eq!(result.fallback_reason(), Some(FallbackReason::TransportFailure));
        assert_eq!(provider.calls(), 0);
    }

    // ==================== Course ====================

    #[tokio::test(start_paused = true)]
    async fn test_course_keeps_topic_order() {
        let provider = Arc::new(CourseProvider::new(ROADMAP_JSON));
        let service = AiService::new(provider.clone(), config(1).with_questions_per_topic(1));

        let outline = service
            .generate_course("Algebra", Difficulty::Beginner, 4)
            .await
            .unwrap();

        assert!(!outline.roadmap.is_fallback());
        let titles: Vec<_> = outline.quizzes.iter().map(|q| q.topic_title.as_str()).collect();
        assert_eq!(titles, vec!["Variables", "Equations", "Functions"]);
        assert_eq!(outline.fallback_count(), 0);
        assert_eq!(provider.quiz_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_course_blank_topic_title_gets_fallback_quiz() {
        let roadmap = r#"{"description": "D", "topics": [
            {"title": "Variables", "description": "d", "notes": "n"},
            {"title": "  ", "description": "d", "notes": "n"}
        ]}"#;
        let provider = Arc::new(CourseProvider::new(roadmap));
        let service = AiService::new(provider.clone(), config(1).with_questions_per_topic(1));

        let outline = service
            .generate_course("Algebra", Difficulty::Beginner, 4)
            .await
            .unwrap();

        assert_eq!(outline.quizzes.len(), 2);
        assert!(!outline.quizzes[0].quiz.is_fallback());
        assert_eq!(
            outline.quizzes[1].quiz.fallback_reason(),
            Some(FallbackReason::SchemaViolation)
        );
        assert_eq!(provider.quiz_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_course_offline_uses_fallback_everywhere() {
        let service = service(Arc::new(ScriptedProvider::new(Vec::new())));

        let outline = service
            .generate_course("Algebra", Difficulty::Beginner, 4)
            .await
            .unwrap();

        assert!(outline.roadmap.is_fallback());
        assert_eq!(outline.quizzes.len(), 2);
        assert_eq!(outline.quizzes[0].topic_title, "Introduction to Algebra");
        assert_eq!(outline.fallback_count(), 3);
        assert_eq!(outline.question_count(), 2 * FallbackGenerator::QUIZ_BANK_SIZE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_course_bounds_concurrent_quizzes() {
        let topics: Vec<String> = (1..=8)
            .map(|i| format!(r#"{{"title": "Topic {i}", "description": "d", "notes": "n"}}"#))
            .collect();
        let roadmap = format!(r#"{{"description": "D", "topics": [{}]}}"#, topics.join(","));
        let provider =
            Arc::new(CourseProvider::new(&roadmap).with_quiz_latency(Duration::from_millis(100)));
        let service = AiService::new(
            provider.clone(),
            config(1)
                .with_questions_per_topic(1)
                .with_max_concurrent_quizzes(3),
        );

        let outline = service
            .generate_course("Algebra", Difficulty::Beginner, 4)
            .await
            .unwrap();

        assert_eq!(outline.quizzes.len(), 8);
        assert_eq!(outline.fallback_count(), 0);
        assert_eq!(provider.quiz_calls.load(Ordering::SeqCst), 8);
        assert_eq!(provider.peak_in_flight.load(Ordering::SeqCst), 3);
    }
}
