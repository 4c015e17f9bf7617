//! Generate Reply use case.
//!
//! The response orchestrator: classify the question once, make a single
//! unretried call to the hosted model, and shape the answer. On any
//! generation failure — transport error, non-success status, malformed
//! payload, empty text after cleanup — a curated fallback keyed by the
//! detected category is substituted.
//!
//! [`execute`](GenerateReplyUseCase::execute) is infallible: every path
//! resolves to a well-formed [`TutorReply`], so callers need no error
//! branching around answer generation. Only the deadline race (see
//! [`ReplyParams`](crate::config::ReplyParams)) is the caller's problem.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use brainbytes_domain::reply::format::{acknowledgment, format_by_type};
use brainbytes_domain::util::preview;
use brainbytes_domain::{
    classify, fallback_reply, strip_markdown, ExampleChooser, Model, Question, Sentiment,
    TutorReply,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for answering a student question.
///
/// Flow:
/// 1. Run all three classifiers once on the raw question
/// 2. Send the raw question text to the model through the gateway
/// 3. Success: strip markdown, prepend an acknowledgment on negative
///    sentiment, apply the type formatter
/// 4. Failure: pick a fallback answer for the category, then the same
///    acknowledgment/formatting passes
pub struct GenerateReplyUseCase {
    gateway: Arc<dyn LlmGateway>,
    chooser: Arc<dyn ExampleChooser>,
    model: Model,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Clone for GenerateReplyUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            chooser: self.chooser.clone(),
            model: self.model.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl GenerateReplyUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        chooser: Arc<dyn ExampleChooser>,
        model: Model,
    ) -> Self {
        Self {
            gateway,
            chooser,
            model,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// The model this use case queries.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Answer a question. Never fails.
    pub async fn execute(&self, question: &Question) -> TutorReply {
        self.execute_with_progress(question, &NoProgress).await
    }

    /// Answer a question with progress callbacks. Never fails.
    pub async fn execute_with_progress(
        &self,
        question: &Question,
        progress: &dyn ProgressNotifier,
    ) -> TutorReply {
        let labels = classify(question.content());

        info!("Answering question: {}", preview(question.content(), 100));
        debug!(
            category = %labels.category,
            question_type = %labels.question_type,
            sentiment = %labels.sentiment,
            "Classification complete"
        );

        self.conversation_logger.log(ConversationEvent::new(
            "question",
            serde_json::json!({
                "text": question.content(),
                "category": labels.category,
                "questionType": labels.question_type,
                "sentiment": labels.sentiment,
            }),
        ));

        progress.on_model_request_start(&self.model);
        let generated = self
            .gateway
            .complete(&self.model, question.content())
            .await;
        progress.on_model_request_end(&self.model, generated.is_ok());

        let (body, used_fallback) = match generated {
            Ok(text) => {
                let cleaned = strip_markdown(&text);
                if cleaned.is_empty() {
                    warn!("Model returned no usable text; substituting fallback");
                    (
                        fallback_reply(labels.category, question.content(), &*self.chooser),
                        true,
                    )
                } else {
                    (cleaned, false)
                }
            }
            Err(e) => {
                warn!("Model call failed: {e}; substituting fallback");
                (
                    fallback_reply(labels.category, question.content(), &*self.chooser),
                    true,
                )
            }
        };

        let body = if labels.sentiment == Sentiment::Negative {
            format!("{} {}", acknowledgment(&*self.chooser), body)
        } else {
            body
        };

        let response = format_by_type(&body, labels.question_type);

        self.conversation_logger.log(ConversationEvent::new(
            "reply",
            serde_json::json!({
                "text": response,
                "category": labels.category,
                "questionType": labels.question_type,
                "sentiment": labels.sentiment,
                "fallback": used_fallback,
            }),
        ));

        TutorReply::new(labels, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use async_trait::async_trait;
    use brainbytes_domain::{Category, FixedChooser, QuestionType};
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockGateway {
        result: Mutex<Option<Result<String, GatewayError>>>,
    }

    impl MockGateway {
        fn replying(text: &str) -> Self {
            Self {
                result: Mutex::new(Some(Ok(text.to_string()))),
            }
        }

        fn failing(error: GatewayError) -> Self {
            Self {
                result: Mutex::new(Some(Err(error))),
            }
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn complete(&self, _model: &Model, _prompt: &str) -> Result<String, GatewayError> {
            self.result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(GatewayError::Other("no scripted result".to_string())))
        }
    }

    struct RecordingLogger {
        events: Mutex<Vec<(String, serde_json::Value)>>,
    }

    impl RecordingLogger {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }

        fn events(&self) -> Vec<(String, serde_json::Value)> {
            self.events.lock().unwrap().clone()
        }
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type.to_string(), event.payload));
        }
    }

    fn use_case(gateway: MockGateway) -> GenerateReplyUseCase {
        GenerateReplyUseCase::new(
            Arc::new(gateway),
            Arc::new(FixedChooser(0)),
            Model::default(),
        )
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_successful_generation_is_cleaned_and_formatted() {
        let gateway = MockGateway::replying("## Circles\nA circle is a round shape.");
        let reply = use_case(gateway)
            .execute(&Question::new("What is a circle?"))
            .await;

        assert_eq!(reply.question_type, QuestionType::Definition);
        assert_eq!(
            reply.response,
            "Definition: Circles\n\nA circle is a round shape."
        );
    }

    #[tokio::test]
    async fn test_gateway_failure_resolves_to_fallback() {
        let gateway = MockGateway::failing(GatewayError::Connection("refused".to_string()));
        let reply = use_case(gateway)
            .execute(&Question::new("Tell me about each continent of the world"))
            .await;

        assert_eq!(reply.category, Category::Geography);
        assert!(!reply.response.is_empty());
        assert!(reply.response.contains("seven continents"));
    }

    #[tokio::test]
    async fn test_non_success_status_resolves_to_fallback() {
        let gateway = MockGateway::failing(GatewayError::Status {
            status: 504,
            message: "Gateway Timeout".to_string(),
        });
        let reply = use_case(gateway)
            .execute(&Question::new("What is evaporation?"))
            .await;

        assert_eq!(reply.category, Category::Science);
        assert!(reply.response.contains("water vapor"));
    }

    #[tokio::test]
    async fn test_empty_model_text_resolves_to_fallback() {
        let gateway = MockGateway::replying("```\n```");
        let reply = use_case(gateway)
            .execute(&Question::new("What is algebra about?"))
            .await;

        assert!(reply.response.contains("Algebra"));
    }

    #[tokio::test]
    async fn test_negative_sentiment_gets_acknowledgment_prefix() {
        let gateway = MockGateway::replying("Fractions split a whole into parts.");
        let reply = use_case(gateway)
            .execute(&Question::new("I am confused about fractions"))
            .await;

        assert_eq!(reply.sentiment, Sentiment::Negative);
        assert!(
            reply
                .response
                .starts_with("I understand this might be confusing.")
        );
        assert!(reply.response.contains("Fractions split a whole into parts."));
    }

    #[tokio::test]
    async fn test_acknowledgment_also_applies_on_fallback_path() {
        let gateway = MockGateway::failing(GatewayError::Other("down".to_string()));
        let reply = use_case(gateway)
            .execute(&Question::new("I am confused about fractions"))
            .await;

        assert!(
            reply
                .response
                .starts_with("I understand this might be confusing.")
        );
    }

    #[tokio::test]
    async fn test_labels_match_the_classifier() {
        let question = Question::new("Calculate 12 * 8");
        let gateway = MockGateway::replying("96");
        let reply = use_case(gateway).execute(&question).await;

        let labels = classify(question.content());
        assert_eq!(reply.labels(), labels);
        assert_eq!(reply.category, Category::Math);
        assert_eq!(reply.question_type, QuestionType::Calculation);
        // "96" mentions no result, so the calculation formatter labels it
        assert_eq!(reply.response, "The result is: 96");
    }

    #[tokio::test]
    async fn test_transcript_records_question_and_reply_with_same_triple() {
        let logger = Arc::new(RecordingLogger::new());
        let gateway = MockGateway::replying("Manila.");
        let use_case = GenerateReplyUseCase::new(
            Arc::new(gateway),
            Arc::new(FixedChooser(0)),
            Model::default(),
        )
        .with_conversation_logger(logger.clone());

        use_case
            .execute(&Question::new("What is the capital of the Philippines?"))
            .await;

        let events = logger.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, "question");
        assert_eq!(events[1].0, "reply");
        for key in ["category", "questionType", "sentiment"] {
            assert_eq!(events[0].1[key], events[1].1[key]);
        }
        assert_eq!(events[1].1["fallback"], false);
    }

    #[tokio::test]
    async fn test_fallback_flag_is_recorded() {
        let logger = Arc::new(RecordingLogger::new());
        let gateway = MockGateway::failing(GatewayError::Timeout);
        let use_case = GenerateReplyUseCase::new(
            Arc::new(gateway),
            Arc::new(FixedChooser(0)),
            Model::default(),
        )
        .with_conversation_logger(logger.clone());

        use_case.execute(&Question::new("What is a verb?")).await;

        let events = logger.events();
        assert_eq!(events[1].1["fallback"], true);
    }

    #[tokio::test]
    async fn test_fallback_choice_is_deterministic_under_fixed_chooser() {
        let first = use_case(MockGateway::failing(GatewayError::Timeout))
            .execute(&Question::new("Tell me something about biology"))
            .await;
        let second = use_case(MockGateway::failing(GatewayError::Timeout))
            .execute(&Question::new("Tell me something about biology"))
            .await;
        assert_eq!(first.response, second.response);
    }
}
