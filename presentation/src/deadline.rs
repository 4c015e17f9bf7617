//! Caller-side deadline race around the reply orchestrator.
//!
//! The orchestrator itself never watches the clock, so whoever calls it
//! races it against [`ReplyParams::deadline`]. When the deadline wins, the
//! in-flight model call is abandoned (the future is dropped, not cancelled
//! at the transport level) and the caller substitutes
//! [`TIMEOUT_REPLY`](brainbytes_application::TIMEOUT_REPLY).

use brainbytes_application::ports::progress::ProgressNotifier;
use brainbytes_application::{GenerateReplyUseCase, ReplyParams};
use brainbytes_domain::{Question, TutorReply};

/// Race reply generation against the configured deadline.
///
/// Returns `None` when the deadline wins.
pub async fn answer_with_deadline(
    use_case: &GenerateReplyUseCase,
    question: &Question,
    params: &ReplyParams,
    progress: &dyn ProgressNotifier,
) -> Option<TutorReply> {
    let generation = use_case.execute_with_progress(question, progress);
    match params.deadline {
        Some(deadline) => tokio::time::timeout(deadline, generation).await.ok(),
        None => Some(generation.await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use brainbytes_application::ports::llm_gateway::{GatewayError, LlmGateway};
    use brainbytes_application::NoProgress;
    use brainbytes_domain::{FixedChooser, Model};
    use std::sync::Arc;
    use std::time::Duration;

    struct NeverGateway;

    #[async_trait]
    impl LlmGateway for NeverGateway {
        async fn complete(&self, _model: &Model, _prompt: &str) -> Result<String, GatewayError> {
            std::future::pending().await
        }
    }

    struct InstantGateway;

    #[async_trait]
    impl LlmGateway for InstantGateway {
        async fn complete(&self, _model: &Model, _prompt: &str) -> Result<String, GatewayError> {
            Ok("Photosynthesis converts light into chemical energy.".to_string())
        }
    }

    fn use_case(gateway: impl LlmGateway + 'static) -> GenerateReplyUseCase {
        GenerateReplyUseCase::new(
            Arc::new(gateway),
            Arc::new(FixedChooser(0)),
            Model::default(),
        )
    }

    #[tokio::test]
    async fn test_deadline_wins_against_a_hung_call() {
        let params = ReplyParams::default().with_deadline(Some(Duration::from_millis(20)));
        let reply = answer_with_deadline(
            &use_case(NeverGateway),
            &Question::new("What is photosynthesis?"),
            &params,
            &NoProgress,
        )
        .await;
        assert!(reply.is_none());
    }

    #[tokio::test]
    async fn test_fast_reply_beats_the_deadline() {
        let params = ReplyParams::default().with_deadline(Some(Duration::from_secs(5)));
        let reply = answer_with_deadline(
            &use_case(InstantGateway),
            &Question::new("What is photosynthesis?"),
            &params,
            &NoProgress,
        )
        .await;
        let reply = reply.unwrap();
        assert!(reply.response.contains("chemical energy"));
    }

    #[tokio::test]
    async fn test_no_deadline_waits_for_the_reply() {
        let params = ReplyParams::default().with_deadline(None);
        let reply = answer_with_deadline(
            &use_case(InstantGateway),
            &Question::new("What is photosynthesis?"),
            &params,
            &NoProgress,
        )
        .await;
        assert!(reply.is_some());
    }
}
