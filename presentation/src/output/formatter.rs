//! Output formatter trait

use brainbytes_domain::TutorReply;

/// Trait for formatting tutoring replies
pub trait OutputFormatter {
    /// Format the complete reply with classification labels
    fn format(&self, reply: &TutorReply) -> String;

    /// Format as JSON
    fn format_json(&self, reply: &TutorReply) -> String;

    /// Format the answer text only (concise output)
    fn format_answer_only(&self, reply: &TutorReply) -> String;
}
