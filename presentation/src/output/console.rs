//! Console output formatter for tutoring replies

use crate::output::formatter::OutputFormatter;
use brainbytes_domain::TutorReply;
use colored::Colorize;

/// Formats tutoring replies for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete reply with classification labels
    pub fn format(reply: &TutorReply) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("BrainBytes Tutor"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Category: ".cyan().bold(),
            reply.category
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Type:     ".cyan().bold(),
            reply.question_type
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Sentiment:".cyan().bold(),
            reply.sentiment
        ));

        output.push('\n');
        output.push_str(&reply.response);
        output.push('\n');

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(reply: &TutorReply) -> String {
        serde_json::to_string_pretty(reply).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the answer text only (concise output)
    pub fn format_answer_only(reply: &TutorReply) -> String {
        reply.response.clone()
    }

    /// One-line label summary, e.g. `[science · definition · neutral]`
    pub fn format_labels_line(reply: &TutorReply) -> String {
        format!(
            "[{} · {} · {}]",
            reply.category, reply.question_type, reply.sentiment
        )
        .dimmed()
        .to_string()
    }

    /// Globally enable or disable colored output (e.g. from `[output] color`)
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, reply: &TutorReply) -> String {
        Self::format(reply)
    }

    fn format_json(&self, reply: &TutorReply) -> String {
        Self::format_json(reply)
    }

    fn format_answer_only(&self, reply: &TutorReply) -> String {
        Self::format_answer_only(reply)
    }
}
