//! REPL (Read-Eval-Print Loop) for interactive tutoring

use crate::deadline::answer_with_deadline;
use crate::ConsoleFormatter;
use crate::ProgressReporter;
use brainbytes_application::ports::progress::NoProgress;
use brainbytes_application::{
    ConversationEvent, ConversationLogger, GenerateReplyUseCase, NoConversationLogger,
    ReplyParams, TIMEOUT_REPLY,
};
use brainbytes_domain::Question;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;

/// Interactive tutoring REPL
pub struct ChatRepl {
    use_case: GenerateReplyUseCase,
    params: ReplyParams,
    show_progress: bool,
    show_labels: bool,
    history_file: Option<PathBuf>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: GenerateReplyUseCase) -> Self {
        let history_file = dirs::data_dir().map(|p| p.join("brainbytes").join("history.txt"));
        Self {
            use_case,
            params: ReplyParams::default(),
            show_progress: true,
            show_labels: true,
            history_file,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Set the deadline parameters for each reply
    pub fn with_params(mut self, params: ReplyParams) -> Self {
        self.params = params;
        self
    }

    /// Set whether to show the progress spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set whether to print the label line above each answer
    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    /// Override the history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Set a conversation logger for timeout events
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines — the core never sees blank input
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    self.process_question(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│           BrainBytes - Chat Mode            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.use_case.model());
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /model    - Show the current model");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /model           - Show the current model");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/model" => {
                println!();
                println!("Current model: {}", self.use_case.model());
                println!();
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_question(&self, line: &str) {
        let Some(question) = Question::try_new(line) else {
            println!("Please type a question first.");
            return;
        };

        println!();

        let reply = if self.show_progress {
            let progress = ProgressReporter::new();
            answer_with_deadline(&self.use_case, &question, &self.params, &progress).await
        } else {
            answer_with_deadline(&self.use_case, &question, &self.params, &NoProgress).await
        };

        match reply {
            Some(reply) => {
                if self.show_labels {
                    println!("{}", ConsoleFormatter::format_labels_line(&reply));
                }
                println!("{}", ConsoleFormatter::format_answer_only(&reply));
            }
            None => {
                self.conversation_logger.log(ConversationEvent::new(
                    "reply_timeout",
                    serde_json::json!({
                        "question": question.content(),
                        "text": TIMEOUT_REPLY,
                    }),
                ));
                println!("{}", TIMEOUT_REPLY);
            }
        }
        println!();
    }
}
