//! Line based prompter for terminals.

use anyhow::Result;
use colored::Colorize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};
use tokio::sync::Mutex;
use tracing::trace;

use super::{Answer, Prompter, Question, QuestionKind};
use crate::constants::CANCEL_ANSWER;
use crate::core::CreateError;

/// Renders questions as text and reads one answer line per question.
///
/// - confirm: `y`, `yes`, `n` or `no`; an empty line takes the default
/// - select: the 1-based number of a choice or its label
/// - multi-select: comma separated numbers or labels; an empty line selects nothing
/// - input: any text; required inputs are asked again when left empty
///
/// Invalid answers repeat the question. End of input, or the answer `:q`, cancels the
/// session.
#[derive(Debug)]
pub struct TerminalPrompter<R, W> {
    io: Mutex<(R, W)>,
}

impl TerminalPrompter<BufReader<Stdin>, Stdout> {
    /// A prompter on the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> TerminalPrompter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// A prompter reading answers from `reader` and writing questions to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new((reader, writer)),
        }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        self.io.into_inner()
    }
}

impl<R, W> Prompter for TerminalPrompter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn run(&self, question: &Question) -> Result<Answer> {
        let mut io = self.io.lock().await;
        let (reader, writer) = &mut *io;

        writer.write_all(render(question).as_bytes()).await?;
        loop {
            writer.write_all(format!("{} ", ">".cyan()).as_bytes()).await?;
            writer.flush().await?;

            let mut line = String::new();
            if reader.read_line(&mut line).await? == 0 {
                return Err(CreateError::PromptCancelled.into());
            }
            let line = line.trim();
            trace!("Answer to '{}': {:?}", question.name, line);
            if line == CANCEL_ANSWER {
                return Err(CreateError::PromptCancelled.into());
            }

            match parse_answer(&question.kind, line) {
                Ok(answer) => return Ok(answer),
                Err(hint) => {
                    writer.write_all(format!("{}\n", hint.yellow()).as_bytes()).await?;
                }
            }
        }
    }
}

fn render(question: &Question) -> String {
    let mut text = format!("{} {}", "?".green().bold(), question.message.bold());
    match &question.kind {
        QuestionKind::Confirm {
            default,
        } => {
            text.push_str(if *default { " [Y/n]" } else { " [y/N]" });
            text.push('\n');
        }
        QuestionKind::Input {
            required,
        } => {
            if !required {
                text.push_str(&format!(" {}", "(optional)".dimmed()));
            }
            text.push('\n');
        }
        QuestionKind::Select {
            choices,
        } => {
            text.push('\n');
            for (i, choice) in choices.iter().enumerate() {
                text.push_str(&format!("  {}) {choice}\n", i + 1));
            }
        }
        QuestionKind::MultiSelect {
            choices,
        } => {
            text.push_str(&format!(" {}\n", "(comma separated, empty for none)".dimmed()));
            for (i, choice) in choices.iter().enumerate() {
                text.push_str(&format!("  {}) {choice}\n", i + 1));
            }
        }
    }
    text
}

fn parse_answer(kind: &QuestionKind, line: &str) -> Result<Answer, String> {
    match kind {
        QuestionKind::Confirm {
            default,
        } => match line.to_lowercase().as_str() {
            "" => Ok(Answer::Bool(*default)),
            "y" | "yes" => Ok(Answer::Bool(true)),
            "n" | "no" => Ok(Answer::Bool(false)),
            _ => Err("Please answer yes or no".to_string()),
        },
        QuestionKind::Input {
            required,
        } => {
            if line.is_empty() && *required {
                Err("A value is required".to_string())
            } else {
                Ok(Answer::Text(line.to_string()))
            }
        }
        QuestionKind::Select {
            choices,
        } => pick(choices, line).map(Answer::Choice),
        QuestionKind::MultiSelect {
            choices,
        } => {
            let mut selected: Vec<String> = Vec::new();
            for part in line.split(',').map(str::trim).filter(|part| !part.is_empty()) {
                let choice = pick(choices, part)?;
                if !selected.contains(&choice) {
                    selected.push(choice);
                }
            }
            Ok(Answer::Choices(selected))
        }
    }
}

/// Resolve a 1-based index or a case-insensitive label to one of `choices`.
fn pick(choices: &[String], token: &str) -> Result<String, String> {
    if let Ok(number) = token.parse::<usize>()
        && let Some(choice) = number.checked_sub(1).and_then(|i| choices.get(i))
    {
        return Ok(choice.clone());
    }

    choices
        .iter()
        .find(|choice| choice.eq_ignore_ascii_case(token))
        .cloned()
        .ok_or_else(|| format!("'{token}' is not one of the offered choices"))
}
