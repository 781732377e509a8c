//! Prompt construction for summarisation and custom queries

/// System message sent with every request
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant that processes documents.";

/// Instruction used when the caller supplies no query
pub const DEFAULT_INSTRUCTION: &str = "Please summarize the following content concisely:";

/// Instruction for the reduce call that merges per-chunk results
pub const COMBINE_INSTRUCTION: &str =
    "Combine the following summaries into a coherent single summary, removing redundancies:";

/// Default cap on generated tokens per request
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Build the user prompt for `content`
///
/// Without an instruction (or with a blank one) the content is prefixed by
/// [`DEFAULT_INSTRUCTION`]. Otherwise the instruction comes first and the
/// content follows under a `Content:` label.
pub fn build_prompt(content: &str, instruction: Option<&str>) -> String {
    match instruction {
        Some(instruction) if !instruction.trim().is_empty() => {
            format!("{instruction}\n\nContent:\n{content}")
        }
        _ => format!("{DEFAULT_INSTRUCTION}\n\n{content}"),
    }
}
