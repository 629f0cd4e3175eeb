//! Prompt shape used when the model was fine-tuned.

/// Wrap a task and its context exactly as the training samples were.
pub fn training_prompt(task: &str, context: &str) -> String {
    format!("[INST] <TASK>{task}</TASK>\n<CONTEXT>\n{context}\n</CONTEXT> [/INST]")
}
