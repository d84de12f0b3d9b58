//! Prompt templates for the interview, the opening, and document synthesis.

use specwright_common::DocType;

/// Default system prompt for interview turns.
pub const DEFAULT_CHAT_PROMPT: &str = "You are an expert in software requirements \
and system design. Help the user work out what they want to build. Discuss \
requirements and design in natural language and do not include code samples.";

/// System prompt for the opening message.
pub const GREETING_PROMPT: &str = "You are an expert in software requirements and \
system design, about to start a conversation with a new user. Write a short, \
friendly opening message that asks what project they want to build: its purpose, \
its vision and the features they have in mind. Vary the wording each time.";

/// User turn that triggers the opening message.
pub const GREETING_TRIGGER: &str =
    "Write the first message to start the conversation with a new user.";

const UNIFIED_OUTLINE: &str = "Write one markdown document from the conversation \
so far that combines requirements and design as two separate chapters:\n\
1. Requirements: project overview, functional requirements, non-functional \
requirements, constraints.\n\
2. System design: system overview, detailed design, interface design, security \
design, test design, environment and dependencies, development process.";

const REQUIREMENTS_OUTLINE: &str = "Write a markdown requirements document from the \
conversation so far, covering: project overview, functional requirements, \
non-functional requirements, constraints.";

const DESIGN_OUTLINE: &str = "Write a markdown system design document from the \
conversation so far, covering: system overview, detailed design, interface design, \
security design, test design, environment and dependencies, development process.";

const PREAMBLE: &str = "You are an expert in software requirements and system design.";

/// Build the synthesis system prompt, optionally extended with an example document.
pub fn document_prompt(doc_type: DocType, example: Option<&str>) -> String {
    let outline = match doc_type {
        DocType::Unified => UNIFIED_OUTLINE,
        DocType::Requirements => REQUIREMENTS_OUTLINE,
        DocType::Design => DESIGN_OUTLINE,
    };

    let mut prompt = format!("{PREAMBLE}\n{outline}\n");
    if let Some(example) = example {
        prompt.push_str("\nUse the following example as a reference:\n\n");
        prompt.push_str(example);
        prompt.push_str(
            "\n\nFollow the format of the example above, but write the content for \
             the current project.\n",
        );
    }
    prompt
}

/// Fixed user turn that asks for the document.
pub fn document_trigger(doc_type: DocType) -> &'static str {
    match doc_type {
        DocType::Unified => {
            "Based on the conversation so far, write the requirements and design document."
        }
        DocType::Requirements => {
            "Based on the conversation so far, write the requirements document."
        }
        DocType::Design => "Based on the conversation so far, write the design document.",
    }
}
