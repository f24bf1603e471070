// Prompts for LLM-derived entry tagging.

/// System prompt for tagging — the only required output shape is a
/// comma-separated tag list.
pub const TAGGING_SYSTEM: &str =
    "You are a tagging assistant. Return only comma-separated tags.";

/// Builds the tagging instruction embedding the submitted content.
pub fn tagging_prompt(content: &str) -> String {
    format!(
        "Analyze this text related to APS job applications and provide 3-5 relevant tags.\n\
Tags should be based on:\n\
- APS ILS competencies (Achieves Results, Supports Productive Working Relationships, etc.)\n\
- Work level (APS1-6, EL1-2, SES)\n\
- Key skills or themes\n\
- Document type\n\
\n\
Respond ONLY with a comma-separated list of tags, nothing else.\n\
\n\
Text to analyze:\n\
{content}"
    )
}
