// Prompts for ILS work-example assessment.

use crate::models::reference::ReferenceItem;

/// System prompt for assessment calls. The section structure below is a
/// prompting convention, not a machine-checked contract — the response is
/// returned to the caller unparsed.
pub const ASSESSMENT_SYSTEM: &str =
    "You are an expert assessor of Australian Public Service job applications. \
    You evaluate work examples against the APS Integrated Leadership System (ILS) \
    framework. Be specific, constructive, and reference the framework behaviours by name.";

/// Renders reference items into the context block embedded in the assessment
/// prompt: one `capability (level): behaviour - description` line per item,
/// in store-returned order.
pub fn render_reference_block(items: &[ReferenceItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "{} ({}): {} - {}",
                item.capability_name, item.aps_level, item.behaviour, item.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the full assessment prompt for one work example.
pub fn assessment_prompt(example_text: &str, aps_level: &str, reference_block: &str) -> String {
    format!(
        "Assess the following work example against the APS ILS framework at the {aps_level} level.\n\
\n\
ILS reference behaviours for {aps_level}:\n\
{reference_block}\n\
\n\
Provide a structured assessment with these sections:\n\
1. Capability coverage: score how well each ILS capability is demonstrated\n\
2. Behaviour alignment: which specific behaviours the example evidences\n\
3. Standards assessment: whether the example meets the {aps_level} work level standard\n\
4. Strengths\n\
5. Gaps\n\
6. Suggested improvements\n\
7. A rewritten version of the example incorporating the improvements\n\
\n\
Work example:\n\
{example_text}"
    )
}
