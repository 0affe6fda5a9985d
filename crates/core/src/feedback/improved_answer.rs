use crate::shared::question::QuestionType;

/// STAR-structured model answer offered for behavioral questions.
const BEHAVIORAL_TEMPLATE: &str = concat!(
    "Here's an improved version of your response:\n\n",
    "\"I'd like to share a specific example from my previous role. [Situation] When working on ",
    "a critical project, I encountered a team member who was consistently missing deadlines, ",
    "which was impacting our entire team's progress. [Task] As the project lead, I needed to ",
    "address this issue while maintaining team morale and meeting our deadline.\n\n",
    "[Action] I first approached the team member privately to understand the root cause. I ",
    "discovered they were overwhelmed with multiple priorities. I worked with them to ",
    "reorganize their workload, provided additional resources, and established daily check-ins ",
    "to monitor progress. I also communicated with stakeholders about adjusted timelines where ",
    "necessary.\n\n",
    "[Result] As a result, we not only met our project deadline but the team member became one ",
    "of our most reliable contributors. This experience taught me the importance of proactive ",
    "communication and understanding individual challenges before making assumptions.\""
);

/// Structure and delivery advice for every other question type.
const GENERIC_TEMPLATE: &str = concat!(
    "Here's an enhanced version of your response:\n\n",
    "Start with a clear definition or overview, then provide specific examples with concrete ",
    "details. Structure your answer logically, use transitional phrases to connect ideas, and ",
    "conclude with practical applications or implications. Remember to speak confidently and ",
    "minimize filler words for maximum impact."
);

/// Selects the rewritten-answer template. Selection is deliberately binary
/// on question type; the transcript itself is not consulted, leaving room
/// for a future generative rewrite behind the same signature.
pub fn generate(question_type: QuestionType) -> String {
    match question_type {
        QuestionType::Behavioral => BEHAVIORAL_TEMPLATE.to_string(),
        QuestionType::Technical | QuestionType::Situational | QuestionType::CompanySpecific => {
            GENERIC_TEMPLATE.to_string()
        }
    }
}
