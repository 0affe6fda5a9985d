pub mod clarity;
pub mod confidence;
pub mod content;
pub mod fluency;
pub mod keyword_rule;
pub mod scores;
