pub mod filler_report;
pub mod improved_answer;
pub mod narrative;
pub mod synthesizer;
