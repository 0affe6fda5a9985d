pub mod analyze_answer_use_case;
pub mod invalid_input;
pub mod request;
pub mod result;
