pub mod features;
pub mod filler_lexicon;
