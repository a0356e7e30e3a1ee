//! System prompt rendering for the advisor.

pub mod answer_style;
pub mod template;
