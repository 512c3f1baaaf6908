//! Analysis — skill matching, catalog ranking and feedback over extracted sections.

pub mod catalog;
pub mod feedback;
pub mod handlers;
pub mod pipeline;
pub mod ranker;
pub mod skill_match;
pub mod vectorizer;
