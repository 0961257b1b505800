//! Report rendering
//! Console, JSON, Markdown, and HTML views of an analysis

pub mod formatter;
pub mod report;
