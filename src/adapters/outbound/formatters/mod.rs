/// Formatter adapters for the graph report output formats
mod json_formatter;
mod markdown_formatter;

pub use json_formatter::JsonGraphFormatter;
pub use markdown_formatter::MarkdownGraphFormatter;
