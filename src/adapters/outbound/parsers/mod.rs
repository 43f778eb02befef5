/// Parsers turning raw SBOM bytes into domain documents
mod cyclonedx_parser;

pub use cyclonedx_parser::CycloneDxParser;
