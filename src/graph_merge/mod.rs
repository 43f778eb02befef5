/// Graph merge core - domain model, admission policy and merge/layout services
///
/// Pure logic with no I/O: documents come in, graphs, diffs and layouts come out.
pub mod domain;
pub mod policies;
pub mod services;
