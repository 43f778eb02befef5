mod admission_policy;

pub use admission_policy::{Admission, AdmissionConflict, AdmissionPolicy};
