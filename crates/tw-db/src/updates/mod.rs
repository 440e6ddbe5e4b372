//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields generate SET clauses in the dynamic UPDATE SQL. Nested `Option`s
//! distinguish "leave unchanged" from "clear".

pub mod task;
