#![deny(unsafe_code)]

//! protoc front end for xrpc Java binding generation.
//!
//! # The Pipeline
//!
//! ```text
//! stdin                 translate               xrpc-codegen        stdout
//! CodeGeneratorRequest → ServiceDescription(s) → emitted text → CodeGeneratorResponse
//! ```
//!
//! This crate owns everything the generation core treats as an external
//! collaborator: decoding the compiler's request envelope, mapping protobuf
//! type references to fully-qualified Java names, looking up source
//! comments, and naming the output file slots. The generation itself lives
//! in `xrpc-codegen` and never sees a protobuf descriptor.
//!
//! Any failure aborts the whole run; no partial per-service output is ever
//! reported back to the compiler.

pub mod comments;
pub mod error;
pub mod java_names;
pub mod translate;

pub use error::{Error, Result};
