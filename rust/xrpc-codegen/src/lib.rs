#![deny(unsafe_code)]

//! Code generation for xrpc service bindings.
//!
//! # This Is Where Code Generation Actually Happens
//!
//! Given a [`ServiceDescription`](xrpc_schema::ServiceDescription), this
//! crate emits one complete Java source unit: package clause, imports, a
//! documented interface with one abstract method per RPC, and a default
//! `routes()` method binding `/<Service>/<method>` paths to those methods.
//!
//! # The Pipeline
//!
//! ```text
//! ServiceDescription   →   xrpc-codegen   →   <Service>Xrpc.java
//!  (resolved schema)      (pure functions)     (emitted text)
//! ```
//!
//! Everything here is a pure transformation from descriptors to strings.
//! Reading the compiler-plugin request and persisting the emitted text are
//! the front end's job (`protoc-gen-xrpc-java`); no function in this crate
//! performs I/O.
//!
//! Emission is deterministic: the same description always yields
//! byte-identical text. Imports are sorted, methods and routes follow
//! declaration order, and every fixed fragment (framework imports, the
//! generated-code annotation, route templates) lives in a named constant so
//! format-compatibility changes show up as data diffs.

pub mod code_writer;
mod error;
pub mod imports;
pub mod javadoc;
pub mod render;
pub mod targets;

pub use error::{Error, Result};
