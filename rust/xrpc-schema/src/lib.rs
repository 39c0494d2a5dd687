#![deny(unsafe_code)]

//! Schema types for xrpc service binding generation.
//!
//! # Design Philosophy
//!
//! This crate is the data model consumed by `xrpc-codegen`: plain descriptor
//! structs with no behavior. They are built once by whatever front end reads
//! the upstream schema compiler's request (see `protoc-gen-xrpc-java`),
//! handed to the generator, and never mutated.
//!
//! Type references carry the fully-qualified name in the *output* language's
//! namespace, not the schema language's. Mapping from one to the other is the
//! front end's job; by the time a [`ServiceDescription`] exists, every
//! reference it contains is already resolvable.

/// A complete service definition with all its methods.
///
/// One generated output unit is produced per `ServiceDescription`, in the
/// order services appear in their enclosing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescription {
    /// Service name (e.g., "Greeter").
    pub name: String,

    /// Output-language package the generated unit belongs to. Empty when the
    /// enclosing file declares no package.
    pub package: String,

    /// Path of the enclosing schema file (e.g., "helloworld.proto").
    pub file: String,

    /// Methods in declaration order.
    pub methods: Vec<MethodDescription>,

    /// Source comment attached to the service declaration.
    pub doc: SourceComment,
}

/// A single method in a service definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescription {
    /// Method name as declared (e.g., "sayHello" or "say_hello").
    pub name: String,

    /// Input message type.
    pub input: TypeRef,

    /// Output message type.
    pub output: TypeRef,

    /// Source comment attached to the method declaration.
    pub doc: SourceComment,
}

/// A resolved reference to a message type.
///
/// Holds the fully-qualified name in the output language (e.g.,
/// "helloworld.HelloWorldProto.HelloRequest"). The simple (last-segment)
/// name is derived where needed rather than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Fully-qualified output-language type name.
    pub name: String,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        TypeRef { name: name.into() }
    }
}

/// Free-text documentation attached to a schema element.
///
/// Either field may be empty. The generator picks one of the two (leading
/// wins); they are never concatenated, so an element with meaningful text in
/// both loses the trailing part. That precedence is load-bearing for output
/// compatibility and must not change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceComment {
    /// Comment block preceding the element, if any.
    pub leading: String,

    /// Comment following the element on the same line, if any.
    pub trailing: String,
}

impl SourceComment {
    /// A comment with only leading text.
    pub fn leading(text: impl Into<String>) -> Self {
        SourceComment {
            leading: text.into(),
            trailing: String::new(),
        }
    }

    /// A comment with only trailing text.
    pub fn trailing(text: impl Into<String>) -> Self {
        SourceComment {
            leading: String::new(),
            trailing: text.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.leading.is_empty() && self.trailing.is_empty()
    }
}
