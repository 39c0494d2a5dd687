//! Java name resolution for protobuf descriptors.
//!
//! Reproduces the Java naming scheme the generated code must link against:
//! the file's `java_package` (or proto package), the wrapping outer class
//! unless `java_multiple_files` is set, then the message's nesting path.

use std::collections::HashMap;

use prost_types::{DescriptorProto, FileDescriptorProto};

use crate::error::{Error, Result};

/// The Java package generated code for this file belongs to.
///
/// `java_package` option when declared, else the proto package, else empty.
pub fn java_package(file: &FileDescriptorProto) -> String {
    let declared = file
        .options
        .as_ref()
        .map(|options| options.java_package())
        .unwrap_or_default();
    if declared.is_empty() {
        file.package().to_string()
    } else {
        declared.to_string()
    }
}

/// The outer class wrapping this file's messages.
///
/// `java_outer_classname` option when declared, else the file's basename in
/// PascalCase, suffixed with `OuterClass` when that name collides with a
/// message, enum, or service declared in the file.
pub fn file_class_name(file: &FileDescriptorProto) -> String {
    if let Some(options) = &file.options {
        if let Some(name) = &options.java_outer_classname {
            return name.clone();
        }
    }
    let basename = file
        .name()
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .trim_end_matches(".proto");
    let mut name = underscores_to_pascal(basename);
    if has_conflicting_name(file, &name) {
        name.push_str("OuterClass");
    }
    name
}

/// Lookup table from a descriptor's fully-qualified proto reference
/// (leading dot included) to the type's fully-qualified Java name.
///
/// Built over every file in the request, dependencies included, so
/// cross-file method types resolve like local ones.
#[derive(Debug)]
pub struct JavaTypeMap {
    types: HashMap<String, String>,
}

impl JavaTypeMap {
    pub fn build(files: &[FileDescriptorProto]) -> Self {
        let mut types = HashMap::new();
        for file in files {
            let multiple_files = file
                .options
                .as_ref()
                .is_some_and(|options| options.java_multiple_files());
            let package = java_package(file);
            let java_prefix = if multiple_files {
                package
            } else {
                dotted(&package, &file_class_name(file))
            };
            let proto_prefix = if file.package().is_empty() {
                String::new()
            } else {
                format!(".{}", file.package())
            };
            for message in &file.message_type {
                insert_message(&mut types, &proto_prefix, &java_prefix, message);
            }
        }
        JavaTypeMap { types }
    }

    /// Resolve a method's type reference as it appears in the descriptor.
    pub fn resolve(&self, proto_name: &str) -> Result<&str> {
        self.types
            .get(proto_name)
            .map(String::as_str)
            .ok_or_else(|| Error::UnresolvableType {
                name: proto_name.to_string(),
            })
    }
}

fn insert_message(
    types: &mut HashMap<String, String>,
    proto_prefix: &str,
    java_prefix: &str,
    message: &DescriptorProto,
) {
    let proto_name = format!("{}.{}", proto_prefix, message.name());
    let java_name = dotted(java_prefix, message.name());
    for nested in &message.nested_type {
        insert_message(types, &proto_name, &java_name, nested);
    }
    types.insert(proto_name, java_name);
}

fn dotted(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

// PascalCase per protobuf's Java rules: non-alphanumerics are dropped and
// capitalize the next letter; digits pass through and also capitalize the
// next letter.
fn underscores_to_pascal(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut cap_next = true;
    for c in input.chars() {
        if c.is_ascii_alphabetic() {
            if cap_next {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            cap_next = false;
        } else if c.is_ascii_digit() {
            out.push(c);
            cap_next = true;
        } else {
            cap_next = true;
        }
    }
    out
}

fn has_conflicting_name(file: &FileDescriptorProto, name: &str) -> bool {
    fn message_conflicts(message: &DescriptorProto, name: &str) -> bool {
        message.name() == name
            || message.enum_type.iter().any(|e| e.name() == name)
            || message
                .nested_type
                .iter()
                .any(|nested| message_conflicts(nested, name))
    }
    file.service.iter().any(|s| s.name() == name)
        || file.enum_type.iter().any(|e| e.name() == name)
        || file
            .message_type
            .iter()
            .any(|message| message_conflicts(message, name))
}
