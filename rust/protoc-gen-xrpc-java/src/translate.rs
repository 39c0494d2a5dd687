//! Request-to-descriptor translation.
//!
//! Walks the compiler request, builds one resolved
//! [`ServiceDescription`] per service declared in each file to generate,
//! and drives the Java target over it. Services compile independently;
//! nothing is shared between output units.

use prost_types::compiler::{code_generator_response, CodeGeneratorRequest, CodeGeneratorResponse};
use prost_types::{FileDescriptorProto, ServiceDescriptorProto};
use tracing::debug;
use xrpc_codegen::targets::java;
use xrpc_schema::{MethodDescription, ServiceDescription, TypeRef};

use crate::comments;
use crate::error::{Error, Result};
use crate::java_names::{self, JavaTypeMap};

/// Produce the response for one compiler request, or fail the whole run.
pub fn generate(request: &CodeGeneratorRequest) -> Result<CodeGeneratorResponse> {
    // Parameters are accepted for compatibility but none are defined.
    if let Some(parameter) = &request.parameter {
        if !parameter.is_empty() {
            debug!(%parameter, "ignoring generator parameters");
        }
    }

    let types = JavaTypeMap::build(&request.proto_file);
    let mut files = Vec::new();
    for target in &request.file_to_generate {
        let file = request
            .proto_file
            .iter()
            .find(|f| f.name() == target.as_str())
            .ok_or_else(|| Error::MissingFile {
                name: target.clone(),
            })?;
        for (index, service) in file.service.iter().enumerate() {
            let description = service_description(file, index, service, &types)?;
            let name = java::output_file_name(&description);
            let content = java::generate(&description)?;
            debug!(file = %name, "generated service bindings");
            files.push(code_generator_response::File {
                name: Some(name),
                content: Some(content),
                ..Default::default()
            });
        }
    }
    Ok(CodeGeneratorResponse {
        file: files,
        ..Default::default()
    })
}

fn service_description(
    file: &FileDescriptorProto,
    index: usize,
    service: &ServiceDescriptorProto,
    types: &JavaTypeMap,
) -> Result<ServiceDescription> {
    let mut methods = Vec::with_capacity(service.method.len());
    for (method_index, method) in service.method.iter().enumerate() {
        methods.push(MethodDescription {
            name: method.name().to_string(),
            input: TypeRef::new(types.resolve(method.input_type())?),
            output: TypeRef::new(types.resolve(method.output_type())?),
            doc: comments::method_comment(file, index, method_index),
        });
    }
    Ok(ServiceDescription {
        name: service.name().to_string(),
        package: java_names::java_package(file),
        file: file.name().to_string(),
        methods,
        doc: comments::service_comment(file, index),
    })
}
