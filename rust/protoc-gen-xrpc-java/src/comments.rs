//! Source-comment lookup over a file's source code info.

use prost_types::FileDescriptorProto;
use xrpc_schema::SourceComment;

/// FileDescriptorProto.service
const SERVICE_FIELD: i32 = 6;

/// ServiceDescriptorProto.method
const METHOD_FIELD: i32 = 2;

/// Comment attached to the `service_index`-th service declaration.
pub fn service_comment(file: &FileDescriptorProto, service_index: usize) -> SourceComment {
    comment_at(file, &[SERVICE_FIELD, service_index as i32])
}

/// Comment attached to a method declaration.
pub fn method_comment(
    file: &FileDescriptorProto,
    service_index: usize,
    method_index: usize,
) -> SourceComment {
    comment_at(
        file,
        &[
            SERVICE_FIELD,
            service_index as i32,
            METHOD_FIELD,
            method_index as i32,
        ],
    )
}

fn comment_at(file: &FileDescriptorProto, path: &[i32]) -> SourceComment {
    let Some(info) = &file.source_code_info else {
        return SourceComment::default();
    };
    for location in &info.location {
        if location.path == path {
            return SourceComment {
                leading: location.leading_comments().to_string(),
                trailing: location.trailing_comments().to_string(),
            };
        }
    }
    SourceComment::default()
}
