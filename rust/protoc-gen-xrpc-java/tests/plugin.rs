//! End-to-end request → response tests, built on hand-assembled
//! descriptors rather than a protoc invocation.

use prost_types::compiler::CodeGeneratorRequest;
use prost_types::source_code_info::Location;
use prost_types::{
    DescriptorProto, FileDescriptorProto, FileOptions, MethodDescriptorProto,
    ServiceDescriptorProto, SourceCodeInfo,
};
use protoc_gen_xrpc_java::{translate, Error};

fn message(name: &str) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.into()),
        ..Default::default()
    }
}

fn method(name: &str, input: &str, output: &str) -> MethodDescriptorProto {
    MethodDescriptorProto {
        name: Some(name.into()),
        input_type: Some(input.into()),
        output_type: Some(output.into()),
        ..Default::default()
    }
}

fn hello_file() -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some("helloworld.proto".into()),
        package: Some("helloworld".into()),
        message_type: vec![message("HelloRequest"), message("HelloReply")],
        service: vec![ServiceDescriptorProto {
            name: Some("Greeter".into()),
            method: vec![method(
                "sayHello",
                ".helloworld.HelloRequest",
                ".helloworld.HelloReply",
            )],
            ..Default::default()
        }],
        source_code_info: Some(SourceCodeInfo {
            location: vec![
                Location {
                    path: vec![6, 0],
                    leading_comments: Some(" The greeting service.\n".into()),
                    ..Default::default()
                },
                Location {
                    path: vec![6, 0, 2, 0],
                    leading_comments: Some(" Sends a greeting.\n".into()),
                    ..Default::default()
                },
            ],
        }),
        ..Default::default()
    }
}

fn request_for(files: Vec<FileDescriptorProto>, to_generate: &[&str]) -> CodeGeneratorRequest {
    CodeGeneratorRequest {
        file_to_generate: to_generate.iter().map(|s| s.to_string()).collect(),
        proto_file: files,
        ..Default::default()
    }
}

#[test]
fn greeter_round_trip() {
    let request = request_for(vec![hello_file()], &["helloworld.proto"]);
    let response = translate::generate(&request).unwrap();

    assert_eq!(response.file.len(), 1);
    let file = &response.file[0];
    assert_eq!(file.name(), "helloworld/GreeterXrpc.java");

    let content = file.content();
    assert!(content.starts_with("package helloworld;\n\n"));
    assert!(content.contains("import static helloworld.Helloworld.HelloReply;\n"));
    assert!(content.contains("import static helloworld.Helloworld.HelloRequest;\n"));
    assert!(content.contains("public interface GreeterXrpc extends Service {"));
    assert!(content.contains(" * The greeting service.\n"));
    assert!(content.contains(" * Sends a greeting.\n"));
    assert!(content.contains("  HelloReply sayHello(HelloRequest input);\n"));
    assert!(content.contains("routes.post(\"/Greeter/sayHello\", request -> {"));
}

#[test]
fn response_is_deterministic() {
    let request = request_for(vec![hello_file()], &["helloworld.proto"]);
    let first = translate::generate(&request).unwrap();
    let second = translate::generate(&request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn one_output_unit_per_service_in_order() {
    let mut file = hello_file();
    file.service.push(ServiceDescriptorProto {
        name: Some("Farewell".into()),
        method: vec![method(
            "sayGoodbye",
            ".helloworld.HelloRequest",
            ".helloworld.HelloReply",
        )],
        ..Default::default()
    });
    let request = request_for(vec![file], &["helloworld.proto"]);
    let response = translate::generate(&request).unwrap();

    let names: Vec<&str> = response.file.iter().map(|f| f.name()).collect();
    assert_eq!(
        names,
        vec![
            "helloworld/GreeterXrpc.java",
            "helloworld/FarewellXrpc.java"
        ]
    );
}

#[test]
fn dependency_types_resolve_across_files() {
    let mut dep = FileDescriptorProto {
        name: Some("types.proto".into()),
        package: Some("common".into()),
        ..Default::default()
    };
    dep.options = Some(FileOptions {
        java_package: Some("com.example.common".into()),
        java_multiple_files: Some(true),
        ..Default::default()
    });
    dep.message_type.push(message("Envelope"));

    let service_file = FileDescriptorProto {
        name: Some("relay.proto".into()),
        package: Some("relay".into()),
        service: vec![ServiceDescriptorProto {
            name: Some("Relay".into()),
            method: vec![method("forward", ".common.Envelope", ".common.Envelope")],
            ..Default::default()
        }],
        ..Default::default()
    };

    let request = request_for(vec![dep, service_file], &["relay.proto"]);
    let response = translate::generate(&request).unwrap();

    let content = response.file[0].content();
    assert!(content.contains("import static com.example.common.Envelope;\n"));
    assert!(content.contains("  Envelope forward(Envelope input);\n"));
}

#[test]
fn files_without_services_produce_nothing() {
    let mut file = hello_file();
    file.service.clear();
    let request = request_for(vec![file], &["helloworld.proto"]);
    let response = translate::generate(&request).unwrap();
    assert!(response.file.is_empty());
}

#[test]
fn unresolvable_method_type_aborts_the_run() {
    let mut file = hello_file();
    file.service[0].method[0].input_type = Some(".helloworld.Missing".into());
    let request = request_for(vec![file], &["helloworld.proto"]);

    let err = translate::generate(&request).unwrap_err();
    assert!(matches!(err, Error::UnresolvableType { name } if name == ".helloworld.Missing"));
}

#[test]
fn missing_target_file_aborts_the_run() {
    let request = request_for(vec![hello_file()], &["absent.proto"]);
    let err = translate::generate(&request).unwrap_err();
    assert!(matches!(err, Error::MissingFile { name } if name == "absent.proto"));
}
