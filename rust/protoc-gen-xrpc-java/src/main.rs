//! protoc plugin entry point.
//!
//! stdin carries the request, stdout the response; stderr is the only place
//! logging may go.

use std::io::{Read, Write};

use prost::Message;
use prost_types::compiler::CodeGeneratorRequest;
use tracing::error;

use protoc_gen_xrpc_java::translate;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        error!("code generation failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> protoc_gen_xrpc_java::Result<()> {
    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input)?;
    let request = CodeGeneratorRequest::decode(input.as_slice())?;
    let response = translate::generate(&request)?;
    std::io::stdout().write_all(&response.encode_to_vec())?;
    Ok(())
}
