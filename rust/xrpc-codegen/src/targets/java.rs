//! Java interface and route-table generation.
//!
//! One call to [`generate`] produces one complete output unit for one
//! service: package clause, imports, a documented interface extending the
//! `Service` marker, one abstract method per RPC, and a default-implemented
//! `routes()` method registering a POST route per RPC.
//!
//! The templates below are emitted bit-for-bit into every generated file;
//! treat any edit as a format change.

use xrpc_schema::{MethodDescription, ServiceDescription};

use crate::code_writer::{Printer, Vars};
use crate::error::Result;
use crate::imports;
use crate::javadoc;
use crate::render;

/// Package name used to seed the variable dictionary before the real
/// package is known. Only ever visible if a template asks for
/// `$package_name$` without a declared package.
const DEFAULT_PACKAGE_NAME: &str = "Xrpc";

const PACKAGE_CLAUSE: &str = "package $package_name$;\n\n";

const GENERATED_ANNOTATION: &str = "@Generated(\n    value = \"by xRPC proto compiler\",\n    comments = \"Source: $file_name$\")\n";

const INTERFACE_OPEN: &str = "public interface $service_class_name$ extends Service {\n\n";

const METHODS_BANNER: &str = "// Interface methods that strictly reflect the proto.\n\n";

const METHOD_SIGNATURE: &str = "$output_type$ $lower_method_name$($input_type$ input);\n\n";

const ROUTES_OPEN: &str =
    "\n/** Get defined routes for this service. */\n@Override\ndefault Routes routes() {\n";

const ROUTE_REGISTRATION: &str = "routes.post(\"/$service_name$/$method_name$\", request -> {\n  $input_type$ input = request.body($input_type$.class);\n  $output_type$ output = $lower_method_name$(input);\n  return request.ok(output);\n});\n\n";

/// Name of the output unit for a service, relative to the output root.
pub fn output_file_name(service: &ServiceDescription) -> String {
    format!(
        "{}{}.java",
        render::package_to_path(&service.package),
        render::service_class_name(&service.name)
    )
}

/// Emit the complete Java source for one service.
pub fn generate(service: &ServiceDescription) -> Result<String> {
    let mut p = Printer::new();
    let mut vars = Vars::new().with("package_name", DEFAULT_PACKAGE_NAME);

    if !service.package.is_empty() {
        vars = vars.with("package_name", service.package.as_str());
        p.print(&vars, PACKAGE_CLAUSE)?;
    }
    imports::write_imports(&mut p, service)?;
    write_service(&mut p, vars, service)?;
    Ok(p.into_string())
}

fn write_service(p: &mut Printer, vars: Vars, service: &ServiceDescription) -> Result<()> {
    let vars = vars
        .with("service_name", service.name.as_str())
        .with("file_name", service.file.as_str())
        .with(
            "service_class_name",
            render::service_class_name(&service.name),
        );

    javadoc::write_doc_comment(p, &service.doc, true)?;
    p.print(&vars, GENERATED_ANNOTATION)?;
    p.print(&vars, INTERFACE_OPEN)?;

    p.indent();
    write_methods(p, &vars, service)?;
    write_routes(p, &vars, service)?;
    p.outdent()?;

    p.print_raw("}\n");
    Ok(())
}

fn write_methods(p: &mut Printer, vars: &Vars, service: &ServiceDescription) -> Result<()> {
    p.print_raw(METHODS_BANNER);
    for method in &service.methods {
        javadoc::write_doc_comment(p, &method.doc, true)?;
        p.print(&method_vars(vars.clone(), method), METHOD_SIGNATURE)?;
    }
    Ok(())
}

fn write_routes(p: &mut Printer, vars: &Vars, service: &ServiceDescription) -> Result<()> {
    p.print_raw(ROUTES_OPEN);
    p.indent();
    p.print_raw("RouteBuilder routes = new RouteBuilder();\n\n");
    for method in &service.methods {
        p.print(&method_vars(vars.clone(), method), ROUTE_REGISTRATION)?;
    }
    p.print_raw("return routes;\n");
    p.outdent()?;
    p.print_raw("}\n");
    Ok(())
}

// The dictionary is rebuilt from the service-level bindings for every
// method; nothing a method binds leaks into the next one.
fn method_vars(vars: Vars, method: &MethodDescription) -> Vars {
    vars.with("input_type", render::simple_name(&method.input.name))
        .with("output_type", render::simple_name(&method.output.name))
        .with("method_name", method.name.as_str())
        .with("lower_method_name", render::mixed_lower(&method.name))
}
