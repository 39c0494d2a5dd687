//! Import-set resolution for generated units.

use std::collections::BTreeSet;

use xrpc_schema::ServiceDescription;

use crate::code_writer::{Printer, Vars};
use crate::error::Result;

/// Framework imports appended to every generated unit, in fixed order.
/// Not derived from input; changing this list is a format change.
pub static FRAMEWORK_IMPORTS: &[&str] = &[
    "com.nordstrom.xrpc.server.RouteBuilder",
    "com.nordstrom.xrpc.server.Routes",
    "com.nordstrom.xrpc.server.Service",
    "javax.annotation.Generated",
];

/// Every fully-qualified type name referenced by the service's methods,
/// deduplicated, in ascending lexicographic order.
pub fn referenced_types(service: &ServiceDescription) -> BTreeSet<&str> {
    let mut types = BTreeSet::new();
    for method in &service.methods {
        types.insert(method.input.name.as_str());
        types.insert(method.output.name.as_str());
    }
    types
}

/// Emit the unit's import section: one static import per referenced message
/// type, then the fixed framework block.
pub fn write_imports(p: &mut Printer, service: &ServiceDescription) -> Result<()> {
    for import in referenced_types(service) {
        let vars = Vars::new().with("import", import);
        p.print(&vars, "import static $import$;\n")?;
    }

    p.print_raw("\n");
    for import in FRAMEWORK_IMPORTS {
        let vars = Vars::new().with("import", *import);
        p.print(&vars, "import $import$;\n")?;
    }
    p.print_raw("\n");
    Ok(())
}
