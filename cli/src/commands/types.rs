//! The `types` command - list the standard type table.

use arrayc::{ElementType, TypeTable};

/// Run the types command.
pub fn run() {
    let table = TypeTable::standard();
    for ty in ElementType::ALL {
        let flags: Vec<String> = ty
            .flags()
            .iter_names()
            .map(|(name, _)| name.to_lowercase())
            .collect();
        println!(
            "{:<8} {:<11} {:<17} {}",
            ty.name(),
            ty.native_name(),
            flags.join(","),
            table.names_for(ty).join(", ")
        );
    }
}
