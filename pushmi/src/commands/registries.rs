use crate::context::AppContext;
use crate::format::{self, Formattable, OutputFormat};
use libpushmi::RegistryAdapter;
use libpushmi::registry::ADAPTERS;
use serde::Serialize;

/// One row of the supported registries listing
#[derive(Debug, Serialize, PartialEq)]
pub struct RegistryInfo {
    pub name: String,
    pub endpoint: String,
    pub path: String,
    pub response: String,
}

impl From<&RegistryAdapter> for RegistryInfo {
    fn from(adapter: &RegistryAdapter) -> Self {
        Self {
            name: adapter.name.to_string(),
            endpoint: adapter.endpoint.to_string(),
            path: adapter.path_template.to_string(),
            response: adapter.shape.to_string(),
        }
    }
}

impl Formattable for RegistryInfo {
    fn format_pretty(&self) -> String {
        format!("{:<16} {}{}", self.name, self.endpoint, self.path)
    }
}

/// Every registry pushmi can list tags for, in table order
pub fn supported_registries() -> Vec<RegistryInfo> {
    ADAPTERS.iter().map(RegistryInfo::from).collect()
}

/// Handle the registries command
pub fn handle_registries(ctx: &AppContext, fmt: OutputFormat) {
    match format::format_output_vec(&supported_registries(), fmt) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "registries_tests.rs"]
mod tests;
