//! Rust binding generation for one option scope.

use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use uuid::Uuid;

use super::catalog::{OptionEntry, Scope};
use super::naming::camel_case;

/// Display name used for byte-sequence parameters instead of the raw
/// `bytes` tag from the catalog.
const BYTES_DISPLAY_TYPE: &str = "Vec<u8>";

/// Renders the bindings for one scope as a complete Rust source unit.
///
/// Declarations are emitted in ascending lexicographic order of option name,
/// so identical catalog content produces identical output up to the year and
/// the per-invocation identifier embedded in the header. With `validate` set
/// the rendered unit is parsed with `syn` before being returned, so a
/// malformed unit is rejected instead of emitted.
///
/// # Arguments
/// * `scope` - The scope whose bindings are rendered
/// * `options` - The scope's option mapping from the catalog
/// * `validate` - Run a structural check over the rendered unit
///
/// # Examples
/// ```rust
/// use std::collections::HashMap;
/// use fdb_optgen::options::{OptionEntry, Scope, generate_source};
///
/// let mut options = HashMap::new();
/// options.insert(
///     "TRACE_ENABLE".to_string(),
///     OptionEntry { code: "30".to_string(), description: None, parameter: None },
/// );
/// let source = generate_source(Scope::Network, &options, true)?;
/// assert!(source.contains("pub const traceEnable"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate_source(
    scope: Scope,
    options: &HashMap<String, OptionEntry>,
    validate: bool,
) -> Result<String> {
    let mut generator = SourceGenerator::new();
    let source = generator.generate(scope, options);
    if validate {
        syn::parse_file(&source).with_context(|| {
            format!(
                "Generated {} bindings are not valid Rust",
                scope.type_name()
            )
        })?;
    }
    Ok(source)
}

/// Source generation helper struct
#[derive(Debug)]
struct SourceGenerator {
    buffer: String,
}

impl SourceGenerator {
    fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Generate the complete source unit for one scope
    fn generate(&mut self, scope: Scope, options: &HashMap<String, OptionEntry>) -> String {
        self.generate_header();
        self.add_line(&format!("impl {} {{", scope.type_name()));

        let mut names: Vec<&String> = options.keys().collect();
        names.sort();
        for name in names {
            self.generate_declaration(scope, name, &options[name]);
        }

        self.add_line("}");
        self.generate_footer();
        self.buffer.clone()
    }

    /// Generate the fixed generation-notice header
    fn generate_header(&mut self) {
        let year = Utc::now().year();
        self.add_line("// This file was automatically generated by fdb-optgen. DO NOT EDIT.");
        self.add_line("//");
        self.add_line(&format!("// © {} fdb-optgen contributors.", year));
        self.add_line(&format!("// Generation id: {}", Uuid::new_v4()));
        self.add_line("");
        self.add_line("#![allow(non_upper_case_globals)]");
        self.add_line("");
        self.add_line("use fdb_sys::*;");
        self.add_line("");
    }

    /// Generate one constant declaration with its documentation lines
    fn generate_declaration(&mut self, scope: Scope, name: &str, entry: &OptionEntry) {
        self.add_line("");

        let deprecated = entry
            .description
            .as_deref()
            .is_some_and(|d| d.eq_ignore_ascii_case("deprecated"));

        // The description doubles as the deprecation trigger; when it does,
        // it is not repeated as documentation.
        if let Some(description) = entry.description.as_deref() {
            if !description.is_empty() && !deprecated {
                self.add_line(&format!("    /// {}", description));
            }
        }

        if let Some(parameter) = &entry.parameter {
            let display = if parameter.r#type.eq_ignore_ascii_case("bytes") {
                BYTES_DISPLAY_TYPE
            } else {
                parameter.r#type.as_str()
            };
            self.add_line(&format!(
                "    /// Parameter type: {}; {}",
                display,
                parameter.description.as_deref().unwrap_or_default()
            ));
        }

        if deprecated {
            self.add_line("    #[deprecated]");
        }

        self.add_line(&format!(
            "    pub const {}: {} = {}({}{});",
            camel_case(name),
            scope.type_name(),
            scope.type_name(),
            scope.symbol_prefix(),
            name.to_uppercase(),
        ));
    }

    /// Generate the fixed footer
    fn generate_footer(&mut self) {
        self.add_line("");
        self.add_line("// End of file");
    }

    fn add_line(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }
}
