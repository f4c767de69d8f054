//! In-memory option catalog built from one parse pass.

use std::collections::HashMap;

use log::debug;

use super::parser::{OptionEvent, OptionsVisitor};

/// One of the three fixed option scopes of an `fdb.options` document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Network,
    Database,
    Transaction,
}

impl Scope {
    /// All scopes, in canonical generation order.
    pub const ALL: [Scope; 3] = [Scope::Network, Scope::Database, Scope::Transaction];

    /// Resolves a `<Scope name="...">` marker into a scope.
    ///
    /// The match is exact and case-sensitive; anything else is unrecognized.
    pub fn from_marker(name: &str) -> Option<Scope> {
        match name {
            "NetworkOption" => Some(Scope::Network),
            "DatabaseOption" => Some(Scope::Database),
            "TransactionOption" => Some(Scope::Transaction),
            _ => None,
        }
    }

    /// Name of the option type the generated `impl` block extends.
    pub fn type_name(self) -> &'static str {
        match self {
            Scope::Network => "NetworkOption",
            Scope::Database => "DatabaseOption",
            Scope::Transaction => "TransactionOption",
        }
    }

    /// Prefix of the C code symbols the generated constants reference.
    pub fn symbol_prefix(self) -> &'static str {
        match self {
            Scope::Network => "FDB_NET_OPTION_",
            Scope::Database => "FDB_DB_OPTION_",
            Scope::Transaction => "FDB_TR_OPTION_",
        }
    }

    /// File name of the generated source unit for this scope.
    pub fn file_name(self) -> String {
        format!("{}.g.rs", self.type_name())
    }
}

/// Typed parameter attached to an option declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionParameter {
    pub r#type: String,
    pub description: Option<String>,
}

/// A single parsed option declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    /// Numeric code, kept as the string given in the document.
    pub code: String,
    pub description: Option<String>,
    pub parameter: Option<OptionParameter>,
}

/// Per-scope option mappings produced by one parse pass.
///
/// The three mappings are independent and never merged; the catalog lives
/// for one generator run.
#[derive(Debug, Default)]
pub struct OptionCatalog {
    pub network: HashMap<String, OptionEntry>,
    pub database: HashMap<String, OptionEntry>,
    pub transaction: HashMap<String, OptionEntry>,
}

impl OptionCatalog {
    /// The mapping for one scope.
    pub fn scope(&self, scope: Scope) -> &HashMap<String, OptionEntry> {
        match scope {
            Scope::Network => &self.network,
            Scope::Database => &self.database,
            Scope::Transaction => &self.transaction,
        }
    }

    fn scope_mut(&mut self, scope: Scope) -> &mut HashMap<String, OptionEntry> {
        match scope {
            Scope::Network => &mut self.network,
            Scope::Database => &mut self.database,
            Scope::Transaction => &mut self.transaction,
        }
    }
}

/// Parser delegate that populates an [`OptionCatalog`].
///
/// Holds a single piece of state besides the catalog itself: the most
/// recently entered recognized scope. One builder instance serves one parse
/// run; do not share it across runs.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: OptionCatalog,
    current: Option<Scope>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands the catalog off once parsing is complete.
    pub fn into_catalog(self) -> OptionCatalog {
        self.catalog
    }
}

impl OptionsVisitor for CatalogBuilder {
    fn scope_started(&mut self, name: Option<&str>) {
        self.current = name.and_then(Scope::from_marker);
    }

    fn scope_ended(&mut self) {
        self.current = None;
    }

    fn option_started(&mut self, option: OptionEvent<'_>) {
        let Some(scope) = self.current else {
            debug!(
                "Dropping option {} declared outside a recognized scope",
                option.name
            );
            return;
        };
        let entry = OptionEntry {
            code: option.code.to_string(),
            description: option.description.map(str::to_string),
            parameter: option.param_type.map(|ty| OptionParameter {
                r#type: ty.to_string(),
                description: option.param_description.map(str::to_string),
            }),
        };
        self.catalog.scope_mut(scope).insert(option.name.to_string(), entry);
    }

    fn option_ended(&mut self) {
        // Reserved for symmetry with option_started.
    }
}
