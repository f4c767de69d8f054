pub mod catalog;
pub mod emit;
pub mod generate;
pub mod naming;
pub mod parser;

pub use catalog::{CatalogBuilder, OptionCatalog, OptionEntry, OptionParameter, Scope};
pub use emit::{emit_file, emit_stdout};
pub use generate::generate_source;
pub use naming::camel_case;
pub use parser::{OptionEvent, OptionsParser, OptionsVisitor};
