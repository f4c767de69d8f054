//! Binding generation tests covering ordering, documentation synthesis,
//! deprecation tagging, and the end-to-end pipeline.

use std::collections::HashMap;

use anyhow::Result;
use fdb_optgen::options::{
    CatalogBuilder, OptionEntry, OptionParameter, OptionsParser, Scope, generate_source,
};

fn entry(code: &str) -> OptionEntry {
    OptionEntry {
        code: code.to_string(),
        description: None,
        parameter: None,
    }
}

fn described(code: &str, description: &str) -> OptionEntry {
    OptionEntry {
        description: Some(description.to_string()),
        ..entry(code)
    }
}

/// Strips the varying header line so two renderings can be compared.
fn without_generation_id(source: &str) -> String {
    source
        .lines()
        .filter(|line| !line.starts_with("// Generation id:"))
        .collect::<Vec<&str>>()
        .join("\n")
}

#[test]
fn end_to_end_network_binding() -> Result<()> {
    let xml = r#"<Scope name="NetworkOption"><Option name="TLS_CERT_PATH" code="42" description="Sets cert path" paramType="String"/></Scope>"#;
    let mut builder = CatalogBuilder::new();
    OptionsParser::from_str(xml).parse(&mut builder)?;
    let catalog = builder.into_catalog();

    let source = generate_source(Scope::Network, &catalog.network, true)?;

    assert!(source.contains(
        "pub const tlsCertPath: NetworkOption = NetworkOption(FDB_NET_OPTION_TLS_CERT_PATH);"
    ));
    assert!(source.contains("/// Sets cert path"));
    assert!(source.contains("/// Parameter type: String;"));
    assert!(!source.contains("#[deprecated]"));
    Ok(())
}

#[test]
fn declarations_appear_in_ascending_name_order() -> Result<()> {
    let mut options = HashMap::new();
    options.insert("BRAVO".to_string(), entry("2"));
    options.insert("ALPHA".to_string(), entry("1"));
    options.insert("CHARLIE".to_string(), entry("3"));

    let source = generate_source(Scope::Database, &options, true)?;

    let alpha = source.find("const alpha:").unwrap();
    let bravo = source.find("const bravo:").unwrap();
    let charlie = source.find("const charlie:").unwrap();
    assert!(alpha < bravo && bravo < charlie);
    Ok(())
}

#[test]
fn deprecated_description_yields_marker_and_no_doc_line() -> Result<()> {
    let mut options = HashMap::new();
    options.insert("OLD_KNOB".to_string(), described("8", "Deprecated"));

    let source = generate_source(Scope::Transaction, &options, true)?;

    assert!(source.contains("#[deprecated]"));
    assert!(!source.contains("/// Deprecated"));
    Ok(())
}

#[test]
fn deprecation_trigger_is_case_insensitive() -> Result<()> {
    let mut options = HashMap::new();
    options.insert("OLD_KNOB".to_string(), described("8", "DEPRECATED"));

    let source = generate_source(Scope::Network, &options, true)?;

    assert!(source.contains("#[deprecated]"));
    assert!(!source.contains("/// DEPRECATED"));
    Ok(())
}

#[test]
fn ordinary_description_yields_doc_line_and_no_marker() -> Result<()> {
    let mut options = HashMap::new();
    options.insert(
        "TRACE_ENABLE".to_string(),
        described("30", "Enables trace output"),
    );

    let source = generate_source(Scope::Network, &options, true)?;

    assert!(source.contains("/// Enables trace output"));
    assert!(!source.contains("#[deprecated]"));
    Ok(())
}

#[test]
fn empty_description_is_omitted() -> Result<()> {
    let mut options = HashMap::new();
    options.insert("SILENT".to_string(), described("4", ""));

    let source = generate_source(Scope::Network, &options, true)?;

    assert!(!source.contains("/// \n"));
    assert!(source.contains("pub const silent: NetworkOption"));
    Ok(())
}

#[test]
fn bytes_parameter_renders_the_byte_sequence_display_name() -> Result<()> {
    let mut options = HashMap::new();
    options.insert(
        "SET_KEY".to_string(),
        OptionEntry {
            code: "1".to_string(),
            description: None,
            parameter: Some(OptionParameter {
                r#type: "bytes".to_string(),
                description: None,
            }),
        },
    );

    let source = generate_source(Scope::Transaction, &options, true)?;

    assert!(source.contains("/// Parameter type: Vec<u8>;"));
    assert!(!source.contains("Parameter type: bytes"));
    Ok(())
}

#[test]
fn non_bytes_parameter_types_pass_through() -> Result<()> {
    let mut options = HashMap::new();
    options.insert(
        "TIMEOUT".to_string(),
        OptionEntry {
            code: "500".to_string(),
            description: None,
            parameter: Some(OptionParameter {
                r#type: "Int".to_string(),
                description: Some("milliseconds".to_string()),
            }),
        },
    );

    let source = generate_source(Scope::Transaction, &options, true)?;

    assert!(source.contains("/// Parameter type: Int; milliseconds"));
    Ok(())
}

#[test]
fn each_scope_uses_its_own_type_and_symbol_prefix() -> Result<()> {
    let mut options = HashMap::new();
    options.insert("SOME_OPTION".to_string(), entry("1"));

    let database = generate_source(Scope::Database, &options, true)?;
    let transaction = generate_source(Scope::Transaction, &options, true)?;

    assert!(database.contains(
        "pub const someOption: DatabaseOption = DatabaseOption(FDB_DB_OPTION_SOME_OPTION);"
    ));
    assert!(transaction.contains(
        "pub const someOption: TransactionOption = TransactionOption(FDB_TR_OPTION_SOME_OPTION);"
    ));
    Ok(())
}

#[test]
fn output_is_deterministic_up_to_the_generation_id() -> Result<()> {
    let mut options = HashMap::new();
    options.insert("BRAVO".to_string(), described("2", "second"));
    options.insert("ALPHA".to_string(), entry("1"));

    let first = generate_source(Scope::Network, &options, true)?;
    let second = generate_source(Scope::Network, &options, true)?;

    assert_ne!(first, second);
    assert_eq!(without_generation_id(&first), without_generation_id(&second));
    Ok(())
}

#[test]
fn rendered_unit_carries_header_and_footer() -> Result<()> {
    let source = generate_source(Scope::Network, &HashMap::new(), true)?;

    assert!(source.starts_with("// This file was automatically generated by fdb-optgen. DO NOT EDIT."));
    assert!(source.contains("// Generation id:"));
    assert!(source.contains("#![allow(non_upper_case_globals)]"));
    assert!(source.trim_end().ends_with("// End of file"));
    Ok(())
}

#[test]
fn rendered_unit_is_structurally_valid_rust() -> Result<()> {
    let mut options = HashMap::new();
    options.insert("OLD_KNOB".to_string(), described("8", "Deprecated"));
    options.insert(
        "TLS_CERT_PATH".to_string(),
        OptionEntry {
            code: "42".to_string(),
            description: Some("Sets cert path".to_string()),
            parameter: Some(OptionParameter {
                r#type: "String".to_string(),
                description: None,
            }),
        },
    );

    let source = generate_source(Scope::Network, &options, false)?;
    syn::parse_file(&source)?;
    Ok(())
}
