//! Event-based XML parser specialised for the `fdb.options` file format.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// One `<Option>` declaration as observed by the parser.
///
/// All fields are borrowed views into the decoded attribute values; copy out
/// whatever outlives the callback.
#[derive(Debug, Clone, Copy)]
pub struct OptionEvent<'a> {
    /// Value of the XML attribute `name`.
    pub name: &'a str,
    /// Value of the XML attribute `code`.
    pub code: &'a str,
    /// Value of the XML attribute `description`, when present.
    pub description: Option<&'a str>,
    /// Value of the XML attribute `paramType`, when present.
    pub param_type: Option<&'a str>,
    /// Value of the XML attribute `paramDescription`, when present.
    pub param_description: Option<&'a str>,
}

/// The interface the parser uses to inform its consumer about the content of
/// the parsed document.
pub trait OptionsVisitor {
    /// Invoked when a `<Scope>` element opens; `name` is its `name`
    /// attribute when present.
    fn scope_started(&mut self, name: Option<&str>);

    /// Invoked when a `</Scope>` element is encountered.
    fn scope_ended(&mut self);

    /// Invoked when an `<Option>` element carrying both required attributes
    /// (`name` and `code`) is encountered.
    fn option_started(&mut self, option: OptionEvent<'_>);

    /// Invoked when an `</Option>` element is encountered.
    fn option_ended(&mut self);
}

/// Streaming parser for `fdb.options` documents.
///
/// Runs a single forward pass over the document and reports `Scope` and
/// `Option` elements to an [`OptionsVisitor`]; every other element, text
/// node, and comment is ignored. No document tree is built.
///
/// # Examples
/// ```rust
/// use fdb_optgen::options::{CatalogBuilder, OptionsParser};
///
/// let xml = r#"<Scope name="NetworkOption"><Option name="TRACE_ENABLE" code="30"/></Scope>"#;
/// let mut builder = CatalogBuilder::new();
/// OptionsParser::from_str(xml).parse(&mut builder)?;
/// let catalog = builder.into_catalog();
/// assert!(catalog.network.contains_key("TRACE_ENABLE"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct OptionsParser<R> {
    reader: Reader<R>,
}

impl<'a> OptionsParser<&'a [u8]> {
    /// Creates a parser over an in-memory document.
    pub fn from_str(input: &'a str) -> Self {
        Self {
            reader: Reader::from_str(input),
        }
    }
}

impl OptionsParser<BufReader<File>> {
    /// Opens `path` and parses from the file while reading.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open options file: {}", path.display()))?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> OptionsParser<R> {
    /// Creates a parser over any buffered byte stream.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: Reader::from_reader(reader),
        }
    }

    /// Runs the single forward pass, reporting document structure to
    /// `visitor`.
    ///
    /// A well-formedness or attribute decoding error aborts the pass. The
    /// visitor may have observed a prefix of the document by then; callers
    /// must treat whatever it accumulated as unusable.
    pub fn parse(mut self, visitor: &mut impl OptionsVisitor) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            let event = self
                .reader
                .read_event_into(&mut buf)
                .with_context(|| format!("Malformed XML at byte {}", self.reader.buffer_position()))?;
            match event {
                Event::Start(start) => self.element_opened(&start, visitor, false)?,
                Event::Empty(start) => self.element_opened(&start, visitor, true)?,
                Event::End(end) => match end.local_name().as_ref() {
                    b"Scope" => visitor.scope_ended(),
                    b"Option" => visitor.option_ended(),
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }
        Ok(())
    }

    fn element_opened(
        &self,
        start: &BytesStart,
        visitor: &mut impl OptionsVisitor,
        self_closing: bool,
    ) -> Result<()> {
        match start.local_name().as_ref() {
            b"Scope" => {
                let name = attribute(start, "name")?;
                visitor.scope_started(name.as_deref());
                if self_closing {
                    visitor.scope_ended();
                }
            }
            b"Option" => {
                let name = attribute(start, "name")?;
                let code = attribute(start, "code")?;
                let (Some(name), Some(code)) = (name, code) else {
                    // Required attribute missing: the declaration is dropped
                    // without a diagnostic, matching the file format contract.
                    debug!(
                        "Dropping <Option> without name/code near byte {}",
                        self.reader.buffer_position()
                    );
                    return Ok(());
                };
                let description = attribute(start, "description")?;
                let param_type = attribute(start, "paramType")?;
                let param_description = attribute(start, "paramDescription")?;
                visitor.option_started(OptionEvent {
                    name: &name,
                    code: &code,
                    description: description.as_deref(),
                    param_type: param_type.as_deref(),
                    param_description: param_description.as_deref(),
                });
                if self_closing {
                    visitor.option_ended();
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// Decoded value of a single attribute, `None` when absent.
fn attribute(start: &BytesStart, name: &str) -> Result<Option<String>> {
    let Some(attribute) = start
        .try_get_attribute(name)
        .context("Invalid attribute syntax")?
    else {
        return Ok(None);
    };
    let value = attribute
        .unescape_value()
        .with_context(|| format!("Invalid value for attribute `{}`", name))?;
    Ok(Some(value.into_owned()))
}
