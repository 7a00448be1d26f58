//! Structural reports over a properties document.

use std::fmt::{self, Write as _};

use paramwire::{
    CLASS_ATTRIBUTE, ComponentSpec, CompositeSpec, ConfigDocument, DeclaredParam, Element,
    PARAMS_TAG, ParamShape, WireResult, declared_params,
};
use serde::Serialize;

/// One section of the document and anything nested under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    /// Section tag.
    pub tag: String,
    /// Class identifier, when the section carries one.
    pub class: Option<String>,
    /// Classified parameters from the first `params` child.
    pub params: Vec<DeclaredParam>,
    /// Nested sections carrying a class, such as composite children.
    pub children: Vec<SectionReport>,
}

/// Every reported section, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    /// Reported sections.
    pub sections: Vec<SectionReport>,
}

fn section_report(section: &Element) -> WireResult<SectionReport> {
    let class = section
        .attribute(CLASS_ATTRIBUTE)
        .map(str::trim)
        .filter(|class| !class.is_empty())
        .map(str::to_owned);
    let children = section
        .elements()
        .filter(|child| child.name() != PARAMS_TAG && child.attribute(CLASS_ATTRIBUTE).is_some())
        .map(section_report)
        .collect::<WireResult<Vec<_>>>()?;
    Ok(SectionReport {
        tag: section.name().to_owned(),
        class,
        params: declared_params(section, None)?,
        children,
    })
}

/// Reports the sections of `document`, keeping only the tags in `only`
/// when it is not empty.
///
/// # Errors
///
/// Returns [`paramwire::WireError::MalformedMapEntry`] when a parameter
/// cannot be classified.
pub fn inspect(document: &ConfigDocument, only: &[String]) -> WireResult<DocumentReport> {
    let sections = document
        .root()
        .elements()
        .filter(|section| only.is_empty() || only.iter().any(|tag| tag == section.name()))
        .map(section_report)
        .collect::<WireResult<Vec<_>>>()?;
    Ok(DocumentReport { sections })
}

fn describe_shape(shape: &ParamShape) -> String {
    match shape {
        ParamShape::Scalar(text) => format!("{text:?}"),
        ParamShape::OrderedList(items) => format!("{items:?}"),
        ParamShape::KeyValueMap(entries) => {
            let pairs: Vec<String> = entries.iter().map(|(k, v)| format!("{k:?} => {v:?}")).collect();
            format!("{{{}}}", pairs.join(", "))
        }
    }
}

fn render_section(out: &mut String, section: &SectionReport, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    let class = section.class.as_deref().unwrap_or("<no class>");
    writeln!(out, "{indent}{} ({class})", section.tag)?;
    for param in &section.params {
        writeln!(
            out,
            "{indent}  {} = {}",
            param.name,
            describe_shape(&param.shape)
        )?;
    }
    section
        .children
        .iter()
        .try_for_each(|child| render_section(out, child, depth + 1))
}

/// Renders `report` as an indented outline.
///
/// # Errors
///
/// Returns the formatter error if a line cannot be written.
pub fn render_text(report: &DocumentReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for section in &report.sections {
        render_section(&mut out, section, 0)?;
    }
    Ok(out)
}

/// Outcome of a successful check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Each checked target with the class it will be built from.
    pub checked: Vec<CheckedTarget>,
}

/// A target that passed the check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckedTarget {
    /// Section tag.
    pub tag: String,
    /// Class identifier.
    pub class: String,
    /// Number of child sections, for composites.
    pub children: Option<usize>,
}

impl From<ComponentSpec> for CheckedTarget {
    fn from(spec: ComponentSpec) -> Self {
        Self {
            tag: spec.tag,
            class: spec.class,
            children: None,
        }
    }
}

/// Checks single and composite targets the way the builders read them.
///
/// With no targets, every distinct top-level tag is checked as a single
/// item.
///
/// # Errors
///
/// Returns the first cardinality, missing class, or classification error.
pub fn check(
    document: &ConfigDocument,
    singles: &[String],
    composites: &[(String, String)],
) -> WireResult<CheckReport> {
    let mut tags: Vec<&str> = singles.iter().map(String::as_str).collect();
    if singles.is_empty() && composites.is_empty() {
        for section in document.root().elements() {
            if !tags.contains(&section.name()) {
                tags.push(section.name());
            }
        }
    }

    let mut checked: Vec<CheckedTarget> = Vec::new();
    for tag in tags {
        checked.push(ComponentSpec::read(document.unique_section(tag)?, None)?.into());
    }
    for (tag, child) in composites {
        let spec = CompositeSpec::read(document.unique_section(tag)?, child)?;
        let children = spec.children.len();
        checked.push(CheckedTarget {
            children: Some(children),
            ..spec.composite.into()
        });
    }
    Ok(CheckReport { checked })
}

/// Renders `report` as one line per target.
///
/// # Errors
///
/// Returns the formatter error if a line cannot be written.
pub fn render_check(report: &CheckReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for target in &report.checked {
        match target.children {
            Some(count) => writeln!(
                out,
                "ok {} ({}) with {count} children",
                target.tag, target.class
            )?,
            None => writeln!(out, "ok {} ({})", target.tag, target.class)?,
        }
    }
    Ok(out)
}
