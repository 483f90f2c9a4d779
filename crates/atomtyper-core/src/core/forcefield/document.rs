use super::rules::{Rule, RuleSet, RuleSetError};
use crate::core::pattern::parser::{PatternParseError, parse_pattern};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};
use xmltree::{Element, XMLNode};

const ATOM_TYPES_SECTION: &str = "AtomTypes";
const TYPE_RECORD: &str = "Type";

/// Errors raised while loading a forcefield document.
///
/// Everything except `Io` and `Xml` describes a malformed document: a
/// structurally valid XML file whose atom-type records violate the document
/// contract. Loading aborts on the first such problem.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("XML parsing error for '{path}': {source}")]
    Xml {
        path: String,
        source: xmltree::ParseError,
    },

    #[error("Document '{path}' has no <AtomTypes> section")]
    MissingAtomTypes { path: String },

    #[error("Atom-type record #{record} in '{path}' is missing required attribute '{field}'")]
    MissingField {
        path: String,
        record: usize,
        field: &'static str,
    },

    #[error("Invalid pattern for rule '{rule}' in '{path}': {source}")]
    Pattern {
        path: String,
        rule: String,
        source: PatternParseError,
    },

    #[error("Invalid rule set in '{path}': {source}")]
    Rules {
        path: String,
        source: RuleSetError,
    },
}

/// A loaded forcefield document: the typing rules plus the parameter
/// sections this engine does not interpret.
///
/// The bonded/non-bonded parameter sections are retained verbatim so callers
/// can hand them to whatever consumes the typed molecule; this engine only
/// interprets `<AtomTypes>`.
#[derive(Debug, Clone)]
pub struct ForcefieldDocument {
    /// The validated, immutable rule set.
    pub rules: RuleSet,
    passthrough: Vec<Element>,
}

impl ForcefieldDocument {
    /// Loads and validates a forcefield document from a file.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] on I/O failure, XML syntax errors, or any
    /// malformed-document condition: missing `<AtomTypes>` section, a record
    /// missing `name` or `def`, an unparseable pattern, a duplicate rule
    /// name, or an override referencing an unknown rule.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let display_path = path.to_string_lossy().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| DocumentError::Io {
            path: display_path.clone(),
            source: e,
        })?;
        Self::parse_str(&content, &display_path)
    }

    /// Parses a forcefield document from in-memory XML.
    ///
    /// `origin` is used in error messages in place of a file path.
    pub fn parse_str(content: &str, origin: &str) -> Result<Self, DocumentError> {
        let root = Element::parse(content.as_bytes()).map_err(|e| DocumentError::Xml {
            path: origin.to_string(),
            source: e,
        })?;

        let mut rules = None;
        let mut passthrough = Vec::new();
        for node in &root.children {
            let XMLNode::Element(section) = node else {
                continue;
            };
            if section.name == ATOM_TYPES_SECTION {
                rules = Some(parse_atom_types(section, origin)?);
            } else {
                debug!(section = %section.name, "Retaining pass-through parameter section.");
                passthrough.push(section.clone());
            }
        }

        let rules = rules.ok_or_else(|| DocumentError::MissingAtomTypes {
            path: origin.to_string(),
        })?;
        info!(
            rules = rules.len(),
            passthrough_sections = passthrough.len(),
            "Loaded forcefield document from '{origin}'."
        );
        Ok(Self { rules, passthrough })
    }

    /// Returns the parameter sections retained verbatim from the document.
    pub fn passthrough_sections(&self) -> &[Element] {
        &self.passthrough
    }
}

fn parse_atom_types(section: &Element, origin: &str) -> Result<RuleSet, DocumentError> {
    let mut rules = Vec::new();
    let mut record = 0usize;
    for node in &section.children {
        let XMLNode::Element(entry) = node else {
            continue;
        };
        if entry.name != TYPE_RECORD {
            continue;
        }
        record += 1;
        rules.push(parse_type_record(entry, record, origin)?);
    }
    RuleSet::from_rules(rules).map_err(|e| DocumentError::Rules {
        path: origin.to_string(),
        source: e,
    })
}

fn parse_type_record(entry: &Element, record: usize, origin: &str) -> Result<Rule, DocumentError> {
    let name = required_attribute(entry, "name", record, origin)?;
    let pattern_source = required_attribute(entry, "def", record, origin)?;
    let pattern = parse_pattern(&pattern_source).map_err(|e| DocumentError::Pattern {
        path: origin.to_string(),
        rule: name.clone(),
        source: e,
    })?;
    let overrides = entry
        .attributes
        .get("overrides")
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(Rule {
        name,
        pattern,
        pattern_source,
        description: entry.attributes.get("desc").cloned(),
        citation: entry.attributes.get("doi").cloned(),
        overrides,
    })
}

fn required_attribute(
    entry: &Element,
    field: &'static str,
    record: usize,
    origin: &str,
) -> Result<String, DocumentError> {
    entry
        .attributes
        .get(field)
        .filter(|value| !value.trim().is_empty())
        .cloned()
        .ok_or_else(|| DocumentError::MissingField {
            path: origin.to_string(),
            record,
            field,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const ALKANE_DOCUMENT: &str = r#"
        <ForceField>
          <AtomTypes>
            <Type name="C_any" def="C" desc="any carbon"/>
            <Type name="C_methane" def="C(H)(H)(H)H" desc="methane carbon"
                  doi="10.1021/ja9621760" overrides="C_any"/>
            <Type name="H_simple" def="HC" desc="hydrogen on carbon"/>
          </AtomTypes>
          <HarmonicBondForce>
            <Bond class1="C_any" class2="H_simple" length="0.109" k="284512.0"/>
          </HarmonicBondForce>
        </ForceField>
    "#;

    #[test]
    fn parse_str_loads_rules_and_passthrough_sections() {
        let doc = ForcefieldDocument::parse_str(ALKANE_DOCUMENT, "test").unwrap();
        assert_eq!(doc.rules.len(), 3);
        assert_eq!(doc.passthrough_sections().len(), 1);
        assert_eq!(doc.passthrough_sections()[0].name, "HarmonicBondForce");

        let methane = doc.rules.get("C_methane").unwrap();
        assert_eq!(methane.pattern_source, "C(H)(H)(H)H");
        assert_eq!(methane.description.as_deref(), Some("methane carbon"));
        assert_eq!(methane.citation.as_deref(), Some("10.1021/ja9621760"));
        assert_eq!(methane.overrides, vec!["C_any".to_string()]);
    }

    #[test]
    fn load_reads_a_document_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("alkane.xml");
        fs::write(&path, ALKANE_DOCUMENT).unwrap();
        let doc = ForcefieldDocument::load(&path).unwrap();
        assert_eq!(doc.rules.len(), 3);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = ForcefieldDocument::load(&dir.path().join("missing.xml"));
        assert!(matches!(result, Err(DocumentError::Io { .. })));
    }

    #[test]
    fn parse_str_fails_for_invalid_xml() {
        let result = ForcefieldDocument::parse_str("<ForceField><AtomTypes>", "test");
        assert!(matches!(result, Err(DocumentError::Xml { .. })));
    }

    #[test]
    fn parse_str_fails_without_atom_types_section() {
        let result =
            ForcefieldDocument::parse_str("<ForceField><Other/></ForceField>", "test");
        assert!(matches!(result, Err(DocumentError::MissingAtomTypes { .. })));
    }

    #[test]
    fn parse_str_fails_for_record_missing_name() {
        let doc = r#"<ForceField><AtomTypes><Type def="C"/></AtomTypes></ForceField>"#;
        let result = ForcefieldDocument::parse_str(doc, "test");
        assert!(matches!(
            result,
            Err(DocumentError::MissingField {
                record: 1,
                field: "name",
                ..
            })
        ));
    }

    #[test]
    fn parse_str_fails_for_record_missing_pattern() {
        let doc = r#"<ForceField><AtomTypes><Type name="C_any"/></AtomTypes></ForceField>"#;
        let result = ForcefieldDocument::parse_str(doc, "test");
        assert!(matches!(
            result,
            Err(DocumentError::MissingField { field: "def", .. })
        ));
    }

    #[test]
    fn parse_str_fails_for_unparseable_pattern() {
        let doc = r#"<ForceField><AtomTypes><Type name="bad" def="[C;"/></AtomTypes></ForceField>"#;
        let result = ForcefieldDocument::parse_str(doc, "test");
        assert!(matches!(result, Err(DocumentError::Pattern { .. })));
    }

    #[test]
    fn parse_str_fails_for_duplicate_rule_name() {
        let doc = r#"
            <ForceField><AtomTypes>
              <Type name="a" def="C"/>
              <Type name="a" def="H"/>
            </AtomTypes></ForceField>
        "#;
        let result = ForcefieldDocument::parse_str(doc, "test");
        assert!(matches!(
            result,
            Err(DocumentError::Rules {
                source: RuleSetError::DuplicateRule { .. },
                ..
            })
        ));
    }

    #[test]
    fn parse_str_fails_for_dangling_override() {
        let doc = r#"
            <ForceField><AtomTypes>
              <Type name="a" def="C" overrides="ghost"/>
            </AtomTypes></ForceField>
        "#;
        let result = ForcefieldDocument::parse_str(doc, "test");
        assert!(matches!(
            result,
            Err(DocumentError::Rules {
                source: RuleSetError::DanglingOverride { .. },
                ..
            })
        ));
    }

    #[test]
    fn overrides_attribute_tolerates_spaces_and_empty_entries() {
        let doc = r#"
            <ForceField><AtomTypes>
              <Type name="a" def="C"/>
              <Type name="b" def="H"/>
              <Type name="c" def="*" overrides=" a , b ,"/>
            </AtomTypes></ForceField>
        "#;
        let parsed = ForcefieldDocument::parse_str(doc, "test").unwrap();
        assert_eq!(
            parsed.rules.get("c").unwrap().overrides,
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn loading_the_same_document_twice_is_idempotent() {
        let first = ForcefieldDocument::parse_str(ALKANE_DOCUMENT, "test").unwrap();
        let second = ForcefieldDocument::parse_str(ALKANE_DOCUMENT, "test").unwrap();
        assert_eq!(first.rules, second.rules);
    }
}
