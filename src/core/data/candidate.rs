use std::fmt;

use regex::Regex;

/// Marker used in place of an interpolation when a template id is displayed.
pub const HOLE_MARKER: &str = "*";

/// Regex fragment an interpolation compiles to: any substring, including
/// an empty one and one spanning newlines.
const HOLE_REGEX: &str = "(?s:.*)";

/// One element of a template literal id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    /// Literal text between interpolations. Boundary fragments may be empty.
    Text(String),
    /// An interpolated expression whose value is unknown statically.
    Hole,
}

/// A template literal id normalized into source order.
///
/// `` `item.count.${plural}` `` becomes `[Text("item.count."), Hole, Text("")]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePattern {
    parts: Vec<TemplatePart>,
}

impl TemplatePattern {
    pub fn new(parts: Vec<TemplatePart>) -> Self {
        Self { parts }
    }

    /// Build a pattern from parts tagged with their source position.
    ///
    /// Parts are ordered by position; the sort is stable, so parts sharing a
    /// position (empty boundary fragments) keep the order they were given in.
    pub fn from_positioned(mut parts: Vec<(u32, TemplatePart)>) -> Self {
        parts.sort_by_key(|(pos, _)| *pos);
        Self {
            parts: parts.into_iter().map(|(_, part)| part).collect(),
        }
    }

    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    pub fn has_holes(&self) -> bool {
        self.parts.iter().any(|p| matches!(p, TemplatePart::Hole))
    }

    /// Concatenated literal text, ignoring holes.
    pub fn literal_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                TemplatePart::Text(text) => Some(text.as_str()),
                TemplatePart::Hole => None,
            })
            .collect()
    }

    /// Unanchored regex source: literal text is escaped, holes match anything.
    pub fn regex_source(&self) -> String {
        self.parts
            .iter()
            .map(|p| match p {
                TemplatePart::Text(text) => regex::escape(text),
                TemplatePart::Hole => HOLE_REGEX.to_string(),
            })
            .collect()
    }

    pub fn compile(&self) -> Result<Regex, regex::Error> {
        Regex::new(&self.regex_source())
    }
}

impl fmt::Display for TemplatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                TemplatePart::Text(text) => f.write_str(text)?,
                TemplatePart::Hole => f.write_str(HOLE_MARKER)?,
            }
        }
        Ok(())
    }
}

/// A message id extracted from an id-bearing node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateId {
    /// Plain string id, checked by exact membership.
    Literal(String),
    /// Template id with at least one interpolation, checked by pattern.
    Template(TemplatePattern),
}

impl CandidateId {
    /// Wrap a template pattern; a template without interpolations is a literal.
    pub fn from_template(pattern: TemplatePattern) -> Self {
        if pattern.has_holes() {
            CandidateId::Template(pattern)
        } else {
            CandidateId::Literal(pattern.literal_text())
        }
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateId::Literal(id) => f.write_str(id),
            CandidateId::Template(pattern) => pattern.fmt(f),
        }
    }
}
