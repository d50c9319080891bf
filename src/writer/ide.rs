//! IDE document structure.
//!
//! ```text
//! # IDE generated by iplkit
//! objs
//! <one line per definition, ascending id>
//! end
//! ```

use super::ipl::{push_line, SECTION_END};
use crate::layout::DefinitionLine;

pub const IDE_HEADER: &str = "# IDE generated by iplkit";
pub const OBJS_SECTION: &str = "objs";

/// A single `objs` section, sorted by model ID.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdeDocument {
    definitions: Vec<DefinitionLine>,
}

impl IdeDocument {
    /// Builds a document, sorting definitions by ascending ID.
    ///
    /// The sort is stable, so equal IDs keep their input order.
    pub fn new(mut definitions: Vec<DefinitionLine>) -> Self {
        definitions.sort_by_key(|d| d.id);
        Self { definitions }
    }

    /// Definitions in output order.
    pub fn definitions(&self) -> &[DefinitionLine] {
        &self.definitions
    }

    /// Renders the full file text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        push_line(&mut out, IDE_HEADER);
        push_line(&mut out, OBJS_SECTION);
        for line in &self.definitions {
            push_line(&mut out, &line.to_string());
        }
        push_line(&mut out, SECTION_END);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::ObjectId;

    fn def(id: i64, model: &str) -> DefinitionLine {
        DefinitionLine {
            id: ObjectId(id),
            fields: vec![
                id.to_string(),
                model.to_string(),
                model.to_string(),
                "150".to_string(),
                "0".to_string(),
            ],
        }
    }

    #[test]
    fn test_sorted_ascending_regardless_of_input() {
        let doc = IdeDocument::new(vec![def(42, "b"), def(7, "a"), def(100, "c")]);
        let ids: Vec<i64> = doc.definitions().iter().map(|d| d.id.as_i64()).collect();
        assert_eq!(ids, vec![7, 42, 100]);
    }

    #[test]
    fn test_render_structure() {
        let doc = IdeDocument::new(vec![def(2, "bin"), def(1, "lamp")]);
        assert_eq!(
            doc.render(),
            "# IDE generated by iplkit\n\
             objs\n\
             1, lamp, lamp, 150, 0\n\
             2, bin, bin, 150, 0\n\
             end\n"
        );
    }
}
