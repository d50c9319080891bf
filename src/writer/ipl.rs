//! IPL document structure.
//!
//! ```text
//! # IPL generated by iplkit (<game>)
//! inst
//! <instance lines>
//! end
//! cull
//! <cull lines>
//! end
//! ```
//!
//! Both sections are always present. Section names and the `end`
//! terminator are what the III/VC/SA loaders look for.

use crate::layout::{GameVersion, InstanceLine};

pub const INST_SECTION: &str = "inst";
pub const CULL_SECTION: &str = "cull";
pub const SECTION_END: &str = "end";

/// Instance lines followed by externally formatted cull lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IplDocument {
    pub instances: Vec<InstanceLine>,
    pub cull: Vec<String>,
}

impl IplDocument {
    pub fn new(instances: Vec<InstanceLine>, cull: Vec<String>) -> Self {
        Self { instances, cull }
    }

    /// Renders the full file text.
    pub fn render(&self, version: GameVersion) -> String {
        let mut out = format!("# IPL generated by iplkit ({})\n", version.label());

        push_line(&mut out, INST_SECTION);
        for line in &self.instances {
            push_line(&mut out, &line.to_string());
        }
        push_line(&mut out, SECTION_END);

        push_line(&mut out, CULL_SECTION);
        for line in &self.cull {
            push_line(&mut out, line);
        }
        push_line(&mut out, SECTION_END);

        out
    }
}

pub(super) fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
