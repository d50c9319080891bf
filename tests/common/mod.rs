#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use iplkit::ir::{ObjectRecord, Quat, Vec3};

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

pub fn read_text(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {}", path.display(), e))
}

/// Lines between a section header and its `end`, exclusive.
pub fn section<'a>(text: &'a str, name: &str) -> Vec<&'a str> {
    text.lines()
        .skip_while(|line| *line != name)
        .skip(1)
        .take_while(|line| *line != "end")
        .collect()
}

pub fn streetlamp() -> ObjectRecord {
    let mut record = ObjectRecord::instance("streetlamp", 1)
        .with_model_name("streetlamp")
        .with_position(Vec3::new(10.0, 20.0, 0.0))
        .with_rotation(Quat::new(0, 0, 0, 1));
    record.interior = Some(0);
    record.lod = Some(-1);
    record
}
