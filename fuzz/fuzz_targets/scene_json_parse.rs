//! Fuzz target for scene JSON parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the scene JSON parser and
//! formats whatever parses, checking for panics, crashes, or hangs.

#![no_main]

use iplkit::ir::io_json::from_json_slice;
use iplkit::layout::{resolve, resolve_definition, GameVersion};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    if let Ok(scene) = from_json_slice(data) {
        for record in &scene.objects {
            for version in GameVersion::ALL {
                let _ = resolve(record, version);
            }
            let _ = resolve_definition(record);
        }
    }
});
