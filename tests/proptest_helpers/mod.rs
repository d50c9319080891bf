#![allow(dead_code)]

use iplkit::ir::{ObjectId, ObjectKind, ObjectRecord, Quat, Scalar, Vec3};
use iplkit::layout::GameVersion;
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn arb_version() -> impl Strategy<Value = GameVersion> {
    prop_oneof![
        Just(GameVersion::III),
        Just(GameVersion::VC),
        Just(GameVersion::SA),
    ]
}

pub fn arb_scalar() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        (-10_000i64..10_000).prop_map(Scalar::Int),
        (-10_000.0f64..10_000.0).prop_map(Scalar::Float),
    ]
}

pub fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (arb_scalar(), arb_scalar(), arb_scalar()).prop_map(|(x, y, z)| Vec3 { x, y, z })
}

pub fn arb_quat() -> impl Strategy<Value = Quat> {
    (arb_scalar(), arb_scalar(), arb_scalar(), arb_scalar())
        .prop_map(|(x, y, z, w)| Quat { x, y, z, w })
}

/// Names without commas or whitespace, optionally with a `.NNN` suffix.
pub fn arb_display_name() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9_]{0,15}", proptest::option::of(0u32..1000)).prop_map(|(stem, suffix)| {
        match suffix {
            Some(n) => format!("{}.{:03}", stem, n),
            None => stem,
        }
    })
}

/// An instance record with a positive ID drawn from `ids`.
pub fn arb_instance(ids: std::ops::Range<i64>) -> impl Strategy<Value = ObjectRecord> {
    (
        arb_display_name(),
        ids,
        proptest::option::of("[a-z][a-z0-9_]{0,15}"),
        proptest::option::of(0i64..20),
        proptest::option::of(-1i64..500),
        proptest::option::of(arb_scalar()),
        arb_vec3(),
        arb_quat(),
        arb_vec3(),
        any::<bool>(),
    )
        .prop_map(
            |(name, id, model_name, interior, lod, draw_distance, position, rotation, scale, selected)| {
                ObjectRecord {
                    name,
                    kind: ObjectKind::Instance,
                    selected,
                    id: Some(ObjectId(id)),
                    model_name,
                    txd_name: None,
                    interior,
                    lod,
                    draw_distance,
                    flags: None,
                    position,
                    rotation,
                    scale,
                }
            },
        )
}

pub fn arb_instances(max_len: usize) -> impl Strategy<Value = Vec<ObjectRecord>> {
    proptest::collection::vec(arb_instance(1..50), 1..=max_len)
}
