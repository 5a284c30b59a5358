//! Generates TypeScript bindings for the wire types via ts-rs.
//!
//! Run with: cargo test -p ccr-core export_bindings
//! Generated files appear in ccr-core/bindings/*.ts

#[test]
fn export_bindings() {
    use ccr_core::school::{BiasLabel, SchoolRecord, Tier};
    use ccr_core::weights::{Factor, FactorWeights};

    // #[ts(export)] writes the files during `cargo test`; this only checks the derives.
    let _ = std::any::type_name::<SchoolRecord>();
    let _ = std::any::type_name::<Tier>();
    let _ = std::any::type_name::<BiasLabel>();
    let _ = std::any::type_name::<Factor>();
    let _ = std::any::type_name::<FactorWeights>();
}
