//! Shared test helpers for engine tests

use std::sync::Arc;

use crate::config::SubstConfig;
use crate::logger::MemoryLogger;
use crate::template::engine::{Binding, Substituter};

#[derive(Debug, Default, Clone)]
pub(super) struct CtxA {
    pub y: i32,
    pub label: String,
}

#[derive(Debug, Default, Clone)]
pub(super) struct CtxB {
    pub x: i32,
    pub ratio: f64,
}

pub(super) type Ctx = (CtxA, CtxB);

pub(super) fn context(y: i32, x: i32) -> Ctx {
    (
        CtxA {
            y,
            label: "node-1".to_string(),
        },
        CtxB { x, ratio: 0.25 },
    )
}

/// Substituter over [`Ctx`] with a handful of variables and an in-memory logger
///
/// Variables: `x`, `y`, `label`, `ratio` (fields) and `version` (value).
pub(super) fn substituter(lenient: bool) -> (Substituter<Ctx>, Arc<MemoryLogger>) {
    textsubst_testkit::init_logging();
    let logger = Arc::new(MemoryLogger::new());
    let config = SubstConfig::default()
        .with_lenient(lenient)
        .with_logger(logger.clone());

    let mut subst = Substituter::new(config);
    subst.define("x", Binding::field(|b: &CtxB| &b.x)).unwrap();
    subst.define("y", Binding::field(|a: &CtxA| &a.y)).unwrap();
    subst
        .define("label", Binding::field(|a: &CtxA| &a.label))
        .unwrap();
    subst
        .define("ratio", Binding::field(|b: &CtxB| &b.ratio))
        .unwrap();
    subst.define("version", Binding::value("1.4.2")).unwrap();
    (subst, logger)
}

pub(super) fn strict() -> (Substituter<Ctx>, Arc<MemoryLogger>) {
    substituter(false)
}

pub(super) fn lenient() -> (Substituter<Ctx>, Arc<MemoryLogger>) {
    substituter(true)
}
