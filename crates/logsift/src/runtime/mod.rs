//! Runtime module: binary lifecycle: boot, then one analysis run.

pub mod boot;
pub mod run;
