//! Hash collections. FxHash throughout — keys are short identifier strings.

pub use rustc_hash::{FxHashMap, FxHashSet};
