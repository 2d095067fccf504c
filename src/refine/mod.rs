//! 迭代优化模块
//!
//! 固定轮数的“构建/重新加权 → 仿真”循环。

mod observer;
mod refinement;

pub use observer::{NoopObserver, RoundObserver};
pub use refinement::{DEFAULT_ROUNDS, RefineOpts, Refinement, RefinementLoop};
