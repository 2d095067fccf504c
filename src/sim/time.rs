//! 仿真时间类型
//!
//! 仿真以离散 tick 推进，总共运行 `duration` 个 tick。

use serde::{Deserialize, Serialize};

/// 仿真时间（tick）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Tick(pub u32);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// `self + n`，溢出时饱和
    pub fn plus(self, n: u32) -> Tick {
        Tick(self.0.saturating_add(n))
    }
}
