//! 信号灯排程模块
//!
//! 包含排程表本身、街道使用量统计，以及初始构建与按拥堵重新加权的构建器。

mod builder;
mod error;
mod table;
mod usage;

pub use builder::{DEFAULT_CYCLE_BUDGET, ScheduleBuilder};
pub use error::{ScheduleError, ScheduleResult};
pub use table::{GreenSlot, IntersectionSchedule, Schedule};
pub use usage::StreetUsage;
