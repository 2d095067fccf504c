//! 仿真核心模块
//!
//! 此模块包含逐 tick 的交通仿真：信号灯状态机、路口与车辆的运行时状态、
//! 仿真器及其结果。

// 子模块声明
mod error;
mod intersection;
mod light;
mod result;
mod simulator;
mod time;

// 重新导出公共接口
pub use error::{SimError, SimResult};
pub use light::LightCycle;
pub use result::{QueueStats, SimulationResult};
pub use simulator::{SimConfig, SimRun, Simulator};
pub use time::Tick;
