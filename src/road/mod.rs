//! 路网模块
//!
//! 此模块包含静态路网数据：路口、单向街道、车辆路线，以及问题实例。

// 子模块声明
mod car;
mod error;
mod id;
mod network;
mod problem;
mod street;

// 重新导出公共接口
pub use car::Car;
pub use error::{NetworkError, NetworkResult};
pub use id::{CarId, IntersectionId, StreetId};
pub use network::RoadNetwork;
pub use problem::Problem;
pub use street::Street;
