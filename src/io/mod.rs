//! 输入输出边界
//!
//! 问题输入解析、提交文件（排程）的格式化与读取，以及 JSON 运行报告。
//! 核心模块只接收解析完成的 [`RoadNetwork`](crate::road::RoadNetwork)。

mod error;
mod input;
mod report;
mod submission;
mod tokens;

pub use error::ParseError;
pub use input::{MAX_INTERSECTIONS, parse_problem};
pub use report::{RunReport, StreetCongestion};
pub use submission::{format_schedule, parse_schedule};
