//! 街道类型

use super::id::{IntersectionId, StreetId};

/// 单向街道：从 `start` 路口驶向 `end` 路口，通行需要 `length` 个 tick。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Street {
    pub id: StreetId,
    pub start: IntersectionId,
    pub end: IntersectionId,
    pub name: String,
    pub length: u32,
}
