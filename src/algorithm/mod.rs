//! 图算法模块
//!
//! 包含好友链路的路径查找算法

mod path_finding;

pub use path_finding::PathFinder;
