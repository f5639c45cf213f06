//! 图核心模块
//!
//! 社交关系图和用户分组

mod group;
mod social;

pub use group::GroupRegistry;
pub use social::SocialGraph;
