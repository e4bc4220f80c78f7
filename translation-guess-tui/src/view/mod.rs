//! View 层：只读 Model，负责渲染
//!
//!     layout.rs       标题栏 + 页面 + 状态栏 + 弹窗
//!     pages/          输入页、结果页
//!     components/     状态栏、弹窗
//!     theme.rs        颜色和常用样式

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
