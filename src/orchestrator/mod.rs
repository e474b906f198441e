//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (命令行 + 配置)
//!     ↓
//! workflow::Session (一次报告的生命周期)
//!     ↓
//! services (能力层：格式分发 / 分析客户端)      presentation (视图模型 / 渲染)
//!     ↓
//! decoders (基础设施：txt / pdf / docx)
//! ```
//!
//! ## 设计原则
//!
//! 1. **向下依赖**：编排层 → workflow → services → decoders
//! 2. **无业务逻辑**：只做调度和输出，不做具体判断

pub mod app;

pub use app::App;
