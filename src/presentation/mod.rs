//! 展示层
//!
//! - `presenter` - 分析结果 → 视图模型（纯函数）
//! - `view_state` - 词元面板的本地展开/收起状态
//! - `render` - 视图模型 + 状态 → 终端文本

pub mod presenter;
pub mod render;
pub mod view_state;

pub use presenter::{
    parse_score, present, ErrorBanner, PanelSide, Report, ReportViewModel, ScoreBand, Severity,
    StatsPanel,
};
pub use render::render_text;
pub use view_state::{ReportViewState, HIDE_TOKENS_LABEL, SHOW_TOKENS_LABEL};
