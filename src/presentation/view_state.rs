use serde::Serialize;

use super::presenter::PanelSide;

pub const SHOW_TOKENS_LABEL: &str = "Show Tokens";
pub const HIDE_TOKENS_LABEL: &str = "Hide Tokens";

/// 单个报告的本地界面状态
///
/// 两个词元面板各自独立，初始隐藏，只随本地切换事件变化，不持久化
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportViewState {
    user_tokens_visible: bool,
    reference_tokens_visible: bool,
}

impl ReportViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, side: PanelSide) -> bool {
        match side {
            PanelSide::User => self.user_tokens_visible,
            PanelSide::Reference => self.reference_tokens_visible,
        }
    }

    /// 切换面板可见性，返回切换后的状态
    pub fn toggle(&mut self, side: PanelSide) -> bool {
        let flag = match side {
            PanelSide::User => &mut self.user_tokens_visible,
            PanelSide::Reference => &mut self.reference_tokens_visible,
        };
        *flag = !*flag;
        *flag
    }

    /// 按钮文字
    pub fn button_label(&self, side: PanelSide) -> &'static str {
        if self.is_visible(side) {
            HIDE_TOKENS_LABEL
        } else {
            SHOW_TOKENS_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panels_start_hidden() {
        let state = ReportViewState::new();
        assert!(!state.is_visible(PanelSide::User));
        assert!(!state.is_visible(PanelSide::Reference));
        assert_eq!(state.button_label(PanelSide::User), SHOW_TOKENS_LABEL);
    }

    #[test]
    fn test_toggle_only_affects_own_panel() {
        let mut state = ReportViewState::new();

        assert!(state.toggle(PanelSide::User));
        assert!(state.is_visible(PanelSide::User));
        assert_eq!(state.button_label(PanelSide::User), HIDE_TOKENS_LABEL);
        assert!(!state.is_visible(PanelSide::Reference));
        assert_eq!(state.button_label(PanelSide::Reference), SHOW_TOKENS_LABEL);

        assert!(!state.toggle(PanelSide::User));
        assert_eq!(state.button_label(PanelSide::User), SHOW_TOKENS_LABEL);
        assert!(!state.is_visible(PanelSide::Reference));
    }
}
