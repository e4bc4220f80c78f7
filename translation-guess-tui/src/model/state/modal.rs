//! 弹窗/对话框状态

/// 弹窗枚举，每个变体携带该弹窗的全部数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 帮助
    Help,
    /// 设置 API Key（保存到系统钥匙串）
    ApiKey {
        value: String,
        show_secret: bool,
        error: Option<String>,
    },
}

/// 弹窗状态容器
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 显示 API Key 弹窗
    pub fn show_api_key(&mut self) {
        self.active = Some(Modal::ApiKey {
            value: String::new(),
            show_secret: false,
            error: None,
        });
    }
}
