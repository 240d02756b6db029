// 盤面核心錯誤型別，只有座標輸入錯誤會在執行期回報給使用者
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("無法解析的格座標輸入: {text:?}")]
    InvalidCellText { text: String },

    #[error("盤面設定解析失敗: {reason}")]
    ConfigParse { reason: String },

    #[error("盤面設定無效: {reason}")]
    InvalidConfig { reason: String },
}
