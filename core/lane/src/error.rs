//! 錯誤處理系統
//!
//! 頂層 `Error` 攜帶錯誤種類與 context 鏈；
//! 金幣不足與未知單位類型屬於可在本地恢復的錯誤，呼叫端可直接忽略。

use crate::domain::alias::{Gold, Seconds, TypeName};
use crate::domain::core_types::{Faction, Outcome};
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// 頂層錯誤，包含原始錯誤和 context 鏈
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    contexts: Vec<String>,
}

/// 錯誤種類
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Economy(#[from] EconomyError),
    #[error(transparent)]
    Match(#[from] MatchError),
}

/// 格式載入錯誤
#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("{format} 反序列化失敗: {reason}")]
    DeserializeError { format: String, reason: String },
}

/// 遊戲資料錯誤
#[derive(Debug, ThisError)]
pub enum DataError {
    #[error("GameData 尚未載入")]
    GameDataNotFound,
    #[error("World 中缺少 {resource_name}")]
    ResourceNotFound { resource_name: String },
    #[error("單位類型不存在: {type_name}")]
    UnitTypeNotFound { type_name: TypeName },
    #[error("單位類型重複定義: {type_name}")]
    DuplicateUnitType { type_name: TypeName },
    #[error("{type_name} 克制的單位類型不存在: {beats}")]
    UnknownAdvantageTarget { type_name: TypeName, beats: TypeName },
    #[error("{type_name} 的 {stat} 不合法: {value}")]
    InvalidUnitStat {
        type_name: TypeName,
        stat: &'static str,
        value: f32,
    },
    #[error("設定 {field} 不合法: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("單位目錄為空")]
    EmptyCatalog,
    #[error("Entity 缺少 component: {component_name}")]
    MissingComponent { component_name: String },
}

/// 經濟錯誤
#[derive(Debug, ThisError)]
pub enum EconomyError {
    #[error("{faction} 金幣不足: 需要 {required}，目前 {available}")]
    InsufficientResources {
        faction: Faction,
        required: Gold,
        available: Gold,
    },
}

/// 對戰流程錯誤
#[derive(Debug, ThisError)]
pub enum MatchError {
    #[error("對戰已結束: {outcome}")]
    MatchFinished { outcome: Outcome },
    #[error("時間增量不合法: {dt}")]
    InvalidDelta { dt: Seconds },
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// 是否為可在本地恢復的錯誤（金幣不足、未知單位類型）
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Economy(EconomyError::InsufficientResources { .. })
                | ErrorKind::Data(DataError::UnitTypeNotFound { .. })
        )
    }

    /// 添加錯誤上下文，自動記錄呼叫位置
    #[track_caller]
    pub fn context<C: Into<String>>(mut self, context: C) -> Self {
        let loc = std::panic::Location::caller();
        let msg = format!("{} [{}:{}]", context.into(), loc.file(), loc.line());
        self.contexts.push(msg);
        self
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        for ctx in &self.contexts {
            write!(f, "\n  {}", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl<E: Into<ErrorKind>> From<E> for Error {
    fn from(error: E) -> Self {
        Self {
            kind: error.into(),
            contexts: Vec::new(),
        }
    }
}

/// Result 擴展 trait，用於添加錯誤上下文
pub trait Context<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Result<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| e.context(context))
    }
}
