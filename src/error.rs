use thiserror::Error;

/// 链表访问错误
///
/// 只有 `try_*` 系列访问器会返回该错误；`Option` 访问器与 `*_or_default`
/// 访问器永远不会失败。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("索引越界: 索引为 {index}，链表长度为 {size}")]
    IndexOutOfBounds { index: usize, size: usize },
    #[error("链表为空")]
    Empty,
}
