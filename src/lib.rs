//! 带哨兵节点的泛型双向链表
//!
//! 链表在头、尾各有一个永久存在、不携带值的哨兵节点，数据节点总是接在二者之间，
//! 插入时无需处理空链表等边界情况。
//!
//! ```
//! use sentinel_list::List;
//!
//! let mut list = List::new();
//! list.push_tail(1);
//! list.push_tail(2);
//! list.push_head(0);
//! assert_eq!(list.get(0), Some(&0));
//! assert_eq!(list.get(10), None);
//! assert_eq!(*list.get_or_default(10), 0);
//!
//! let stop = list.for_each(|value| {
//!     *value += 1;
//!     *value < 2
//! });
//! assert_eq!(stop, 1);
//! ```
pub mod error;
pub mod fallback;
pub mod iter;
pub mod list;
pub mod node;
pub mod options;

pub use error::ListError;
pub use iter::{IntoIter, Iter, IterMut, ListIterator, ListIteratorMut};
pub use list::list::List;
pub use node::{Node, NodeIndex};
pub use options::ListOptions;
