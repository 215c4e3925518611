use std::fmt;
use std::mem;

/// 节点在链表存储区中的位置
///
/// 位置 0 与 1 固定属于头、尾哨兵节点，数据节点从 2 开始依次追加。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(pub usize);

impl NodeIndex {
    /// 头哨兵（第一个数据节点之前）
    pub const HEAD: NodeIndex = NodeIndex(0);
    /// 尾哨兵（最后一个数据节点之后）
    pub const TAIL: NodeIndex = NodeIndex(1);

    #[inline]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    #[inline]
    pub fn is_sentinel(self) -> bool {
        self == Self::HEAD || self == Self::TAIL
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIndex({})", self.0)
    }
}

impl From<usize> for NodeIndex {
    #[inline]
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

// 哨兵不携带任何值，读取哨兵的值在类型层面就只能得到 None
#[derive(Debug)]
enum Payload<T> {
    Sentinel,
    Data(T),
}

/// 双向链表的存储单元
///
/// `prev` / `next` 只是存储区内的位置，不拥有任何东西；节点本身由链表的存储区独占。
///
/// `owns_on_destroy` 决定节点销毁时是否运行所存值的析构：
/// - `true`: 值随节点一起析构，值所持有的资源被释放
/// - `false`: 值被放弃（`mem::forget`），其引用的资源留给外部的真正所有者
///
/// 哨兵节点没有值，这个标志对它们没有作用，链表总是以 `false` 构造哨兵。
#[derive(Debug)]
pub struct Node<T> {
    payload: Payload<T>,
    prev: Option<NodeIndex>,
    next: Option<NodeIndex>,
    owns_on_destroy: bool,
}

impl<T> Node<T> {
    /// 构造一个携带值的数据节点
    ///
    /// # 参数
    /// - `value`: 节点存储的值
    /// - `prev` / `next`: 前驱与后继的位置
    /// - `owns_on_destroy`: 销毁时是否析构 `value`
    pub fn new(
        value: T,
        prev: Option<NodeIndex>,
        next: Option<NodeIndex>,
        owns_on_destroy: bool,
    ) -> Self {
        Node {
            payload: Payload::Data(value),
            prev,
            next,
            owns_on_destroy,
        }
    }

    /// 构造一个不携带值的哨兵节点
    pub fn sentinel(prev: Option<NodeIndex>, next: Option<NodeIndex>, owns_on_destroy: bool) -> Self {
        Node {
            payload: Payload::Sentinel,
            prev,
            next,
            owns_on_destroy,
        }
    }

    #[inline]
    pub fn is_sentinel(&self) -> bool {
        matches!(self.payload, Payload::Sentinel)
    }

    /// 读取节点存储的值，哨兵返回 `None`
    #[inline]
    pub fn get(&self) -> Option<&T> {
        match &self.payload {
            Payload::Data(value) => Some(value),
            Payload::Sentinel => None,
        }
    }

    /// 读取节点存储的值的可变引用，哨兵返回 `None`
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match &mut self.payload {
            Payload::Data(value) => Some(value),
            Payload::Sentinel => None,
        }
    }

    #[inline]
    pub fn prev(&self) -> Option<NodeIndex> {
        self.prev
    }

    #[inline]
    pub fn next(&self) -> Option<NodeIndex> {
        self.next
    }

    #[inline]
    pub fn owns_on_destroy(&self) -> bool {
        self.owns_on_destroy
    }

    /// 只改写前驱链接，链的另一侧由调用者维护
    #[inline]
    pub fn set_prev(&mut self, prev: Option<NodeIndex>) {
        self.prev = prev;
    }

    /// 只改写后继链接，链的另一侧由调用者维护
    #[inline]
    pub fn set_next(&mut self, next: Option<NodeIndex>) {
        self.next = next;
    }

    /// 一次性替换值与两侧链接
    ///
    /// 被替换下来的旧值按节点当前的 `owns_on_destroy` 处理。
    pub fn reset(&mut self, value: T, prev: Option<NodeIndex>, next: Option<NodeIndex>) {
        let old = mem::replace(&mut self.payload, Payload::Data(value));
        self.release(old);
        self.relink(prev, next);
    }

    #[inline]
    pub fn relink(&mut self, prev: Option<NodeIndex>, next: Option<NodeIndex>) {
        self.prev = prev;
        self.next = next;
    }

    /// 同时改写两侧链接与所有权标志
    #[inline]
    pub fn relink_with_policy(
        &mut self,
        prev: Option<NodeIndex>,
        next: Option<NodeIndex>,
        owns_on_destroy: bool,
    ) {
        self.relink(prev, next);
        self.owns_on_destroy = owns_on_destroy;
    }

    /// 把值移出节点，节点此后表现为哨兵
    ///
    /// 移出的值交给调用者，与 `owns_on_destroy` 无关。
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        match mem::replace(&mut self.payload, Payload::Sentinel) {
            Payload::Data(value) => Some(value),
            Payload::Sentinel => None,
        }
    }

    /// 按 `owns_on_destroy` 处理当前的值，节点此后表现为哨兵
    pub fn discard(&mut self) {
        let payload = mem::replace(&mut self.payload, Payload::Sentinel);
        self.release(payload);
    }

    fn release(&self, payload: Payload<T>) {
        if let Payload::Data(value) = payload {
            if self.owns_on_destroy {
                drop(value);
            } else {
                mem::forget(value);
            }
        }
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        self.discard();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_sentinel_has_no_value() {
        let mut node: Node<i32> = Node::sentinel(None, Some(NodeIndex::TAIL), false);
        assert!(node.is_sentinel());
        assert_eq!(node.get(), None);
        assert_eq!(node.get_mut(), None);
        assert_eq!(node.take(), None);
        assert_eq!(node.next(), Some(NodeIndex::TAIL));
    }

    #[test]
    fn test_owning_node_drops_value() {
        let shared = Rc::new(7);
        let node = Node::new(Rc::clone(&shared), None, None, true);
        assert_eq!(Rc::strong_count(&shared), 2);
        drop(node);
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn test_non_owning_node_relinquishes_value() {
        let shared = Rc::new(7);
        let node = Node::new(Rc::clone(&shared), None, None, false);
        drop(node);
        // 值没有被析构，引用计数保持不变
        assert_eq!(Rc::strong_count(&shared), 2);
    }

    #[test]
    fn test_reset_releases_displaced_value_by_policy() {
        let first = Rc::new("first");
        let second = Rc::new("second");
        let mut node = Node::new(Rc::clone(&first), None, None, true);

        node.reset(Rc::clone(&second), Some(NodeIndex::HEAD), Some(NodeIndex::TAIL));
        assert_eq!(Rc::strong_count(&first), 1);
        assert_eq!(node.get().map(|v| **v), Some("second"));
        assert_eq!(node.prev(), Some(NodeIndex::HEAD));
        assert_eq!(node.next(), Some(NodeIndex::TAIL));
    }

    #[test]
    fn test_relink_variants() {
        let mut node = Node::new(1u8, None, None, false);
        node.set_prev(Some(NodeIndex(4)));
        node.set_next(Some(NodeIndex(5)));
        assert_eq!((node.prev(), node.next()), (Some(NodeIndex(4)), Some(NodeIndex(5))));

        node.relink(Some(NodeIndex(2)), None);
        assert_eq!((node.prev(), node.next()), (Some(NodeIndex(2)), None));
        assert!(!node.owns_on_destroy());

        node.relink_with_policy(None, Some(NodeIndex(3)), true);
        assert!(node.owns_on_destroy());
        assert_eq!(node.next(), Some(NodeIndex(3)));
    }

    #[test]
    fn test_take_hands_value_to_caller() {
        let shared = Rc::new(1);
        let mut node = Node::new(Rc::clone(&shared), None, None, false);
        let taken = node.take();
        assert!(node.is_sentinel());
        drop(taken);
        drop(node);
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn test_sentinel_indices() {
        assert!(NodeIndex::HEAD.is_sentinel());
        assert!(NodeIndex::TAIL.is_sentinel());
        assert!(!NodeIndex::from(2).is_sentinel());
        assert_eq!(NodeIndex::new(9).get(), 9);
        assert_eq!(NodeIndex(3).to_string(), "NodeIndex(3)");
    }
}
