use crate::node::{Node, NodeIndex};
use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

/// 指向链表中某个节点的游标
///
/// 游标只引用节点，从不拥有节点；它借用了链表，因此在游标存活期间链表无法被修改，
/// 节点也就不会在游标之下被销毁。
///
/// `List::iterator_to_first` 与 `List::iterator_to_after_last` 每次调用都返回一个
/// 新的、相互独立的游标，二者构成半开区间 `[first, after_last)`：
///
/// ```
/// use sentinel_list::List;
///
/// let list: List<i32> = [1, 2, 3].into_iter().collect();
/// let mut it = list.iterator_to_first();
/// let end = list.iterator_to_after_last();
/// let mut seen = Vec::new();
/// while it.is_not(&end) {
///     seen.extend(it.value().copied());
///     it.advance_to_next();
/// }
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
pub struct ListIterator<'a, T> {
    nodes: &'a [Node<T>],
    at: Option<NodeIndex>,
}

impl<'a, T> ListIterator<'a, T> {
    pub(crate) fn new(nodes: &'a [Node<T>], at: NodeIndex) -> Self {
        ListIterator {
            nodes,
            at: Some(at),
        }
    }

    fn node(&self) -> Option<&'a Node<T>> {
        let nodes = self.nodes;
        self.at.and_then(|at| nodes.get(at.get()))
    }

    /// 当前所在的位置，默认构造的游标没有位置
    #[inline]
    pub fn position(&self) -> Option<NodeIndex> {
        self.at
    }

    /// 两个游标是否指向不同的节点
    ///
    /// 比较的是位置（同一份存储中的同一个节点），不是值。
    pub fn is_not(&self, other: &Self) -> bool {
        match (self.at, other.at) {
            (None, None) => false,
            (a, b) => a != b || !ptr::eq(self.nodes.as_ptr(), other.nodes.as_ptr()),
        }
    }

    /// 读取当前节点的值
    ///
    /// 游标位于哨兵上或是默认构造的游标时返回 `None`。
    pub fn value(&self) -> Option<&'a T> {
        self.node().and_then(Node::get)
    }

    /// 移动到下一个节点
    ///
    /// 已经位于尾哨兵时保持不动。
    pub fn advance_to_next(&mut self) {
        if let Some(next) = self.node().and_then(Node::next) {
            self.at = Some(next);
        }
    }

    /// 是否已经没有后续的值可读（位于尾哨兵，或没有位置）
    pub fn is_at_end(&self) -> bool {
        self.node().and_then(Node::next).is_none()
    }
}

impl<T> Default for ListIterator<'_, T> {
    fn default() -> Self {
        ListIterator { nodes: &[], at: None }
    }
}

impl<T> Clone for ListIterator<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListIterator<'_, T> {}

impl<T> fmt::Debug for ListIterator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListIterator").field("at", &self.at).finish()
    }
}

/// 可以修改所指节点值的游标
pub struct ListIteratorMut<'a, T> {
    nodes: &'a mut [Node<T>],
    at: NodeIndex,
}

impl<'a, T> ListIteratorMut<'a, T> {
    pub(crate) fn new(nodes: &'a mut [Node<T>], at: NodeIndex) -> Self {
        ListIteratorMut { nodes, at }
    }

    #[inline]
    pub fn position(&self) -> NodeIndex {
        self.at
    }

    pub fn value(&self) -> Option<&T> {
        self.nodes.get(self.at.get()).and_then(Node::get)
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.nodes.get_mut(self.at.get()).and_then(Node::get_mut)
    }

    pub fn advance_to_next(&mut self) {
        if let Some(next) = self.nodes.get(self.at.get()).and_then(Node::next) {
            self.at = next;
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.nodes.get(self.at.get()).and_then(Node::next).is_none()
    }
}

impl<T> fmt::Debug for ListIteratorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListIteratorMut").field("at", &self.at).finish()
    }
}

// 前向不可变迭代器
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    front: NodeIndex,
    back: NodeIndex,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a [Node<T>], remaining: usize) -> Self {
        let front = nodes
            .get(NodeIndex::HEAD.get())
            .and_then(Node::next)
            .unwrap_or(NodeIndex::TAIL);
        let back = nodes
            .get(NodeIndex::TAIL.get())
            .and_then(Node::prev)
            .unwrap_or(NodeIndex::HEAD);
        Iter {
            nodes,
            front,
            back,
            remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.front.get())?;
        self.remaining -= 1;
        if let Some(next) = node.next() {
            self.front = next;
        }
        node.get()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.back.get())?;
        self.remaining -= 1;
        if let Some(prev) = node.prev() {
            self.back = prev;
        }
        node.get()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

// 前向可变迭代器
//
// 每个节点槽位只能被取出一次，因此同一个值不会被交出两个可变引用。
// 构造时分配一张与存储区等长的槽位表，存储区始终只有哨兵加当前的数据节点，
// 所以开销是 O(len)，与链表曾经的最大长度无关。
pub struct IterMut<'a, T> {
    slots: Vec<Option<&'a mut Node<T>>>,
    front: NodeIndex,
    back: NodeIndex,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(nodes: &'a mut [Node<T>], remaining: usize) -> Self {
        let front = nodes
            .get(NodeIndex::HEAD.get())
            .and_then(Node::next)
            .unwrap_or(NodeIndex::TAIL);
        let back = nodes
            .get(NodeIndex::TAIL.get())
            .and_then(Node::prev)
            .unwrap_or(NodeIndex::HEAD);
        debug_assert_eq!(nodes.len(), remaining + 2, "存储区只含哨兵与数据节点");
        IterMut {
            slots: nodes.iter_mut().map(Some).collect(),
            front,
            back,
            remaining,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.slots.get_mut(self.front.get())?.take()?;
        self.remaining -= 1;
        if let Some(next) = node.next() {
            self.front = next;
        }
        node.get_mut()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.slots.get_mut(self.back.get())?.take()?;
        self.remaining -= 1;
        if let Some(prev) = node.prev() {
            self.back = prev;
        }
        node.get_mut()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

// 消费迭代器
//
// 取出的值交给调用者；迭代器被丢弃时，尚未取出的值按各自节点的所有权标志处理。
pub struct IntoIter<T> {
    nodes: Vec<Node<T>>,
    front: NodeIndex,
    back: NodeIndex,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(nodes: Vec<Node<T>>, remaining: usize) -> Self {
        let front = nodes
            .get(NodeIndex::HEAD.get())
            .and_then(Node::next)
            .unwrap_or(NodeIndex::TAIL);
        let back = nodes
            .get(NodeIndex::TAIL.get())
            .and_then(Node::prev)
            .unwrap_or(NodeIndex::HEAD);
        IntoIter {
            nodes,
            front,
            back,
            remaining,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get_mut(self.front.get())?;
        self.remaining -= 1;
        if let Some(next) = node.next() {
            self.front = next;
        }
        node.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get_mut(self.back.get())?;
        self.remaining -= 1;
        if let Some(prev) = node.prev() {
            self.back = prev;
        }
        node.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
