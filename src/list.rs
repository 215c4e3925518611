pub mod list {
    use crate::error::ListError;
    use crate::fallback::default_of;
    use crate::iter::{IntoIter, Iter, IterMut, ListIterator, ListIteratorMut};
    use crate::node::{Node, NodeIndex};
    use crate::options::ListOptions;
    use std::fmt;
    use std::mem;

    // 头、尾哨兵占据存储区的前两个槽位
    const FIRST_DATA_SLOT: usize = 2;

    /// 带哨兵节点的双向链表
    ///
    /// 节点保存在链表自己的存储区中，彼此以 [`NodeIndex`] 相连。头哨兵与尾哨兵随链表一起构造，
    /// 从不携带值，也从不被移除：
    /// - 空链表中，头哨兵的后继是尾哨兵，尾哨兵的前驱是头哨兵
    /// - 非空链表中，二者分别指向第一个与最后一个数据节点
    ///
    /// `delete_at_end` 决定清空或销毁时是否析构节点中的值，新建节点继承这一策略。
    pub struct List<T> {
        nodes: Vec<Node<T>>,
        size: usize,
        delete_at_end: bool,
    }

    // 构造
    impl<T> List<T> {
        /// 构造一个空链表，销毁时析构其中的值
        pub fn new() -> Self {
            Self::with_options(ListOptions::default())
        }

        /// 构造一个空链表，并指定销毁时是否析构其中的值
        ///
        /// # 参数
        /// - `delete_at_end`: 为 `false` 时，链表清空或销毁时放弃其中的值而不析构
        pub fn with_delete_at_end(delete_at_end: bool) -> Self {
            Self::with_options(ListOptions::default().with_delete_at_end(delete_at_end))
        }

        pub fn with_capacity(capacity: usize) -> Self {
            Self::with_options(ListOptions::default().with_capacity(capacity))
        }

        /// 按给定参数构造一个空链表
        ///
        /// # 操作逻辑
        /// 1. 为哨兵与 `capacity` 个数据节点预留存储
        /// 2. 构造头哨兵，其后继为尾哨兵
        /// 3. 构造尾哨兵，其前驱为头哨兵
        pub fn with_options(options: ListOptions) -> Self {
            let mut nodes = Vec::with_capacity(FIRST_DATA_SLOT + options.capacity);
            nodes.push(Node::sentinel(None, Some(NodeIndex::TAIL), false));
            nodes.push(Node::sentinel(Some(NodeIndex::HEAD), None, false));
            List {
                nodes,
                size: 0,
                delete_at_end: options.delete_at_end,
            }
        }

        #[inline]
        pub fn delete_at_end(&self) -> bool {
            self.delete_at_end
        }
    }

    // 基础实现
    impl<T> List<T> {
        #[inline]
        fn node(&self, at: NodeIndex) -> &Node<T> {
            &self.nodes[at.get()]
        }

        #[inline]
        fn node_mut(&mut self, at: NodeIndex) -> &mut Node<T> {
            &mut self.nodes[at.get()]
        }

        #[inline]
        fn first(&self) -> NodeIndex {
            self.node(NodeIndex::HEAD).next().unwrap_or(NodeIndex::TAIL)
        }

        #[inline]
        fn last(&self) -> NodeIndex {
            self.node(NodeIndex::TAIL).prev().unwrap_or(NodeIndex::HEAD)
        }

        /// 在两个相邻节点之间接入一个新节点
        ///
        /// # 操作逻辑
        /// 1. 把新节点追加到存储区末尾，其两侧链接指向 `prev` 与 `next`
        /// 2. `prev` 的后继与 `next` 的前驱改为新节点
        /// 3. 链表长度增加 1
        fn splice_between(&mut self, prev: NodeIndex, next: NodeIndex, value: T) {
            let at = NodeIndex::new(self.nodes.len());
            self.nodes
                .push(Node::new(value, Some(prev), Some(next), self.delete_at_end));
            self.node_mut(prev).set_next(Some(at));
            self.node_mut(next).set_prev(Some(at));
            self.size += 1;
        }

        /// 在头哨兵之后插入一个新元素，O(1)
        pub fn push_head(&mut self, value: T) {
            let first = self.first();
            self.splice_between(NodeIndex::HEAD, first, value);
        }

        /// 在尾哨兵之前插入一个新元素，O(1)
        pub fn push_tail(&mut self, value: T) {
            let last = self.last();
            self.splice_between(last, NodeIndex::TAIL, value);
        }

        /// 数据节点的数量，不含哨兵
        #[inline]
        pub fn size(&self) -> usize {
            self.size
        }

        #[inline]
        pub fn len(&self) -> usize {
            self.size
        }

        #[inline]
        pub fn is_empty(&self) -> bool {
            debug_assert_eq!(self.size == 0, self.first() == NodeIndex::TAIL);
            self.size == 0
        }

        // 从离 `index` 更近的一端开始顺着链接查找
        fn locate(&self, index: usize) -> Option<NodeIndex> {
            if index >= self.size {
                return None;
            }
            let mut at;
            if index <= self.size / 2 {
                at = self.first();
                for _ in 0..index {
                    at = self.node(at).next()?;
                }
            } else {
                at = self.last();
                for _ in index + 1..self.size {
                    at = self.node(at).prev()?;
                }
            }
            Some(at)
        }

        /// 获取第 `index` 个（从 0 开始）元素的引用
        ///
        /// # 返回值
        /// - 索引在 `[0, size)` 之内，返回 `Some(&value)`
        /// - 越界时返回 `None`
        pub fn get(&self, index: usize) -> Option<&T> {
            self.locate(index).and_then(|at| self.node(at).get())
        }

        /// 获取第 `index` 个元素的可变引用，越界时返回 `None`
        pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
            let at = self.locate(index)?;
            self.node_mut(at).get_mut()
        }

        /// 与 [`List::get`] 相同，但越界时返回携带索引与长度的错误
        pub fn try_get(&self, index: usize) -> Result<&T, ListError> {
            self.get(index).ok_or(ListError::IndexOutOfBounds {
                index,
                size: self.size,
            })
        }

        pub fn head(&self) -> Option<&T> {
            self.node(self.first()).get()
        }

        pub fn tail(&self) -> Option<&T> {
            self.node(self.last()).get()
        }

        pub fn head_mut(&mut self) -> Option<&mut T> {
            let first = self.first();
            self.node_mut(first).get_mut()
        }

        pub fn tail_mut(&mut self) -> Option<&mut T> {
            let last = self.last();
            self.node_mut(last).get_mut()
        }

        pub fn try_head(&self) -> Result<&T, ListError> {
            self.head().ok_or(ListError::Empty)
        }

        pub fn try_tail(&self) -> Result<&T, ListError> {
            self.tail().ok_or(ListError::Empty)
        }

        /// 清空链表
        ///
        /// 按头到尾的顺序处理每个数据节点：`delete_at_end` 为真时析构其值，否则放弃其值。
        /// 之后头、尾哨兵重新互相指向。
        pub fn clear(&mut self) {
            let released = self.release_chain();
            self.nodes.truncate(FIRST_DATA_SLOT);
            self.node_mut(NodeIndex::HEAD).relink(None, Some(NodeIndex::TAIL));
            self.node_mut(NodeIndex::TAIL).relink(Some(NodeIndex::HEAD), None);
            self.size = 0;
            tracing::trace!(released, delete_at_end = self.delete_at_end, "list cleared");
        }

        // 沿链接从头哨兵之后走到尾哨兵，逐个按节点的所有权标志处理值
        fn release_chain(&mut self) -> usize {
            let mut released = 0;
            let mut at = self.first();
            while at != NodeIndex::TAIL {
                let node = self.node_mut(at);
                let next = node.next();
                node.discard();
                released += 1;
                match next {
                    Some(next) => at = next,
                    None => break,
                }
            }
            released
        }
    }

    // 默认值访问
    impl<T> List<T>
    where
        T: Default + 'static,
    {
        /// 获取第 `index` 个元素，越界时返回类型 `T` 的默认值
        ///
        /// 默认值在每个线程中每个类型唯一的一份，不属于任何链表。
        pub fn get_or_default(&self, index: usize) -> &T {
            self.get(index).unwrap_or_else(|| default_of::<T>())
        }

        /// 获取头部元素，链表为空时返回类型 `T` 的默认值
        pub fn head_or_default(&self) -> &T {
            self.head().unwrap_or_else(|| default_of::<T>())
        }

        /// 获取尾部元素，链表为空时返回类型 `T` 的默认值
        pub fn tail_or_default(&self) -> &T {
            self.tail().unwrap_or_else(|| default_of::<T>())
        }
    }

    // 遍历
    impl<T> List<T> {
        /// 指向第一个数据节点的游标；链表为空时与 [`List::iterator_to_after_last`] 相同
        ///
        /// 每次调用都返回新的游标，多个游标可以同时存活。
        pub fn iterator_to_first(&self) -> ListIterator<'_, T> {
            ListIterator::new(&self.nodes, self.first())
        }

        /// 指向尾哨兵的游标，表示最后一个值之后的位置
        pub fn iterator_to_after_last(&self) -> ListIterator<'_, T> {
            ListIterator::new(&self.nodes, NodeIndex::TAIL)
        }

        /// 指向第一个数据节点、可修改值的游标
        pub fn cursor_to_first_mut(&mut self) -> ListIteratorMut<'_, T> {
            let first = self.first();
            ListIteratorMut::new(&mut self.nodes, first)
        }

        pub fn iter(&self) -> Iter<'_, T> {
            Iter::new(&self.nodes, self.size)
        }

        /// 可修改值的迭代器，构造时分配一张 O(len) 的槽位表
        pub fn iter_mut(&mut self) -> IterMut<'_, T> {
            IterMut::new(&mut self.nodes, self.size)
        }

        /// 从头到尾对每个值调用 `action`，`action` 可以修改值
        ///
        /// # 参数
        /// - `action`: 返回 `false` 时停止遍历
        ///
        /// # 返回值
        /// 遍历终止处的索引：`action` 返回 `false` 的那个元素的索引（从 0 开始），
        /// 或者完整遍历时的 `size()`。空链表返回 0 且不调用 `action`。
        pub fn for_each<F>(&mut self, mut action: F) -> usize
        where
            F: FnMut(&mut T) -> bool,
        {
            let mut index = 0;
            let mut at = self.first();
            while at != NodeIndex::TAIL {
                let node = self.node_mut(at);
                let next = node.next();
                if let Some(value) = node.get_mut() {
                    if !action(value) {
                        tracing::trace!(index, "for_each stopped early");
                        return index;
                    }
                }
                index += 1;
                match next {
                    Some(next) => at = next,
                    None => break,
                }
            }
            index
        }

        /// 只读版本的 [`List::for_each`]，`action` 只能读取值
        ///
        /// 返回值的含义与 [`List::for_each`] 相同。
        pub fn for_each_readonly<F>(&self, mut action: F) -> usize
        where
            F: FnMut(&T) -> bool,
        {
            match self.iter().position(|value| !action(value)) {
                Some(index) => {
                    tracing::trace!(index, "for_each_readonly stopped early");
                    index
                }
                None => self.size,
            }
        }
    }

    // 深拷贝
    impl<T: Clone> List<T> {
        /// 用 `other` 的内容替换当前内容
        ///
        /// # 操作逻辑
        /// 1. 先把 `other` 的值全部克隆出来；克隆中途 panic 时当前链表保持原样
        /// 2. 两个哨兵重新互相指向、长度归零，之后的写入过程中链表始终是一条合法的链
        /// 3. 把克隆出的值写入从第一个数据槽位开始的连续槽位：
        ///    - 槽位已存在则复用，旧值按旧节点的所有权标志处理
        ///    - 槽位不存在则新建
        /// 4. 每个节点的所有权标志改为 `other` 的 `delete_at_end`
        /// 5. 丢弃多余的旧槽位，把新链挂到两个哨兵之间
        fn copy_from(&mut self, other: &Self) {
            let values: Vec<T> = other.iter().cloned().collect();
            let count = values.len();

            self.node_mut(NodeIndex::HEAD).relink(None, Some(NodeIndex::TAIL));
            self.node_mut(NodeIndex::TAIL).relink(Some(NodeIndex::HEAD), None);
            self.size = 0;
            self.delete_at_end = other.delete_at_end;

            let mut prev = NodeIndex::HEAD;
            for (offset, value) in values.into_iter().enumerate() {
                let at = NodeIndex::new(FIRST_DATA_SLOT + offset);
                let next = if offset + 1 == count {
                    NodeIndex::TAIL
                } else {
                    NodeIndex::new(at.get() + 1)
                };
                match self.nodes.get_mut(at.get()) {
                    Some(node) => {
                        node.reset(value, Some(prev), Some(next));
                        node.relink_with_policy(Some(prev), Some(next), other.delete_at_end);
                    }
                    None => self.nodes.push(Node::new(
                        value,
                        Some(prev),
                        Some(next),
                        other.delete_at_end,
                    )),
                }
                prev = at;
            }
            self.nodes.truncate(FIRST_DATA_SLOT + count);

            if count > 0 {
                self.node_mut(NodeIndex::HEAD)
                    .relink(None, Some(NodeIndex::new(FIRST_DATA_SLOT)));
                self.node_mut(NodeIndex::TAIL).relink(Some(prev), None);
            }
            self.size = count;
            tracing::trace!(copied = count, "list deep copied");
        }
    }

    impl<T: Clone> Clone for List<T> {
        /// 深拷贝所有数据节点（不含哨兵），保持顺序与 `delete_at_end` 策略
        fn clone(&self) -> Self {
            let mut copy = List::with_options(ListOptions {
                delete_at_end: self.delete_at_end,
                capacity: self.size,
            });
            copy.copy_from(self);
            copy
        }

        /// 赋值：复用已有的节点槽位
        fn clone_from(&mut self, source: &Self) {
            self.copy_from(source);
        }
    }

    impl<T> Drop for List<T> {
        fn drop(&mut self) {
            // 内容已交给消费迭代器时存储区为空
            if self.nodes.len() < FIRST_DATA_SLOT {
                return;
            }
            let released = self.release_chain();
            if released > 0 {
                tracing::trace!(released, delete_at_end = self.delete_at_end, "list dropped");
            }
        }
    }

    impl<T> Default for List<T> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<T: fmt::Debug> fmt::Debug for List<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_list().entries(self.iter()).finish()
        }
    }

    impl<T: PartialEq> PartialEq for List<T> {
        fn eq(&self, other: &Self) -> bool {
            self.size == other.size && self.iter().eq(other.iter())
        }
    }

    impl<T: Eq> Eq for List<T> {}

    // 从迭代器创建链表，元素顺序与迭代器一致
    impl<T> FromIterator<T> for List<T> {
        fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
            let mut list = List::new();
            list.extend(iter);
            list
        }
    }

    impl<T> Extend<T> for List<T> {
        fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
            for value in iter {
                self.push_tail(value);
            }
        }
    }

    impl<T> IntoIterator for List<T> {
        type Item = T;
        type IntoIter = IntoIter<T>;

        fn into_iter(mut self) -> Self::IntoIter {
            let nodes = mem::take(&mut self.nodes);
            IntoIter::new(nodes, self.size)
        }
    }

    impl<'a, T> IntoIterator for &'a List<T> {
        type Item = &'a T;
        type IntoIter = Iter<'a, T>;

        fn into_iter(self) -> Self::IntoIter {
            self.iter()
        }
    }

    impl<'a, T> IntoIterator for &'a mut List<T> {
        type Item = &'a mut T;
        type IntoIter = IterMut<'a, T>;

        fn into_iter(self) -> Self::IntoIter {
            self.iter_mut()
        }
    }

}
