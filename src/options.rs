/// 链表构造参数
///
/// # 字段
/// - `delete_at_end`: 链表清空或销毁时是否析构其中的值，默认为 `true`。
///   设为 `false` 时，值被放弃而不析构，适用于值只是指向外部所有资源的句柄的情形。
///   注意 `false` 意味着对值调用 `mem::forget`，值自身的析构也不会运行：
///   `false` 的 `List<String>` 会泄漏每个字符串的缓冲区。这与 C++ 中"只是不 `delete`
///   成员指向的对象、成员本身照常析构"的含义不同，因此默认值取 `true`。
/// - `capacity`: 预先为多少个数据节点分配存储，默认为 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub delete_at_end: bool,
    pub capacity: usize,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delete_at_end(mut self, delete_at_end: bool) -> Self {
        self.delete_at_end = delete_at_end;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        ListOptions {
            delete_at_end: true,
            capacity: 0,
        }
    }
}
