use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    // 每个线程每个类型一个默认值，首次请求时构造并在进程生命周期内保留
    static DEFAULTS: RefCell<HashMap<TypeId, &'static dyn Any>> = RefCell::new(HashMap::new());
}

/// 获取类型 `T` 的默认值引用
///
/// 链表的 `*_or_default` 访问器在越界或链表为空时返回这里的引用，
/// 因为返回临时值的引用是不可能的。
///
/// 默认值按线程保存，所以 `Rc`、`Cell` 这类不能跨线程共享的类型同样可用；
/// 同一线程内对同一类型总是返回同一个引用。
/// `T::default()` 在表的借用之外调用，允许它本身再请求其他类型的默认值。
pub fn default_of<T>() -> &'static T
where
    T: Default + 'static,
{
    let key = TypeId::of::<T>();

    if let Some(value) = lookup::<T>(key) {
        return value;
    }

    let fresh = Box::new(T::default());
    let slot = DEFAULTS.with(|defaults| {
        *defaults
            .borrow_mut()
            .entry(key)
            .or_insert_with(|| -> &'static dyn Any { Box::leak(fresh) })
    });
    match slot.downcast_ref::<T>() {
        Some(value) => value,
        None => unreachable!("默认值表按 TypeId 存放"),
    }
}

fn lookup<T: 'static>(key: TypeId) -> Option<&'static T> {
    DEFAULTS.with(|defaults| {
        defaults
            .borrow()
            .get(&key)
            .copied()
            .and_then(|slot| slot.downcast_ref::<T>())
    })
}
