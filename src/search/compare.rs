use std::cmp::Ordering;

/// A three-way ordering over `T`.
///
/// Implemented for [`NaturalOrder`], [`ReverseOrder`], [`CaseInsensitive`]
/// and any `Fn(&T, &T) -> Ordering`. The ordering must be consistent over
/// the searched window; nothing checks this.
pub trait Comparer<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparer<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The type's own `Ord` implementation. Used whenever no ordering is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparer<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts another ordering, for sequences sorted in descending order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder<C>(pub C);

impl<T, C> Comparer<T> for ReverseOrder<C>
where
    T: ?Sized,
    C: Comparer<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Orders strings by their Unicode lowercase form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitive;

impl<T: AsRef<str> + ?Sized> Comparer<T> for CaseInsensitive {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let a = a.as_ref().chars().flat_map(char::to_lowercase);
        let b = b.as_ref().chars().flat_map(char::to_lowercase);
        a.cmp(b)
    }
}

// Adapters binding the target, so the kernel only sees element -> Ordering.

pub(crate) fn direct<'a, T, C>(ordering: &'a C, target: &'a T) -> impl Fn(&T) -> Ordering + 'a
where
    C: Comparer<T>,
{
    move |element: &T| ordering.compare(element, target)
}

pub(crate) fn key_to_value<'a, T, K, F, C>(
    selector: &'a F,
    ordering: &'a C,
    key: &'a K,
) -> impl Fn(&T) -> Ordering + 'a
where
    F: Fn(&T) -> K,
    C: Comparer<K>,
{
    move |element: &T| ordering.compare(&selector(element), key)
}

/// Both sides go through the selector on every call; keys are not cached.
pub(crate) fn key_to_element<'a, T, K, F, C>(
    selector: &'a F,
    ordering: &'a C,
    target: &'a T,
) -> impl Fn(&T) -> Ordering + 'a
where
    F: Fn(&T) -> K,
    C: Comparer<K>,
{
    move |element: &T| ordering.compare(&selector(element), &selector(target))
}
