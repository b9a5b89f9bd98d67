/// Kotlin-style scope combinator for chaining transformations without
/// intermediate bindings.
pub trait LetAlso: Sized {
    /// Passes `self` by value to `f` and returns whatever `f` returns.
    fn let_owned<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<T> LetAlso for T {}
