pub trait Apply {
    /// Passes `self` through the function `f`.
    fn apply(self, f: impl FnOnce(Self) -> Self) -> Self
    where
        Self: Sized,
    {
        f(self)
    }

    /// Applies the function `f` only if `value` is `Some(...)` and provides the
    /// contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use portfolio_utils::Apply;
    /// fn greet(name: Option<&str>) -> String {
    ///     String::from("Hello").apply_map(name, |s, name| format!("{s}, {name}"))
    /// }
    /// assert_eq!(greet(None), "Hello");
    /// assert_eq!(greet(Some("Jane")), "Hello, Jane");
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        match value {
            Some(value) => f(self, value),
            None => self,
        }
    }
}

impl<T> Apply for T {}
