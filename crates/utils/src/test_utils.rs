/// makes sure traits are implemented
///
/// ```ignore
/// assert_trait!(bag_is_sendable; Bag<u8>; Send, Sync);
/// ```
/// expands to a `#[test]` that only compiles if every bound holds.
#[macro_export]
macro_rules! assert_trait {
    ($name:ident; $to_test:ty; $($trait:ident),*) => {
        $crate::paste::paste! {
            #[cfg(test)]
            #[test]
            #[allow(elided_lifetimes_in_paths)]
            fn [<$name:snake>]() {
                $(
                fn [<is_$trait:snake>]<T: $trait>() {}
                )*
                $([<is_$trait:snake>]::<$to_test>();)*
            }
        }
    };
}

/// make sure a type is covariant in its first lifetime. [read more](https://doc.rust-lang.org/reference/subtyping.html)
///
/// The remaining type parameters must be given, e.g. `assert_covariant!(Iter<u8>)`.
#[macro_export]
macro_rules! assert_covariant {
    ($name:ident<$($arg:ty),*>) => {
        $crate::paste::paste! {
            #[cfg(test)]
            #[allow(dead_code)]
            fn [<_enlarge_$name:snake>]<'long, 'short>(
                q: $name<'long, $($arg),*>,
            ) -> $name<'short, $($arg),*>
            where
                'long: 'short,
            {
                q
            }
        }
    };
}

#[cfg(test)]
mod tests {
    struct Holder<'a, T>(&'a T);

    crate::assert_trait!(vec_is_clone_and_send; Vec<u8>; Clone, Send);
    crate::assert_covariant!(Holder<u8>);

    #[test]
    fn covariant_holder_shortens() {
        let x = 3u8;
        let h = _enlarge_holder(Holder(&x));
        assert_eq!(*h.0, 3);
    }
}
