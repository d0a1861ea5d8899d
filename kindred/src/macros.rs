// `Bound<Bound<F, A>, B>` for a list of bound argument types
macro_rules! nested_bound {
    ($f:ty ;) => { $f };
    ($f:ty ; $head:ident $(, $tail:ident)*) => {
        nested_bound!(Bound<$f, $head> ; $($tail),*)
    };
}

macro_rules! bind_all {
    ($f:expr ;) => { $f };
    ($f:expr ; $head:ident $(, $tail:ident)*) => {
        bind_all!(Bound { f: $f, head: $head } ; $($tail),*)
    };
}
