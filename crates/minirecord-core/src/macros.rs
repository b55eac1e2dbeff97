/// Builds an ordered [`Attributes`](crate::stmt::Attributes) map.
///
/// ```
/// use minirecord_core::attrs;
///
/// let attrs = attrs! { name: "Gizmo", owner_id: 1 };
/// assert_eq!(attrs.keys().collect::<Vec<_>>(), ["name", "owner_id"]);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::stmt::Attributes::new()
    };
    (
        $( $key:ident : $value:expr ),+ $(,)?
    ) => {{
        let mut attrs = $crate::stmt::Attributes::new();
        $( attrs.insert(stringify!($key), $value); )+
        attrs
    }};
}
