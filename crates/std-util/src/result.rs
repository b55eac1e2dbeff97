#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => {
                use std::fmt::Write;
                let mut msg = format!("expected `Err`; actual={:?}", actual);

                $(
                    write!(msg, ", ").unwrap();
                    write!(msg, $($t)*).unwrap();
                )?

                panic!("{}", msg);
            }
        }
    };
}

/// Unwraps an `Err` and checks it with one of the error's `is_*` predicates.
///
/// ```ignore
/// assert_err_is!(Cat::new(attrs), is_unknown_attribute);
/// ```
#[macro_export]
macro_rules! assert_err_is {
    ($e:expr, $predicate:ident) => {{
        let err = $crate::assert_err!($e);
        assert!(
            err.$predicate(),
            "expected error matching `{}`; actual={}",
            stringify!($predicate),
            err
        );
        err
    }};
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(err) => panic!("expected `Ok`; actual=Err({})", err),
        }
    };
}
