//! Logging macros over the default logger
//!
//! `info!`, `warn!` and `error!` join their arguments with spaces using
//! `Display`; the `f` variants take a `format!` string. All of them record the
//! calling file, line and function.

/// Path of the enclosing function, e.g. `my_app::db::open`
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        &name[..name.len() - 3]
    }};
}

/// [`CallSite`](crate::CallSite) of the macro invocation
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(::std::file!(), ::std::line!(), $crate::function_name!())
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __spaced {
    ($level:expr $(, $arg:expr)*) => {
        $crate::global::emit(
            $level,
            $crate::call_site!(),
            &$crate::Spaced(&[$(&$arg as &dyn ::std::fmt::Display),*]),
        )
    };
}

/// Blue line with space-joined arguments
#[macro_export]
macro_rules! info {
    ($($arg:expr),* $(,)?) => {
        $crate::__spaced!($crate::Level::Info $(, $arg)*)
    };
}

/// Yellow line with space-joined arguments
#[macro_export]
macro_rules! warn {
    ($($arg:expr),* $(,)?) => {
        $crate::__spaced!($crate::Level::Warn $(, $arg)*)
    };
}

/// Red line with space-joined arguments
#[macro_export]
macro_rules! error {
    ($($arg:expr),* $(,)?) => {
        $crate::__spaced!($crate::Level::Error $(, $arg)*)
    };
}

/// Blue line with a `format!`-style message
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::global::emit($crate::Level::Info, $crate::call_site!(), &::std::format_args!($($arg)+))
    };
}

/// Yellow line with a `format!`-style message
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::global::emit($crate::Level::Warn, $crate::call_site!(), &::std::format_args!($($arg)+))
    };
}

/// Red line with a `format!`-style message
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::global::emit($crate::Level::Error, $crate::call_site!(), &::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_function_name() {
        assert_eq!(
            crate::function_name!(),
            "devlog::macros::tests::test_function_name"
        );
    }

    #[test]
    fn test_call_site() {
        let line = line!() + 1;
        let site = crate::call_site!();
        assert_eq!(site.line, line);
        assert!(site.file.ends_with("macros.rs"));
        assert!(site.function.ends_with("test_call_site"));
    }
}
