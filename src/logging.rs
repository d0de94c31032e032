//! Logging shims that compile to nothing unless the `logging` feature is on.

#![allow(unused_macros)]

macro_rules! debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::debug!($($arg)+);
    };
}

macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::trace!($($arg)+);
    };
}
