// This mimics the log crate so call sites need not check for the feature

macro_rules! trace {
    ($($args:tt)+) => {{
        #[cfg(feature = "logging")]
        _log::trace!($($args)+);
    }};
}
