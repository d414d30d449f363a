#[cfg(feature = "tracing")]
macro_rules! fdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "filmstrip_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! fdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! finfo {
    ($($tt:tt)*) => {
        tracing::info!(target: "filmstrip_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! finfo {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! fwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "filmstrip_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! fwarn {
    ($($tt:tt)*) => {};
}
