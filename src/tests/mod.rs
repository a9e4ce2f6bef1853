
#[cfg(feature = "std")]
mod stream;
