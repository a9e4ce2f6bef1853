mod float;
mod macros;
