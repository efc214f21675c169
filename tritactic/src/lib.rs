pub use board::*;
pub use errors::*;
pub use marks::*;
pub use selector::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod marks;
mod selector;
mod visualization;
