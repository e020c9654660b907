pub use board::*;
pub use colour::*;
pub use errors::*;
pub use victory::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod colour;
mod errors;
mod victory;
mod visualization;
