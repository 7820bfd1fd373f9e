#![no_std]

extern crate alloc;

#[cfg(test)]
mod tests;

mod vec_like;
pub use vec_like::*;

mod list;
pub use list::*;
