pub mod locate;

pub use locate::{execute_locate, render};
