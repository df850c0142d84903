mod billing;
mod dashboard;
mod help;
mod phrase;

pub use billing::*;
pub use dashboard::*;
pub use help::*;
pub use phrase::*;

pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// The terminal is the reply surface.
pub fn reply<T: Into<String>>(answer: T) {
    println!("{}", answer.into());
}
