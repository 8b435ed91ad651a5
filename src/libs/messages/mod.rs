pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

// Convenience functions for banner text
pub fn error(msg: Message) -> String {
    format!("❌ {}", msg)
}
