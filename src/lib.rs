pub mod bridge;
pub mod context;
pub mod dispatch;
pub mod intent;
pub mod pipeline;
pub mod selector;
pub mod services;
pub mod speech;
pub mod store;
pub mod transcript;
pub mod ui;

// Re-export the entry point for convenient access
pub use pipeline::VoicePipeline;
