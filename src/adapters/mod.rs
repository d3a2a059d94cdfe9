// Adapters layer: concrete implementations of the domain ports (generative
// client, persistence, file-based imports).

pub mod openai;
pub mod progress_csv;
pub mod store;

pub use openai::OpenAiClient;
pub use store::MemoryStore;
