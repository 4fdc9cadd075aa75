// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Primers: the table, its wire encoding, and tag resolution.

pub mod codec;
pub mod resolve;
pub mod shared;
pub mod table;

// Re-exports for convenience
pub use codec::Decoded;
pub use codec::decode;
pub use codec::encode;
pub use codec::encode_value;
pub use codec::read_block;
pub use shared::SharedPrimer;
pub use shared::static_lookup;
pub use shared::static_primer;
pub use table::Primer;
pub use table::PrimerConfig;
pub use table::Tag;
