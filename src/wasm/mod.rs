mod address;
mod constants;
mod explorer;
mod labeler;

pub use address::WasmAddress;
pub use explorer::ExplorerNamespace;
pub use labeler::WasmLabeler;

pub use constants::*;
