pub mod lifecycle;
pub mod pointer;

pub use lifecycle::wire_lifecycle;
pub use pointer::wire_pointer;
