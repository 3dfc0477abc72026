pub mod decode;
pub mod encode;
pub mod inspect;

pub use decode::*;
pub use encode::*;
pub use inspect::*;
