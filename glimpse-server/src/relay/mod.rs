mod relay;
mod room;

pub use relay::*;
pub use room::*;
