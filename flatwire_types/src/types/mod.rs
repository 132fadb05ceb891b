mod record;
mod serializable;


pub use record::*;
pub use serializable::*;
