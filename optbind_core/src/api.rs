mod bindable;
mod options;
mod schema;
mod spec;
mod values;

pub use bindable::*;
pub use options::*;
pub use schema::*;
pub use spec::*;
pub use values::*;
