mod replay;
mod schema;
mod validate;

pub use replay::replay;
pub use schema::show_schema;
pub use validate::validate;
