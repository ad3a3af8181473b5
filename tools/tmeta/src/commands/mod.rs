pub mod schema;
pub mod type_cmd;
