pub mod path_template;
pub mod query;
pub mod text;
