pub mod errors;
pub mod view;
