pub mod abstract_trait;
pub mod rest_client;
