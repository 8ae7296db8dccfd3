mod endpoints;

pub use self::endpoints::Endpoints;
