/// Base URLs of the three backend services.
///
/// The demo deployment pins these to localhost ports 5001-5003; environment
/// variables override them so the generator can point at a remote stack.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub product_base: String,
    pub order_base: String,
    pub inventory_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            product_base: "http://localhost:5001".to_string(),
            order_base: "http://localhost:5002".to_string(),
            inventory_base: "http://localhost:5003".to_string(),
        }
    }
}

impl Endpoints {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            product_base: env_or("PRODUCT_SERVICE_URL", defaults.product_base),
            order_base: env_or("ORDER_SERVICE_URL", defaults.order_base),
            inventory_base: env_or("INVENTORY_SERVICE_URL", defaults.inventory_base),
        }
    }
}

fn env_or(name: &str, default: String) -> String {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_stack() {
        let endpoints = Endpoints::default();

        assert_eq!(endpoints.product_base, "http://localhost:5001");
        assert_eq!(endpoints.order_base, "http://localhost:5002");
        assert_eq!(endpoints.inventory_base, "http://localhost:5003");
    }
}
