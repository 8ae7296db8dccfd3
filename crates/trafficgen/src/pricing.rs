use crate::config::GeneratorConfig;
use rand::Rng;
use shared::domain::requests::CreateProductRequest;

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Picks a name and description uniformly from the configured pools and draws
/// a price in `[price_min, price_min + price_span)` rounded to 2 decimals.
pub fn draw_product(config: &GeneratorConfig) -> CreateProductRequest {
    let mut rng = rand::rng();

    let name = config.product_names[rng.random_range(0..config.product_names.len())].clone();
    let description = config.descriptions[rng.random_range(0..config.descriptions.len())].clone();
    let price = round2(rng.random_range(config.price_min..config.price_min + config.price_span));

    CreateProductRequest {
        name,
        description,
        price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawn_prices_stay_in_range_with_two_decimals() {
        let config = GeneratorConfig::default();

        for _ in 0..1000 {
            let request = draw_product(&config);

            assert!(
                (20.0..=520.0).contains(&request.price),
                "price out of range: {}",
                request.price
            );

            let cents = request.price * 100.0;
            assert!(
                (cents - cents.round()).abs() < 1e-6,
                "price has sub-cent precision: {}",
                request.price
            );
        }
    }

    #[test]
    fn drawn_vocabulary_comes_from_the_pools() {
        let config = GeneratorConfig::default();

        for _ in 0..100 {
            let request = draw_product(&config);

            assert!(config.product_names.contains(&request.name));
            assert!(config.descriptions.contains(&request.description));
        }
    }

    #[test]
    fn round2_truncates_to_cents() {
        assert_eq!(round2(39.98000000001), 39.98);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(100.0), 100.0);
    }
}
