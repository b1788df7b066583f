//! Seller generation with contact details.

use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::Rng;

/// City identifiers sellers can be registered in.
///
/// BPS city codes: the five Jakarta administrative cities plus Malang,
/// Surabaya, Yogyakarta, Bandung, Padang, Bukittinggi, Balikpapan,
/// Samarinda, Makassar, and Denpasar.
pub const KOTA_IDS: [i32; 15] = [
    3171, 3172, 3173, 3174, 3175, 3573, 3578, 3471, 3273, 1371, 1375, 6471, 6472, 7371, 5171,
];

/// Generated seller data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedSeller {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub kota_id: i32,
}

/// Configuration for seller generation.
#[derive(Debug, Clone)]
pub struct SellerGenConfig {
    /// Valid city identifiers for a seller's registered location.
    pub kota_ids: Vec<i32>,
    /// Email domains for generated addresses.
    pub email_domains: Vec<String>,
}

impl Default for SellerGenConfig {
    fn default() -> Self {
        Self {
            kota_ids: KOTA_IDS.to_vec(),
            email_domains: vec![
                "gmail.com".to_string(),
                "yahoo.co.id".to_string(),
                "outlook.com".to_string(),
                "mail.com".to_string(),
            ],
        }
    }
}

/// Generates realistic seller rows for testing.
pub struct SellerGenerator {
    config: SellerGenConfig,
}

impl SellerGenerator {
    /// Creates a new seller generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: SellerGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: SellerGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single seller.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedSeller {
        let name: String = Name().fake_with_rng(rng);
        let phone_number: String = PhoneNumber().fake_with_rng(rng);
        let email = self.generate_email(&name, rng);
        let kota_id = self.config.kota_ids[rng.gen_range(0..self.config.kota_ids.len())];

        GeneratedSeller {
            name,
            phone_number,
            email,
            kota_id,
        }
    }

    /// Generates multiple sellers.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedSeller> {
        (0..count).map(|_| self.generate(rng)).collect()
    }

    /// Generates an email from a name.
    fn generate_email(&self, name: &str, rng: &mut impl Rng) -> String {
        let normalized: String = name
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == ' ')
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(".");

        let suffix: u32 = rng.gen_range(1..9999);
        let domain =
            &self.config.email_domains[rng.gen_range(0..self.config.email_domains.len())];

        format!("{normalized}{suffix}@{domain}")
    }
}

impl Default for SellerGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_seller() {
        let seller_gen = SellerGenerator::new();
        let mut rng = rand::thread_rng();
        let seller = seller_gen.generate(&mut rng);

        assert!(!seller.name.is_empty());
        assert!(!seller.phone_number.is_empty());
        assert!(seller.email.contains('@'));
    }

    #[test]
    fn test_kota_id_membership() {
        let seller_gen = SellerGenerator::new();
        let mut rng = rand::thread_rng();

        for seller in seller_gen.generate_batch(200, &mut rng) {
            assert!(KOTA_IDS.contains(&seller.kota_id));
        }
    }

    #[test]
    fn test_generate_batch() {
        let seller_gen = SellerGenerator::new();
        let mut rng = rand::thread_rng();
        let sellers = seller_gen.generate_batch(10, &mut rng);

        assert_eq!(sellers.len(), 10);
    }

    #[test]
    fn test_custom_kota_ids() {
        let seller_gen = SellerGenerator::with_config(SellerGenConfig {
            kota_ids: vec![3578],
            ..Default::default()
        });
        let mut rng = rand::thread_rng();

        for seller in seller_gen.generate_batch(20, &mut rng) {
            assert_eq!(seller.kota_id, 3578);
        }
    }
}
