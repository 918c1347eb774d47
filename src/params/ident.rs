use rand::Rng;
use rand::distributions::Alphanumeric;
use uuid::Uuid;

/// Card parameter IDs are UUIDv4 strings.
#[must_use]
pub fn new_card_parameter_id() -> String {
    Uuid::new_v4().to_string()
}

/// Dashboard parameter IDs are 8 random alphanumeric characters.
pub fn new_dashboard_parameter_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..8).map(|_| rng.sample(Alphanumeric) as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_ids_are_eight_alphanumeric_chars() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let id = new_dashboard_parameter_id(&mut rng);
            assert_eq!(id.len(), 8);
            assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn card_ids_parse_as_uuids() {
        let id = new_card_parameter_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
