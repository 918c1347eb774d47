use cardforge::params::slugify;
use proptest::prelude::*;

proptest! {
    #[test]
    fn slugs_are_lowercase_alphanumeric_with_underscores(name in ".{0,64}") {
        let slug = slugify(&name);
        prop_assert!(!slug.is_empty());
        prop_assert!(
            slug.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_'),
            "bad slug {slug:?}"
        );
        prop_assert!(!slug.starts_with('_'));
        prop_assert!(!slug.ends_with('_'));
        prop_assert!(!slug.contains("__"));
    }

    #[test]
    fn slugify_is_idempotent(name in ".{0,64}") {
        let once = slugify(&name);
        prop_assert_eq!(slugify(&once), once.clone());
    }

    #[test]
    fn alphanumeric_names_survive_unchanged(name in "[a-z][a-z0-9]{0,31}") {
        prop_assert_eq!(slugify(&name), name);
    }

    #[test]
    fn whitespace_around_a_name_never_changes_its_slug(name in "[a-z ]{1,32}") {
        let padded = format!("  {name}\t");
        prop_assert_eq!(slugify(&padded), slugify(&name));
    }
}
