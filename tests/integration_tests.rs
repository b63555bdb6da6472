/// Integration tests for scheme validation and username generation.
///
/// The scheme tables mirror the account-generation module's test suite.
use regex::Regex;
use rstest::rstest;
use username_scheme::entropy::{DigitSource, Entropy, NameSource};
use username_scheme::generator::{
    generate, generate_usernames, generate_usernames_with, generate_with, resolve_and_generate,
    resolve_and_generate_with, BatchRequest,
};
use username_scheme::{validate, BatchError, GenerateError};

const VALID_SCHEMES: &[&str] = &[
    r"\f.\l+",
    r"\f\l+",
    r"\f\l+\d",
    r"\f\f.\l+",
    r"\f\f\l+",
    r"\f\f\l+\d\d\d",
    "",
    r"\f",
    "static",
    r"\f*\l?",
    "elf+",
    r"\ff+",
    r"\df+",
    r"\f.l+",
];

const INVALID_SCHEMES: &[(&str, &str)] = &[
    (r"\", "missing meta character after backslash"),
    (r"\o", "invalid meta character 'o'"),
    (r"\d+", "invalid quantifier '+' placement"),
    ("+", "quantifier '+' placed at the beginning of the scheme"),
    (r"\f\", "trailing backslash"),
    (r"\\", "doubled backslash"),
    (r"\l++", "double quantifier"),
    (r"a+", "quantifier after a literal"),
    (r"\dd+", "quantifier after a literal digit letter"),
    ("elf++", "quantifier after a quantifier"),
];

fn full_match(pattern: &str, text: &str) -> bool {
    Regex::new(&format!("^(?:{})$", pattern)).unwrap().is_match(text)
}

mod validation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_schemes() {
        for scheme in VALID_SCHEMES {
            assert!(validate(scheme), "expected valid: {}", scheme);
        }
    }

    #[test]
    fn test_invalid_schemes() {
        for (scheme, reason) in INVALID_SCHEMES {
            assert!(!validate(scheme), "expected invalid ({}): {}", reason, scheme);
        }
    }

    #[test]
    fn test_accepted_schemes_generate() {
        for scheme in VALID_SCHEMES {
            let result = generate("John", "Smith", scheme, true);
            assert!(result.is_ok(), "{}: {:?}", scheme, result.err());
        }
    }

    #[test]
    fn test_rejected_schemes_raise_invalid_scheme() {
        for (scheme, reason) in INVALID_SCHEMES {
            match generate("John", "Smith", scheme, true) {
                Err(GenerateError::InvalidScheme { scheme: rejected, .. }) => assert_eq!(rejected, *scheme),
                other => panic!("expected InvalidScheme for {} ({}), got {:?}", scheme, reason, other),
            }
        }
    }
}

mod generation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case(r"\f.\l+", "j.smith")]
    #[case(r"\f+\l", "johns")]
    #[case(r"\f\f\f\f\f", "john")]
    #[case(r"\l+\f", "smithj")]
    #[case("elf+", "elf+")]
    #[case(r"\ff+", "jf+")]
    fn test_known_outputs(#[case] scheme: &str, #[case] expected: &str) {
        assert_eq!(generate("John", "Smith", scheme, true).unwrap(), expected);
    }

    #[rstest]
    #[case(r"\f\d", r"j\d")]
    #[case(r"\f\d\d", r"j\d\d")]
    #[case(r"\f\d\d\d", r"j\d\d\d")]
    #[case(r"\d\f", r"\dj")]
    #[case(r"\f.\l+\d", r"j\.smith\d")]
    #[case(r"\f.\l+\l\d", r"j\.smith\d")]
    fn test_digit_schemes(#[case] scheme: &str, #[case] pattern: &str) {
        let username = generate("John", "Smith", scheme, true).unwrap();
        assert!(full_match(pattern, &username), "{} -> {}", scheme, username);
    }

    #[test]
    fn test_missing_names() {
        assert_eq!(generate("", "Smith", r"\f.\l+", true), Err(GenerateError::EmptyName));
        assert_eq!(generate("John", "", r"\f.\l+", true), Err(GenerateError::EmptyName));
        assert_eq!(
            generate("", "Smith", r"\f.\l+", true).unwrap_err().to_string(),
            "first name and last name must not be empty"
        );
    }

    #[test]
    fn test_empty_scheme_yields_empty_username() {
        assert_eq!(generate("John", "Smith", "", true).unwrap(), "");
    }

    #[test]
    fn test_case_fold_property() {
        let schemes = [r"\f.\l+", r"Ops-\f+\d\l", r"\l\l\l_\d\d", "CONST"];
        let names = [("John", "Smith"), ("ADA", "Lovelace"), ("Zoë", "ÅSTRÖM")];
        for scheme in schemes {
            for (seed, (first, last)) in names.iter().enumerate() {
                let folded = generate_with(first, last, scheme, true, &mut Entropy::seeded(seed as u64)).unwrap();
                let kept = generate_with(first, last, scheme, false, &mut Entropy::seeded(seed as u64)).unwrap();
                assert_eq!(folded, kept.to_lowercase());
            }
        }
    }
}

mod seeded {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCHEMES: &[&str] = &[r"\f.\l+", r"\f+.\l", r"\f.\l\l\l\d\d", r"\f\l+\d\d\d"];

    fn check_all(seed: &str, patterns: &[&str]) {
        for (scheme, pattern) in SCHEMES.iter().zip(patterns) {
            let username = resolve_and_generate(seed, scheme, true).unwrap();
            assert!(full_match(pattern, &username), "{:?} {} -> {}", seed, scheme, username);
        }
    }

    #[test]
    fn test_empty_seed_draws_random_names() {
        for seed in ["", " ", "   "] {
            for scheme in SCHEMES {
                let username = resolve_and_generate(seed, scheme, true).unwrap();
                assert!(!username.is_empty());
                assert_eq!(username, username.to_lowercase());
            }
        }
    }

    #[test]
    fn test_first_only() {
        let username = resolve_and_generate("John", r"\f+.\l", true).unwrap();
        assert!(username.starts_with("john."), "{}", username);
        assert_eq!(username.chars().count(), "john.".len() + 1);
    }

    #[test]
    fn test_first_and_last() {
        check_all("John Smith", &["j.smith", r"john\.s", r"j\.smi\d\d", r"jsmith\d\d\d"]);
    }

    #[test]
    fn test_first_middle_and_last() {
        check_all("John Adam Smith", &["j.smith", r"john\.s", r"j\.smi\d\d", r"jsmith\d\d\d"]);
    }

    #[test]
    fn test_more_than_first_middle_and_last() {
        check_all("John Quincy Adam Smith", &["j.smith", r"john\.s", r"j\.smi\d\d", r"jsmith\d\d\d"]);
    }

    #[test]
    fn test_seeded_entropy_is_reproducible() {
        let a = resolve_and_generate_with("", r"\f+.\l+\d", true, &mut Entropy::seeded(9)).unwrap();
        let b = resolve_and_generate_with("", r"\f+.\l+\d", true, &mut Entropy::seeded(9)).unwrap();
        assert_eq!(a, b);
    }
}

mod batch {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Gives every random person a distinct last name.
    struct Numbered(usize);

    impl DigitSource for Numbered {
        fn digit(&mut self) -> u8 {
            0
        }
    }

    impl NameSource for Numbered {
        fn first_name(&mut self) -> String {
            "Pat".to_string()
        }

        fn last_name(&mut self) -> String {
            self.0 += 1;
            format!("Doe{}", self.0)
        }
    }

    #[test]
    fn test_module_style_request() {
        let request = BatchRequest::from_json(
            r#"{
                "number": 4,
                "scheme": "\\f.\\l+",
                "name_seeds": ["John Smith", "Ada Lovelace"],
                "existing_usernames": ["a.lovelace"]
            }"#,
        )
        .unwrap();

        let report = generate_usernames_with(&request, &mut Numbered(0)).unwrap();
        assert_eq!(report.usernames, vec!["j.smith", "p.doe1", "p.doe2", "p.doe3"]);
        assert_eq!(report.msg, "Generated 4 usernames");
    }

    #[test]
    fn test_random_batch_is_unique_and_new() {
        let mut request = BatchRequest::new(25, r"\f\l+\d\d");
        request.existing_usernames = vec!["jsmith00".to_string()];

        let report = generate_usernames(&request).unwrap();
        assert_eq!(report.usernames.len(), 25);
        let unique: std::collections::HashSet<_> = report.usernames.iter().collect();
        assert_eq!(unique.len(), 25);
        assert!(!report.usernames.contains(&"jsmith00".to_string()));
    }

    #[test]
    fn test_unsatisfiable_request_stops() {
        let mut request = BatchRequest::new(11, r"\d");
        request.max_attempts = Some(500);
        let err = generate_usernames(&request).unwrap_err();
        assert!(matches!(err, BatchError::Exhausted { requested: 11, generated: 10, attempts: 500 }));
    }
}
