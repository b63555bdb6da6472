use super::interpreter::generate_with;
use crate::entropy::{DigitSource, Entropy, NameSource};
use crate::error::GenerateError;

/// A free-form name split into the parts a scheme uses.
///
/// Names are read as First, Middle..., Last:
///
/// - `""` → no first, no last
/// - `"John"` → first "John", no last
/// - `"John Smith"`, `"John Adam Smith"`, `"John Quincy Adam Smith"` → first "John", last "Smith"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedName {
    first: Option<String>,
    last: Option<String>,
}

impl SeedName {
    /// Split `seed` on whitespace, keeping the first and last tokens.
    pub fn parse(seed: &str) -> Self {
        let tokens: Vec<&str> = seed.split_whitespace().collect();
        match tokens.as_slice() {
            [] => SeedName::default(),
            [first] => SeedName {
                first: Some(first.to_string()),
                last: None,
            },
            [first, .., last] => SeedName {
                first: Some(first.to_string()),
                last: Some(last.to_string()),
            },
        }
    }

    /// Fill in missing parts from `names`.
    ///
    /// With no first name, both parts are drawn together so the pair
    /// reads as one person.
    pub fn resolve<N>(self, names: &mut N) -> (String, String)
    where
        N: NameSource + ?Sized,
    {
        match (self.first, self.last) {
            (Some(first), Some(last)) => (first, last),
            (Some(first), None) => (first, names.last_name()),
            (None, _) => names.full_name(),
        }
    }
}

/// Generate a username from a free-form name seed.
///
/// Missing name parts are filled with random names; see [`SeedName`].
pub fn resolve_and_generate(seed: &str, scheme: &str, lowercase: bool) -> Result<String, GenerateError> {
    resolve_and_generate_with(seed, scheme, lowercase, &mut Entropy::thread())
}

/// [`resolve_and_generate`] drawing names and digits from `entropy`.
pub fn resolve_and_generate_with<E>(
    seed: &str,
    scheme: &str,
    lowercase: bool,
    entropy: &mut E,
) -> Result<String, GenerateError>
where
    E: DigitSource + NameSource + ?Sized,
{
    let (first, last) = SeedName::parse(seed).resolve(entropy);
    generate_with(&first, &last, scheme, lowercase, entropy)
}
