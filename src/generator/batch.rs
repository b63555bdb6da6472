//! Generate many unique usernames in one call.
//!
//! Name seeds are used first, in order; random names then fill the request.
//! Usernames already present in `existing_usernames`, or already produced
//! by this batch, are skipped.

use std::collections::HashSet;

use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info, warn};

use super::interpreter::render;
use super::seed::SeedName;
use crate::entropy::{DigitSource, Entropy, NameSource};
use crate::error::{BatchError, GenerateError, RequestError};
use crate::parser::Scheme;

/// Random-name attempts allowed per requested username when
/// `max_attempts` is not set.
pub const ATTEMPTS_PER_USERNAME: usize = 100;

const PREALLOCATE_LIMIT: usize = 1024;

/// Parameters for a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Number of new usernames to produce.
    pub number: usize,
    pub scheme: String,
    /// Names to derive usernames from before falling back to random names.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name_seeds: Vec<String>,
    /// Usernames that must not be produced again.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub existing_usernames: Vec<String>,
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
    /// Cap on random-name attempts before giving up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<usize>,
}

fn default_lowercase() -> bool {
    true
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl BatchRequest {
    pub fn new(number: usize, scheme: impl Into<String>) -> Self {
        BatchRequest {
            number,
            scheme: scheme.into(),
            name_seeds: Vec::new(),
            existing_usernames: Vec::new(),
            lowercase: true,
            max_attempts: None,
        }
    }

    /// Parse a request from JSON.
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        serde_json::from_str(json).map_err(|e| RequestError::Parse { message: e.to_string() })
    }

    /// Random-name attempts allowed for this request.
    pub fn attempt_budget(&self) -> usize {
        self.max_attempts
            .unwrap_or_else(|| self.number.max(1).saturating_mul(ATTEMPTS_PER_USERNAME))
    }
}

/// Outcome of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Always false: generation touches no state.
    pub changed: bool,
    pub msg: String,
    /// New usernames, in the order they were produced.
    pub usernames: Vec<String>,
}

/// Generate `request.number` new usernames.
pub fn generate_usernames(request: &BatchRequest) -> Result<BatchReport, BatchError> {
    generate_usernames_with(request, &mut Entropy::thread())
}

/// [`generate_usernames`] drawing names and digits from `entropy`.
pub fn generate_usernames_with<E>(request: &BatchRequest, entropy: &mut E) -> Result<BatchReport, BatchError>
where
    E: DigitSource + NameSource + ?Sized,
{
    let scheme = Scheme::parse(&request.scheme).map_err(|source| GenerateError::InvalidScheme {
        scheme: request.scheme.clone(),
        source,
    })?;
    if scheme.is_empty() {
        warn!("Scheme is empty. Output will always be empty.");
    }
    debug!(scheme = %scheme, requested = request.number, "Username scheme is valid");

    let mut batch = Batch {
        existing: request.existing_usernames.iter().map(String::as_str).collect(),
        generated: IndexSet::with_capacity(request.number.min(PREALLOCATE_LIMIT)),
        requested: request.number,
    };

    for seed in &request.name_seeds {
        if batch.is_full() {
            break;
        }
        let (first, last) = SeedName::parse(seed).resolve(entropy);
        let username = render(&scheme, &first, &last, request.lowercase, entropy)?;
        batch.offer(username);
    }

    let budget = request.attempt_budget();
    let mut attempts = 0;
    while !batch.is_full() {
        if attempts >= budget {
            return Err(BatchError::Exhausted {
                requested: batch.requested,
                generated: batch.generated.len(),
                attempts,
            });
        }
        attempts += 1;

        let (first, last) = entropy.full_name();
        let username = render(&scheme, &first, &last, request.lowercase, entropy)?;
        batch.offer(username);
    }

    let usernames: Vec<String> = batch.generated.into_iter().collect();
    info!(count = usernames.len(), random_attempts = attempts, "Generated usernames");

    Ok(BatchReport {
        changed: false,
        msg: format!("Generated {} usernames", usernames.len()),
        usernames,
    })
}

struct Batch<'a> {
    existing: HashSet<&'a str>,
    generated: IndexSet<String>,
    requested: usize,
}

impl Batch<'_> {
    fn is_full(&self) -> bool {
        self.generated.len() >= self.requested
    }

    fn offer(&mut self, username: String) {
        if self.existing.contains(username.as_str()) {
            debug!(username = %username, "Skipping existing username");
        } else if self.generated.contains(&username) {
            debug!(username = %username, "Skipping duplicate username");
        } else {
            debug!(username = %username, "Accepted username");
            self.generated.insert(username);
        }
    }
}
