//! Atomic fake values behind a narrow, seedable interface.

use fake::Fake;
use fake::faker::address::en::CityName;
use fake::faker::company::en::{BsNoun, BsVerb};
use fake::faker::internet::en::DomainSuffix;
use fake::faker::job::en::Title as JobTitle;
use fake::faker::name::en::{FirstName, LastName};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of the atomic values the field generators are built from.
///
/// Implementations own their random stream; callers draw values in a fixed
/// order so a seeded provider yields the same sequence on every run.
pub trait FakeProvider {
    fn first_name(&mut self) -> String;
    fn last_name(&mut self) -> String;
    fn middle_name(&mut self) -> String;
    fn domain_name(&mut self) -> String;
    fn city(&mut self) -> String;
    fn job_title(&mut self) -> String;
    /// Integer in `[min, max]`, both ends inclusive.
    fn number(&mut self, min: i64, max: i64) -> i64;
}

/// Provider backed by the `fake` crate's English fakers and a seeded ChaCha stream.
#[derive(Debug, Clone)]
pub struct FakeRsProvider {
    rng: ChaCha8Rng,
}

impl FakeRsProvider {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl FakeProvider for FakeRsProvider {
    fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    // no dedicated middle-name faker upstream
    fn middle_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    fn domain_name(&mut self) -> String {
        let verb: String = BsVerb().fake_with_rng(&mut self.rng);
        let noun: String = BsNoun().fake_with_rng(&mut self.rng);
        let suffix: String = DomainSuffix().fake_with_rng(&mut self.rng);
        let label: String = verb
            .chars()
            .chain(noun.chars())
            .filter(char::is_ascii_alphanumeric)
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        format!("{label}.{suffix}")
    }

    fn city(&mut self) -> String {
        CityName().fake_with_rng(&mut self.rng)
    }

    fn job_title(&mut self) -> String {
        JobTitle().fake_with_rng(&mut self.rng)
    }

    fn number(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }
}
