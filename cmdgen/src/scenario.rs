//! Named weighting profiles over [`CommandKind`]s.

use std::collections::BTreeMap;

use rand::Rng;
use rand_distr::Distribution;
use rand_distr::weighted::WeightedIndex;

use crate::command::CommandKind;
use crate::error::{Error, Result};

/// Built-in scenarios as `(name, [read0, write0, read1, write1, string])`.
const BUILTIN_SCENARIOS: [(&str, [u32; 5]); 3] = [
    ("variant", [20, 5, 20, 5, 50]),
    ("uniform", [20, 20, 20, 20, 20]),
    ("skewed", [5, 60, 5, 5, 25]),
];

/// A named, weighted distribution over command kinds.
#[derive(Clone, Debug)]
pub struct Scenario {
    name: String,
    weights: Vec<(CommandKind, u32)>,
    distribution: WeightedIndex<u32>,
}

impl Scenario {
    /// Creates a scenario from `(kind, weight)` pairs.
    ///
    /// Kinds that are not listed are never drawn. Fails if no kind is listed, a kind is listed
    /// twice, or a weight is zero.
    pub fn new(
        name: impl Into<String>,
        weights: impl IntoIterator<Item = (CommandKind, u32)>,
    ) -> Result<Self> {
        let name = name.into();
        let weights: Vec<_> = weights.into_iter().collect();
        let invalid = |reason: String| Error::InvalidWeights {
            scenario: name.clone(),
            reason,
        };

        if weights.is_empty() {
            return Err(invalid("no command kinds listed".into()));
        }
        for (i, (kind, weight)) in weights.iter().enumerate() {
            if *weight == 0 {
                return Err(invalid(format!("weight of `{kind}` must be positive")));
            }
            if weights[..i].iter().any(|(k, _)| k == kind) {
                return Err(invalid(format!("`{kind}` is listed more than once")));
            }
        }

        let distribution = WeightedIndex::new(weights.iter().map(|(_, weight)| *weight))
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            name,
            weights,
            distribution,
        })
    }

    /// Returns the built-in scenario with the given name.
    pub fn builtin(name: &str) -> Result<Self> {
        BUILTIN_SCENARIOS
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .map(|(name, weights)| Self::from_table(name, weights))
            .ok_or_else(|| Error::UnknownScenario {
                name: name.to_owned(),
                available: BUILTIN_SCENARIOS.iter().map(|(n, _)| n.to_string()).collect(),
            })
    }

    /// Builds a scenario from a row of the built-in table.
    fn from_table(name: &str, weights: &[u32; 5]) -> Self {
        Self::new(name, CommandKind::ALL.into_iter().zip(weights.iter().copied()))
            .expect("built-in scenario weights are positive and unique")
    }

    /// The name under which this scenario is selected.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw `(kind, weight)` pairs in the order they were defined.
    pub fn weights(&self) -> &[(CommandKind, u32)] {
        &self.weights
    }

    /// The weights normalized to probabilities, which sum to `1`.
    pub fn probabilities(&self) -> Vec<(CommandKind, f64)> {
        let total: u64 = self.weights.iter().map(|(_, w)| u64::from(*w)).sum();
        self.weights
            .iter()
            .map(|(kind, weight)| (*kind, f64::from(*weight) / total as f64))
            .collect()
    }

    /// Draws a single command kind according to the scenario's weights.
    pub fn sample_kind<R: Rng + ?Sized>(&self, rng: &mut R) -> CommandKind {
        self.weights[self.distribution.sample(rng)].0
    }
}

/// The scenarios that can be selected by name.
#[derive(Clone, Debug)]
pub struct ScenarioSet {
    scenarios: BTreeMap<String, Scenario>,
}

impl ScenarioSet {
    /// Creates a set containing only the built-in scenarios.
    pub fn builtin() -> Self {
        let scenarios = BUILTIN_SCENARIOS
            .iter()
            .map(|(name, weights)| (name.to_string(), Scenario::from_table(name, weights)))
            .collect();

        Self { scenarios }
    }

    /// Adds a scenario, returning the one it replaced if the name was already taken.
    pub fn insert(&mut self, scenario: Scenario) -> Option<Scenario> {
        self.scenarios.insert(scenario.name.clone(), scenario)
    }

    /// Looks up a scenario by name.
    pub fn get(&self, name: &str) -> Result<&Scenario> {
        self.scenarios
            .get(name)
            .ok_or_else(|| Error::UnknownScenario {
                name: name.to_owned(),
                available: self.names().map(str::to_owned).collect(),
            })
    }

    /// Names of all scenarios in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scenarios.keys().map(String::as_str)
    }
}

impl Default for ScenarioSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_weights() {
        let skewed = Scenario::builtin("skewed").unwrap();
        assert_eq!(
            skewed.weights(),
            &[
                (CommandKind::Read0, 5),
                (CommandKind::Write0, 60),
                (CommandKind::Read1, 5),
                (CommandKind::Write1, 5),
                (CommandKind::String, 25),
            ]
        );

        let variant = Scenario::builtin("variant").unwrap();
        assert_eq!(variant.weights()[4], (CommandKind::String, 50));
    }

    #[test]
    fn probabilities_sum_to_one() {
        for name in ScenarioSet::builtin().names() {
            let scenario = Scenario::builtin(name).unwrap();
            let total: f64 = scenario.probabilities().iter().map(|(_, p)| p).sum();
            assert!((total - 1.0).abs() < 1e-9, "{name}: {total}");
        }

        let uniform = Scenario::builtin("uniform").unwrap();
        assert!(uniform.probabilities().iter().all(|(_, p)| *p == 0.2));
    }

    #[test]
    fn unknown_scenario() {
        let err = Scenario::builtin("bogus").unwrap_err();
        assert!(matches!(err, Error::UnknownScenario { ref name, .. } if name == "bogus"));

        let mut set = ScenarioSet::builtin();
        set.insert(Scenario::new("reads", [(CommandKind::Read0, 1)]).unwrap());
        let err = set.get("bogus").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown scenario `bogus` (available: reads, skewed, uniform, variant)"
        );
    }

    #[test]
    fn rejects_invalid_weights() {
        let empty = Scenario::new("empty", []);
        assert!(matches!(empty, Err(Error::InvalidWeights { .. })));

        let zero = Scenario::new("zero", [(CommandKind::Read0, 1), (CommandKind::Write0, 0)]);
        assert!(matches!(zero, Err(Error::InvalidWeights { .. })));

        let duplicate = Scenario::new("dup", [(CommandKind::Read0, 1), (CommandKind::Read0, 2)]);
        assert!(matches!(duplicate, Err(Error::InvalidWeights { .. })));
    }

    #[test]
    fn insert_replaces_builtin() {
        let mut set = ScenarioSet::builtin();
        assert_eq!(set.names().collect::<Vec<_>>(), ["skewed", "uniform", "variant"]);

        let reads = Scenario::new("uniform", [(CommandKind::Read0, 1)]).unwrap();
        assert!(set.insert(reads).is_some());
        assert_eq!(set.get("uniform").unwrap().weights().len(), 1);
    }

    #[test]
    fn single_kind_always_drawn() {
        let scenario = Scenario::new("strings", [(CommandKind::String, 7)]).unwrap();
        let mut rng = rand::rng();
        for _ in 0..100 {
            assert_eq!(scenario.sample_kind(&mut rng), CommandKind::String);
        }
    }
}
