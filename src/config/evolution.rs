//! Evolutionary-algorithm parameter bundle.

use serde::Deserialize;

use crate::error::ConfigError;

/// Parameters for the strategy-evolution loop.
#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionConfig {
    /// Number of strategies per generation.
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    /// Number of generations per evolution run.
    #[serde(default = "default_generations")]
    pub generations: usize,
    /// Probability of mutating a gene.
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,
    /// Probability of crossover between parents.
    #[serde(default = "default_crossover_rate")]
    pub crossover_rate: f64,
    /// Strategies carried over unchanged each generation.
    #[serde(default = "default_elite_size")]
    pub elite_size: usize,
    /// Tournament selection pool size.
    #[serde(default = "default_tournament_size")]
    pub tournament_size: usize,
}

fn default_population_size() -> usize {
    50
}

fn default_generations() -> usize {
    100
}

fn default_mutation_rate() -> f64 {
    0.15
}

fn default_crossover_rate() -> f64 {
    0.7
}

fn default_elite_size() -> usize {
    5
}

fn default_tournament_size() -> usize {
    3
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: default_population_size(),
            generations: default_generations(),
            mutation_rate: default_mutation_rate(),
            crossover_rate: default_crossover_rate(),
            elite_size: default_elite_size(),
            tournament_size: default_tournament_size(),
        }
    }
}

impl EvolutionConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "population_size",
                reason: "must be greater than 0".to_string(),
            });
        }
        for (field, rate) in [
            ("mutation_rate", self.mutation_rate),
            ("crossover_rate", self.crossover_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be between 0 and 1".to_string(),
                });
            }
        }
        if self.elite_size >= self.population_size {
            return Err(ConfigError::InvalidValue {
                field: "elite_size",
                reason: "must be smaller than population_size".to_string(),
            });
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tournament_size",
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
