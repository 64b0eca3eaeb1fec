use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyzerError, Result};

/// Analyzer settings, normally read from a TOML file.
///
/// Every field has a default, so an empty document is a valid config.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub page_rank: PageRankParameters,
    pub ranking: RankingParameters,
}

/// Parameters of the PageRank fixed-point iteration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageRankParameters {
    /// Probability that the surfer follows a link instead of teleporting.
    pub decay: f64,
    /// Iteration stops once no rank moves by more than this.
    pub epsilon: f64,
    /// Hard cap on iterations in case ranks never converge.
    pub limit: u32,
}

/// How relevance and page rank are blended into one score.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RankingParameters {
    pub relevance_weight: f64,
}

impl Default for PageRankParameters {
    fn default() -> Self {
        Self {
            decay: 0.85,
            epsilon: 0.0001,
            limit: 100,
        }
    }
}

impl Default for RankingParameters {
    fn default() -> Self {
        Self {
            relevance_weight: 0.7,
        }
    }
}

impl PageRankParameters {
    pub fn validate(&self) -> Result<()> {
        if !(self.decay > 0.0 && self.decay < 1.0) {
            return Err(AnalyzerError::InvalidParameter(format!(
                "decay must lie strictly between 0 and 1, got {}",
                self.decay
            )));
        }
        if self.epsilon.is_nan() || self.epsilon < 0.0 {
            return Err(AnalyzerError::InvalidParameter(format!(
                "epsilon must be non-negative, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}

impl RankingParameters {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.relevance_weight) {
            return Err(AnalyzerError::InvalidParameter(format!(
                "relevance_weight must lie in [0, 1], got {}",
                self.relevance_weight
            )));
        }
        Ok(())
    }
}

impl SearchConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SearchConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading search config");
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<()> {
        self.page_rank.validate()?;
        self.ranking.validate()
    }
}
