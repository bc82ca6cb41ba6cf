use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::RowVecError;

/// Default multiplier applied to every R/G/B ratio.
pub const DEFAULT_SCALE: f64 = 10.0;
/// Default vector file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "vector.txt";

/// Configuration for one image → row vector run.
///
/// # Fields
/// - `scale`  — multiplier applied to `R / G / B` so values are not too small
/// - `output` — path of the vector file; created or truncated
/// - `seed`   — fixes the sign flips when set; `None` draws from OS entropy
///
/// Every field has a default, so a JSON config only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VectorConfig {
    pub scale: f64,
    pub output: PathBuf,
    pub seed: Option<u64>,
}

impl Default for VectorConfig {
    fn default() -> Self {
        VectorConfig {
            scale: DEFAULT_SCALE,
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
        }
    }
}

impl VectorConfig {
    /// Deserializes and validates a config from a JSON file.
    pub fn load_json(path: &Path) -> Result<VectorConfig, RowVecError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: VectorConfig =
            serde_json::from_reader(reader).map_err(|source| RowVecError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RowVecError> {
        if !self.scale.is_finite() {
            return Err(RowVecError::InvalidConfig(format!(
                "scale must be finite, got {}",
                self.scale
            )));
        }
        Ok(())
    }

    /// Builds the RNG that decides each pixel's sign.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::io::Write;

    #[test]
    fn defaults_match_the_plain_invocation() {
        let config = VectorConfig::default();
        assert_eq!(config.scale, 10.0);
        assert_eq!(config.output, PathBuf::from("vector.txt"));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config: VectorConfig = serde_json::from_str(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.scale, DEFAULT_SCALE);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let parsed = serde_json::from_str::<VectorConfig>(r#"{ "scael": 2.0 }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn load_json_reports_the_offending_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = VectorConfig::load_json(file.path()).unwrap_err();
        match err {
            RowVecError::Config { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_finite_scale_is_invalid() {
        let config = VectorConfig { scale: f64::INFINITY, ..Default::default() };
        assert!(matches!(config.validate(), Err(RowVecError::InvalidConfig(_))));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = VectorConfig { seed: Some(42), ..Default::default() };
        let mut r1 = config.rng();
        let mut r2 = config.rng();
        let b: Vec<bool> = (0..32).map(|_| r1.gen_bool(0.5)).collect();
        let c: Vec<bool> = (0..32).map(|_| r2.gen_bool(0.5)).collect();
        assert_eq!(b, c);
    }
}
