use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Parameters of a DBSCAN run.
///
/// Values are not checked on assignment; [`Config::validate`] runs at the
/// start of every clustering run.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// The radius of a neighborhood.
    pub eps: f64,

    /// The minimum number of points, including the point itself, required to
    /// form a dense region.
    pub min_points: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            eps: 1.,
            min_points: 2,
        }
    }
}

impl Config {
    #[must_use]
    pub fn new(eps: f64, min_points: usize) -> Self {
        Self { eps, min_points }
    }

    /// Checks `eps` first, then `min_points`, and reports the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.eps < 0. {
            return Err(Error::NegativeDistance { eps: self.eps });
        }
        if self.min_points < 2 {
            return Err(Error::TooFewMembers {
                min_points: self.min_points,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config, Config::new(1., 2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn boundaries() {
        assert!(Config::new(0., 2).validate().is_ok());
        assert_eq!(
            Config::new(-0.5, 2).validate(),
            Err(Error::NegativeDistance { eps: -0.5 })
        );
        assert_eq!(
            Config::new(1., 1).validate(),
            Err(Error::TooFewMembers { min_points: 1 })
        );
    }

    #[test]
    fn distance_checked_before_members() {
        assert_eq!(
            Config::new(-1., 0).validate(),
            Err(Error::NegativeDistance { eps: -1. })
        );
    }

    #[test]
    fn partial_document() {
        let config: Config = serde_json::from_str(r#"{"eps": 2.5}"#).unwrap();
        assert_eq!(config, Config::new(2.5, 2));

        let config: Config = serde_json::from_str(r#"{"min_points": 5}"#).unwrap();
        assert_eq!(config, Config::new(1., 5));
    }
}
