use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{run_script, JaggedError, Matrix};

/// Table-driven cases, as kept in `tests/*.toml`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunList {
    pub runs: Vec<Run>,
}

/// A script run against a starting matrix, and either the matrix it should produce or
/// the message of the error it should fail with.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Run {
    pub name: String,
    pub matrix: Matrix<i64>,
    pub script: String,
    #[serde(default)]
    pub expected: Option<Matrix<i64>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl RunList {
    pub fn open(content: impl AsRef<str>) -> Result<Self> {
        Ok(toml::from_str(content.as_ref())?)
    }
}

impl Run {
    pub fn check(&self) -> Result<()> {
        let result = run_script(&self.matrix, &self.script);
        debug!("{}: {:?}", self.name, result);

        match (&self.expected, &self.error, result) {
            (Some(expected), None, Ok(got)) if &got == expected => Ok(()),
            (Some(expected), None, Ok(got)) => {
                bail!("incorrect matrix, we got {got:?}, they expect {expected:?}")
            }
            (Some(_), None, Err(e)) => Err(e).context("expected a matrix"),
            (None, Some(message), Err(e)) => {
                let root = JaggedError::extract(&e)
                    .ok_or_else(|| anyhow!("not a matrix error: {e:?}"))?;
                if root.to_string() != *message {
                    bail!("incorrect error, we got {root:?}, they expect {message:?}");
                }
                Ok(())
            }
            (None, Some(message), Ok(got)) => {
                bail!("expected failure {message:?}, got {got:?}")
            }
            _ => bail!("a run needs exactly one of `expected` and `error`"),
        }
    }
}
