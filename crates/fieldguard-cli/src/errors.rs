use fieldguard_core::RuleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{record} rejected: {source}")]
    Rejected {
        record: String,
        #[source]
        source: RuleError,
    },
}
