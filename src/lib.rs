//! Password auditing library
//!
//! Evaluates a password along two independent axes:
//!
//! - a deterministic strength score from composition rules, checked first
//!   against a common-password corpus;
//! - breach exposure, via a k-anonymity range query that reveals only the
//!   first 5 hex characters of the password's SHA-1.
//!
//! # Features
//!
//! - `async` (default): Enables the breach check and the combined audit
//! - `http` (default): HTTPS range source backed by reqwest
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_COMMON_PASSWORDS_PATH`: Custom path to the common-password corpus
//!   (default: `./assets/common_passwords.txt`)
//! - `PWD_BREACH_ENDPOINT`: Range endpoint
//!   (default: `https://api.pwnedpasswords.com/range`)
//! - `PWD_BREACH_TIMEOUT_MS`: Range query timeout (default: `5000`)
//! - `PWD_BREACH_PADDING`: `true` to request padded responses
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_audit::{evaluate_password_strength, BreachChecker, CorpusLoad};
//! use secrecy::SecretString;
//!
//! # async fn run() -> Result<(), pwd_audit::BreachError> {
//! // Missing corpus degrades to an empty set
//! let corpus = CorpusLoad::from_env();
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = evaluate_password_strength(&password, corpus.set());
//! println!("Strength: {} ({})", report.category, report.score);
//! for advice in report.messages() {
//!     println!("- {advice}");
//! }
//!
//! let checker = BreachChecker::from_env()?;
//! let count = checker.check_breach(&password).await?;
//! println!("Seen {count} times in breaches");
//! # Ok(())
//! # }
//! ```

// Internal modules
mod corpus;
mod evaluator;
mod report;
mod rules;

#[cfg(feature = "async")]
mod audit;
#[cfg(feature = "async")]
pub mod breach;

// Public API
pub use corpus::{common_passwords_path, CommonPasswordSet, CorpusError, CorpusLoad, COMMON_PASSWORDS_PATH_ENV};
pub use evaluator::evaluate_password_strength;
pub use report::{Feedback, ScoreReport, StrengthCategory};

#[cfg(feature = "async")]
pub use audit::{audit_password, audit_password_tx, AuditReport};
#[cfg(feature = "async")]
pub use breach::{BreachChecker, BreachConfig, BreachError, BreachResult, RangeSource, StaticRangeSource};
#[cfg(feature = "http")]
pub use breach::HttpRangeSource;
