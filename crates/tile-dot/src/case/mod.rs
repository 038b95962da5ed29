//! YAML case files: named operand pairs with the result each must produce.

mod parser;
mod runner;
mod types;
mod validator;

pub use parser::{parse_cases, parse_cases_str};
pub use runner::{compare_backends, evaluate_all, evaluate_case, CaseOutcome, ParityRow};
pub use types::*;
pub use validator::validate_cases;
