use serde::Serialize;

use crate::api::types::Outcome;

/// One displayed term of the simplified Drake equation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DrakeTerm {
    pub symbol: &'static str,
    pub label: &'static str,
    pub value: f64,
}

/// The displayed terms. Their product is the expected answer.
pub const TERMS: [DrakeTerm; 7] = [
    DrakeTerm { symbol: "R*", label: "stars formed per year", value: 10.0 },
    DrakeTerm { symbol: "fp", label: "fraction with planets", value: 0.5 },
    DrakeTerm { symbol: "ne", label: "habitable planets per system", value: 2.0 },
    DrakeTerm { symbol: "fl", label: "fraction that develop life", value: 1.0 },
    DrakeTerm { symbol: "fi", label: "fraction that develop intelligence", value: 0.1 },
    DrakeTerm { symbol: "fc", label: "fraction that develop communication", value: 0.1 },
    DrakeTerm { symbol: "L", label: "years civilizations communicate", value: 10000.0 },
];

pub fn expected() -> f64 {
    TERMS.iter().map(|term| term.value).product()
}

/// Judge a numeric answer against the product of the displayed terms.
/// Unparseable input is a plain miss, never an error.
pub fn check_answer(input: &str) -> Outcome {
    match input.trim().parse::<f64>() {
        // Tolerance absorbs the float product of the fractional terms.
        Ok(answer) if (answer - expected()).abs() < 1e-9 => Outcome::Success,
        _ => Outcome::Failure,
    }
}
