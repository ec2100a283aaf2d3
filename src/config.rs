use rand::Rng;

/// Version that gets a synthetic error injected on the root page.
pub const ERROR_VERSION: &str = "v3";

/// Probability of the synthetic error for [`ERROR_VERSION`].
pub const ERROR_PROBABILITY: f64 = 0.1;

const DEFAULT_VERSION: &str = "v1";

/// Background gradient per known version, with a fallback for anything else.
const GRADIENTS: &[(&str, &str)] = &[
    ("v1", "linear-gradient(135deg, #667eea 0%, #764ba2 100%)"),
    ("v2", "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)"),
    ("v3", "linear-gradient(135deg, #fa709a 0%, #fee140 100%)"),
];

const FALLBACK_GRADIENT: &str = "linear-gradient(135deg, #a8edea 0%, #fed6e3 100%)";

#[derive(Debug, Clone)]
pub struct Config {
    pub version: String,
}

impl Config {
    /// Reads `VERSION` from the environment. Unset or empty falls back to `v1`.
    pub fn from_env() -> Self {
        Self::new(std::env::var("VERSION").ok())
    }

    fn new(version: Option<String>) -> Self {
        let version = version
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());
        Config { version }
    }

    pub fn gradient(&self) -> &'static str {
        GRADIENTS
            .iter()
            .find(|(v, _)| *v == self.version)
            .map(|(_, g)| *g)
            .unwrap_or(FALLBACK_GRADIENT)
    }

    /// Rolls the synthetic error for this request. Only the error version ever
    /// injects; the draw is fresh per call.
    pub fn roll_synthetic_error(&self, rng: &mut impl Rng) -> bool {
        self.version == ERROR_VERSION && rng.gen::<f64>() < ERROR_PROBABILITY
    }
}
