use prometheus::core::Collector;
use prometheus::{Encoder, Gauge, IntCounter, Opts, TextEncoder};

const APP_LABEL: &str = "canary-demo";

/// Process-wide request counters plus the derived error-rate gauge.
///
/// No `Registry` here: `gather()` sorts families by name, and the exposition
/// order (requests, errors, rate) is part of the endpoint contract, so the
/// three families are encoded individually in order.
pub struct Metrics {
    pub requests: IntCounter,
    pub errors: IntCounter,
    error_rate: Gauge,
}

impl Metrics {
    pub fn new(version: &str) -> Self {
        let labeled = |name: &str, help: &str| {
            Opts::new(name, help)
                .const_label("app", APP_LABEL)
                .const_label("version", version)
        };

        let requests =
            IntCounter::with_opts(labeled("http_requests_total", "Total HTTP requests")).unwrap();
        let errors =
            IntCounter::with_opts(labeled("http_errors_total", "Total HTTP errors")).unwrap();
        let error_rate =
            Gauge::with_opts(labeled("http_error_rate_percent", "HTTP error rate percentage"))
                .unwrap();

        Metrics {
            requests,
            errors,
            error_rate,
        }
    }

    /// Error rate as a percentage of all requests, zero before any traffic.
    pub fn error_rate_percent(&self) -> f64 {
        let requests = self.requests.get();
        if requests == 0 {
            return 0.0;
        }
        self.errors.get() as f64 / requests as f64 * 100.0
    }

    /// Renders the Prometheus text exposition, fixed order:
    /// `http_requests_total`, `http_errors_total`, `http_error_rate_percent`.
    pub fn render(&self) -> String {
        self.error_rate.set(self.error_rate_percent());

        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        for collector in [
            &self.requests as &dyn Collector,
            &self.errors,
            &self.error_rate,
        ] {
            encoder.encode(&collector.collect(), &mut buffer).unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }
}
