use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub donations_submitted_total: IntCounterVec,
    pub donation_status_changes_total: IntCounterVec,
    pub volunteers_registered: IntGauge,
    pub assistant_messages_total: IntCounter,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let donations_submitted_total = IntCounterVec::new(
            Opts::new(
                "donations_submitted_total",
                "Donations received through the intake form by urgency",
            ),
            &["urgency"],
        )
        .expect("valid donations_submitted_total metric");

        let donation_status_changes_total = IntCounterVec::new(
            Opts::new(
                "donation_status_changes_total",
                "Donation status changes by new status",
            ),
            &["status"],
        )
        .expect("valid donation_status_changes_total metric");

        let volunteers_registered = IntGauge::new(
            "volunteers_registered",
            "Current number of volunteers in the directory",
        )
        .expect("valid volunteers_registered metric");

        let assistant_messages_total = IntCounter::new(
            "assistant_messages_total",
            "Messages answered by the assistant",
        )
        .expect("valid assistant_messages_total metric");

        registry
            .register(Box::new(donations_submitted_total.clone()))
            .expect("register donations_submitted_total");
        registry
            .register(Box::new(donation_status_changes_total.clone()))
            .expect("register donation_status_changes_total");
        registry
            .register(Box::new(volunteers_registered.clone()))
            .expect("register volunteers_registered");
        registry
            .register(Box::new(assistant_messages_total.clone()))
            .expect("register assistant_messages_total");

        Self {
            registry,
            donations_submitted_total,
            donation_status_changes_total,
            volunteers_registered,
            assistant_messages_total,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::Metrics;

    #[test]
    fn encoded_output_names_every_metric() {
        let metrics = Metrics::new();
        metrics
            .donations_submitted_total
            .with_label_values(&["High"])
            .inc();
        metrics
            .donation_status_changes_total
            .with_label_values(&["Approved"])
            .inc();
        metrics.volunteers_registered.set(3);
        metrics.assistant_messages_total.inc();

        let body = metrics.encode().unwrap();
        assert!(body.contains("donations_submitted_total{urgency=\"High\"} 1"));
        assert!(body.contains("donation_status_changes_total{status=\"Approved\"} 1"));
        assert!(body.contains("volunteers_registered 3"));
        assert!(body.contains("assistant_messages_total 1"));
    }
}
