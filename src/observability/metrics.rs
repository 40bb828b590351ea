use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub quotes_total: IntCounterVec,
    pub free_deliveries_total: IntCounter,
    pub quote_distance_km: Histogram,
    pub quote_fee: Histogram,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let quotes_total = IntCounterVec::new(
            Opts::new("quotes_total", "Total fee quotes by pricing strategy"),
            &["strategy"],
        )
        .expect("valid quotes_total metric");

        let free_deliveries_total = IntCounter::new(
            "free_deliveries_total",
            "Quotes where the free delivery threshold waived the fee",
        )
        .expect("valid free_deliveries_total metric");

        let quote_distance_km = Histogram::with_opts(
            HistogramOpts::new("quote_distance_km", "Quoted delivery distance in kilometers")
                .buckets(vec![0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0]),
        )
        .expect("valid quote_distance_km metric");

        let quote_fee = Histogram::with_opts(
            HistogramOpts::new("quote_fee", "Quoted delivery fee")
                .buckets(vec![1.0, 3.0, 5.0, 10.0, 20.0, 50.0]),
        )
        .expect("valid quote_fee metric");

        registry
            .register(Box::new(quotes_total.clone()))
            .expect("register quotes_total");
        registry
            .register(Box::new(free_deliveries_total.clone()))
            .expect("register free_deliveries_total");
        registry
            .register(Box::new(quote_distance_km.clone()))
            .expect("register quote_distance_km");
        registry
            .register(Box::new(quote_fee.clone()))
            .expect("register quote_fee");

        Self {
            registry,
            quotes_total,
            free_deliveries_total,
            quote_distance_km,
            quote_fee,
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
