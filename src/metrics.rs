use prometheus::{IntCounter, Registry};

pub struct Metrics {
    pub words_processed: IntCounter,
    pub mutations_generated: IntCounter,
}

impl Metrics {
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let words_processed = IntCounter::new("words_processed_total", "Seed words mutated")?;
        let mutations_generated =
            IntCounter::new("mutations_generated_total", "Mutations generated")?;
        registry.register(Box::new(words_processed.clone()))?;
        registry.register(Box::new(mutations_generated.clone()))?;
        Ok(Self {
            words_processed,
            mutations_generated,
        })
    }
}
