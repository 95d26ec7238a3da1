use crate::rules::MetricName;

/// One benchmark result line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub name: String,
    pub iterations: u64,
    pub ns_per_op: Option<f64>,
    pub allocs_per_op: Option<u64>,
    pub bytes_per_op: Option<u64>,
    pub mb_per_s: Option<f64>,
}

impl RawRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, iterations: u64) -> Self {
        Self {
            name: name.into(),
            iterations,
            ..Self::default()
        }
    }

    /// The value of a metric, if the record reports it.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "allocation counts are far below 2^52")]
    pub fn metric_value(&self, metric: MetricName) -> Option<f64> {
        match metric {
            MetricName::NsPerOp => self.ns_per_op,
            MetricName::AllocsPerOp => self.allocs_per_op.map(|v| v as f64),
            MetricName::BytesPerOp => self.bytes_per_op.map(|v| v as f64),
            MetricName::MBytesPerS => self.mb_per_s,
        }
    }
}

/// The records read from one input, with where they came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputGroup {
    /// Path of the input file, `-` for standard input
    pub source_file: String,

    /// Environment detected in the input, such as `linux amd64 cpu: ...`
    pub environment: String,

    pub records: Vec<RawRecord>,
}
