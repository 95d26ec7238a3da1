use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Identifies one of the numeric fields reported by a Go benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, AsRefStr, Serialize, Deserialize)]
pub enum MetricName {
    #[strum(serialize = "nsPerOp")]
    #[serde(rename = "nsPerOp")]
    NsPerOp,

    #[strum(serialize = "allocsPerOp")]
    #[serde(rename = "allocsPerOp")]
    AllocsPerOp,

    #[strum(serialize = "bytesPerOp")]
    #[serde(rename = "bytesPerOp")]
    BytesPerOp,

    #[strum(serialize = "MBytesPerS")]
    #[serde(rename = "MBytesPerS")]
    MBytesPerS,
}

impl MetricName {
    /// Whether `name` is one of the known metric identifiers.
    #[must_use]
    pub fn is_valid(name: &str) -> bool {
        name.parse::<Self>().is_ok()
    }

    /// All metric names, in reporting order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    /// The unit suffix used by `go test -bench` for this metric.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::NsPerOp => "ns/op",
            Self::AllocsPerOp => "allocs/op",
            Self::BytesPerOp => "B/op",
            Self::MBytesPerS => "MB/s",
        }
    }

    /// Reverse of [`MetricName::unit`].
    #[must_use]
    pub fn from_unit(unit: &str) -> Option<Self> {
        Self::iter().find(|metric| metric.unit() == unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_config_ids() {
        assert_eq!(MetricName::NsPerOp.to_string(), "nsPerOp");
        assert_eq!(MetricName::AllocsPerOp.to_string(), "allocsPerOp");
        assert_eq!(MetricName::BytesPerOp.to_string(), "bytesPerOp");
        assert_eq!(MetricName::MBytesPerS.to_string(), "MBytesPerS");
    }

    #[test]
    fn test_is_valid() {
        for name in ["nsPerOp", "allocsPerOp", "bytesPerOp", "MBytesPerS"] {
            assert!(MetricName::is_valid(name), "expected {name} to be valid");
        }

        for name in ["unknown", "", "nsperop", "NS_PER_OP"] {
            assert!(!MetricName::is_valid(name), "expected {name} to be invalid");
        }
    }

    #[test]
    fn test_all_is_declaration_order() {
        assert_eq!(
            MetricName::all(),
            vec![MetricName::NsPerOp, MetricName::AllocsPerOp, MetricName::BytesPerOp, MetricName::MBytesPerS]
        );
    }

    #[test]
    fn test_units_round_trip() {
        for metric in MetricName::all() {
            assert_eq!(MetricName::from_unit(metric.unit()), Some(metric));
        }
        assert_eq!(MetricName::from_unit("widgets/op"), None);
    }

    #[test]
    fn test_serde_uses_config_ids() {
        let json = serde_json::to_string(&MetricName::MBytesPerS).unwrap();
        assert_eq!(json, "\"MBytesPerS\"");
        let parsed: MetricName = serde_json::from_str("\"allocsPerOp\"").unwrap();
        assert_eq!(parsed, MetricName::AllocsPerOp);
    }
}
