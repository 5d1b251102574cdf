use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::America::Sao_Paulo;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
/// SaoPauloTZDateTime stores the time as `DateTime<UTC>` for easier serialization
/// and deserialization
pub struct SaoPauloTZDateTime(DateTime<Utc>);

impl SaoPauloTZDateTime {
    pub fn now() -> Self {
        SaoPauloTZDateTime(Utc::now())
    }

    pub fn to_date_time(&self) -> DateTime<Tz> {
        Sao_Paulo.from_utc_datetime(&self.0.naive_utc())
    }

    /// Time elapsed since `self`, never negative.
    pub fn elapsed_since(&self, now: &SaoPauloTZDateTime) -> Duration {
        std::cmp::max(now.0 - self.0, Duration::zero())
    }
}

impl From<DateTime<Utc>> for SaoPauloTZDateTime {
    fn from(data: DateTime<Utc>) -> SaoPauloTZDateTime {
        SaoPauloTZDateTime(data)
    }
}
