use chrono::{Local, NaiveDate};

pub const DATE_FMT: &str = "%Y-%m-%d";

// local calendar date used for rent and return stamps
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(str_date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(str_date, DATE_FMT).ok()
}

pub mod date_serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_str(&date.format(DATE_FMT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let str_date: Option<String> = Deserialize::deserialize(deserializer)?;
        match str_date {
            Some(str_date) => NaiveDate::parse_from_str(&str_date, DATE_FMT)
                .map(Some).map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}

pub mod timestamp_serializer {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        DateTime::<Utc>::from_naive_utc_and_offset(*time, Utc).to_rfc3339().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = DateTime::parse_from_rfc3339(&str_time).map_err(D::Error::custom)?;
        Ok(time.naive_utc())
    }
}
