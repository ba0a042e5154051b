//! Mock weather and news feeds
//!
//! Fixed payloads stand in for real data sources; the news timestamp is the
//! only field that varies between calls.

use jiff::Timestamp;
use serde::Serialize;

/// Campus weather report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub temperature: f64,
    pub description: String,
    pub humidity: u32,
    pub wind_speed: f64,
}

/// Single news headline
#[derive(Debug, Clone, Serialize)]
pub struct NewsItem {
    pub title: String,
    pub timestamp: Timestamp,
    pub source: String,
}

/// Current campus weather
pub fn current_weather() -> WeatherReport {
    WeatherReport {
        temperature: 25.5,
        description: "partly cloudy".to_owned(),
        humidity: 65,
        wind_speed: 3.5,
    }
}

/// Latest campus headlines
pub fn latest_news() -> Vec<NewsItem> {
    vec![NewsItem {
        title: "Local college radio station launches new AI-powered show".to_owned(),
        timestamp: Timestamp::now(),
        source: "College News".to_owned(),
    }]
}
