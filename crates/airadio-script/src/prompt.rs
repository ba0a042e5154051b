//! Prompt templates for the script categories
//!
//! Builders take the wall-clock time as an argument so the greeting and the
//! on-air time stay under test control.

use jiff::Zoned;

use crate::feeds::{NewsItem, WeatherReport};
use crate::types::TrackInfo;

/// Formatting directives appended to every prompt sent for completion
const SPEAKABLE_RULES: &str = "Important formatting rules:
1. Do not use any special characters or markdown
2. Write naturally as spoken text
3. Keep sentences clear and concise
4. Use only basic punctuation (periods, commas, question marks)
5. Avoid abbreviations except for common ones
6. Write numbers as they should be spoken
7. No line breaks or multiple spaces";

/// Append the speakable-formatting directives to a prompt
pub fn speakable(prompt: &str) -> String {
    format!("{prompt}\n\n{SPEAKABLE_RULES}")
}

/// Time-of-day greeting with boundaries at 12:00, 17:00, and 22:00
const fn greeting(hour: i8) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        17..=21 => "Good evening",
        _ => "Hello night owls",
    }
}

/// Wall-clock time the way it is read on air
fn on_air_time(now: &Zoned) -> String {
    now.strftime("%I:%M %p").to_string()
}

/// Show opening prompt
pub fn show_intro(now: &Zoned) -> String {
    format!(
        "Act as RJ Shruthi, a vibrant student radio jockey at Digital University Kerala.\n\
         Current time: {time}\n\
         Create a short, energetic radio show intro starting with \"{greeting}!\"\n\
         Keep it brief (2-3 sentences) and mention we're live on Techno Tunes at dee yu kay college FM.\n\
         Make it youthful and engaging.",
        time = on_air_time(now),
        greeting = greeting(now.hour()),
    )
}

/// Track introduction prompt; missing metadata fields default to unknowns
pub fn track_intro(now: &Zoned, track: &TrackInfo) -> String {
    format!(
        "As RJ Shruthi, create a brief and exciting introduction for the next song.\n\
         Current time: {time}\n\
         Song details:\n\
         - Title: {name}\n\
         - Artist: {artists}\n\
         - Album: {album}\n\
         Keep it natural and conversational, like a college RJ speaking to friends.",
        time = on_air_time(now),
        name = track.name.as_deref().unwrap_or("Unknown"),
        artists = track.artists.as_deref().unwrap_or("Unknown Artist"),
        album = track.album.as_deref().unwrap_or("Unknown Album"),
    )
}

/// Weather update prompt
pub fn weather_update(now: &Zoned, weather: &WeatherReport) -> String {
    format!(
        "As RJ Shruthi, deliver a quick weather update for our college campus.\n\
         Current time: {time}\n\
         Weather information: The current temperature is {temperature}°C with {description}.\n\
         Make it sound casual and relevant to student life.",
        time = on_air_time(now),
        temperature = weather.temperature,
        description = weather.description,
    )
}

/// News segment prompt
pub fn news_update(now: &Zoned, item: &NewsItem) -> String {
    format!(
        "As RJ Shruthi, introduce a quick campus news update.\n\
         Current time: {time}\n\
         Headline: {title} (via {source})\n\
         Keep it light and conversational before handing back to the music.",
        time = on_air_time(now),
        title = item.title,
        source = item.source,
    )
}

/// Generic segment transition prompt
pub fn transition(now: &Zoned) -> String {
    format!(
        "As RJ Shruthi, create a casual radio segment transition.\n\
         Current time: {time}\n\
         Keep it brief and engaging, mentioning we're live on Techno Tunes at DUK College FM.",
        time = on_air_time(now),
    )
}
