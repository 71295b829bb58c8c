use std::fmt;

/// 只轉送名稱的事件
pub const SIMPLE_EVENTS: &[&str] = &[
    "kill",
    "death",
    "round_start",
    "match_start",
    "round_end",
    "match_end",
    "spike_defused",
    "spike_detonated",
];

/// 以 `name:data` 形式轉送的事件
pub const PARAMETERIZED_EVENTS: &[&str] = &[
    "round_phase",
    "round_number",
    "score",
    "match_score",
    "round_report",
];

/// A game event as received from the game client. `data` is kept as the raw
/// query string value and is never re-serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    pub data: String,
}

impl Event {
    pub fn new(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    pub fn category(&self) -> EventCategory {
        EventCategory::of(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    Simple,
    Parameterized,
    Unrecognized,
}

impl EventCategory {
    pub fn of(name: &str) -> Self {
        if SIMPLE_EVENTS.contains(&name) {
            EventCategory::Simple
        } else if PARAMETERIZED_EVENTS.contains(&name) {
            EventCategory::Parameterized
        } else {
            EventCategory::Unrecognized
        }
    }
}

/// A newline-terminated command for the microcontroller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireLine(String);

impl WireLine {
    pub(crate) fn new(mut line: String) -> Self {
        line.push('\n');
        Self(line)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for WireLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.trim_end_matches('\n'))
    }
}

/// Fixed reply returned for every event request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Acknowledgement;

impl Acknowledgement {
    pub const BODY: &'static str = "OK";

    pub fn as_str(&self) -> &'static str {
        Self::BODY
    }
}

/// What the bridge did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Forwarded {
    Sent(WireLine),
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_of() {
        assert_eq!(EventCategory::of("kill"), EventCategory::Simple);
        assert_eq!(EventCategory::of("match_start"), EventCategory::Simple);
        assert_eq!(EventCategory::of("score"), EventCategory::Parameterized);
        assert_eq!(EventCategory::of("health"), EventCategory::Unrecognized);
        assert_eq!(EventCategory::of(""), EventCategory::Unrecognized);
        // 大小寫需完全相符
        assert_eq!(EventCategory::of("Kill"), EventCategory::Unrecognized);
    }

    #[test]
    fn test_sets_are_disjoint() {
        for name in SIMPLE_EVENTS {
            assert!(!PARAMETERIZED_EVENTS.contains(name), "{} in both sets", name);
        }
    }

    #[test]
    fn test_wire_line_display_drops_newline() {
        let line = WireLine::new("score:13-7".to_string());
        assert_eq!(line.as_str(), "score:13-7\n");
        assert_eq!(line.to_string(), "score:13-7");
    }
}
