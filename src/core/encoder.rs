use crate::core::{Event, EventCategory, WireLine};

/// 將事件轉成送往微控制器的一行指令；未知事件回傳 `None`
pub fn encode(event: &Event) -> Option<WireLine> {
    match event.category() {
        EventCategory::Simple => Some(WireLine::new(event.name.clone())),
        EventCategory::Parameterized => {
            Some(WireLine::new(format!("{}:{}", event.name, event.data)))
        }
        EventCategory::Unrecognized => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{PARAMETERIZED_EVENTS, SIMPLE_EVENTS};

    #[test]
    fn test_simple_events_ignore_data() {
        for name in SIMPLE_EVENTS {
            for data in ["", "anything", r#"{"headshot":true}"#] {
                let line = encode(&Event::new(*name, data)).unwrap();
                assert_eq!(line.as_str(), format!("{}\n", name));
            }
        }
    }

    #[test]
    fn test_parameterized_events_carry_raw_data() {
        for name in PARAMETERIZED_EVENTS {
            let line = encode(&Event::new(*name, "13-7")).unwrap();
            assert_eq!(line.as_str(), format!("{}:13-7\n", name));
        }
    }

    #[test]
    fn test_json_data_is_not_reserialized() {
        let raw = r#"{ "won" : true,  "reason":"elimination" }"#;
        let line = encode(&Event::new("round_report", raw)).unwrap();
        assert_eq!(line.as_str(), format!("round_report:{}\n", raw));
    }

    #[test]
    fn test_parameterized_with_empty_data() {
        let line = encode(&Event::new("round_phase", "")).unwrap();
        assert_eq!(line.as_str(), "round_phase:\n");
    }

    #[test]
    fn test_unrecognized_events_produce_nothing() {
        assert!(encode(&Event::new("unknown_event", "x")).is_none());
        assert!(encode(&Event::new("health", "100")).is_none());
        assert!(encode(&Event::default()).is_none());
    }
}
