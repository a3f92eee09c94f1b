use chatgenius::domain::ChatMode;

#[test]
fn given_no_ai_string_when_parsing_then_returns_no_ai_mode() {
    assert_eq!(ChatMode::try_from("no_ai"), Ok(ChatMode::NoAi));
}

#[test]
fn given_ai_string_when_parsing_then_returns_ai_mode() {
    assert_eq!(ChatMode::try_from("ai"), Ok(ChatMode::Ai));
}

#[test]
fn given_unknown_string_when_parsing_then_returns_error() {
    assert!(ChatMode::try_from("turbo").is_err());
}

#[test]
fn given_modes_when_formatting_then_round_trips_wire_values() {
    assert_eq!(ChatMode::NoAi.as_str(), "no_ai");
    assert_eq!(ChatMode::Ai.as_str(), "ai");
    assert_eq!(ChatMode::Ai.to_string(), "ai");
}

#[test]
fn given_modes_when_labelling_then_uses_human_names() {
    assert_eq!(ChatMode::NoAi.label(), "Basic");
    assert_eq!(ChatMode::Ai.label(), "AI");
}
