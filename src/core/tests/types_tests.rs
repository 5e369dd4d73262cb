use crate::core::types::{swap, ConversionRecord, Mode, ParseModeError, SwapState};

#[test]
fn test_mode_display() {
    assert_eq!(format!("{}", Mode::TextToMorse), "text→morse");
    assert_eq!(format!("{}", Mode::MorseToText), "morse→text");
}

#[test]
fn test_mode_toggle_is_involution() {
    assert_eq!(Mode::TextToMorse.toggled(), Mode::MorseToText);
    assert_eq!(Mode::TextToMorse.toggled().toggled(), Mode::TextToMorse);
}

#[test]
fn test_mode_from_str() {
    assert_eq!("text".parse::<Mode>(), Ok(Mode::TextToMorse));
    assert_eq!("M2T".parse::<Mode>(), Ok(Mode::MorseToText));
    assert_eq!(" morse ".parse::<Mode>(), Ok(Mode::MorseToText));
    assert_eq!(
        "binary".parse::<Mode>(),
        Err(ParseModeError("binary".to_string()))
    );
}

#[test]
fn test_swap_exchanges_buffers_and_direction() {
    let before = SwapState {
        mode: Mode::TextToMorse,
        input: "HI".to_string(),
        output: "....".to_string(),
    };

    let after = swap(before);

    assert_eq!(after.mode, Mode::MorseToText);
    assert_eq!(after.input, "....");
    assert_eq!(after.output, "HI");
}

#[test]
fn test_record_display() {
    let record = ConversionRecord::new(Mode::TextToMorse, "SOS", "... --- ...");
    let display = format!("{}", record);

    assert!(display.contains("text→morse"));
    assert!(display.contains("SOS"));
    assert!(display.contains("... --- ..."));
}

#[test]
fn test_record_serialises_mode_in_kebab_case() {
    let record = ConversionRecord::new(Mode::MorseToText, "...", "S");
    let json = serde_json::to_string(&record).unwrap();

    assert!(json.contains("\"mode\":\"morse-to-text\""));
    assert!(json.contains("\"created_at\""));

    let back: ConversionRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back.mode, Mode::MorseToText);
    assert_eq!(back.output, "S");
}
