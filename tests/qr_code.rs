//! Tests for the QR code URL builder.
use quickchart_formulas::prelude::*;

fn qr_args(ec_level: &str, foreground: &str, background: &str) -> Vec<Option<ParamValue>> {
    vec![
        Some("https://example.com".into()),
        Some("svg".into()),
        Some(2.0.into()),
        None,
        None,
        Some(ec_level.into()),
        Some(foreground.into()),
        Some(background.into()),
        Some(150.0.into()),
    ]
}

#[test]
fn test_ec_level_is_truncated_to_first_character() {
    let url = FormulaPack::default()
        .execute("QRCode", &qr_args("Medium", "000000", "ffffff"))
        .unwrap();
    assert!(url.contains("ecLevel=M&"));
    assert!(!url.contains("Medium"));

    // Case is kept as given.
    let url = FormulaPack::default()
        .execute("QRCode", &qr_args("quartile", "000000", "ffffff"))
        .unwrap();
    assert!(url.contains("ecLevel=q&"));
}

#[test]
fn test_colors_are_renamed_to_dark_and_light() {
    let url = FormulaPack::default()
        .execute("QRCode", &qr_args("High", "000000", "ffffff"))
        .unwrap();
    assert_eq!(
        url,
        "https://quickchart.io/qr?text=https://example.com&format=svg&margin=2\
&ecLevel=H&dark=000000&light=ffffff&size=150"
    );
    assert!(!url.contains("foregroundColor="));
    assert!(!url.contains("backgroundColor="));
}

#[test]
fn test_quotes_and_whitespace_are_escaped() {
    let input = QrCodeInput::new("say \"hi\"\nthere");
    let url = input.url(&PackConfig::default());
    assert_eq!(url, "https://quickchart.io/qr?text=say%20%22hi%22%0Athere");
}

#[test]
fn test_other_characters_pass_through_unescaped() {
    let mut input = QrCodeInput::new("a&b=c#d");
    input.foreground_color = Some("#ff0000".to_string());
    let url = input.url(&PackConfig::default());
    assert_eq!(url, "https://quickchart.io/qr?text=a&b=c#d&dark=#ff0000");
}

#[test]
fn test_empty_ec_level_emits_empty_value() {
    let mut input = QrCodeInput::new("x");
    input.ec_level = Some(String::new());
    assert_eq!(
        input.url(&PackConfig::default()),
        "https://quickchart.io/qr?text=x&ecLevel="
    );
}

#[test]
fn test_numeric_text_is_coerced() {
    let url = FormulaPack::default()
        .execute("QRCode", &[Some(12345.0.into())])
        .unwrap();
    assert_eq!(url, "https://quickchart.io/qr?text=12345");
}
