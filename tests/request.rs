use std::fs;

use vnav_calculator::config::{ConfigError, RequestFormat, load_request, parse_request};
use vnav_calculator::export::ReportValue;
use vnav_calculator::{
    CalculationError, CalculationOutcome, CalculationRequest, ThreeToOneRuleInput, calculate,
};

#[test]
fn toml_request_runs_vertical_rate() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("descent.toml");
    fs::write(
        &path,
        "type = \"vertical_rate\"\ncurrentAltitude = 10000\ntargetAltitude = 2000\ngroundSpeed = 180\ndistance = 30\n",
    )
    .expect("write request");

    let request = load_request(&path).expect("load toml request");
    assert_eq!(request.kind(), "vertical_rate");

    match calculate(&request).expect("calculate") {
        CalculationOutcome::VerticalRate { input, rate_fpm } => {
            assert_eq!(rate_fpm, -800);
            assert_eq!(input.ground_speed, 180.0);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn yaml_request_runs_three_to_one() {
    let request = parse_request(
        "type: three_to_one\ncurrentAltitude: 10000\ntargetAltitude: 2000\n",
        RequestFormat::Yaml,
    )
    .expect("parse yaml request");
    assert_eq!(
        request,
        CalculationRequest::ThreeToOne(ThreeToOneRuleInput {
            current_altitude: 10_000.0,
            target_altitude: 2_000.0,
        })
    );

    let outcome = calculate(&request).expect("calculate");
    let report = outcome.report();
    assert_eq!(report.kind, "three_to_one");
    assert_eq!(report.unit, "NM");
    assert!(matches!(report.value, ReportValue::Real(v) if v == 24.0));
}

#[test]
fn invalid_values_load_but_fail_to_calculate() {
    let request = parse_request(
        "type = \"vertical_rate\"\ncurrentAltitude = 5000\ntargetAltitude = 10000\ngroundSpeed = 200\ndistance = 0\n",
        RequestFormat::Toml,
    )
    .expect("parse toml request");
    assert!(matches!(
        calculate(&request),
        Err(CalculationError::Validation(_))
    ));
}

#[test]
fn climb_request_for_descent_point_is_a_logic_error() {
    let request = parse_request(
        "type: three_to_one\ncurrentAltitude: 2000\ntargetAltitude: 5000\n",
        RequestFormat::Yaml,
    )
    .expect("parse yaml request");
    assert!(matches!(calculate(&request), Err(CalculationError::Logic(_))));
}

#[test]
fn missing_field_is_a_parse_error() {
    let err = parse_request(
        "type: vertical_rate\ncurrentAltitude: 2000\ntargetAltitude: 5000\n",
        RequestFormat::Yaml,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)), "{err}");
}

#[test]
fn unknown_type_is_a_parse_error() {
    let err = parse_request("type = \"holding\"\n", RequestFormat::Toml).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)), "{err}");
}

#[test]
fn unsupported_extension_is_rejected() {
    let err = load_request("request.json").unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_request(dir.path().join("absent.yml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn format_is_picked_from_extension() {
    use std::path::Path;
    assert_eq!(
        RequestFormat::from_path(Path::new("a.toml")),
        Some(RequestFormat::Toml)
    );
    assert_eq!(
        RequestFormat::from_path(Path::new("a.yml")),
        Some(RequestFormat::Yaml)
    );
    assert_eq!(RequestFormat::from_path(Path::new("a")), None);
}
