use brutekit::affixes::AffixError;
use brutekit::config::ConfigError;
use brutekit::errors::AppError;
use brutekit::padding::PaddingError;
use brutekit::writer::OutputError;

#[test]
fn app_error_from_output_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    let app: AppError = OutputError::Io(io_err).into();
    assert!(matches!(app, AppError::Output(OutputError::Io(_))));
    assert_eq!(app.exit_code(), 1);
}

#[test]
fn app_error_from_padding_load() {
    let app: AppError = PaddingError::EmptyDefaults.into();
    assert!(matches!(app, AppError::Padding(PaddingError::EmptyDefaults)));
    assert_eq!(app.exit_code(), 1);
}

#[test]
fn usage_errors_exit_with_two() {
    let app: AppError = ConfigError::MissingWords.into();
    assert_eq!(app.exit_code(), 2);
    let app: AppError = ConfigError::CustomPaddingsMissing.into();
    assert_eq!(app.exit_code(), 2);
}

#[test]
fn bad_years_are_reported() {
    let app: AppError = AffixError::InvalidYear("abc".into()).into();
    assert_eq!(app.to_string(), "affix error: invalid year 'abc'");
    assert_eq!(app.exit_code(), 1);
}
