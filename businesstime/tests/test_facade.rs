//! End-to-end use through the façade: settings file → calculator → results.

use std::io::Write;

use approx::assert_abs_diff_eq;
use businesstime::core::utilities::data_parsers::parse_timestamp;
use businesstime::time::{convert_days, days_between, TimeUnit};
use businesstime::{BusinessTimeCalculator, DayFilter, Error, Settings};

#[test]
fn settings_to_results() {
    let mut holidays = tempfile_json(
        r#"[
            {"Date": "20210308", "Holiday Name": "Adelaide Cup Day", "Jurisdiction": "sa"},
            {"Date": "20210308", "Holiday Name": "Labour Day", "Jurisdiction": "vic"}
        ]"#,
    );
    holidays.flush().unwrap();
    let settings = Settings {
        holiday_source: holidays.path().to_path_buf(),
        ..Settings::default()
    };
    let calc = BusinessTimeCalculator::from_settings(&settings).unwrap();

    let from = parse_timestamp("2021-03-04 18:00:00").unwrap();
    let to = parse_timestamp("2021-03-10 08:00:00").unwrap();

    assert_eq!(
        calc.working_days_between("nsw", from, to, DayFilter::WORKING_DAYS).unwrap(),
        4
    );
    assert_eq!(
        calc.working_days_between("sa", from, to, DayFilter::WORKING_DAYS).unwrap(),
        3
    );
    assert_abs_diff_eq!(calc.working_hours_between("nsw", from, to).unwrap(), 30.0);
    assert_abs_diff_eq!(calc.working_hours_between("sa", from, to).unwrap(), 20.0);

    assert!(matches!(
        calc.working_hours_between("qld", from, to),
        Err(Error::InvalidJurisdiction { .. })
    ));

    let days = days_between(from, to);
    assert_eq!(days, 5);
    assert_abs_diff_eq!(convert_days(days, TimeUnit::Hours), 120.0);
}

fn tempfile_json(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}
