// tests/integration/library.rs
use std::time::Duration;

use comm_lines::{app, config::RunConfig};
use comm_lines_domain::CompareOptions;

use crate::common::{FRUIT_A, FRUIT_B, Fixture};

fn config(first: String, second: String, options: CompareOptions) -> RunConfig {
    RunConfig { first, second, options, timeout: None }
}

#[test]
fn run_with_output_returns_totals() {
    let fx = Fixture::new();
    let cfg = config(fx.write_lines("a.txt", FRUIT_A), fx.write_lines("b.txt", FRUIT_B), CompareOptions::default());

    let mut out = Vec::new();
    let totals = app::run_with_output(&cfg, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "apple\n\t\tbanana\n\t\tcherry\n\tdate\n");
    assert_eq!(totals.to_string(), "1\t1\t2\ttotal");
}

#[test]
fn rerunning_gives_identical_results() {
    let fx = Fixture::new();
    let options = CompareOptions { suppress_second: true, total: true, ..Default::default() };
    let cfg = config(fx.write_lines("a.txt", FRUIT_A), fx.write_lines("b.txt", FRUIT_B), options);

    let mut first = Vec::new();
    let mut second = Vec::new();
    let t1 = app::run_with_output(&cfg, &mut first).unwrap();
    let t2 = app::run_with_output(&cfg, &mut second).unwrap();

    assert_eq!(first, second);
    assert_eq!(t1, t2);
    assert_eq!(String::from_utf8(first).unwrap(), "apple\n\tbanana\n\tcherry\n1\t1\t2\ttotal\n");
}

#[test]
fn generous_timeout_does_not_interfere() {
    let fx = Fixture::new();
    let mut cfg = config(fx.write_lines("a.txt", FRUIT_A), fx.write_lines("b.txt", FRUIT_B), CompareOptions::default());
    cfg.timeout = Some(Duration::from_secs(3600));

    let mut out = Vec::new();
    let totals = app::run_with_output(&cfg, &mut out).unwrap();
    assert_eq!(totals.common, 2usize);
}

#[test]
fn huge_timeout_runs_without_a_deadline() {
    let fx = Fixture::new();
    let mut cfg = config(fx.write_lines("a.txt", FRUIT_A), fx.write_lines("b.txt", FRUIT_B), CompareOptions::default());
    cfg.timeout = Some(Duration::from_secs(u64::MAX));

    let mut out = Vec::new();
    let totals = app::run_with_output(&cfg, &mut out).unwrap();
    assert_eq!(totals.to_string(), "1\t1\t2\ttotal");
}
