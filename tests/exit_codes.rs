//! Tests for the process exit status derived from a check outcome.

use dns_propagation::config::{EXIT_ERROR, EXIT_NOT_PROPAGATED, EXIT_PROPAGATED};
use dns_propagation::{exit_code, CheckReport, StopReason};

fn report(propagated: bool, stop_reason: Option<StopReason>) -> CheckReport {
    CheckReport {
        domain: "example.test".to_string(),
        target_ip: "192.0.2.10".parse().unwrap(),
        propagated,
        stop_reason,
        ticks: 3,
        last_result: None,
        bell_rung: false,
        elapsed_seconds: 2.0,
    }
}

#[test]
fn test_propagated_exits_zero() {
    assert_eq!(exit_code(&Ok(report(true, None))), 0);
    assert_eq!(EXIT_PROPAGATED, 0);
}

#[test]
fn test_not_propagated_exits_two() {
    for stop_reason in [
        None,
        Some(StopReason::DeadlineElapsed),
        Some(StopReason::Interrupted),
    ] {
        assert_eq!(
            exit_code(&Ok(report(false, stop_reason))),
            EXIT_NOT_PROPAGATED,
            "stop reason {stop_reason:?}"
        );
    }
    assert_eq!(EXIT_NOT_PROPAGATED, 2);
}

#[test]
fn test_errors_exit_one() {
    let outcome = Err(anyhow::anyhow!("Invalid check target"));
    assert_eq!(exit_code(&outcome), EXIT_ERROR);
    assert_eq!(EXIT_ERROR, 1);
}

#[tokio::test]
async fn test_invalid_input_maps_to_error_exit() {
    let config = dns_propagation::Config {
        target_ip: String::new(),
        domain: "example.test".to_string(),
        ..Default::default()
    };
    let outcome = dns_propagation::run_check(config).await;
    assert_eq!(exit_code(&outcome), EXIT_ERROR);
}
