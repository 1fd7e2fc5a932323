// End-to-end runtime smoke test (headless)
// - Starts wherein::app::run in the background against an unreachable service.
// - Runs with WHEREIN_TEST_HEADLESS=1 to bypass raw TTY setup/restore.
// - Waits briefly to allow initialization and the failed catalog fetch.
// - Asserts the task does not panic. If it finishes, it must return Ok(()).
// - If still running after the wait, aborts the task and asserts the join was a clean cancel.

use std::time::Duration;

use wherein::app::{HEADLESS_ENV, RunOptions};

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    unsafe {
        std::env::set_var(HEADLESS_ENV, "1");
    }

    let options = RunOptions {
        api_base_url: "http://127.0.0.1:9/v3.1".to_string(),
        connect_timeout: Duration::from_millis(200),
        search: Some("ger".to_string()),
        region: Some("europe".to_string()),
        country: Some("fra".to_string()),
        ..RunOptions::default()
    };
    let handle = tokio::spawn(async move { wherein::app::run(options).await });

    tokio::time::sleep(Duration::from_millis(300)).await;

    if handle.is_finished() {
        match handle.await {
            Ok(run_result) => {
                if let Err(e) = run_result {
                    panic!("app::run returned error early: {e:?}");
                }
                return;
            }
            Err(join_err) => panic!("app::run task panicked: {join_err}"),
        }
    }

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run join error should be cancellation, got: {join_err}"
            );
        }
    }
}
