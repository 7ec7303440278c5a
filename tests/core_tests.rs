// tests/core_tests.rs
use hello_heartbeat::core::testutils::{test_config, RecordingHook};
use hello_heartbeat::core::{ConsoleSink, FnHook, HelloRuntime, MemorySink};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tokio::time::{timeout, Instant};

#[tokio::test(start_paused = true)]
async fn heartbeat_runs_for_ten_seconds() {
    let _ = env_logger::builder().is_test(true).try_init();
    let sink = MemorySink::new();
    let hook = RecordingHook::new(sink.clone());
    let start = Instant::now();
    let mut runtime = HelloRuntime::new(test_config(true, None), sink.clone(), hook.clone()).unwrap();

    let _ = timeout(Duration::from_secs(10), runtime.run()).await;

    let records = sink.records();
    assert!(records.len() >= 10, "expected at least 10 lines, got {}", records.len());
    assert_eq!(hook.sink_len_at_calls(), vec![0]);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.text, "Hello, World!\n");
        assert_eq!(record.at - start, Duration::from_millis(1000 * i as u64));
    }
}

#[tokio::test(start_paused = true)]
async fn closure_hook_sees_no_output_yet() {
    let sink = MemorySink::new();
    let observed = Rc::new(Cell::new(None));
    let observer = sink.clone();
    let slot = observed.clone();
    let hook = FnHook::new("usr_fun", move || slot.set(Some(observer.len())));

    let mut runtime = HelloRuntime::new(test_config(true, Some(2)), sink.clone(), hook).unwrap();
    runtime.run().await;

    assert_eq!(observed.get(), Some(0));
    assert_eq!(sink.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn console_sink_output_is_exact() {
    let mut runtime = HelloRuntime::new(
        test_config(false, Some(3)),
        ConsoleSink::new(Vec::new()),
        hello_heartbeat::UsrFun,
    )
    .unwrap();
    assert_eq!(runtime.run().await, 3);

    let (sink, _) = runtime.into_parts();
    let written = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(written, "Hello, World!\n".repeat(3));
}
