use std::time::Duration;

use enginestats::core::sampling::{Sampler, SamplerRuntime};

use super::support::{cpu, FakeHardware};

#[test]
fn test_runtime_publishes_snapshots() {
    let hw = FakeHardware::new();
    hw.set("/cpu/0", "CPU Total", 20.0);
    let sampler = Sampler::new(hw.tree(vec![cpu("/cpu/0")]));

    let mut runtime = SamplerRuntime::start(sampler, Duration::from_millis(10)).unwrap();

    for _ in 0..3 {
        let snapshot = runtime.recv().expect("sampling task stopped early");
        assert!(snapshot.is_ok());
        assert_eq!(snapshot.cpu_percent, 20.0);
    }

    runtime.shutdown();
}

#[test]
fn test_runtime_survives_failed_cycle() {
    let hw = FakeHardware::new();
    hw.set("/cpu/0", "CPU Total", 8.0);
    hw.fail_next_refresh();
    let sampler = Sampler::new(hw.tree(vec![cpu("/cpu/0")]));

    let mut runtime = SamplerRuntime::start(sampler, Duration::from_millis(250)).unwrap();

    let first = runtime.recv().unwrap();
    assert!(!first.is_ok());

    let second = runtime.recv().unwrap();
    assert!(second.is_ok());
    assert_eq!(second.cpu_percent, 8.0);

    runtime.shutdown();
}

#[test]
fn test_recv_returns_none_after_shutdown_signal() {
    let hw = FakeHardware::new();
    let sampler = Sampler::new(hw.tree(vec![cpu("/cpu/0")]));

    let mut runtime = SamplerRuntime::start(sampler, Duration::from_millis(10)).unwrap();
    runtime.shutdown_handle().send(()).unwrap();

    // At most a snapshot already in flight, then the channel closes
    let mut remaining = 0;
    while runtime.recv().is_some() {
        remaining += 1;
        assert!(remaining <= 2);
    }
}
