use enginestats::core::hardware::DeviceKind;
use enginestats::core::sampling::{select_all, SampleStatus, Sampler};

use super::support::{cpu, gpu, host, memory, FakeHardware};

#[test]
fn test_cpu_is_smoothed_over_three_cycles() {
    let hw = FakeHardware::new();
    let mut sampler = Sampler::new(hw.tree(vec![host(vec![cpu("/cpu/0")])]));

    let mut outputs = Vec::new();
    for value in [10.0, 20.0, 30.0, 40.0] {
        hw.set("/cpu/0", "CPU Total", value);
        outputs.push(sampler.sample().cpu_percent);
    }

    assert_eq!(outputs, vec![10.0, 15.0, 20.0, 30.0]);
}

#[test]
fn test_gpu_and_memory_pass_through_unsmoothed() {
    let hw = FakeHardware::new();
    let roots = vec![host(vec![
        cpu("/cpu/0"),
        memory("/ram"),
        gpu(DeviceKind::GpuNvidia, "/gpu-nvidia/0"),
    ])];
    let mut sampler = Sampler::new(hw.tree(roots));

    hw.set("/gpu-nvidia/0", "GPU Core", 90.0);
    hw.set("/ram", "Memory Used", 8.0);
    sampler.sample();

    hw.set("/gpu-nvidia/0", "GPU Core", 30.0);
    hw.set("/ram", "Memory Used", 6.04);
    let snapshot = sampler.sample();

    assert_eq!(snapshot.gpu_percent, Some(30.0));
    assert_eq!(snapshot.ram_used_gb, 6.0);
}

#[test]
fn test_missing_gpu_is_distinct_from_idle_gpu() {
    let hw = FakeHardware::new();
    hw.set("/cpu/0", "CPU Total", 5.0);

    let mut without_gpu = Sampler::new(hw.tree(vec![host(vec![cpu("/cpu/0")])]));
    let snapshot = without_gpu.sample();
    assert_eq!(snapshot.gpu_percent, None);
    assert_eq!(snapshot.to_string(), "CPU: 5.0% | GPU: N/A | RAM: 0.0GB");

    hw.set("/gpu-amd/0", "GPU Core", 0.0);
    let mut with_gpu = Sampler::new(hw.tree(vec![host(vec![
        cpu("/cpu/0"),
        gpu(DeviceKind::GpuAmd, "/gpu-amd/0"),
    ])]));
    let snapshot = with_gpu.sample();
    assert_eq!(snapshot.gpu_percent, Some(0.0));
    assert_eq!(snapshot.to_string(), "CPU: 5.0% | GPU: 0.0% | RAM: 0.0GB");
}

#[test]
fn test_last_cpu_total_wins() {
    let hw = FakeHardware::new();
    hw.set("/cpu/0", "CPU Total", 50.0);
    hw.set("/cpu/1", "CPU Total", 70.0);
    let mut tree = hw.tree(vec![cpu("/cpu/0"), cpu("/cpu/1")]);

    tree.refresh().unwrap();
    assert_eq!(select_all(tree.roots()).cpu_load, 70.0);

    let mut sampler = Sampler::new(tree);
    assert_eq!(sampler.sample().cpu_percent, 70.0);
}

#[test]
fn test_no_memory_device_is_not_an_error() {
    let hw = FakeHardware::new();
    hw.set("/cpu/0", "CPU Total", 12.0);
    let mut sampler = Sampler::new(hw.tree(vec![cpu("/cpu/0")]));

    let snapshot = sampler.sample();

    assert_eq!(snapshot.ram_used_gb, 0.0);
    assert_eq!(snapshot.status, SampleStatus::Ok);
}

#[test]
fn test_failed_cycle_does_not_touch_smoothing() {
    let hw = FakeHardware::new();
    let mut sampler = Sampler::new(hw.tree(vec![host(vec![cpu("/cpu/0")])]));

    hw.set("/cpu/0", "CPU Total", 10.0);
    assert!(sampler.sample().is_ok());

    hw.fail_next_refresh();
    hw.set("/cpu/0", "CPU Total", 99.0);
    let failed = sampler.sample();
    match &failed.status {
        SampleStatus::Error(message) => assert!(message.contains("permission denied")),
        SampleStatus::Ok => panic!("expected an error snapshot"),
    }
    assert!(failed.to_string().starts_with("Error: "));
    assert_eq!(sampler.cpu_window().len(), 1);

    hw.set("/cpu/0", "CPU Total", 40.0);
    let recovered = sampler.sample();
    assert!(recovered.is_ok());
    assert_eq!(recovered.cpu_percent, 25.0);
}

#[test]
fn test_consecutive_failures_keep_returning_snapshots() {
    let hw = FakeHardware::new();
    let mut sampler = Sampler::new(hw.tree(vec![cpu("/cpu/0")]));

    for _ in 0..5 {
        hw.fail_next_refresh();
        assert!(!sampler.sample().is_ok());
    }

    assert!(sampler.cpu_window().is_empty());
    hw.set("/cpu/0", "CPU Total", 3.0);
    assert_eq!(sampler.sample().cpu_percent, 3.0);
}

#[test]
fn test_smoothed_value_is_rounded_for_display() {
    let hw = FakeHardware::new();
    hw.set("/cpu/0", "CPU Total", 33.26);
    let mut sampler = Sampler::new(hw.tree(vec![cpu("/cpu/0")]));

    let snapshot = sampler.sample();

    assert_eq!(snapshot.cpu_percent, 33.3);
    assert!(snapshot.to_string().starts_with("CPU: 33.3% |"));
}

#[test]
fn test_double_refresh_selects_same_values() {
    let hw = FakeHardware::new();
    hw.set("/cpu/0", "CPU Total", 42.0);
    hw.set("/ram", "Memory Used", 7.5);
    hw.set("/gpu-nvidia/0", "GPU Core", 18.0);
    let roots = vec![host(vec![
        cpu("/cpu/0"),
        memory("/ram"),
        gpu(DeviceKind::GpuNvidia, "/gpu-nvidia/0"),
    ])];

    let mut once = hw.tree(roots.clone());
    once.refresh().unwrap();

    let mut twice = hw.tree(roots);
    twice.refresh().unwrap();
    twice.refresh().unwrap();

    assert_eq!(select_all(once.roots()), select_all(twice.roots()));
    // 4 devices per refresh, three refreshes in total
    assert_eq!(hw.update_count(), 12);
}

#[test]
fn test_prime_takes_baseline_without_smoothing_it() {
    let hw = FakeHardware::new();
    let mut sampler = Sampler::new(hw.tree(vec![host(vec![cpu("/cpu/0")])]));

    hw.set("/cpu/0", "CPU Total", 12.6);
    sampler.prime().unwrap();
    assert!(sampler.cpu_window().is_empty());

    hw.set("/cpu/0", "CPU Total", 0.0);
    let snapshot = sampler.sample();

    assert_eq!(sampler.cpu_window().len(), 1);
    assert_eq!(snapshot.cpu_percent, 0.0);
}

#[test]
fn test_failed_prime_reports_error_and_leaves_window_empty() {
    let hw = FakeHardware::new();
    let mut sampler = Sampler::new(hw.tree(vec![cpu("/cpu/0")]));

    hw.fail_next_refresh();
    assert!(sampler.prime().is_err());
    assert!(sampler.cpu_window().is_empty());

    hw.set("/cpu/0", "CPU Total", 5.0);
    assert_eq!(sampler.sample().cpu_percent, 5.0);
}

#[test]
fn test_local_machine_warm_up_then_single_sample() {
    let mut sampler = Sampler::new(enginestats::platform::discover_tree(false));

    sampler.prime().unwrap();
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    let snapshot = sampler.sample();

    assert!(snapshot.is_ok());
    assert_eq!(sampler.cpu_window().len(), 1);
}
