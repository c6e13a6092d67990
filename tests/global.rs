use devlog::global::{self, set_logger};
use devlog::{CaptureBuffer, ColorMode, DevlogConfig, Logger, Sink};
use serde::Serialize;
use serial_test::serial;
use std::thread;

fn install() -> CaptureBuffer {
    let (sink, buffer) = Sink::capture();
    let config = DevlogConfig {
        color: ColorMode::Never,
        source_roots: vec![env!("CARGO_MANIFEST_DIR").to_string()],
        ..Default::default()
    };
    set_logger(Logger::new(config).with_sink(sink));
    buffer
}

#[derive(Serialize)]
struct Peer {
    addr: &'static str,
    ports: Vec<u16>,
}

#[test]
#[serial]
fn test_macros_annotate_caller() {
    let buffer = install();
    let count = 3;

    let first = line!() + 1;
    devlog::info!("started", count);
    let second = line!() + 1;
    devlog::warnf!("{} left", count - 1);
    let third = line!() + 1;
    devlog::error!();

    let out = buffer.contents();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in &lines {
        assert!(line.starts_with("[DEVLOG] "));
    }
    assert!(lines[0].ends_with(&format!(
        "tests/global.rs:{} test_macros_annotate_caller started 3",
        first
    )));
    assert!(lines[1].ends_with(&format!(
        "tests/global.rs:{} test_macros_annotate_caller 2 left",
        second
    )));
    assert!(lines[2].ends_with(&format!(
        "tests/global.rs:{} test_macros_annotate_caller",
        third
    )));
}

#[test]
#[serial]
fn test_closure_reports_enclosing_function() {
    let buffer = install();

    let log = || devlog::infof!("inside {}", "closure");
    log();

    assert!(buffer
        .contents()
        .ends_with(" test_closure_reports_enclosing_function inside closure\n"));
}

#[test]
#[serial]
fn test_disabled_default_is_silent() {
    let buffer = install();
    global::set_enabled(false);
    assert!(!devlog::is_enabled());

    let peer = Peer {
        addr: "10.0.0.2",
        ports: vec![80, 443],
    };
    devlog::info!("peer", devlog::table(&peer));
    devlog::errorf!("{}", devlog::dump(&peer));
    assert_eq!(devlog::table(&peer), "");
    assert_eq!(devlog::dump(&peer), "");
    assert_eq!(buffer.write_count(), 0);

    global::set_enabled(true);
    devlog::info!("back");
    assert_eq!(buffer.write_count(), 1);
}

#[test]
#[serial]
fn test_table_inside_log_line() {
    let buffer = install();
    let peer = Peer {
        addr: "10.0.0.2",
        ports: vec![80, 443],
    };

    devlog::info!("peer", devlog::table(&peer));

    let out = buffer.contents();
    assert!(out.contains(" peer \naddr  | 10.0.0.2 |    \nports | 0        | 80 \n      | 1        | 443\n"));
}

#[test]
#[serial]
fn test_set_output_redirects() {
    install();
    let (sink, buffer) = Sink::capture();
    devlog::set_output(sink);

    devlog::warn!("moved", devlog::redact("token"));

    assert!(buffer.contents().ends_with(" moved to***\n"));
}

#[test]
#[serial]
fn test_concurrent_lines_stay_whole() {
    let buffer = install();

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            thread::spawn(move || {
                for i in 0..50 {
                    devlog::infof!("worker {} line {}", worker, i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let out = buffer.contents();
    assert_eq!(out.lines().count(), 200);
    assert!(out.lines().all(|line| line.starts_with("[DEVLOG] ")));
    assert_eq!(global::logger().config().table_separator, " | ");
}
